//! Builds the `mailto:` URL used to hand a suggested reply to the user's
//! email client.

/// Percent-encodes subject and body into a `mailto:` URL. Line endings
/// are normalized to CRLF first; some desktop clients drop bare LF
/// bodies.
pub fn mailto_reply_url(to: &str, subject: &str, body: &str) -> String {
    let normalized = body.replace("\r\n", "\n").replace('\n', "\r\n");
    format!(
        "mailto:{to}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(&normalized)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_subject_and_body() {
        let url = mailto_reply_url("suporte@example.com", "Resposta automática", "Olá!");
        assert_eq!(
            url,
            "mailto:suporte@example.com?subject=Resposta%20autom%C3%A1tica&body=Ol%C3%A1%21"
        );
    }

    #[test]
    fn newlines_become_crlf_before_encoding() {
        let url = mailto_reply_url("a@b.c", "s", "linha 1\nlinha 2");
        assert!(url.contains("linha%201%0D%0Alinha%202"));

        // Already CRLF stays CRLF, never doubled.
        let url = mailto_reply_url("a@b.c", "s", "linha 1\r\nlinha 2");
        assert!(url.contains("linha%201%0D%0Alinha%202"));
        assert!(!url.contains("%0D%0D"));
    }
}
