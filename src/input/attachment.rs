//! Pending attachment model and the extension rules for it.

use crate::error::TriageError;

pub const UNSUPPORTED_FORMAT_MSG: &str = "Formato não suportado. Use .pdf ou .txt";

/// File kinds the client accepts. `.txt` is extracted locally; `.pdf` is
/// forwarded raw for server-side extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Txt,
    Pdf,
}

impl AttachmentKind {
    /// Case-insensitive match on the final extension. `None` for
    /// anything the client does not accept.
    pub fn from_name(name: &str) -> Option<Self> {
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_lowercase().as_str() {
            "txt" => Some(AttachmentKind::Txt),
            "pdf" => Some(AttachmentKind::Pdf),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            AttachmentKind::Txt => "text/plain",
            AttachmentKind::Pdf => "application/pdf",
        }
    }
}

/// The single file tracked for submission. At most one exists at a time;
/// a fresh attachment replaces the prior one.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub name: String,
    pub kind: AttachmentKind,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, TriageError> {
        let name = name.into();
        let kind = AttachmentKind::from_name(&name)
            .ok_or_else(|| TriageError::Validation(UNSUPPORTED_FORMAT_MSG.to_string()))?;
        Ok(Self { name, kind, bytes })
    }

    /// Text extracted client-side. Only `.txt` content is decoded (lossy,
    /// matching what a browser-side text read produces); PDFs are left to
    /// the service.
    pub fn extracted_text(&self) -> Option<String> {
        match self.kind {
            AttachmentKind::Txt => Some(String::from_utf8_lossy(&self.bytes).into_owned()),
            AttachmentKind::Pdf => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_txt_and_pdf_case_insensitively() {
        assert_eq!(AttachmentKind::from_name("mail.txt"), Some(AttachmentKind::Txt));
        assert_eq!(AttachmentKind::from_name("Report.PDF"), Some(AttachmentKind::Pdf));
        assert_eq!(AttachmentKind::from_name("backup.tar.txt"), Some(AttachmentKind::Txt));
    }

    #[test]
    fn rejects_other_extensions() {
        assert_eq!(AttachmentKind::from_name("mail.docx"), None);
        assert_eq!(AttachmentKind::from_name("noextension"), None);

        let err = Attachment::new("mail.docx", vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, TriageError::Validation(_)));
        assert_eq!(err.to_string(), UNSUPPORTED_FORMAT_MSG);
    }

    #[test]
    fn extracts_text_only_from_txt() {
        let txt = Attachment::new("mail.txt", "olá".as_bytes().to_vec()).unwrap();
        assert_eq!(txt.extracted_text().as_deref(), Some("olá"));

        let pdf = Attachment::new("mail.pdf", vec![0x25, 0x50, 0x44, 0x46]).unwrap();
        assert_eq!(pdf.extracted_text(), None);
    }

    #[test]
    fn txt_decode_is_lossy_not_fallible() {
        let txt = Attachment::new("mail.txt", vec![0x6f, 0xff, 0x69]).unwrap();
        let text = txt.extracted_text().unwrap();
        assert!(text.starts_with('o') && text.ends_with('i'));
    }
}
