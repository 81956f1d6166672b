//! Output-language selection for classification requests.

use serde::{Deserialize, Serialize};

/// Language the user asked the service to answer in. `Auto` delegates
/// detection to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Auto,
    Pt,
    En,
}

impl Default for Language {
    fn default() -> Self {
        Language::Auto
    }
}

impl Language {
    /// Wire code sent in request bodies and the `X-User-Lang` header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Auto => "auto",
            Language::Pt => "pt",
            Language::En => "en",
        }
    }

    /// Lenient parse of selector values. Accepts the regional spellings
    /// the service itself normalizes (`pt-BR`, `en-US`, ...).
    pub fn from_str(s: &str) -> Option<Self> {
        let code = s.trim().to_lowercase();
        match code.as_str() {
            "auto" => Some(Language::Auto),
            "pt" | "pt-br" | "pt_br" => Some(Language::Pt),
            _ if code.starts_with("en") => Some(Language::En),
            _ => None,
        }
    }

    pub fn all() -> Vec<Language> {
        vec![Language::Auto, Language::Pt, Language::En]
    }

    /// Value for the standard `Accept-Language` header: a locale-range
    /// wildcard when the user left detection to the service, the literal
    /// code otherwise.
    pub fn accept_language(&self) -> &'static str {
        match self {
            Language::Auto => "*;q=0.5",
            Language::Pt => "pt",
            Language::En => "en",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_regional_spellings() {
        assert_eq!(Language::from_str("pt-BR"), Some(Language::Pt));
        assert_eq!(Language::from_str("pt_br"), Some(Language::Pt));
        assert_eq!(Language::from_str("en-US"), Some(Language::En));
        assert_eq!(Language::from_str("AUTO"), Some(Language::Auto));
        assert_eq!(Language::from_str("fr"), None);
    }

    #[test]
    fn accept_language_uses_wildcard_for_auto() {
        assert_eq!(Language::Auto.accept_language(), "*;q=0.5");
        assert_eq!(Language::Pt.accept_language(), "pt");
        assert_eq!(Language::En.accept_language(), "en");
    }

    #[test]
    fn default_is_auto() {
        assert_eq!(Language::default(), Language::Auto);
        assert_eq!(Language::default().as_str(), "auto");
    }
}
