//! Maps raw service output onto the client result shape.

use serde_json::Value;

use crate::language::Language;

use super::types::{Category, ClassificationResult, RawClassification};

/// Canned acknowledgments substituted for every Unproductive result.
pub const UNPRODUCTIVE_REPLY_PT: &str = "Obrigado pela mensagem! Registramos seu contato.";
pub const UNPRODUCTIVE_REPLY_EN: &str = "Thanks for reaching out! We've recorded your message.";

/// Picks the canned acknowledgment for a resolved language code.
/// English-tagged codes get the English template, everything else
/// (including `"auto"`) the Portuguese one.
pub fn canned_unproductive_reply(language: &str) -> &'static str {
    if language.to_lowercase().starts_with("en") {
        UNPRODUCTIVE_REPLY_EN
    } else {
        UNPRODUCTIVE_REPLY_PT
    }
}

/// Normalizes a raw classification against the user's language choice.
///
/// Unproductive results have their suggested reply replaced with the
/// canned acknowledgment; the service-provided text is discarded on
/// purpose. Productive replies pass through untouched.
pub fn normalize(raw: RawClassification, chosen: Language) -> ClassificationResult {
    let language = raw
        .language
        .filter(|code| !code.trim().is_empty())
        .unwrap_or_else(|| chosen.as_str().to_string());

    let suggested_reply = match raw.category {
        Category::Unproductive => canned_unproductive_reply(&language).to_string(),
        Category::Productive => raw.suggested_reply,
    };

    let meta = raw
        .meta
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(text) => text,
                other => other.to_string(),
            };
            (key, value)
        })
        .collect();

    ClassificationResult {
        category: raw.category,
        confidence: raw.confidence.clamp(0.0, 1.0),
        suggested_reply,
        language,
        meta,
    }
}
