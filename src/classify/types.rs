use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TriageError;
use crate::input::EffectiveInput;
use crate::language::Language;

/// Shown when a text submission is attempted with an empty buffer and no
/// attachment.
pub const EMPTY_INPUT_MSG: &str = "Cole o conteúdo do email ou selecione um arquivo .pdf/.txt";

/// The two categories the service can assign. The Portuguese labels are
/// the wire format and the display strings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    #[serde(rename = "Produtivo")]
    Productive,
    #[serde(rename = "Improdutivo")]
    Unproductive,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Productive => "Produtivo",
            Category::Unproductive => "Improdutivo",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Produtivo" => Some(Category::Productive),
            "Improdutivo" => Some(Category::Unproductive),
            _ => None,
        }
    }
}

/// One of the two wire shapes a submission can take. `subject` is carried
/// for the service's request schema; this client always sends it empty.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationRequest {
    Text {
        subject: String,
        body: String,
        language: Language,
    },
    File {
        file_name: String,
        bytes: Vec<u8>,
        language: Language,
    },
}

impl ClassificationRequest {
    /// Builds the request from the resolved input. Text mode requires a
    /// non-blank body; a file is sent as-is regardless of the buffer.
    pub fn from_input(input: EffectiveInput, language: Language) -> Result<Self, TriageError> {
        match input {
            EffectiveInput::File { name, bytes } => Ok(ClassificationRequest::File {
                file_name: name,
                bytes,
                language,
            }),
            EffectiveInput::Text(body) => {
                if body.trim().is_empty() {
                    return Err(TriageError::Validation(EMPTY_INPUT_MSG.to_string()));
                }
                Ok(ClassificationRequest::Text {
                    subject: String::new(),
                    body,
                    language,
                })
            }
        }
    }

    pub fn language(&self) -> Language {
        match self {
            ClassificationRequest::Text { language, .. }
            | ClassificationRequest::File { language, .. } => *language,
        }
    }
}

/// Service response as it arrives. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawClassification {
    pub category: Category,
    pub confidence: f64,
    pub suggested_reply: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub meta: Option<Map<String, Value>>,
}

/// Normalized result handed to the shell and recorded in history.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub category: Category,
    pub confidence: f64,
    pub suggested_reply: String,
    pub language: String,
    pub meta: HashMap<String, String>,
}

impl ClassificationResult {
    /// Confidence as the UI renders it, e.g. `0.91` -> `"91.0%"`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}
