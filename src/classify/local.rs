//! Rules-based stand-in for the remote service, used in development and
//! as a test double.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::TriageError;
use crate::language::Language;

use super::normalize::canned_unproductive_reply;
use super::types::{Category, ClassificationRequest, RawClassification};
use super::Classifier;

const SUPPORT_REPLY_PT: &str = "Olá,\n\nRecebemos sua mensagem. Para agilizar, confirme o número do protocolo e, se possível, inclua um print do erro.\n\nAtenciosamente,\nEquipe de Atendimento";
const SUPPORT_REPLY_EN: &str = "Hi!\n\nWe got your message. To speed things up, please confirm the ticket number and include a screenshot if available.\n\nBest regards,\nSupport Team";

/// Classifies by a single keyword rule: any text containing "feliz"
/// (case-insensitive) is Unproductive, everything else Productive.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClassifier;

#[async_trait]
impl Classifier for LocalClassifier {
    fn name(&self) -> &str {
        "local"
    }

    async fn classify(
        &self,
        request: ClassificationRequest,
    ) -> Result<RawClassification, TriageError> {
        let (text, language) = match request {
            ClassificationRequest::Text { body, language, .. } => (body, language),
            // File bytes are decoded lossily; the local rule only needs text.
            ClassificationRequest::File { bytes, language, .. } => {
                (String::from_utf8_lossy(&bytes).into_owned(), language)
            }
        };

        let unproductive = text.to_lowercase().contains("feliz");
        let category = if unproductive {
            Category::Unproductive
        } else {
            Category::Productive
        };

        let suggested_reply = if unproductive {
            canned_unproductive_reply(language.as_str()).to_string()
        } else if language == Language::En {
            SUPPORT_REPLY_EN.to_string()
        } else {
            SUPPORT_REPLY_PT.to_string()
        };

        let mut meta = Map::new();
        meta.insert("case_id".to_string(), Value::String("1234-ABCD".to_string()));

        Ok(RawClassification {
            category,
            confidence: 0.82,
            suggested_reply,
            language: Some(language.as_str().to_string()),
            meta: Some(meta),
        })
    }
}
