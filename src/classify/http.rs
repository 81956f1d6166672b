//! reqwest transport for the remote classification service.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::multipart;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::TriageError;
use crate::input::AttachmentKind;

use super::types::{ClassificationRequest, RawClassification};
use super::Classifier;

/// Header carrying the user's language choice verbatim (even `"auto"`).
pub const USER_LANG_HEADER: &str = "X-User-Lang";

const CLASSIFY_TEXT_FAILED: &str = "Falha na classificação";
const CLASSIFY_FILE_FAILED: &str = "Falha no upload";

#[derive(Serialize)]
struct TextPayload<'a> {
    subject: &'a str,
    body: &'a str,
    language: &'a str,
}

/// Client for the two classification endpoints. One call per submission;
/// the configured deadline doubles as the cancellation bound for the
/// in-flight request.
#[derive(Debug, Clone)]
pub struct HttpClassifier {
    client: reqwest::Client,
    base_url: String,
    deadline: Duration,
}

impl HttpClassifier {
    pub fn new(config: &ApiConfig) -> Result<Self, TriageError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| {
                TriageError::Transport(format!("falha ao montar o cliente HTTP: {err}"))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            deadline: config.timeout,
        })
    }

    async fn decode(
        &self,
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<RawClassification, TriageError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = if body.trim().is_empty() {
                fallback.to_string()
            } else {
                body
            };
            return Err(TriageError::Service {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<RawClassification>()
            .await
            .map_err(|err| TriageError::Transport(format!("resposta inválida do serviço: {err}")))
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    fn name(&self) -> &str {
        "http"
    }

    async fn classify(
        &self,
        request: ClassificationRequest,
    ) -> Result<RawClassification, TriageError> {
        match request {
            ClassificationRequest::Text {
                subject,
                body,
                language,
            } => {
                debug!("POST /classify ({} chars)", body.chars().count());
                let payload = TextPayload {
                    subject: &subject,
                    body: &body,
                    language: language.as_str(),
                };
                let response = self
                    .client
                    .post(format!("{}/classify", self.base_url))
                    .header(USER_LANG_HEADER, language.as_str())
                    .header(ACCEPT_LANGUAGE, language.accept_language())
                    .json(&payload)
                    .send()
                    .await
                    .map_err(|err| TriageError::from_request_error(err, self.deadline))?;
                self.decode(response, CLASSIFY_TEXT_FAILED).await
            }
            ClassificationRequest::File {
                file_name,
                bytes,
                language,
            } => {
                debug!("POST /classify-file ({file_name}, {} bytes)", bytes.len());
                let mime = AttachmentKind::from_name(&file_name)
                    .map(|kind| kind.mime())
                    .unwrap_or("application/octet-stream");
                let part = multipart::Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(mime)
                    .map_err(|err| {
                        TriageError::Transport(format!("falha ao montar o upload: {err}"))
                    })?;
                let form = multipart::Form::new()
                    .part("file", part)
                    .text("language", language.as_str());

                let response = self
                    .client
                    .post(format!("{}/classify-file", self.base_url))
                    .header(USER_LANG_HEADER, language.as_str())
                    .header(ACCEPT_LANGUAGE, language.accept_language())
                    .multipart(form)
                    .send()
                    .await
                    .map_err(|err| TriageError::from_request_error(err, self.deadline))?;
                self.decode(response, CLASSIFY_FILE_FAILED).await
            }
        }
    }
}
