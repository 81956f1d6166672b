//! Typed errors for the triage pipeline
//!
//! Every failure in the submission path maps to one of these variants so
//! the shell can react without string matching. None of them are fatal:
//! the busy indicator is reset on every path and prior input/history are
//! left intact for a manual retry.

use std::time::Duration;

use thiserror::Error;

/// Errors surfaced by the triage pipeline and its stores.
///
/// User-facing `Display` strings keep the product's Portuguese phrasing;
/// log lines at the call sites carry the technical detail in English.
#[derive(Debug, Error)]
pub enum TriageError {
    /// Rejected before any network call: empty text with no attachment,
    /// or an unsupported file extension (which also clears the store).
    #[error("{0}")]
    Validation(String),

    /// Local file read failure. Attachment state is left as it was.
    #[error("{0}")]
    Io(String),

    /// Network failure or the submission deadline elapsed. The two cases
    /// are told apart only by the message text.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response from the classification service. `detail` is the
    /// response body read best-effort and is shown verbatim.
    #[error("{detail}")]
    Service { status: u16, detail: String },

    /// A submission is already in flight; the trigger should have been
    /// disabled. Admission control only, never sent over the wire.
    #[error("já existe uma classificação em andamento")]
    Busy,

    /// Settings or history store failure outside the submission path.
    #[error("{0}")]
    Storage(#[from] anyhow::Error),
}

impl TriageError {
    /// Maps a reqwest send error onto the transport variant, naming the
    /// deadline when the request was cancelled by the timeout.
    pub fn from_request_error(err: reqwest::Error, deadline: Duration) -> Self {
        if err.is_timeout() {
            TriageError::Transport(format!(
                "a requisição excedeu o tempo limite de {}s",
                deadline.as_secs()
            ))
        } else if err.is_connect() {
            TriageError::Transport(format!("falha de conexão com o serviço: {err}"))
        } else {
            TriageError::Transport(format!("falha de rede: {err}"))
        }
    }

    /// True for failures worth a retry-oriented message (the service may
    /// recover); validation and IO problems need corrected input instead.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TriageError::Transport(_) | TriageError::Service { .. } | TriageError::Busy
        )
    }
}
