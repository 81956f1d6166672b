use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::error::TriageError;

use super::attachment::{Attachment, AttachmentKind, UNSUPPORTED_FORMAT_MSG};
use super::state::{EffectiveInput, InputMode, InputState};

/// Flattened view of the input machine for shell binding.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InputSnapshot {
    pub mode: InputMode,
    pub text: String,
    pub file_name: Option<String>,
    pub attempted_text: Option<String>,
}

/// Async front of the input state machine. Cloneable; all clones share
/// the same state.
#[derive(Clone)]
pub struct InputController {
    state: Arc<Mutex<InputState>>,
}

impl InputController {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(InputState::new())),
        }
    }

    pub async fn snapshot(&self) -> InputSnapshot {
        let guard = self.state.lock().await;
        snapshot_of(&guard)
    }

    /// A type/paste event from the shell, carrying the would-be buffer.
    pub async fn type_text(&self, next: String) -> InputSnapshot {
        let mut guard = self.state.lock().await;
        let was_conflict = guard.mode() == InputMode::Conflict;
        guard.apply_text_edit(next);
        if guard.mode() == InputMode::Conflict && !was_conflict {
            info!("Text edit while a file is attached; awaiting replace confirmation");
        }
        snapshot_of(&guard)
    }

    /// Installs a picked/dropped file from in-memory bytes.
    pub async fn attach_file(
        &self,
        name: &str,
        bytes: Vec<u8>,
    ) -> Result<InputSnapshot, TriageError> {
        let mut guard = self.state.lock().await;
        match Attachment::new(name, bytes) {
            Ok(attachment) => {
                info!(
                    "Attached {} ({} bytes)",
                    attachment.name,
                    attachment.bytes.len()
                );
                guard.attach(attachment);
                Ok(snapshot_of(&guard))
            }
            Err(err) => {
                // A rejected file also clears whatever was attached before.
                warn!("Rejected attachment {name}: unsupported extension");
                guard.clear_attachment();
                Err(err)
            }
        }
    }

    /// Installs a file from disk. The extension is checked before the
    /// read so an unreadable file with a bad extension still reports the
    /// format error; a read failure leaves the current state untouched.
    pub async fn attach_path(&self, path: &Path) -> Result<InputSnapshot, TriageError> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        let kind = match AttachmentKind::from_name(&name) {
            Some(kind) => kind,
            None => {
                let mut guard = self.state.lock().await;
                warn!("Rejected attachment {name}: unsupported extension");
                guard.clear_attachment();
                return Err(TriageError::Validation(UNSUPPORTED_FORMAT_MSG.to_string()));
            }
        };

        let bytes = tokio::fs::read(path).await.map_err(|err| {
            warn!("Failed to read {}: {err}", path.display());
            let message = match kind {
                AttachmentKind::Txt => "Não foi possível ler o .txt",
                AttachmentKind::Pdf => "Não foi possível ler o arquivo",
            };
            TriageError::Io(message.to_string())
        })?;

        self.attach_file(&name, bytes).await
    }

    /// Conflict resolution: drop the file, keep the attempted text.
    pub async fn confirm_replace_attachment(&self) -> InputSnapshot {
        let mut guard = self.state.lock().await;
        guard.confirm_replace();
        snapshot_of(&guard)
    }

    /// Conflict resolution: keep the file, drop the attempted text.
    pub async fn keep_attachment(&self) -> InputSnapshot {
        let mut guard = self.state.lock().await;
        guard.cancel_replace();
        snapshot_of(&guard)
    }

    pub async fn clear_attachment(&self) -> InputSnapshot {
        let mut guard = self.state.lock().await;
        guard.clear_attachment();
        snapshot_of(&guard)
    }

    pub async fn effective_input(&self) -> EffectiveInput {
        self.state.lock().await.effective_input()
    }
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}

fn snapshot_of(state: &InputState) -> InputSnapshot {
    InputSnapshot {
        mode: state.mode(),
        text: state.visible_text().to_string(),
        file_name: state.attachment().map(|a| a.name.clone()),
        attempted_text: state.attempted_text().map(str::to_string),
    }
}
