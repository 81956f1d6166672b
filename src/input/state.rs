use serde::{Deserialize, Serialize};

use super::attachment::Attachment;

/// Discriminant of [`InputState`], exposed to the shell so it can derive
/// the conflict prompt and the attachment chip from one value instead of
/// juggling independent flags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum InputMode {
    Empty,
    Text,
    File,
    Conflict,
}

/// What a submission will carry once the input mode is resolved: either
/// the free-form text buffer or the one pending file.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectiveInput {
    Text(String),
    File { name: String, bytes: Vec<u8> },
}

/// The input machine. Exactly one variant is active; an attachment and
/// free-form typing never silently mix.
///
/// `text` next to an attachment is the visible buffer (typed before the
/// attach, or populated by `.txt` extraction); the attachment stays
/// authoritative for submission while it exists.
#[derive(Debug, Clone, PartialEq)]
pub enum InputState {
    Empty,
    Text {
        text: String,
    },
    File {
        attachment: Attachment,
        text: String,
    },
    /// A keystroke arrived while a file was active. The keystroke is
    /// captured here and the visible buffer stays untouched until the
    /// user confirms or cancels.
    Conflict {
        attachment: Attachment,
        text: String,
        attempted: String,
    },
}

impl Default for InputState {
    fn default() -> Self {
        InputState::Empty
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> InputMode {
        match self {
            InputState::Empty => InputMode::Empty,
            InputState::Text { .. } => InputMode::Text,
            InputState::File { .. } => InputMode::File,
            InputState::Conflict { .. } => InputMode::Conflict,
        }
    }

    /// The buffer as the user sees it. Never includes a pending
    /// attempted edit.
    pub fn visible_text(&self) -> &str {
        match self {
            InputState::Empty => "",
            InputState::Text { text }
            | InputState::File { text, .. }
            | InputState::Conflict { text, .. } => text,
        }
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        match self {
            InputState::File { attachment, .. } | InputState::Conflict { attachment, .. } => {
                Some(attachment)
            }
            _ => None,
        }
    }

    pub fn attempted_text(&self) -> Option<&str> {
        match self {
            InputState::Conflict { attempted, .. } => Some(attempted),
            _ => None,
        }
    }

    /// A type/paste event carrying the would-be buffer contents.
    ///
    /// With an attachment active this raises (or refreshes) the conflict
    /// instead of touching the buffer.
    pub fn apply_text_edit(&mut self, next: String) {
        match self {
            InputState::Empty | InputState::Text { .. } => {
                *self = InputState::Text { text: next };
            }
            InputState::File { attachment, text } => {
                *self = InputState::Conflict {
                    attachment: attachment.clone(),
                    text: std::mem::take(text),
                    attempted: next,
                };
            }
            InputState::Conflict { attempted, .. } => {
                *attempted = next;
            }
        }
    }

    /// Installs an attachment, replacing any prior one. `.txt` content is
    /// appended to the buffer, separated by a blank line when the buffer
    /// already has non-blank content. A pending conflict is resolved as
    /// cancel-then-attach.
    pub fn attach(&mut self, attachment: Attachment) {
        let buffer = std::mem::take(self).into_buffer();
        let text = match attachment.extracted_text() {
            Some(content) => append_extracted(buffer, content),
            None => buffer,
        };
        *self = InputState::File { attachment, text };
    }

    /// Conflict resolution: "clear attachment and type". The attempted
    /// edit becomes the buffer and the attachment is discarded.
    pub fn confirm_replace(&mut self) {
        if let InputState::Conflict { attempted, .. } = self {
            *self = InputState::Text {
                text: std::mem::take(attempted),
            };
        }
    }

    /// Conflict resolution: "keep file". Restores the exact pre-conflict
    /// file state; the attempted edit is dropped.
    pub fn cancel_replace(&mut self) {
        if let InputState::Conflict {
            attachment, text, ..
        } = self
        {
            *self = InputState::File {
                attachment: attachment.clone(),
                text: std::mem::take(text),
            };
        }
    }

    /// Explicit "clear attachment". Falls back to the buffer (or `Empty`
    /// when there is none); a pending attempted edit is discarded.
    pub fn clear_attachment(&mut self) {
        if let InputState::File { text, .. } | InputState::Conflict { text, .. } = self {
            let text = std::mem::take(text);
            *self = if text.is_empty() {
                InputState::Empty
            } else {
                InputState::Text { text }
            };
        }
    }

    /// Resolves what a submission would carry right now. While a file is
    /// active (including mid-conflict) the file wins.
    pub fn effective_input(&self) -> EffectiveInput {
        match self {
            InputState::File { attachment, .. } | InputState::Conflict { attachment, .. } => {
                EffectiveInput::File {
                    name: attachment.name.clone(),
                    bytes: attachment.bytes.clone(),
                }
            }
            other => EffectiveInput::Text(other.visible_text().to_string()),
        }
    }

    fn into_buffer(self) -> String {
        match self {
            InputState::Empty => String::new(),
            InputState::Text { text }
            | InputState::File { text, .. }
            | InputState::Conflict { text, .. } => text,
        }
    }
}

fn append_extracted(buffer: String, content: String) -> String {
    if buffer.trim().is_empty() {
        content
    } else {
        format!("{buffer}\n\n{content}")
    }
}
