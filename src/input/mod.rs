pub mod attachment;
pub mod controller;
pub mod state;

pub use attachment::{Attachment, AttachmentKind, UNSUPPORTED_FORMAT_MSG};
pub use controller::{InputController, InputSnapshot};
pub use state::{EffectiveInput, InputMode, InputState};
