//! Classification pipeline: request construction, transport and response
//! normalization.

mod http;
mod local;
mod normalize;
mod types;

pub use http::{HttpClassifier, USER_LANG_HEADER};
pub use local::LocalClassifier;
pub use normalize::{canned_unproductive_reply, normalize, UNPRODUCTIVE_REPLY_EN, UNPRODUCTIVE_REPLY_PT};
pub use types::*;

use async_trait::async_trait;

use crate::error::TriageError;

/// Seam between the submission pipeline and whatever produces raw
/// classifications: the remote service or the local rules stand-in.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Short name for log lines.
    fn name(&self) -> &str;

    async fn classify(
        &self,
        request: ClassificationRequest,
    ) -> Result<RawClassification, TriageError>;
}
