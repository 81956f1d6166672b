use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use log::{error, info};

use crate::{
    classify::{normalize, ClassificationRequest, ClassificationResult, Classifier},
    db::{Database, HistoryEntry},
    error::TriageError,
    input::InputController,
    language::Language,
};

/// Drives submissions through the classification pipeline, one at a
/// time. Cloneable; all clones share the input state and the busy flag.
#[derive(Clone)]
pub struct TriageController {
    input: InputController,
    classifier: Arc<dyn Classifier>,
    db: Database,
    busy: Arc<AtomicBool>,
}

impl TriageController {
    pub fn new(input: InputController, classifier: Arc<dyn Classifier>, db: Database) -> Self {
        Self {
            input,
            classifier,
            db,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    /// Whether a submission is in flight. The shell disables the trigger
    /// on this.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Runs one submission: resolve input, build the request, classify,
    /// normalize, record history. A second call while one is in flight
    /// is refused with [`TriageError::Busy`]; every exit path releases
    /// the flag and leaves input and history intact.
    pub async fn submit(&self, language: Language) -> Result<ClassificationResult, TriageError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(TriageError::Busy);
        }

        let result = self.run_submission(language).await;
        self.busy.store(false, Ordering::SeqCst);
        result
    }

    async fn run_submission(
        &self,
        language: Language,
    ) -> Result<ClassificationResult, TriageError> {
        let effective = self.input.effective_input().await;
        let request = ClassificationRequest::from_input(effective, language)?;

        info!("Submitting classification via {}", self.classifier.name());
        let raw = self.classifier.classify(request).await?;
        let result = normalize(raw, language);
        info!(
            "Classified as {} (confidence {})",
            result.category.as_str(),
            result.confidence_percent()
        );

        // A failed history write never fails the submission.
        let entry = HistoryEntry::new(result.category);
        if let Err(err) = self.db.insert_history_entry(&entry).await {
            error!("Failed to record history entry: {err:#}");
        }

        Ok(result)
    }
}
