//! Engine for a graphical email-triage client.
//!
//! A shell (webview or native toolkit) drives this crate: it feeds user
//! input events in, triggers submissions, and renders the snapshots and
//! results that come back. The engine owns the input state machine, the
//! transport to the classification service, response normalization and
//! the persisted history and settings stores.

pub mod app;
pub mod classify;
pub mod config;
pub mod db;
pub mod error;
pub mod input;
pub mod language;
pub mod mailto;
pub mod settings;
pub mod triage;

pub use app::{CsvExport, TriageApp};
pub use classify::{
    Category, ClassificationRequest, ClassificationResult, Classifier, HttpClassifier,
    LocalClassifier, RawClassification,
};
pub use config::ApiConfig;
pub use db::{Database, DayTally, HistoryEntry};
pub use error::TriageError;
pub use input::{InputController, InputMode, InputSnapshot};
pub use language::Language;
pub use settings::{SettingsStore, ThemePreference};
pub use triage::TriageController;

/// Initializes logging (reads RUST_LOG env var). Call once from the
/// shell at startup; repeated calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .try_init();
}
