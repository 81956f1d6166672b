//! Assembly point for the engine: wires stores and controllers and
//! exposes the methods a graphical shell binds to.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use crate::{
    classify::{ClassificationResult, Classifier, HttpClassifier},
    config::ApiConfig,
    db::{Database, DayTally, HistoryEntry},
    error::TriageError,
    input::{InputController, InputSnapshot},
    language::Language,
    mailto,
    settings::{SettingsStore, ThemePreference},
    triage::TriageController,
};

/// CSV payload for the shell to offer as a download.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvExport {
    pub file_name: String,
    pub contents: String,
}

/// The engine behind the triage window. One instance per app; methods
/// map one-to-one onto shell commands.
pub struct TriageApp {
    db: Database,
    settings: SettingsStore,
    triage: TriageController,
}

impl TriageApp {
    /// Opens the data directory (creating it if needed) and wires the
    /// engine against the remote service described by `config`.
    pub fn new(data_dir: impl Into<PathBuf>, config: ApiConfig) -> Result<Self> {
        let classifier = Arc::new(HttpClassifier::new(&config)?);
        Self::with_classifier(data_dir, classifier)
    }

    /// Same wiring with an injected classifier (the local stand-in, or a
    /// test double).
    pub fn with_classifier(
        data_dir: impl Into<PathBuf>,
        classifier: Arc<dyn Classifier>,
    ) -> Result<Self> {
        let data_dir = data_dir.into();
        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

        let db = Database::new(data_dir.join("triage.sqlite3"))?;
        let settings = SettingsStore::new(data_dir.join("settings.json"))?;
        let triage = TriageController::new(InputController::new(), classifier, db.clone());

        info!("Triage engine ready (data dir {})", data_dir.display());

        Ok(Self {
            db,
            settings,
            triage,
        })
    }

    // --- input events ---

    pub async fn input_snapshot(&self) -> InputSnapshot {
        self.triage.input().snapshot().await
    }

    pub async fn type_text(&self, text: impl Into<String>) -> InputSnapshot {
        self.triage.input().type_text(text.into()).await
    }

    pub async fn attach_file(
        &self,
        name: &str,
        bytes: Vec<u8>,
    ) -> Result<InputSnapshot, TriageError> {
        self.triage.input().attach_file(name, bytes).await
    }

    pub async fn attach_path(&self, path: impl AsRef<Path>) -> Result<InputSnapshot, TriageError> {
        self.triage.input().attach_path(path.as_ref()).await
    }

    pub async fn confirm_replace_attachment(&self) -> InputSnapshot {
        self.triage.input().confirm_replace_attachment().await
    }

    pub async fn keep_attachment(&self) -> InputSnapshot {
        self.triage.input().keep_attachment().await
    }

    pub async fn clear_attachment(&self) -> InputSnapshot {
        self.triage.input().clear_attachment().await
    }

    // --- submission ---

    pub async fn submit(&self, language: Language) -> Result<ClassificationResult, TriageError> {
        self.triage.submit(language).await
    }

    pub fn is_busy(&self) -> bool {
        self.triage.is_busy()
    }

    // --- history ---

    pub async fn history(&self) -> Result<Vec<HistoryEntry>, TriageError> {
        Ok(self.db.list_history_entries().await?)
    }

    pub async fn today_tally(&self) -> Result<DayTally, TriageError> {
        let entries = self.db.list_history_entries().await?;
        Ok(DayTally::today(&entries))
    }

    pub async fn export_today_csv(&self) -> Result<CsvExport, TriageError> {
        let tally = self.today_tally().await?;
        Ok(CsvExport {
            file_name: tally.export_file_name(),
            contents: tally.to_csv(),
        })
    }

    // --- settings ---

    pub fn theme(&self) -> ThemePreference {
        self.settings.theme()
    }

    pub fn set_theme(&self, theme: ThemePreference) -> Result<(), TriageError> {
        Ok(self.settings.update_theme(theme)?)
    }

    // --- reply composition ---

    pub fn mailto_reply_url(&self, to: &str, subject: &str, body: &str) -> String {
        mailto::mailto_reply_url(to, subject, body)
    }
}
