//! History records and the same-day tally derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classify::Category;

/// One classified submission. Append-only; entries are never edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub recorded_at: DateTime<Utc>,
    pub category: Category,
}

impl HistoryEntry {
    pub fn new(category: Category) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            recorded_at: Utc::now(),
            category,
        }
    }
}

/// Counts of one day's classifications. Derived on demand, never stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayTally {
    /// The day being tallied, `YYYY-MM-DD`.
    pub date: String,
    pub productive: u64,
    pub unproductive: u64,
}

impl DayTally {
    /// Tallies the entries whose timestamp falls on `date`, matched by
    /// string prefix of the RFC 3339 form.
    pub fn for_day(entries: &[HistoryEntry], date: &str) -> Self {
        let mut productive = 0;
        let mut unproductive = 0;
        for entry in entries {
            if entry.recorded_at.to_rfc3339().starts_with(date) {
                match entry.category {
                    Category::Productive => productive += 1,
                    Category::Unproductive => unproductive += 1,
                }
            }
        }

        Self {
            date: date.to_string(),
            productive,
            unproductive,
        }
    }

    pub fn today(entries: &[HistoryEntry]) -> Self {
        Self::for_day(entries, &Utc::now().format("%Y-%m-%d").to_string())
    }

    pub fn total(&self) -> u64 {
        self.productive + self.unproductive
    }

    /// Two-row CSV export, no trailing newline.
    pub fn to_csv(&self) -> String {
        format!(
            "Categoria,Quantidade\nProdutivo,{}\nImprodutivo,{}",
            self.productive, self.unproductive
        )
    }

    /// Download name the shell offers for the CSV.
    pub fn export_file_name(&self) -> String {
        format!("resumo_{}.csv", self.date)
    }
}
