use anyhow::Result;
use rusqlite::{params, Row};

use crate::db::{
    connection::Database,
    helpers::{parse_category, parse_datetime},
    models::HistoryEntry,
};

fn row_to_entry(row: &Row) -> Result<HistoryEntry> {
    let recorded_at: String = row.get("recorded_at")?;
    let category: String = row.get("category")?;

    Ok(HistoryEntry {
        id: row.get("id")?,
        recorded_at: parse_datetime(&recorded_at, "recorded_at")?,
        category: parse_category(&category)?,
    })
}

impl Database {
    pub async fn insert_history_entry(&self, entry: &HistoryEntry) -> Result<()> {
        let record = entry.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO history_entries (id, recorded_at, category)
                 VALUES (?1, ?2, ?3)",
                params![
                    record.id,
                    record.recorded_at.to_rfc3339(),
                    record.category.as_str(),
                ],
            )?;
            Ok(())
        })
        .await
    }

    /// All entries, oldest first (insertion order).
    pub async fn list_history_entries(&self) -> Result<Vec<HistoryEntry>> {
        self.execute(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, recorded_at, category
                 FROM history_entries
                 ORDER BY rowid ASC",
            )?;

            let mut rows = stmt.query([])?;
            let mut entries = Vec::new();
            while let Some(row) = rows.next()? {
                entries.push(row_to_entry(row)?);
            }
            Ok(entries)
        })
        .await
    }
}
