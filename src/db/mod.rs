//! SQLite-backed persistence for the classification history.

mod connection;
mod helpers;
mod migrations;
mod models;
mod repositories;

pub use connection::Database;
pub use models::{DayTally, HistoryEntry};
