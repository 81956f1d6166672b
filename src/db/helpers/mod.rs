use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};

use crate::classify::Category;

pub fn parse_datetime(value: &str, field: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .with_context(|| format!("failed to parse {field}"))
}

pub fn parse_category(value: &str) -> Result<Category> {
    Category::from_str(value).ok_or_else(|| anyhow!("unknown category {value}"))
}
