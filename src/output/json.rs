//! JSON output formatting for timeline.
//!
//! Every entry is emitted with its derived `date` alongside the parsed fields.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;

use crate::core::{entry_date, CategoryGroup, CategorySummary};
use crate::error::TimelineError;
use crate::timeline::Entry;

/// An entry plus its derived date, as written to JSON.
#[derive(Debug, Serialize)]
pub struct EntryRecord<'a> {
    #[serde(flatten)]
    pub entry: &'a Entry,
    pub date: NaiveDate,
}

impl<'a> From<&'a Entry> for EntryRecord<'a> {
    fn from(entry: &'a Entry) -> Self {
        Self {
            entry,
            date: entry_date(entry),
        }
    }
}

fn records(entries: &[Entry]) -> Vec<EntryRecord<'_>> {
    entries.iter().map(EntryRecord::from).collect()
}

/// Format entries as JSON
///
/// # Errors
///
/// Returns `TimelineError::Serialization` if JSON serialization fails.
pub fn format_entries_json(entries: &[Entry]) -> Result<String, TimelineError> {
    let output = json!({
        "count": entries.len(),
        "items": records(entries)
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format category groups as JSON
///
/// # Errors
///
/// Returns `TimelineError::Serialization` if JSON serialization fails.
pub fn format_groups_json(groups: &[CategoryGroup]) -> Result<String, TimelineError> {
    let total: usize = groups.iter().map(|g| g.entries.len()).sum();
    let groups: Vec<_> = groups
        .iter()
        .map(|g| {
            json!({
                "category": g.name,
                "count": g.entries.len(),
                "items": records(&g.entries)
            })
        })
        .collect();
    let output = json!({
        "count": total,
        "groups": groups
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format category summaries as JSON
///
/// # Errors
///
/// Returns `TimelineError::Serialization` if JSON serialization fails.
pub fn format_categories_json(summaries: &[CategorySummary]) -> Result<String, TimelineError> {
    let output = json!({
        "count": summaries.len(),
        "items": summaries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
