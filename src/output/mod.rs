//! Output formatting for timeline.
//!
//! This module provides formatters for displaying timeline entries in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::core::{CategoryGroup, CategorySummary};
use crate::error::TimelineError;
use crate::timeline::Entry;

pub use json::*;
pub use pretty::*;

/// Options for pretty output.
#[derive(Debug, Clone)]
pub struct PrettyOptions {
    /// chrono format string for entry dates.
    pub date_format: String,
}

impl Default for PrettyOptions {
    fn default() -> Self {
        Self {
            date_format: "%b %Y".to_string(),
        }
    }
}

/// Format entries based on output format
///
/// # Errors
///
/// Returns `TimelineError::Serialization` if JSON serialization fails.
pub fn format_entries(
    entries: &[Entry],
    title: &str,
    format: OutputFormat,
    options: &PrettyOptions,
) -> Result<String, TimelineError> {
    match format {
        OutputFormat::Pretty => Ok(format_entries_pretty(entries, title, options)),
        OutputFormat::Json => format_entries_json(entries),
    }
}

/// Format category groups based on output format
///
/// # Errors
///
/// Returns `TimelineError::Serialization` if JSON serialization fails.
pub fn format_groups(
    groups: &[CategoryGroup],
    format: OutputFormat,
    options: &PrettyOptions,
) -> Result<String, TimelineError> {
    match format {
        OutputFormat::Pretty => Ok(format_groups_pretty(groups, options)),
        OutputFormat::Json => format_groups_json(groups),
    }
}

/// Format category summaries based on output format
///
/// # Errors
///
/// Returns `TimelineError::Serialization` if JSON serialization fails.
pub fn format_categories(
    summaries: &[CategorySummary],
    format: OutputFormat,
    options: &PrettyOptions,
) -> Result<String, TimelineError> {
    match format {
        OutputFormat::Pretty => Ok(format_categories_pretty(summaries, options)),
        OutputFormat::Json => format_categories_json(summaries),
    }
}

/// Display name for a category, with a placeholder for the empty one.
#[must_use]
pub fn category_label(name: &str) -> &str {
    if name.is_empty() {
        "Uncategorized"
    } else {
        name
    }
}
