//! Timeline text extractor.
//!
//! Turns line-oriented timeline markup such as
//!
//! ```text
//! # Work
//! Jan, 2020: Joined the platform team [https://example.com/post]
//! Mar, 2021: Shipped the billing rewrite
//! ```
//!
//! into an ordered list of [`Entry`] values. Lines that are neither a
//! header nor a well-formed entry are skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{Entry, Month};

/// Prefix marking a category header line.
const HEADER_PREFIX: &str = "# ";

// Loose shape check: "Mon, YYYY:" at the start of the line.
static ENTRY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][a-z]{2}, [0-9]{4}:").unwrap_or_else(|e| panic!("Invalid entry shape regex: {e}"))
});

// Full entry line. The title runs up to the first `[`; a bracketed link may follow it.
static ENTRY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Z][a-z]{2}), ([0-9]{4}): ([^\[]+)(?:\[([^\]]+)\])?")
        .unwrap_or_else(|e| panic!("Invalid entry regex: {e}"))
});

/// Parse timeline text into entries, in document order.
///
/// Every entry carries the category of the closest `# ` header above it,
/// or an empty category when no header has been seen yet.
///
/// # Examples
///
/// ```
/// use timeline::{parse_timeline, Month};
///
/// let entries = parse_timeline("# Work\nJan, 2020: Did X\n# Play\nFeb, 2021: Did Y [https://y.example]");
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].category, "Work");
/// assert_eq!(entries[1].month, Month::Feb);
/// assert_eq!(entries[1].title, "Did Y");
/// assert_eq!(entries[1].link.as_deref(), Some("https://y.example"));
/// ```
#[must_use]
pub fn parse_timeline(text: &str) -> Vec<Entry> {
    let mut category = String::new();
    let mut entries = Vec::new();

    for (idx, line) in text.split('\n').enumerate() {
        if let Some(rest) = line.strip_prefix(HEADER_PREFIX) {
            category = rest.trim().to_string();
            tracing::trace!(line = idx + 1, category = %category, "category header");
        } else if ENTRY_SHAPE.is_match(line) {
            match parse_entry_line(line, &category) {
                Some(entry) => entries.push(entry),
                None => tracing::debug!(line = idx + 1, "skipping malformed entry line"),
            }
        }
    }

    entries
}

/// Apply the strict entry pattern to a line already known to be entry-shaped.
fn parse_entry_line(line: &str, category: &str) -> Option<Entry> {
    let caps = ENTRY_PATTERN.captures(line)?;

    let month: Month = caps.get(1)?.as_str().parse().ok()?;
    let year: i32 = caps.get(2)?.as_str().parse().ok()?;
    let title = caps.get(3)?.as_str().trim().to_string();
    let link = caps.get(4).map(|m| m.as_str().trim().to_string());

    Some(Entry {
        month,
        year,
        title,
        link,
        category: category.to_string(),
    })
}
