//! Entry selection by category, year range, and link presence.

use crate::error::TimelineError;
use crate::timeline::Entry;

/// Criteria for selecting timeline entries.
///
/// A default filter matches every entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    /// Category to keep, compared case-insensitively.
    pub category: Option<String>,
    /// Earliest year to keep (inclusive).
    pub since: Option<i32>,
    /// Latest year to keep (inclusive).
    pub until: Option<i32>,
    /// Keep only entries that carry a link.
    pub with_link: bool,
}

impl EntryFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub const fn since(mut self, year: i32) -> Self {
        self.since = Some(year);
        self
    }

    #[must_use]
    pub const fn until(mut self, year: i32) -> Self {
        self.until = Some(year);
        self
    }

    #[must_use]
    pub const fn with_link(mut self, with_link: bool) -> Self {
        self.with_link = with_link;
        self
    }

    /// Check that the year bounds describe a non-empty range.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::InvalidArgument` if `since` is after `until`.
    pub fn validate(&self) -> Result<(), TimelineError> {
        match (self.since, self.until) {
            (Some(since), Some(until)) if since > until => Err(TimelineError::InvalidArgument(
                format!("--since {since} is after --until {until}"),
            )),
            _ => Ok(()),
        }
    }

    /// Whether a single entry passes every criterion.
    #[must_use]
    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(category) = &self.category {
            if !entry.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if self.since.is_some_and(|since| entry.year < since) {
            return false;
        }
        if self.until.is_some_and(|until| entry.year > until) {
            return false;
        }
        !self.with_link || entry.has_link()
    }

    /// Whether this filter can reject anything.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.category.is_none() && self.since.is_none() && self.until.is_none() && !self.with_link
    }
}

/// Select the entries matching a filter, keeping their order.
pub fn filter_entries<'a>(entries: &'a [Entry], filter: &EntryFilter) -> Vec<&'a Entry> {
    entries.iter().filter(|entry| filter.matches(entry)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::parse_timeline;

    const SAMPLE: &str = "# Work\n\
        Jan, 2018: Joined [https://jobs.example]\n\
        Jun, 2020: Promoted\n\
        # Talks\n\
        Mar, 2021: Conference keynote [https://talk.example]\n\
        Sep, 2023: Meetup lightning talk";

    fn titles(entries: &[&Entry]) -> Vec<String> {
        entries.iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn test_default_filter_matches_all() {
        let entries = parse_timeline(SAMPLE);
        let filter = EntryFilter::new();
        assert!(filter.is_empty());
        assert_eq!(filter_entries(&entries, &filter).len(), 4);
    }

    #[test]
    fn test_filter_by_category_case_insensitive() {
        let entries = parse_timeline(SAMPLE);
        let filter = EntryFilter::new().category("talks");
        assert_eq!(
            titles(&filter_entries(&entries, &filter)),
            vec!["Conference keynote", "Meetup lightning talk"]
        );
    }

    #[test]
    fn test_filter_by_year_range_is_inclusive() {
        let entries = parse_timeline(SAMPLE);
        let filter = EntryFilter::new().since(2020).until(2021);
        assert_eq!(
            titles(&filter_entries(&entries, &filter)),
            vec!["Promoted", "Conference keynote"]
        );
    }

    #[test]
    fn test_filter_with_link() {
        let entries = parse_timeline(SAMPLE);
        let filter = EntryFilter::new().with_link(true);
        assert_eq!(
            titles(&filter_entries(&entries, &filter)),
            vec!["Joined", "Conference keynote"]
        );
    }

    #[test]
    fn test_filter_combined_criteria() {
        let entries = parse_timeline(SAMPLE);
        let filter = EntryFilter::new().category("Work").since(2019);
        assert_eq!(titles(&filter_entries(&entries, &filter)), vec!["Promoted"]);
    }

    #[test]
    fn test_filter_empty_category_selects_uncategorized() {
        let entries = parse_timeline("Jan, 2020: Loose\n# Work\nFeb, 2020: Filed");
        let filter = EntryFilter::new().category("");
        assert_eq!(titles(&filter_entries(&entries, &filter)), vec!["Loose"]);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        assert!(EntryFilter::new().since(2024).until(2020).validate().is_err());
        assert!(EntryFilter::new().since(2020).until(2020).validate().is_ok());
        assert!(EntryFilter::new().since(2020).validate().is_ok());
    }
}
