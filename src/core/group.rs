//! Grouping entries by category.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::traits::Dated;
use crate::timeline::Entry;

/// Entries that share a category, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// Per-category counts and date span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
    pub first: NaiveDate,
    pub last: NaiveDate,
}

/// Group entries by category.
///
/// Groups appear in the order their category is first seen; entries inside
/// a group keep their input order. Uncategorized entries form a group with
/// an empty name.
#[must_use]
pub fn group_by_category<'a, I>(entries: I) -> Vec<CategoryGroup>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for entry in entries {
        match groups.iter_mut().find(|g| g.name == entry.category) {
            Some(group) => group.entries.push(entry.clone()),
            None => groups.push(CategoryGroup {
                name: entry.category.clone(),
                entries: vec![entry.clone()],
            }),
        }
    }

    groups
}

/// Summarize each category: entry count plus earliest and latest dates.
#[must_use]
pub fn categories<'a, I>(entries: I) -> Vec<CategorySummary>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut summaries: Vec<CategorySummary> = Vec::new();

    for entry in entries {
        let date = entry.date();
        match summaries.iter_mut().find(|s| s.name == entry.category) {
            Some(summary) => {
                summary.count += 1;
                summary.first = summary.first.min(date);
                summary.last = summary.last.max(date);
            },
            None => summaries.push(CategorySummary {
                name: entry.category.clone(),
                count: 1,
                first: date,
                last: date,
            }),
        }
    }

    summaries
}
