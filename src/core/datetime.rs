//! Date derivation and chronological ordering for timeline entries.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::traits::Dated;
use crate::timeline::Entry;

/// Derive the sortable date of an entry: the first day of its month and year.
///
/// Years outside chrono's supported range clamp to [`NaiveDate::MIN`] or
/// [`NaiveDate::MAX`]. The extractor only ever produces four-digit years, so
/// this only affects hand-built entries.
///
/// # Examples
///
/// ```
/// use chrono::Datelike;
/// use timeline::{entry_date, Entry, Month};
///
/// let date = entry_date(&Entry::new(Month::Jun, 2024, "x", ""));
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.month0(), 5);
/// assert_eq!(date.day(), 1);
/// ```
#[must_use]
pub fn entry_date(entry: &Entry) -> NaiveDate {
    NaiveDate::from_ymd_opt(entry.year, entry.month.number(), 1).unwrap_or(if entry.year < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

/// Local midnight on the entry's date.
///
/// Returns `None` when local midnight does not exist on that day (a DST gap).
#[must_use]
pub fn entry_local_datetime(entry: &Entry) -> Option<DateTime<Local>> {
    let naive = entry_date(entry).and_hms_opt(0, 0, 0)?;
    Local.from_local_datetime(&naive).earliest()
}

/// Direction of a chronological sort.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest first.
    #[default]
    #[value(alias = "ascending")]
    #[serde(alias = "ascending")]
    Asc,
    /// Newest first.
    #[value(alias = "descending")]
    #[serde(alias = "descending")]
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Sort items by date in place.
///
/// The sort is stable: items sharing a month keep their relative order
/// in either direction.
pub fn sort_chronologically<T: Dated>(items: &mut [T], order: SortOrder) {
    match order {
        SortOrder::Asc => items.sort_by_key(|item| item.date()),
        SortOrder::Desc => items.sort_by(|a, b| b.date().cmp(&a.date())),
    }
}

/// Return a sorted copy of the entries.
#[must_use]
pub fn sorted_chronologically(entries: &[Entry], order: SortOrder) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sort_chronologically(&mut sorted, order);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::{parse_timeline, Month};
    use chrono::Datelike;

    fn make_entry(month: Month, year: i32, title: &str) -> Entry {
        Entry::new(month, year, title, "")
    }

    // ===============
    // Date Derivation
    // ===============

    #[test]
    fn test_entry_date_june() {
        let date = entry_date(&make_entry(Month::Jun, 2024, "x"));
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month0(), 5);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_entry_date_every_month() {
        for month in Month::ALL {
            let date = entry_date(&make_entry(month, 2000, "x"));
            assert_eq!(date.month0(), month.index0());
            assert_eq!(date.day(), 1);
        }
    }

    #[test]
    fn test_entry_date_out_of_range_year_clamps() {
        assert_eq!(entry_date(&make_entry(Month::Jan, i32::MAX, "x")), NaiveDate::MAX);
        assert_eq!(entry_date(&make_entry(Month::Jan, i32::MIN, "x")), NaiveDate::MIN);
    }

    #[test]
    fn test_entry_local_datetime_is_midnight() {
        let dt = entry_local_datetime(&make_entry(Month::Feb, 2021, "x")).unwrap();
        assert_eq!(dt.date_naive(), NaiveDate::from_ymd_opt(2021, 2, 1).unwrap());
    }

    // ========
    // Ordering
    // ========

    #[test]
    fn test_sort_ascending_regardless_of_input_order() {
        let entries = parse_timeline(
            "Dec, 2024: D\nJan, 2001: A\nMar, 2010: C\nFeb, 2010: B",
        );
        let sorted = sorted_chronologically(&entries, SortOrder::Asc);
        let titles: Vec<_> = sorted.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C", "D"]);
        assert!(sorted.windows(2).all(|w| entry_date(&w[0]) <= entry_date(&w[1])));
    }

    #[test]
    fn test_sort_descending() {
        let mut entries = vec![
            make_entry(Month::Jan, 2001, "A"),
            make_entry(Month::Dec, 2024, "D"),
            make_entry(Month::Jun, 2010, "C"),
        ];
        sort_chronologically(&mut entries, SortOrder::Desc);
        let titles: Vec<_> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["D", "C", "A"]);
    }

    #[test]
    fn test_sort_is_stable_for_same_month() {
        let entries = vec![
            make_entry(Month::May, 2020, "first"),
            make_entry(Month::Jan, 2019, "older"),
            make_entry(Month::May, 2020, "second"),
        ];
        let asc = sorted_chronologically(&entries, SortOrder::Asc);
        assert_eq!(asc[1].title, "first");
        assert_eq!(asc[2].title, "second");

        let desc = sorted_chronologically(&entries, SortOrder::Desc);
        assert_eq!(desc[0].title, "first");
        assert_eq!(desc[1].title, "second");
    }

    #[test]
    fn test_sort_order_display() {
        assert_eq!(SortOrder::Asc.to_string(), "asc");
        assert_eq!(SortOrder::Desc.to_string(), "desc");
        assert_eq!(SortOrder::default(), SortOrder::Asc);
    }
}
