//! Shared traits for timeline items.

use chrono::NaiveDate;

use crate::core::datetime::entry_date;
use crate::timeline::Entry;

/// Items that occupy a point on the timeline.
pub trait Dated {
    /// The date used to order this item.
    fn date(&self) -> NaiveDate;
}

impl Dated for Entry {
    fn date(&self) -> NaiveDate {
        entry_date(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::Month;

    #[test]
    fn test_entry_is_dated() {
        let entry = Entry::new(Month::Aug, 1999, "x", "");
        assert_eq!(entry.date(), NaiveDate::from_ymd_opt(1999, 8, 1).unwrap());
    }
}
