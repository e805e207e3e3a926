use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the twelve three-letter month tokens used in entry lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All months in calendar order. Position in this table is the zero-based index.
    pub const ALL: [Self; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    /// Zero-based month index (`Jan` is 0, `Dec` is 11).
    #[must_use]
    pub const fn index0(self) -> u32 {
        self as u32
    }

    /// One-based month number, as chrono expects it.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.index0() + 1
    }

    /// The exact token as it appears in timeline text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jan => "Jan",
            Self::Feb => "Feb",
            Self::Mar => "Mar",
            Self::Apr => "Apr",
            Self::May => "May",
            Self::Jun => "Jun",
            Self::Jul => "Jul",
            Self::Aug => "Aug",
            Self::Sep => "Sep",
            Self::Oct => "Oct",
            Self::Nov => "Nov",
            Self::Dec => "Dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token is not one of the twelve month abbreviations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown month token: {0:?}")]
pub struct UnknownMonth(pub String);

impl FromStr for Month {
    type Err = UnknownMonth;

    /// Tokens are case-sensitive: `Jan` parses, `jan` and `JAN` do not.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMonth(s.to_string()))
    }
}

/// A single timeline item extracted from an entry line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub month: Month,
    pub year: i32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Text of the nearest preceding header line, or empty.
    #[serde(default)]
    pub category: String,
}

impl Entry {
    /// Create an entry without a link.
    pub fn new(month: Month, year: i32, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            month,
            year,
            title: title.into(),
            link: None,
            category: category.into(),
        }
    }

    /// Attach a link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Whether the entry carries a link.
    #[must_use]
    pub const fn has_link(&self) -> bool {
        self.link.is_some()
    }
}
