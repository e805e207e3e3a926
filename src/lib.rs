//! timeline - dated entries from lightweight markup
//!
//! Extracts timeline entries from line-oriented text (`# Category` headers
//! and `Mon, YYYY: Title [link]` lines) and derives a sortable date for each.
//! The extractor and date derivation are pure; the `cli`, `config`, and
//! `output` modules build the `timeline` command on top of them.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod timeline;

pub use crate::core::{entry_date, sort_chronologically, SortOrder};
pub use crate::timeline::{parse_timeline, Entry, Month};
pub use error::TimelineError;
