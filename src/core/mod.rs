//! Core operations over parsed timeline entries.
//!
//! Date derivation and ordering, filtering, and grouping. Everything here is
//! pure and works on slices of [`Entry`](crate::timeline::Entry).

mod datetime;
pub mod filter;
pub mod group;
mod traits;

pub use datetime::{entry_date, entry_local_datetime, sort_chronologically, sorted_chronologically, SortOrder};
pub use filter::{filter_entries, EntryFilter};
pub use group::{categories, group_by_category, CategoryGroup, CategorySummary};
pub use traits::Dated;
