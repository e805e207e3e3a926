//! Timeline entries and the extractor that produces them.

pub mod parser;
pub mod types;

pub use parser::parse_timeline;
pub use types::{Entry, Month, UnknownMonth};
