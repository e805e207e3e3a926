//! Command-line interface for timeline.

pub mod args;
pub mod commands;
