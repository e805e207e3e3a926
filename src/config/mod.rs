//! Configuration management for timeline.
//!
//! This module handles loading and saving configuration from `~/.timeline/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, DisplayConfig, GeneralConfig};
