//! Configuration settings for timeline.
//!
//! Settings are loaded from `~/.timeline/config.yaml`.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::core::SortOrder;
use crate::error::TimelineError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// How entries are displayed.
    pub display: DisplayConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply this setting to the `colored` crate's global override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Default chronological order.
    #[serde(default)]
    pub order: SortOrder,
    /// Group entries under their category by default.
    #[serde(default)]
    pub group_by_category: bool,
    /// chrono format string for dates in pretty output.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

fn default_date_format() -> String {
    "%b %Y".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            order: SortOrder::default(),
            group_by_category: false,
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TimelineError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TimelineError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            TimelineError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), TimelineError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TimelineError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TimelineError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    fn validate(&self) -> Result<(), TimelineError> {
        if self.display.date_format.trim().is_empty() {
            return Err(TimelineError::Config(
                "display.date_format must not be empty".to_string(),
            ));
        }
        // Unknown specifiers and time or zone fields both fail when formatting a date.
        let sample = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN);
        let mut rendered = String::new();
        write!(rendered, "{}", sample.format(&self.display.date_format)).map_err(|_| {
            TimelineError::Config(format!(
                "display.date_format is not a valid date format: {}",
                self.display.date_format
            ))
        })
    }
}
