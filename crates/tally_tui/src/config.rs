//! Front-end configuration loaded from TOML.

use crate::theme::Theme;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Config file read when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "tally.toml";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Starting color theme.
    #[serde(default)]
    theme: Theme,

    /// Milliseconds between animation ticks.
    #[serde(default = "default_tick_rate_ms")]
    tick_rate_ms: u64,

    /// Ticks the board frame sparks after a win.
    #[serde(default = "default_spark_ticks")]
    spark_ticks: u16,

    /// File receiving tracing output while the TUI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

#[instrument]
fn default_tick_rate_ms() -> u64 {
    100
}

#[instrument]
fn default_spark_ticks() -> u16 {
    12
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("tally.log")
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            tick_rate_ms: default_tick_rate_ms(),
            spark_ticks: default_spark_ticks(),
            log_file: default_log_file(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(theme = %config.theme, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` when given; otherwise [`DEFAULT_CONFIG_PATH`] if it
    /// exists, falling back to defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the starting theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Tick interval as a [`Duration`].
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
