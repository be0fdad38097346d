//! Configuration management for HallPointer.
//!
//! Supports an optional TOML configuration file. Every key has a default.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub repl: ReplConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Line editor mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditModeSetting {
    #[default]
    Emacs,
    Vi,
}

/// Interactive shell configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ReplConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    #[serde(default)]
    pub edit_mode: EditModeSetting,
    #[serde(default = "default_max_history_size")]
    pub max_history_size: usize,
    #[serde(default)]
    pub history_file: Option<PathBuf>,
    #[serde(default = "default_colors")]
    pub colors: bool,
    /// Seed the session with sample members
    #[serde(default = "default_sample_data")]
    pub sample_data: bool,
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_prompt() -> String {
    "hallpointer> ".to_string()
}

fn default_max_history_size() -> usize {
    1000
}

fn default_colors() -> bool {
    true
}

fn default_sample_data() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: default_prompt(),
            edit_mode: EditModeSetting::default(),
            max_history_size: default_max_history_size(),
            history_file: None,
            colors: default_colors(),
            sample_data: default_sample_data(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

impl ReplConfig {
    /// Configured history file, or `<data_dir>/hallpointer/history`
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("hallpointer").join("history")))
    }
}

/// Configuration error types
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}
