//! Configuration management for shaderinc
//!
//! Loads config from ~/.config/shaderinc/config.toml with sensible defaults.
//! A missing or broken config file never stops a conversion.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default log level name, used when RUST_LOG is not set
    pub level: String,
}

impl LogConfig {
    /// Parse `level` as a log level name (`off`, `error` .. `trace`).
    ///
    /// Returns `None` for anything else, including env_logger module directives.
    pub fn level_filter(&self) -> Option<LevelFilter> {
        LevelFilter::from_str(self.level.trim()).ok()
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Source checks run alongside the conversion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Warn about lines whose `"` or `\` is copied into the literal unescaped
    pub warn_unescaped: bool,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            warn_unescaped: true,
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub lint: LintConfig,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {0:?}: {1}")]
    Read(PathBuf, #[source] std::io::Error),
    #[error("Failed to parse {0:?}: {1}")]
    Parse(PathBuf, #[source] toml::de::Error),
}

impl Config {
    /// Get the config directory path (~/.config/shaderinc)
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("shaderinc"))
    }

    /// Get the config file path (~/.config/shaderinc/config.toml)
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Load config from the default path, falling back to defaults.
    ///
    /// Runs before logging is set up, so the error that caused a fallback is
    /// handed back for the caller to report.
    pub fn load() -> (Self, Option<ConfigError>) {
        match Self::config_path() {
            Some(path) => Self::load_or_default(&path),
            None => (Self::default(), None),
        }
    }

    /// Load config from `path`; a missing file is not an error
    pub fn load_or_default(path: &Path) -> (Self, Option<ConfigError>) {
        if !path.exists() {
            return (Self::default(), None);
        }

        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }
}
