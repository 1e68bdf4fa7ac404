//! Logging configuration.
//!
//! The terminal belongs to the UI, so log output only goes to a file. When
//! no file is configured nothing is logged.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Level used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Levels accepted by [`LogConfig::validate`].
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Where and how verbosely to log.
///
/// # Examples
///
/// ```
/// use returndesk_config::LogConfig;
///
/// let config = LogConfig::default();
/// assert_eq!(config.level, "info");
/// assert!(config.file.is_none());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Minimum level, unless `RUST_LOG` says otherwise.
    #[serde(default = "default_level")]
    pub level: String,

    /// Log file. Logging is disabled when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}

impl LogConfig {
    /// Returns `true` if a log file is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }

    /// Checks that the level is one of [`LOG_LEVELS`] (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLogLevel`] for any other value.
    pub fn validate(&self) -> Result<()> {
        let level = self.level.to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidLogLevel(self.level.clone()))
        }
    }
}
