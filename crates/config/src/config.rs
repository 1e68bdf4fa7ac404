//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the returndesk application.

use std::path::{Path, PathBuf};

use returndesk_protocol::Role;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::logging::LogConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// Overrides the viewer role.
pub const ENV_ROLE: &str = "RETURNDESK_ROLE";

/// Overrides the feed file path.
pub const ENV_FEED: &str = "RETURNDESK_FEED";

/// Overrides the log level.
pub const ENV_LOG_LEVEL: &str = "RETURNDESK_LOG_LEVEL";

/// Overrides the log file path.
pub const ENV_LOG_FILE: &str = "RETURNDESK_LOG_FILE";

/// The main configuration struct for the returndesk application.
///
/// # Examples
///
/// ```
/// use returndesk_config::Config;
/// use returndesk_protocol::{Role, ViewKind};
///
/// let config = Config::default();
/// assert_eq!(config.role, Role::Employee);
/// assert_eq!(config.role.view(), ViewKind::Board);
/// assert!(config.feed.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Who is using the screen; selects board or client table.
    #[serde(default)]
    pub role: Role,

    /// Feed document with the requests to triage.
    ///
    /// When unset, the built-in sample requests are shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feed: Option<PathBuf>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LogConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// If no configuration file is found, the defaults are used. Environment
    /// overrides are applied on top in both cases.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, or if the result fails validation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use returndesk_config::Config;
    ///
    /// # async fn example() -> returndesk_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Role: {}", config.role);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment overrides are not applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or fails
    /// validation.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Applies overrides from a variable lookup.
    ///
    /// `lookup` receives the variable names [`ENV_ROLE`], [`ENV_FEED`],
    /// [`ENV_LOG_LEVEL`] and [`ENV_LOG_FILE`]. Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the role override names no known role.
    ///
    /// # Examples
    ///
    /// ```
    /// use returndesk_config::Config;
    /// use returndesk_protocol::Role;
    ///
    /// let mut config = Config::default();
    /// config
    ///     .apply_env_overrides(|key| (key == "RETURNDESK_ROLE").then(|| "client".to_string()))
    ///     .unwrap();
    /// assert_eq!(config.role, Role::Client);
    /// ```
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(role) = get(ENV_ROLE) {
            self.role = role.parse()?;
            debug!(role = %self.role, "role overridden from environment");
        }
        if let Some(feed) = get(ENV_FEED) {
            self.feed = Some(PathBuf::from(feed));
        }
        if let Some(level) = get(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(file) = get(ENV_LOG_FILE) {
            self.logging.file = Some(PathBuf::from(file));
        }
        Ok(())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the log level is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use returndesk_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.logging.level = "verbose".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.logging.validate()
    }
}
