//! Configuration and feed file reading and writing.
//!
//! # File Formats
//!
//! Both JSON5 (`.json5`, with comments and trailing commas) and plain JSON
//! are read through the JSON5 parser. Writes always produce plain JSON.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Local: `./returndesk.json5` or `./returndesk.json`
//! 2. User: `<config dir>/returndesk/config.json5` or `config.json`

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Configuration file names to search for, in priority order.
const CONFIG_FILE_NAMES: &[&str] = &["returndesk.json5", "returndesk.json"];

/// User config directory name.
const USER_CONFIG_DIR: &str = "returndesk";

/// User config file names to search for, in priority order.
const USER_CONFIG_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Finds the configuration file path.
///
/// Looks in the working directory first, then in the user config directory.
///
/// # Examples
///
/// ```no_run
/// use returndesk_config::persistence::find_config_file;
///
/// if let Some(path) = find_config_file() {
///     println!("Found config at: {}", path.display());
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Finds the configuration file relative to explicit directories.
///
/// `local` is searched for `returndesk.json5`/`returndesk.json`; `user`, if
/// given, is the platform config directory that holds `returndesk/`.
#[must_use]
pub fn find_config_file_in(local: &Path, user: Option<&Path>) -> Option<PathBuf> {
    let local_candidates = CONFIG_FILE_NAMES.iter().map(|name| local.join(name));
    let user_candidates = user.into_iter().flat_map(|dir| {
        USER_CONFIG_FILE_NAMES
            .iter()
            .map(move |name| dir.join(USER_CONFIG_DIR).join(name))
    });

    let found = local_candidates.chain(user_candidates).find(|p| p.exists());
    match &found {
        Some(path) => debug!(path = %path.display(), "found config file"),
        None => debug!("no config file found, using defaults"),
    }
    found
}

/// Returns the default user configuration directory.
///
/// This is typically `~/.config/returndesk/` on Unix systems.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(USER_CONFIG_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the default user configuration file path.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join("config.json5"))
}

/// Reads and parses a JSON5 or JSON file into any deserializable type.
///
/// Used for both the configuration and the request feed.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file content cannot be parsed
///
/// # Examples
///
/// ```no_run
/// use returndesk_config::persistence::read_config_file;
/// use returndesk_config::Config;
///
/// # fn main() -> returndesk_config::Result<()> {
/// let config: Config = read_config_file("returndesk.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    // JSON5 parser handles both JSON5 and JSON
    serde_json5::from_str(&content).map_err(ConfigError::from)
}

/// Writes a value to a file as pretty-printed JSON.
///
/// Parent directories are created as needed.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
/// - The value cannot be serialized
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let content = serde_json::to_string_pretty(value)?;

    std::fs::write(path, content).map_err(|e| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source: e,
    })
}
