//! Configuration management for the returndesk application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from multiple sources (files, environment variables, defaults), and
//! reads the request feed the screen triages.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct, loading and env overrides
//! - [`logging`]: Log level and log file settings
//! - [`feed`]: Loading request feed documents
//! - [`persistence`]: JSON5/JSON file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variables (`RETURNDESK_ROLE`, `RETURNDESK_FEED`,
//!    `RETURNDESK_LOG_LEVEL`, `RETURNDESK_LOG_FILE`)
//! 2. Local config (`./returndesk.json5` or `./returndesk.json`)
//! 3. User config (`~/.config/returndesk/config.json5` or `config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   role: "employee",         // employee | manager | client
//!   feed: "returns.json5",    // omit to use the sample requests
//!   logging: { level: "info", file: "returndesk.log" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use returndesk_config::Config;
//! use returndesk_config::feed::load_feed;
//!
//! # async fn example() -> returndesk_config::Result<()> {
//! let config = Config::load().await?;
//! if let Some(feed) = &config.feed {
//!     let store = load_feed(feed)?;
//!     println!("{} requests for {}", store.len(), config.role);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod feed;
pub mod logging;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use logging::LogConfig;
