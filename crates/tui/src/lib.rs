//! Terminal UI for the returndesk application.
//!
//! This crate provides a Ratatui-based terminal interface for triaging
//! return requests and editing them in per-type detail editors.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state and focus handling
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`layout`]: Shared layout constants
//! - [`widgets`]: Rendering functions and hit-testing
//!
//! # Example
//!
//! ```no_run
//! use returndesk_protocol::dummy::dummy_store;
//! use returndesk_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(dummy_store());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::App;
pub use state::{AppState, EditorField, Focus};
