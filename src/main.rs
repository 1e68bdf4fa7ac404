//! returndesk - A terminal back-office for triaging customer return requests.
//!
//! This is the main binary that launches the TUI application.

mod logging;

use returndesk_config::{Config, feed::load_feed};
use returndesk_protocol::dummy::dummy_store;
use returndesk_tui::{App, terminal};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let config = Config::load().await?;
    logging::init_logging(&config.logging)?;

    let store = match config.feed.as_deref() {
        Some(path) => {
            info!(path = %path.display(), "loading feed");
            load_feed(path)?
        }
        None => {
            info!("no feed configured, using sample requests");
            dummy_store()
        }
    };

    let mut terminal = terminal::setup_terminal()?;

    let mut app = App::with_config(store, config);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
