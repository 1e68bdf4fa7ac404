//! Terminal setup and teardown.
//!
//! The triage screen runs in raw mode on the alternate screen with mouse
//! capture on, so star and card clicks reach the app. Everything enabled
//! here is undone by [`restore_terminal`], and by the panic hook if the app
//! never gets that far.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, error};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Raw mode, the alternate screen or mouse capture could not be enabled.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// The terminal could not be put back the way it was.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Puts the terminal into raw mode on the alternate screen with mouse
/// capture enabled.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use returndesk_tui::terminal;
///
/// # fn main() -> Result<(), terminal::TerminalError> {
/// let mut terminal = terminal::setup_terminal()?;
/// terminal::restore_terminal(&mut terminal)?;
/// # Ok(())
/// # }
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(TerminalError::Setup)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)?;
    debug!("terminal ready");
    Ok(terminal)
}

/// Leaves raw mode and the alternate screen, releases the mouse and shows
/// the cursor again.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)?;
    debug!("terminal restored");
    Ok(())
}

/// Installs a panic hook that restores the terminal, then hands over to the
/// hook that was installed before.
///
/// Call once at startup, before [`setup_terminal`].
///
/// # Examples
///
/// ```no_run
/// use returndesk_tui::terminal;
///
/// terminal::install_panic_hook();
/// let terminal = terminal::setup_terminal();
/// ```
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        error!(%panic_info, "returndesk panicked");
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_phase() {
        let err = TerminalError::Setup(io::Error::other("no tty"));
        assert_eq!(err.to_string(), "failed to setup terminal: no tty");

        let err = TerminalError::Restore(io::Error::other("gone"));
        assert_eq!(err.to_string(), "failed to restore terminal: gone");
    }
}
