//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. The board, the type picker and the help
//! overlay share one key map; the detail editor has its own because typed
//! characters belong to the notes while they have focus.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use returndesk_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts an event to a message while a detail editor is open.
///
/// Mouse events map as everywhere else; keys go through
/// [`key_to_editor_message`].
#[must_use]
pub fn editor_event_to_message(event: &Event, notes_focused: bool) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_editor_message(*key, notes_focused),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only left-click press events are handled, producing a `ClickAt` message
/// with the click coordinates.
#[must_use]
fn mouse_to_message(mouse: &crossterm::event::MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::ClickAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (cancel picker or clear selection) |
/// | `Left` | Navigate left |
/// | `Right` | Navigate right |
/// | `Up` | Navigate up |
/// | `Down` | Navigate down |
/// | `Enter` or `Space` | Select |
/// | `Backspace` | Back |
/// | `e` | Expand or collapse the focused bucket |
/// | `n` | New request |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(&key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        // Selection
        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),
        KeyCode::Backspace => Some(Message::Back),

        // Board actions
        KeyCode::Char('e') => Some(Message::ToggleExpand),
        KeyCode::Char('n') => Some(Message::NewRequest),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a message for the open detail editor.
///
/// # Key Bindings (Editor)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Close the editor |
/// | `Tab` | Next field |
/// | `1`-`5` | Set rating |
/// | `Up` / `Down` | Previous / next line item |
/// | `Left` / `Right` | Cycle damage type of the line |
/// | `a` | Request attachment |
/// | `?` | Toggle help |
///
/// While the notes have focus, every character (including the digits and
/// `a`) is typed into them and `Backspace` deletes.
#[must_use]
pub fn key_to_editor_message(key: KeyEvent, notes_focused: bool) -> Option<Message> {
    if is_ctrl_c(&key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => return Some(Message::Escape),
        KeyCode::Tab => return Some(Message::NextField),
        _ => {}
    }

    if notes_focused {
        return match key.code {
            KeyCode::Backspace => Some(Message::NotesBackspace),
            KeyCode::Char(ch) => Some(Message::NotesInput { ch }),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(ch @ '1'..='5') => {
            let stars = ch.to_digit(10).and_then(|d| u8::try_from(d).ok())?;
            Some(Message::SetRating { stars })
        }
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Left => Some(Message::CycleDamage { forward: false }),
        KeyCode::Right => Some(Message::CycleDamage { forward: true }),
        KeyCode::Char('a') => Some(Message::RequestAttachment),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        _ => None,
    }
}
