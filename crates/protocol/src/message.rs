//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI. Which controller a message
/// reaches depends on what has focus: the open editor, the creation
/// picker, or the board/table underneath.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::Message;
///
/// let msg = Message::SetRating { stars: 4 };
/// assert!(matches!(msg, Message::SetRating { stars: 4 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move left: previous bucket, or previous type/damage value.
    NavigateLeft,
    /// Move right: next bucket, or next type/damage value.
    NavigateRight,
    /// Move up within the current bucket, table or line list.
    NavigateUp,
    /// Move down within the current bucket, table or line list.
    NavigateDown,
    /// Activate the highlighted item.
    Select,
    /// Go back to the previous view or cancel current action.
    Back,
    /// Escape: close the editor or picker (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Mouse click at coordinates (column, row).
    ClickAt {
        /// Column (x coordinate) of the click.
        column: u16,
        /// Row (y coordinate) of the click.
        row: u16,
    },

    // --- Board messages ---
    /// Expand or collapse the focused bucket.
    ToggleExpand,
    /// Start creating a new request.
    NewRequest,

    // --- Editor messages ---
    /// Set the editor rating to exactly this many stars.
    SetRating {
        /// Star that was picked (1-5).
        stars: u8,
    },
    /// Move editor focus to the next field.
    NextField,
    /// Type a character into the notes.
    NotesInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last notes character.
    NotesBackspace,
    /// Cycle the damage type of the focused line.
    CycleDamage {
        /// Step direction.
        forward: bool,
    },
    /// Trigger the attachment placeholder.
    RequestAttachment,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use returndesk_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(Message::NavigateUp.is_navigation());
    /// assert!(!Message::Select.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft
                | Self::NavigateRight
                | Self::NavigateUp
                | Self::NavigateDown
                | Self::NextField
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use returndesk_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Back.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message edits the open detail editor.
    ///
    /// # Examples
    ///
    /// ```
    /// use returndesk_protocol::Message;
    ///
    /// assert!(Message::NotesBackspace.is_editor());
    /// assert!(!Message::ToggleExpand.is_editor());
    /// ```
    #[must_use]
    pub fn is_editor(&self) -> bool {
        matches!(
            self,
            Self::SetRating { .. }
                | Self::NextField
                | Self::NotesInput { .. }
                | Self::NotesBackspace
                | Self::CycleDamage { .. }
                | Self::RequestAttachment
        )
    }
}
