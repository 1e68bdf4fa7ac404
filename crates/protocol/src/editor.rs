//! Transient edit state of an open detail editor.
//!
//! All four editor kinds share this contract. The editor works on its own
//! copy of the selected request; nothing written here reaches the request
//! store, and dropping the editor discards every edit.

use serde::Serialize;
use tracing::info;

use crate::line_item::{DamageType, LineItem};
use crate::request::{Rating, ReturnMode, ReturnRequest, ReturnType};

/// Local state of the editor bound to one request.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::{DetailEditor, ReturnRequest, ReturnType};
///
/// let request = ReturnRequest::new("RET-1", "Acme", "INV-1", ReturnType::Refund).with_rating(2);
/// let mut editor = DetailEditor::open(request, Vec::new());
///
/// assert_eq!(editor.rating().get(), 2);
/// editor.click_star(5);
/// assert_eq!(editor.rating().get(), 5);
/// assert!(editor.notes().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailEditor {
    request: ReturnRequest,
    notes: String,
    rating: Rating,
    line_items: Vec<LineItem>,
}

impl DetailEditor {
    /// Opens an editor with the request's defaults.
    #[must_use]
    pub fn open(request: ReturnRequest, line_items: Vec<LineItem>) -> Self {
        Self {
            rating: request.rating,
            notes: String::new(),
            line_items,
            request,
        }
    }

    /// Returns the editor kind, which is the request's type.
    #[must_use]
    pub fn kind(&self) -> ReturnType {
        self.request.return_type
    }

    /// Returns the bound request as it was when the editor opened.
    #[must_use]
    pub fn request(&self) -> &ReturnRequest {
        &self.request
    }

    /// Request identifier (empty for a draft).
    #[must_use]
    pub fn id(&self) -> &str {
        &self.request.id
    }

    /// Customer display name.
    #[must_use]
    pub fn client_name(&self) -> &str {
        &self.request.client_name
    }

    /// Invoice the request refers to.
    #[must_use]
    pub fn invoice_number(&self) -> &str {
        &self.request.invoice_number
    }

    /// Return type of the bound request.
    #[must_use]
    pub fn return_type(&self) -> ReturnType {
        self.request.return_type
    }

    /// Return mode of the bound request.
    #[must_use]
    pub fn return_mode(&self) -> ReturnMode {
        self.request.return_mode
    }

    /// Current notes text.
    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Replaces the notes text.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Appends a character to the notes, ignoring control characters.
    pub fn push_note_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.notes.push(ch);
        }
    }

    /// Removes the last character of the notes.
    pub fn pop_note_char(&mut self) -> Option<char> {
        self.notes.pop()
    }

    /// Current local rating.
    #[must_use]
    pub fn rating(&self) -> Rating {
        self.rating
    }

    /// Sets the rating to exactly star `k`.
    ///
    /// Clicking never toggles or decrements: the result only depends on `k`,
    /// which is clamped into `1..=5`.
    pub fn click_star(&mut self, k: u8) -> Rating {
        self.rating = Rating::new(i64::from(k.clamp(1, Rating::MAX)));
        self.rating
    }

    /// Lines of the request with their local damage classification.
    #[must_use]
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Sets one line's damage type.
    ///
    /// Returns `false` if `line` is out of range.
    pub fn set_damage_type(&mut self, line: usize, damage_type: DamageType) -> bool {
        match self.line_items.get_mut(line) {
            Some(item) => {
                item.damage_type = damage_type;
                true
            }
            None => false,
        }
    }

    /// Cycles one line's damage type and returns the new value.
    pub fn cycle_damage_type(&mut self, line: usize, forward: bool) -> Option<DamageType> {
        let item = self.line_items.get_mut(line)?;
        item.damage_type = item.damage_type.cycle(forward);
        Some(item.damage_type)
    }

    /// Handles the attachment affordance.
    ///
    /// Capturing files is not supported; the trigger changes no state.
    pub fn request_attachment(&self) {
        info!(request = %self.request.id, "attachment requested; uploads are not supported");
    }

    /// Describes the edit a persistence layer would receive.
    #[must_use]
    pub fn proposed_edit(&self) -> EditProposal {
        EditProposal {
            request_id: self.request.id.clone(),
            notes: self.notes.clone(),
            rating: self.rating,
            line_items: self.line_items.clone(),
        }
    }
}

/// A finalized edit, as handed to a persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditProposal {
    /// Target request; empty for a draft.
    pub request_id: String,
    /// Notes entered in the editor.
    pub notes: String,
    /// Rating chosen in the editor.
    pub rating: Rating,
    /// Lines with their chosen damage types.
    pub line_items: Vec<LineItem>,
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The resulting rating depends only on the clicked star.
        #[test]
        fn click_star_ignores_previous_rating(initial in 0i64..=5, clicks in prop::collection::vec(1u8..=5, 1..10)) {
            let request = ReturnRequest::new("RET-1", "Acme", "INV-1", ReturnType::Refund)
                .with_rating(initial);
            let mut editor = DetailEditor::open(request, Vec::new());

            for k in clicks {
                prop_assert_eq!(editor.click_star(k).get(), k);
                prop_assert_eq!(editor.rating().get(), k);
            }
        }
    }
}
