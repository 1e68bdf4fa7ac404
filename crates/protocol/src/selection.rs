//! Selection and dispatch of detail editors.
//!
//! At most one detail editor is open at a time. Rather than one open flag
//! per request type, the controller holds a single [`DetailEditorState`]:
//! either nothing is open, or exactly one editor is, bound to its own copy
//! of the selected request. The open editor's kind is the request's type.
//!
//! # State machine
//!
//! ```text
//!            select(r)                    select(r')
//!   Idle ───────────────▶ <Type(r)>Open ─────────────▶ <Type(r')>Open
//!    ▲                          │
//!    └──────── close() ─────────┘
//! ```

use std::fmt;

use tracing::{debug, info};

use crate::editor::DetailEditor;
use crate::line_item::LineItem;
use crate::request::{ReturnRequest, ReturnType};

/// The observable dispatch state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DispatchState {
    /// No editor is open.
    #[default]
    Idle,
    /// The refund editor is open.
    RefundOpen,
    /// The missing item editor is open.
    MissingOpen,
    /// The damage editor is open.
    DamageOpen,
    /// The exchange editor is open.
    ExchangeOpen,
}

impl DispatchState {
    /// Returns the open state for an editor kind.
    #[must_use]
    pub const fn open_for(kind: ReturnType) -> Self {
        match kind {
            ReturnType::Refund => Self::RefundOpen,
            ReturnType::Missing => Self::MissingOpen,
            ReturnType::Damage => Self::DamageOpen,
            ReturnType::Exchange => Self::ExchangeOpen,
        }
    }

    /// Returns the kind of the open editor, if any.
    #[must_use]
    pub const fn kind(self) -> Option<ReturnType> {
        match self {
            Self::Idle => None,
            Self::RefundOpen => Some(ReturnType::Refund),
            Self::MissingOpen => Some(ReturnType::Missing),
            Self::DamageOpen => Some(ReturnType::Damage),
            Self::ExchangeOpen => Some(ReturnType::Exchange),
        }
    }

    /// Returns `true` unless this is [`DispatchState::Idle`].
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl fmt::Display for DispatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::RefundOpen => "refund open",
            Self::MissingOpen => "missing open",
            Self::DamageOpen => "damage open",
            Self::ExchangeOpen => "exchange open",
        };
        f.write_str(name)
    }
}

/// Either no editor, or the single open editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailEditorState {
    /// Nothing is selected.
    #[default]
    Idle,
    /// One editor is open.
    Open(Box<DetailEditor>),
}

/// Routes selected requests to the matching detail editor.
///
/// Shared by board card activation, client table row activation and
/// creation submission.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::{DispatchState, ReturnRequest, ReturnType, SelectionController};
///
/// let mut dispatch = SelectionController::new();
/// let refund = ReturnRequest::new("RET-1", "Acme", "INV-1", ReturnType::Refund);
/// let damage = ReturnRequest::new("RET-2", "Hooli", "INV-2", ReturnType::Damage);
///
/// dispatch.select(refund, Vec::new());
/// dispatch.select(damage, Vec::new());
/// assert_eq!(dispatch.state(), DispatchState::DamageOpen);
/// assert_eq!(dispatch.selected_request().map(|r| r.id.as_str()), Some("RET-2"));
///
/// dispatch.close();
/// assert_eq!(dispatch.state(), DispatchState::Idle);
/// assert!(dispatch.selected_request().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    editor: DetailEditorState,
}

impl SelectionController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the editor matching the request's type.
    ///
    /// Any editor already open is closed first, discarding its edits. The
    /// replacement happens in one assignment, so two editors never coexist.
    pub fn select(&mut self, request: ReturnRequest, line_items: Vec<LineItem>) -> DispatchState {
        if let DetailEditorState::Open(previous) = &self.editor {
            debug!(
                previous = %previous.id(),
                next = %request.id,
                "implicitly closing open editor"
            );
        }
        let state = DispatchState::open_for(request.return_type);
        info!(request = %request.id, %state, "opening detail editor");
        self.editor = DetailEditorState::Open(Box::new(DetailEditor::open(request, line_items)));
        state
    }

    /// Closes the open editor, if any, discarding its local state.
    pub fn close(&mut self) {
        if let DetailEditorState::Open(editor) = std::mem::take(&mut self.editor) {
            info!(request = %editor.id(), "closed detail editor");
        }
    }

    /// Returns the current dispatch state.
    #[must_use]
    pub fn state(&self) -> DispatchState {
        match &self.editor {
            DetailEditorState::Idle => DispatchState::Idle,
            DetailEditorState::Open(editor) => DispatchState::open_for(editor.kind()),
        }
    }

    /// Returns `true` if an editor is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.editor, DetailEditorState::Open(_))
    }

    /// Returns the selected request; `Some` exactly when an editor is open.
    #[must_use]
    pub fn selected_request(&self) -> Option<&ReturnRequest> {
        self.editor().map(DetailEditor::request)
    }

    /// Returns the open editor.
    #[must_use]
    pub fn editor(&self) -> Option<&DetailEditor> {
        match &self.editor {
            DetailEditorState::Idle => None,
            DetailEditorState::Open(editor) => Some(&**editor),
        }
    }

    /// Returns the open editor for editing.
    pub fn editor_mut(&mut self) -> Option<&mut DetailEditor> {
        match &mut self.editor {
            DetailEditorState::Idle => None,
            DetailEditorState::Open(editor) => Some(&mut **editor),
        }
    }

    /// Returns the raw editor state.
    #[must_use]
    pub fn editor_state(&self) -> &DetailEditorState {
        &self.editor
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Action {
        Select(usize, usize),
        Close,
    }

    fn arb_action() -> impl Strategy<Value = Action> {
        prop_oneof![
            (0usize..4, 0usize..100).prop_map(|(k, n)| Action::Select(k, n)),
            Just(Action::Close),
        ]
    }

    proptest! {
        /// An editor is open iff a request is selected, and it always
        /// matches the most recent selection.
        #[test]
        fn open_iff_selected(actions in prop::collection::vec(arb_action(), 0..30)) {
            let mut dispatch = SelectionController::new();
            let mut last: Option<ReturnRequest> = None;
            prop_assert_eq!(dispatch.selected_request(), last.as_ref());

            for action in actions {
                match action {
                    Action::Select(k, n) => {
                        let kind = ReturnType::from_index(k).unwrap_or_default();
                        let request = ReturnRequest::new(format!("R-{n}"), "C", "I", kind);
                        dispatch.select(request.clone(), Vec::new());
                        last = Some(request);
                    }
                    Action::Close => {
                        dispatch.close();
                        last = None;
                    }
                }

                prop_assert_eq!(dispatch.is_open(), dispatch.selected_request().is_some());
                prop_assert_eq!(dispatch.state().is_open(), dispatch.is_open());
                prop_assert_eq!(dispatch.selected_request(), last.as_ref());
                if let Some(request) = &last {
                    prop_assert_eq!(dispatch.state(), DispatchState::open_for(request.return_type));
                } else {
                    prop_assert_eq!(dispatch.state(), DispatchState::Idle);
                }
            }
        }
    }
}
