//! Application state management.
//!
//! This module defines the core state structures for the TUI application:
//! the request store, the board and table cursors, and the controllers that
//! own the creation flow and the open detail editor.

use returndesk_protocol::{
    BucketViewState, CreationFlow, DamageType, DispatchState, FALLBACK_RETURN_TYPE, Rating,
    RequestStore, ReturnRequest, ReturnType, Role, SelectionController, ViewKind, client_rows,
};

/// The current focus area in the UI.
///
/// Determines which UI component receives keyboard input. Focus is derived
/// from the controllers rather than stored, so it can never disagree with
/// what is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the board or the client table.
    #[default]
    Main,
    /// The new request type picker is open.
    Creation,
    /// A detail editor is open.
    Editor,
}

/// The editor field that receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    /// The star rating.
    #[default]
    Rating,
    /// The free-text notes.
    Notes,
    /// The line item list.
    LineItems,
}

impl EditorField {
    /// Returns all fields in tab order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Rating, Self::Notes, Self::LineItems]
    }

    /// Returns the field after this one, wrapping around.
    ///
    /// # Examples
    ///
    /// ```
    /// use returndesk_tui::state::EditorField;
    ///
    /// assert_eq!(EditorField::Rating.next(), EditorField::Notes);
    /// assert_eq!(EditorField::LineItems.next(), EditorField::Rating);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Rating => Self::Notes,
            Self::Notes => Self::LineItems,
            Self::LineItems => Self::Rating,
        }
    }

    /// Returns the label shown in the editor.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rating => "Rating",
            Self::Notes => "Notes",
            Self::LineItems => "Line items",
        }
    }
}

/// The application state.
///
/// Contains all mutable state for the TUI application including the request
/// store, cursors, and the creation and dispatch controllers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The requests being triaged.
    pub store: RequestStore,
    /// Who is looking at the screen.
    pub role: Role,
    /// Expanded/collapsed flag per bucket.
    pub buckets: BucketViewState,
    /// The selection and its detail editor.
    pub dispatch: SelectionController,
    /// The new request flow.
    pub creation: CreationFlow,
    /// Index of the focused bucket (0-3).
    pub selected_bucket: usize,
    /// Index of the focused card within the visible slice of the bucket.
    pub selected_card: Option<usize>,
    /// Index of the focused client table row.
    pub selected_row: Option<usize>,
    /// Editor field receiving input.
    pub editor_field: EditorField,
    /// Focused line in the editor's line item list.
    pub selected_line: usize,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl AppState {
    /// Creates a new application state for a store and a viewer role.
    ///
    /// # Examples
    ///
    /// ```
    /// use returndesk_protocol::{Role, ViewKind, dummy::dummy_store};
    /// use returndesk_tui::{AppState, Focus};
    ///
    /// let state = AppState::new(dummy_store(), Role::Client);
    /// assert_eq!(state.view(), ViewKind::ClientTable);
    /// assert_eq!(state.focus(), Focus::Main);
    /// ```
    #[must_use]
    pub fn new(store: RequestStore, role: Role) -> Self {
        Self {
            store,
            role,
            buckets: BucketViewState::new(),
            dispatch: SelectionController::new(),
            creation: CreationFlow::new(),
            selected_bucket: 0,
            selected_card: None,
            selected_row: None,
            editor_field: EditorField::default(),
            selected_line: 0,
            help_visible: false,
        }
    }

    /// Returns the component receiving keyboard input.
    #[must_use]
    pub fn focus(&self) -> Focus {
        if self.dispatch.is_open() {
            Focus::Editor
        } else if self.creation.is_open() {
            Focus::Creation
        } else {
            Focus::Main
        }
    }

    /// Returns the view the role selects.
    #[must_use]
    pub fn view(&self) -> ViewKind {
        self.role.view()
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Returns the type of the focused bucket.
    #[must_use]
    pub fn selected_kind(&self) -> ReturnType {
        ReturnType::from_index(self.selected_bucket).unwrap_or(FALLBACK_RETURN_TYPE)
    }

    /// Returns how many cards a bucket currently shows.
    #[must_use]
    pub fn visible_len(&self, kind: ReturnType) -> usize {
        let buckets = self.store.buckets();
        self.buckets.visible(buckets.bucket(kind)).len()
    }

    /// Returns how many rows the client table shows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        client_rows(self.store.requests()).len()
    }

    /// Moves the bucket focus to the left, wrapping around if needed.
    pub fn navigate_left(&mut self) {
        let count = ReturnType::all().len();
        self.selected_bucket = (self.selected_bucket + count - 1) % count;
        self.clamp_card_selection();
    }

    /// Moves the bucket focus to the right, wrapping around if needed.
    pub fn navigate_right(&mut self) {
        self.selected_bucket = (self.selected_bucket + 1) % ReturnType::all().len();
        self.clamp_card_selection();
    }

    /// Moves the card or row cursor up, wrapping to the bottom.
    pub fn navigate_up(&mut self) {
        self.step_cursor(false);
    }

    /// Moves the card or row cursor down, wrapping to the top.
    pub fn navigate_down(&mut self) {
        self.step_cursor(true);
    }

    fn step_cursor(&mut self, forward: bool) {
        match self.view() {
            ViewKind::Board => {
                let len = self.visible_len(self.selected_kind());
                self.selected_card = step(self.selected_card, len, forward);
            }
            ViewKind::ClientTable => {
                let len = self.row_count();
                self.selected_row = step(self.selected_row, len, forward);
            }
        }
    }

    /// Expands or collapses the focused bucket.
    ///
    /// Returns the new expanded flag. A card cursor that pointed into the
    /// hidden part is pulled back onto the last visible card.
    pub fn toggle_expand(&mut self) -> bool {
        let expanded = self.buckets.toggle(self.selected_kind());
        self.clamp_card_selection();
        expanded
    }

    /// Puts the cursor on a card if it is visible.
    ///
    /// Returns `false` and leaves the cursor alone otherwise.
    pub fn select_card(&mut self, bucket: usize, card: usize) -> bool {
        let Some(kind) = ReturnType::from_index(bucket) else {
            return false;
        };
        if card >= self.visible_len(kind) {
            return false;
        }
        self.selected_bucket = bucket;
        self.selected_card = Some(card);
        true
    }

    /// Puts the cursor on a client table row if it exists.
    pub fn select_row(&mut self, row: usize) -> bool {
        if row >= self.row_count() {
            return false;
        }
        self.selected_row = Some(row);
        true
    }

    /// Returns the request under the cursor of the current view.
    ///
    /// # Examples
    ///
    /// ```
    /// use returndesk_protocol::{Role, dummy::dummy_store};
    /// use returndesk_tui::AppState;
    ///
    /// let mut state = AppState::new(dummy_store(), Role::Employee);
    /// assert!(state.selected_request().is_none());
    ///
    /// state.navigate_down();
    /// assert_eq!(state.selected_request().map(|r| r.id.as_str()), Some("RET-1001"));
    /// ```
    #[must_use]
    pub fn selected_request(&self) -> Option<&ReturnRequest> {
        match self.view() {
            ViewKind::Board => {
                let card = self.selected_card?;
                let buckets = self.store.buckets();
                self.buckets
                    .visible(buckets.bucket(self.selected_kind()))
                    .get(card)
                    .copied()
            }
            ViewKind::ClientTable => {
                let row = self.selected_row?;
                client_rows(self.store.requests())
                    .get(row)
                    .map(|row| row.request)
            }
        }
    }

    /// Clears the card and row cursors.
    pub fn clear_selection(&mut self) {
        self.selected_card = None;
        self.selected_row = None;
    }

    /// Opens the detail editor for the request under the cursor.
    ///
    /// Returns the new dispatch state, or `None` if nothing is under the
    /// cursor.
    pub fn open_selected(&mut self) -> Option<DispatchState> {
        let request = self.selected_request()?.clone();
        let line_items = self.store.line_items_for(&request.id).to_vec();
        self.reset_editor_cursor();
        Some(self.dispatch.select(request, line_items))
    }

    /// Closes the detail editor, discarding its edits.
    pub fn close_editor(&mut self) {
        self.dispatch.close();
        self.reset_editor_cursor();
    }

    fn reset_editor_cursor(&mut self) {
        self.editor_field = EditorField::default();
        self.selected_line = 0;
    }

    /// Moves editor input to the next field.
    pub fn next_field(&mut self) {
        if self.dispatch.is_open() {
            self.editor_field = self.editor_field.next();
        }
    }

    /// Sets the editor rating to exactly `stars`.
    pub fn set_rating(&mut self, stars: u8) -> Option<Rating> {
        let editor = self.dispatch.editor_mut()?;
        self.editor_field = EditorField::Rating;
        Some(editor.click_star(stars))
    }

    /// Types a character into the notes if they have focus.
    pub fn type_note(&mut self, ch: char) -> bool {
        if self.editor_field != EditorField::Notes {
            return false;
        }
        match self.dispatch.editor_mut() {
            Some(editor) => {
                editor.push_note_char(ch);
                true
            }
            None => false,
        }
    }

    /// Deletes the last notes character if the notes have focus.
    pub fn delete_note_char(&mut self) -> Option<char> {
        if self.editor_field != EditorField::Notes {
            return None;
        }
        self.dispatch.editor_mut()?.pop_note_char()
    }

    /// Moves the line cursor if the line items have focus.
    pub fn navigate_line(&mut self, forward: bool) {
        if self.editor_field != EditorField::LineItems {
            return;
        }
        let len = self.dispatch.editor().map_or(0, |e| e.line_items().len());
        self.selected_line = step(Some(self.selected_line), len, forward).unwrap_or(0);
    }

    /// Cycles the damage type of the focused line.
    ///
    /// Returns the new damage type, or `None` when the line items lack focus
    /// or the request has no lines.
    pub fn cycle_damage(&mut self, forward: bool) -> Option<DamageType> {
        if self.editor_field != EditorField::LineItems {
            return None;
        }
        let line = self.selected_line;
        self.dispatch.editor_mut()?.cycle_damage_type(line, forward)
    }

    /// Triggers the attachment affordance of the open editor.
    pub fn request_attachment(&self) {
        if let Some(editor) = self.dispatch.editor() {
            editor.request_attachment();
        }
    }

    /// Opens the new request type picker.
    pub fn start_creation(&mut self) {
        self.creation.open();
    }

    /// Submits the draft, opening its editor.
    ///
    /// Returns `false` if no draft was staged.
    pub fn submit_creation(&mut self) -> bool {
        let submitted = self.creation.submit(&mut self.dispatch);
        if submitted {
            self.reset_editor_cursor();
        }
        submitted
    }

    /// Ensures the card cursor is valid for the focused bucket.
    fn clamp_card_selection(&mut self) {
        let len = self.visible_len(self.selected_kind());
        if len == 0 {
            self.selected_card = None;
        } else if let Some(idx) = self.selected_card
            && idx >= len
        {
            self.selected_card = Some(len - 1);
        }
    }
}

/// Steps a wrapping cursor over `len` entries.
///
/// An unset cursor lands on the first entry; an empty list clears it.
fn step(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        None => 0,
        Some(idx) if forward => (idx + 1) % len,
        Some(idx) => (idx.min(len - 1) + len - 1) % len,
    })
}
