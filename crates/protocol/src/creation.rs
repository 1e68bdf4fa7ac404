//! Creation flow for brand-new return requests.
//!
//! Opening the flow stages an unsaved draft. The operator picks the draft's
//! return type, then submission hands the draft to the dispatch controller,
//! which opens the matching editor. Nothing leaves this process.

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::request::{Progress, Rating, RequestStatus, ReturnMode, ReturnRequest, ReturnType};
use crate::selection::SelectionController;

/// Format of the `created` field of a draft, e.g. `Mar 04, 2025`.
pub const DRAFT_DATE_FORMAT: &str = "%b %d, %Y";

/// Builds a fresh draft dated `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use returndesk_protocol::creation::draft_request;
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
/// let draft = draft_request(date);
///
/// assert!(draft.is_draft());
/// assert_eq!(draft.created, "Mar 04, 2025");
/// assert_eq!(draft.rating.get(), 0);
/// ```
#[must_use]
pub fn draft_request(date: NaiveDate) -> ReturnRequest {
    ReturnRequest {
        id: String::new(),
        client_name: String::new(),
        invoice_number: String::new(),
        return_type: ReturnType::Refund,
        return_mode: ReturnMode::Full,
        amount: String::new(),
        rating: Rating::UNRATED,
        status: RequestStatus::Pending,
        progress: Progress::default(),
        created: date.format(DRAFT_DATE_FORMAT).to_string(),
    }
}

/// The creation flow's sub-states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CreationFlow {
    /// No draft exists.
    #[default]
    Closed,
    /// A draft exists and its type can still change.
    TypeSelection(ReturnRequest),
}

impl CreationFlow {
    /// Creates a closed flow.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a draft dated today.
    ///
    /// Has no effect if a draft is already staged.
    pub fn open(&mut self) {
        self.open_on(Local::now().date_naive());
    }

    /// Stages a draft with an explicit date.
    ///
    /// Has no effect if a draft is already staged.
    pub fn open_on(&mut self, date: NaiveDate) {
        if self.is_open() {
            debug!("creation flow already open, keeping current draft");
            return;
        }
        *self = Self::TypeSelection(draft_request(date));
        debug!("staged new draft request");
    }

    /// Returns `true` while a draft is staged.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::TypeSelection(_))
    }

    /// Returns the staged draft.
    #[must_use]
    pub fn draft(&self) -> Option<&ReturnRequest> {
        match self {
            Self::Closed => None,
            Self::TypeSelection(draft) => Some(draft),
        }
    }

    /// Changes the draft's return type and nothing else.
    pub fn set_type(&mut self, kind: ReturnType) {
        if let Self::TypeSelection(draft) = self {
            draft.return_type = kind;
        }
    }

    /// Steps the draft's type through board order.
    pub fn cycle_type(&mut self, forward: bool) {
        if let Self::TypeSelection(draft) = self {
            draft.return_type = draft.return_type.cycle(forward);
        }
    }

    /// Discards the draft.
    pub fn cancel(&mut self) {
        if self.is_open() {
            debug!("discarded draft request");
        }
        *self = Self::Closed;
    }

    /// Hands the draft to `dispatch` and closes the flow.
    ///
    /// Returns `false` without dispatching anything if no draft is staged.
    ///
    /// # Examples
    ///
    /// ```
    /// use returndesk_protocol::{CreationFlow, DispatchState, ReturnType, SelectionController};
    ///
    /// let mut creation = CreationFlow::new();
    /// let mut dispatch = SelectionController::new();
    ///
    /// assert!(!creation.submit(&mut dispatch));
    ///
    /// creation.open();
    /// creation.set_type(ReturnType::Exchange);
    /// assert!(creation.submit(&mut dispatch));
    /// assert_eq!(dispatch.state(), DispatchState::ExchangeOpen);
    /// assert!(!creation.is_open());
    /// ```
    pub fn submit(&mut self, dispatch: &mut SelectionController) -> bool {
        match std::mem::take(self) {
            Self::Closed => {
                debug!("submit without a draft ignored");
                false
            }
            Self::TypeSelection(draft) => {
                info!(kind = ?draft.return_type, "submitting draft request");
                dispatch.select(draft, Vec::new());
                true
            }
        }
    }
}
