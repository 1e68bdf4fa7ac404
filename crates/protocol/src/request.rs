//! Return request records.
//!
//! This module defines the [`ReturnRequest`] entity along with its closed
//! enumerations and the clamped numeric fields. Deserialization accepts raw
//! feed values: enumerations go through the classifier and numbers are
//! clamped, so a decoded request always satisfies its invariants.

use serde::{Deserialize, Deserializer, Serialize};

use crate::lenient;

/// The kind of return a customer asked for.
///
/// Also the key of the board buckets and of the detail editors.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::ReturnType;
///
/// assert_eq!(ReturnType::Missing.display_name(), "Missing Item");
/// assert_eq!(ReturnType::Exchange.index(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReturnType {
    /// Money back for the returned goods.
    #[default]
    Refund,
    /// Items that never arrived.
    Missing,
    /// Items that arrived damaged.
    Damage,
    /// Items to be swapped for others.
    Exchange,
}

impl ReturnType {
    /// Returns all return types in board order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Refund, Self::Missing, Self::Damage, Self::Exchange]
    }

    /// Returns a human-readable name for the type.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Refund => "Refund",
            Self::Missing => "Missing Item",
            Self::Damage => "Damage",
            Self::Exchange => "Exchange",
        }
    }

    /// Returns the position of this type on the board (0-3).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Refund => 0,
            Self::Missing => 1,
            Self::Damage => 2,
            Self::Exchange => 3,
        }
    }

    /// Creates a `ReturnType` from its board position.
    ///
    /// Returns `None` if the index is out of range (>= 4).
    ///
    /// # Examples
    ///
    /// ```
    /// use returndesk_protocol::ReturnType;
    ///
    /// assert_eq!(ReturnType::from_index(1), Some(ReturnType::Missing));
    /// assert_eq!(ReturnType::from_index(4), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Refund),
            1 => Some(Self::Missing),
            2 => Some(Self::Damage),
            3 => Some(Self::Exchange),
            _ => None,
        }
    }

    /// Steps to the neighbouring type in board order, wrapping around.
    ///
    /// # Examples
    ///
    /// ```
    /// use returndesk_protocol::ReturnType;
    ///
    /// assert_eq!(ReturnType::Exchange.cycle(true), ReturnType::Refund);
    /// assert_eq!(ReturnType::Refund.cycle(false), ReturnType::Exchange);
    /// ```
    #[must_use]
    pub const fn cycle(self, forward: bool) -> Self {
        let count = Self::all().len();
        let next = if forward {
            (self.index() + 1) % count
        } else {
            (self.index() + count - 1) % count
        };
        match Self::from_index(next) {
            Some(kind) => kind,
            None => self,
        }
    }
}

impl<'de> Deserialize<'de> for ReturnType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::classified(deserializer)
    }
}

/// Whether the whole order or only part of it is being returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReturnMode {
    /// The whole order.
    #[default]
    Full,
    /// Some of the order lines.
    Partial,
}

impl ReturnMode {
    /// Returns a human-readable name for the mode.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Full => "Full",
            Self::Partial => "Partial",
        }
    }
}

impl<'de> Deserialize<'de> for ReturnMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::classified(deserializer)
    }
}

/// Triage status of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Not yet decided.
    #[default]
    Pending,
    /// Accepted by staff.
    Approved,
    /// Needs a closer look.
    Flagged,
}

impl RequestStatus {
    /// Returns all statuses.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Pending, Self::Approved, Self::Flagged]
    }

    /// Returns a human-readable name for the status.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Flagged => "Flagged",
        }
    }
}

impl<'de> Deserialize<'de> for RequestStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::classified(deserializer)
    }
}

/// A star rating between 0 and 5, where 0 means unrated.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::Rating;
///
/// assert_eq!(Rating::new(9).get(), 5);
/// assert_eq!(Rating::new(-2).get(), 0);
/// assert!(!Rating::UNRATED.is_rated());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize,
)]
#[serde(into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Highest rating.
    pub const MAX: u8 = 5;

    /// The unrated value.
    pub const UNRATED: Self = Self(0);

    /// Creates a rating, clamping the value into `0..=5`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(clamp_to(value, Self::MAX))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns `true` unless this is the unrated value.
    #[must_use]
    pub const fn is_rated(self) -> bool {
        self.0 > 0
    }
}

impl<'de> Deserialize<'de> for Rating {
    /// Accepts any value; anything without a number reads as 0.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::new(lenient::integer(deserializer)?.unwrap_or(0)))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Processing progress as a percentage between 0 and 100.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize,
)]
#[serde(into = "u8")]
pub struct Progress(u8);

impl Progress {
    /// Completed.
    pub const MAX: u8 = 100;

    /// Creates a progress value, clamping it into `0..=100`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(clamp_to(value, Self::MAX))
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Progress {
    /// Accepts any value; anything without a number reads as 0.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::new(lenient::integer(deserializer)?.unwrap_or(0)))
    }
}

impl From<Progress> for u8 {
    fn from(progress: Progress) -> Self {
        progress.0
    }
}

fn clamp_to(value: i64, max: u8) -> u8 {
    // The clamp keeps the value within u8 range.
    value.clamp(0, i64::from(max)) as u8
}

/// A customer return request.
///
/// Field names accept the camelCase spelling used by upstream feeds.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::{RequestStatus, ReturnRequest, ReturnType};
///
/// let request = ReturnRequest::new("RET-1", "Acme", "INV-9", ReturnType::Damage)
///     .with_rating(7)
///     .with_status(RequestStatus::Flagged);
///
/// assert_eq!(request.rating.get(), 5);
/// assert!(!request.is_draft());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnRequest {
    /// Identifier; empty only for an unsaved draft.
    #[serde(default)]
    pub id: String,
    /// Customer display name.
    #[serde(default, alias = "clientName")]
    pub client_name: String,
    /// Invoice the return refers to.
    #[serde(default, alias = "invoiceNumber")]
    pub invoice_number: String,
    /// Kind of return.
    #[serde(default, alias = "returnType")]
    pub return_type: ReturnType,
    /// Full or partial return.
    #[serde(default, alias = "returnMode")]
    pub return_mode: ReturnMode,
    /// Formatted amount; opaque to the core.
    #[serde(default)]
    pub amount: String,
    /// Customer rating.
    #[serde(default)]
    pub rating: Rating,
    /// Triage status.
    #[serde(default)]
    pub status: RequestStatus,
    /// Processing progress.
    #[serde(default)]
    pub progress: Progress,
    /// Display date; opaque to the core.
    #[serde(default)]
    pub created: String,
}

impl ReturnRequest {
    /// Creates a pending, unrated request with no progress.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        client_name: impl Into<String>,
        invoice_number: impl Into<String>,
        return_type: ReturnType,
    ) -> Self {
        Self {
            id: id.into(),
            client_name: client_name.into(),
            invoice_number: invoice_number.into(),
            return_type,
            return_mode: ReturnMode::default(),
            amount: String::new(),
            rating: Rating::UNRATED,
            status: RequestStatus::default(),
            progress: Progress::default(),
            created: String::new(),
        }
    }

    /// Sets the return mode.
    #[must_use]
    pub fn with_mode(mut self, mode: ReturnMode) -> Self {
        self.return_mode = mode;
        self
    }

    /// Sets the formatted amount.
    #[must_use]
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    /// Sets the rating, clamped into `0..=5`.
    #[must_use]
    pub fn with_rating(mut self, rating: i64) -> Self {
        self.rating = Rating::new(rating);
        self
    }

    /// Sets the status.
    #[must_use]
    pub fn with_status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the progress, clamped into `0..=100`.
    #[must_use]
    pub fn with_progress(mut self, progress: i64) -> Self {
        self.progress = Progress::new(progress);
        self
    }

    /// Sets the display date.
    #[must_use]
    pub fn with_created(mut self, created: impl Into<String>) -> Self {
        self.created = created.into();
        self
    }

    /// Returns `true` if the request has not been saved yet.
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn return_type_index_roundtrip() {
        for kind in ReturnType::all() {
            assert_eq!(ReturnType::from_index(kind.index()), Some(kind));
        }
    }

    #[test]
    fn return_type_cycle_visits_every_type() {
        let mut kind = ReturnType::Refund;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(kind);
            kind = kind.cycle(true);
        }
        assert_eq!(seen, ReturnType::all());
        assert_eq!(kind, ReturnType::Refund);
        assert_eq!(ReturnType::Missing.cycle(false), ReturnType::Refund);
    }

    #[test]
    fn rating_and_progress_clamp() {
        assert_eq!(Rating::new(3).get(), 3);
        assert_eq!(Rating::new(6).get(), 5);
        assert_eq!(Rating::new(i64::MIN).get(), 0);
        assert_eq!(Progress::new(250).get(), 100);
        assert_eq!(Progress::new(-1).get(), 0);
    }

    #[test]
    fn deserialize_raw_feed_record() {
        let json = r#"{
            "id": "RET-7",
            "clientName": "Globex",
            "invoiceNumber": "INV-1",
            "returnType": "Missing Item",
            "returnMode": "partial",
            "amount": "$12.00",
            "rating": 11,
            "status": "APPROVED",
            "progress": -40,
            "created": "Mar 02, 2025"
        }"#;

        let request: ReturnRequest = serde_json::from_str(json).expect("deserialize");
        assert_eq!(request.client_name, "Globex");
        assert_eq!(request.return_type, ReturnType::Missing);
        assert_eq!(request.return_mode, ReturnMode::Partial);
        assert_eq!(request.status, RequestStatus::Approved);
        assert_eq!(request.rating.get(), 5);
        assert_eq!(request.progress.get(), 0);
    }

    #[test]
    fn deserialize_unknown_values_fall_back() {
        let json = r#"{"id": "RET-8", "return_type": "voucher", "status": "lost"}"#;
        let request: ReturnRequest = serde_json::from_str(json).expect("deserialize");

        assert_eq!(request.return_type, ReturnType::Refund);
        assert_eq!(request.return_mode, ReturnMode::Full);
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.rating, Rating::UNRATED);
    }

    #[test]
    fn deserialize_non_string_and_fractional_values() {
        let json = r#"{
            "id": "RET-11",
            "returnType": 3,
            "returnMode": null,
            "status": null,
            "rating": 4.5,
            "progress": "62"
        }"#;
        let request: ReturnRequest = serde_json::from_str(json).expect("deserialize");

        assert_eq!(request.return_type, ReturnType::Refund);
        assert_eq!(request.return_mode, ReturnMode::Full);
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.rating.get(), 5);
        assert_eq!(request.progress.get(), 62);

        let json = r#"{"id": "RET-12", "rating": "4", "progress": null}"#;
        let request: ReturnRequest = serde_json::from_str(json).expect("deserialize");
        assert_eq!(request.rating.get(), 4);
        assert_eq!(request.progress.get(), 0);
    }

    #[test]
    fn serialize_uses_canonical_names() {
        let request = ReturnRequest::new("RET-9", "Initech", "INV-2", ReturnType::Exchange)
            .with_status(RequestStatus::Flagged)
            .with_rating(4);

        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["return_type"], "exchange");
        assert_eq!(json["return_mode"], "full");
        assert_eq!(json["status"], "flagged");
        assert_eq!(json["rating"], 4);
    }

    #[test]
    fn serialization_roundtrip() {
        let request = ReturnRequest::new("RET-10", "Hooli", "INV-3", ReturnType::Damage)
            .with_mode(ReturnMode::Partial)
            .with_amount("$5.00")
            .with_rating(2)
            .with_progress(40)
            .with_created("Jan 01, 2025");

        let json = serde_json::to_string(&request).expect("serialize");
        let parsed: ReturnRequest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(request, parsed);
    }

    #[test]
    fn empty_id_marks_a_draft() {
        let draft = ReturnRequest::new("", "", "", ReturnType::Refund);
        assert!(draft.is_draft());
    }
}
