//! The request store: canonical records plus their order lines.
//!
//! The store is read-only within the engine. Editors receive clones of the
//! records they are bound to, so nothing an editor does is visible here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bucket::Buckets;
use crate::error::{ProtocolError, Result};
use crate::line_item::LineItem;
use crate::request::ReturnRequest;

/// An ordered list of return requests and the line items of each.
///
/// Deserializes from a feed document of the form
/// `{ "requests": [...], "line_items": { "<id>": [...] } }`.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::RequestStore;
///
/// let store = RequestStore::from_json(r#"{
///     "requests": [{ "id": "RET-1", "clientName": "Acme", "returnType": "Missing Item" }],
///     "line_items": { "RET-1": [{ "item_code": "SKU-1", "item_name": "Lamp", "qty": 2 }] }
/// }"#).unwrap();
///
/// assert_eq!(store.len(), 1);
/// assert_eq!(store.line_items_for("RET-1").len(), 1);
/// assert!(store.line_items_for("RET-2").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestStore {
    #[serde(default)]
    requests: Vec<ReturnRequest>,
    #[serde(default, alias = "lineItems")]
    line_items: BTreeMap<String, Vec<LineItem>>,
}

impl RequestStore {
    /// Creates a store from requests with no line items.
    #[must_use]
    pub fn new(requests: Vec<ReturnRequest>) -> Self {
        Self {
            requests,
            line_items: BTreeMap::new(),
        }
    }

    /// Attaches line items to a request identifier.
    #[must_use]
    pub fn with_line_items(mut self, id: impl Into<String>, items: Vec<LineItem>) -> Self {
        self.line_items.insert(id.into(), items);
        self
    }

    /// Parses a feed document.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::DeserializationFailed`] if the document is not
    /// valid JSON or has the wrong shape. Unknown enumeration values are not
    /// errors; they fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ProtocolError::DeserializationFailed)
    }

    /// Serializes the store as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::SerializationFailed`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(ProtocolError::SerializationFailed)
    }

    /// Returns the requests in feed order.
    #[must_use]
    pub fn requests(&self) -> &[ReturnRequest] {
        &self.requests
    }

    /// Looks up a request by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ReturnRequest> {
        self.requests.iter().find(|r| r.id == id)
    }

    /// Looks up a request by identifier, failing if it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::RequestNotFound`] if no request has this id.
    pub fn require(&self, id: &str) -> Result<&ReturnRequest> {
        self.get(id)
            .ok_or_else(|| ProtocolError::RequestNotFound(id.to_string()))
    }

    /// Returns the line items recorded for a request; empty if none are.
    #[must_use]
    pub fn line_items_for(&self, id: &str) -> &[LineItem] {
        self.line_items.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the number of requests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns `true` if the store holds no requests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Partitions the requests into board buckets.
    #[must_use]
    pub fn buckets(&self) -> Buckets<'_> {
        Buckets::partition(&self.requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{
        FALLBACK_DAMAGE_TYPE, FALLBACK_RETURN_MODE, FALLBACK_RETURN_TYPE, FALLBACK_STATUS,
    };
    use crate::line_item::DamageType;
    use crate::request::{Rating, RequestStatus, ReturnType};

    #[test]
    fn parses_feed_with_raw_values() {
        let store = RequestStore::from_json(
            r#"{
                "requests": [
                    { "id": "A", "return_type": "damaged item", "status": "FLAGGED", "rating": 8 },
                    { "id": "B", "return_type": "gift card", "progress": 400 }
                ],
                "lineItems": {
                    "A": [{ "itemCode": "X", "itemName": "Cup", "qty": 0, "damageType": "broken" }]
                }
            }"#,
        )
        .expect("parse");

        let a = store.require("A").expect("A");
        assert_eq!(a.return_type, ReturnType::Damage);
        assert_eq!(a.status, RequestStatus::Flagged);
        assert_eq!(a.rating.get(), 5);

        let b = store.require("B").expect("B");
        assert_eq!(b.return_type, ReturnType::Refund);
        assert_eq!(b.progress.get(), 100);

        let lines = store.line_items_for("A");
        assert_eq!(lines[0].qty, 1);
        assert_eq!(lines[0].damage_type, DamageType::Broken);
    }

    /// Parses a feed holding one well-formed record followed by `bad`.
    fn feed_with(bad: &str) -> RequestStore {
        let json = format!(r#"{{"requests": [{{"id": "GOOD", "returnType": "Missing"}}, {bad}]}}"#);
        let store = RequestStore::from_json(&json).expect("a bad field must not reject the feed");
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.require("GOOD").expect("GOOD").return_type,
            ReturnType::Missing
        );
        store
    }

    #[test]
    fn odd_classification_values_fall_back() {
        let store = feed_with(r#"{"id": "B", "returnType": null}"#);
        assert_eq!(store.require("B").expect("B").return_type, FALLBACK_RETURN_TYPE);

        let store = feed_with(r#"{"id": "B", "returnType": 3}"#);
        assert_eq!(store.require("B").expect("B").return_type, FALLBACK_RETURN_TYPE);

        let store = feed_with(r#"{"id": "B", "status": null, "returnMode": ["partial"]}"#);
        let b = store.require("B").expect("B");
        assert_eq!(b.status, FALLBACK_STATUS);
        assert_eq!(b.return_mode, FALLBACK_RETURN_MODE);
    }

    #[test]
    fn odd_numeric_values_are_coerced() {
        let store = feed_with(r#"{"id": "B", "rating": 4.5}"#);
        assert_eq!(store.require("B").expect("B").rating.get(), 5);

        let store = feed_with(r#"{"id": "B", "rating": "4"}"#);
        assert_eq!(store.require("B").expect("B").rating.get(), 4);

        let store = feed_with(r#"{"id": "B", "rating": true, "progress": null}"#);
        let b = store.require("B").expect("B");
        assert_eq!(b.rating, Rating::UNRATED);
        assert_eq!(b.progress.get(), 0);

        let store = feed_with(r#"{"id": "B", "progress": "250"}"#);
        assert_eq!(store.require("B").expect("B").progress.get(), 100);
    }

    #[test]
    fn odd_line_item_values_fall_back() {
        let store = RequestStore::from_json(
            r#"{
                "requests": [{ "id": "A" }],
                "lineItems": {
                    "A": [
                        { "itemCode": "X", "qty": 2, "damageType": "broken" },
                        { "itemCode": "Y", "qty": null, "damageType": 7 }
                    ]
                }
            }"#,
        )
        .expect("parse");

        let lines = store.line_items_for("A");
        assert_eq!(lines.len(), 2);
        assert_eq!((lines[0].qty, lines[0].damage_type), (2, DamageType::Broken));
        assert_eq!((lines[1].qty, lines[1].damage_type), (1, FALLBACK_DAMAGE_TYPE));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let store = RequestStore::from_json("{}").expect("parse");
        assert!(store.is_empty());
        assert_eq!(store.buckets().total(), 0);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = RequestStore::from_json("[1, 2").expect_err("should fail");
        assert!(matches!(err, ProtocolError::DeserializationFailed(_)));
    }

    #[test]
    fn require_reports_missing_id() {
        let store = RequestStore::default();
        let err = store.require("RET-9").expect_err("should fail");
        assert!(matches!(err, ProtocolError::RequestNotFound(id) if id == "RET-9"));
    }

    #[test]
    fn json_roundtrip() {
        let store = RequestStore::new(vec![ReturnRequest::new(
            "RET-1",
            "Acme",
            "INV-1",
            ReturnType::Exchange,
        )])
        .with_line_items("RET-1", vec![LineItem::new("SKU-1", "Shoe", 2)]);

        let json = store.to_json().expect("serialize");
        let parsed = RequestStore::from_json(&json).expect("parse");
        assert_eq!(store, parsed);
    }
}
