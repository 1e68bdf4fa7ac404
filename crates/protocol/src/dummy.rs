//! Sample data for testing and demonstration.
//!
//! This module provides a realistic request store for the TUI when no feed
//! file is configured, and a fixed fixture for tests.
//!
//! # Examples
//!
//! ```
//! use returndesk_protocol::dummy::dummy_store;
//!
//! let store = dummy_store();
//! assert_eq!(store.len(), 16);
//! ```

use crate::line_item::{DamageType, LineItem};
use crate::request::{RequestStatus, ReturnMode, ReturnRequest, ReturnType};
use crate::store::RequestStore;

/// One sample row: id, client, invoice, type, mode, amount, rating, status,
/// progress, created.
type Row = (
    &'static str,
    &'static str,
    &'static str,
    ReturnType,
    ReturnMode,
    &'static str,
    i64,
    RequestStatus,
    i64,
    &'static str,
);

const ROWS: [Row; 16] = {
    use RequestStatus::{Approved, Flagged, Pending};
    use ReturnMode::{Full, Partial};
    use ReturnType::{Damage, Exchange, Missing, Refund};
    [
        ("RET-1001", "Acme Retail", "INV-20931", Refund, Full, "$249.00", 4, Approved, 100, "Jan 06, 2025"),
        ("RET-1002", "Northwind Traders", "INV-20944", Missing, Partial, "$58.40", 3, Pending, 20, "Jan 09, 2025"),
        ("RET-1003", "Globex Corp", "INV-20957", Damage, Partial, "$1,120.00", 2, Flagged, 45, "Jan 13, 2025"),
        ("RET-1004", "Initech", "INV-20962", Refund, Partial, "$89.99", 5, Approved, 80, "Jan 15, 2025"),
        ("RET-1005", "Umbrella Supply", "INV-20970", Exchange, Full, "$310.00", 0, Pending, 10, "Jan 20, 2025"),
        ("RET-1006", "Stark Industries", "INV-20988", Missing, Full, "$742.15", 4, Approved, 60, "Jan 22, 2025"),
        ("RET-1007", "Wayne Logistics", "INV-20991", Refund, Full, "$1,980.00", 1, Flagged, 30, "Jan 27, 2025"),
        ("RET-1008", "Hooli", "INV-21002", Missing, Partial, "$19.99", 0, Pending, 0, "Feb 03, 2025"),
        ("RET-1009", "Soylent Foods", "INV-21015", Refund, Partial, "$64.50", 3, Pending, 15, "Feb 05, 2025"),
        ("RET-1010", "Vandelay Imports", "INV-21021", Damage, Full, "$412.80", 4, Approved, 90, "Feb 11, 2025"),
        ("RET-1011", "Cyberdyne", "INV-21033", Refund, Full, "$2,300.00", 2, Flagged, 55, "Feb 14, 2025"),
        ("RET-1012", "Tyrell Corp", "INV-21040", Missing, Full, "$128.00", 5, Approved, 100, "Feb 18, 2025"),
        ("RET-1013", "Oscorp", "INV-21052", Exchange, Partial, "$76.25", 3, Pending, 35, "Feb 24, 2025"),
        ("RET-1014", "Gringotts", "INV-21067", Refund, Full, "$540.00", 4, Approved, 70, "Mar 03, 2025"),
        ("RET-1015", "Monsters Inc", "INV-21071", Missing, Partial, "$33.10", 2, Flagged, 25, "Mar 05, 2025"),
        ("RET-1016", "Dunder Mifflin", "INV-21089", Refund, Partial, "$205.60", 0, Pending, 5, "Mar 10, 2025"),
    ]
};

/// Returns the sample requests in feed order.
#[must_use]
pub fn dummy_requests() -> Vec<ReturnRequest> {
    ROWS.iter()
        .map(
            |&(id, client, invoice, kind, mode, amount, rating, status, progress, created)| {
                ReturnRequest::new(id, client, invoice, kind)
                    .with_mode(mode)
                    .with_amount(amount)
                    .with_rating(rating)
                    .with_status(status)
                    .with_progress(progress)
                    .with_created(created)
            },
        )
        .collect()
}

/// Generates a sample store with 16 requests.
///
/// The requests are spread over the buckets as follows:
///
/// - **Refund**: 7
/// - **Missing Item**: 5
/// - **Damage**: 2
/// - **Exchange**: 2
///
/// A few requests carry line items so the editors have something to show.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::dummy::dummy_store;
/// use returndesk_protocol::ReturnType;
///
/// let store = dummy_store();
/// let buckets = store.buckets();
///
/// assert_eq!(buckets.bucket(ReturnType::Refund).len(), 7);
/// assert_eq!(buckets.bucket(ReturnType::Missing).len(), 5);
/// assert_eq!(store.line_items_for("RET-1003").len(), 2);
/// ```
#[must_use]
pub fn dummy_store() -> RequestStore {
    RequestStore::new(dummy_requests())
        .with_line_items(
            "RET-1001",
            vec![LineItem::new("SKU-1001", "Wireless Headphones", 1)],
        )
        .with_line_items("RET-1002", vec![LineItem::new("SKU-2210", "USB-C Cable", 3)])
        .with_line_items(
            "RET-1003",
            vec![
                LineItem::new("SKU-4410", "Ceramic Vase Set", 2).with_damage(DamageType::Broken),
                LineItem::new("SKU-4411", "Glass Coasters", 4),
            ],
        )
        .with_line_items(
            "RET-1005",
            vec![LineItem::new("SKU-5120", "Running Shoes (42)", 1)],
        )
        .with_line_items(
            "RET-1010",
            vec![LineItem::new("SKU-7781", "Espresso Machine", 1).with_damage(DamageType::Dented)],
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::{BucketViewState, VISIBLE_LIMIT};

    #[test]
    fn dummy_store_has_correct_request_count() {
        let store = dummy_store();
        assert_eq!(store.len(), 16);
    }

    #[test]
    fn dummy_store_bucket_sizes() {
        let store = dummy_store();
        let counts = store.buckets().counts();

        assert_eq!(
            counts,
            vec![
                (ReturnType::Refund, 7),
                (ReturnType::Missing, 5),
                (ReturnType::Damage, 2),
                (ReturnType::Exchange, 2),
            ]
        );
    }

    #[test]
    fn missing_bucket_shows_every_member_without_affordance() {
        let store = dummy_store();
        let buckets = store.buckets();
        let view = BucketViewState::new();
        let missing = buckets.bucket(ReturnType::Missing);

        assert_eq!(missing.len(), 5);
        assert_eq!(view.visible(missing).len(), 5);
        assert_eq!(view.affordance(missing), None);
    }

    #[test]
    fn refund_bucket_overflows() {
        let store = dummy_store();
        let buckets = store.buckets();
        let refund = buckets.bucket(ReturnType::Refund);

        assert!(refund.has_overflow());
        assert_eq!(refund.visible(false).len(), VISIBLE_LIMIT);
    }

    #[test]
    fn identifiers_are_unique() {
        let requests = dummy_requests();
        let mut ids: Vec<&str> = requests.iter().map(|r| r.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), requests.len());
    }
}
