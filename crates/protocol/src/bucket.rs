//! Board buckets and their expand/collapse state.
//!
//! The board shows one bucket per [`ReturnType`]. Buckets are a stable
//! partition of the request list: each request lands in exactly one bucket
//! and keeps its relative order there.

use std::collections::HashMap;

use crate::request::{ReturnRequest, ReturnType};

/// Number of cards a collapsed bucket shows.
pub const VISIBLE_LIMIT: usize = 6;

/// The requests sharing one return type.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::{Buckets, ReturnRequest, ReturnType};
///
/// let requests = vec![
///     ReturnRequest::new("R-1", "Acme", "INV-1", ReturnType::Missing),
///     ReturnRequest::new("R-2", "Hooli", "INV-2", ReturnType::Refund),
/// ];
/// let buckets = Buckets::partition(&requests);
///
/// assert_eq!(buckets.bucket(ReturnType::Missing).len(), 1);
/// assert!(!buckets.bucket(ReturnType::Missing).has_overflow());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket<'a> {
    /// The type every member shares.
    pub kind: ReturnType,
    /// Members in original feed order.
    pub requests: Vec<&'a ReturnRequest>,
}

impl<'a> Bucket<'a> {
    /// Creates an empty bucket.
    #[must_use]
    pub const fn new(kind: ReturnType) -> Self {
        Self {
            kind,
            requests: Vec::new(),
        }
    }

    /// Returns the full group size, as shown on the count badge.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Returns `true` if no request has this type.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Returns `true` if collapsing hides part of the bucket.
    ///
    /// Buckets at or under [`VISIBLE_LIMIT`] never offer a show more/less
    /// affordance.
    #[must_use]
    pub fn has_overflow(&self) -> bool {
        self.len() > VISIBLE_LIMIT
    }

    /// Returns the members to display.
    ///
    /// A collapsed bucket yields at most [`VISIBLE_LIMIT`] members, an
    /// expanded one yields all of them.
    #[must_use]
    pub fn visible(&self, expanded: bool) -> &[&'a ReturnRequest] {
        if expanded {
            &self.requests
        } else {
            &self.requests[..self.len().min(VISIBLE_LIMIT)]
        }
    }

    /// Returns how many members the collapsed view hides.
    #[must_use]
    pub fn hidden_count(&self, expanded: bool) -> usize {
        self.len() - self.visible(expanded).len()
    }
}

/// The four buckets of the board, indexed by [`ReturnType::index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buckets<'a> {
    buckets: Vec<Bucket<'a>>,
}

impl<'a> Buckets<'a> {
    /// Partitions requests by their return type, keeping feed order.
    #[must_use]
    pub fn partition(requests: &'a [ReturnRequest]) -> Self {
        let mut buckets: Vec<Bucket<'a>> =
            ReturnType::all().into_iter().map(Bucket::new).collect();
        for request in requests {
            buckets[request.return_type.index()].requests.push(request);
        }
        Self { buckets }
    }

    /// Returns the bucket for a type.
    #[must_use]
    pub fn bucket(&self, kind: ReturnType) -> &Bucket<'a> {
        &self.buckets[kind.index()]
    }

    /// Iterates over the buckets in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Bucket<'a>> {
        self.buckets.iter()
    }

    /// Returns the full size of every bucket, including empty ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use returndesk_protocol::{Buckets, ReturnType};
    ///
    /// let buckets = Buckets::partition(&[]);
    /// assert_eq!(buckets.counts(), vec![
    ///     (ReturnType::Refund, 0),
    ///     (ReturnType::Missing, 0),
    ///     (ReturnType::Damage, 0),
    ///     (ReturnType::Exchange, 0),
    /// ]);
    /// ```
    #[must_use]
    pub fn counts(&self) -> Vec<(ReturnType, usize)> {
        self.buckets.iter().map(|b| (b.kind, b.len())).collect()
    }

    /// Returns the number of requests across all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Bucket::len).sum()
    }
}

/// The affordance a bucket footer offers, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// The bucket is collapsed and hides this many requests.
    ShowMore(usize),
    /// The bucket is expanded beyond the collapsed limit.
    ShowLess,
}

/// Per-bucket expanded flags for one board session.
///
/// Every type starts collapsed. Toggling one type never affects another.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::{BucketViewState, ReturnType};
///
/// let mut view = BucketViewState::new();
/// assert!(view.toggle(ReturnType::Refund));
/// assert!(view.is_expanded(ReturnType::Refund));
/// assert!(!view.is_expanded(ReturnType::Missing));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketViewState {
    expanded: HashMap<ReturnType, bool>,
}

impl Default for BucketViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl BucketViewState {
    /// Creates a view state with every bucket collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expanded: ReturnType::all().into_iter().map(|k| (k, false)).collect(),
        }
    }

    /// Returns whether a bucket is expanded.
    #[must_use]
    pub fn is_expanded(&self, kind: ReturnType) -> bool {
        self.expanded.get(&kind).copied().unwrap_or(false)
    }

    /// Flips a bucket's flag and returns the new value.
    pub fn toggle(&mut self, kind: ReturnType) -> bool {
        let flag = self.expanded.entry(kind).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Returns the visible slice of a bucket under this view state.
    #[must_use]
    pub fn visible<'b, 'a>(&self, bucket: &'b Bucket<'a>) -> &'b [&'a ReturnRequest] {
        bucket.visible(self.is_expanded(bucket.kind))
    }

    /// Returns the footer affordance for a bucket.
    #[must_use]
    pub fn affordance(&self, bucket: &Bucket<'_>) -> Option<Affordance> {
        if !bucket.has_overflow() {
            return None;
        }
        if self.is_expanded(bucket.kind) {
            Some(Affordance::ShowLess)
        } else {
            Some(Affordance::ShowMore(bucket.hidden_count(false)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requests_of(kinds: &[ReturnType]) -> Vec<ReturnRequest> {
        kinds
            .iter()
            .enumerate()
            .map(|(i, kind)| ReturnRequest::new(format!("R-{i}"), "Client", "INV", *kind))
            .collect()
    }

    #[test]
    fn partition_keeps_feed_order() {
        let requests = requests_of(&[
            ReturnType::Refund,
            ReturnType::Missing,
            ReturnType::Refund,
            ReturnType::Exchange,
            ReturnType::Refund,
        ]);
        let buckets = Buckets::partition(&requests);

        let ids: Vec<&str> = buckets
            .bucket(ReturnType::Refund)
            .requests
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["R-0", "R-2", "R-4"]);
        assert_eq!(buckets.bucket(ReturnType::Damage).len(), 0);
        assert_eq!(buckets.total(), 5);
    }

    #[test]
    fn collapsed_bucket_truncates_to_limit() {
        let requests = requests_of(&[ReturnType::Damage; 9]);
        let buckets = Buckets::partition(&requests);
        let bucket = buckets.bucket(ReturnType::Damage);

        assert_eq!(bucket.visible(false).len(), VISIBLE_LIMIT);
        assert_eq!(bucket.visible(true).len(), 9);
        assert_eq!(bucket.hidden_count(false), 3);
        assert_eq!(bucket.hidden_count(true), 0);
        assert!(bucket.has_overflow());
    }

    #[test]
    fn bucket_at_limit_has_no_affordance() {
        let requests = requests_of(&[ReturnType::Exchange; VISIBLE_LIMIT]);
        let buckets = Buckets::partition(&requests);
        let mut view = BucketViewState::new();
        let bucket = buckets.bucket(ReturnType::Exchange);

        assert_eq!(view.affordance(bucket), None);
        view.toggle(ReturnType::Exchange);
        assert_eq!(view.affordance(bucket), None);
        assert_eq!(view.visible(bucket).len(), VISIBLE_LIMIT);
    }

    #[test]
    fn affordance_follows_expansion() {
        let requests = requests_of(&[ReturnType::Refund; 8]);
        let buckets = Buckets::partition(&requests);
        let mut view = BucketViewState::new();
        let bucket = buckets.bucket(ReturnType::Refund);

        assert_eq!(view.affordance(bucket), Some(Affordance::ShowMore(2)));
        view.toggle(ReturnType::Refund);
        assert_eq!(view.affordance(bucket), Some(Affordance::ShowLess));
    }

    #[test]
    fn toggles_are_independent() {
        let mut view = BucketViewState::new();
        view.toggle(ReturnType::Refund);
        view.toggle(ReturnType::Damage);
        view.toggle(ReturnType::Refund);

        assert!(!view.is_expanded(ReturnType::Refund));
        assert!(!view.is_expanded(ReturnType::Missing));
        assert!(view.is_expanded(ReturnType::Damage));
        assert!(!view.is_expanded(ReturnType::Exchange));
    }

    #[test]
    fn count_badge_reflects_full_group() {
        let requests = requests_of(&[ReturnType::Missing; 10]);
        let buckets = Buckets::partition(&requests);
        let view = BucketViewState::new();
        let bucket = buckets.bucket(ReturnType::Missing);

        assert_eq!(view.visible(bucket).len(), 6);
        assert_eq!(bucket.len(), 10);
    }
}
