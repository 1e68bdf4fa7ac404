//! Aggregate figures for chart and header collaborators.

use crate::bucket::Buckets;
use crate::request::{RequestStatus, ReturnRequest, ReturnType};

/// Derived counts and averages over a request list.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::{ReturnRequest, ReturnType, Summary};
///
/// let requests = vec![
///     ReturnRequest::new("A", "C", "I", ReturnType::Refund).with_rating(4).with_progress(50),
///     ReturnRequest::new("B", "C", "I", ReturnType::Damage).with_progress(100),
/// ];
/// let summary = Summary::from_requests(&requests);
///
/// assert_eq!(summary.total, 2);
/// assert_eq!(summary.count_of(ReturnType::Damage), 1);
/// assert_eq!(summary.average_rating, Some(4.0));
/// assert_eq!(summary.average_progress, Some(75.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of requests.
    pub total: usize,
    /// Full bucket sizes in board order.
    pub by_type: Vec<(ReturnType, usize)>,
    /// Requests per status.
    pub by_status: Vec<(RequestStatus, usize)>,
    /// Mean rating over rated requests only.
    pub average_rating: Option<f64>,
    /// Mean progress percentage.
    pub average_progress: Option<f64>,
}

impl Summary {
    /// Computes the figures for a request list.
    #[must_use]
    pub fn from_requests(requests: &[ReturnRequest]) -> Self {
        let by_type = Buckets::partition(requests).counts();
        let by_status = RequestStatus::all()
            .into_iter()
            .map(|status| {
                let count = requests.iter().filter(|r| r.status == status).count();
                (status, count)
            })
            .collect();

        let ratings: Vec<f64> = requests
            .iter()
            .filter(|r| r.rating.is_rated())
            .map(|r| f64::from(r.rating.get()))
            .collect();
        let progress: Vec<f64> = requests
            .iter()
            .map(|r| f64::from(r.progress.get()))
            .collect();

        Self {
            total: requests.len(),
            by_type,
            by_status,
            average_rating: mean(&ratings),
            average_progress: mean(&progress),
        }
    }

    /// Returns the bucket size for a type.
    #[must_use]
    pub fn count_of(&self, kind: ReturnType) -> usize {
        lookup(&self.by_type, kind)
    }

    /// Returns the number of requests with a status.
    #[must_use]
    pub fn status_count(&self, status: RequestStatus) -> usize {
        lookup(&self.by_status, status)
    }
}

fn lookup<K: PartialEq>(counts: &[(K, usize)], key: K) -> usize {
    counts
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(0, |(_, n)| *n)
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
