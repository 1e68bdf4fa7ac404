//! The compact table shown to clients.

use crate::request::{RequestStatus, ReturnRequest};

/// Number of requests the client table shows.
pub const CLIENT_TABLE_LIMIT: usize = 3;

/// Added to the star rating to produce the displayed satisfaction.
///
/// This reproduces the figure the screen has always shown; it has no
/// agreed business meaning yet.
pub const SATISFACTION_OFFSET: f64 = 0.4;

/// Health label derived from a request's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientHealth {
    /// Approved requests.
    Healthy,
    /// Flagged requests.
    AtRisk,
    /// Pending requests.
    Monitor,
}

impl ClientHealth {
    /// Maps a status to its health label.
    #[must_use]
    pub const fn from_status(status: RequestStatus) -> Self {
        match status {
            RequestStatus::Approved => Self::Healthy,
            RequestStatus::Flagged => Self::AtRisk,
            RequestStatus::Pending => Self::Monitor,
        }
    }

    /// Returns the label shown in the table.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::AtRisk => "At Risk",
            Self::Monitor => "Monitor",
        }
    }
}

/// Returns the displayed satisfaction for a request.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::{ReturnRequest, ReturnType};
/// use returndesk_protocol::client::satisfaction;
///
/// let request = ReturnRequest::new("R", "C", "I", ReturnType::Refund).with_rating(3);
/// assert!((satisfaction(&request) - 3.4).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn satisfaction(request: &ReturnRequest) -> f64 {
    f64::from(request.rating.get()) + SATISFACTION_OFFSET
}

/// One row of the client table.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientRow<'a> {
    /// The request behind the row.
    pub request: &'a ReturnRequest,
    /// Rating plus [`SATISFACTION_OFFSET`].
    pub satisfaction: f64,
    /// Health label from the status.
    pub health: ClientHealth,
}

/// Projects the first [`CLIENT_TABLE_LIMIT`] requests into table rows.
#[must_use]
pub fn client_rows(requests: &[ReturnRequest]) -> Vec<ClientRow<'_>> {
    requests
        .iter()
        .take(CLIENT_TABLE_LIMIT)
        .map(|request| ClientRow {
            request,
            satisfaction: satisfaction(request),
            health: ClientHealth::from_status(request.status),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::ReturnType;

    #[test]
    fn health_mapping() {
        assert_eq!(
            ClientHealth::from_status(RequestStatus::Approved).label(),
            "Healthy"
        );
        assert_eq!(
            ClientHealth::from_status(RequestStatus::Flagged).label(),
            "At Risk"
        );
        assert_eq!(
            ClientHealth::from_status(RequestStatus::Pending).label(),
            "Monitor"
        );
    }

    #[test]
    fn rows_take_the_first_three_in_order() {
        let requests: Vec<ReturnRequest> = (0..5)
            .map(|i| {
                ReturnRequest::new(format!("R-{i}"), "C", "I", ReturnType::Damage).with_rating(i)
            })
            .collect();

        let rows = client_rows(&requests);
        let ids: Vec<&str> = rows.iter().map(|r| r.request.id.as_str()).collect();
        assert_eq!(ids, vec!["R-0", "R-1", "R-2"]);
        assert!((rows[2].satisfaction - 2.4).abs() < 1e-9);
    }

    #[test]
    fn short_lists_are_not_padded() {
        let requests = vec![ReturnRequest::new("R", "C", "I", ReturnType::Refund)];
        let rows = client_rows(&requests);
        assert_eq!(rows.len(), 1);
        assert!((rows[0].satisfaction - SATISFACTION_OFFSET).abs() < 1e-9);
        assert_eq!(rows[0].health, ClientHealth::Monitor);
    }
}
