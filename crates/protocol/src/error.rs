//! Error types for the returndesk-protocol crate.
//!
//! Classification and clamping never fail, so the only errors here come
//! from encoding feed documents and from lookups by identifier.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Failed to serialize a protocol type to JSON.
    #[error("failed to serialize to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Failed to deserialize a protocol type from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),

    /// No request with the given identifier exists in the store.
    #[error("request not found: {0}")]
    RequestNotFound(String),

    /// A role name did not match any known role.
    #[error("unknown role: {0:?} (expected employee, manager or client)")]
    UnknownRole(String),
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProtocolError::RequestNotFound("RET-404".to_string());
        assert_eq!(err.to_string(), "request not found: RET-404");

        let err = ProtocolError::UnknownRole("auditor".to_string());
        assert!(err.to_string().contains("auditor"));
    }
}
