//! Error types for grievance-core.
//!
//! Three families mirror the three ways an interaction can fail: the backend
//! is unreachable or unhappy ([`GatewayError`]), the user left a required
//! field empty ([`ValidationError`]), or local session storage misbehaved
//! ([`SessionError`]). [`PortalError`] wraps them for command handlers.

use thiserror::Error;

/// Errors returned by a [`PortalGateway`](crate::gateway::PortalGateway).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request never produced a response (offline, DNS, CORS, ...)
    #[error("Network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    /// The body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Errors raised before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required text field was empty
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),
    /// Priority was not one of High/Medium/Low
    #[error("Unknown priority: {0}")]
    InvalidPriority(String),
    /// Neither stars nor emoji were selected
    #[error("Please select a rating")]
    MissingRating,
    /// Rating outside 1..=5
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
    /// Email or password empty on login
    #[error("Please fill in all fields")]
    MissingCredentials,
}

/// Errors from a [`SessionStore`](crate::session::SessionStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Storage is not available on this platform / in this context
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),
    /// Reading or writing the backing file failed
    #[error("Session I/O error: {0}")]
    Io(String),
    /// Stored data could not be encoded/decoded
    #[error("Session serialization error: {0}")]
    Serialization(String),
}

/// Umbrella error for [`Portal`](crate::portal::Portal) commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortalError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Session(#[from] SessionError),
    /// Backend refused the login
    #[error("{0}")]
    LoginDenied(String),
}

impl PortalError {
    /// True when the failure happened before reaching the backend.
    pub fn is_validation(&self) -> bool {
        matches!(self, PortalError::Validation(_))
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = GatewayError::Http {
            status: 404,
            message: "Complaint not found".into(),
        };
        assert_eq!(err.to_string(), "Request failed (404): Complaint not found");
    }

    #[test]
    fn test_portal_error_wraps_validation() {
        let err: PortalError = ValidationError::MissingRating.into();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Please select a rating");
    }

    #[test]
    fn test_gateway_error_is_not_validation() {
        let err: PortalError = GatewayError::Network("offline".into()).into();
        assert!(!err.is_validation());
    }
}
