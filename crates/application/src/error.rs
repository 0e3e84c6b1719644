//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The request could not be built or was rejected as malformed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The remote service could not be reached
    #[error("Network unreachable: {0}")]
    NetworkUnreachable(String),

    /// The remote service answered with a non-success status
    #[error("Server error: HTTP {status}")]
    ServerError {
        /// HTTP status code
        status: u16,
    },

    /// The response body did not match the expected schema
    #[error("Decode error: {0}")]
    Decode(String),

    /// Audio output failure
    #[error("Audio error: {0}")]
    Audio(String),

    /// Settings could not be read or persisted
    #[error("Settings error: {0}")]
    Settings(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkUnreachable(_) => true,
            Self::ServerError { status } => *status >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_display() {
        let err = ApplicationError::ServerError { status: 503 };
        assert_eq!(err.to_string(), "Server error: HTTP 503");
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::invalid_coordinates(91.0, 0.0).into();
        assert!(matches!(err, ApplicationError::Domain(_)));
        assert!(err.to_string().contains("91"));
    }

    #[test]
    fn retryable_errors() {
        assert!(ApplicationError::NetworkUnreachable("offline".into()).is_retryable());
        assert!(ApplicationError::ServerError { status: 500 }.is_retryable());
        assert!(!ApplicationError::ServerError { status: 401 }.is_retryable());
        assert!(!ApplicationError::Decode("bad json".into()).is_retryable());
        assert!(!ApplicationError::InvalidRequest("lat".into()).is_retryable());
    }
}
