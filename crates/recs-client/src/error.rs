//! Error types for the recommendation client.
//!
//! Every way a call to the service can fail is folded into one enum so that
//! callers can treat failures uniformly while still being able to tell them
//! apart in logs and tests.

use thiserror::Error;

/// Errors that can occur when talking to the recommendation service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The HTTP client itself could not be built
    #[error("Invalid client configuration: {0}")]
    Configuration(String),

    /// Network failure before a response arrived
    #[error("Failed to reach recommendation service: {0}")]
    Connection(String),

    /// The configured request timeout elapsed
    #[error("Request to recommendation service timed out")]
    Timeout,

    /// The service answered with a non-success status
    ///
    /// `detail` holds the service's own explanation when the error body
    /// carried one (`{ "detail": "..." }`).
    #[error("Recommendation service returned status {status}")]
    Status { status: u16, detail: Option<String> },

    /// A success status with a body we could not understand
    #[error("Invalid response from recommendation service: {0}")]
    InvalidResponse(String),

    /// A failure that carries no description at all
    #[error("Recommendation request failed")]
    Unknown,
}

impl ServiceError {
    /// The human-readable message this error carries, if any.
    ///
    /// Returns `None` when there is nothing meaningful to show, so the
    /// caller can substitute its own fallback text.
    pub fn user_message(&self) -> Option<String> {
        let message = match self {
            ServiceError::Configuration(msg)
            | ServiceError::Connection(msg)
            | ServiceError::InvalidResponse(msg) => msg.clone(),
            ServiceError::Timeout => "Request timed out".to_string(),
            ServiceError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ServiceError::Status {
                status,
                detail: None,
            } => format!("Request failed with status code {}", status),
            ServiceError::Unknown => return None,
        };

        if message.trim().is_empty() {
            None
        } else {
            Some(message)
        }
    }
}
