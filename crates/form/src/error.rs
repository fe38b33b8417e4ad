//! Error taxonomy for form submissions and the single policy that turns
//! each kind into the string shown to the user.

use recs_client::ServiceError;
use thiserror::Error;

/// Shown when nothing non-blank was entered.
pub const NO_TITLES_MESSAGE: &str = "Please enter at least one movie title";

/// Shown when a transport failure carries no message of its own.
pub const FALLBACK_TRANSPORT_MESSAGE: &str = "An error occurred while fetching recommendations";

/// Input problems caught before any request is made
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no non-blank movie titles were entered")]
    NoTitles,
}

/// Everything that can end a submission without recommendations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transport failed: {0}")]
    Transport(#[from] ServiceError),
}

impl FormError {
    /// The text the result view displays for this error.
    pub fn display_message(&self) -> String {
        match self {
            FormError::Validation(ValidationError::NoTitles) => NO_TITLES_MESSAGE.to_string(),
            FormError::Transport(err) => err
                .user_message()
                .unwrap_or_else(|| FALLBACK_TRANSPORT_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message() {
        let err = FormError::from(ValidationError::NoTitles);
        assert_eq!(err.display_message(), "Please enter at least one movie title");
    }

    #[test]
    fn test_transport_uses_carried_message() {
        let err = FormError::from(ServiceError::Status {
            status: 400,
            detail: Some("No movies provided".to_string()),
        });
        assert_eq!(err.display_message(), "No movies provided");
    }

    #[test]
    fn test_transport_without_message_falls_back() {
        let err = FormError::from(ServiceError::Unknown);
        assert_eq!(
            err.display_message(),
            "An error occurred while fetching recommendations"
        );
    }
}
