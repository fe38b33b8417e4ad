//! State types the form exposes to front ends.

use crate::entries::EntryList;
use crate::error::ValidationError;

/// Whether a submission is currently awaiting the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
}

impl SubmissionState {
    pub fn is_loading(self) -> bool {
        self == SubmissionState::Loading
    }
}

/// The single outcome currently on display.
///
/// Exactly one variant is active; a new submission resets it to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultView {
    #[default]
    None,
    Error(String),
    Success {
        recommendations: Vec<String>,
        message: Option<String>,
    },
}

impl ResultView {
    /// Build a success view. An empty message is treated as absent.
    pub fn success(recommendations: Vec<String>, message: Option<String>) -> Self {
        ResultView::Success {
            recommendations,
            message: message.filter(|m| !m.is_empty()),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ResultView::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Owned copy of everything needed to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub entries: EntryList,
    pub state: SubmissionState,
    pub result: ResultView,
}

/// What a single `submit()` call ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The response (or transport error) became the visible result
    Applied(ResultView),

    /// Input failed validation; no request was made
    Rejected(ValidationError),

    /// A newer submission started first; this response was discarded
    Superseded,

    /// Aborted by a newer submission or by closing the form
    Cancelled,
}
