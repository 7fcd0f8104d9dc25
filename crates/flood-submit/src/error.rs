//! Submission error types.

use flood_model::SubmissionState;
use thiserror::Error;

/// Submission operation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Submit was requested while a submission is in flight.
    #[error("a submission is already in progress")]
    AlreadySending,

    /// The requested transition does not exist from the current state.
    #[error("cannot {action} while {state}")]
    InvalidTransition {
        state: SubmissionState,
        action: &'static str,
    },

    /// A transport reported a failure.
    #[error("transport '{transport}' failed: {message}")]
    Transport { transport: String, message: String },
}

impl SubmitError {
    /// Message shown in the form's error list.
    pub fn user_message(&self) -> String {
        match self {
            Self::AlreadySending => "A submission is already in progress.".to_string(),
            Self::InvalidTransition {
                state: SubmissionState::Success,
                ..
            } => "The form was just submitted. Please wait a moment before submitting again."
                .to_string(),
            Self::InvalidTransition { .. } => "The form is not ready to submit.".to_string(),
            Self::Transport { message, .. } => format!("Submission failed: {message}"),
        }
    }
}

/// Result type alias for submission operations.
pub type Result<T> = std::result::Result<T, SubmitError>;
