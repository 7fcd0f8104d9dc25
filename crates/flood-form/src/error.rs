//! Form error types.

use thiserror::Error;

use flood_ingest::IngestError;
use flood_submit::SubmitError;

/// Errors surfaced by form actions.
///
/// Import and submit failures also replace the form's visible error list.
#[derive(Debug, Error)]
pub enum FormError {
    /// The uploaded file could not be imported.
    #[error(transparent)]
    Import(#[from] IngestError),

    /// One or more required fields are empty.
    #[error("{} required field(s) missing", .errors.len())]
    ValidationFailed { errors: Vec<String> },

    /// Edit targeted a name outside the schema.
    #[error("unknown field: {name}")]
    UnknownField { name: String },

    /// Submit while a submission is in flight.
    #[error("a submission is already in progress")]
    SubmissionBusy,

    /// Submission state machine rejected the action.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

impl FormError {
    /// Messages this error puts in the form's error list.
    pub fn user_messages(&self) -> Vec<String> {
        match self {
            Self::Import(err) => vec![err.user_message()],
            Self::ValidationFailed { errors } => errors.clone(),
            Self::Submit(err) => vec![err.user_message()],
            Self::SubmissionBusy => vec![SubmitError::AlreadySending.user_message()],
            Self::UnknownField { .. } => vec![self.to_string()],
        }
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
