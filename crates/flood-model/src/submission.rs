//! Submission state shown by the submit control.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where the form is in the submit cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Success,
}

impl SubmissionState {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Sending => "Sending",
            Self::Success => "Success",
        }
    }

    /// Whether a submission is in flight. The submit control is disabled.
    #[inline]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Sending)
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
