//! Submission state tracking.

use flood_model::SubmissionState;

use crate::error::{Result, SubmitError};
use crate::task::SubmissionId;
use crate::transport::Receipt;

/// Tracks where the form is in the submit cycle.
///
/// Every submission gets a fresh [`SubmissionId`]; transitions carrying an
/// older id are rejected so late events from a cancelled submission cannot
/// move the state.
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    state: SubmissionState,

    /// Id of the most recent submission.
    current: Option<SubmissionId>,

    /// Id handed out to the next submission.
    next_id: u64,

    /// Receipt of the last successful submission.
    last_receipt: Option<Receipt>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Check if a submission is in flight.
    #[inline]
    pub fn is_sending(&self) -> bool {
        self.state.is_busy()
    }

    pub fn current(&self) -> Option<SubmissionId> {
        self.current
    }

    pub fn last_receipt(&self) -> Option<&Receipt> {
        self.last_receipt.as_ref()
    }

    /// Whether `id` belongs to the most recent submission.
    pub fn is_current(&self, id: SubmissionId) -> bool {
        self.current == Some(id)
    }

    /// Start a submission: idle -> sending.
    pub fn begin(&mut self) -> Result<SubmissionId> {
        match self.state {
            SubmissionState::Idle => {
                let id = SubmissionId(self.next_id);
                self.next_id += 1;
                self.current = Some(id);
                self.state = SubmissionState::Sending;
                Ok(id)
            }
            SubmissionState::Sending => Err(SubmitError::AlreadySending),
            state @ SubmissionState::Success => Err(SubmitError::InvalidTransition {
                state,
                action: "submit",
            }),
        }
    }

    /// The transport finished: sending -> success.
    pub fn complete(&mut self, id: SubmissionId, receipt: Receipt) -> Result<()> {
        self.ensure(id, SubmissionState::Sending, "complete")?;
        self.state = SubmissionState::Success;
        self.last_receipt = Some(receipt);
        Ok(())
    }

    /// The transport failed: sending -> idle.
    pub fn fail(&mut self, id: SubmissionId) -> Result<()> {
        self.ensure(id, SubmissionState::Sending, "fail")?;
        self.state = SubmissionState::Idle;
        Ok(())
    }

    /// The success state timed out: success -> idle.
    pub fn reset(&mut self, id: SubmissionId) -> Result<()> {
        self.ensure(id, SubmissionState::Success, "reset")?;
        self.state = SubmissionState::Idle;
        Ok(())
    }

    /// Abandon the current submission and return to idle.
    pub fn cancel(&mut self) {
        self.state = SubmissionState::Idle;
        self.current = None;
    }

    fn ensure(&self, id: SubmissionId, expected: SubmissionState, action: &'static str) -> Result<()> {
        if !self.is_current(id) || self.state != expected {
            return Err(SubmitError::InvalidTransition {
                state: self.state,
                action,
            });
        }
        Ok(())
    }
}
