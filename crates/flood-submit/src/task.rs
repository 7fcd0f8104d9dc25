//! Background submission task.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::{AbortHandle, JoinHandle};
use tracing::{info, warn};

use flood_model::FieldSet;

use crate::error::SubmitError;
use crate::transport::{Receipt, Transport};

/// Identifies one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionId(pub(crate) u64);

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Progress reported by a submission task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    /// The transport accepted the snapshot.
    Succeeded { id: SubmissionId, receipt: Receipt },
    /// The transport gave up. The form returns to idle.
    Failed { id: SubmissionId, message: String },
    /// The success state has been shown long enough.
    Reset { id: SubmissionId },
}

impl SubmissionEvent {
    pub fn id(&self) -> SubmissionId {
        match self {
            Self::Succeeded { id, .. } | Self::Failed { id, .. } | Self::Reset { id } => *id,
        }
    }
}

/// Handle to a running submission.
///
/// Dropping the handle cancels the task.
#[derive(Debug)]
pub struct SubmissionHandle {
    id: SubmissionId,
    task: JoinHandle<()>,
}

impl SubmissionHandle {
    pub fn id(&self) -> SubmissionId {
        self.id
    }

    /// Stop the task. No further events are sent.
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for SubmissionHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Run one submission on the tokio runtime.
///
/// The task sends `snapshot` through `transport`, reports the result on
/// `events`, and after a successful send waits `reset_delay` before
/// reporting [`SubmissionEvent::Reset`]. A transport that panics is
/// reported as [`SubmissionEvent::Failed`]. If the receiver is gone the
/// task stops early.
pub fn spawn_submission(
    id: SubmissionId,
    transport: Arc<dyn Transport>,
    snapshot: FieldSet,
    reset_delay: Duration,
    events: UnboundedSender<SubmissionEvent>,
) -> SubmissionHandle {
    let task = tokio::spawn(async move {
        let sender = Arc::clone(&transport);
        let send = tokio::spawn(async move { sender.send(snapshot).await });
        let _abort_send = AbortOnDrop(send.abort_handle());

        let outcome = match send.await {
            Ok(outcome) => outcome,
            Err(join_err) => Err(SubmitError::Transport {
                transport: transport.name().to_string(),
                message: if join_err.is_panic() {
                    "send task panicked".to_string()
                } else {
                    "send task was cancelled".to_string()
                },
            }),
        };

        match outcome {
            Ok(receipt) => {
                info!(submission = %id, transport = transport.name(), "submission succeeded");
                if events.send(SubmissionEvent::Succeeded { id, receipt }).is_err() {
                    return;
                }
                tokio::time::sleep(reset_delay).await;
                let _ = events.send(SubmissionEvent::Reset { id });
            }
            Err(err) => {
                warn!(submission = %id, transport = transport.name(), error = %err, "submission failed");
                let _ = events.send(SubmissionEvent::Failed {
                    id,
                    message: err.to_string(),
                });
            }
        }
    });
    SubmissionHandle { id, task }
}

/// Aborts the inner send when the submission task is cancelled.
struct AbortOnDrop(AbortHandle);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        self.0.abort();
    }
}
