//! Submission of flood form values.
//!
//! The form never talks to a server directly. A [`Transport`] receives a
//! by-value snapshot of the field set; the bundled [`SimulatedTransport`]
//! only waits a fixed delay before reporting success.
//!
//! # State Machine
//!
//! ```text
//! idle --(submit, valid)--> sending --(delay)--> success --(delay)--> idle
//! ```
//!
//! [`SubmissionTracker`] holds the state; [`spawn_submission`] runs one
//! submission on the tokio runtime and reports back through a channel of
//! [`SubmissionEvent`]s. The returned [`SubmissionHandle`] cancels the task
//! when asked or when dropped.
//!
//! # Architecture
//!
//! - `config.rs` - Delays ([`SubmitConfig`])
//! - `transport.rs` - [`Transport`] trait and the simulated transport
//! - `tracker.rs` - State transitions
//! - `task.rs` - Background task, events and cancellation
//! - `error.rs` - Error types

mod config;
mod error;
mod task;
mod tracker;
mod transport;

pub use config::SubmitConfig;
pub use error::{Result, SubmitError};
pub use task::{SubmissionEvent, SubmissionHandle, SubmissionId, spawn_submission};
pub use tracker::SubmissionTracker;
pub use transport::{Receipt, SimulatedTransport, Transport};
