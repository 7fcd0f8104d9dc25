//! Async form session: form state plus background submission.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use flood_ingest::{ImportSummary, import_file_async};
use flood_model::FieldName;
use flood_submit::{
    SimulatedTransport, SubmissionEvent, SubmissionHandle, SubmissionId, SubmitConfig, Transport,
    spawn_submission,
};

use crate::error::Result;
use crate::state::FormState;

/// A form together with the transport its submissions go through.
///
/// The session is the single owner of the form state. Submissions run as
/// tokio tasks on a snapshot and report back through a channel; call
/// [`FormSession::next_event`] to apply their progress. Dropping the
/// session cancels any submission in flight.
pub struct FormSession {
    state: FormState,
    transport: Arc<dyn Transport>,
    config: SubmitConfig,
    events_tx: UnboundedSender<SubmissionEvent>,
    events_rx: UnboundedReceiver<SubmissionEvent>,
    in_flight: Option<SubmissionHandle>,
}

impl FormSession {
    pub fn new(transport: Arc<dyn Transport>, config: SubmitConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: FormState::new(),
            transport,
            config,
            events_tx,
            events_rx,
            in_flight: None,
        }
    }

    /// Session backed by [`SimulatedTransport`] with the configured delay.
    pub fn simulated(config: SubmitConfig) -> Self {
        let transport = Arc::new(SimulatedTransport::from_config(&config));
        Self::new(transport, config)
    }

    #[inline]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn config(&self) -> &SubmitConfig {
        &self.config
    }

    pub fn set_field(&mut self, name: FieldName, value: impl Into<String>) {
        self.state.set_field(name, value);
    }

    pub fn set_fields<I>(&mut self, edits: I)
    where
        I: IntoIterator<Item = (FieldName, String)>,
    {
        self.state.set_fields(edits);
    }

    pub fn set_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        self.state.set_field_by_name(name, value)
    }

    pub fn import_bytes(&mut self, file_name: &str, content: &[u8]) -> Result<ImportSummary> {
        self.state.apply_import(file_name, content)
    }

    /// Read and import a file on a blocking thread.
    ///
    /// Imports are not serialized: whichever completes last determines the
    /// form contents.
    pub async fn import_file(&mut self, path: &Path) -> Result<ImportSummary> {
        let result = import_file_async(path.to_path_buf()).await;
        self.state.apply_import_result(result)
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Validate and, if valid, start a background submission.
    pub fn submit(&mut self) -> Result<SubmissionId> {
        let (id, snapshot) = self.state.begin_submit()?;
        self.in_flight = Some(spawn_submission(
            id,
            Arc::clone(&self.transport),
            snapshot,
            self.config.reset_delay(),
            self.events_tx.clone(),
        ));
        Ok(id)
    }

    /// Whether a submission task is still expected to report.
    pub fn has_pending_events(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Wait for the next event of the current submission and apply it.
    ///
    /// Returns `None` when no submission is in flight. Events left over from
    /// cancelled submissions are skipped.
    pub async fn next_event(&mut self) -> Option<SubmissionEvent> {
        let current = self.in_flight.as_ref()?.id();
        loop {
            let event = self.events_rx.recv().await?;
            if event.id() != current || !self.state.apply_event(&event) {
                continue;
            }
            if matches!(
                event,
                SubmissionEvent::Reset { .. } | SubmissionEvent::Failed { .. }
            ) {
                self.in_flight = None;
            }
            return Some(event);
        }
    }

    /// Apply events until the current submission has returned to idle.
    pub async fn run_until_idle(&mut self) -> Vec<SubmissionEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.next_event().await {
            events.push(event);
        }
        events
    }

    /// Stop the submission in flight, if any, and return to idle.
    pub fn cancel_submission(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.cancel();
        }
        self.state.cancel_submission();
        while self.events_rx.try_recv().is_ok() {}
    }
}
