//! Timing tests for the submission task, run on a paused tokio clock.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time::Instant;

use flood_model::{FieldName, FieldSet};
use flood_submit::{
    Receipt, SimulatedTransport, SubmissionEvent, SubmissionTracker, SubmitError, Transport,
    spawn_submission,
};

struct RecordingTransport {
    seen: Mutex<Vec<FieldSet>>,
}

#[async_trait]
impl Transport for RecordingTransport {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send(&self, fields: FieldSet) -> flood_submit::Result<Receipt> {
        tokio::time::sleep(Duration::from_secs(1)).await;
        let receipt = Receipt::for_fields(&fields);
        self.seen.lock().unwrap().push(fields);
        Ok(receipt)
    }
}

struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    fn name(&self) -> &str {
        "failing"
    }

    async fn send(&self, _fields: FieldSet) -> flood_submit::Result<Receipt> {
        Err(SubmitError::Transport {
            transport: "failing".to_string(),
            message: "connection refused".to_string(),
        })
    }
}

#[tokio::test(start_paused = true)]
async fn test_reports_success_then_reset_after_delays() {
    let mut tracker = SubmissionTracker::new();
    let id = tracker.begin().unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let start = Instant::now();

    let _handle = spawn_submission(
        id,
        Arc::new(SimulatedTransport::new(Duration::from_secs(5))),
        FieldSet::new(),
        Duration::from_secs(5),
        tx,
    );

    let event = rx.recv().await.unwrap();
    assert!(matches!(event, SubmissionEvent::Succeeded { .. }));
    assert_eq!(event.id(), id);
    assert!(start.elapsed() >= Duration::from_secs(5));
    assert!(start.elapsed() < Duration::from_secs(10));

    let event = rx.recv().await.unwrap();
    assert_eq!(event, SubmissionEvent::Reset { id });
    assert!(start.elapsed() >= Duration::from_secs(10));

    assert!(rx.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_cancel_stops_all_events() {
    let mut tracker = SubmissionTracker::new();
    let id = tracker.begin().unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let handle = spawn_submission(
        id,
        Arc::new(SimulatedTransport::new(Duration::from_secs(5))),
        FieldSet::new(),
        Duration::from_secs(5),
        tx,
    );
    tokio::time::sleep(Duration::from_secs(1)).await;
    handle.cancel();

    assert!(rx.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_handle_cancels() {
    let mut tracker = SubmissionTracker::new();
    let id = tracker.begin().unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let handle = spawn_submission(
        id,
        Arc::new(SimulatedTransport::default()),
        FieldSet::new(),
        Duration::from_secs(5),
        tx,
    );
    drop(handle);

    assert!(rx.recv().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_transport_receives_snapshot_by_value() {
    let mut tracker = SubmissionTracker::new();
    let id = tracker.begin().unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let transport = Arc::new(RecordingTransport {
        seen: Mutex::new(Vec::new()),
    });

    let mut fields = FieldSet::new();
    fields.set(FieldName::LandUse, "urban");
    let _handle = spawn_submission(
        id,
        transport.clone(),
        fields.clone(),
        Duration::ZERO,
        tx,
    );
    fields.set(FieldName::LandUse, "forest");

    let event = rx.recv().await.unwrap();
    assert!(matches!(event, SubmissionEvent::Succeeded { .. }));

    let seen = transport.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].get(FieldName::LandUse), "urban");
}

#[tokio::test(start_paused = true)]
async fn test_failing_transport_reports_failure_without_reset() {
    let mut tracker = SubmissionTracker::new();
    let id = tracker.begin().unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let _handle = spawn_submission(
        id,
        Arc::new(FailingTransport),
        FieldSet::new(),
        Duration::from_secs(5),
        tx,
    );

    let event = rx.recv().await.unwrap();
    assert_eq!(
        event,
        SubmissionEvent::Failed {
            id,
            message: "transport 'failing' failed: connection refused".to_string(),
        }
    );
    assert!(rx.recv().await.is_none());
}

struct PanickingTransport;

#[async_trait]
impl Transport for PanickingTransport {
    fn name(&self) -> &str {
        "panicking"
    }

    async fn send(&self, _fields: FieldSet) -> flood_submit::Result<Receipt> {
        panic!("transport bug");
    }
}

#[tokio::test(start_paused = true)]
async fn test_panicking_transport_reports_failure() {
    let mut tracker = SubmissionTracker::new();
    let id = tracker.begin().unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let _handle = spawn_submission(
        id,
        Arc::new(PanickingTransport),
        FieldSet::new(),
        Duration::from_secs(5),
        tx,
    );

    let event = rx.recv().await.unwrap();
    assert_eq!(
        event,
        SubmissionEvent::Failed {
            id,
            message: "transport 'panicking' failed: send task panicked".to_string(),
        }
    );
    assert!(rx.recv().await.is_none());
}
