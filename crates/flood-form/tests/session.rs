//! End-to-end tests of the form session on a paused tokio clock.

use std::fs;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use flood_form::{FormError, FormSession};
use flood_ingest::IngestError;
use flood_model::{FieldName, FieldSet, SubmissionState};
use flood_submit::{Receipt, SubmissionEvent, SubmitConfig, SubmitError, Transport};

const REQUIRED_CSV: &str = "rainfall_intensity,temperature,river_level,elevation,land_use\n\
                            \"10\",\"25\",\"2.5\",\"100\",\"urban\"\n";

fn ready_session() -> FormSession {
    let mut session = FormSession::simulated(SubmitConfig::default());
    session
        .import_bytes("readings.csv", REQUIRED_CSV.as_bytes())
        .expect("import csv");
    session
}

#[tokio::test(start_paused = true)]
async fn test_submit_cycles_idle_sending_success_idle() {
    let mut session = ready_session();
    assert_eq!(session.state().submission_state(), SubmissionState::Idle);
    let start = Instant::now();

    session.submit().expect("submit");
    assert_eq!(session.state().submission_state(), SubmissionState::Sending);

    let event = session.next_event().await.expect("success event");
    assert!(matches!(event, SubmissionEvent::Succeeded { .. }));
    assert_eq!(session.state().submission_state(), SubmissionState::Success);
    assert!(start.elapsed() >= Duration::from_secs(5));

    let event = session.next_event().await.expect("reset event");
    assert!(matches!(event, SubmissionEvent::Reset { .. }));
    assert_eq!(session.state().submission_state(), SubmissionState::Idle);
    assert!(start.elapsed() >= Duration::from_secs(10));

    assert!(session.next_event().await.is_none());
    assert!(!session.has_pending_events());
}

#[tokio::test(start_paused = true)]
async fn test_submit_while_sending_is_rejected() {
    let mut session = ready_session();
    session.submit().expect("first submit");

    let err = session.submit().unwrap_err();
    assert!(matches!(err, FormError::SubmissionBusy));

    let events = session.run_until_idle().await;
    assert_eq!(events.len(), 2);
    assert_eq!(session.state().submission_state(), SubmissionState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_submit_during_success_is_rejected() {
    let mut session = ready_session();
    session.submit().expect("submit");
    session.next_event().await.expect("success event");

    let err = session.submit().unwrap_err();
    assert!(matches!(
        err,
        FormError::Submit(SubmitError::InvalidTransition { .. })
    ));
    assert_eq!(session.state().submission_state(), SubmissionState::Success);
}

#[tokio::test(start_paused = true)]
async fn test_empty_form_fails_validation_and_stays_idle() {
    let mut session = FormSession::simulated(SubmitConfig::default());

    let err = session.submit().unwrap_err();

    let errors = match err {
        FormError::ValidationFailed { errors } => errors,
        other => panic!("expected validation failure, got {other:?}"),
    };
    assert_eq!(errors.len(), 5);
    assert_eq!(session.state().errors(), errors.as_slice());
    assert_eq!(session.state().submission_state(), SubmissionState::Idle);
    assert!(session.next_event().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_header_only_csv_leaves_fields_unchanged() {
    let mut session = ready_session();
    let before = session.state().fields().clone();

    let err = session
        .import_bytes("empty.csv", b"rainfall_intensity,temperature\n")
        .unwrap_err();

    assert!(matches!(
        err,
        FormError::Import(IngestError::EmptyOrMalformed { .. })
    ));
    assert_eq!(session.state().errors().len(), 1);
    assert_eq!(session.state().fields(), &before);
}

#[tokio::test(start_paused = true)]
async fn test_txt_upload_is_rejected_without_changes() {
    let mut session = ready_session();
    let before = session.state().fields().clone();

    let err = session.import_bytes("notes.txt", b"hello").unwrap_err();

    assert!(matches!(
        err,
        FormError::Import(IngestError::UnsupportedFormat { .. })
    ));
    assert_eq!(session.state().errors().len(), 1);
    assert_eq!(session.state().fields(), &before);
}

#[tokio::test(start_paused = true)]
async fn test_import_file_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("station.json");
    fs::write(&path, r#"{"river_level": 3.25, "past_flood": "yes"}"#).expect("write");

    let mut session = FormSession::simulated(SubmitConfig::default());
    let summary = session.import_file(&path).await.expect("import");

    assert_eq!(summary.imported_count(), 2);
    assert_eq!(session.state().field(FieldName::RiverLevel), "3.25");
    assert_eq!(session.state().field(FieldName::PastFlood), "yes");
}

struct RecordingTransport {
    seen: Mutex<Vec<FieldSet>>,
}

#[async_trait]
impl Transport for RecordingTransport {
    fn name(&self) -> &str {
        "recording"
    }

    async fn send(&self, fields: FieldSet) -> flood_submit::Result<Receipt> {
        tokio::time::sleep(Duration::from_secs(2)).await;
        let receipt = Receipt::for_fields(&fields);
        self.seen.lock().unwrap().push(fields);
        Ok(receipt)
    }
}

#[tokio::test(start_paused = true)]
async fn test_edits_during_sending_do_not_reach_transport() {
    let transport = Arc::new(RecordingTransport {
        seen: Mutex::new(Vec::new()),
    });
    let mut session = FormSession::new(transport.clone(), SubmitConfig::immediate());
    session
        .import_bytes("readings.csv", REQUIRED_CSV.as_bytes())
        .expect("import");

    session.submit().expect("submit");
    session.set_field(FieldName::LandUse, "forest");
    session.run_until_idle().await;

    let seen = transport.seen.lock().unwrap();
    assert_eq!(seen[0].get(FieldName::LandUse), "urban");
    assert_eq!(session.state().field(FieldName::LandUse), "forest");
}

#[tokio::test(start_paused = true)]
async fn test_cancel_returns_to_idle_and_allows_resubmit() {
    let mut session = ready_session();
    session.submit().expect("submit");
    tokio::time::sleep(Duration::from_secs(1)).await;

    session.cancel_submission();

    assert_eq!(session.state().submission_state(), SubmissionState::Idle);
    assert!(session.next_event().await.is_none());

    session.submit().expect("resubmit");
    let events = session.run_until_idle().await;
    assert_eq!(events.len(), 2);
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
async fn test_panicking_transport_returns_form_to_idle() {
    let mut session = FormSession::new(Arc::new(PanickingTransport), SubmitConfig::default());
    session
        .import_bytes("readings.csv", REQUIRED_CSV.as_bytes())
        .expect("import");
    session.submit().expect("submit");

    let event = tokio::time::timeout(Duration::from_secs(2), session.next_event())
        .await
        .expect("event before timeout")
        .expect("failure event");

    assert!(matches!(event, SubmissionEvent::Failed { .. }));
    assert_eq!(session.state().submission_state(), SubmissionState::Idle);
    assert!(!session.has_pending_events());
    assert_eq!(
        session.state().errors(),
        &["Submission failed: transport 'panicking' failed: send task panicked".to_string()]
    );

    session.submit().expect("submit is available again");
}

