mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use common::{ACTOR, Call, FakeBackend, Failure, LAB_ID, draft, lab, published};
use lab_core::enums::{LabStatus, TestSuiteKind};
use lab_editor::session::PUBLISH_FAILED_MESSAGE;
use lab_editor::{EditorDefaults, EditorError, EditorSession, Operation, SessionEvent};
use pretty_assertions::assert_eq;

async fn open(fake: &FakeBackend) -> EditorSession {
    EditorSession::open(fake.arc(), LAB_ID, ACTOR, &EditorDefaults::default())
        .await
        .unwrap()
}

fn record(session: &mut EditorSession) -> Arc<Mutex<Vec<SessionEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    session.on_event(move |event| sink.lock().unwrap().push(event.clone()));
    events
}

fn make_publishable(session: &mut EditorSession) {
    let buffer = session.buffer_mut();
    buffer.prompt_markdown = "Return the indices.".into();
    buffer.starter_code = "function solve(nums, target) {}".into();
}

// ---------------------------------------------------------------------------
// open
// ---------------------------------------------------------------------------

#[tokio::test]
async fn open_loads_the_pinned_draft() {
    let fake = FakeBackend::with_draft();

    let session = open(&fake).await;

    assert_eq!(session.active_version_id(), Some("ver-1"));
    assert!(!session.is_read_only());
    assert_eq!(session.buffer().tests.len(TestSuiteKind::Sample), 1);
    assert!(fake.writes().is_empty());
    assert!(fake.calls().contains(&Call::GetVersion("ver-1".into())));
}

#[tokio::test]
async fn open_tolerates_a_stored_array_input() {
    let stored: lab_core::entities::LabVersion = serde_json::from_value(serde_json::json!({
        "id": "ver-1",
        "labId": LAB_ID,
        "isDraft": true,
        "createdAt": "2026-01-01T00:01:00Z",
        "sampleTests": [{"name": "pair", "input": [1, 2], "expected": {"sum": 3}}]
    }))
    .unwrap();
    let mut draft_lab = lab(LabStatus::Draft);
    draft_lab.current_draft_version_id = Some("ver-1".into());
    let fake = FakeBackend::new(draft_lab, vec![stored]);

    let session = open(&fake).await;

    let rows = session.buffer().tests.rows(TestSuiteKind::Sample);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].case.name, "pair");
    assert!(rows[0].case.input.is_empty());
    assert_eq!(rows[0].expected_text, "{\n  \"sum\": 3\n}");
    assert!(!session.buffer().tests.has_any_errors());
}

#[tokio::test]
async fn open_creates_a_draft_when_none_exists() {
    let mut published_lab = lab(LabStatus::Published);
    published_lab.latest_published_version_id = Some("ver-1".into());
    let fake = FakeBackend::new(published_lab, vec![published("ver-1", 1)]);

    let session = open(&fake).await;

    let created = session.active_version_id().unwrap().to_string();
    assert_ne!(created, "ver-1");
    assert_eq!(
        fake.writes(),
        vec![Call::CreateDraft(lab_core::requests::DraftVersionPayload::bare(ACTOR))]
    );
    assert!(fake.calls().contains(&Call::GetVersion(created.clone())));
    assert_eq!(session.versions().first().unwrap().entity_id(), created);
}

#[tokio::test]
async fn open_refuses_to_create_a_draft_on_an_archived_lab() {
    let fake = FakeBackend::new(lab(LabStatus::Archived), vec![published("ver-1", 1)]);

    let error = EditorSession::open(fake.arc(), LAB_ID, ACTOR, &EditorDefaults::default())
        .await
        .err()
        .unwrap();

    assert!(matches!(error, EditorError::Archived { .. }));
    assert!(fake.writes().is_empty());
}

#[tokio::test]
async fn archived_lab_with_a_draft_opens_read_only() {
    let mut archived = lab(LabStatus::Archived);
    archived.current_draft_version_id = Some("ver-1".into());
    let fake = FakeBackend::new(archived, vec![draft("ver-1", 1)]);
    let mut session = open(&fake).await;
    make_publishable(&mut session);

    assert!(session.is_read_only());
    assert!(matches!(
        session.save().await,
        Err(EditorError::Archived { .. })
    ));
    assert!(matches!(
        session.publish().await,
        Err(EditorError::Archived { .. })
    ));
    assert!(fake.writes().is_empty());
}

// ---------------------------------------------------------------------------
// save
// ---------------------------------------------------------------------------

#[tokio::test]
async fn save_emits_progress_then_result() {
    let fake = FakeBackend::with_draft();
    let mut session = open(&fake).await;
    let events = record(&mut session);

    session.buffer_mut().prompt_markdown = "edited".into();
    let saved = session.save().await.unwrap();

    assert!(!saved.created);
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            SessionEvent::SavingChanged(true),
            SessionEvent::SavingChanged(false),
            SessionEvent::Saved {
                version_id: "ver-1".into()
            },
        ]
    );
    assert!(!session.flags().is_saving());
    assert_eq!(
        fake.version("ver-1").unwrap().prompt_markdown.as_deref(),
        Some("edited")
    );
}

#[tokio::test]
async fn save_to_a_stale_draft_moves_the_active_id() {
    let fake = FakeBackend::with_draft();
    fake.fail_update(Failure::Missing);
    let mut session = open(&fake).await;
    let events = record(&mut session);

    let saved = session.save().await.unwrap();

    let new_id = saved.version_id().to_string();
    assert!(saved.created);
    assert_eq!(session.active_version_id(), Some(new_id.as_str()));
    assert_eq!(
        session.lab().current_draft_version_id.as_deref(),
        Some(new_id.as_str())
    );
    assert!(events.lock().unwrap().contains(&SessionEvent::ActiveVersionChanged {
        from: Some("ver-1".into()),
        to: Some(new_id),
    }));
}

#[tokio::test]
async fn failed_save_keeps_the_buffer() {
    let fake = FakeBackend::with_draft();
    fake.fail_update(Failure::Server);
    let mut session = open(&fake).await;
    let events = record(&mut session);

    session.buffer_mut().prompt_markdown = "unsaved work".into();
    let error = session.save().await.unwrap_err();

    assert!(error.is_remote());
    assert_eq!(session.buffer().prompt_markdown, "unsaved work");
    assert!(matches!(
        events.lock().unwrap().last(),
        Some(SessionEvent::SaveFailed { .. })
    ));
}

#[tokio::test]
async fn saving_flag_is_reset_when_the_save_is_dropped() {
    let fake = FakeBackend::with_draft();
    fake.hang_update();
    let mut session = open(&fake).await;
    let flags = session.flags();

    let seen_in_flight = Arc::new(Mutex::new(None));
    let seen = Arc::clone(&seen_in_flight);
    let observer = session.flags();
    session.on_event(move |event| {
        if *event == SessionEvent::SavingChanged(true) {
            *seen.lock().unwrap() = Some(observer.is_saving());
        }
    });

    let timed_out = tokio::time::timeout(Duration::from_millis(50), session.save()).await;

    assert!(timed_out.is_err());
    assert_eq!(*seen_in_flight.lock().unwrap(), Some(true));
    assert!(!flags.is_saving());
    assert!(!flags.is_busy());
}

// ---------------------------------------------------------------------------
// publish
// ---------------------------------------------------------------------------

#[tokio::test]
async fn gate_violation_is_reported_without_requests() {
    let fake = FakeBackend::with_draft();
    let mut session = open(&fake).await;
    let events = record(&mut session);

    let error = session.publish().await.unwrap_err();

    assert!(matches!(error, EditorError::Validation(_)));
    assert_eq!(session.publish_error(), Some("prompt required"));
    assert_eq!(
        *events.lock().unwrap(),
        vec![SessionEvent::PublishFailed {
            message: "prompt required".into()
        }]
    );
    assert!(fake.writes().is_empty());
}

#[tokio::test]
async fn json_errors_block_publish() {
    let fake = FakeBackend::with_draft();
    let mut session = open(&fake).await;
    make_publishable(&mut session);
    session
        .buffer_mut()
        .tests
        .set_input_text(TestSuiteKind::Sample, 0, "[1, 2]");

    session.publish().await.unwrap_err();

    assert_eq!(
        session.publish_error(),
        Some("fix JSON parsing errors in tests before publishing")
    );
    assert!(fake.writes().is_empty());
}

#[tokio::test]
async fn publish_updates_local_state() {
    let fake = FakeBackend::with_draft();
    let mut session = open(&fake).await;
    make_publishable(&mut session);
    let events = record(&mut session);

    let outcome = session.publish().await.unwrap();

    assert_eq!(outcome.published.entity_id(), "ver-1");
    assert_eq!(session.active_version_id(), None);
    assert_eq!(session.publish_error(), None);
    assert_eq!(session.lab().status(), LabStatus::Published);
    assert_eq!(
        session.lab().latest_published_version_id.as_deref(),
        Some("ver-1")
    );
    assert!(session.versions().iter().all(|v| !v.is_draft));
    assert_eq!(
        *events.lock().unwrap(),
        vec![
            SessionEvent::PublishingChanged(true),
            SessionEvent::PublishingChanged(false),
            SessionEvent::ActiveVersionChanged {
                from: Some("ver-1".into()),
                to: None,
            },
            SessionEvent::Published {
                version_id: "ver-1".into()
            },
        ]
    );
}

#[tokio::test]
async fn next_save_after_publish_starts_a_new_draft() {
    let fake = FakeBackend::with_draft();
    let mut session = open(&fake).await;
    make_publishable(&mut session);
    session.publish().await.unwrap();

    let saved = session.save().await.unwrap();

    assert!(saved.created);
    assert_ne!(saved.version_id(), "ver-1");
    assert_eq!(session.active_version_id(), Some(saved.version_id()));
}

#[tokio::test]
async fn remote_publish_failure_sets_generic_message() {
    let fake = FakeBackend::with_draft();
    fake.fail_publish(Failure::Server);
    let mut session = open(&fake).await;
    make_publishable(&mut session);

    let error = session.publish().await.unwrap_err();

    assert!(error.is_remote());
    assert_eq!(session.publish_error(), Some(PUBLISH_FAILED_MESSAGE));
    assert_eq!(session.active_version_id(), Some("ver-1"));
    assert!(!session.flags().is_publishing());
}

#[tokio::test]
async fn a_successful_save_clears_the_publish_error() {
    let fake = FakeBackend::with_draft();
    let mut session = open(&fake).await;
    session.publish().await.unwrap_err();
    assert!(session.publish_error().is_some());

    session.save().await.unwrap();

    assert_eq!(session.publish_error(), None);
}

#[test]
fn busy_error_names_the_operation() {
    assert_eq!(
        EditorError::Busy(Operation::Publish).to_string(),
        "a publish is already in progress"
    );
}
