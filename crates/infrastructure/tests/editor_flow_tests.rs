//! Integration tests for the journal editor wired to the in-memory adapters
//!
//! These tests drive whole editing sessions through the real adapter implementations.

#![allow(clippy::expect_used)]

use std::collections::BTreeSet;
use std::sync::Arc;

use application::{EditorPorts, JournalDraftEditor, SubmitError, UploadError};
use chrono::NaiveDate;
use domain::{CountryId, JournalId, JournalRecord, PhotoId, PhotoRef, UploadedPhoto};
use infrastructure::{
    AppConfig, InMemoryJournalStore, InMemoryPhotoStore, RecordingNavigator, ScriptedUploadWidget,
};

// ============================================================================
// Test Helpers
// ============================================================================

struct Harness {
    journal_store: Arc<InMemoryJournalStore>,
    photo_store: Arc<InMemoryPhotoStore>,
    upload_widget: Arc<ScriptedUploadWidget>,
    navigator: Arc<RecordingNavigator>,
}

impl Harness {
    fn new(records: impl IntoIterator<Item = JournalRecord>) -> Self {
        Self {
            journal_store: Arc::new(InMemoryJournalStore::with_records(records)),
            photo_store: Arc::new(InMemoryPhotoStore::new()),
            upload_widget: Arc::new(ScriptedUploadWidget::new()),
            navigator: Arc::new(RecordingNavigator::new()),
        }
    }

    fn empty() -> Self {
        Self::new(Vec::<JournalRecord>::new())
    }

    fn editor(&self, country: &str, record: Option<JournalRecord>) -> JournalDraftEditor {
        let ports = EditorPorts {
            journal_store: self.journal_store.clone(),
            photo_store: self.photo_store.clone(),
            upload_widget: self.upload_widget.clone(),
            navigator: self.navigator.clone(),
        };
        JournalDraftEditor::new(
            ports,
            AppConfig::default().editor_settings(),
            CountryId::new(country).expect("valid country"),
            record,
        )
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn pid(id: &str) -> PhotoId {
    PhotoId::new(id).expect("valid photo id")
}

fn existing_record() -> JournalRecord {
    JournalRecord::new(JournalId::new("j-1").expect("valid id"), "Island hopping")
        .with_text_content("Boat day")
        .with_departure(date(2024, 3, 1))
        .with_homecoming(date(2024, 3, 9))
        .with_photos([PhotoRef::new(pid("p1"), "trips/p1.jpg")])
}

// ============================================================================
// Create Mode
// ============================================================================

#[tokio::test]
async fn new_journal_is_stored_and_navigates() {
    let harness = Harness::empty();
    let mut editor = harness.editor("ph", None);

    editor.set_title("  Manila weekend ");
    editor.set_departure(Some(date(2024, 5, 3)));
    editor.set_homecoming(Some(date(2024, 5, 5)));
    let submitted = editor.submit().await.expect("submit succeeds");

    assert_eq!(submitted.payload.title, "Manila weekend");
    let records = harness.journal_store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Manila weekend");
    assert_eq!(records[0].homecoming, Some(date(2024, 5, 5)));
    assert_eq!(harness.navigator.locations(), vec!["/countries/ph"]);

    assert!(!editor.discard().await.expect("discard succeeds"));
    assert!(harness.photo_store.batches().is_empty());
}

#[tokio::test]
async fn blank_title_blocks_submit() {
    let harness = Harness::empty();
    let mut editor = harness.editor("PH", None);

    editor.set_title("   ");
    let err = editor.submit().await.expect_err("submit is rejected");

    assert!(matches!(err, SubmitError::Invalid(_)));
    assert!(harness.journal_store.is_empty());
    assert!(harness.navigator.locations().is_empty());
}

// ============================================================================
// Edit Mode
// ============================================================================

#[tokio::test]
async fn editing_merges_changes_into_stored_record() {
    let harness = Harness::new([existing_record()]);
    let mut editor = harness.editor("PH", Some(existing_record()));

    editor.set_text_content("");
    harness
        .upload_widget
        .push_outcome(Ok(vec![UploadedPhoto::new("trips/p2.jpg", "p2")]));
    editor.open_upload_widget();
    editor.submit().await.expect("submit succeeds");

    let stored = harness
        .journal_store
        .get(&JournalId::new("j-1").expect("valid id"))
        .expect("record exists");
    assert_eq!(stored.title, "Island hopping");
    assert_eq!(stored.text_content.as_deref(), Some(""));
    assert_eq!(stored.departure, Some(date(2024, 3, 1)));
    assert_eq!(
        stored.photos,
        vec![
            PhotoRef::new(pid("p1"), "trips/p1.jpg"),
            PhotoRef::new(pid("p2"), "trips/p2.jpg"),
        ]
    );
}

#[tokio::test]
async fn delete_record_removes_and_navigates_to_current_country() {
    let harness = Harness::new([existing_record()]);
    let mut editor = harness.editor("PH", Some(existing_record()));

    editor.set_country(CountryId::new("US").expect("valid country"));
    editor.delete_record().await.expect("delete succeeds");

    assert!(harness.journal_store.is_empty());
    assert_eq!(harness.navigator.current().as_deref(), Some("/countries/US"));
}

#[tokio::test]
async fn store_outage_keeps_draft_for_retry() {
    let harness = Harness::new([existing_record()]);
    let mut editor = harness.editor("PH", Some(existing_record()));
    editor.set_title("Renamed");

    harness.journal_store.set_unavailable(true);
    let err = editor.submit().await.expect_err("store is down");
    assert!(matches!(err, SubmitError::Persistence(_)));
    assert!(harness.navigator.locations().is_empty());

    harness.journal_store.set_unavailable(false);
    editor.submit().await.expect("retry succeeds");
    assert_eq!(harness.navigator.locations(), vec!["/countries/PH"]);
}

// ============================================================================
// Uploads & Teardown
// ============================================================================

#[tokio::test]
async fn late_upload_lands_in_current_photo_list() {
    let harness = Harness::empty();
    let mut editor = harness.editor("JP", Some(existing_record()));

    editor.open_upload_widget();
    editor.delete_photo(&pid("p1"));
    assert!(harness.upload_widget.complete_next(Ok(vec![
        UploadedPhoto::new("trips/p3.jpg", "p3"),
        UploadedPhoto::new("trips/p4.jpg", "p4"),
    ])));
    let applied = editor.apply_completed_uploads();

    assert_eq!(applied.added, 2);
    assert_eq!(
        editor.draft().photos(),
        &[
            PhotoRef::new(pid("p3"), "trips/p3.jpg"),
            PhotoRef::new(pid("p4"), "trips/p4.jpg"),
        ]
    );
}

#[tokio::test]
async fn upload_error_leaves_photos_untouched() {
    let harness = Harness::empty();
    let mut editor = harness.editor("JP", Some(existing_record()));

    harness
        .upload_widget
        .push_outcome(Err(UploadError::Failed("network".to_string())));
    editor.open_upload_widget();
    let applied = editor.apply_completed_uploads();

    assert_eq!(applied.added, 0);
    assert_eq!(applied.errors.len(), 1);
    assert_eq!(editor.draft().photos(), existing_record().photos.as_slice());
}

#[tokio::test]
async fn upload_failure_before_submit_is_reported_with_the_save() {
    let harness = Harness::empty();
    let mut editor = harness.editor("jp", None);

    editor.set_title("Osaka");
    harness
        .upload_widget
        .push_outcome(Err(UploadError::Failed("quota".to_string())));
    editor.open_upload_widget();
    let submitted = editor.submit().await.expect("submit succeeds");

    assert_eq!(
        submitted.uploads.errors,
        vec![UploadError::Failed("quota".to_string())]
    );
    assert_eq!(harness.navigator.locations(), vec!["/countries/jp"]);
}

#[tokio::test]
async fn dropped_editor_still_flushes_photo_deletions() {
    let harness = Harness::new([existing_record()]);
    let mut editor = harness.editor("PH", Some(existing_record()));

    editor.delete_photo(&pid("p1"));
    drop(editor);
    for _ in 0..10 {
        if !harness.photo_store.batches().is_empty() {
            break;
        }
        tokio::task::yield_now().await;
    }

    assert_eq!(harness.photo_store.deleted(), BTreeSet::from([pid("p1")]));
}

#[tokio::test]
async fn abandoned_editor_flushes_photo_deletions_once() {
    let harness = Harness::new([existing_record()]);
    let mut editor = harness.editor("PH", Some(existing_record()));

    editor.delete_photo(&pid("p1"));
    editor.delete_photo(&pid("p1"));
    editor.delete_photo(&pid("never-attached"));

    assert!(editor.discard().await.expect("discard succeeds"));
    assert!(!editor.discard().await.expect("second discard is a no-op"));

    assert_eq!(
        harness.photo_store.batches(),
        vec![BTreeSet::from([pid("never-attached"), pid("p1")])]
    );
}

#[tokio::test]
async fn saved_editor_hands_deletions_to_payload_instead() {
    let harness = Harness::new([existing_record()]);
    let mut editor = harness.editor("PH", Some(existing_record()));

    editor.delete_photo(&pid("p1"));
    let submitted = editor.submit().await.expect("submit succeeds");

    assert_eq!(submitted.payload.photos_deleted, Some(BTreeSet::from([pid("p1")])));
    assert!(!editor.discard().await.expect("discard succeeds"));
    assert!(harness.photo_store.batches().is_empty());
}
