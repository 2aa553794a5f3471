//! Scripted editing sessions
//!
//! A session seeds the editor with an optional record and applies a list of
//! user actions in order. The editor is discarded at the end, the same way a
//! closed form would be.

use std::sync::Arc;

use application::{
    EditorPorts, EditorSettings, JournalDraftEditor, SubmitError, Submitted, UploadError,
};
use chrono::NaiveDate;
use domain::{CommitPayload, CountryId, JournalRecord, PhotoId, PhotoRef, UploadedPhoto};
use infrastructure::{
    InMemoryJournalStore, InMemoryPhotoStore, RecordingNavigator, ScriptedUploadWidget,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Session file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Session {
    /// Country context; the `--country` flag takes precedence
    #[serde(default)]
    pub country: Option<String>,

    /// Existing record to edit; absent for a new journal
    #[serde(default)]
    pub record: Option<JournalRecord>,

    /// User actions in the order they happen
    #[serde(default)]
    pub actions: Vec<SessionAction>,
}

/// A single user action
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionAction {
    SetTitle {
        value: String,
    },
    SetTextContent {
        value: String,
    },
    SetDeparture {
        #[serde(default)]
        date: Option<NaiveDate>,
    },
    SetHomecoming {
        #[serde(default)]
        date: Option<NaiveDate>,
    },
    /// Open the upload widget; it answers with `photos`, or with `error` if set
    Upload {
        #[serde(default)]
        photos: Vec<UploadedPhoto>,
        #[serde(default)]
        error: Option<String>,
    },
    DeletePhoto {
        id: String,
    },
    Submit,
    DeleteRecord,
    SetCountry {
        country: String,
    },
}

impl SessionAction {
    const fn name(&self) -> &'static str {
        match self {
            Self::SetTitle { .. } => "set_title",
            Self::SetTextContent { .. } => "set_text_content",
            Self::SetDeparture { .. } => "set_departure",
            Self::SetHomecoming { .. } => "set_homecoming",
            Self::Upload { .. } => "upload",
            Self::DeletePhoto { .. } => "delete_photo",
            Self::Submit => "submit",
            Self::DeleteRecord => "delete_record",
            Self::SetCountry { .. } => "set_country",
        }
    }
}

/// Result of one action
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub action: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of a replayed session
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Country context at the end of the session
    pub country: CountryId,
    /// Whether a submit was persisted
    pub saved: bool,
    /// Payload of the last successful submit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<CommitPayload>,
    pub steps: Vec<StepReport>,
    /// Every navigation target, oldest first
    pub navigation: Vec<String>,
    /// Photo ids deleted from storage when the editor was discarded
    pub flushed_photo_deletions: Vec<PhotoId>,
    /// Draft photos when the session ended
    pub photos: Vec<PhotoRef>,
    /// Journal store contents after the session
    pub records: Vec<JournalRecord>,
}

struct Adapters {
    journal_store: Arc<InMemoryJournalStore>,
    photo_store: Arc<InMemoryPhotoStore>,
    upload_widget: Arc<ScriptedUploadWidget>,
    navigator: Arc<RecordingNavigator>,
}

impl Adapters {
    fn new(record: Option<&JournalRecord>) -> Self {
        Self {
            journal_store: Arc::new(InMemoryJournalStore::with_records(record.cloned())),
            photo_store: Arc::new(InMemoryPhotoStore::new()),
            upload_widget: Arc::new(ScriptedUploadWidget::new()),
            navigator: Arc::new(RecordingNavigator::new()),
        }
    }

    fn ports(&self) -> EditorPorts {
        EditorPorts {
            journal_store: self.journal_store.clone(),
            photo_store: self.photo_store.clone(),
            upload_widget: self.upload_widget.clone(),
            navigator: self.navigator.clone(),
        }
    }
}

/// Replay a session against in-memory adapters
///
/// Failing actions are recorded in the report and do not stop the replay.
pub async fn replay(
    session: Session,
    country: CountryId,
    settings: EditorSettings,
) -> anyhow::Result<ReplayReport> {
    let adapters = Adapters::new(session.record.as_ref());
    let mut editor = JournalDraftEditor::new(adapters.ports(), settings, country, session.record);

    let mut payload = None;
    let mut steps = Vec::with_capacity(session.actions.len());

    for action in session.actions {
        let name = action.name();
        let result = apply(&mut editor, &adapters, action).await;
        let error = match result {
            Ok(Some(submitted)) => {
                payload = Some(submitted.payload);
                None
            },
            Ok(None) => None,
            Err(message) => {
                warn!(action = name, error = %message, "Session action failed");
                Some(message)
            },
        };
        steps.push(StepReport {
            action: name,
            ok: error.is_none(),
            error,
        });
    }

    editor.apply_completed_uploads();
    let photos = editor.draft().photos().to_vec();
    editor.discard().await?;

    Ok(ReplayReport {
        country: editor.country().clone(),
        saved: editor.is_saved(),
        payload,
        steps,
        navigation: adapters.navigator.locations(),
        flushed_photo_deletions: adapters.photo_store.deleted().into_iter().collect(),
        photos,
        records: adapters.journal_store.records(),
    })
}

/// Apply one action; returns the outcome when a submit was persisted
async fn apply(
    editor: &mut JournalDraftEditor,
    adapters: &Adapters,
    action: SessionAction,
) -> Result<Option<Submitted>, String> {
    debug!(action = action.name(), "Applying session action");
    match action {
        SessionAction::SetTitle { value } => editor.set_title(value),
        SessionAction::SetTextContent { value } => editor.set_text_content(value),
        SessionAction::SetDeparture { date } => editor.set_departure(date),
        SessionAction::SetHomecoming { date } => editor.set_homecoming(date),
        SessionAction::Upload { photos, error } => {
            let outcome = error.map_or(Ok(photos), |message| Err(UploadError::Failed(message)));
            adapters.upload_widget.push_outcome(outcome);
            editor.open_upload_widget();
            let applied = editor.apply_completed_uploads();
            if let Some(e) = applied.errors.first() {
                return Err(e.to_string());
            }
        },
        SessionAction::DeletePhoto { id } => {
            let id = PhotoId::new(id).map_err(|e| e.to_string())?;
            editor.delete_photo(&id);
        },
        SessionAction::Submit => {
            return match editor.submit().await {
                Ok(submitted) => Ok(Some(submitted)),
                Err(SubmitError::Invalid(errors)) => Err(format!("Validation failed: {errors}")),
                Err(e) => Err(e.to_string()),
            };
        },
        SessionAction::DeleteRecord => {
            editor.delete_record().await.map_err(|e| e.to_string())?;
        },
        SessionAction::SetCountry { country } => {
            let country = CountryId::new(country).map_err(|e| e.to_string())?;
            editor.set_country(country);
        },
    }
    Ok(None)
}
