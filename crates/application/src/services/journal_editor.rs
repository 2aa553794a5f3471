//! Journal Draft Editor - Owns one journal draft and drives its protocols
//!
//! The editor holds the draft exclusively for its lifetime. Field edits are
//! applied synchronously; the submit, delete-record and teardown protocols
//! call out to the injected ports. Upload completions arrive through a
//! channel and are merged into whatever the photo list is when they are
//! applied, never into a snapshot.
//!
//! Dropping an editor that still owes photo deletions hands them to the
//! photo store from a spawned task when a Tokio runtime is available.

use std::sync::Arc;

use chrono::NaiveDate;
use domain::{
    CommitPayload, CountryId, DateBounds, JournalDraft, JournalId, JournalRecord, PhotoId,
    UploadedPhoto, ValidationState,
};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::{ApplicationError, SubmitError},
    ports::{
        JournalStorePort, NavigatorPort, PhotoStorePort, UploadError, UploadOutcome,
        UploadWidgetPort,
    },
    settings::EditorSettings,
};

/// Collaborators injected into an editor
#[derive(Clone)]
pub struct EditorPorts {
    pub journal_store: Arc<dyn JournalStorePort>,
    pub photo_store: Arc<dyn PhotoStorePort>,
    pub upload_widget: Arc<dyn UploadWidgetPort>,
    pub navigator: Arc<dyn NavigatorPort>,
}

impl std::fmt::Debug for EditorPorts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorPorts").finish_non_exhaustive()
    }
}

/// Result of applying delivered upload outcomes
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UploadsApplied {
    /// Photos appended to the draft
    pub added: usize,
    /// Outcomes that added nothing
    pub errors: Vec<UploadError>,
}

/// A persisted submit
#[derive(Debug, PartialEq, Eq)]
pub struct Submitted {
    /// Payload handed to the journal store
    pub payload: CommitPayload,
    /// Upload outcomes merged since the last drain, failures included
    pub uploads: UploadsApplied,
}

/// Editor of a single journal draft
pub struct JournalDraftEditor {
    draft: JournalDraft,
    country: CountryId,
    settings: EditorSettings,
    ports: EditorPorts,
    uploads_tx: mpsc::UnboundedSender<UploadOutcome>,
    uploads_rx: mpsc::UnboundedReceiver<UploadOutcome>,
    upload_errors: Vec<UploadError>,
    saved: bool,
    discarded: bool,
}

impl std::fmt::Debug for JournalDraftEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JournalDraftEditor")
            .field("draft", &self.draft)
            .field("country", &self.country)
            .field("saved", &self.saved)
            .field("discarded", &self.discarded)
            .finish_non_exhaustive()
    }
}

impl JournalDraftEditor {
    /// Create an editor, in edit mode when `record` is given
    pub fn new(
        ports: EditorPorts,
        settings: EditorSettings,
        country: CountryId,
        record: Option<JournalRecord>,
    ) -> Self {
        let (uploads_tx, uploads_rx) = mpsc::unbounded_channel();
        let draft = JournalDraft::initialize(record);
        debug!(
            country = %country,
            journal_id = ?draft.id().map(JournalId::as_str),
            "Journal editor created"
        );
        Self {
            draft,
            country,
            settings,
            ports,
            uploads_tx,
            uploads_rx,
            upload_errors: Vec::new(),
            saved: false,
            discarded: false,
        }
    }

    pub const fn draft(&self) -> &JournalDraft {
        &self.draft
    }

    pub const fn country(&self) -> &CountryId {
        &self.country
    }

    /// Switch the active country context; later navigation targets it
    pub fn set_country(&mut self, country: CountryId) {
        self.country = country;
    }

    /// Whether a submit has been persisted
    pub const fn is_saved(&self) -> bool {
        self.saved
    }

    pub const fn is_discarded(&self) -> bool {
        self.discarded
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.draft.set_title(value);
    }

    pub fn set_text_content(&mut self, value: impl Into<String>) {
        self.draft.set_text_content(value);
    }

    pub fn set_departure(&mut self, date: Option<NaiveDate>) {
        self.draft.set_departure(date);
    }

    pub fn set_homecoming(&mut self, date: Option<NaiveDate>) {
        self.draft.set_homecoming(date);
    }

    pub const fn departure_bounds(&self) -> DateBounds {
        self.draft.departure_bounds()
    }

    pub const fn homecoming_bounds(&self) -> DateBounds {
        self.draft.homecoming_bounds()
    }

    pub fn validate(&self) -> ValidationState {
        self.draft.validate()
    }

    pub fn is_submittable(&self) -> bool {
        self.draft.is_submittable()
    }

    pub fn displayed_errors(&self) -> ValidationState {
        self.draft.displayed_errors()
    }

    /// Append upload results to the current photo list
    pub fn add_photos_from_upload(
        &mut self,
        results: impl IntoIterator<Item = UploadedPhoto>,
    ) -> Result<usize, UploadError> {
        let added = self
            .draft
            .add_photos_from_upload(results)
            .map_err(|e| UploadError::InvalidResult(e.to_string()))?;
        debug!(added, total = self.draft.photos().len(), "Photos added from upload");
        Ok(added)
    }

    /// Remove a photo from the draft and queue its id for deletion
    pub fn delete_photo(&mut self, photo_id: &PhotoId) {
        let removed = self.draft.delete_photo(photo_id);
        debug!(photo_id = %photo_id, removed, "Photo deleted from draft");
    }

    /// Open the upload widget
    ///
    /// The outcome is queued and merged by [`Self::apply_completed_uploads`].
    pub fn open_upload_widget(&self) {
        let uploads_tx = self.uploads_tx.clone();
        self.ports.upload_widget.open(
            &self.settings.upload,
            Box::new(move |outcome| {
                if uploads_tx.send(outcome).is_err() {
                    debug!("Upload completed after the editor was dropped");
                }
            }),
        );
    }

    /// Merge every delivered upload outcome into the current photo list
    ///
    /// A failed outcome adds no photos; the outcomes after it are still applied.
    /// Failures merged by an unsuccessful `submit` are reported here as well.
    pub fn apply_completed_uploads(&mut self) -> UploadsApplied {
        let added = self.merge_delivered_uploads();
        UploadsApplied {
            added,
            errors: std::mem::take(&mut self.upload_errors),
        }
    }

    /// Drain the upload channel, keeping failures until they are reported
    fn merge_delivered_uploads(&mut self) -> usize {
        let mut added = 0;
        while let Ok(outcome) = self.uploads_rx.try_recv() {
            match outcome.and_then(|results| self.add_photos_from_upload(results)) {
                Ok(count) => added += count,
                Err(e) => {
                    warn!(error = %e, "Upload produced no photos");
                    self.upload_errors.push(e);
                },
            }
        }
        added
    }

    /// Validate and persist the draft, then navigate to the country list
    ///
    /// The persistence port is called at most once and never retried. On
    /// failure the draft is left untouched so the user can try again, and
    /// upload failures merged on the way stay queued for
    /// [`Self::apply_completed_uploads`].
    #[instrument(skip(self), fields(country = %self.country))]
    pub async fn submit(&mut self) -> Result<Submitted, SubmitError> {
        let added = self.merge_delivered_uploads();
        self.draft.mark_submit_attempted();

        let payload = self.draft.commit_payload().map_err(|errors| {
            debug!(errors = %errors, "Submit blocked by validation");
            SubmitError::Invalid(errors)
        })?;

        self.ports.journal_store.save(&payload).await.map_err(|e| {
            warn!(error = %e, "Saving journal failed");
            SubmitError::Persistence(e)
        })?;

        self.saved = true;
        let location = self.settings.country_location(&self.country);
        info!(
            journal_id = ?payload.id.as_ref().map(JournalId::as_str),
            photos = payload.photos.as_ref().map_or(0, Vec::len),
            location = %location,
            "Journal saved"
        );
        self.ports.navigator.push(&location);

        Ok(Submitted {
            payload,
            uploads: UploadsApplied {
                added,
                errors: std::mem::take(&mut self.upload_errors),
            },
        })
    }

    /// Delete the record being edited, then navigate to the country list
    ///
    /// Only available in edit mode. A failure of the store is logged and
    /// does not stop the navigation.
    #[instrument(skip(self), fields(country = %self.country))]
    pub async fn delete_record(&mut self) -> Result<JournalId, ApplicationError> {
        let id = self.draft.id().cloned().ok_or_else(|| {
            ApplicationError::InvalidOperation("Only existing journals can be deleted".to_string())
        })?;

        if let Err(e) = self.ports.journal_store.delete(&id).await {
            warn!(journal_id = %id, error = %e, "Deleting journal failed");
        }

        let location = self.settings.country_location(&self.country);
        info!(journal_id = %id, location = %location, "Journal deleted");
        self.ports.navigator.push(&location);

        Ok(id)
    }

    /// Tear the editor down
    ///
    /// Photos removed from a draft that was never saved are deleted from
    /// storage. Runs once; returns whether deletions were flushed.
    #[instrument(skip(self))]
    pub async fn discard(&mut self) -> Result<bool, ApplicationError> {
        if self.discarded {
            return Ok(false);
        }
        self.discarded = true;

        let pending = self.draft.photos_deleted();
        if self.saved || pending.is_empty() {
            debug!(saved = self.saved, "No photo deletions to flush");
            return Ok(false);
        }

        info!(count = pending.len(), "Flushing photo deletions of unsaved journal");
        self.ports.photo_store.delete_photos(pending).await?;
        Ok(true)
    }
}

impl Drop for JournalDraftEditor {
    fn drop(&mut self) {
        let pending = self.draft.photos_deleted();
        if self.discarded || self.saved || pending.is_empty() {
            return;
        }

        let photo_ids = pending.clone();
        let photo_store = Arc::clone(&self.ports.photo_store);
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                warn!(
                    count = photo_ids.len(),
                    "Editor dropped without discard; flushing photo deletions in background"
                );
                handle.spawn(async move {
                    if let Err(e) = photo_store.delete_photos(&photo_ids).await {
                        warn!(error = %e, "Background photo deletion failed");
                    }
                });
            },
            Err(_) => {
                warn!(
                    count = photo_ids.len(),
                    photo_ids = ?photo_ids,
                    "Editor dropped without discard outside a runtime; photo deletions lost"
                );
            },
        }
    }
}
