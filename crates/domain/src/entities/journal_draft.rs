//! Journal draft - the editable, in-memory state of a journal entry
//!
//! A draft is created either empty (create mode) or seeded from an existing
//! [`JournalRecord`] (edit mode). It is mutated only through its own
//! operations; validation and date bounds are derived from the current
//! state on every query.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{
    entities::{
        CommitPayload, DraftField, FieldError, JournalRecord, PhotoRef, UploadedPhoto,
        ValidationState,
    },
    errors::DomainError,
    value_objects::{DateBounds, JournalId, PhotoId},
};

/// The editable journal entry of one editor session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalDraft {
    id: Option<JournalId>,
    title: String,
    text_content: Option<String>,
    departure: Option<NaiveDate>,
    homecoming: Option<NaiveDate>,
    photos: Vec<PhotoRef>,
    photos_seeded: bool,
    photos_touched: bool,
    photos_deleted: BTreeSet<PhotoId>,
    touched: BTreeSet<DraftField>,
    submit_attempted: bool,
}

impl JournalDraft {
    /// Create an empty draft for a new record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a draft seeded from an existing record
    ///
    /// Photos are copied in order; the deletion set always starts empty.
    pub fn from_record(record: JournalRecord) -> Self {
        let photos_seeded = !record.photos.is_empty();
        Self {
            id: Some(record.id),
            title: record.title,
            text_content: record.text_content,
            departure: record.departure,
            homecoming: record.homecoming,
            photos: record.photos,
            photos_seeded,
            ..Self::default()
        }
    }

    /// Create a draft from an optional record
    pub fn initialize(record: Option<JournalRecord>) -> Self {
        record.map_or_else(Self::new, Self::from_record)
    }

    pub const fn id(&self) -> Option<&JournalId> {
        self.id.as_ref()
    }

    /// Title as entered, untrimmed
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text as entered; empty when never set
    pub fn text_content(&self) -> &str {
        self.text_content.as_deref().unwrap_or_default()
    }

    pub const fn departure(&self) -> Option<NaiveDate> {
        self.departure
    }

    pub const fn homecoming(&self) -> Option<NaiveDate> {
        self.homecoming
    }

    pub fn photos(&self) -> &[PhotoRef] {
        &self.photos
    }

    /// Ids removed during this session
    pub const fn photos_deleted(&self) -> &BTreeSet<PhotoId> {
        &self.photos_deleted
    }

    pub const fn submit_attempted(&self) -> bool {
        self.submit_attempted
    }

    /// Whether the field was edited during this session
    pub fn is_touched(&self, field: DraftField) -> bool {
        self.touched.contains(&field)
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
        self.touched.insert(DraftField::Title);
    }

    pub fn set_text_content(&mut self, value: impl Into<String>) {
        self.text_content = Some(value.into());
        self.touched.insert(DraftField::TextContent);
    }

    /// Set or clear the departure date
    ///
    /// A departure after homecoming is not an error; it only narrows the
    /// bounds offered to the homecoming picker.
    pub fn set_departure(&mut self, date: Option<NaiveDate>) {
        self.departure = date;
        self.touched.insert(DraftField::Departure);
    }

    /// Set or clear the homecoming date
    pub fn set_homecoming(&mut self, date: Option<NaiveDate>) {
        self.homecoming = date;
        self.touched.insert(DraftField::Homecoming);
    }

    /// Selectable range of the departure field: up to the homecoming date
    pub const fn departure_bounds(&self) -> DateBounds {
        DateBounds::up_to(self.homecoming)
    }

    /// Selectable range of the homecoming field: from the departure date on
    pub const fn homecoming_bounds(&self) -> DateBounds {
        DateBounds::from(self.departure)
    }

    /// Append uploaded photos after the existing ones, in the order received
    ///
    /// Either every result is appended or, if any result is malformed, none.
    /// Returns the number of photos added.
    pub fn add_photos_from_upload(
        &mut self,
        results: impl IntoIterator<Item = UploadedPhoto>,
    ) -> Result<usize, DomainError> {
        let new_photos = results
            .into_iter()
            .map(PhotoRef::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let added = new_photos.len();
        if added > 0 {
            self.photos.extend(new_photos);
            self.photos_touched = true;
            self.touched.insert(DraftField::Photos);
        }
        Ok(added)
    }

    /// Remove a photo and remember its id for deletion
    ///
    /// The id is recorded even when no photo matches. Returns whether a photo was removed.
    pub fn delete_photo(&mut self, photo_id: &PhotoId) -> bool {
        let before = self.photos.len();
        self.photos.retain(|photo| photo.id() != photo_id);
        self.photos_deleted.insert(photo_id.clone());
        self.photos_touched = true;
        self.touched.insert(DraftField::Photos);
        self.photos.len() != before
    }

    /// Compute field errors from the current state
    pub fn validate(&self) -> ValidationState {
        let mut state = ValidationState::new();
        if self.title.trim().is_empty() {
            state.insert(DraftField::Title, FieldError::Required);
        }
        state
    }

    pub fn is_submittable(&self) -> bool {
        self.validate().is_valid()
    }

    /// Reveal every field error, as after a submit attempt
    pub fn mark_submit_attempted(&mut self) {
        self.submit_attempted = true;
    }

    /// Errors that should be shown to the user
    ///
    /// A field's error is shown once the field was edited or a submit was attempted.
    pub fn displayed_errors(&self) -> ValidationState {
        let state = self.validate();
        if self.submit_attempted {
            return state;
        }
        state.retain(|field| self.touched.contains(&field))
    }

    /// Assemble the payload to persist, or the errors blocking it
    pub fn commit_payload(&self) -> Result<CommitPayload, ValidationState> {
        let state = self.validate();
        if !state.is_valid() {
            return Err(state);
        }

        let photos = (self.photos_seeded || self.photos_touched).then(|| self.photos.clone());
        let photos_deleted =
            (!self.photos_deleted.is_empty()).then(|| self.photos_deleted.clone());

        Ok(CommitPayload {
            id: self.id.clone(),
            title: self.title.trim().to_string(),
            text_content: self.text_content.as_deref().map(|text| text.trim().to_string()),
            departure: self.departure,
            homecoming: self.homecoming,
            photos,
            photos_deleted,
        })
    }
}
