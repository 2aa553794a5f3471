//! Existing journal record used to seed the editor in edit mode

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{entities::PhotoRef, value_objects::JournalId};

/// A journal entry as previously persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalRecord {
    /// Record identifier
    pub id: JournalId,
    /// Journal title
    pub title: String,
    /// Free-form body text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    /// Start of the trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure: Option<NaiveDate>,
    /// End of the trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homecoming: Option<NaiveDate>,
    /// Attached photos in display order
    #[serde(default)]
    pub photos: Vec<PhotoRef>,
}

impl JournalRecord {
    /// Create a record with only the required fields
    pub fn new(id: JournalId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            text_content: None,
            departure: None,
            homecoming: None,
            photos: Vec::new(),
        }
    }

    /// Set the body text
    #[must_use]
    pub fn with_text_content(mut self, text: impl Into<String>) -> Self {
        self.text_content = Some(text.into());
        self
    }

    /// Set the departure date
    #[must_use]
    pub const fn with_departure(mut self, date: NaiveDate) -> Self {
        self.departure = Some(date);
        self
    }

    /// Set the homecoming date
    #[must_use]
    pub const fn with_homecoming(mut self, date: NaiveDate) -> Self {
        self.homecoming = Some(date);
        self
    }

    /// Attach photos
    #[must_use]
    pub fn with_photos(mut self, photos: impl IntoIterator<Item = PhotoRef>) -> Self {
        self.photos.extend(photos);
        self
    }
}
