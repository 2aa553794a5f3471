//! Structured record handed to the persistence side on submit

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    entities::PhotoRef,
    value_objects::{JournalId, PhotoId},
};

/// Journal data committed by a successful submit
///
/// Fields that were never seeded nor edited are omitted rather than sent empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<JournalId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homecoming: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<PhotoRef>>,
    /// Photos removed during the session, for the store to drop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos_deleted: Option<BTreeSet<PhotoId>>,
}

impl CommitPayload {
    /// Whether the payload updates an existing record
    pub const fn is_update(&self) -> bool {
        self.id.is_some()
    }
}
