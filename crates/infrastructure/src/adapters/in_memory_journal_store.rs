//! In-memory journal store - Implements JournalStorePort over a hash map

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use application::error::ApplicationError;
use application::ports::JournalStorePort;
use async_trait::async_trait;
use domain::{CommitPayload, JournalId, JournalRecord};
use parking_lot::RwLock;
use tracing::{debug, instrument};

/// Journal store keeping records in process memory
///
/// A payload is merged into the stored record: fields the payload omits keep
/// their stored values.
#[derive(Debug, Default)]
pub struct InMemoryJournalStore {
    records: RwLock<HashMap<JournalId, JournalRecord>>,
    unavailable: AtomicBool,
}

impl InMemoryJournalStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given records
    pub fn with_records(records: impl IntoIterator<Item = JournalRecord>) -> Self {
        let store = Self::new();
        store
            .records
            .write()
            .extend(records.into_iter().map(|record| (record.id.clone(), record)));
        store
    }

    /// Make every subsequent call fail as if the backend were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Get a stored record
    pub fn get(&self, id: &JournalId) -> Option<JournalRecord> {
        self.records.read().get(id).cloned()
    }

    /// All stored records, in no particular order
    pub fn records(&self) -> Vec<JournalRecord> {
        self.records.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    fn check_available(&self) -> Result<(), ApplicationError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(ApplicationError::ExternalService(
                "Journal store is unavailable".into(),
            ));
        }
        Ok(())
    }

    fn merge(
        existing: Option<JournalRecord>,
        id: JournalId,
        payload: &CommitPayload,
    ) -> JournalRecord {
        let mut record = existing.unwrap_or_else(|| JournalRecord::new(id, String::new()));
        record.title.clone_from(&payload.title);
        if let Some(text) = &payload.text_content {
            record.text_content = Some(text.clone());
        }
        if payload.departure.is_some() {
            record.departure = payload.departure;
        }
        if payload.homecoming.is_some() {
            record.homecoming = payload.homecoming;
        }
        if let Some(photos) = &payload.photos {
            record.photos.clone_from(photos);
        }
        record
    }
}

#[async_trait]
impl JournalStorePort for InMemoryJournalStore {
    #[instrument(skip(self, payload), fields(update = payload.is_update()))]
    async fn save(&self, payload: &CommitPayload) -> Result<(), ApplicationError> {
        self.check_available()?;

        let id = payload.id.clone().unwrap_or_else(JournalId::generate);
        let mut records = self.records.write();
        let existing = records.remove(&id);
        if payload.is_update() && existing.is_none() {
            return Err(ApplicationError::NotFound(format!("Journal {id}")));
        }
        let record = Self::merge(existing, id.clone(), payload);
        records.insert(id.clone(), record);

        debug!(journal_id = %id, "Journal stored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &JournalId) -> Result<(), ApplicationError> {
        self.check_available()?;

        if self.records.write().remove(id).is_none() {
            return Err(ApplicationError::NotFound(format!("Journal {id}")));
        }
        debug!(journal_id = %id, "Journal removed");
        Ok(())
    }
}
