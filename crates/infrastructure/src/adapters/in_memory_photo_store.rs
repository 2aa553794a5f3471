//! In-memory photo store - Records photo deletion batches

use std::collections::BTreeSet;

use application::error::ApplicationError;
use application::ports::PhotoStorePort;
use async_trait::async_trait;
use domain::PhotoId;
use parking_lot::Mutex;
use tracing::{debug, instrument};

/// Photo store that remembers every deletion request
#[derive(Debug, Default)]
pub struct InMemoryPhotoStore {
    batches: Mutex<Vec<BTreeSet<PhotoId>>>,
}

impl InMemoryPhotoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deletion requests received so far, oldest first
    pub fn batches(&self) -> Vec<BTreeSet<PhotoId>> {
        self.batches.lock().clone()
    }

    /// Every photo id deleted so far
    pub fn deleted(&self) -> BTreeSet<PhotoId> {
        self.batches.lock().iter().flatten().cloned().collect()
    }
}

#[async_trait]
impl PhotoStorePort for InMemoryPhotoStore {
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    async fn delete_photos(&self, ids: &BTreeSet<PhotoId>) -> Result<(), ApplicationError> {
        self.batches.lock().push(ids.clone());
        debug!("Photo deletion recorded");
        Ok(())
    }
}
