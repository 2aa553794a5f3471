//! Journal store port
//!
//! Defines the interface for committing and deleting journal records.

use async_trait::async_trait;
use domain::{CommitPayload, JournalId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for journal record persistence
///
/// The editor calls `save` at most once per submit and never retries;
/// `delete` is fire-and-forget from the editor's point of view.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait JournalStorePort: Send + Sync {
    /// Persist a committed draft
    ///
    /// # Arguments
    /// * `payload` - Fields to create or update; `payload.id` selects the record
    async fn save(&self, payload: &CommitPayload) -> Result<(), ApplicationError>;

    /// Delete a journal record
    ///
    /// # Arguments
    /// * `id` - The record to delete
    async fn delete(&self, id: &JournalId) -> Result<(), ApplicationError>;
}
