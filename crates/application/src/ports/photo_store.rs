//! Photo store port
//!
//! Removes uploaded assets that were detached from a draft that is then abandoned.

use std::collections::BTreeSet;

use async_trait::async_trait;
use domain::PhotoId;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for deleting uploaded photos
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PhotoStorePort: Send + Sync {
    /// Delete the given photos from external storage
    async fn delete_photos(&self, ids: &BTreeSet<PhotoId>) -> Result<(), ApplicationError>;
}
