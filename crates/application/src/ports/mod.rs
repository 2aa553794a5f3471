//! Port definitions for application layer
//!
//! Ports are interfaces that define how the editor interacts with its
//! collaborators. Adapters in the infrastructure layer implement these ports.

mod journal_store;
mod navigator_port;
mod photo_store;
mod upload_widget_port;

pub use journal_store::JournalStorePort;
#[cfg(test)]
pub use journal_store::MockJournalStorePort;
#[cfg(test)]
pub use navigator_port::MockNavigatorPort;
pub use navigator_port::NavigatorPort;
#[cfg(test)]
pub use photo_store::MockPhotoStorePort;
pub use photo_store::PhotoStorePort;
#[cfg(test)]
pub use upload_widget_port::MockUploadWidgetPort;
pub use upload_widget_port::{
    UploadCompletion, UploadError, UploadOutcome, UploadWidgetOptions, UploadWidgetPort,
};
