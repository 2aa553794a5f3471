//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod in_memory_journal_store;
mod in_memory_photo_store;
mod recording_navigator;
mod scripted_upload_widget;

pub use in_memory_journal_store::InMemoryJournalStore;
pub use in_memory_photo_store::InMemoryPhotoStore;
pub use recording_navigator::RecordingNavigator;
pub use scripted_upload_widget::ScriptedUploadWidget;
