//! Application services

mod journal_editor;

pub use journal_editor::{EditorPorts, JournalDraftEditor, Submitted, UploadsApplied};
