//! Domain entities - The journal draft and the records it exchanges

mod commit_payload;
mod journal_draft;
mod journal_record;
mod photo;
mod validation;

pub use commit_payload::CommitPayload;
pub use journal_draft::JournalDraft;
pub use journal_record::JournalRecord;
pub use photo::{PhotoRef, UploadedPhoto};
pub use validation::{DraftField, FieldError, ValidationState};
