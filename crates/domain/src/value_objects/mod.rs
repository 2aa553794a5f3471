//! Value Objects - Immutable, identity-less domain primitives

mod country_id;
mod date_bounds;
mod journal_id;
mod photo_id;

pub use country_id::CountryId;
pub use date_bounds::DateBounds;
pub use journal_id::JournalId;
pub use photo_id::PhotoId;
