//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Identifier is empty or malformed
    #[error("Invalid {kind} identifier: {value:?}")]
    InvalidIdentifier { kind: &'static str, value: String },

    /// Photo reference could not be built
    #[error("Invalid photo reference: {0}")]
    InvalidPhotoRef(String),
}

impl DomainError {
    /// Create an invalid identifier error
    pub fn invalid_identifier(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            kind,
            value: value.into(),
        }
    }
}
