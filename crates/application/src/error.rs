//! Application-level errors

use domain::{DomainError, ValidationState};
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Operation not valid in the current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }
}

/// Why a submit did not commit the draft
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The draft has field errors; nothing was persisted
    #[error("Journal is invalid: {0}")]
    Invalid(ValidationState),

    /// The persistence side rejected the payload; the draft is kept
    #[error("Saving journal failed: {0}")]
    Persistence(#[source] ApplicationError),
}

impl SubmitError {
    /// Field errors, if the submit failed validation
    pub const fn validation(&self) -> Option<&ValidationState> {
        match self {
            Self::Invalid(state) => Some(state),
            Self::Persistence(_) => None,
        }
    }
}
