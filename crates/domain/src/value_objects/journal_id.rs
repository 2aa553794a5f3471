//! Journal record identifier

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::errors::DomainError;

/// Identifier of a persisted journal record
///
/// Identifiers are issued by the persistence side; the editor only carries
/// them through. A fresh identifier can be generated for stores that assign
/// ids themselves.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct JournalId {
    #[validate(length(min = 1))]
    value: String,
}

impl JournalId {
    /// Create a journal ID, rejecting blank values
    ///
    /// # Errors
    /// Returns an error if the identifier is empty after trimming
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let raw = id.into();
        let candidate = Self {
            value: raw.trim().to_string(),
        };
        candidate
            .validate()
            .map_err(|_| DomainError::invalid_identifier("journal", raw))?;
        Ok(candidate)
    }

    /// Generate a new random journal ID
    pub fn generate() -> Self {
        Self {
            value: Uuid::new_v4().to_string(),
        }
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for JournalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<&str> for JournalId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_value() {
        let id = JournalId::new("randomId").unwrap();
        assert_eq!(id.as_str(), "randomId");
    }

    #[test]
    fn new_trims_whitespace() {
        let id = JournalId::new("  abc  ").unwrap();
        assert_eq!(id.as_str(), "abc");
    }

    #[test]
    fn blank_id_is_rejected() {
        assert!(JournalId::new("").is_err());
        assert!(JournalId::new("   ").is_err());
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(JournalId::generate(), JournalId::generate());
    }

    #[test]
    fn display_shows_value() {
        let id = JournalId::new("j-1").unwrap();
        assert_eq!(id.to_string(), "j-1");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = JournalId::new("j-1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"j-1\"");
    }
}
