//! External storage identifier of an uploaded photo

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::DomainError;

/// Identifier assigned to a photo by the upload service
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct PhotoId {
    #[validate(length(min = 1))]
    value: String,
}

impl PhotoId {
    /// Create a photo ID, rejecting empty values
    ///
    /// # Errors
    /// Returns an error if the identifier is empty
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let candidate = Self { value: id.into() };
        candidate
            .validate()
            .map_err(|_| DomainError::invalid_identifier("photo", candidate.value.clone()))?;
        Ok(candidate)
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<&str> for PhotoId {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn new_keeps_value_verbatim() {
        let id = PhotoId::new("journal/abc123").unwrap();
        assert_eq!(id.as_str(), "journal/abc123");
    }

    #[test]
    fn empty_id_is_rejected() {
        let err = PhotoId::new("").unwrap_err();
        assert!(matches!(err, DomainError::InvalidIdentifier { kind: "photo", .. }));
    }

    #[test]
    fn ids_collapse_in_a_set() {
        let mut set = BTreeSet::new();
        set.insert(PhotoId::new("a").unwrap());
        set.insert(PhotoId::new("a").unwrap());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn roundtrips_through_json() {
        let id = PhotoId::new("fakeFirstPubId").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: PhotoId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
