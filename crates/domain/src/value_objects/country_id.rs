//! Country context identifier
//!
//! Journals are scoped to a country; the editor navigates back to the
//! country's list view after committing or deleting a record.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Country id of the active country context (e.g. `ph`, `jp`)
///
/// Kept exactly as given: it is a route segment and a store key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryId {
    value: String,
}

impl CountryId {
    /// Create a country ID
    ///
    /// # Errors
    /// Returns an error if the id is blank
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let value = id.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_identifier("country", value));
        }
        Ok(Self { value })
    }

    /// Get the code as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for CountryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl std::str::FromStr for CountryId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_kept_verbatim() {
        assert_eq!(CountryId::new("jp").unwrap().as_str(), "jp");
        assert_eq!(CountryId::new("PH").unwrap().as_str(), "PH");
    }

    #[test]
    fn blank_id_is_rejected() {
        assert!(CountryId::new("").is_err());
        assert!(CountryId::new(" ").is_err());
    }

    #[test]
    fn long_id_is_accepted() {
        let id = CountryId::new("united-kingdom").unwrap();
        assert_eq!(id.as_str(), "united-kingdom");
    }

    #[test]
    fn parses_from_str() {
        let id: CountryId = "jp".parse().unwrap();
        assert_eq!(id.to_string(), "jp");
    }
}
