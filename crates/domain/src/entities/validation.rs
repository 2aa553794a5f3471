//! Field-level validation model of a journal draft

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeMap};

/// Editable fields of a journal draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DraftField {
    Title,
    TextContent,
    Departure,
    Homecoming,
    Photos,
}

impl DraftField {
    /// Field name as used in payloads
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::TextContent => "textContent",
            Self::Departure => "departure",
            Self::Homecoming => "homecoming",
            Self::Photos => "photos",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field-scoped validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    /// The field must hold a non-blank value
    Required,
}

impl FieldError {
    /// User-facing message
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Required => "This field is required",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Mapping from field to its current error
///
/// Always derived from draft state; a field without an entry is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    errors: BTreeMap<DraftField, FieldError>,
}

impl ValidationState {
    /// Create a state with no errors
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field
    pub fn insert(&mut self, field: DraftField, error: FieldError) {
        self.errors.insert(field, error);
    }

    /// Error of a field, if any
    pub fn get(&self, field: DraftField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    /// Whether no field has an error
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with an error
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Whether the state holds no errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over field errors in field order
    pub fn iter(&self) -> impl Iterator<Item = (DraftField, FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    /// Keep only errors of the given fields
    #[must_use]
    pub fn retain(mut self, mut keep: impl FnMut(DraftField) -> bool) -> Self {
        self.errors.retain(|field, _| keep(*field));
        self
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}: {error}")?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for ValidationState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in self.iter() {
            map.serialize_entry(field.as_str(), error.message())?;
        }
        map.end()
    }
}
