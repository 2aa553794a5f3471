//! Selectable date range of a date field

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Inclusive bounds a date picker should offer
///
/// Derived from the opposite field of a departure/homecoming pair; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateBounds {
    /// Earliest selectable date
    pub min: Option<NaiveDate>,
    /// Latest selectable date
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    /// Bounds with no limits on either side
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Bounds limited from above
    pub const fn up_to(max: Option<NaiveDate>) -> Self {
        Self { min: None, max }
    }

    /// Bounds limited from below
    pub const fn from(min: Option<NaiveDate>) -> Self {
        Self { min, max: None }
    }

    /// Check whether the date is selectable
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min.is_none_or(|min| date >= min) && self.max.is_none_or(|max| date <= max)
    }

    /// Check whether neither side is limited
    pub const fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}
