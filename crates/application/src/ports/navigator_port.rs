//! Navigation port
//!
//! Receives navigation intents from the editor.

#[cfg(test)]
use mockall::automock;

/// Port for moving the user interface to a new location
#[cfg_attr(test, automock)]
pub trait NavigatorPort: Send + Sync {
    /// Navigate to the given path, e.g. `/countries/PH`
    fn push(&self, location: &str);
}
