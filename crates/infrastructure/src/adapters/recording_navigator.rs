//! Recording navigator - Implements NavigatorPort by remembering locations

use application::ports::NavigatorPort;
use parking_lot::Mutex;
use tracing::info;

/// Navigator that records every requested location
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    locations: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locations pushed so far, oldest first
    pub fn locations(&self) -> Vec<String> {
        self.locations.lock().clone()
    }

    /// Most recent location
    pub fn current(&self) -> Option<String> {
        self.locations.lock().last().cloned()
    }
}

impl NavigatorPort for RecordingNavigator {
    fn push(&self, location: &str) {
        info!(location, "Navigating");
        self.locations.lock().push(location.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_locations_in_order() {
        let navigator = RecordingNavigator::new();
        assert!(navigator.current().is_none());

        navigator.push("/countries/PH");
        navigator.push("/countries/JP");

        assert_eq!(navigator.locations(), vec!["/countries/PH", "/countries/JP"]);
        assert_eq!(navigator.current().as_deref(), Some("/countries/JP"));
    }
}
