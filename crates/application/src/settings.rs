//! Editor settings supplied by the hosting application

use domain::CountryId;
use serde::{Deserialize, Serialize};

use crate::ports::UploadWidgetOptions;

/// Settings of a journal draft editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Path prefix of the country-scoped list views
    #[serde(default = "default_countries_base_path")]
    pub countries_base_path: String,
    /// Options handed to the upload widget
    #[serde(default)]
    pub upload: UploadWidgetOptions,
}

fn default_countries_base_path() -> String {
    "/countries".to_string()
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            countries_base_path: default_countries_base_path(),
            upload: UploadWidgetOptions::default(),
        }
    }
}

impl EditorSettings {
    /// Location of a country's list view, e.g. `/countries/PH`
    pub fn country_location(&self, country: &CountryId) -> String {
        format!("{}/{country}", self.countries_base_path.trim_end_matches('/'))
    }
}
