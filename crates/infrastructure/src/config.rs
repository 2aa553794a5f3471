//! Application configuration

use std::path::Path;

use application::{EditorSettings, UploadWidgetOptions};
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

/// Environment variable prefix, e.g. `JOURNAL_EDITOR__COUNTRIES_BASE_PATH`
pub const ENV_PREFIX: &str = "JOURNAL";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Editor behaviour
    #[serde(default)]
    pub editor: EditorAppConfig,

    /// Upload widget configuration
    #[serde(default)]
    pub upload: UploadAppConfig,

    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Editor configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorAppConfig {
    /// Path prefix of the country-scoped list views
    #[serde(default = "default_countries_base_path")]
    pub countries_base_path: String,
}

fn default_countries_base_path() -> String {
    "/countries".to_string()
}

impl Default for EditorAppConfig {
    fn default() -> Self {
        Self {
            countries_base_path: default_countries_base_path(),
        }
    }
}

/// Upload widget configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadAppConfig {
    /// Account name at the upload service
    #[serde(default)]
    pub cloud_name: String,

    /// Unsigned upload preset
    #[serde(default)]
    pub upload_preset: String,

    /// Allow selecting several files at once
    #[serde(default = "default_multiple")]
    pub multiple: bool,

    /// Target folder at the upload service
    #[serde(default)]
    pub folder: Option<String>,
}

const fn default_multiple() -> bool {
    true
}

impl Default for UploadAppConfig {
    fn default() -> Self {
        Self {
            cloud_name: String::new(),
            upload_preset: String::new(),
            multiple: default_multiple(),
            folder: None,
        }
    }
}

impl From<&UploadAppConfig> for UploadWidgetOptions {
    fn from(config: &UploadAppConfig) -> Self {
        Self {
            cloud_name: config.cloud_name.clone(),
            upload_preset: config.upload_preset.clone(),
            multiple: config.multiple,
            folder: config.folder.clone(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment variables
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from the given file and environment variables
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("editor.countries_base_path", default_countries_base_path())?
            .set_default("upload.multiple", default_multiple())?
            // Load from file
            .add_source(file)
            // Override with environment variables (e.g., JOURNAL_LOGGING__JSON)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Settings for the application-layer editor
    pub fn editor_settings(&self) -> EditorSettings {
        EditorSettings {
            countries_base_path: self.editor.countries_base_path.clone(),
            upload: UploadWidgetOptions::from(&self.upload),
        }
    }
}
