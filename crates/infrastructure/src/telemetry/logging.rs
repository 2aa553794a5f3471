//! Tracing subscriber initialization

use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for log output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "application=debug,infrastructure=info")
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_filter() -> String {
    "application=info,infrastructure=info,presentation_cli=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured filter. Output goes to
/// stderr so command output on stdout stays machine-readable.
///
/// # Errors
/// Returns an error if the filter is malformed or a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter)
            .map_err(|e| TelemetryError::InvalidFilter(e.to_string()))?,
    };

    let json_layer = config.json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_writer(std::io::stderr)
    });
    let plain_layer = (!config.json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(plain_layer)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(json = config.json, "Logging initialized");
    Ok(())
}

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),

    /// Log filter could not be parsed
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_plain_text() {
        let config = LoggingConfig::default();
        assert!(!config.json);
        assert!(config.filter.contains("application=info"));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"json":true}"#).unwrap();
        assert!(config.json);
        assert_eq!(config.filter, default_filter());
    }

    #[test]
    fn invalid_filter_is_rejected_before_install() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            filter: "application=verbose".to_string(),
            json: false,
        };
        assert!(matches!(init_logging(&config), Err(TelemetryError::InvalidFilter(_))));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            TelemetryError::InvalidFilter("bad".to_string()).to_string(),
            "Invalid log filter: bad"
        );
    }
}
