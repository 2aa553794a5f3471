//! Infrastructure layer - Adapters, configuration and logging
//!
//! Implements the ports defined in the application layer with in-memory
//! adapters, loads application configuration, and installs the tracing
//! subscriber.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, EditorAppConfig, UploadAppConfig};
pub use telemetry::{LoggingConfig, TelemetryError, init_logging};
