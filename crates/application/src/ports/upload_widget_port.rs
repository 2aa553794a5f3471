//! Upload widget port
//!
//! The upload widget is an external component that lets the user pick and
//! upload photos. It reports back once through a completion handler.

use domain::UploadedPhoto;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by the upload widget
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// The widget or upload service reported an error
    #[error("Upload failed: {0}")]
    Failed(String),

    /// The user closed the widget without uploading
    #[error("Upload cancelled")]
    Cancelled,

    /// The widget returned a result the editor cannot use
    #[error("Invalid upload result: {0}")]
    InvalidResult(String),
}

/// Result delivered to the completion handler
pub type UploadOutcome = Result<Vec<UploadedPhoto>, UploadError>;

/// Completion handler supplied by the editor; invoked at most once
pub type UploadCompletion = Box<dyn FnOnce(UploadOutcome) + Send>;

/// Options passed to the widget when it opens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadWidgetOptions {
    /// Account name at the upload service
    pub cloud_name: String,
    /// Unsigned upload preset
    pub upload_preset: String,
    /// Allow selecting several files at once
    #[serde(default = "default_multiple")]
    pub multiple: bool,
    /// Target folder at the upload service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

const fn default_multiple() -> bool {
    true
}

impl Default for UploadWidgetOptions {
    fn default() -> Self {
        Self {
            cloud_name: String::new(),
            upload_preset: String::new(),
            multiple: default_multiple(),
            folder: None,
        }
    }
}

/// Port for the photo upload widget
#[cfg_attr(test, automock)]
pub trait UploadWidgetPort: Send + Sync {
    /// Open the widget; `on_complete` receives the outcome once the user is done
    fn open(&self, options: &UploadWidgetOptions, on_complete: UploadCompletion);
}
