//! Application layer - Editor orchestration and ports
//!
//! Contains the journal draft editor, its settings, and the port definitions
//! for the collaborators it drives. Adapters in the infrastructure layer
//! implement these ports.

pub mod error;
pub mod ports;
pub mod services;
pub mod settings;

pub use error::{ApplicationError, SubmitError};
pub use ports::*;
pub use services::*;
pub use settings::EditorSettings;
