//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clock;
pub mod config;
pub mod engine;

// Re-export common types
pub use clock::Clock;
pub use config::ConfigStore;
pub use engine::{RemoteLocator, TranscriptEngine, TranscriptionError};
