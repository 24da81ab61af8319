//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the application ports.

pub mod clock;
pub mod config;
pub mod engine;

// Re-export adapters
pub use clock::TokioClock;
pub use config::XdgConfigStore;
pub use engine::AssemblyAiEngine;
