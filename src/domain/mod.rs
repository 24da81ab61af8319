//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod language;
pub mod transcription;

// Re-export common types
pub use config::AppConfig;
pub use error::ConfigError;
pub use language::LanguageCatalog;
pub use transcription::{
    AudioFormat, AudioPayload, CaptionWidth, JobId, JobState, RawTranscript, SpellingRule,
    SubtitleFormat, TranscriptSnapshot, TranscriptViews, TranscriptionOptions, Utterance,
};
