//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod poller;
pub mod ports;
pub mod subtitles;
pub mod transcribe;

// Re-export use cases
pub use poller::{JobPoller, MAX_POLL_ATTEMPTS, POLL_INTERVAL};
pub use subtitles::FetchSubtitlesUseCase;
pub use transcribe::{
    TranscribeAudioUseCase, TranscribeCallbacks, TranscribeInput, TranscribeOutput,
};
