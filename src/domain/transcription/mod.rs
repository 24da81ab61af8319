//! Transcription domain module

mod audio_payload;
mod options;
mod subtitle;
mod transcript;
mod views;

pub use audio_payload::{AudioFormat, AudioFormatParseError, AudioPayload, MAX_PAYLOAD_BYTES};
pub use options::{
    SpellingRule, SpellingRuleParseError, TranscriptionOptions, MAX_SPEAKERS, MIN_SPEAKERS,
};
pub use subtitle::{
    CaptionWidth, SubtitleFormat, DEFAULT_CAPTION_WIDTH, MAX_CAPTION_WIDTH, MIN_CAPTION_WIDTH,
};
pub use transcript::{JobId, JobState, RawTranscript, TranscriptSnapshot, Utterance};
pub use views::{SpeakerTurn, TranscriptViews};
