//! Transcription engine port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::{
    AudioPayload, CaptionWidth, JobId, SubtitleFormat, TranscriptSnapshot, TranscriptionOptions,
    MAX_PAYLOAD_BYTES,
};

/// Transcription errors
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error(
        "Audio file is {size_bytes} bytes, which exceeds the {} MiB upload limit",
        MAX_PAYLOAD_BYTES / (1024 * 1024)
    )]
    PayloadTooLarge { size_bytes: usize },

    #[error("Failed to upload audio file: {0}")]
    UploadFailed(String),

    #[error("Failed to submit transcription: {0}")]
    SubmitFailed(String),

    #[error("Failed to get transcription status: {0}")]
    StatusFetchFailed(String),

    #[error("Failed to get subtitles: {0}")]
    SubtitleFetchFailed(String),

    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    #[error("Transcription timed out after {attempts} polling attempts")]
    TimedOut { attempts: u32 },

    #[error("Unknown transcription status: \"{0}\"")]
    UnrecognizedState(String),

    #[error("Transcription cancelled")]
    Cancelled,
}

/// URL-like locator the provider assigns to uploaded audio bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLocator(pub String);

impl RemoteLocator {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Port for the remote transcription service.
///
/// Each operation is a single round trip; non-success responses map to
/// the matching error variant and are never retried here. `submit` is
/// not idempotent: every call creates a new remote job.
#[async_trait]
pub trait TranscriptEngine: Send + Sync {
    /// Upload raw audio bytes, returning the provider-assigned locator.
    async fn upload(&self, payload: &AudioPayload) -> Result<RemoteLocator, TranscriptionError>;

    /// Create a transcription job for previously uploaded audio.
    async fn submit(
        &self,
        audio: &RemoteLocator,
        options: &TranscriptionOptions,
    ) -> Result<JobId, TranscriptionError>;

    /// Fetch the current state of a job, with its payload when terminal.
    async fn fetch_status(&self, job: &JobId) -> Result<TranscriptSnapshot, TranscriptionError>;

    /// Fetch a subtitle rendering of a completed job.
    async fn fetch_subtitles(
        &self,
        job: &JobId,
        format: SubtitleFormat,
        width: CaptionWidth,
    ) -> Result<String, TranscriptionError>;
}
