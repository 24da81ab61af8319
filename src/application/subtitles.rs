//! Fetch subtitles use case

use crate::domain::transcription::{CaptionWidth, JobId, SubtitleFormat};

use super::ports::{TranscriptEngine, TranscriptionError};

/// On-demand subtitle export for a completed job.
///
/// Nothing is cached: every call is a fresh remote request, so edits
/// on the provider side are always reflected. A job that has not
/// completed yet surfaces as `SubtitleFetchFailed` from the engine.
pub struct FetchSubtitlesUseCase<E>
where
    E: TranscriptEngine,
{
    engine: E,
}

impl<E> FetchSubtitlesUseCase<E>
where
    E: TranscriptEngine,
{
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Fetch the rendered subtitle text for a job
    pub async fn execute(
        &self,
        job: &JobId,
        format: SubtitleFormat,
        width: CaptionWidth,
    ) -> Result<String, TranscriptionError> {
        self.engine.fetch_subtitles(job, format, width).await
    }
}
