//! Transcribe audio use case

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::language::LanguageCatalog;
use crate::domain::transcription::{
    AudioPayload, JobId, TranscriptViews, TranscriptionOptions,
};

use super::poller::JobPoller;
use super::ports::{Clock, TranscriptEngine, TranscriptionError};

/// Input parameters for the transcribe use case
#[derive(Debug, Clone)]
pub struct TranscribeInput {
    /// Audio bytes to upload
    pub payload: AudioPayload,
    /// Job options forwarded to the remote service
    pub options: TranscriptionOptions,
}

/// Output from the transcribe use case
#[derive(Debug, Clone)]
pub struct TranscribeOutput {
    /// The derived presentation views
    pub views: TranscriptViews,
    /// Handle of the remote job, usable for later subtitle requests
    pub job: JobId,
}

/// Callbacks for progress and status updates
#[derive(Default)]
pub struct TranscribeCallbacks {
    /// Called before the upload starts, with the human-readable size
    pub on_upload_start: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called when the job has been submitted
    pub on_submitted: Option<Box<dyn Fn(&JobId) + Send + Sync>>,
    /// Called before each polling attempt with (attempt, max)
    pub on_poll_attempt: Option<Box<dyn Fn(u32, u32) + Send + Sync>>,
}

/// End-to-end transcription use case: size pre-flight, upload, submit,
/// poll to a terminal state, then derive the presentation views. The
/// first failure aborts the sequence; no partial result is returned.
pub struct TranscribeAudioUseCase<E, C>
where
    E: TranscriptEngine,
    C: Clock,
{
    engine: E,
    clock: C,
    catalog: LanguageCatalog,
    cancel_flag: Arc<AtomicBool>,
}

impl<E, C> TranscribeAudioUseCase<E, C>
where
    E: TranscriptEngine,
    C: Clock,
{
    /// Create a new use case instance
    pub fn new(engine: E, clock: C, catalog: LanguageCatalog) -> Self {
        Self {
            engine,
            clock,
            catalog,
            cancel_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share the cancellation flag with a signal handler
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = flag;
        self
    }

    /// Get the cancellation flag for external signal handling
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel_flag)
    }

    /// Abandon an in-flight poll. The remote job keeps running.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::SeqCst);
    }

    /// Execute the transcription workflow
    pub async fn execute(
        &self,
        input: TranscribeInput,
        callbacks: TranscribeCallbacks,
    ) -> Result<TranscribeOutput, TranscriptionError> {
        // Reset cancellation from any previous run
        self.cancel_flag.store(false, Ordering::SeqCst);

        // Fail fast before any network call
        if input.payload.exceeds_limit() {
            return Err(TranscriptionError::PayloadTooLarge {
                size_bytes: input.payload.size_bytes(),
            });
        }

        if let Some(ref cb) = callbacks.on_upload_start {
            cb(&input.payload.human_readable_size());
        }

        let locator = self.engine.upload(&input.payload).await?;
        let job = self.engine.submit(&locator, &input.options).await?;

        if let Some(ref cb) = callbacks.on_submitted {
            cb(&job);
        }

        let poller = JobPoller::new(&self.engine, &self.clock)
            .with_cancel_flag(Arc::clone(&self.cancel_flag));

        let transcript = poller
            .poll(&job, |attempt, max| {
                if let Some(ref cb) = callbacks.on_poll_attempt {
                    cb(attempt, max);
                }
            })
            .await?;

        let views = TranscriptViews::render(&transcript, &self.catalog);

        Ok(TranscribeOutput { views, job })
    }
}
