//! Bounded polling loop for transcription jobs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::transcription::{JobId, JobState, RawTranscript};

use super::ports::{Clock, TranscriptEngine, TranscriptionError};

/// Fixed wait between polling attempts
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Maximum status fetches before giving up (~5 minutes at the fixed interval)
pub const MAX_POLL_ATTEMPTS: u32 = 60;

/// Polls a job until it reaches a terminal state.
///
/// Pending states wait out the fixed interval and retry; hard errors
/// fail immediately. The interval is constant: job durations are short
/// and call volume is low, so adaptive backoff buys nothing here.
pub struct JobPoller<'a, E, C>
where
    E: TranscriptEngine,
    C: Clock,
{
    engine: &'a E,
    clock: &'a C,
    interval: Duration,
    max_attempts: u32,
    cancel_flag: Arc<AtomicBool>,
}

impl<'a, E, C> JobPoller<'a, E, C>
where
    E: TranscriptEngine,
    C: Clock,
{
    /// Create a poller with the standard interval and attempt bound
    pub fn new(engine: &'a E, clock: &'a C) -> Self {
        Self {
            engine,
            clock,
            interval: POLL_INTERVAL,
            max_attempts: MAX_POLL_ATTEMPTS,
            cancel_flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Override the attempt bound and interval (used by tests)
    pub fn with_limits(mut self, max_attempts: u32, interval: Duration) -> Self {
        self.max_attempts = max_attempts;
        self.interval = interval;
        self
    }

    /// Share the cancellation flag with a signal handler.
    /// Setting it abandons the wait; the remote job keeps running.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = flag;
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::SeqCst)
    }

    /// Poll until the job completes, errors, times out, or is cancelled.
    /// `on_attempt` is called before each status fetch with (attempt, max).
    pub async fn poll(
        &self,
        job: &JobId,
        mut on_attempt: impl FnMut(u32, u32),
    ) -> Result<RawTranscript, TranscriptionError> {
        for attempt in 1..=self.max_attempts {
            if self.cancelled() {
                return Err(TranscriptionError::Cancelled);
            }

            on_attempt(attempt, self.max_attempts);
            let snapshot = self.engine.fetch_status(job).await?;

            match snapshot.state() {
                Some(JobState::Completed) => return Ok(snapshot.into_transcript()),
                Some(JobState::Errored) => {
                    let detail = snapshot
                        .error
                        .filter(|e| !e.is_empty())
                        .unwrap_or_else(|| "Transcription failed".to_string());
                    return Err(TranscriptionError::TranscriptionFailed(detail));
                }
                Some(JobState::Queued) | Some(JobState::Processing) => {
                    if attempt == self.max_attempts {
                        break;
                    }
                    self.clock.sleep(self.interval).await;
                }
                None => {
                    return Err(TranscriptionError::UnrecognizedState(snapshot.status));
                }
            }
        }

        Err(TranscriptionError::TimedOut {
            attempts: self.max_attempts,
        })
    }
}
