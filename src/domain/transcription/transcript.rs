//! Transcription job entities

use std::fmt;

/// Opaque job identifier assigned by the remote service on submission.
/// The sole correlation key for polling and subtitle retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Job lifecycle states as reported by the remote service.
/// Not independently derived; values outside this set are handled
/// by the poller as unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Queued,
    Processing,
    Completed,
    Errored,
}

impl JobState {
    /// Parse a provider-reported status string
    pub fn parse(status: &str) -> Option<Self> {
        match status {
            "queued" => Some(Self::Queued),
            "processing" => Some(Self::Processing),
            "completed" => Some(Self::Completed),
            "error" => Some(Self::Errored),
            _ => None,
        }
    }

    /// Whether the job is still pending (worth polling again)
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Queued | Self::Processing)
    }
}

/// One contiguous speech segment attributed to a single speaker,
/// as reported by the remote diarization engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub speaker: String,
    pub text: String,
}

/// Point-in-time view of a job as returned by a status fetch.
/// Carries the raw status string so unknown values survive to the poller.
#[derive(Debug, Clone)]
pub struct TranscriptSnapshot {
    pub job: JobId,
    pub status: String,
    pub text: Option<String>,
    pub language_code: Option<String>,
    pub utterances: Vec<Utterance>,
    pub error: Option<String>,
}

impl TranscriptSnapshot {
    /// Parsed job state, if the reported status is a known value
    pub fn state(&self) -> Option<JobState> {
        JobState::parse(&self.status)
    }

    /// Convert a completed snapshot into its transcript payload.
    /// The provider leaves `text` null until completion; an absent
    /// text on a completed job becomes an empty transcript.
    pub fn into_transcript(self) -> RawTranscript {
        RawTranscript {
            text: self.text.unwrap_or_default(),
            language_code: self.language_code,
            utterances: self.utterances,
        }
    }
}

/// Completed transcription payload: full text, optional detected
/// language, and speaker-attributed utterances in chronological order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTranscript {
    pub text: String,
    pub language_code: Option<String>,
    pub utterances: Vec<Utterance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_states() {
        assert_eq!(JobState::parse("queued"), Some(JobState::Queued));
        assert_eq!(JobState::parse("processing"), Some(JobState::Processing));
        assert_eq!(JobState::parse("completed"), Some(JobState::Completed));
        assert_eq!(JobState::parse("error"), Some(JobState::Errored));
    }

    #[test]
    fn parse_unknown_state() {
        assert_eq!(JobState::parse("throttled"), None);
        assert_eq!(JobState::parse(""), None);
        assert_eq!(JobState::parse("Completed"), None);
    }

    #[test]
    fn pending_states() {
        assert!(JobState::Queued.is_pending());
        assert!(JobState::Processing.is_pending());
        assert!(!JobState::Completed.is_pending());
        assert!(!JobState::Errored.is_pending());
    }

    #[test]
    fn completed_snapshot_without_text_is_empty_transcript() {
        let snapshot = TranscriptSnapshot {
            job: JobId::new("abc"),
            status: "completed".to_string(),
            text: None,
            language_code: None,
            utterances: Vec::new(),
            error: None,
        };

        let transcript = snapshot.into_transcript();
        assert_eq!(transcript.text, "");
        assert!(transcript.utterances.is_empty());
    }

    #[test]
    fn snapshot_preserves_utterance_order() {
        let snapshot = TranscriptSnapshot {
            job: JobId::new("abc"),
            status: "completed".to_string(),
            text: Some("hi there".to_string()),
            language_code: Some("en".to_string()),
            utterances: vec![
                Utterance {
                    speaker: "A".to_string(),
                    text: "hi".to_string(),
                },
                Utterance {
                    speaker: "B".to_string(),
                    text: "there".to_string(),
                },
            ],
            error: None,
        };

        let transcript = snapshot.into_transcript();
        assert_eq!(transcript.utterances[0].speaker, "A");
        assert_eq!(transcript.utterances[1].speaker, "B");
    }
}
