//! AssemblyAI transcription engine adapter

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{RemoteLocator, TranscriptEngine, TranscriptionError};
use crate::domain::config::DEFAULT_BASE_URL;
use crate::domain::transcription::{
    AudioPayload, CaptionWidth, JobId, SpellingRule, SubtitleFormat, TranscriptSnapshot,
    TranscriptionOptions, Utterance,
};

// Request types for the AssemblyAI API

#[derive(Debug, Serialize)]
struct CreateTranscriptRequest {
    audio_url: String,
    speaker_labels: bool,
    language_detection: bool,
    speakers_expected: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_spelling: Option<Vec<CustomSpellingEntry>>,
}

#[derive(Debug, Serialize)]
struct CustomSpellingEntry {
    from: Vec<String>,
    to: String,
}

impl From<&SpellingRule> for CustomSpellingEntry {
    fn from(rule: &SpellingRule) -> Self {
        Self {
            from: rule.from.clone(),
            to: rule.to.clone(),
        }
    }
}

// Response types for the AssemblyAI API

#[derive(Debug, Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Debug, Deserialize)]
struct CreateTranscriptResponse {
    id: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    id: String,
    status: String,
    text: Option<String>,
    language_code: Option<String>,
    utterances: Option<Vec<UtteranceEntry>>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UtteranceEntry {
    speaker: String,
    text: String,
}

impl From<TranscriptResponse> for TranscriptSnapshot {
    fn from(response: TranscriptResponse) -> Self {
        Self {
            job: JobId::new(response.id),
            status: response.status,
            text: response.text,
            language_code: response.language_code,
            utterances: response
                .utterances
                .unwrap_or_default()
                .into_iter()
                .map(|u| Utterance {
                    speaker: u.speaker,
                    text: u.text,
                })
                .collect(),
            error: response.error,
        }
    }
}

/// AssemblyAI HTTP engine.
///
/// The only component that knows the provider's JSON shape; everything
/// above it speaks domain types through the `TranscriptEngine` port.
pub struct AssemblyAiEngine {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl AssemblyAiEngine {
    /// Create an engine against the public API endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create an engine against a custom endpoint (used by tests)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn upload_url(&self) -> String {
        format!("{}/upload", self.base_url)
    }

    fn transcript_url(&self) -> String {
        format!("{}/transcript", self.base_url)
    }

    fn status_url(&self, job: &JobId) -> String {
        format!("{}/transcript/{}", self.base_url, job)
    }

    fn subtitles_url(&self, job: &JobId) -> String {
        format!("{}/transcript/{}/subtitles", self.base_url, job)
    }

    /// Build the job-creation body. Speaker labels and language
    /// detection are always requested; spelling rules attach only
    /// when present.
    fn build_submit_request(
        audio: &RemoteLocator,
        options: &TranscriptionOptions,
    ) -> CreateTranscriptRequest {
        let rules = options.spelling_rules();
        CreateTranscriptRequest {
            audio_url: audio.as_str().to_string(),
            speaker_labels: true,
            language_detection: true,
            speakers_expected: options.speakers_expected(),
            custom_spelling: (!rules.is_empty())
                .then(|| rules.iter().map(CustomSpellingEntry::from).collect()),
        }
    }

    /// Collapse a non-success response into a detail string
    async fn error_detail(response: reqwest::Response) -> String {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        format!("HTTP {}: {}", status, body)
    }
}

#[async_trait]
impl TranscriptEngine for AssemblyAiEngine {
    async fn upload(&self, payload: &AudioPayload) -> Result<RemoteLocator, TranscriptionError> {
        let response = self
            .client
            .post(self.upload_url())
            .header("Authorization", &self.api_key)
            .body(payload.data().to_vec())
            .send()
            .await
            .map_err(|e| TranscriptionError::UploadFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranscriptionError::UploadFailed(
                Self::error_detail(response).await,
            ));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::UploadFailed(format!("invalid response: {}", e)))?;

        Ok(RemoteLocator(body.upload_url))
    }

    async fn submit(
        &self,
        audio: &RemoteLocator,
        options: &TranscriptionOptions,
    ) -> Result<JobId, TranscriptionError> {
        let request = Self::build_submit_request(audio, options);

        let response = self
            .client
            .post(self.transcript_url())
            .header("Authorization", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| TranscriptionError::SubmitFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranscriptionError::SubmitFailed(
                Self::error_detail(response).await,
            ));
        }

        let body: CreateTranscriptResponse = response
            .json()
            .await
            .map_err(|e| TranscriptionError::SubmitFailed(format!("invalid response: {}", e)))?;

        Ok(JobId::new(body.id))
    }

    async fn fetch_status(&self, job: &JobId) -> Result<TranscriptSnapshot, TranscriptionError> {
        let response = self
            .client
            .get(self.status_url(job))
            .header("Authorization", &self.api_key)
            .send()
            .await
            .map_err(|e| TranscriptionError::StatusFetchFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranscriptionError::StatusFetchFailed(
                Self::error_detail(response).await,
            ));
        }

        let body: TranscriptResponse = response.json().await.map_err(|e| {
            TranscriptionError::StatusFetchFailed(format!("invalid response: {}", e))
        })?;

        Ok(body.into())
    }

    async fn fetch_subtitles(
        &self,
        job: &JobId,
        format: SubtitleFormat,
        width: CaptionWidth,
    ) -> Result<String, TranscriptionError> {
        let response = self
            .client
            .get(self.subtitles_url(job))
            .header("Authorization", &self.api_key)
            .query(&[
                ("format", format.as_str().to_string()),
                ("chars_per_caption", width.chars().to_string()),
            ])
            .send()
            .await
            .map_err(|e| TranscriptionError::SubtitleFetchFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TranscriptionError::SubtitleFetchFailed(
                Self::error_detail(response).await,
            ));
        }

        response
            .text()
            .await
            .map_err(|e| TranscriptionError::SubtitleFetchFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with_rules(rules: &[&str]) -> TranscriptionOptions {
        TranscriptionOptions::new(
            3,
            rules.iter().map(|r| r.parse().unwrap()).collect(),
        )
    }

    #[test]
    fn submit_request_always_enables_labels_and_detection() {
        let request = AssemblyAiEngine::build_submit_request(
            &RemoteLocator("https://cdn.example/a".to_string()),
            &TranscriptionOptions::default(),
        );

        assert!(request.speaker_labels);
        assert!(request.language_detection);
        assert_eq!(request.audio_url, "https://cdn.example/a");
    }

    #[test]
    fn submit_request_omits_empty_spelling_rules() {
        let request = AssemblyAiEngine::build_submit_request(
            &RemoteLocator("https://cdn.example/a".to_string()),
            &TranscriptionOptions::default(),
        );

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("custom_spelling").is_none());
    }

    #[test]
    fn submit_request_attaches_spelling_rules() {
        let request = AssemblyAiEngine::build_submit_request(
            &RemoteLocator("https://cdn.example/a".to_string()),
            &options_with_rules(&["gonna,gunna=going to"]),
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json["custom_spelling"][0]["from"],
            serde_json::json!(["gonna", "gunna"])
        );
        assert_eq!(json["custom_spelling"][0]["to"], "going to");
        assert_eq!(json["speakers_expected"], 3);
    }

    #[test]
    fn urls_are_built_from_base() {
        let engine = AssemblyAiEngine::with_base_url("key", "https://api.example/v2/");
        let job = JobId::new("abc123");

        assert_eq!(engine.upload_url(), "https://api.example/v2/upload");
        assert_eq!(engine.transcript_url(), "https://api.example/v2/transcript");
        assert_eq!(engine.status_url(&job), "https://api.example/v2/transcript/abc123");
        assert_eq!(
            engine.subtitles_url(&job),
            "https://api.example/v2/transcript/abc123/subtitles"
        );
    }

    #[test]
    fn transcript_response_maps_to_snapshot() {
        let response: TranscriptResponse = serde_json::from_value(serde_json::json!({
            "id": "abc123",
            "status": "completed",
            "text": "hi there",
            "language_code": "en",
            "utterances": [
                { "speaker": "A", "text": "hi" },
                { "speaker": "B", "text": "there" }
            ]
        }))
        .unwrap();

        let snapshot: TranscriptSnapshot = response.into();
        assert_eq!(snapshot.job.as_str(), "abc123");
        assert_eq!(snapshot.status, "completed");
        assert_eq!(snapshot.text.as_deref(), Some("hi there"));
        assert_eq!(snapshot.utterances.len(), 2);
        assert_eq!(snapshot.utterances[0].speaker, "A");
    }

    #[test]
    fn pending_response_without_payload_maps_cleanly() {
        let response: TranscriptResponse = serde_json::from_value(serde_json::json!({
            "id": "abc123",
            "status": "queued",
            "text": null
        }))
        .unwrap();

        let snapshot: TranscriptSnapshot = response.into();
        assert_eq!(snapshot.status, "queued");
        assert!(snapshot.text.is_none());
        assert!(snapshot.utterances.is_empty());
        assert!(snapshot.error.is_none());
    }
}
