//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::transcription::{CaptionWidth, MIN_SPEAKERS};

/// Default remote service endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.assemblyai.com/v2";

/// Built-in fallback credential, used when neither the environment nor
/// the config file provides one. Insecure by construction: it is a
/// placeholder the provider will reject, kept only so the tool degrades
/// with a clear remote error instead of refusing to start.
pub const DEFAULT_API_KEY: &str = "00000000000000000000000000000000";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub speakers: Option<u32>,
    pub caption_width: Option<u32>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            speakers: Some(MIN_SPEAKERS),
            caption_width: Some(CaptionWidth::default().chars()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            base_url: other.base_url.or(self.base_url),
            speakers: other.speakers.or(self.speakers),
            caption_width: other.caption_width.or(self.caption_width),
        }
    }

    /// Get the endpoint, or the public API default if not set
    pub fn base_url_or_default(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Get the expected speaker count, or the minimum if not set
    pub fn speakers_or_default(&self) -> u32 {
        self.speakers.unwrap_or(MIN_SPEAKERS)
    }

    /// Get the caption width, clamped, or the default if not set
    pub fn caption_width_or_default(&self) -> CaptionWidth {
        self.caption_width
            .map(CaptionWidth::new)
            .unwrap_or_default()
    }
}
