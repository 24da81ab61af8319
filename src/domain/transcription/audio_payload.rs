//! Audio payload value object

use std::fmt;
use std::path::Path;

use thiserror::Error;

/// Hard upload ceiling enforced before any network call
pub const MAX_PAYLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Error when a file has no recognized audio extension
#[derive(Debug, Clone, Error)]
#[error("Unsupported audio format: \"{input}\". Supported formats are: mp3, wav, m4a, flac")]
pub struct AudioFormatParseError {
    pub input: String,
}

/// Audio container formats accepted for upload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioFormat {
    Mp3,
    Wav,
    M4a,
    Flac,
}

impl AudioFormat {
    /// Get the file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
            Self::M4a => "m4a",
            Self::Flac => "flac",
        }
    }

    /// Determine the format from a file path's extension
    pub fn from_path(path: &Path) -> Result<Self, AudioFormatParseError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Ok(Self::Mp3),
            "wav" => Ok(Self::Wav),
            "m4a" => Ok(Self::M4a),
            "flac" => Ok(Self::Flac),
            _ => Err(AudioFormatParseError {
                input: path.display().to_string(),
            }),
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Value object representing an audio file ready for upload.
/// Contains the raw bytes and their container format.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    data: Vec<u8>,
    format: AudioFormat,
}

impl AudioPayload {
    /// Create a payload from raw bytes
    pub fn new(data: Vec<u8>, format: AudioFormat) -> Self {
        Self { data, format }
    }

    /// Get the raw audio bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the container format
    pub fn format(&self) -> AudioFormat {
        self.format
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Whether the payload exceeds the upload ceiling
    pub fn exceeds_limit(&self) -> bool {
        self.size_bytes() > MAX_PAYLOAD_BYTES
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_from_path() {
        assert_eq!(
            AudioFormat::from_path(Path::new("talk.mp3")).unwrap(),
            AudioFormat::Mp3
        );
        assert_eq!(
            AudioFormat::from_path(Path::new("interview.FLAC")).unwrap(),
            AudioFormat::Flac
        );
    }

    #[test]
    fn format_from_path_rejects_unknown_extension() {
        let err = AudioFormat::from_path(Path::new("video.ogg")).unwrap_err();
        assert!(err.to_string().contains("ogg") || err.to_string().contains("video"));
    }

    #[test]
    fn format_from_path_rejects_missing_extension() {
        assert!(AudioFormat::from_path(&PathBuf::from("noext")).is_err());
    }

    #[test]
    fn payload_size() {
        let payload = AudioPayload::new(vec![0u8; 1024], AudioFormat::Wav);
        assert_eq!(payload.size_bytes(), 1024);
        assert!(!payload.exceeds_limit());
    }

    #[test]
    fn payload_at_limit_is_accepted() {
        let payload = AudioPayload::new(vec![0u8; MAX_PAYLOAD_BYTES], AudioFormat::Mp3);
        assert!(!payload.exceeds_limit());
    }

    #[test]
    fn payload_over_limit_is_flagged() {
        let payload = AudioPayload::new(vec![0u8; MAX_PAYLOAD_BYTES + 1], AudioFormat::Mp3);
        assert!(payload.exceeds_limit());
    }

    #[test]
    fn human_readable_size_bytes() {
        let payload = AudioPayload::new(vec![0u8; 500], AudioFormat::Mp3);
        assert_eq!(payload.human_readable_size(), "500 B");
    }

    #[test]
    fn human_readable_size_kb() {
        let payload = AudioPayload::new(vec![0u8; 2048], AudioFormat::Mp3);
        assert_eq!(payload.human_readable_size(), "2.0 KB");
    }

    #[test]
    fn human_readable_size_mb() {
        let payload = AudioPayload::new(vec![0u8; 2 * 1024 * 1024], AudioFormat::Mp3);
        assert_eq!(payload.human_readable_size(), "2.0 MB");
    }
}
