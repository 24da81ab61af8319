//! Subtitle export parameters

use std::fmt;

/// Minimum characters per subtitle line
pub const MIN_CAPTION_WIDTH: u32 = 1;
/// Maximum characters per subtitle line
pub const MAX_CAPTION_WIDTH: u32 = 100;
/// Width used when the caller does not specify one
pub const DEFAULT_CAPTION_WIDTH: u32 = 32;

/// Subtitle rendering formats offered by the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubtitleFormat {
    Srt,
    Vtt,
}

impl SubtitleFormat {
    /// Wire value for the `format` query parameter
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Srt => "srt",
            Self::Vtt => "vtt",
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maximum character count per subtitle line, clamped to the range
/// the remote renderer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionWidth(u32);

impl CaptionWidth {
    pub fn new(chars: u32) -> Self {
        Self(chars.clamp(MIN_CAPTION_WIDTH, MAX_CAPTION_WIDTH))
    }

    pub fn chars(&self) -> u32 {
        self.0
    }
}

impl Default for CaptionWidth {
    fn default() -> Self {
        Self::new(DEFAULT_CAPTION_WIDTH)
    }
}

impl fmt::Display for CaptionWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_wire_values() {
        assert_eq!(SubtitleFormat::Srt.as_str(), "srt");
        assert_eq!(SubtitleFormat::Vtt.as_str(), "vtt");
    }

    #[test]
    fn width_clamped_to_range() {
        assert_eq!(CaptionWidth::new(0).chars(), 1);
        assert_eq!(CaptionWidth::new(50).chars(), 50);
        assert_eq!(CaptionWidth::new(500).chars(), 100);
    }

    #[test]
    fn default_width() {
        assert_eq!(CaptionWidth::default().chars(), 32);
    }
}
