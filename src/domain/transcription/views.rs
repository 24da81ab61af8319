//! Presentation views derived from a raw transcript

use std::fmt;

use crate::domain::language::LanguageCatalog;
use crate::domain::transcription::RawTranscript;

/// One speaker-attributed line of the speaker view, text trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeakerTurn {
    pub speaker: String,
    pub text: String,
}

impl fmt::Display for SpeakerTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Speaker {}: {}", self.speaker, self.text)
    }
}

/// Read-only projection of a raw transcript into its presentation
/// forms. Derived on demand; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptViews {
    /// Raw text, unmodified
    pub full: String,
    /// One whitespace-delimited token per line, original order
    pub word: String,
    /// Sentences separated by a blank line
    pub sentence: String,
    /// Chronological speaker-attributed turns
    pub speaker: Vec<SpeakerTurn>,
    /// Display name of the detected language, if reported and known
    pub detected_language: Option<String>,
    /// Raw detected language code, if reported
    pub language_code: Option<String>,
}

impl TranscriptViews {
    /// Derive all views from a transcript. Pure and deterministic.
    pub fn render(transcript: &RawTranscript, catalog: &LanguageCatalog) -> Self {
        let word = transcript
            .text
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("\n");

        let sentence = split_sentences(&transcript.text).join("\n\n");

        let speaker = transcript
            .utterances
            .iter()
            .map(|u| SpeakerTurn {
                speaker: u.speaker.clone(),
                text: u.text.trim().to_string(),
            })
            .collect();

        let detected_language = transcript
            .language_code
            .as_deref()
            .and_then(|code| catalog.display_name(code))
            .map(str::to_string);

        Self {
            full: transcript.text.clone(),
            word,
            sentence,
            speaker,
            detected_language,
            language_code: transcript.language_code.clone(),
        }
    }
}

/// Split text into sentences on a run of terminal punctuation followed
/// by whitespace. The punctuation stays with the preceding fragment,
/// the whitespace is consumed, and blank fragments are dropped.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }

        // Consecutive terminators collapse into one split point
        let mut end = text.len();
        while let Some(&(j, next)) = chars.peek() {
            if matches!(next, '.' | '!' | '?') {
                chars.next();
            } else {
                end = j;
                break;
            }
        }

        // Only a terminator run followed by whitespace splits
        if !matches!(chars.peek(), Some(&(_, next)) if next.is_whitespace()) {
            continue;
        }

        fragments.push(&text[start..end]);
        while matches!(chars.peek(), Some(&(_, next)) if next.is_whitespace()) {
            chars.next();
        }
        start = chars.peek().map_or(text.len(), |&(j, _)| j);
    }

    if start < text.len() {
        fragments.push(&text[start..]);
    }

    fragments.retain(|f| !f.trim().is_empty());
    fragments
}
