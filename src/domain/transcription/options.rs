//! Transcription job options

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Minimum expected speaker count the provider accepts
pub const MIN_SPEAKERS: u32 = 2;
/// Maximum expected speaker count the provider accepts
pub const MAX_SPEAKERS: u32 = 10;

/// Error when parsing a spelling rule string
#[derive(Debug, Clone, Error)]
#[error("Invalid spelling rule: \"{input}\". Expected format: <from1,from2,...>=<to> (e.g., gonna,gunna=going to)")]
pub struct SpellingRuleParseError {
    pub input: String,
}

/// One custom spelling rewrite, applied by the remote recognizer:
/// any occurrence of a term in `from` is transcribed as `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingRule {
    pub from: Vec<String>,
    pub to: String,
}

impl FromStr for SpellingRule {
    type Err = SpellingRuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || SpellingRuleParseError {
            input: s.to_string(),
        };

        let (from_part, to_part) = s.split_once('=').ok_or_else(err)?;

        let from: Vec<String> = from_part
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        let to = to_part.trim();

        if from.is_empty() || to.is_empty() {
            return Err(err());
        }

        Ok(Self {
            from,
            to: to.to_string(),
        })
    }
}

impl fmt::Display for SpellingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.from.join(","), self.to)
    }
}

/// Options attached to a transcription submission.
#[derive(Debug, Clone)]
pub struct TranscriptionOptions {
    speakers_expected: u32,
    spelling_rules: Vec<SpellingRule>,
}

impl TranscriptionOptions {
    /// Create options; `speakers_expected` is clamped to the provider's
    /// accepted range.
    pub fn new(speakers_expected: u32, spelling_rules: Vec<SpellingRule>) -> Self {
        Self {
            speakers_expected: speakers_expected.clamp(MIN_SPEAKERS, MAX_SPEAKERS),
            spelling_rules,
        }
    }

    /// Clamped expected speaker count
    pub fn speakers_expected(&self) -> u32 {
        self.speakers_expected
    }

    /// Ordered custom spelling rules (may be empty)
    pub fn spelling_rules(&self) -> &[SpellingRule] {
        &self.spelling_rules
    }
}

impl Default for TranscriptionOptions {
    fn default() -> Self {
        Self::new(MIN_SPEAKERS, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speakers_below_range_clamped_up() {
        let options = TranscriptionOptions::new(1, Vec::new());
        assert_eq!(options.speakers_expected(), 2);
    }

    #[test]
    fn speakers_above_range_clamped_down() {
        let options = TranscriptionOptions::new(15, Vec::new());
        assert_eq!(options.speakers_expected(), 10);
    }

    #[test]
    fn speakers_in_range_unchanged() {
        for n in 2..=10 {
            assert_eq!(TranscriptionOptions::new(n, Vec::new()).speakers_expected(), n);
        }
    }

    #[test]
    fn default_expects_two_speakers() {
        let options = TranscriptionOptions::default();
        assert_eq!(options.speakers_expected(), 2);
        assert!(options.spelling_rules().is_empty());
    }

    #[test]
    fn parse_spelling_rule() {
        let rule: SpellingRule = "gonna,gunna=going to".parse().unwrap();
        assert_eq!(rule.from, vec!["gonna", "gunna"]);
        assert_eq!(rule.to, "going to");
    }

    #[test]
    fn parse_spelling_rule_trims_terms() {
        let rule: SpellingRule = " k8s , kates = Kubernetes ".parse().unwrap();
        assert_eq!(rule.from, vec!["k8s", "kates"]);
        assert_eq!(rule.to, "Kubernetes");
    }

    #[test]
    fn parse_spelling_rule_missing_separator() {
        assert!("gonna going to".parse::<SpellingRule>().is_err());
    }

    #[test]
    fn parse_spelling_rule_empty_sides() {
        assert!("=to".parse::<SpellingRule>().is_err());
        assert!("from=".parse::<SpellingRule>().is_err());
        assert!(" , =to".parse::<SpellingRule>().is_err());
    }

    #[test]
    fn spelling_rule_round_trips_through_display() {
        let rule: SpellingRule = "gonna,gunna=going to".parse().unwrap();
        assert_eq!(rule.to_string(), "gonna,gunna=going to");
    }
}
