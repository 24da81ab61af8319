//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::transcription::{CaptionWidth, SpellingRule, SubtitleFormat};

/// VoxScribe - speaker-aware audio transcription
#[derive(Parser, Debug)]
#[command(name = "voxscribe")]
#[command(version)]
#[command(about = "Speaker-aware audio transcription using the AssemblyAI API")]
#[command(long_about = None)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Audio file to transcribe (mp3, wav, m4a, flac; max 25 MB)
    #[arg(value_name = "FILE", required = true)]
    pub file: Option<PathBuf>,

    /// Expected number of speakers (clamped to 2-10)
    #[arg(short = 's', long, value_name = "N")]
    pub speakers: Option<u32>,

    /// Custom spelling rule, repeatable (e.g., "gonna,gunna=going to")
    #[arg(long = "spell", value_name = "FROM=TO")]
    pub spelling: Vec<String>,

    /// Which rendering of the transcript to print
    #[arg(short = 'v', long, value_name = "VIEW", default_value = "all")]
    pub view: ViewArg,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch subtitles for a completed transcription job
    Subtitles {
        /// Job id printed after a transcription completes
        #[arg(value_name = "JOB_ID")]
        job_id: String,

        /// Subtitle format
        #[arg(short = 'f', long, value_name = "FORMAT", default_value = "srt")]
        format: SubtitleFormatArg,

        /// Maximum characters per caption line (clamped to 1-100)
        #[arg(short = 'w', long, value_name = "CHARS")]
        width: Option<u32>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// List languages the recognizer can detect
    Languages,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// View argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    /// All views with section headers
    All,
    /// Raw transcript text
    Full,
    /// One token per line
    Word,
    /// One sentence per paragraph
    Sentence,
    /// Speaker-attributed turns
    Speaker,
}

/// Subtitle format argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SubtitleFormatArg {
    Srt,
    Vtt,
}

impl From<SubtitleFormatArg> for SubtitleFormat {
    fn from(arg: SubtitleFormatArg) -> Self {
        match arg {
            SubtitleFormatArg::Srt => SubtitleFormat::Srt,
            SubtitleFormatArg::Vtt => SubtitleFormat::Vtt,
        }
    }
}

/// Parsed transcribe options
#[derive(Debug, Clone)]
pub struct TranscribeOptions {
    pub file: PathBuf,
    pub speakers: u32,
    pub spelling_rules: Vec<SpellingRule>,
    pub view: ViewArg,
}

/// Parsed subtitle options
#[derive(Debug, Clone)]
pub struct SubtitleOptions {
    pub job_id: String,
    pub format: SubtitleFormat,
    pub width: CaptionWidth,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["api_key", "base_url", "speakers", "caption_width"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_file_with_options() {
        let cli = Cli::parse_from(["voxscribe", "talk.mp3", "-s", "3", "--spell", "k8s=Kubernetes"]);
        assert_eq!(cli.file.unwrap(), PathBuf::from("talk.mp3"));
        assert_eq!(cli.speakers, Some(3));
        assert_eq!(cli.spelling, vec!["k8s=Kubernetes"]);
        assert_eq!(cli.view, ViewArg::All);
    }

    #[test]
    fn parses_view_selection() {
        let cli = Cli::parse_from(["voxscribe", "talk.mp3", "--view", "sentence"]);
        assert_eq!(cli.view, ViewArg::Sentence);
    }

    #[test]
    fn parses_subtitles_subcommand() {
        let cli = Cli::parse_from(["voxscribe", "subtitles", "abc123", "-f", "vtt", "-w", "40"]);
        match cli.command {
            Some(Commands::Subtitles { job_id, format, width }) => {
                assert_eq!(job_id, "abc123");
                assert_eq!(format, SubtitleFormatArg::Vtt);
                assert_eq!(width, Some(40));
            }
            other => panic!("expected subtitles subcommand, got {:?}", other),
        }
    }

    #[test]
    fn rejects_unknown_subtitle_format() {
        assert!(Cli::try_parse_from(["voxscribe", "subtitles", "abc123", "-f", "ass"]).is_err());
    }

    #[test]
    fn file_is_required_without_subcommand() {
        assert!(Cli::try_parse_from(["voxscribe"]).is_err());
        assert!(Cli::try_parse_from(["voxscribe", "config", "path"]).is_ok());
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("api_key"));
        assert!(is_valid_config_key("base_url"));
        assert!(is_valid_config_key("caption_width"));
        assert!(!is_valid_config_key("invalid_key"));
    }
}
