//! VoxScribe CLI entry point

use std::process::ExitCode;

use clap::Parser;

use voxscribe::cli::{
    app::{load_merged_config, run_languages, run_subtitles, run_transcribe, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, SubtitleOptions, TranscribeOptions},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use voxscribe::domain::transcription::{CaptionWidth, SpellingRule};
use voxscribe::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    // Handle subcommands
    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            return ExitCode::SUCCESS;
        }
        Some(Commands::Languages) => {
            return run_languages();
        }
        Some(Commands::Subtitles { job_id, format, width }) => {
            let config = load_merged_config().await;
            let options = SubtitleOptions {
                job_id,
                format: format.into(),
                width: width
                    .map(CaptionWidth::new)
                    .unwrap_or_else(|| config.caption_width_or_default()),
            };
            return run_subtitles(options, &config).await;
        }
        None => {}
    }

    // No subcommand: transcribe the given file
    let file = match cli.file {
        Some(file) => file,
        None => {
            presenter.error("No audio file given. See 'voxscribe --help'.");
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let spelling_rules = match cli
        .spelling
        .iter()
        .map(|s| s.parse::<SpellingRule>())
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(rules) => rules,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let config = load_merged_config().await;

    let options = TranscribeOptions {
        file,
        speakers: cli.speakers.unwrap_or_else(|| config.speakers_or_default()),
        spelling_rules,
        view: cli.view,
    };

    run_transcribe(options, &config).await
}
