//! Main app runners for the transcribe and subtitles commands

use std::env;
use std::path::Path;
use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::{
    FetchSubtitlesUseCase, TranscribeAudioUseCase, TranscribeCallbacks, TranscribeInput,
};
use crate::domain::config::{AppConfig, DEFAULT_API_KEY};
use crate::domain::language::LanguageCatalog;
use crate::domain::transcription::{AudioFormat, AudioPayload, JobId, TranscriptionOptions};
use crate::infrastructure::{AssemblyAiEngine, TokioClock, XdgConfigStore};

use super::args::{SubtitleOptions, TranscribeOptions, ViewArg};
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Load the config file, merged over built-in defaults
pub async fn load_merged_config() -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load().await.unwrap_or_else(|_| AppConfig::empty());
    AppConfig::defaults().merge(file_config)
}

/// Resolve the service credential: environment, then config file, then
/// the built-in placeholder (which the provider will reject).
pub fn resolve_api_key(config: &AppConfig, presenter: &Presenter) -> String {
    if let Ok(key) = env::var("ASSEMBLYAI_API_KEY") {
        if !key.is_empty() {
            return key;
        }
    }

    if let Some(ref key) = config.api_key {
        if !key.is_empty() {
            return key.clone();
        }
    }

    presenter.warn(
        "No API key configured; using the built-in placeholder. \
         Set ASSEMBLYAI_API_KEY or run 'voxscribe config set api_key <key>'.",
    );
    DEFAULT_API_KEY.to_string()
}

/// Read an audio file into a payload, validating its extension
async fn read_payload(path: &Path) -> Result<AudioPayload, String> {
    let format = AudioFormat::from_path(path).map_err(|e| e.to_string())?;

    let data = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    Ok(AudioPayload::new(data, format))
}

/// Run the end-to-end transcription
pub async fn run_transcribe(options: TranscribeOptions, config: &AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();

    let api_key = resolve_api_key(config, &presenter);

    let payload = match read_payload(&options.file).await {
        Ok(payload) => payload,
        Err(e) => {
            presenter.error(&e);
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    // Ctrl-C abandons the poll; the remote job keeps running
    let shutdown = ShutdownSignal::new();
    shutdown.setup();

    let engine = AssemblyAiEngine::with_base_url(api_key, config.base_url_or_default());
    let use_case = TranscribeAudioUseCase::new(engine, TokioClock, LanguageCatalog::builtin())
        .with_cancel_flag(shutdown.flag());

    let input = TranscribeInput {
        payload,
        options: TranscriptionOptions::new(options.speakers, options.spelling_rules.clone()),
    };

    presenter.start_spinner("Uploading audio...");
    let spinner = presenter.spinner_handle();
    let poll_spinner = spinner.clone();

    let callbacks = TranscribeCallbacks {
        on_upload_start: Some(Box::new({
            let spinner = spinner.clone();
            move |size: &str| {
                if let Some(ref s) = spinner {
                    s.set_message(format!("Uploading audio ({})...", size));
                }
            }
        })),
        on_submitted: Some(Box::new(move |_job: &JobId| {
            if let Some(ref s) = spinner {
                s.set_message("Transcribing...".to_string());
            }
        })),
        on_poll_attempt: Some(Box::new(move |attempt, max| {
            if let Some(ref s) = poll_spinner {
                s.set_message(Presenter::format_poll_progress(attempt, max));
            }
        })),
    };

    match use_case.execute(input, callbacks).await {
        Ok(output) => {
            presenter.spinner_success("Transcription complete");
            print_views(&presenter, &output.views, options.view);
            presenter.info(&format!(
                "Job id: {} (use 'voxscribe subtitles {}' to export captions)",
                output.job, output.job
            ));
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Print the selected view(s) of a completed transcription
fn print_views(
    presenter: &Presenter,
    views: &crate::domain::transcription::TranscriptViews,
    selection: ViewArg,
) {
    if let Some(ref name) = views.detected_language {
        match views.language_code.as_deref() {
            Some(code) => presenter.info(&format!("Detected language: {} ({})", name, code)),
            None => presenter.info(&format!("Detected language: {}", name)),
        }
    } else if let Some(ref code) = views.language_code {
        presenter.info(&format!("Detected language code: {}", code));
    }

    let speaker_lines = || {
        views
            .speaker
            .iter()
            .map(|turn| turn.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    };

    match selection {
        ViewArg::Full => presenter.output(&views.full),
        ViewArg::Word => presenter.output(&views.word),
        ViewArg::Sentence => presenter.output(&views.sentence),
        ViewArg::Speaker => presenter.output(&speaker_lines()),
        ViewArg::All => {
            presenter.section("Transcript");
            presenter.output(&views.full);
            presenter.section("By word");
            presenter.output(&views.word);
            presenter.section("By sentence");
            presenter.output(&views.sentence);
            if !views.speaker.is_empty() {
                presenter.section("By speaker");
                presenter.output(&speaker_lines());
            }
        }
    }
}

/// Run the subtitle export
pub async fn run_subtitles(options: SubtitleOptions, config: &AppConfig) -> ExitCode {
    let presenter = Presenter::new();

    let api_key = resolve_api_key(config, &presenter);

    let engine = AssemblyAiEngine::with_base_url(api_key, config.base_url_or_default());
    let use_case = FetchSubtitlesUseCase::new(engine);

    let job = JobId::new(options.job_id);

    match use_case.execute(&job, options.format, options.width).await {
        Ok(text) => {
            presenter.output(&text);
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Print the language catalog
pub fn run_languages() -> ExitCode {
    let presenter = Presenter::new();
    let catalog = LanguageCatalog::builtin();

    for (code, name) in catalog.entries() {
        presenter.key_value(code, name);
    }

    ExitCode::from(EXIT_SUCCESS)
}
