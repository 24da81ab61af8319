//! CLI integration tests

use assert_cmd::Command as AssertCommand;
use predicates::prelude::*;
use std::process::Command;

fn voxscribe_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_voxscribe"))
}

#[test]
fn help_output() {
    AssertCommand::cargo_bin("voxscribe")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("transcription")
                .and(predicate::str::contains("--speakers"))
                .and(predicate::str::contains("--spell"))
                .and(predicate::str::contains("--view"))
                .and(predicate::str::contains("subtitles"))
                .and(predicate::str::contains("config")),
        );
}

#[test]
fn version_output() {
    let output = voxscribe_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("voxscribe"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn subtitles_help() {
    let output = voxscribe_bin()
        .args(["subtitles", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--format"));
    assert!(stdout.contains("--width"));
    assert!(stdout.contains("JOB_ID"));
}

#[test]
fn config_path_command() {
    let output = voxscribe_bin()
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("voxscribe"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let output = voxscribe_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn languages_command_lists_catalog() {
    AssertCommand::cargo_bin("voxscribe")
        .unwrap()
        .arg("languages")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Global English").and(predicate::str::contains("Japanese")),
        );
}

#[test]
fn no_file_and_no_subcommand_is_usage_error() {
    let output = voxscribe_bin()
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn unknown_subtitle_format_is_rejected() {
    let output = voxscribe_bin()
        .args(["subtitles", "abc123", "--format", "ass"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid value") || stderr.contains("possible values"),
        "Expected clap rejection, got: {}",
        stderr
    );
}

#[test]
fn invalid_spelling_rule_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let audio = dir.path().join("talk.mp3");
    std::fs::write(&audio, b"fake audio").unwrap();

    let output = voxscribe_bin()
        .arg(&audio)
        .args(["--spell", "no-separator"])
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid spelling rule"),
        "Expected spelling rule error, got: {}",
        stderr
    );
}
