//! Integration tests for the CLI binary
//!
//! These run the compiled `weather-pipeline` binary in a scratch directory.
//! None of them reach the network.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const DAILY_WORKFLOW: &str = "\
name: Weather Data Pipeline

on:
  schedule:
    # Schedule to run daily at 12:35 AM UTC (7:35 AM Toronto time)
    - cron: '35 0 * * *'
  workflow_dispatch:
";

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_weather-pipeline"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["--help"]);
    assert!(output.status.success());

    let text = stdout(&output);
    for name in ["run", "show", "history", "config", "schedule"] {
        assert!(text.contains(name), "help is missing {name}");
    }
}

#[test]
fn config_prints_defaults() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["config"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("[location]"));
    assert!(text.contains("name = \"Toronto\""));
}

#[test]
fn config_file_in_working_directory_is_used() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[location]\nname = \"Ottawa\"\n").unwrap();

    let output = run_in(dir.path(), &["config"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("name = \"Ottawa\""));
}

#[test]
fn explicit_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["--config", "nope.toml", "config"]);
    assert!(!output.status.success());
}

#[test]
fn show_without_report_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["show"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No stored report"));
}

#[test]
fn history_without_observations_says_so() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["history"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "No observations recorded yet\n");
}

#[test]
fn history_with_corrupt_file_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data/weather_history.json"), "not json").unwrap();

    let output = run_in(dir.path(), &["history"]);
    assert!(!output.status.success());
}

#[test]
fn schedule_round_trip() {
    let dir = TempDir::new().unwrap();
    let workflow = dir.path().join("data_pipeline.yml");
    std::fs::write(&workflow, DAILY_WORKFLOW).unwrap();
    let workflow = workflow.to_str().unwrap();

    let status = run_in(dir.path(), &["schedule", "status", "--workflow", workflow]);
    assert!(status.status.success());
    assert!(stdout(&status).contains("daily mode"));

    let switched = run_in(dir.path(), &["schedule", "testing", "--workflow", workflow]);
    assert!(switched.status.success());
    assert!(stdout(&switched).contains("from daily to testing"));

    let again = run_in(dir.path(), &["schedule", "testing", "--workflow", workflow]);
    assert!(stdout(&again).contains("Already in testing mode"));

    run_in(dir.path(), &["schedule", "daily", "--workflow", workflow]);
    assert_eq!(std::fs::read_to_string(workflow).unwrap(), DAILY_WORKFLOW);
}

#[test]
fn schedule_with_missing_workflow_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["schedule", "status"]);
    assert!(!output.status.success());
}

#[test]
fn unknown_subcommand_fails() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["publish"]);
    assert!(!output.status.success());
}
