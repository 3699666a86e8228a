//! Weather pipeline CLI
//!
//! Runs the extract, transform and load pipeline once when invoked without
//! a subcommand, which is how the scheduled CI job calls it.

#![allow(clippy::print_stdout)]

mod pipeline;
mod schedule;
mod show;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use infrastructure::schedule::DEFAULT_WORKFLOW_PATH;
use infrastructure::{AppConfig, ScheduleMode, init_telemetry};

/// Weather data pipeline
#[derive(Parser)]
#[command(name = "weather-pipeline")]
#[command(author, version, about = "Fetch, analyze and store weather data", long_about = None)]
struct Cli {
    /// Verbosity level (overrides the configured log filter and RUST_LOG)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file (default: ./config.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the pipeline once (the default)
    Run,

    /// Print the latest stored report
    Show,

    /// Print the recorded observation history
    History,

    /// Print the effective configuration as TOML
    Config,

    /// Inspect or switch the CI workflow schedule
    ///
    /// Example: weather-pipeline schedule testing
    Schedule {
        #[command(subcommand)]
        action: ScheduleAction,

        /// Workflow file to edit
        #[arg(long, default_value = DEFAULT_WORKFLOW_PATH, global = true)]
        workflow: PathBuf,
    },
}

#[derive(Subcommand)]
enum ScheduleAction {
    /// Show the current schedule
    Status,
    /// Run every 10 minutes
    Testing,
    /// Run daily at 12:35 AM UTC
    Daily,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let mut telemetry = config.telemetry.clone();
    if cli.verbose > 0 {
        telemetry = telemetry.with_forced_log_filter(log_filter_from_verbosity(cli.verbose));
    }
    init_telemetry(&telemetry)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => pipeline::run_pipeline(&config).await?,
        Commands::Show => show::show_latest(&config).await?,
        Commands::History => show::show_history(&config).await?,
        Commands::Config => print!("{}", config.to_toml()?),
        Commands::Schedule { action, workflow } => match action {
            ScheduleAction::Status => schedule::show_status(&workflow)?,
            ScheduleAction::Testing => schedule::switch_to(&workflow, ScheduleMode::Testing)?,
            ScheduleAction::Daily => schedule::switch_to(&workflow, ScheduleMode::Daily)?,
        },
    }

    Ok(())
}
