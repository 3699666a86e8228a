//! `run` command: wire the adapters into a pipeline and execute it once

use std::sync::Arc;

use anyhow::Context;
use application::{PipelineRun, PipelineService, TransformService};
use infrastructure::{AppConfig, WeatherAdapter};
use tracing::info;

/// Assemble the pipeline from configuration
pub fn build_pipeline(config: &AppConfig) -> anyhow::Result<PipelineService> {
    let location = config.location().context("Invalid location configuration")?;
    let weather = WeatherAdapter::with_config(config.weather.clone())
        .context("Failed to create weather client")?;
    let store = config.output.report_store();

    Ok(PipelineService::new(Arc::new(weather), Arc::new(store), location)
        .with_transform(TransformService::new(config.thresholds.clone()))
        .with_forecast_days(config.weather.forecast_days))
}

/// Run the pipeline and print which files changed
pub async fn run_pipeline(config: &AppConfig) -> anyhow::Result<()> {
    let pipeline = build_pipeline(config)?;
    let run = pipeline.run().await.context("Pipeline run failed")?;

    info!(
        changed = run.changed(),
        duration_ms = run.duration_ms,
        alerts = run.report.analysis.alerts.len(),
        "Pipeline finished"
    );

    print!("{}", render_run(&run));
    Ok(())
}

/// Run summary for stdout
///
/// The last line is exactly `changed` or `unchanged`; the CI workflow reads
/// it to decide whether to commit.
pub fn render_run(run: &PipelineRun) -> String {
    let mut lines = vec![format!(
        "🌤️  {} observed {}",
        run.report.snapshot.location(),
        run.report.observed_at().format("%Y-%m-%d %H:%M")
    )];
    lines.extend(
        run.outcome
            .files
            .iter()
            .map(|file| format!("  {:<20} {}", file.name, file.status)),
    );
    lines.extend(run.report.analysis.alerts.iter().map(|a| format!("  ⚠️  {a}")));
    lines.push(if run.changed() { "changed" } else { "unchanged" }.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
