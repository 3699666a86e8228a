//! Extract, transform, load
//!
//! Runs the three stages once, in order, and records the outcome in the run log.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use domain::{Location, RunLogEntry, WeatherReport};
use tracing::{info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{ReportStorePort, StoreOutcome, WeatherPort};
use crate::services::TransformService;

/// Default forecast horizon in days
pub const DEFAULT_FORECAST_DAYS: u8 = 7;

/// Result of a successful pipeline run
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub report: WeatherReport,
    pub outcome: StoreOutcome,
    pub duration_ms: u64,
}

impl PipelineRun {
    /// Whether any output file changed (advisory signal for the commit step)
    #[must_use]
    pub fn changed(&self) -> bool {
        self.outcome.changed()
    }
}

/// Orchestrates one extract → transform → load pass
pub struct PipelineService {
    weather: Arc<dyn WeatherPort>,
    store: Arc<dyn ReportStorePort>,
    transform: TransformService,
    location: Location,
    forecast_days: u8,
}

impl std::fmt::Debug for PipelineService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineService")
            .field("weather", &"<WeatherPort>")
            .field("store", &"<ReportStorePort>")
            .field("transform", &self.transform)
            .field("location", &self.location)
            .field("forecast_days", &self.forecast_days)
            .finish()
    }
}

impl PipelineService {
    #[must_use]
    pub fn new(
        weather: Arc<dyn WeatherPort>,
        store: Arc<dyn ReportStorePort>,
        location: Location,
    ) -> Self {
        Self {
            weather,
            store,
            transform: TransformService::default(),
            location,
            forecast_days: DEFAULT_FORECAST_DAYS,
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: TransformService) -> Self {
        self.transform = transform;
        self
    }

    #[must_use]
    pub const fn with_forecast_days(mut self, days: u8) -> Self {
        self.forecast_days = days;
        self
    }

    /// Run the pipeline once
    ///
    /// The outcome, success or failure, is appended to the run log. A failure
    /// to write the log is only warned about and never replaces the run's own
    /// result.
    #[instrument(skip(self), fields(location = %self.location, days = self.forecast_days))]
    pub async fn run(&self) -> Result<PipelineRun, ApplicationError> {
        let started = Instant::now();
        let result = self.execute().await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let entry = match &result {
            Ok((report, outcome)) => RunLogEntry::success(
                Utc::now(),
                duration_ms,
                outcome.changed(),
                report.observed_at(),
                report.analysis.alerts.len(),
            ),
            Err(e) => RunLogEntry::failure(Utc::now(), duration_ms, e.to_string()),
        };

        if let Err(e) = self.store.append_run_log(entry).await {
            warn!(error = %e, "Failed to append run log entry");
        }

        match result {
            Ok((report, outcome)) => {
                info!(
                    changed = outcome.changed(),
                    alerts = report.analysis.alerts.len(),
                    duration_ms,
                    "Pipeline run completed"
                );
                Ok(PipelineRun {
                    report,
                    outcome,
                    duration_ms,
                })
            },
            Err(e) => {
                warn!(error = %e, duration_ms, "Pipeline run failed");
                Err(e)
            },
        }
    }

    async fn execute(&self) -> Result<(WeatherReport, StoreOutcome), ApplicationError> {
        let snapshot = self
            .weather
            .fetch_snapshot(&self.location, self.forecast_days)
            .await?;
        info!(
            observed_at = %snapshot.current().observed_at,
            forecast_days = snapshot.forecast().len(),
            "Extracted weather snapshot"
        );

        let report = self.transform.transform(snapshot);
        info!(
            comfort = %report.analysis.current.comfort,
            trend = %report.analysis.forecast.trend,
            alerts = report.analysis.alerts.len(),
            "Transformed snapshot"
        );

        let outcome = self.store.store_report(&report).await?;
        Ok((report, outcome))
    }
}
