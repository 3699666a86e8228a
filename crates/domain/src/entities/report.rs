//! Weather report and its compact summary

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{Analysis, ComfortLevel, Trend, WeatherSnapshot};

/// A snapshot together with its analysis; the unit the loader persists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub snapshot: WeatherSnapshot,
    pub analysis: Analysis,
}

impl WeatherReport {
    #[must_use]
    pub const fn new(snapshot: WeatherSnapshot, analysis: Analysis) -> Self {
        Self { snapshot, analysis }
    }

    /// Observation time of the current conditions
    #[must_use]
    pub const fn observed_at(&self) -> NaiveDateTime {
        self.snapshot.current().observed_at
    }
}

/// Digest of a report for dashboards and quick checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub location: String,
    pub observed_at: NaiveDateTime,
    pub current_temperature: f64,
    pub condition: String,
    pub comfort: ComfortLevel,
    pub trend: Trend,
    pub forecast_days: usize,
    pub highest_temperature: Option<f64>,
    pub lowest_temperature: Option<f64>,
    pub total_precipitation_mm: f64,
    pub rainy_days: usize,
    pub alert_count: usize,
    pub week_summary: String,
}

impl From<&WeatherReport> for SummaryStats {
    fn from(report: &WeatherReport) -> Self {
        let current = report.snapshot.current();
        let forecast = &report.analysis.forecast;
        let range = forecast.temperature_range.as_ref();

        Self {
            location: report.snapshot.location().to_string(),
            observed_at: current.observed_at,
            current_temperature: current.temperature,
            condition: current.description().into_owned(),
            comfort: report.analysis.current.comfort,
            trend: forecast.trend,
            forecast_days: forecast.days,
            highest_temperature: range.map(|r| r.highest),
            lowest_temperature: range.map(|r| r.lowest),
            total_precipitation_mm: forecast.precipitation.total_mm,
            rainy_days: forecast.precipitation.rainy_days,
            alert_count: report.analysis.alerts.len(),
            week_summary: forecast.week_summary.clone(),
        }
    }
}
