//! Rolling history of observations

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{ComfortLevel, WeatherReport, WindStrength};

/// Observations kept in the history by default
pub const DEFAULT_HISTORY_RETENTION: usize = 30;

/// One past observation, flattened for the history files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Observation time (location-local); unique within a history
    pub observed_at: NaiveDateTime,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: u8,
    pub weather_description: String,
    pub comfort: ComfortLevel,
    pub wind: WindStrength,
    pub precipitating: bool,
    pub alert_count: usize,
}

impl From<&WeatherReport> for HistoryEntry {
    fn from(report: &WeatherReport) -> Self {
        let current = report.snapshot.current();
        let analysis = &report.analysis.current;

        Self {
            observed_at: current.observed_at,
            temperature: current.temperature,
            feels_like: current.apparent_temperature,
            humidity: current.humidity.value(),
            weather_description: analysis.weather_description.clone(),
            comfort: analysis.comfort,
            wind: analysis.wind,
            precipitating: analysis.precipitating,
            alert_count: report.analysis.alerts.len(),
        }
    }
}

/// Add `entry` to `history`, keeping it ordered by observation time
///
/// An entry for an observation time already present replaces the old one,
/// so re-recording the same observation never grows the history. The oldest
/// entries beyond `retention` (minimum 1) are dropped.
pub fn merge_history(history: &mut Vec<HistoryEntry>, entry: HistoryEntry, retention: usize) {
    match history.binary_search_by_key(&entry.observed_at, |e| e.observed_at) {
        Ok(pos) => history[pos] = entry,
        Err(pos) => history.insert(pos, entry),
    }

    let retention = retention.max(1);
    if history.len() > retention {
        let excess = history.len() - retention;
        history.drain(..excess);
    }
}
