//! Flat CSV rendering of a weather report and of the observation history
//!
//! The report gets one row for the current observation followed by one row
//! per forecast day. Columns that do not apply to a row are left empty.

use domain::{HistoryEntry, WeatherReport};

use super::error::StorageError;

const HEADER: [&str; 16] = [
    "kind",
    "time",
    "weather_code",
    "description",
    "temperature_c",
    "feels_like_c",
    "high_c",
    "low_c",
    "humidity_pct",
    "wind_speed_kmh",
    "wind_direction_deg",
    "precipitation_mm",
    "precipitation_probability_pct",
    "comfort",
    "wind",
    "trend",
];

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

/// Render the report as CSV bytes
///
/// Rendering depends only on the report, so identical reports produce
/// identical bytes.
pub fn render_csv(report: &WeatherReport) -> Result<Vec<u8>, StorageError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(HEADER)?;

    let current = report.snapshot.current();
    let analysis = &report.analysis;
    wtr.write_record([
        "current".to_string(),
        current.observed_at.format("%Y-%m-%dT%H:%M").to_string(),
        current.weather_code.to_string(),
        current.description().into_owned(),
        current.temperature.to_string(),
        current.apparent_temperature.to_string(),
        String::new(),
        String::new(),
        current.humidity.value().to_string(),
        current.wind_speed.to_string(),
        current.wind_direction.to_string(),
        current.precipitation.to_string(),
        String::new(),
        analysis.current.comfort.to_string(),
        analysis.current.wind.to_string(),
        analysis.forecast.trend.to_string(),
    ])?;

    for day in report.snapshot.forecast() {
        wtr.write_record([
            "forecast".to_string(),
            day.date.format("%Y-%m-%d").to_string(),
            day.weather_code.to_string(),
            day.description().into_owned(),
            String::new(),
            String::new(),
            day.temperature_max.to_string(),
            day.temperature_min.to_string(),
            String::new(),
            day.wind_speed_max.to_string(),
            day.wind_direction_dominant.to_string(),
            day.precipitation_sum.to_string(),
            opt(day.precipitation_probability),
            String::new(),
            String::new(),
            String::new(),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    wtr.into_inner()
        .map_err(|e| StorageError::Csv(csv::Error::from(e.into_error())))
}

const HISTORY_HEADER: [&str; 9] = [
    "observed_at",
    "temperature_c",
    "feels_like_c",
    "humidity_pct",
    "description",
    "comfort",
    "wind",
    "precipitating",
    "alert_count",
];

/// Render the history as CSV bytes, one row per observation
pub fn render_history_csv(history: &[HistoryEntry]) -> Result<Vec<u8>, StorageError> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(HISTORY_HEADER)?;

    for entry in history {
        wtr.write_record([
            entry.observed_at.format("%Y-%m-%dT%H:%M").to_string(),
            entry.temperature.to_string(),
            entry.feels_like.to_string(),
            entry.humidity.to_string(),
            entry.weather_description.clone(),
            entry.comfort.to_string(),
            entry.wind.to_string(),
            if entry.precipitating { "Yes" } else { "No" }.to_string(),
            entry.alert_count.to_string(),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    wtr.into_inner()
        .map_err(|e| StorageError::Csv(csv::Error::from(e.into_error())))
}
