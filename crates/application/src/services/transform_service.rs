//! Transformer stage
//!
//! Pure derivation of an [`Analysis`] from a [`WeatherSnapshot`]. Nothing here
//! performs I/O or reads the clock, so identical snapshots always produce
//! identical analyses.

use domain::{
    Analysis, ComfortLevel, CurrentAnalysis, ForecastAnalysis, ForecastEntry, HumidityLevel,
    PrecipitationOutlook, SkyCategory, TemperatureRange, Trend, WeatherRecord, WeatherReport,
    WeatherSnapshot, WindStrength, celsius_to_fahrenheit, round1,
};
use serde::{Deserialize, Serialize};

/// Alert thresholds; every comparison is strict, so a value exactly at a
/// threshold never raises an alert
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertThresholds {
    /// Heat alert when a day's high exceeds this (°C)
    pub heat_max: f64,
    /// Cold alert when a day's low falls below this (°C)
    pub cold_min: f64,
    /// Heavy precipitation alert when a day's total exceeds this (mm)
    pub heavy_precipitation_mm: f64,
    /// Thunderstorm alert when the WMO code is at least this
    pub thunderstorm_code: u8,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            heat_max: 35.0,
            cold_min: -10.0,
            heavy_precipitation_mm: 10.0,
            thunderstorm_code: 95,
        }
    }
}

/// Derives comfort, trend, alerts and forecast aggregates
#[derive(Debug, Clone, Default)]
pub struct TransformService {
    thresholds: AlertThresholds,
}

impl TransformService {
    #[must_use]
    pub const fn new(thresholds: AlertThresholds) -> Self {
        Self { thresholds }
    }

    #[must_use]
    pub const fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }

    /// Attach an analysis to the snapshot
    #[must_use]
    pub fn transform(&self, snapshot: WeatherSnapshot) -> WeatherReport {
        let analysis = self.analyze(&snapshot);
        WeatherReport::new(snapshot, analysis)
    }

    #[must_use]
    pub fn analyze(&self, snapshot: &WeatherSnapshot) -> Analysis {
        Analysis {
            current: analyze_current(snapshot.current()),
            forecast: analyze_forecast(snapshot.forecast()),
            alerts: self.alerts(snapshot.forecast()),
        }
    }

    /// Alert messages for each forecast day, in date order
    #[must_use]
    pub fn alerts(&self, forecast: &[ForecastEntry]) -> Vec<String> {
        let t = &self.thresholds;
        let mut alerts = Vec::new();

        for day in forecast {
            if day.temperature_max > t.heat_max {
                alerts.push(format!(
                    "Heat alert on {}: high of {:.1}°C",
                    day.date, day.temperature_max
                ));
            }
            if day.temperature_min < t.cold_min {
                alerts.push(format!(
                    "Cold alert on {}: low of {:.1}°C",
                    day.date, day.temperature_min
                ));
            }
            if day.precipitation_sum > t.heavy_precipitation_mm {
                alerts.push(format!(
                    "Heavy precipitation expected on {}: {:.1}mm",
                    day.date, day.precipitation_sum
                ));
            }
            if day.weather_code >= t.thunderstorm_code {
                alerts.push(format!("Thunderstorm possible on {}", day.date));
            }
        }

        alerts
    }
}

#[must_use]
pub fn analyze_current(record: &WeatherRecord) -> CurrentAnalysis {
    CurrentAnalysis {
        weather_description: record.description().into_owned(),
        temperature_fahrenheit: celsius_to_fahrenheit(record.temperature),
        feels_like_fahrenheit: celsius_to_fahrenheit(record.apparent_temperature),
        comfort: ComfortLevel::classify(record.temperature, record.humidity),
        humidity_level: HumidityLevel::from_humidity(record.humidity),
        wind: WindStrength::from_speed(record.wind_speed),
        precipitating: record.is_precipitating(),
    }
}

#[must_use]
pub fn analyze_forecast(forecast: &[ForecastEntry]) -> ForecastAnalysis {
    ForecastAnalysis {
        days: forecast.len(),
        trend: trend(forecast),
        temperature_range: temperature_range(forecast),
        precipitation: precipitation_outlook(forecast),
        week_summary: week_summary(forecast),
    }
}

/// Sign of (last high - first high), with a dead band of [`Trend::THRESHOLD`]
#[must_use]
pub fn trend(forecast: &[ForecastEntry]) -> Trend {
    match (forecast.first(), forecast.last()) {
        (Some(first), Some(last)) if forecast.len() >= 2 => {
            Trend::from_highs(first.temperature_max, last.temperature_max)
        },
        _ => Trend::InsufficientData,
    }
}

#[must_use]
pub fn temperature_range(forecast: &[ForecastEntry]) -> Option<TemperatureRange> {
    if forecast.is_empty() {
        return None;
    }

    let n = forecast.len() as f64;
    let highest = forecast
        .iter()
        .map(|d| d.temperature_max)
        .fold(f64::NEG_INFINITY, f64::max);
    let lowest = forecast
        .iter()
        .map(|d| d.temperature_min)
        .fold(f64::INFINITY, f64::min);
    let sum_high: f64 = forecast.iter().map(|d| d.temperature_max).sum();
    let sum_low: f64 = forecast.iter().map(|d| d.temperature_min).sum();

    Some(TemperatureRange {
        highest,
        lowest,
        average_high: round1(sum_high / n),
        average_low: round1(sum_low / n),
    })
}

#[must_use]
pub fn precipitation_outlook(forecast: &[ForecastEntry]) -> PrecipitationOutlook {
    let total: f64 = forecast.iter().map(|d| d.precipitation_sum).sum();
    let rainy_days = forecast
        .iter()
        .filter(|d| d.precipitation_sum > 0.0)
        .count();

    // First day wins ties
    let heaviest = forecast
        .iter()
        .filter(|d| d.precipitation_sum > 0.0)
        .fold(None::<&ForecastEntry>, |best, d| match best {
            Some(b) if b.precipitation_sum >= d.precipitation_sum => Some(b),
            _ => Some(d),
        });

    PrecipitationOutlook {
        total_mm: round1(total),
        rainy_days,
        heaviest_day: heaviest.map(|d| d.date),
        heaviest_mm: heaviest.map_or(0.0, |d| d.precipitation_sum),
    }
}

/// One-line description such as "2 clear days, 1 rainy day"
#[must_use]
pub fn week_summary(forecast: &[ForecastEntry]) -> String {
    if forecast.is_empty() {
        return "No forecast data".to_string();
    }

    let count = |category: SkyCategory| {
        forecast
            .iter()
            .filter(|d| d.condition.sky_category() == Some(category))
            .count()
    };

    let parts: Vec<String> = [
        (SkyCategory::Clear, "clear"),
        (SkyCategory::Cloudy, "cloudy"),
        (SkyCategory::Rainy, "rainy"),
        (SkyCategory::Snowy, "snowy"),
    ]
    .into_iter()
    .filter_map(|(category, word)| match count(category) {
        0 => None,
        1 => Some(format!("1 {word} day")),
        n => Some(format!("{n} {word} days")),
    })
    .collect();

    if parts.is_empty() {
        "Mixed conditions".to_string()
    } else {
        parts.join(", ")
    }
}
