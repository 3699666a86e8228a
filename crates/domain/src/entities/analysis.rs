//! Derived weather analysis
//!
//! Labels and aggregates computed from a [`WeatherSnapshot`](super::WeatherSnapshot).
//! Every band boundary documented below is part of the contract: output
//! labels must be reproducible from the same inputs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Humidity;

/// Comfort label from temperature (°C) and relative humidity (%)
///
/// Bands are checked top to bottom, all bounds inclusive:
///
/// | label | temperature | humidity |
/// |---|---|---|
/// | `VeryComfortable` | 18..=24 | 40..=60 |
/// | `Comfortable` | 15..=27 | 30..=70 |
/// | `Acceptable` | 10..=30 | any |
/// | `Cold` | below 10 | any |
/// | `Hot` | above 30 | any |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComfortLevel {
    VeryComfortable,
    Comfortable,
    Acceptable,
    Cold,
    Hot,
}

impl ComfortLevel {
    #[must_use]
    pub fn classify(temperature: f64, humidity: Humidity) -> Self {
        let h = humidity.as_f64();
        if (18.0..=24.0).contains(&temperature) && (40.0..=60.0).contains(&h) {
            Self::VeryComfortable
        } else if (15.0..=27.0).contains(&temperature) && (30.0..=70.0).contains(&h) {
            Self::Comfortable
        } else if (10.0..=30.0).contains(&temperature) {
            Self::Acceptable
        } else if temperature < 10.0 {
            Self::Cold
        } else {
            Self::Hot
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryComfortable => "Very Comfortable",
            Self::Comfortable => "Comfortable",
            Self::Acceptable => "Acceptable",
            Self::Cold => "Cold",
            Self::Hot => "Hot",
        }
    }
}

impl fmt::Display for ComfortLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of forecast highs over the horizon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Warming,
    Cooling,
    Stable,
    InsufficientData,
}

impl Trend {
    /// Dead band around zero, in °C; differences of exactly this size are `Stable`
    pub const THRESHOLD: f64 = 2.0;

    /// Classify from the first and last forecast highs
    #[must_use]
    pub fn from_highs(first: f64, last: f64) -> Self {
        let delta = last - first;
        if delta > Self::THRESHOLD {
            Self::Warming
        } else if delta < -Self::THRESHOLD {
            Self::Cooling
        } else {
            Self::Stable
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Warming => "Warming",
            Self::Cooling => "Cooling",
            Self::Stable => "Stable",
            Self::InsufficientData => "Insufficient data",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Humidity band: below 30 low, below 60 comfortable, below 80 high, else very high
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HumidityLevel {
    Low,
    Comfortable,
    High,
    VeryHigh,
}

impl HumidityLevel {
    #[must_use]
    pub const fn from_humidity(humidity: Humidity) -> Self {
        match humidity.value() {
            0..30 => Self::Low,
            30..60 => Self::Comfortable,
            60..80 => Self::High,
            _ => Self::VeryHigh,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low (Dry)",
            Self::Comfortable => "Comfortable",
            Self::High => "High",
            Self::VeryHigh => "Very High (Humid)",
        }
    }
}

impl fmt::Display for HumidityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wind strength from speed in km/h
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindStrength {
    Calm,
    LightBreeze,
    Moderate,
    Strong,
    VeryStrong,
}

impl WindStrength {
    #[must_use]
    pub fn from_speed(kmh: f64) -> Self {
        if kmh < 5.0 {
            Self::Calm
        } else if kmh < 15.0 {
            Self::LightBreeze
        } else if kmh < 25.0 {
            Self::Moderate
        } else if kmh < 35.0 {
            Self::Strong
        } else {
            Self::VeryStrong
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Calm => "Calm",
            Self::LightBreeze => "Light breeze",
            Self::Moderate => "Moderate wind",
            Self::Strong => "Strong wind",
            Self::VeryStrong => "Very strong wind",
        }
    }
}

impl fmt::Display for WindStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Analysis of the current conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentAnalysis {
    /// Per-code description of the observed weather
    pub weather_description: String,
    pub temperature_fahrenheit: f64,
    pub feels_like_fahrenheit: f64,
    pub comfort: ComfortLevel,
    pub humidity_level: HumidityLevel,
    pub wind: WindStrength,
    pub precipitating: bool,
}

/// Extremes and averages of the forecast temperatures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub highest: f64,
    pub lowest: f64,
    pub average_high: f64,
    pub average_low: f64,
}

/// Precipitation totals over the forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationOutlook {
    pub total_mm: f64,
    /// Days with any precipitation
    pub rainy_days: usize,
    /// Wettest day, if any day has precipitation
    pub heaviest_day: Option<NaiveDate>,
    pub heaviest_mm: f64,
}

/// Analysis of the forecast horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastAnalysis {
    pub days: usize,
    pub trend: Trend,
    /// `None` for an empty forecast
    pub temperature_range: Option<TemperatureRange>,
    pub precipitation: PrecipitationOutlook,
    pub week_summary: String,
}

/// Derived fields attached to a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub current: CurrentAnalysis,
    pub forecast: ForecastAnalysis,
    /// Alert messages in forecast date order; empty when nothing crosses a threshold
    pub alerts: Vec<String>,
}

impl Analysis {
    #[must_use]
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }
}
