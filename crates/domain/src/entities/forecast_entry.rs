//! Daily forecast entry

use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::{WeatherCondition, wmo_description};

/// Forecast for a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Forecast date (location-local)
    pub date: NaiveDate,
    /// Maximum temperature in Celsius
    pub temperature_max: f64,
    /// Minimum temperature in Celsius
    pub temperature_min: f64,
    /// Total precipitation in mm
    pub precipitation_sum: f64,
    /// Precipitation probability percentage (0-100), when the provider reports it
    pub precipitation_probability: Option<u8>,
    /// Maximum wind speed in km/h
    pub wind_speed_max: f64,
    /// Dominant wind direction in degrees
    pub wind_direction_dominant: u16,
    /// WMO weather code
    pub weather_code: u8,
    /// Condition derived from `weather_code`
    pub condition: WeatherCondition,
}

impl ForecastEntry {
    #[must_use]
    pub fn description(&self) -> Cow<'static, str> {
        wmo_description(self.weather_code)
    }

    /// Get a formatted summary of the daily forecast
    #[must_use]
    pub fn summary(&self) -> String {
        let chance = self
            .precipitation_probability
            .map_or_else(String::new, |p| format!(" ({p}%)"));
        format!(
            "{} {} {:.0}°C/{:.0}°C, precip {:.1}mm{}",
            self.condition.emoji(),
            self.description(),
            self.temperature_max,
            self.temperature_min,
            self.precipitation_sum,
            chance
        )
    }
}
