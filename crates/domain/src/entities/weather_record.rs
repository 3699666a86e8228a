//! Current weather observation

use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::value_objects::{Humidity, WeatherCondition, wmo_description};

/// Convert Celsius to Fahrenheit, rounded to one decimal
#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    round1(celsius.mul_add(9.0 / 5.0, 32.0))
}

/// Round to one decimal place
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Current conditions at the observation time
///
/// Times are local to the location's timezone, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Observation time (location-local)
    pub observed_at: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Apparent (feels like) temperature in Celsius
    pub apparent_temperature: f64,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees (0-360)
    pub wind_direction: u16,
    /// Precipitation in mm over the preceding interval
    pub precipitation: f64,
    /// WMO weather code
    pub weather_code: u8,
    /// Condition derived from `weather_code`
    pub condition: WeatherCondition,
}

impl WeatherRecord {
    /// Whether any precipitation was measured
    #[must_use]
    pub fn is_precipitating(&self) -> bool {
        self.precipitation > 0.0
    }

    /// Per-code description, e.g. "Moderate rain"
    #[must_use]
    pub fn description(&self) -> Cow<'static, str> {
        wmo_description(self.weather_code)
    }

    /// Get a formatted summary of current conditions
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} {} {:.1}°C (feels like {:.1}°C), humidity {}, wind {:.1} km/h",
            self.condition.emoji(),
            self.description(),
            self.temperature,
            self.apparent_temperature,
            self.humidity,
            self.wind_speed
        )
    }
}
