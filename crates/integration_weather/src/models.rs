//! Weather data models
//!
//! Parsed and raw types for the Open-Meteo `/forecast` endpoint.

use chrono::{NaiveDate, NaiveDateTime};
use domain::WeatherCondition;
use serde::{Deserialize, Serialize};

/// Variables requested in the `current` block
pub(crate) const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
     precipitation,weather_code,wind_speed_10m,wind_direction_10m";

/// Variables requested in the `daily` block
pub(crate) const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min,\
     precipitation_sum,precipitation_probability_max,wind_speed_10m_max,\
     wind_direction_10m_dominant";

/// Current weather conditions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Observation time, local to the requested timezone
    pub time: NaiveDateTime,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Apparent (feels like) temperature in Celsius
    pub apparent_temperature: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Weather condition
    pub condition: WeatherCondition,
    /// WMO weather code
    pub weather_code: u8,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// Wind direction in degrees (0-360)
    pub wind_direction: u16,
    /// Precipitation in mm
    pub precipitation: f64,
}

/// Daily weather forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Forecast date
    pub date: NaiveDate,
    /// Dominant weather condition
    pub condition: WeatherCondition,
    /// WMO weather code
    pub weather_code: u8,
    /// Maximum temperature in Celsius
    pub temperature_max: f64,
    /// Minimum temperature in Celsius
    pub temperature_min: f64,
    /// Total precipitation in mm
    pub precipitation_sum: f64,
    /// Precipitation probability percentage (0-100)
    pub precipitation_probability: Option<u8>,
    /// Maximum wind speed in km/h
    pub wind_speed_max: f64,
    /// Dominant wind direction in degrees
    pub wind_direction_dominant: u16,
}

/// Complete weather forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Current weather conditions
    pub current: CurrentWeather,
    /// Daily forecasts
    pub daily: Vec<DailyForecast>,
    /// Latitude of the grid cell the provider resolved
    pub latitude: f64,
    /// Longitude of the grid cell the provider resolved
    pub longitude: f64,
    /// Timezone of the location
    pub timezone: String,
}

/// Raw weather data from API (current)
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurrentData {
    pub time: String,
    pub temperature_2m: f64,
    pub relative_humidity_2m: u8,
    pub apparent_temperature: f64,
    pub precipitation: f64,
    pub weather_code: u8,
    pub wind_speed_10m: f64,
    pub wind_direction_10m: u16,
}

/// Raw daily data from API
///
/// Arrays are parallel: index `i` of every field describes `time[i]`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DailyData {
    pub time: Vec<String>,
    pub weather_code: Vec<u8>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub precipitation_sum: Vec<f64>,
    #[serde(default)]
    pub precipitation_probability_max: Option<Vec<Option<u8>>>,
    pub wind_speed_10m_max: Vec<f64>,
    pub wind_direction_10m_dominant: Vec<u16>,
}

impl DailyData {
    /// Names of arrays whose length differs from `time`
    pub fn mismatched_arrays(&self) -> Vec<&'static str> {
        let expected = self.time.len();
        let mut lengths = vec![
            ("weather_code", self.weather_code.len()),
            ("temperature_2m_max", self.temperature_2m_max.len()),
            ("temperature_2m_min", self.temperature_2m_min.len()),
            ("precipitation_sum", self.precipitation_sum.len()),
            ("wind_speed_10m_max", self.wind_speed_10m_max.len()),
            (
                "wind_direction_10m_dominant",
                self.wind_direction_10m_dominant.len(),
            ),
        ];
        if let Some(p) = &self.precipitation_probability_max {
            lengths.push(("precipitation_probability_max", p.len()));
        }

        lengths
            .into_iter()
            .filter(|(_, len)| *len != expected)
            .map(|(name, _)| name)
            .collect()
    }
}

/// Raw API response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiResponse {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub current: Option<CurrentData>,
    pub daily: Option<DailyData>,
}
