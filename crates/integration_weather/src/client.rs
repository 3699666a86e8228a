//! Open-Meteo weather client
//!
//! HTTP client for the Open-Meteo forecast API.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use domain::WeatherCondition;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    ApiResponse, CURRENT_FIELDS, CurrentData, CurrentWeather, DAILY_FIELDS, DailyData,
    DailyForecast, Forecast,
};

/// Longest horizon the forecast endpoint serves
pub const MAX_FORECAST_DAYS: u8 = 16;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Number of forecast days (1-16, default: 7)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

const fn default_forecast_days() -> u8 {
    7
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            forecast_days: default_forecast_days(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions and a daily forecast for a location
    ///
    /// Times in the result are local to `timezone`.
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
        days: u8,
    ) -> Result<Forecast, WeatherError>;
}

/// Open-Meteo HTTP client implementation
#[derive(Debug)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenMeteoClient {
    /// Create a new Open-Meteo client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub const fn config(&self) -> &WeatherConfig {
        &self.config
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), WeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(WeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    /// Query parameters for a combined current + daily request
    fn forecast_query(
        latitude: f64,
        longitude: f64,
        timezone: &str,
        days: u8,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("current", CURRENT_FIELDS.to_string()),
            ("daily", DAILY_FIELDS.to_string()),
            ("timezone", timezone.to_string()),
            (
                "forecast_days",
                days.clamp(1, MAX_FORECAST_DAYS).to_string(),
            ),
        ]
    }

    /// Parse current weather from API response
    fn parse_current_weather(data: &CurrentData) -> Result<CurrentWeather, WeatherError> {
        let time = Self::parse_datetime(&data.time)?;

        Ok(CurrentWeather {
            time,
            temperature: data.temperature_2m,
            apparent_temperature: data.apparent_temperature,
            humidity: data.relative_humidity_2m,
            condition: WeatherCondition::from_wmo_code(data.weather_code),
            weather_code: data.weather_code,
            wind_speed: data.wind_speed_10m,
            wind_direction: data.wind_direction_10m,
            precipitation: data.precipitation,
        })
    }

    /// Parse daily forecasts from API response
    fn parse_daily_forecasts(daily_data: &DailyData) -> Result<Vec<DailyForecast>, WeatherError> {
        let mismatched = daily_data.mismatched_arrays();
        if !mismatched.is_empty() {
            return Err(WeatherError::ParseError(format!(
                "Daily arrays differ in length from time ({}): {}",
                daily_data.time.len(),
                mismatched.join(", ")
            )));
        }

        let mut forecasts = Vec::with_capacity(daily_data.time.len());

        for (i, raw_date) in daily_data.time.iter().enumerate() {
            let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
                .map_err(|e| WeatherError::ParseError(format!("Invalid date {raw_date}: {e}")))?;

            let precipitation_probability = daily_data
                .precipitation_probability_max
                .as_ref()
                .and_then(|p| p.get(i).copied().flatten());

            let weather_code = daily_data.weather_code[i];
            forecasts.push(DailyForecast {
                date,
                condition: WeatherCondition::from_wmo_code(weather_code),
                weather_code,
                temperature_max: daily_data.temperature_2m_max[i],
                temperature_min: daily_data.temperature_2m_min[i],
                precipitation_sum: daily_data.precipitation_sum[i],
                precipitation_probability,
                wind_speed_max: daily_data.wind_speed_10m_max[i],
                wind_direction_dominant: daily_data.wind_direction_10m_dominant[i],
            });
        }

        Ok(forecasts)
    }

    /// Parse a provider timestamp into a local `NaiveDateTime`
    fn parse_datetime(s: &str) -> Result<NaiveDateTime, WeatherError> {
        // Open-Meteo default format (2026-02-05T14:00)
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
            return Ok(dt);
        }

        // Try with seconds
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
            return Ok(dt);
        }

        // RFC 3339 carries an offset; keep the wall-clock part
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.naive_local());
        }

        Err(WeatherError::ParseError(format!(
            "Invalid datetime format: {s}"
        )))
    }
}

#[async_trait]
impl WeatherClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, days = %days))]
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
        days: u8,
    ) -> Result<Forecast, WeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let url = self.forecast_url();
        debug!(url = %url, "Fetching weather forecast");

        let response = self
            .client
            .get(&url)
            .query(&Self::forecast_query(latitude, longitude, timezone, days))
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    WeatherError::ConnectionFailed(e.to_string())
                } else {
                    WeatherError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let current_data = api_response.current.ok_or_else(|| {
            WeatherError::ParseError("No current weather data in response".to_string())
        })?;

        let daily_data = api_response.daily.ok_or_else(|| {
            WeatherError::ParseError("No daily forecast data in response".to_string())
        })?;

        let current = Self::parse_current_weather(&current_data)?;
        let daily = Self::parse_daily_forecasts(&daily_data)?;
        debug!(days = daily.len(), "Parsed weather forecast");

        Ok(Forecast {
            current,
            daily,
            latitude: api_response.latitude,
            longitude: api_response.longitude,
            timezone: api_response.timezone,
        })
    }
}
