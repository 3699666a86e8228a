//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{
    DomainError, ForecastEntry, Humidity, Location, WeatherRecord, WeatherSnapshot,
};
use integration_weather::{
    CurrentWeather, DailyForecast, OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather services using Open-Meteo API
pub struct WeatherAdapter {
    client: OpenMeteoClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("base_url", &self.client.config().base_url)
            .finish_non_exhaustive()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client =
            OpenMeteoClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e)
            | WeatherError::RequestFailed(e)
            | WeatherError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            WeatherError::ParseError(e) => ApplicationError::Parse(e),
            WeatherError::InvalidCoordinates => DomainError::InvalidCoordinates(
                "latitude must be -90 to 90, longitude must be -180 to 180".into(),
            )
            .into(),
            WeatherError::RateLimitExceeded => ApplicationError::RateLimited,
        }
    }

    /// Convert the provider's current conditions into a domain record
    fn map_current(current: &CurrentWeather) -> Result<WeatherRecord, DomainError> {
        Ok(WeatherRecord {
            observed_at: current.time,
            temperature: current.temperature,
            apparent_temperature: current.apparent_temperature,
            humidity: Humidity::new(current.humidity)?,
            wind_speed: current.wind_speed,
            wind_direction: current.wind_direction,
            precipitation: current.precipitation,
            weather_code: current.weather_code,
            condition: current.condition,
        })
    }

    const fn map_daily(daily: &DailyForecast) -> ForecastEntry {
        ForecastEntry {
            date: daily.date,
            temperature_max: daily.temperature_max,
            temperature_min: daily.temperature_min,
            precipitation_sum: daily.precipitation_sum,
            precipitation_probability: daily.precipitation_probability,
            wind_speed_max: daily.wind_speed_max,
            wind_direction_dominant: daily.wind_direction_dominant,
            weather_code: daily.weather_code,
            condition: daily.condition,
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self, location), fields(location = %location, days = forecast_days))]
    async fn fetch_snapshot(
        &self,
        location: &Location,
        forecast_days: u8,
    ) -> Result<WeatherSnapshot, ApplicationError> {
        let coordinates = location.coordinates();
        let result = self
            .client
            .get_forecast(
                coordinates.latitude(),
                coordinates.longitude(),
                location.timezone().as_str(),
                forecast_days,
            )
            .await
            .map_err(Self::map_error);

        let forecast = match result {
            Ok(forecast) => {
                debug!(
                    temperature = forecast.current.temperature,
                    condition = %forecast.current.condition,
                    days = forecast.daily.len(),
                    "Retrieved weather forecast"
                );
                forecast
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather forecast");
                return Err(e);
            },
        };

        let current = Self::map_current(&forecast.current)?;
        let entries = forecast.daily.iter().map(Self::map_daily).collect();

        Ok(WeatherSnapshot::new(location.clone(), current, entries)?)
    }
}
