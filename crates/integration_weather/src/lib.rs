//! Open-Meteo weather integration
//!
//! Client for the Open-Meteo Weather API (<https://open-meteo.com>).
//! Fetches current conditions and a daily forecast in a single request,
//! without requiring an API key.

pub mod client;
mod models;

pub use client::{MAX_FORECAST_DAYS, OpenMeteoClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{CurrentWeather, DailyForecast, Forecast};
