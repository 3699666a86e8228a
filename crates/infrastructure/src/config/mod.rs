//! Application configuration
//!
//! Split into focused sub-modules:
//! - `location`: the place being reported on
//! - `output`: output directory and run log retention
//!
//! Sources, lowest precedence first: built-in defaults, `config.toml` in the
//! working directory (or an explicit path), then `WEATHER_PIPELINE_*`
//! environment variables using `__` between section and key, e.g.
//! `WEATHER_PIPELINE_OUTPUT__DIRECTORY=out`.

mod location;
mod output;

use std::path::Path;

use application::AlertThresholds;
use domain::{DomainError, Location};
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetryConfig;

pub use location::LocationConfig;
pub use output::OutputConfig;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "WEATHER_PIPELINE";

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Location settings
    #[serde(default)]
    pub location: LocationConfig,

    /// Open-Meteo client settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Output files
    #[serde(default)]
    pub output: OutputConfig,

    /// Alert thresholds
    #[serde(default)]
    pub thresholds: AlertThresholds,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit file, or the default optional
    /// `config.toml` when `path` is `None`
    ///
    /// An explicit path must exist.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with(path, Self::environment())
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(file)
            // Override with environment variables
            .add_source(environment);

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// The configured location as a validated domain value
    ///
    /// # Errors
    ///
    /// Returns an error for out-of-range coordinates or an unknown timezone.
    pub fn location(&self) -> Result<Location, DomainError> {
        self.location.to_location()
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
