//! Extracted weather snapshot

use serde::{Deserialize, Serialize};

use super::{ForecastEntry, Location, WeatherRecord};
use crate::DomainError;

/// Everything one extraction produced: current conditions plus the daily forecast
///
/// The forecast is ordered by strictly increasing date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    location: Location,
    current: WeatherRecord,
    forecast: Vec<ForecastEntry>,
}

impl WeatherSnapshot {
    /// Create a snapshot, checking forecast ordering
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnorderedForecast` if two entries are out of
    /// order or share a date.
    pub fn new(
        location: Location,
        current: WeatherRecord,
        forecast: Vec<ForecastEntry>,
    ) -> Result<Self, DomainError> {
        if let Some(pair) = forecast.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(DomainError::UnorderedForecast(format!(
                "{} is followed by {}",
                pair[0].date, pair[1].date
            )));
        }

        Ok(Self {
            location,
            current,
            forecast,
        })
    }

    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    #[must_use]
    pub const fn current(&self) -> &WeatherRecord {
        &self.current
    }

    #[must_use]
    pub fn forecast(&self) -> &[ForecastEntry] {
        &self.forecast
    }
}
