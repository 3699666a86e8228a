//! Weather service port
//!
//! Defines the interface for extracting a weather snapshot.

use async_trait::async_trait;
use domain::{Location, WeatherSnapshot};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather data retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch current conditions and a daily forecast in one request
    ///
    /// # Arguments
    /// * `location` - Where to fetch weather for; its timezone governs local times
    /// * `forecast_days` - Forecast horizon in days (clamped by the provider)
    async fn fetch_snapshot(
        &self,
        location: &Location,
        forecast_days: u8,
    ) -> Result<WeatherSnapshot, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }
}
