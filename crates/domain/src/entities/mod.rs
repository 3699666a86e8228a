//! Domain entities - Weather records, forecasts, and what is derived from them

mod analysis;
mod forecast_entry;
mod history;
mod location;
mod report;
mod run_log;
mod snapshot;
mod weather_record;

pub use analysis::{
    Analysis, ComfortLevel, CurrentAnalysis, ForecastAnalysis, HumidityLevel,
    PrecipitationOutlook, TemperatureRange, Trend, WindStrength,
};
pub use forecast_entry::ForecastEntry;
pub use history::{DEFAULT_HISTORY_RETENTION, HistoryEntry, merge_history};
pub use location::Location;
pub use report::{SummaryStats, WeatherReport};
pub use run_log::RunLogEntry;
pub use snapshot::WeatherSnapshot;
pub use weather_record::{WeatherRecord, celsius_to_fahrenheit, round1};
