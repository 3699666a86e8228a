//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod report_store_port;
mod weather_port;

#[cfg(test)]
pub use report_store_port::MockReportStorePort;
pub use report_store_port::{FileStatus, ReportStorePort, StoreOutcome, StoredFile};
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
