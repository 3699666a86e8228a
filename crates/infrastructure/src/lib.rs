//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the Open-Meteo
//! weather adapter and the file-backed report store. Also owns
//! configuration loading, logging setup and CI schedule editing.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod schedule;
pub mod telemetry;
#[cfg(test)]
pub mod testing;

pub use adapters::*;
pub use config::{AppConfig, LocationConfig, OutputConfig};
pub use persistence::{FileReportStore, StorageError};
pub use schedule::{ScheduleChange, ScheduleError, ScheduleMode, WorkflowSchedule};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
