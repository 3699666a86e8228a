//! Telemetry and structured logging infrastructure
//!
//! Installs the global `tracing` subscriber for the binary.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_telemetry};
