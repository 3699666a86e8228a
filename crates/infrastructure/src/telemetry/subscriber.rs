//! Tracing subscriber initialization
//!
//! Logs go to stderr, human-readable by default or one JSON object per
//! line when `json` is set. `RUST_LOG` overrides the configured filter,
//! unless the filter was set explicitly on the command line.

use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level filter (e.g., "info", "debug", "infrastructure=debug,reqwest=warn")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,

    /// Use `log_filter` even when `RUST_LOG` is set
    #[serde(skip)]
    pub override_env: bool,
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json: false,
            override_env: false,
        }
    }
}

impl TelemetryConfig {
    /// Use `filter` regardless of `RUST_LOG`, e.g. for a `-v` flag
    #[must_use]
    pub fn with_forced_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self.override_env = true;
        self
    }

    /// Filter directive to use given the value of `RUST_LOG`
    fn filter_directive<'a>(&'a self, env: Option<&'a str>) -> &'a str {
        match env {
            Some(directive) if !self.override_env && !directive.trim().is_empty() => directive,
            _ => &self.log_filter,
        }
    }
}

/// Initialize the global subscriber with the given configuration
///
/// # Errors
///
/// Returns `TelemetryError::Init` if a global subscriber is already set.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = config.filter_directive(env.as_deref());
    let env_filter =
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| TelemetryError::Init(e.to_string()))?;

    info!(filter = %directive, json = config.json, "Telemetry initialized");
    Ok(())
}

/// Error type for telemetry initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}
