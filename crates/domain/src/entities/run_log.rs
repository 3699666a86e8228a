//! Pipeline run log entries

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one pipeline invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunLogEntry {
    /// Wall-clock time the run finished
    pub timestamp: DateTime<Utc>,
    pub success: bool,
    pub duration_ms: u64,
    /// Whether any output file changed; absent for failed runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunLogEntry {
    /// Entry for a completed run
    #[must_use]
    pub const fn success(
        timestamp: DateTime<Utc>,
        duration_ms: u64,
        changed: bool,
        observed_at: NaiveDateTime,
        alert_count: usize,
    ) -> Self {
        Self {
            timestamp,
            success: true,
            duration_ms,
            changed: Some(changed),
            observed_at: Some(observed_at),
            alert_count: Some(alert_count),
            error: None,
        }
    }

    /// Entry for a run that aborted
    #[must_use]
    pub fn failure(timestamp: DateTime<Utc>, duration_ms: u64, error: impl Into<String>) -> Self {
        Self {
            timestamp,
            success: false,
            duration_ms,
            changed: None,
            observed_at: None,
            alert_count: None,
            error: Some(error.into()),
        }
    }
}
