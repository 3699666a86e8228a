//! Report store port
//!
//! Defines how reports, the observation history and run logs are persisted.

use async_trait::async_trait;
use domain::{HistoryEntry, RunLogEntry, WeatherReport};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ApplicationError;

/// What happened to a single output file during a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// File did not exist before
    Created,
    /// File existed with different content
    Updated,
    /// Rendered content matched the existing file; nothing written
    Unchanged,
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Updated => write!(f, "updated"),
            Self::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Status of one named output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub name: String,
    pub status: FileStatus,
}

impl StoredFile {
    #[must_use]
    pub fn new(name: impl Into<String>, status: FileStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

/// Result of persisting a report
///
/// `changed()` is advisory: it tells the caller whether a commit is worth
/// making, it does not commit anything itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOutcome {
    pub files: Vec<StoredFile>,
}

impl StoreOutcome {
    #[must_use]
    pub const fn new(files: Vec<StoredFile>) -> Self {
        Self { files }
    }

    /// Whether any file was created or updated
    #[must_use]
    pub fn changed(&self) -> bool {
        self.files.iter().any(|f| f.status != FileStatus::Unchanged)
    }

    /// Status of the named file, if it was part of the store
    #[must_use]
    pub fn status_of(&self, name: &str) -> Option<FileStatus> {
        self.files.iter().find(|f| f.name == name).map(|f| f.status)
    }
}

/// Port for report persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ReportStorePort: Send + Sync {
    /// Render and write the report files, skipping files whose content is unchanged
    ///
    /// The report's observation is also merged into the rolling history.
    async fn store_report(&self, report: &WeatherReport) -> Result<StoreOutcome, ApplicationError>;

    /// Load the most recently stored report, if any
    async fn load_report(&self) -> Result<Option<WeatherReport>, ApplicationError>;

    /// Load the observation history, oldest first; empty when none is stored
    async fn load_history(&self) -> Result<Vec<HistoryEntry>, ApplicationError>;

    /// Append an entry to the run log, dropping the oldest entries beyond retention
    async fn append_run_log(&self, entry: RunLogEntry) -> Result<(), ApplicationError>;
}
