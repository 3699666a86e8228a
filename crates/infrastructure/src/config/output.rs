//! Output directory configuration

use std::path::PathBuf;

use domain::DEFAULT_HISTORY_RETENTION;
use serde::{Deserialize, Serialize};

use crate::persistence::{DEFAULT_LOG_RETENTION, FileReportStore};

/// Where report files are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output directory, relative to the working directory (default: data)
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Run log entries to keep (default: 100)
    #[serde(default = "default_log_retention")]
    pub log_retention: usize,

    /// Observations kept in the history files (default: 30)
    #[serde(default = "default_history_retention")]
    pub history_retention: usize,
}

fn default_directory() -> PathBuf {
    PathBuf::from("data")
}

const fn default_log_retention() -> usize {
    DEFAULT_LOG_RETENTION
}

const fn default_history_retention() -> usize {
    DEFAULT_HISTORY_RETENTION
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            log_retention: default_log_retention(),
            history_retention: default_history_retention(),
        }
    }
}

impl OutputConfig {
    /// Build the report store for this output directory
    #[must_use]
    pub fn report_store(&self) -> FileReportStore {
        FileReportStore::new(&self.directory)
            .with_log_retention(self.log_retention)
            .with_history_retention(self.history_retention)
    }
}
