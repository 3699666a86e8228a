//! File-backed report store
//!
//! Writes the report as JSON, CSV and a summary digest into one output
//! directory, and merges its observation into a rolling history kept as
//! JSON and CSV. Each file is rendered in memory first and only written when
//! its BLAKE3 hash differs from what is already on disk, so repeated runs
//! over identical provider data leave these files untouched.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::{FileStatus, ReportStorePort, StoreOutcome, StoredFile};
use async_trait::async_trait;
use domain::{
    DEFAULT_HISTORY_RETENTION, HistoryEntry, RunLogEntry, SummaryStats, WeatherReport,
    merge_history,
};
use serde::Serialize;
use tokio::fs;
use tracing::{debug, info, instrument, warn};

use super::csv_export::{render_csv, render_history_csv};
use super::error::StorageError;

/// Full nested report
pub const REPORT_FILE: &str = "weather_data.json";
/// Flat CSV export
pub const CSV_FILE: &str = "weather_data.csv";
/// Compact digest
pub const SUMMARY_FILE: &str = "summary_stats.json";
/// Rolling observation history
pub const HISTORY_FILE: &str = "weather_history.json";
/// Observation history flattened to CSV
pub const HISTORY_CSV_FILE: &str = "weather_history.csv";
/// Run history
pub const RUN_LOG_FILE: &str = "pipeline_log.json";

/// Number of run log entries kept by default
pub const DEFAULT_LOG_RETENTION: usize = 100;

/// Report store writing into a local directory
#[derive(Debug, Clone)]
pub struct FileReportStore {
    dir: PathBuf,
    log_retention: usize,
    history_retention: usize,
}

impl FileReportStore {
    /// Create a store rooted at `dir`; the directory is created on first write
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            log_retention: DEFAULT_LOG_RETENTION,
            history_retention: DEFAULT_HISTORY_RETENTION,
        }
    }

    /// Keep at most `retention` run log entries (minimum 1)
    #[must_use]
    pub fn with_log_retention(mut self, retention: usize) -> Self {
        self.log_retention = retention.max(1);
        self
    }

    /// Keep at most `retention` observations in the history (minimum 1)
    #[must_use]
    pub fn with_history_retention(mut self, retention: usize) -> Self {
        self.history_retention = retention.max(1);
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    async fn ensure_dir(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::io(&self.dir, e))
    }

    /// Write `bytes` to `name` unless the file already holds the same content
    async fn write_if_changed(&self, name: &str, bytes: &[u8]) -> Result<FileStatus, StorageError> {
        let path = self.path_of(name);

        let status = match fs::read(&path).await {
            Ok(existing) if blake3::hash(&existing) == blake3::hash(bytes) => {
                debug!(file = name, "Content unchanged, skipping write");
                return Ok(FileStatus::Unchanged);
            },
            Ok(_) => FileStatus::Updated,
            Err(e) if e.kind() == ErrorKind::NotFound => FileStatus::Created,
            Err(e) => return Err(StorageError::io(&path, e)),
        };

        self.write_atomic(name, bytes).await?;
        debug!(file = name, status = %status, bytes = bytes.len(), "Wrote output file");
        Ok(status)
    }

    /// Write through a sibling temp file and rename over the target
    async fn write_atomic(&self, name: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let path = self.path_of(name);
        let tmp = self.path_of(&format!(".{name}.tmp"));

        fs::write(&tmp, bytes)
            .await
            .map_err(|e| StorageError::io(&tmp, e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| StorageError::io(&path, e))
    }

    async fn read_optional(&self, name: &str) -> Result<Option<Vec<u8>>, StorageError> {
        let path = self.path_of(name);
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io(&path, e)),
        }
    }

    async fn read_run_log(&self) -> Result<Vec<RunLogEntry>, StorageError> {
        let Some(bytes) = self.read_optional(RUN_LOG_FILE).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_slice(&bytes) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(error = %e, file = RUN_LOG_FILE, "Run log is unreadable, starting a new one");
                Ok(Vec::new())
            },
        }
    }

    async fn read_history(&self) -> Result<Vec<HistoryEntry>, StorageError> {
        match self.read_optional(HISTORY_FILE).await? {
            Some(bytes) => Ok(serde_json::from_slice(&bytes)?),
            None => Ok(Vec::new()),
        }
    }

    async fn store(&self, report: &WeatherReport) -> Result<StoreOutcome, StorageError> {
        self.ensure_dir().await?;

        let mut history = match self.read_history().await {
            Ok(history) => history,
            Err(StorageError::Json(e)) => {
                warn!(error = %e, file = HISTORY_FILE, "History is unreadable, starting a new one");
                Vec::new()
            },
            Err(e) => return Err(e),
        };
        merge_history(&mut history, HistoryEntry::from(report), self.history_retention);

        let rendered = [
            (REPORT_FILE, to_pretty_json(report)?),
            (CSV_FILE, render_csv(report)?),
            (SUMMARY_FILE, to_pretty_json(&SummaryStats::from(report))?),
            (HISTORY_FILE, to_pretty_json(&history)?),
            (HISTORY_CSV_FILE, render_history_csv(&history)?),
        ];

        let mut files = Vec::with_capacity(rendered.len());
        for (name, bytes) in &rendered {
            let status = self.write_if_changed(name, bytes).await?;
            files.push(StoredFile::new(*name, status));
        }

        Ok(StoreOutcome::new(files))
    }

    async fn append(&self, entry: RunLogEntry) -> Result<(), StorageError> {
        self.ensure_dir().await?;

        let mut entries = self.read_run_log().await?;
        entries.push(entry);
        if entries.len() > self.log_retention {
            let excess = entries.len() - self.log_retention;
            entries.drain(..excess);
        }

        self.write_atomic(RUN_LOG_FILE, &to_pretty_json(&entries)?)
            .await
    }
}

/// Pretty JSON with a trailing newline
fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, StorageError> {
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    Ok(bytes)
}

#[async_trait]
impl ReportStorePort for FileReportStore {
    #[instrument(skip(self, report), fields(dir = %self.dir.display()))]
    async fn store_report(&self, report: &WeatherReport) -> Result<StoreOutcome, ApplicationError> {
        let outcome = self.store(report).await?;
        info!(changed = outcome.changed(), "Stored weather report");
        Ok(outcome)
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    async fn load_report(&self) -> Result<Option<WeatherReport>, ApplicationError> {
        let Some(bytes) = self.read_optional(REPORT_FILE).await? else {
            debug!("No stored report");
            return Ok(None);
        };

        let report = serde_json::from_slice(&bytes).map_err(StorageError::from)?;
        Ok(Some(report))
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    async fn load_history(&self) -> Result<Vec<HistoryEntry>, ApplicationError> {
        Ok(self.read_history().await?)
    }

    #[instrument(skip(self, entry), fields(success = entry.success))]
    async fn append_run_log(&self, entry: RunLogEntry) -> Result<(), ApplicationError> {
        self.append(entry).await?;
        Ok(())
    }
}
