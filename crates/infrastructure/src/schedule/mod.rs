//! CI schedule switching
//!
//! Toggles the GitHub Actions workflow that runs the pipeline between a
//! ten-minute testing cadence and the daily production run by rewriting
//! its `- cron:` line and the comment above it.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

/// Workflow file edited when no path is given
pub const DEFAULT_WORKFLOW_PATH: &str = ".github/workflows/data_pipeline.yml";

const DAILY_COMMENT: &[&str] = &["# Schedule to run daily at 12:35 AM UTC (7:35 AM Toronto time)"];
const TESTING_COMMENT: &[&str] = &[
    "# TESTING: Run every 10 minutes",
    "# For daily: '35 0 * * *' (12:35 AM UTC / 7:35 AM Toronto time)",
];

/// One of the two schedules the workflow can run on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleMode {
    /// Every 10 minutes
    Testing,
    /// Daily at 00:35 UTC
    Daily,
}

impl ScheduleMode {
    /// Cron expression for this mode
    #[must_use]
    pub const fn cron(self) -> &'static str {
        match self {
            Self::Testing => "*/10 * * * *",
            Self::Daily => "35 0 * * *",
        }
    }

    /// Human description of the cadence
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Testing => "every 10 minutes",
            Self::Daily => "daily at 12:35 AM UTC (7:35 AM Toronto time)",
        }
    }

    const fn comment(self) -> &'static [&'static str] {
        match self {
            Self::Testing => TESTING_COMMENT,
            Self::Daily => DAILY_COMMENT,
        }
    }

    fn quoted(self) -> String {
        format!("'{}'", self.cron())
    }
}

impl fmt::Display for ScheduleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Testing => write!(f, "testing"),
            Self::Daily => write!(f, "daily"),
        }
    }
}

/// Result of a `set` request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleChange {
    /// The workflow was rewritten
    Updated {
        from: ScheduleMode,
        to: ScheduleMode,
    },
    /// The workflow already used the requested mode; nothing was written
    AlreadySet(ScheduleMode),
}

/// Schedule editing errors
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Workflow file could not be read or written
    #[error("Workflow file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither known cron expression is present
    #[error("No known schedule pattern found in {}", .path.display())]
    PatternNotFound { path: PathBuf },
}

/// Detect which schedule the workflow content uses
///
/// The testing pattern is checked first.
#[must_use]
pub fn detect(content: &str) -> Option<ScheduleMode> {
    [ScheduleMode::Testing, ScheduleMode::Daily]
        .into_iter()
        .find(|mode| content.contains(&mode.quoted()))
}

/// Rewrite workflow content from one mode to another
///
/// Indentation and line endings of the touched lines are preserved. The
/// comment is swapped only where the known comment text is found.
#[must_use]
pub fn rewrite(content: &str, from: ScheduleMode, to: ScheduleMode) -> String {
    let from_quoted = from.quoted();
    let to_quoted = to.quoted();
    let mut out = String::with_capacity(content.len() + 64);

    for line in content.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];
        let body = trimmed.trim_end();
        let eol = &trimmed[body.len()..];

        if body.starts_with("- cron:") && body.contains(&from_quoted) {
            out.push_str(indent);
            out.push_str(&body.replacen(&from_quoted, &to_quoted, 1));
            out.push_str(eol);
        } else if from.comment().first() == Some(&body) {
            for comment in to.comment() {
                out.push_str(indent);
                out.push_str(comment);
                out.push_str(if eol.is_empty() { "\n" } else { eol });
            }
        } else if from.comment().iter().skip(1).any(|c| *c == body) {
            // continuation of the replaced comment
        } else {
            out.push_str(line);
        }
    }

    out
}

/// A workflow file on disk
#[derive(Debug, Clone)]
pub struct WorkflowSchedule {
    path: PathBuf,
}

impl Default for WorkflowSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_WORKFLOW_PATH)
    }
}

impl WorkflowSchedule {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String, ScheduleError> {
        std::fs::read_to_string(&self.path).map_err(|source| ScheduleError::Io {
            path: self.path.clone(),
            source,
        })
    }

    /// Current mode, or `None` if neither cron expression is present
    pub fn status(&self) -> Result<Option<ScheduleMode>, ScheduleError> {
        let mode = detect(&self.read()?);
        debug!(path = %self.path.display(), mode = ?mode, "Detected schedule");
        Ok(mode)
    }

    /// Switch the workflow to `mode`
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::Io` if the file is missing or unwritable, and
    /// `ScheduleError::PatternNotFound` if it contains no known schedule.
    pub fn set(&self, mode: ScheduleMode) -> Result<ScheduleChange, ScheduleError> {
        let content = self.read()?;
        let current = detect(&content).ok_or_else(|| ScheduleError::PatternNotFound {
            path: self.path.clone(),
        })?;

        if current == mode {
            return Ok(ScheduleChange::AlreadySet(mode));
        }

        let updated = rewrite(&content, current, mode);
        std::fs::write(&self.path, updated).map_err(|source| ScheduleError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), from = %current, to = %mode, "Schedule updated");
        Ok(ScheduleChange::Updated {
            from: current,
            to: mode,
        })
    }
}
