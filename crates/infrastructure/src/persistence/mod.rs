//! Persistence layer - file-backed report storage

mod csv_export;
mod error;
mod file_report_store;

pub use csv_export::{render_csv, render_history_csv};
pub use error::StorageError;
pub use file_report_store::{
    CSV_FILE, DEFAULT_LOG_RETENTION, FileReportStore, HISTORY_CSV_FILE, HISTORY_FILE, REPORT_FILE,
    RUN_LOG_FILE, SUMMARY_FILE,
};
