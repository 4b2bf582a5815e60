//! Error types for the report store module.

use thiserror::Error;

/// Errors that can occur while exporting or importing reports.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid report on line {line}: {reason}")]
    InvalidRecord { line: u64, reason: String },
}
