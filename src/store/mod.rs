//! Report store module.
//!
//! This module provides the append-only history of submitted reports, the
//! aggregate views over it (summary statistics and per-report comparison
//! rows), and the CSV interchange format.

mod error;
mod format;
mod report_store;
mod types;

pub use error::StoreError;
pub use format::{REPORT_COLUMNS, read_reports, write_reports};
pub use report_store::ReportStore;
pub use types::{ComparisonRow, Report, ReportFields, Submitted, SummaryStats};
