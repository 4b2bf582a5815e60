//! CSV interchange format for stored reports.
//!
//! One flat row per report, columns in [`REPORT_COLUMNS`] order, dates as
//! ISO-8601. This is the layout of the historical-data download, so files
//! exported here import into anything that read the old ones.

use std::collections::HashSet;
use std::io;

use crate::logging::{info, warn};

use super::error::StoreError;
use super::report_store::ReportStore;
use super::types::Report;

/// Column order of the CSV export.
pub const REPORT_COLUMNS: [&str; 7] = [
    "id",
    "company_name",
    "date",
    "energy_usage",
    "waste",
    "business_travel",
    "total",
];

/// Relative tolerance when checking an imported total against its categories.
const TOTAL_TOLERANCE: f64 = 1e-6;

/// Write reports as CSV with a header row.
pub fn write_reports<'a, W: io::Write>(
    writer: W,
    reports: impl IntoIterator<Item = &'a Report>,
) -> Result<(), StoreError> {
    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    // Written explicitly so an empty export still carries the header.
    csv.write_record(REPORT_COLUMNS)?;

    for report in reports {
        csv.serialize(report)?;
    }
    csv.flush()?;
    Ok(())
}

/// Read every report from CSV, rejecting the whole input on the first bad row.
///
/// Ids must be unique within the input.
pub fn read_reports<R: io::Read>(reader: R) -> Result<Vec<Report>, StoreError> {
    Ok(read_rows(reader)?.into_iter().map(|(_, report)| report).collect())
}

/// Checked reports paired with their 1-based source line.
fn read_rows<R: io::Read>(reader: R) -> Result<Vec<(u64, Report)>, StoreError> {
    let mut csv = csv::Reader::from_reader(reader);
    let headers = csv.headers()?.clone();

    let mut seen = HashSet::new();
    let mut rows = Vec::new();
    for record in csv.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        let report: Report = record.deserialize(Some(&headers))?;
        check_report(&report)
            .and_then(|()| {
                if seen.insert(report.id) {
                    Ok(())
                } else {
                    Err(format!("duplicate id {} within the file", report.id))
                }
            })
            .map_err(|reason| {
                warn!(line, reason = %reason, "rejecting imported report");
                StoreError::InvalidRecord { line, reason }
            })?;
        rows.push((line, report));
    }

    Ok(rows)
}

fn check_report(report: &Report) -> Result<(), String> {
    if report.company_name.trim().is_empty() {
        return Err("company name is empty".to_string());
    }

    let values = [
        report.energy_usage,
        report.waste,
        report.business_travel,
        report.total,
    ];
    if !values.iter().all(|v| v.is_finite()) {
        return Err("emission values must be finite".to_string());
    }

    let expected = report.energy_usage + report.waste + report.business_travel;
    if (report.total - expected).abs() > TOTAL_TOLERANCE * expected.abs().max(1.0) {
        return Err(format!(
            "total {} does not match category sum {}",
            report.total, expected
        ));
    }

    Ok(())
}

impl ReportStore {
    /// Export every report as CSV.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), StoreError> {
        write_reports(writer, &self.reports())
    }

    /// Export every report as a CSV string.
    pub fn export_csv(&self) -> Result<String, StoreError> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Append every report of a CSV export, in file order.
    ///
    /// The input is fully parsed before anything is appended, so a bad row
    /// leaves the store unchanged. A row whose id repeats within the file or
    /// is already stored is rejected. Returns the number of reports imported.
    pub fn import_csv<R: io::Read>(&self, reader: R) -> Result<usize, StoreError> {
        let count = self.extend_unique(read_rows(reader)?)?;
        info!(count, "imported reports");
        Ok(count)
    }
}
