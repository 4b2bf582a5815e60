//! Append-only in-memory report store.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::emissions::calculate;
use crate::logging::{debug, info};
use crate::submission::{Submission, ValidationError};
use crate::suggest::suggest;

use super::error::StoreError;
use super::types::{ComparisonRow, Report, ReportFields, Submitted, SummaryStats};

/// Ordered log of every recorded report.
///
/// Reports are never mutated or removed once appended. All access goes
/// through one mutex, so a store shared behind an `Arc` keeps insertion
/// order and loses no appends.
#[derive(Debug, Default)]
pub struct ReportStore {
    reports: Mutex<Vec<Report>>,
}

impl ReportStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // Every mutation is a single push, so a poisoned vector is still whole.
    fn lock(&self) -> MutexGuard<'_, Vec<Report>> {
        self.reports.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a report to the end of the log.
    pub fn append(&self, report: Report) {
        debug!(id = %report.id, company = %report.company_name, "appending report");
        self.lock().push(report);
    }

    /// Append several reports, keeping their order and adjacency.
    pub fn extend(&self, reports: impl IntoIterator<Item = Report>) {
        let reports: Vec<Report> = reports.into_iter().collect();
        debug!(count = reports.len(), "appending reports");
        self.lock().extend(reports);
    }

    /// Append parsed rows unless one reuses an id already in the store.
    ///
    /// Rows carry their source line for error reporting. The check and the
    /// append happen under one lock, so nothing is appended on rejection.
    pub(super) fn extend_unique(&self, rows: Vec<(u64, Report)>) -> Result<usize, StoreError> {
        let mut stored = self.lock();
        let existing: HashSet<Uuid> = stored.iter().map(|r| r.id).collect();

        if let Some((line, report)) = rows.iter().find(|(_, r)| existing.contains(&r.id)) {
            return Err(StoreError::InvalidRecord {
                line: *line,
                reason: format!("duplicate id {} is already stored", report.id),
            });
        }

        let count = rows.len();
        stored.extend(rows.into_iter().map(|(_, report)| report));
        debug!(count, "appending reports");
        Ok(count)
    }

    /// Record a new report with a generated id and return the stored copy.
    pub fn record(&self, fields: ReportFields) -> Report {
        let report = Report::new(fields);
        info!(
            id = %report.id,
            company = %report.company_name,
            total = report.total,
            "recorded report"
        );
        self.append(report.clone());
        report
    }

    /// Validate, calculate, record and derive suggestions in one step.
    ///
    /// Nothing is recorded when validation fails.
    pub fn submit(&self, submission: &Submission) -> Result<Submitted, ValidationError> {
        let breakdown = calculate(submission)?;
        let report = self.record(ReportFields {
            company_name: submission.company_name.clone(),
            date: submission.report_date,
            breakdown,
        });
        let suggestions = suggest(&breakdown, submission);

        Ok(Submitted {
            report,
            breakdown,
            suggestions,
        })
    }

    /// Number of stored reports.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Snapshot of every report in submission order.
    pub fn reports(&self) -> Vec<Report> {
        self.lock().clone()
    }

    /// Look up a report by id.
    pub fn get(&self, id: Uuid) -> Option<Report> {
        self.lock().iter().find(|r| r.id == id).cloned()
    }

    /// Distinct company names in order of first submission.
    pub fn companies(&self) -> Vec<String> {
        let reports = self.lock();
        let mut seen = HashSet::new();
        reports
            .iter()
            .filter(|r| seen.insert(r.company_name.as_str()))
            .map(|r| r.company_name.clone())
            .collect()
    }

    /// One company's reports in submission order.
    pub fn history(&self, company_name: &str) -> Vec<Report> {
        self.lock()
            .iter()
            .filter(|r| r.company_name == company_name)
            .cloned()
            .collect()
    }

    /// Company count, report count and summed emissions.
    pub fn summary(&self) -> SummaryStats {
        let reports = self.lock();
        let companies: HashSet<&str> = reports.iter().map(|r| r.company_name.as_str()).collect();

        SummaryStats {
            company_count: companies.len(),
            report_count: reports.len(),
            total_emissions: reports.iter().map(|r| r.total).sum(),
        }
    }

    /// One comparison row per report, in submission order.
    ///
    /// Reports of the same company are not merged.
    pub fn comparison(&self) -> Vec<ComparisonRow> {
        self.lock().iter().map(ComparisonRow::from).collect()
    }
}
