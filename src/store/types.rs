//! Data types for the report store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::emissions::EmissionBreakdown;
use crate::suggest::SuggestionSet;

/// One recorded submission result.
///
/// Field names match the columns of the CSV export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    pub company_name: String,
    pub date: NaiveDate,
    pub energy_usage: f64,
    pub waste: f64,
    pub business_travel: f64,
    pub total: f64,
}

impl Report {
    /// Create a report with a fresh random id.
    pub fn new(fields: ReportFields) -> Self {
        let ReportFields {
            company_name,
            date,
            breakdown,
        } = fields;

        Self {
            id: Uuid::new_v4(),
            company_name,
            date,
            energy_usage: breakdown.energy_kgco2(),
            waste: breakdown.waste_kgco2(),
            business_travel: breakdown.travel_kgco2(),
            total: breakdown.total_kgco2(),
        }
    }

    /// The report's figures as a breakdown.
    pub fn breakdown(&self) -> EmissionBreakdown {
        EmissionBreakdown::new(self.energy_usage, self.waste, self.business_travel)
    }
}

/// Everything needed to record a report except its id.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportFields {
    pub company_name: String,
    pub date: NaiveDate,
    pub breakdown: EmissionBreakdown,
}

/// Totals across every stored report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    /// Number of distinct company names.
    pub company_count: usize,
    pub report_count: usize,
    /// Sum of every report's total, in kgCO2.
    pub total_emissions: f64,
}

/// Per-report stacked category values for the company comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub company_name: String,
    pub energy_usage: f64,
    pub waste: f64,
    pub business_travel: f64,
}

impl From<&Report> for ComparisonRow {
    fn from(report: &Report) -> Self {
        Self {
            company_name: report.company_name.clone(),
            energy_usage: report.energy_usage,
            waste: report.waste,
            business_travel: report.business_travel,
        }
    }
}

/// Result of a validated, calculated and recorded submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submitted {
    pub report: Report,
    pub breakdown: EmissionBreakdown,
    pub suggestions: SuggestionSet,
}
