//! Stateless calculation handlers. Nothing here touches the report store.

use axum::{Json, response::Response};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::emissions::{CategoryShare, EmissionBreakdown, calculate as calculate_breakdown};
use crate::submission::Submission;
use crate::suggest::{SuggestionSet, suggest};

use super::super::{
    content::{AcceptFormat, ApiJson, negotiate},
    error::ApiError,
};

/// Breakdown, table rows and suggestions for one submission.
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    pub breakdown: EmissionBreakdown,
    pub rows: [CategoryShare; 3],
    pub suggestions: SuggestionSet,
}

/// Calculate emissions and suggestions without recording a report.
#[instrument(skip_all, fields(company = %submission.company_name))]
pub async fn calculate(
    ApiJson(submission): ApiJson<Submission>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let breakdown = calculate_breakdown(&submission)?;
    let suggestions = suggest(&breakdown, &submission);

    debug!(total = breakdown.total_kgco2(), "calculated breakdown");

    Ok(Json(CalculationResponse {
        breakdown,
        rows: breakdown.rows(),
        suggestions,
    }))
}

/// Suggestions only, as JSON or as the CSV download.
#[instrument(skip_all, fields(company = %submission.company_name))]
pub async fn suggestions(
    AcceptFormat(format): AcceptFormat,
    ApiJson(submission): ApiJson<Submission>,
) -> Result<Response, ApiError> {
    let breakdown = calculate_breakdown(&submission)?;
    let set = suggest(&breakdown, &submission);

    debug!(?format, "generated suggestions");

    negotiate(format, "suggestions.csv", &set, || -> Result<String, ApiError> {
        Ok(set.to_csv_string()?)
    })
}
