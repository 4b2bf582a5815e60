//! Report history handlers.

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::store::{ComparisonRow, Report, Submitted, SummaryStats, write_reports};
use crate::submission::Submission;

use super::super::{
    content::{AcceptFormat, ApiJson, negotiate},
    error::ApiError,
    state::AppState,
};

/// Multipart field carrying the CSV export on import.
const IMPORT_FIELD: &str = "file";

/// Query parameters for listing reports.
#[derive(Debug, Deserialize, Default)]
pub struct ListQuery {
    /// Restrict the listing to one company's history.
    pub company: Option<String>,
}

/// Result of a CSV import.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub imported: usize,
    pub report_count: usize,
}

/// Validate, calculate and record a submission.
#[instrument(skip_all, fields(company = %submission.company_name))]
pub async fn create_report(
    State(state): State<AppState>,
    ApiJson(submission): ApiJson<Submission>,
) -> Result<(StatusCode, Json<Submitted>), ApiError> {
    let submitted = state.store().submit(&submission)?;

    info!(id = %submitted.report.id, total = submitted.report.total, "report created");
    Ok((StatusCode::CREATED, Json(submitted)))
}

/// List reports in submission order, as JSON or as the CSV export.
#[instrument(skip(state, format))]
pub async fn list_reports(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
    AcceptFormat(format): AcceptFormat,
) -> Result<Response, ApiError> {
    let reports = match query.company.as_deref() {
        Some(company) => state.store().history(company),
        None => state.store().reports(),
    };

    debug!(count = reports.len(), ?format, "listing reports");

    negotiate(format, "reports.csv", &reports, || -> Result<String, ApiError> {
        let mut buf = Vec::new();
        write_reports(&mut buf, &reports)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    })
}

/// Get one report by id.
#[instrument(skip(state))]
pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Report>, ApiError> {
    state
        .store()
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::report_not_found(id))
}

/// Append every report of an uploaded CSV export.
#[instrument(skip_all)]
pub async fn import_reports(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImportResponse>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMPORT_FIELD) {
            debug!(name = field.name(), "skipping multipart field");
            continue;
        }

        let bytes = field.bytes().await?;
        let imported = state.store().import_csv(bytes.as_ref())?;

        info!(imported, bytes = bytes.len(), "imported CSV upload");
        return Ok(Json(ImportResponse {
            imported,
            report_count: state.store().len(),
        }));
    }

    Err(ApiError::missing_field(IMPORT_FIELD))
}

/// Company count, report count and total emissions.
#[instrument(skip(state))]
pub async fn summary(State(state): State<AppState>) -> Json<SummaryStats> {
    Json(state.store().summary())
}

/// Per-report category values for the comparison chart.
#[instrument(skip(state))]
pub async fn comparison(State(state): State<AppState>) -> Json<Vec<ComparisonRow>> {
    Json(state.store().comparison())
}
