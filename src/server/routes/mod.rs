//! API routes and handlers.

mod calculate;
mod reports;

use axum::{
    Router,
    routing::{get, post},
};

use super::state::AppState;

/// Build the API router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        // Stateless calculation
        .route("/calculate", post(calculate::calculate))
        .route("/suggestions", post(calculate::suggestions))
        // Report history
        .route("/reports", get(reports::list_reports).post(reports::create_report))
        .route("/reports/import", post(reports::import_reports))
        .route("/reports/{id}", get(reports::get_report))
        // Aggregates
        .route("/summary", get(reports::summary))
        .route("/comparison", get(reports::comparison));

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}
