//! Common test utilities and fixtures.
//!
//! This module provides shared submissions, helper functions, and a test
//! application wrapping the router in an in-process server.

#![cfg(feature = "server")]
#![allow(dead_code)]

use std::io::Write;

use axum::http::StatusCode;
use axum_test::TestServer;
use carbon_footprint::server::{
    AppState, Config, CorsConfig, LoggingConfig, ServerConfig, StoreConfig, router,
};
use serde_json::{Value, json};
use tempfile::NamedTempFile;

// =============================================================================
// Submissions
// =============================================================================

/// Energy kgCO2 of [`acme_submission`].
pub const ACME_ENERGY: f64 = 22309.8;
/// Waste kgCO2 of [`acme_submission`].
pub const ACME_WASTE: f64 = 6810.0;
/// Travel kgCO2 of [`acme_submission`].
pub const ACME_TRAVEL: f64 = 28.875;

/// A valid mid-sized submission.
pub fn acme_submission() -> Value {
    json!({
        "company_name": "Acme",
        "report_date": "2024-03-01",
        "electricity_bill": 1000.0,
        "natural_gas_bill": 500.0,
        "fuel_bill": 800.0,
        "waste_per_month": 1000.0,
        "recycling_percent": 30,
        "distance_km": 100.0,
        "fuel_efficiency": 8.0
    })
}

/// A valid submission that trips every threshold rule.
pub fn globex_submission() -> Value {
    json!({
        "company_name": "Globex",
        "report_date": "2024-04-01",
        "electricity_bill": 1500.0,
        "natural_gas_bill": 900.0,
        "fuel_bill": 1200.0,
        "waste_per_month": 2500.0,
        "recycling_percent": 10,
        "distance_km": 5000.0,
        "fuel_efficiency": 6.0
    })
}

// =============================================================================
// Test Application
// =============================================================================

/// Test application with an in-memory report store.
pub struct TestApp {
    pub server: TestServer,
    _seed: Option<NamedTempFile>,
}

fn config(seed_csv: Option<String>) -> Config {
    Config {
        server: ServerConfig {
            bind: "127.0.0.1".into(),
            port: 0,
            static_path: None,
        },
        cors: CorsConfig::default(),
        logging: LoggingConfig::default(),
        store: StoreConfig { seed_csv },
    }
}

impl TestApp {
    /// Create a new test application with an empty store.
    pub fn new() -> anyhow::Result<Self> {
        let state = AppState::from_config(&config(None))?;
        let server = TestServer::new(router(state))?;
        Ok(Self { server, _seed: None })
    }

    /// Create a test application whose store is preloaded from `csv`.
    pub fn with_seed(csv: &str) -> anyhow::Result<Self> {
        let mut seed = NamedTempFile::new()?;
        seed.write_all(csv.as_bytes())?;
        seed.flush()?;

        let path = seed.path().to_string_lossy().into_owned();
        let state = AppState::from_config(&config(Some(path)))?;
        let server = TestServer::new(router(state))?;
        Ok(Self {
            server,
            _seed: Some(seed),
        })
    }

    /// Record a submission and return the created response body.
    pub async fn create_report(&self, submission: &Value) -> Value {
        let response = self.server.post("/api/v1/reports").json(submission).await;
        response.assert_status(StatusCode::CREATED);
        response.json()
    }
}

/// Assert two floats agree to within a relative tolerance.
pub fn assert_close(actual: Option<f64>, expected: f64) {
    let actual = actual.unwrap_or(f64::NAN);
    approx::assert_relative_eq!(actual, expected, max_relative = 1e-9);
}
