//! HTTP API server for carbon-footprint.
//!
//! This module exposes the calculator, suggestion engine and a shared
//! [`ReportStore`](crate::store::ReportStore) over a versioned JSON API
//! using axum. Report listings and suggestions can also be downloaded as
//! CSV through `Accept: text/csv`.

mod config;
mod content;
mod error;
pub mod logging;
mod routes;
mod state;

pub use config::{
    Config, ConfigError, CorsConfig, LogFormat, LoggingConfig, ServerConfig, StoreConfig,
};
pub use content::ContentFormat;
pub use error::ApiError;
pub use routes::router;
pub use state::{AppState, StateError};
