//! Application state management.

use std::fs::File;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::store::{ReportStore, StoreError};

use super::config::Config;

/// Shared application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    store: Arc<ReportStore>,
}

impl AppState {
    /// Wrap an existing store.
    pub fn new(store: ReportStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Create the state from configuration, preloading the seed CSV if set.
    pub fn from_config(config: &Config) -> Result<Self, StateError> {
        let store = ReportStore::new();

        if let Some(path) = &config.store.seed_csv {
            let file = File::open(path).map_err(|e| StateError::OpenSeed {
                path: path.clone(),
                source: e,
            })?;
            let count = store.import_csv(file).map_err(|e| StateError::ImportSeed {
                path: path.clone(),
                source: e,
            })?;
            info!(path = %path, count, "seeded report store");
        }

        Ok(Self::new(store))
    }

    /// The shared report store.
    pub fn store(&self) -> &ReportStore {
        &self.store
    }
}

/// Errors that can occur when setting up application state.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to open seed CSV '{path}': {source}")]
    OpenSeed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to import seed CSV '{path}': {source}")]
    ImportSeed {
        path: String,
        #[source]
        source: StoreError,
    },
}
