//! Unified error type for the carbon-footprint library.
//!
//! Each module keeps its own error type; [`Error`] wraps them so application
//! code can use one `Result` throughout.

use thiserror::Error;

#[cfg(feature = "sample")]
use crate::sample::ParseCompanySizeError;
use crate::store::StoreError;
use crate::submission::ValidationError;

/// Unified error type for all carbon-footprint operations.
///
/// # Example
///
/// ```ignore
/// use carbon_footprint::{Result, ReportStore};
///
/// fn load(path: &str) -> Result<ReportStore> {
///     let store = ReportStore::new();
///     store.import_csv(std::fs::File::open(path)?)?;
///     Ok(store)
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A submission failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Error from report export or import.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Unknown company size name.
    #[cfg(feature = "sample")]
    #[error(transparent)]
    CompanySize(#[from] ParseCompanySizeError),

    /// CSV encoding error outside the store.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A [`Result`] type alias using the unified [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns `true` if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` if this is a report store error.
    pub fn is_store(&self) -> bool {
        matches!(self, Self::Store(_))
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Validation messages, if this is a validation error.
    pub fn validation_messages(&self) -> Option<&[String]> {
        match self {
            Self::Validation(err) => Some(err.messages()),
            _ => None,
        }
    }
}
