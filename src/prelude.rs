//! Convenient re-exports for common usage patterns.
//!
//! ```ignore
//! use carbon_footprint::prelude::*;
//!
//! let store = ReportStore::new();
//! let submitted = store.submit(&submission)?;
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Calculator and validation
pub use crate::emissions::{Category, EmissionBreakdown, calculate};
pub use crate::submission::{Submission, Validation, ValidationError, validate};

// Suggestions
pub use crate::suggest::{SuggestionSet, suggest};

// Report store
pub use crate::store::{ComparisonRow, Report, ReportFields, ReportStore, Submitted, SummaryStats};

// Synthetic data (requires "sample" feature)
#[cfg(feature = "sample")]
pub use crate::sample::{CompanySize, SampleGenerator};
