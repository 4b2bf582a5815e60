//! Organizational carbon footprint estimation.
//!
//! This library estimates a company's annual kgCO2 emissions from its energy
//! bills, waste and business travel, ranks reduction suggestions, and keeps
//! an append-only history of submitted reports for comparison.
//!
//! # Quick Start
//!
//! ```ignore
//! use carbon_footprint::prelude::*;
//!
//! let store = ReportStore::new();
//!
//! let submission = Submission::new("Acme", report_date)
//!     .with_energy(1000.0, 500.0, 800.0)
//!     .with_waste(1000.0, 30)
//!     .with_travel(100.0, 8.0);
//!
//! let submitted = store.submit(&submission)?;
//! println!("{}", submitted.suggestions.priority_actions[0]);
//! println!("{:?}", store.summary());
//! ```
//!
//! # Modules
//!
//! - [`emissions`] - Emission factors and the pure calculator
//! - [`submission`] - Submission type and validation
//! - [`suggest`] - Threshold rules and priority ranking
//! - [`store`] - Report history, aggregation and CSV interchange
//! - [`sample`] - Synthetic submissions per company size (requires `sample` feature)
//! - [`server`] - HTTP API (requires `server` feature)
//!
//! # Feature Flags
//!
//! - `sample` - Enable the synthetic data generator (enabled by default)
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `cli` - Enable the command-line interface binary
//! - `server` - Enable the HTTP API server
//! - `full` - Enable all features

pub mod emissions;
mod logging;
pub mod prelude;
#[cfg(feature = "sample")]
pub mod sample;
#[cfg(feature = "server")]
pub mod server;
pub mod store;
pub mod submission;
pub mod suggest;

mod error;

// Re-export the unified error type
pub use error::{Error, Result};

// Calculator
pub use emissions::{
    Category, CategoryShare, EmissionBreakdown, calculate, energy_emissions, share_percent,
    travel_emissions, waste_emissions,
};

// Validation
pub use submission::{Submission, Validation, ValidationError, validate};

// Suggestions
pub use suggest::{SuggestionSet, generate_suggestions, suggest};

// Report store
pub use store::{
    ComparisonRow, Report, ReportFields, ReportStore, StoreError, Submitted, SummaryStats,
};

#[cfg(feature = "sample")]
pub use sample::{CompanySize, ParseCompanySizeError, SampleGenerator};
