//! Feature-gated logging macros for the library.
//!
//! With the `logging` feature the macros forward to `tracing`; without it
//! they expand to nothing, and the arguments are never evaluated.
//!
//! ```rust,ignore
//! use crate::logging::{debug, info};
//!
//! info!(id = %report.id, "recorded report");
//! debug!(failures = messages.len(), "submission rejected");
//! ```

/// Operation details: appends, rejected submissions.
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Store lifecycle: recorded reports, imports.
#[cfg(feature = "logging")]
macro_rules! log_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

/// Input that was refused but did not abort the process.
#[cfg(feature = "logging")]
macro_rules! log_warn {
    ($($arg:tt)*) => { tracing::warn!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

pub(crate) use log_debug as debug;
pub(crate) use log_info as info;
pub(crate) use log_warn as warn;
