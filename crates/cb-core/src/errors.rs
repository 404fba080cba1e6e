//! Cross-cutting error types for checkbook.
//!
//! Input-specific errors (`IngestError`) and transport errors (`ServerError`)
//! live in their own crates. They converge into `anyhow::Error` in `cb-cli`.

use thiserror::Error;

/// Errors that can be raised by any checkbook crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A tab slug did not match any dashboard tab.
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    /// A chart slug did not match any chart builder.
    #[error("Unknown chart: {0}")]
    UnknownChart(String),

    /// A filter value was not one of `all`, `hardware`, `software`, `telecom`.
    #[error("Invalid filter '{0}' (expected all, hardware, software or telecom)")]
    InvalidFilter(String),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
