use thiserror::Error;

use crate::model::Kind;
use crate::validation::ValidationReport;

/// The main error type for layout-coerce operations.
///
/// Every variant describes invalid caller input. None of them are transient,
/// so there is nothing to retry.
#[derive(Debug, Error)]
pub enum CoerceError {
    #[error("Invalid size definition: {0}")]
    InvalidSize(String),

    #[error("Invalid position: {0}")]
    InvalidPosition(String),

    #[error("Expected {expected} got {actual}")]
    TypeMismatch { expected: Kind, actual: Kind },

    #[error("Value {value} is out of range for {kind}")]
    OutOfRange { kind: Kind, value: String },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Failed to write JSON output: {0}")]
    JsonOutput(#[from] serde_json::Error),

    #[error("Validation failed with {error_count} error(s) and {warning_count} warning(s)")]
    ValidationFailed {
        error_count: usize,
        warning_count: usize,
        report: ValidationReport,
    },
}

impl CoerceError {
    /// Builds a [`CoerceError::InvalidSize`] from anything printable.
    pub(crate) fn invalid_size(value: impl std::fmt::Display) -> Self {
        CoerceError::InvalidSize(value.to_string())
    }

    /// Builds a [`CoerceError::InvalidPosition`] from anything printable.
    pub(crate) fn invalid_position(value: impl std::fmt::Display) -> Self {
        CoerceError::InvalidPosition(value.to_string())
    }
}
