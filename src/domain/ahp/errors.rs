//! Errors raised by the AHP engine.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Precondition violations detected by the weighting and ranking stages.
///
/// None of these are transient; callers should surface them as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("Invalid matrix: {reason}")]
    InvalidMatrix { reason: String },

    #[error("Degenerate matrix: column {column} sums to {sum}, normalization undefined")]
    DegenerateMatrix { column: usize, sum: f64 },

    #[error("Dimension mismatch in {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },
}

impl AhpError {
    /// Creates an invalid matrix error.
    pub fn invalid_matrix(reason: impl Into<String>) -> Self {
        AhpError::InvalidMatrix {
            reason: reason.into(),
        }
    }

    /// Creates a dimension mismatch error.
    pub fn dimension_mismatch(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        AhpError::DimensionMismatch {
            what: what.into(),
            expected,
            actual,
        }
    }
}

impl From<AhpError> for DomainError {
    fn from(err: AhpError) -> Self {
        let code = match &err {
            AhpError::InvalidMatrix { .. } => ErrorCode::InvalidMatrix,
            AhpError::DegenerateMatrix { .. } => ErrorCode::DegenerateMatrix,
            AhpError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
        };
        let error = DomainError::new(code, err.to_string());
        match err {
            AhpError::DegenerateMatrix { column, .. } => {
                error.with_detail("column", column.to_string())
            }
            AhpError::DimensionMismatch {
                what,
                expected,
                actual,
            } => error
                .with_detail("dimension", what)
                .with_detail("expected", expected.to_string())
                .with_detail("actual", actual.to_string()),
            AhpError::InvalidMatrix { .. } => error,
        }
    }
}
