//! Error types for the assignment solver.
//!
//! Errors fall into two groups:
//! - invalid input, reported to the caller and never recovered from
//! - internal invariant violations inside the search, which abort the solve
//!   instead of returning a matching that may be wrong

use thiserror::Error;

/// Broad classification of a [`MunkresError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied a matrix or option the solver cannot accept.
    InvalidInput,
    /// A feasibility or termination invariant was broken during the solve.
    Internal,
}

/// Central error enum for all solver operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MunkresError {
    // =================================================================
    // Input errors
    // =================================================================
    /// The matrix has no rows or no columns.
    #[error("cost matrix is empty")]
    EmptyMatrix,

    /// Rows of the input have differing lengths.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Row-major data does not match the declared shape.
    #[error("data length {len} does not match a {rows}x{cols} matrix")]
    ShapeMismatch { len: usize, rows: usize, cols: usize },

    /// A cell holds NaN or an infinity.
    #[error("non-finite cost {value} at ({row}, {col})")]
    NonFiniteCost { row: usize, col: usize, value: f64 },

    /// The fill cost for padded cells is NaN or an infinity.
    #[error("non-finite pad value {value}")]
    NonFinitePadValue { value: f64 },

    /// The zero tolerance is negative, NaN or infinite.
    #[error("tolerance {value} must be finite and non-negative")]
    InvalidTolerance { value: f64 },

    /// A disallowment entry points outside the matrix.
    #[error("disallowed pair ({row}, {col}) is outside the {rows}x{cols} matrix")]
    DisallowedOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A cost function produced a value with no `f64` representation.
    #[error("cost at ({row}, {col}) cannot be represented as f64")]
    UnrepresentableCost { row: usize, col: usize },

    /// Costs are so large that the disallowment sentinel overflows `f64`.
    #[error("cost magnitudes too large to encode disallowed cells")]
    CostOverflow,

    // =================================================================
    // Internal errors
    // =================================================================
    /// The solver reached a state that correct potentials never produce.
    #[error("internal invariant violated: {reason}")]
    Internal { reason: &'static str },
}

impl MunkresError {
    /// Returns which side of the error taxonomy this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MunkresError::Internal { .. } => ErrorKind::Internal,
            _ => ErrorKind::InvalidInput,
        }
    }

    /// Returns true if the error was caused by the caller's input.
    pub fn is_invalid_input(&self) -> bool {
        self.kind() == ErrorKind::InvalidInput
    }

    pub(crate) fn internal(reason: &'static str) -> Self {
        MunkresError::Internal { reason }
    }
}
