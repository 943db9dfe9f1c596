// src/error.rs

use thiserror::Error;

use crate::shape::Shape3;
use crate::Real;

/// Result type used by every fallible operation in the crate.
pub type NumResult<T> = Result<T, NumericsError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericsError {
    /// Two operands of a binary element-wise operation disagree in shape or length.
    #[error(
        "matrix sizes are not the same for {op} operation: {lhs} ({lhs_len} elements) vs {rhs} ({rhs_len} elements)"
    )]
    ShapeMismatch {
        op: &'static str,
        lhs: Shape3,
        rhs: Shape3,
        lhs_len: usize,
        rhs_len: usize,
    },

    /// No data was supplied for a non-empty extent.
    #[error("data is empty while calculating {op}")]
    NullInput { op: &'static str },

    /// The buffer does not cover the declared x*y extent.
    #[error("buffer too short for {op}: expected at least {expected} elements, got {actual}")]
    ExtentMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The declared extent does not fit in `usize`.
    #[error("extent of {op} overflows: {dims:?}")]
    ExtentOverflow {
        op: &'static str,
        dims: [usize; 3],
    },

    /// log10 was asked for a negative input.
    #[error("matrix has a negative value ({value} at index {index}), cannot calculate logarithm")]
    NegativeLogArgument { index: usize, value: Real },
}

impl NumericsError {
    /// Short machine-readable tag for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            NumericsError::ShapeMismatch { .. } => "shape_mismatch",
            NumericsError::NullInput { .. } => "null_input",
            NumericsError::ExtentMismatch { .. } => "extent_mismatch",
            NumericsError::ExtentOverflow { .. } => "extent_overflow",
            NumericsError::NegativeLogArgument { .. } => "negative_log_argument",
        }
    }
}
