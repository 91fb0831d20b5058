//! Argument validation errors.
//!
//! Every error here is raised before the engine writes a single element of
//! C, so a failed call leaves the output buffer exactly as it was.

use std::fmt;
use thiserror::Error;

/// Which GEMM operand an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
    C,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operand::A => "A",
            Operand::B => "B",
            Operand::C => "C",
        };
        f.write_str(name)
    }
}

/// Errors returned by the GEMM entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GemmError {
    /// Transpose tag outside `N`/`T`/`C`.
    #[error("invalid transpose tag {0:?} (expected 'N', 'T' or 'C')")]
    InvalidTranspose(char),

    /// Leading dimension smaller than the stored row length.
    #[error("leading dimension of {operand} is {ld}, must be at least {min}")]
    LeadingDimension {
        operand: Operand,
        ld: usize,
        min: usize,
    },

    /// Backing buffer too short for the declared shape and stride.
    #[error("buffer for {operand} has {len} elements, need at least {required}")]
    ShortBuffer {
        operand: Operand,
        len: usize,
        required: usize,
    },

    /// Matrix view whose stride or buffer does not fit its shape.
    #[error("invalid {rows}x{cols} view: stride {stride}, buffer of {len} elements")]
    InvalidView {
        rows: usize,
        cols: usize,
        stride: usize,
        len: usize,
    },

    /// Operand shapes that cannot be multiplied together.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Unusable engine configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for GEMM operations.
pub type Result<T> = std::result::Result<T, GemmError>;
