//! Error types for single-case design simulation
//!
//! Provides a unified error type for all scd crates.

use thiserror::Error;

/// Core error type for generation and evaluation
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// An operation received no values at all
    #[error("Empty input: {operation} needs at least one value")]
    EmptyInput { operation: String },

    /// The CDC cutoff table has no entry for this intervention length
    #[error("No CDC cutoff for an intervention phase of {length} points (supported: {min}..={max})")]
    CutoffUnavailable {
        length: usize,
        min: usize,
        max: usize,
    },

    /// A data-dependent loop hit its iteration cap
    #[error("Iteration limit reached: stopping condition not met after {limit} draws")]
    IterationLimit { limit: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::EmptyInput {
            operation: operation.to_string(),
        }
    }

    /// Create an error for a phase or tier length that must be at least one
    pub fn zero_length(what: &str) -> Self {
        Self::InvalidParameter(format!("{what} must be at least 1"))
    }

    /// Create an error for NaN/Inf parameters
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidParameter(format!("{context} must be finite"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }
}
