//! Error types for scd-montecarlo

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Core error: {0}")]
    Core(#[from] scd_core::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid rating on line {line}: {value:?} (expected 0 or 1)")]
    InvalidRating { line: usize, value: String },

    #[error("Length mismatch: {expected} trials but {actual} ratings")]
    LengthMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Configuration rejected before any simulation work
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::Core(scd_core::Error::InvalidParameter(msg.into()))
    }
}
