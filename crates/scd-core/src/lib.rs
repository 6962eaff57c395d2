//! Core types for single-case design simulation
//!
//! This crate holds the vocabulary shared by the generator, the CDC evaluator
//! and the Monte Carlo driver:
//!
//! - [`LabeledSeries`]: measurement occasions with structured phase records
//! - [`Verdict`]: binary effect decision
//! - [`RandomSource`]: the two kinds of draws generation needs
//! - [`stats`]: mean, population SD and least-squares line fitting
//! - [`Error`] / [`Result`]: the shared error type
//!
//! # Example
//!
//! ```rust
//! use scd_core::{DesignKind, LabeledSeries, Observation, PhaseKind};
//!
//! let series = LabeledSeries::new(
//!     DesignKind::Ab,
//!     vec![
//!         Observation::new(PhaseKind::A, 0, 1, 3.0),
//!         Observation::new(PhaseKind::B, 0, 1, 5.0),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(series.labels(), vec!["A", "B"]);
//! assert_eq!(series.phase_changes(), vec![1]);
//! ```

pub mod error;
pub mod random;
pub mod series;
pub mod stats;
pub mod types;

// Re-export core types
pub use error::{Error, Result};
pub use random::{seeded_rng, stream_rng, RandomSource};
pub use series::{LabeledSeries, Observation};
pub use stats::LinearFit;
pub use types::{DesignKind, PhaseKind, Verdict};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DesignKind, Error, LabeledSeries, LinearFit, Observation, PhaseKind, RandomSource,
        Result, Verdict,
    };
}
