//! Synthetic single-case design data
//!
//! This crate generates the labeled series that the CDC evaluator and the
//! Monte Carlo driver consume.
//!
//! # Components
//!
//! - **TimeSeriesGenerator**: AR(1) noise plus a constant level
//! - **TrendInjector**: linear drift given as an angle, pivoted on the midpoint
//! - **PhaseSpec / Design**: validated AB, ABAB, alternating-treatment and
//!   multiple-baseline topologies
//! - **PhaseComposer**: one generator and one trend routine shared by all
//!   topologies
//!
//! ## Usage
//!
//! ```rust
//! use scd_core::seeded_rng;
//! use scd_series::{PhaseComposer, PhaseSpec, SeriesParameters};
//!
//! let composer = PhaseComposer::new(
//!     SeriesParameters::default()
//!         .with_autocorrelation(0.2)
//!         .with_trend(15.0),
//! )
//! .unwrap();
//!
//! let spec = PhaseSpec::multiple_baseline(3, 5, 2, 3, 1.0).unwrap();
//! let series = composer.compose(&spec, &mut seeded_rng(42)).unwrap();
//!
//! assert_eq!(series.tier_count(), 3);
//! assert_eq!(series.len(), 8 + 10 + 12);
//! ```

pub mod alternation;
pub mod composer;
pub mod design;
pub mod generator;
pub mod trend;

pub use alternation::{alternation_labels, AlternationScheme};
pub use composer::{PhaseComposer, SeriesParameters};
pub use design::{Design, PhaseSlot, PhaseSpec};
pub use generator::{generate, GenerationParameters, TimeSeriesGenerator};
pub use trend::{apply_trend, TrendInjector};
