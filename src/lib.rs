//! Single-case design simulation
//!
//! Re-exports the workspace crates under one roof:
//!
//! - [`scd_core`]: series model, verdicts, errors, random sources
//! - [`scd_series`]: AR(1) generation, trend injection, design composition
//! - [`scd_cdc`]: the conservative dual-criterion decision rule
//! - [`scd_montecarlo`]: grid sweeps, validity metrics and reports
//!
//! ```rust
//! use scd_sim::prelude::*;
//!
//! let composer = PhaseComposer::new(SeriesParameters::default().with_trend(15.0)).unwrap();
//! let spec = PhaseSpec::ab(5, 10, 3.0).unwrap();
//! let series = composer.compose(&spec, &mut seeded_rng(42)).unwrap();
//!
//! let outcome = CdcEvaluator::new().evaluate_detailed(&series).unwrap();
//! assert_eq!(outcome.cutoff(), 8);
//! assert_eq!(outcome.trend_line().len(), 10);
//! ```

pub use scd_cdc;
pub use scd_core;
pub use scd_montecarlo;
pub use scd_series;

pub use scd_core::VERSION;

/// Prelude module for convenient imports
pub mod prelude {
    pub use scd_cdc::{CdcEvaluator, CdcOutcome, DecisionRule, DecisionRuleProperties};
    pub use scd_core::prelude::*;
    pub use scd_core::{seeded_rng, stream_rng};
    pub use scd_montecarlo::{
        MonteCarlo, SimulationConfig, SimulationReport, SimulationResults, ValidityMetrics,
    };
    pub use scd_series::{AlternationScheme, PhaseComposer, PhaseSpec, SeriesParameters};
}
