//! Conservative dual-criterion (CDC) decision rule
//!
//! Emulates visual inspection of an AB graph: the baseline mean and the
//! projected baseline trend are each raised by a quarter of the baseline
//! standard deviation, and an effect is declared when enough intervention
//! points sit above both lines.
//!
//! ## Usage
//!
//! ```rust
//! use scd_cdc::CdcEvaluator;
//! use scd_core::Verdict;
//!
//! let outcome = CdcEvaluator::new()
//!     .evaluate_phases(&[10.0; 5], &[20.0; 5])
//!     .unwrap();
//!
//! assert_eq!(outcome.points_above(), 5);
//! assert_eq!(outcome.cutoff(), 5);
//! assert_eq!(outcome.verdict(), Verdict::Effect);
//! ```

pub mod evaluator;
pub mod fisher;
pub mod traits;

pub use evaluator::{CdcEvaluator, CdcOutcome, BIAS_SD, TREND_DECIMALS};
pub use fisher::{cutoff_for, FISHER_CUTOFFS, MAX_INTERVENTION_POINTS, MIN_INTERVENTION_POINTS};
pub use traits::{DecisionRule, DecisionRuleProperties};
