//! Monte Carlo validation of the conservative dual-criterion method
//!
//! Sweeps a grid of AB-graph characteristics, simulates one graph per
//! scenario, lets the CDC judge it and scores the decisions against the
//! known truth. Ratings from human judges can be scored the same way.
//!
//! ## Usage
//!
//! ```rust
//! use scd_montecarlo::{MonteCarlo, SimulationConfig};
//!
//! let config = SimulationConfig::default()
//!     .with_trends(vec![0.0])
//!     .with_seed(7);
//! let results = MonteCarlo::new(config).unwrap().run().unwrap();
//!
//! assert_eq!(results.len(), 2 * 2 * 3 * 6);
//! let report = results.report(None).unwrap();
//! assert!(report.method.agreement.is_some());
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod metrics;
pub mod raters;
pub mod report;

pub use config::SimulationConfig;
pub use driver::{MonteCarlo, SimulationResults, Trial};
pub use error::{Error, Result};
pub use grid::{ParameterGrid, Scenario};
pub use metrics::{metrics_by_trend, TrendMetrics, ValidityMetrics};
pub use raters::{read_ratings, read_ratings_file};
pub use report::SimulationReport;
