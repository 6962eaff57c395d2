//! Conservative dual-criterion evaluation
//!
//! The baseline mean and the baseline trend (projected into the intervention
//! phase) are both raised by a quarter of the baseline standard deviation.
//! Intervention points above both lines are counted and compared with the
//! Fisher et al. cutoff for the intervention length.

use crate::fisher::{cutoff_for, MAX_INTERVENTION_POINTS, MIN_INTERVENTION_POINTS};
use crate::traits::{DecisionRule, DecisionRuleProperties};
use scd_core::series::split_phases;
use scd_core::stats::{mean, population_std};
use scd_core::{DesignKind, Error, LabeledSeries, LinearFit, Result, Verdict};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// Both lines are raised by this many baseline standard deviations
pub const BIAS_SD: f64 = 0.25;

/// Projected trend values are rounded to this many decimals before biasing
pub const TREND_DECIMALS: i32 = 3;

/// Round half to even at `decimals` places
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

/// Everything the CDC computed for one baseline/intervention pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CdcOutcome {
    mean_line: f64,
    trend_line: Vec<f64>,
    fit: LinearFit,
    bias: f64,
    points_above: usize,
    cutoff: usize,
    verdict: Verdict,
}

impl CdcOutcome {
    /// Baseline mean plus the bias
    pub fn mean_line(&self) -> f64 {
        self.mean_line
    }

    /// Projected, rounded and biased baseline trend, one value per
    /// intervention point
    pub fn trend_line(&self) -> &[f64] {
        &self.trend_line
    }

    /// Least-squares fit of the baseline against its time index
    pub fn fit(&self) -> LinearFit {
        self.fit
    }

    /// `0.25 * population_std(baseline)`
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Intervention points strictly above both lines
    pub fn points_above(&self) -> usize {
        self.points_above
    }

    /// Required count from the cutoff table
    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
}

impl fmt::Display for CdcOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CDC Result:")?;
        writeln!(f, "  Mean line: {:.3}", self.mean_line)?;
        writeln!(
            f,
            "  Baseline fit: slope {:.3}, intercept {:.3}",
            self.fit.slope, self.fit.intercept
        )?;
        writeln!(f, "  Intervention points: {}", self.trend_line.len())?;
        writeln!(
            f,
            "  Points above both lines: {} (cutoff {})",
            self.points_above, self.cutoff
        )?;
        write!(f, "  Verdict: {}", self.verdict)
    }
}

/// The conservative dual-criterion method
///
/// Deterministic: identical inputs always give identical outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CdcEvaluator;

impl CdcEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Run the full procedure on raw phase values
    #[instrument(skip(self, baseline, intervention),
                 fields(n_baseline = baseline.len(), n_intervention = intervention.len()))]
    pub fn evaluate_phases(&self, baseline: &[f64], intervention: &[f64]) -> Result<CdcOutcome> {
        if baseline.is_empty() {
            return Err(Error::InsufficientData {
                expected: 1,
                actual: 0,
            });
        }
        let cutoff = cutoff_for(intervention.len())?;

        let bias = BIAS_SD * population_std(baseline)?;
        let mean_line = mean(baseline)? + bias;

        let fit = LinearFit::fit_indexed(baseline)?;
        let offset = baseline.len();
        let trend_line: Vec<f64> = (0..intervention.len())
            .map(|j| round_to(fit.predict((offset + j) as f64), TREND_DECIMALS) + bias)
            .collect();

        let points_above = intervention
            .iter()
            .zip(&trend_line)
            .filter(|&(&value, &trend)| value > mean_line && value > trend)
            .count();
        let verdict = Verdict::from(points_above >= cutoff);

        debug!(mean_line, points_above, cutoff, %verdict, "CDC evaluated");

        Ok(CdcOutcome {
            mean_line,
            trend_line,
            fit,
            bias,
            points_above,
            cutoff,
            verdict,
        })
    }

    /// Full outcome for a two-phase series (AB or alternating-treatment)
    pub fn evaluate_detailed(&self, series: &LabeledSeries) -> Result<CdcOutcome> {
        match series.design() {
            DesignKind::Ab | DesignKind::AlternatingTreatment => {
                let (baseline, intervention) = series.split_phases();
                self.evaluate_phases(&baseline, &intervention)
            }
            DesignKind::Abab => Err(Error::InvalidInput(
                "ABAB series have four phases; CDC judges a single baseline/intervention pair"
                    .to_string(),
            )),
            DesignKind::MultipleBaseline => Err(Error::InvalidInput(
                "multiple-baseline series must be judged tier by tier".to_string(),
            )),
        }
    }

    /// Verdict for a two-phase series
    pub fn evaluate(&self, series: &LabeledSeries) -> Result<Verdict> {
        self.evaluate_detailed(series).map(|outcome| outcome.verdict())
    }

    /// One verdict per tier; each multiple-baseline tier is its own AB graph
    pub fn evaluate_tiers(&self, series: &LabeledSeries) -> Result<Vec<Verdict>> {
        match series.design() {
            DesignKind::MultipleBaseline => series
                .tiers()
                .map(|tier| {
                    let (baseline, intervention) = split_phases(tier);
                    self.evaluate_phases(&baseline, &intervention)
                        .map(|outcome| outcome.verdict())
                })
                .collect(),
            _ => self.evaluate(series).map(|verdict| vec![verdict]),
        }
    }
}

impl DecisionRuleProperties for CdcEvaluator {
    fn algorithm_name(&self) -> &'static str {
        "CDC"
    }

    fn minimum_intervention_points(&self) -> usize {
        MIN_INTERVENTION_POINTS
    }

    fn maximum_intervention_points(&self) -> usize {
        MAX_INTERVENTION_POINTS
    }
}

impl DecisionRule for CdcEvaluator {
    fn decide(&self, baseline: &[f64], intervention: &[f64]) -> Result<Verdict> {
        self.evaluate_phases(baseline, intervention)
            .map(|outcome| outcome.verdict())
    }
}
