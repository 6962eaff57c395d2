//! Validity of a decision method against known ground truth

use crate::error::{Error, Result};
use scd_core::Verdict;
use serde::Serialize;
use std::fmt;

/// Agreement, Type I error rate and power of a set of decisions
///
/// A rate is `None` when its denominator group is empty, e.g. power for a
/// grid without any positive smd.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValidityMetrics {
    /// Number of judged graphs
    pub n: usize,
    /// Share of decisions equal to the truth
    pub agreement: Option<f64>,
    /// Share of effect decisions among graphs without a true effect
    pub type_i_error: Option<f64>,
    /// Share of effect decisions among graphs with a true effect
    pub power: Option<f64>,
}

#[derive(Default)]
struct Tally {
    hits: usize,
    total: usize,
}

impl Tally {
    fn add(&mut self, hit: bool) {
        self.total += 1;
        if hit {
            self.hits += 1;
        }
    }

    fn rate(&self) -> Option<f64> {
        (self.total > 0).then(|| self.hits as f64 / self.total as f64)
    }
}

impl ValidityMetrics {
    /// Score `(decision, truth)` pairs
    pub fn compute<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Verdict, Verdict)>,
    {
        let mut agreement = Tally::default();
        let mut null = Tally::default();
        let mut effect = Tally::default();

        for (decision, truth) in pairs {
            agreement.add(decision == truth);
            if truth.is_effect() {
                effect.add(decision.is_effect());
            } else {
                null.add(decision.is_effect());
            }
        }

        Self {
            n: agreement.total,
            agreement: agreement.rate(),
            type_i_error: null.rate(),
            power: effect.rate(),
        }
    }

    /// Score parallel slices of decisions and truths
    pub fn from_slices(decisions: &[Verdict], truths: &[Verdict]) -> Result<Self> {
        if decisions.len() != truths.len() {
            return Err(Error::LengthMismatch {
                expected: truths.len(),
                actual: decisions.len(),
            });
        }
        Ok(Self::compute(decisions.iter().copied().zip(truths.iter().copied())))
    }
}

fn fmt_rate(rate: Option<f64>) -> String {
    rate.map_or_else(|| "n/a".to_string(), |r| format!("{r:.3}"))
}

impl fmt::Display for ValidityMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} agreement={} type_i_error={} power={}",
            self.n,
            fmt_rate(self.agreement),
            fmt_rate(self.type_i_error),
            fmt_rate(self.power)
        )
    }
}

/// Metrics restricted to graphs with one trend angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendMetrics {
    pub trend: f64,
    pub metrics: ValidityMetrics,
}

/// Group `(trend, decision, truth)` rows by trend, in the order of `trends`
pub fn metrics_by_trend<I>(trends: &[f64], rows: I) -> Vec<TrendMetrics>
where
    I: IntoIterator<Item = (f64, Verdict, Verdict)> + Clone,
{
    trends
        .iter()
        .map(|&trend| TrendMetrics {
            trend,
            metrics: ValidityMetrics::compute(
                rows.clone()
                    .into_iter()
                    .filter(|&(t, _, _)| t == trend)
                    .map(|(_, decision, truth)| (decision, truth)),
            ),
        })
        .collect()
}
