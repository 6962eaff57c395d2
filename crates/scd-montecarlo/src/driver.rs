//! Monte Carlo driver
//!
//! Every scenario draws from its own ChaCha stream (`seed`, stream = scenario
//! index), so a sequential run and a rayon run produce the same series and
//! the same decisions.

use crate::config::SimulationConfig;
use crate::error::{Error, Result};
use crate::grid::{ParameterGrid, Scenario};
use crate::metrics::{metrics_by_trend, TrendMetrics, ValidityMetrics};
use crate::report::SimulationReport;
use rayon::prelude::*;
use scd_cdc::{CdcEvaluator, DecisionRule};
use scd_core::{stream_rng, LabeledSeries, Verdict};
use scd_series::PhaseComposer;
use serde::Serialize;
use tracing::{debug, instrument, trace};

/// One simulated graph and the rule's decision on it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trial {
    pub scenario: Scenario,
    pub series: LabeledSeries,
    pub decision: Verdict,
}

impl Trial {
    pub fn truth(&self) -> Verdict {
        self.scenario.truth()
    }
}

/// Runs a decision rule over every scenario of a configuration
#[derive(Debug, Clone)]
pub struct MonteCarlo<D = CdcEvaluator> {
    config: SimulationConfig,
    rule: D,
}

impl MonteCarlo<CdcEvaluator> {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Self::with_rule(config, CdcEvaluator::new())
    }
}

impl<D: DecisionRule> MonteCarlo<D> {
    /// Validate the configuration against what `rule` can judge
    pub fn with_rule(config: SimulationConfig, rule: D) -> Result<Self> {
        config.validate()?;
        if let Some(&length) = config
            .nb_points_b
            .iter()
            .find(|&&len| !rule.supports_intervention_len(len))
        {
            return Err(Error::Core(scd_core::Error::CutoffUnavailable {
                length,
                min: rule.minimum_intervention_points(),
                max: rule.maximum_intervention_points(),
            }));
        }
        Ok(Self { config, rule })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn rule(&self) -> &D {
        &self.rule
    }

    pub fn grid(&self) -> ParameterGrid<'_> {
        ParameterGrid::new(&self.config)
    }

    /// Generate and judge one scenario
    pub fn simulate(&self, scenario: &Scenario) -> Result<Trial> {
        let mut rng = stream_rng(self.config.seed, scenario.index as u64);
        let composer = PhaseComposer::new(scenario.series_parameters(self.config.constant))?;
        let series = composer.compose(&scenario.phase_spec()?, &mut rng)?;

        let (baseline, intervention) = series.split_phases();
        let decision = self.rule.decide(&baseline, &intervention)?;
        trace!(index = scenario.index, %decision, truth = %scenario.truth(), "scenario judged");

        Ok(Trial {
            scenario: *scenario,
            series,
            decision,
        })
    }

    #[instrument(skip(self), fields(scenarios = self.config.scenario_count(), rule = self.rule.algorithm_name()))]
    pub fn run(&self) -> Result<SimulationResults> {
        let trials = self
            .grid()
            .iter()
            .map(|scenario| self.simulate(&scenario))
            .collect::<Result<Vec<_>>>()?;
        debug!("Monte Carlo run completed with {} trials", trials.len());
        Ok(self.results(trials))
    }

    /// Same trials as [`run`](Self::run), spread over the rayon pool
    #[instrument(skip(self), fields(scenarios = self.config.scenario_count(), rule = self.rule.algorithm_name()))]
    pub fn run_parallel(&self) -> Result<SimulationResults>
    where
        D: Sync,
    {
        let grid = self.grid();
        let trials = (0..grid.len())
            .into_par_iter()
            .filter_map(|index| grid.scenario(index))
            .map(|scenario| self.simulate(&scenario))
            .collect::<Result<Vec<_>>>()?;
        debug!("Parallel Monte Carlo run completed with {} trials", trials.len());
        Ok(self.results(trials))
    }

    fn results(&self, trials: Vec<Trial>) -> SimulationResults {
        SimulationResults {
            rule: self.rule.algorithm_name(),
            config: self.config.clone(),
            trials,
        }
    }
}

/// All trials of one run, in scenario order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResults {
    rule: &'static str,
    config: SimulationConfig,
    trials: Vec<Trial>,
}

impl SimulationResults {
    pub fn rule(&self) -> &'static str {
        self.rule
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    pub fn len(&self) -> usize {
        self.trials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    pub fn decisions(&self) -> Vec<Verdict> {
        self.trials.iter().map(|t| t.decision).collect()
    }

    pub fn truths(&self) -> Vec<Verdict> {
        self.trials.iter().map(Trial::truth).collect()
    }

    /// Validity of the rule's decisions
    pub fn metrics(&self) -> ValidityMetrics {
        ValidityMetrics::compute(self.trials.iter().map(|t| (t.decision, t.truth())))
    }

    /// Rule validity per trend angle, in configuration order
    pub fn metrics_by_trend(&self) -> Vec<TrendMetrics> {
        metrics_by_trend(
            &self.config.distinct_trends(),
            self.trials
                .iter()
                .map(|t| (t.scenario.trend, t.decision, t.truth())),
        )
    }

    /// Validity of external ratings listed in scenario order
    pub fn rater_metrics(&self, ratings: &[Verdict]) -> Result<ValidityMetrics> {
        self.check_ratings(ratings)?;
        Ok(ValidityMetrics::compute(
            ratings.iter().copied().zip(self.trials.iter().map(Trial::truth)),
        ))
    }

    pub fn rater_metrics_by_trend(&self, ratings: &[Verdict]) -> Result<Vec<TrendMetrics>> {
        self.check_ratings(ratings)?;
        Ok(metrics_by_trend(
            &self.config.distinct_trends(),
            self.trials
                .iter()
                .zip(ratings)
                .map(|(t, &rating)| (t.scenario.trend, rating, t.truth())),
        ))
    }

    /// Summary for the rule and, when given, the raters
    pub fn report(&self, ratings: Option<&[Verdict]>) -> Result<SimulationReport> {
        let (raters, raters_by_trend) = match ratings {
            Some(ratings) => (
                Some(self.rater_metrics(ratings)?),
                Some(self.rater_metrics_by_trend(ratings)?),
            ),
            None => (None, None),
        };
        Ok(SimulationReport {
            rule: self.rule.to_string(),
            graphs: self.trials.len(),
            seed: self.config.seed,
            method: self.metrics(),
            method_by_trend: self.metrics_by_trend(),
            raters,
            raters_by_trend,
        })
    }

    fn check_ratings(&self, ratings: &[Verdict]) -> Result<()> {
        if ratings.len() != self.trials.len() {
            return Err(Error::LengthMismatch {
                expected: self.trials.len(),
                actual: ratings.len(),
            });
        }
        Ok(())
    }
}
