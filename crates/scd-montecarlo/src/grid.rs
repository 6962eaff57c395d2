//! Scenario enumeration
//!
//! Scenarios are numbered in nested order: baseline length, intervention
//! length, autocorrelation, trend, smd, with replications innermost. External
//! rater files list their ratings in the same order.

use crate::config::SimulationConfig;
use scd_core::{Result, Verdict};
use scd_series::{PhaseSpec, SeriesParameters};
use serde::Serialize;

/// One cell of the grid (plus its replication number)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scenario {
    /// Position in enumeration order; also selects the random stream
    pub index: usize,
    pub nb_points_a: usize,
    pub nb_points_b: usize,
    pub autocorrelation: f64,
    pub trend: f64,
    pub smd: f64,
    pub replication: usize,
}

impl Scenario {
    /// Known answer: any positive mean shift is a real effect
    pub fn truth(&self) -> Verdict {
        Verdict::from_smd(self.smd)
    }

    /// AB layout with the scenario's mean shift
    pub fn phase_spec(&self) -> Result<PhaseSpec> {
        PhaseSpec::ab(self.nb_points_a, self.nb_points_b, self.smd)
    }

    pub fn series_parameters(&self, constant: f64) -> SeriesParameters {
        SeriesParameters::default()
            .with_autocorrelation(self.autocorrelation)
            .with_constant(constant)
            .with_trend(self.trend)
    }
}

/// Random-access view of every scenario in a configuration
#[derive(Debug, Clone)]
pub struct ParameterGrid<'a> {
    config: &'a SimulationConfig,
    len: usize,
}

impl<'a> ParameterGrid<'a> {
    pub fn new(config: &'a SimulationConfig) -> Self {
        Self {
            config,
            len: config.scenario_count(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Decode `index` as a mixed-radix number, innermost axis last
    pub fn scenario(&self, index: usize) -> Option<Scenario> {
        if index >= self.len {
            return None;
        }
        let c = self.config;
        let mut rest = index;
        let mut digit = |radix: usize| {
            let d = rest % radix;
            rest /= radix;
            d
        };

        let replication = digit(c.replications);
        let smd = c.smds[digit(c.smds.len())];
        let trend = c.trends[digit(c.trends.len())];
        let autocorrelation = c.autocorrelations[digit(c.autocorrelations.len())];
        let nb_points_b = c.nb_points_b[digit(c.nb_points_b.len())];
        let nb_points_a = c.nb_points_a[digit(c.nb_points_a.len())];

        Some(Scenario {
            index,
            nb_points_a,
            nb_points_b,
            autocorrelation,
            trend,
            smd,
            replication,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Scenario> + '_ {
        (0..self.len).filter_map(move |i| self.scenario(i))
    }
}
