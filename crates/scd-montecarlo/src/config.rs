//! Simulation grid configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Characteristics swept by a Monte Carlo run
///
/// Every combination of the listed values is simulated `replications` times.
/// Duplicate entries count as separate scenarios, which is how the default
/// grid gives half of all graphs no true effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Baseline phase lengths
    pub nb_points_a: Vec<usize>,
    /// Intervention phase lengths
    pub nb_points_b: Vec<usize>,
    /// AR(1) coefficients
    pub autocorrelations: Vec<f64>,
    /// Trend angles in degrees
    pub trends: Vec<f64>,
    /// Standardized mean differences added to the intervention phase
    pub smds: Vec<f64>,
    /// Level added to every generated series
    pub constant: f64,
    pub seed: u64,
    pub replications: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            nb_points_a: vec![3, 5],
            nb_points_b: vec![5, 10],
            autocorrelations: vec![0.0, 0.2, 0.4],
            trends: vec![0.0, 15.0, 30.0],
            smds: vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0],
            constant: 10.0,
            seed: 42,
            replications: 1,
        }
    }
}

impl SimulationConfig {
    pub fn with_nb_points_a(mut self, values: Vec<usize>) -> Self {
        self.nb_points_a = values;
        self
    }

    pub fn with_nb_points_b(mut self, values: Vec<usize>) -> Self {
        self.nb_points_b = values;
        self
    }

    pub fn with_autocorrelations(mut self, values: Vec<f64>) -> Self {
        self.autocorrelations = values;
        self
    }

    pub fn with_trends(mut self, values: Vec<f64>) -> Self {
        self.trends = values;
        self
    }

    pub fn with_smds(mut self, values: Vec<f64>) -> Self {
        self.smds = values;
        self
    }

    pub fn with_constant(mut self, constant: f64) -> Self {
        self.constant = constant;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_replications(mut self, replications: usize) -> Self {
        self.replications = replications;
        self
    }

    /// Number of simulated graphs
    pub fn scenario_count(&self) -> usize {
        self.nb_points_a.len()
            * self.nb_points_b.len()
            * self.autocorrelations.len()
            * self.trends.len()
            * self.smds.len()
            * self.replications
    }

    /// Distinct trend angles in the order they first appear
    pub fn distinct_trends(&self) -> Vec<f64> {
        let mut out: Vec<f64> = Vec::with_capacity(self.trends.len());
        for &trend in &self.trends {
            if !out.contains(&trend) {
                out.push(trend);
            }
        }
        out
    }

    pub fn validate(&self) -> Result<()> {
        check_lengths("nb_points_a", &self.nb_points_a)?;
        check_lengths("nb_points_b", &self.nb_points_b)?;
        check_reals("autocorrelations", &self.autocorrelations)?;
        check_reals("trends", &self.trends)?;
        check_reals("smds", &self.smds)?;
        if !self.constant.is_finite() {
            return Err(scd_core::Error::non_finite("constant").into());
        }
        if self.replications == 0 {
            return Err(scd_core::Error::zero_length("replications").into());
        }
        Ok(())
    }

    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn check_lengths(name: &str, values: &[usize]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::invalid_config(format!("{name} must not be empty")));
    }
    if values.contains(&0) {
        return Err(scd_core::Error::zero_length(name).into());
    }
    Ok(())
}

fn check_reals(name: &str, values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(Error::invalid_config(format!("{name} must not be empty")));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(scd_core::Error::non_finite(name).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scenario_count(), 2 * 2 * 3 * 3 * 6);
        assert_eq!(config.distinct_trends(), vec![0.0, 15.0, 30.0]);
    }

    #[test]
    fn test_validation_rejects_bad_grids() {
        let config = SimulationConfig::default().with_trends(vec![]);
        assert!(config.validate().is_err());

        let config = SimulationConfig::default().with_nb_points_a(vec![3, 0]);
        assert!(config.validate().is_err());

        let config = SimulationConfig::default().with_smds(vec![0.0, f64::NAN]);
        assert!(config.validate().is_err());

        let config = SimulationConfig::default().with_constant(f64::INFINITY);
        assert!(config.validate().is_err());

        let config = SimulationConfig::default().with_replications(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config =
            SimulationConfig::from_json_str(r#"{ "trends": [0, 45], "seed": 7 }"#).unwrap();
        assert_eq!(config.trends, vec![0.0, 45.0]);
        assert_eq!(config.seed, 7);
        assert_eq!(config.nb_points_a, vec![3, 5]);
        assert_eq!(config.replications, 1);
    }

    #[test]
    fn test_json_validation_applies() {
        let err = SimulationConfig::from_json_str(r#"{ "replications": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::Core(_)));

        let err = SimulationConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimulationConfig::default().with_seed(9).with_replications(3);
        let parsed = SimulationConfig::from_json_str(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_distinct_trends_keeps_first_occurrence() {
        let config = SimulationConfig::default().with_trends(vec![30.0, 0.0, 30.0, 15.0]);
        assert_eq!(config.distinct_trends(), vec![30.0, 0.0, 15.0]);
    }
}
