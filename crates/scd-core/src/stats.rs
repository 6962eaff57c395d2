//! Moment helpers and ordinary least squares

use crate::{Error, Result};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Arithmetic mean
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input("mean"));
    }
    Ok(Statistics::mean(data))
}

/// Population standard deviation (divides by `n`, not `n - 1`)
///
/// A single observation has a population SD of zero.
pub fn population_std(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::empty_input("population standard deviation"));
    }
    Ok(Statistics::population_std_dev(data))
}

/// Straight line fitted by ordinary least squares
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fit `y = slope * x + intercept` minimising squared error.
    ///
    /// Degenerate designs (a single point, or all `x` equal) give a flat line
    /// through the mean of `y`.
    pub fn fit(x: &[f64], y: &[f64]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(Error::size_mismatch(x.len(), y.len(), "linear fit"));
        }
        if x.is_empty() {
            return Err(Error::empty_input("linear fit"));
        }

        let x = DVector::from_column_slice(x);
        let y = DVector::from_column_slice(y);
        let x_mean = x.mean();
        let y_mean = y.mean();
        let xc = x.add_scalar(-x_mean);
        let yc = y.add_scalar(-y_mean);

        let sxx = xc.dot(&xc);
        let slope = if sxx > 0.0 { xc.dot(&yc) / sxx } else { 0.0 };
        let intercept = y_mean - slope * x_mean;

        if !slope.is_finite() || !intercept.is_finite() {
            return Err(Error::Computation(
                "linear fit produced a non-finite coefficient".to_string(),
            ));
        }
        Ok(Self { slope, intercept })
    }

    /// Fit against the 0-based time index `0..y.len()`
    pub fn fit_indexed(y: &[f64]) -> Result<Self> {
        let x: Vec<f64> = (0..y.len()).map(|i| i as f64).collect();
        Self::fit(&x, y)
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
