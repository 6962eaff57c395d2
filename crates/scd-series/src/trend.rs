//! Linear trend injection
//!
//! The trend is given as an angle in degrees; its tangent is the per-occasion
//! slope. The line pivots on the median index, so the series mean is
//! unchanged.

use scd_core::LabeledSeries;
use std::f64::consts::PI;

/// Median of the index range `0..len` (a half-integer for even lengths)
pub fn pivot(len: usize) -> f64 {
    len.saturating_sub(1) as f64 / 2.0
}

/// Per-occasion slope for an angle in degrees
pub fn slope(angle_degrees: f64) -> f64 {
    (angle_degrees * PI / 180.0).tan()
}

/// Adds a linear drift pivoted on the series midpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendInjector {
    angle_degrees: f64,
}

impl TrendInjector {
    /// No clamping: angles near ±90° give very steep slopes
    pub fn new(angle_degrees: f64) -> Self {
        Self { angle_degrees }
    }

    pub fn angle_degrees(&self) -> f64 {
        self.angle_degrees
    }

    pub fn slope(&self) -> f64 {
        slope(self.angle_degrees)
    }

    pub fn apply_in_place(&self, series: &mut [f64]) {
        let slope = self.slope();
        let pivot = pivot(series.len());
        for (i, value) in series.iter_mut().enumerate() {
            *value += (i as f64 - pivot) * slope;
        }
    }

    pub fn apply(&self, series: &[f64]) -> Vec<f64> {
        let mut trended = series.to_vec();
        self.apply_in_place(&mut trended);
        trended
    }

    /// Trend every tier of a labeled series, each on its own midpoint
    pub fn apply_to_series(&self, series: LabeledSeries) -> LabeledSeries {
        series.map_tiers(|values| self.apply_in_place(values))
    }
}

/// `series[i] + (i - pivot) * tan(angle)` for every index
pub fn apply_trend(series: &[f64], angle_degrees: f64) -> Vec<f64> {
    TrendInjector::new(angle_degrees).apply(series)
}
