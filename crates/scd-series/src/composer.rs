//! Phase composition
//!
//! Every design goes through the same three steps per tier: lay out the phase
//! slots, draw one AR(1) series of matching length and add the mean shift to
//! treatment slots, then apply the trend over the whole tier. Topologies only
//! differ in their layout.

use crate::design::{Layout, PhaseSpec};
use crate::generator::{GenerationParameters, TimeSeriesGenerator};
use crate::trend::TrendInjector;
use scd_core::{Error, LabeledSeries, Observation, RandomSource, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Process shape shared by every tier of a composed design
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesParameters {
    /// Lag-1 autocorrelation
    pub autocorrelation: f64,
    /// Level added to every point
    pub constant: f64,
    /// Trend angle in degrees
    pub trend_degrees: f64,
}

impl Default for SeriesParameters {
    fn default() -> Self {
        Self {
            autocorrelation: 0.0,
            constant: 10.0,
            trend_degrees: 0.0,
        }
    }
}

impl SeriesParameters {
    pub fn with_autocorrelation(mut self, autocorrelation: f64) -> Self {
        self.autocorrelation = autocorrelation;
        self
    }

    pub fn with_constant(mut self, constant: f64) -> Self {
        self.constant = constant;
        self
    }

    pub fn with_trend(mut self, trend_degrees: f64) -> Self {
        self.trend_degrees = trend_degrees;
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.trend_degrees.is_finite() {
            return Err(Error::non_finite("Trend angle"));
        }
        // Autocorrelation and constant are checked by GenerationParameters
        GenerationParameters::new(1, self.autocorrelation, self.constant).map(|_| ())
    }
}

/// Builds labeled series for any [`PhaseSpec`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseComposer {
    params: SeriesParameters,
}

impl PhaseComposer {
    pub fn new(params: SeriesParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn parameters(&self) -> &SeriesParameters {
        &self.params
    }

    /// Draw one labeled series for `spec`
    #[instrument(skip(self, spec, rng), fields(design = %spec.kind(), smd = spec.smd()))]
    pub fn compose<R: RandomSource + ?Sized>(
        &self,
        spec: &PhaseSpec,
        rng: &mut R,
    ) -> Result<LabeledSeries> {
        let layout = spec.design().layout(rng)?;
        let trend = TrendInjector::new(self.params.trend_degrees);

        let mut observations = Vec::with_capacity(total_len(&layout));
        for (tier, slots) in layout.iter().enumerate() {
            let params = GenerationParameters::new(
                slots.len(),
                self.params.autocorrelation,
                self.params.constant,
            )?;
            let mut values = TimeSeriesGenerator::new(params).generate(rng);
            for (value, slot) in values.iter_mut().zip(slots) {
                if slot.phase.is_treatment() {
                    *value += spec.smd();
                }
            }
            trend.apply_in_place(&mut values);

            observations.extend(
                slots
                    .iter()
                    .zip(values)
                    .map(|(slot, value)| Observation::new(slot.phase, tier, slot.occurrence, value)),
            );
        }

        debug!(
            points = observations.len(),
            tiers = layout.len(),
            "composed series"
        );
        LabeledSeries::new(spec.kind(), observations)
    }

    /// Label an already generated flat buffer and add the mean shift
    ///
    /// Only designs with a fixed layout can be assembled; tiers are read from
    /// `values` back to back. No trend is applied; use
    /// [`TrendInjector::apply_to_series`] afterwards if needed.
    pub fn assemble(spec: &PhaseSpec, values: &[f64]) -> Result<LabeledSeries> {
        let layout = spec.design().fixed_layout().ok_or_else(|| {
            Error::InvalidInput(format!(
                "{} layouts are drawn at random and cannot be assembled from a flat series",
                spec.kind()
            ))
        })?;

        let expected = total_len(&layout);
        if values.len() != expected {
            return Err(Error::size_mismatch(expected, values.len(), "flat series"));
        }

        let observations = layout
            .iter()
            .enumerate()
            .flat_map(|(tier, slots)| slots.iter().map(move |slot| (tier, *slot)))
            .zip(values)
            .map(|((tier, slot), &value)| {
                let shift = if slot.phase.is_treatment() { spec.smd() } else { 0.0 };
                Observation::new(slot.phase, tier, slot.occurrence, value + shift)
            })
            .collect();

        LabeledSeries::new(spec.kind(), observations)
    }
}

fn total_len(layout: &Layout) -> usize {
    layout.iter().map(Vec::len).sum()
}
