//! Labeled measurement series
//!
//! A [`LabeledSeries`] is the hand-off format between the phase composer, the
//! CDC evaluator and any rendering or export layer. Every point carries a
//! structured phase record; the familiar `A`, `B1`, `A2` labels are rendered
//! from it on demand and never parsed back.

use crate::{DesignKind, Error, PhaseKind, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// One measurement occasion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Baseline or intervention
    pub phase: PhaseKind,
    /// 0-based tier (always 0 outside multiple-baseline designs)
    pub tier: usize,
    /// 1-based occurrence of this phase kind within the tier (ABAB: A1/A2)
    pub occurrence: usize,
    /// Measured value
    pub value: f64,
}

impl Observation {
    pub fn new(phase: PhaseKind, tier: usize, occurrence: usize, value: f64) -> Self {
        Self {
            phase,
            tier,
            occurrence,
            value,
        }
    }

    /// Whether two observations belong to the same contiguous phase run
    fn same_run(&self, other: &Self) -> bool {
        self.tier == other.tier && self.phase == other.phase && self.occurrence == other.occurrence
    }
}

/// Phase runs every tier of a fixed-order design must follow, as
/// `(phase, occurrence)`; `None` when runs may interleave
fn required_runs(design: DesignKind) -> Option<&'static [(PhaseKind, usize)]> {
    match design {
        DesignKind::Ab | DesignKind::MultipleBaseline => {
            Some(&[(PhaseKind::A, 1), (PhaseKind::B, 1)])
        }
        DesignKind::Abab => Some(&[
            (PhaseKind::A, 1),
            (PhaseKind::B, 1),
            (PhaseKind::A, 2),
            (PhaseKind::B, 2),
        ]),
        DesignKind::AlternatingTreatment => None,
    }
}

fn render_runs(runs: &[(PhaseKind, usize)]) -> String {
    let mut out = String::new();
    for (i, (phase, occurrence)) in runs.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{phase}{occurrence}");
    }
    out
}

/// Ordered sequence of labeled observations produced by a design composer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLabeledSeries")]
pub struct LabeledSeries {
    design: DesignKind,
    tier_count: usize,
    observations: Vec<Observation>,
}

/// Unchecked wire form; deserialization goes through [`LabeledSeries::new`]
#[derive(Deserialize)]
struct RawLabeledSeries {
    design: DesignKind,
    tier_count: usize,
    observations: Vec<Observation>,
}

impl TryFrom<RawLabeledSeries> for LabeledSeries {
    type Error = Error;

    fn try_from(raw: RawLabeledSeries) -> Result<Self> {
        let series = Self::new(raw.design, raw.observations)?;
        if series.tier_count != raw.tier_count {
            return Err(Error::InvalidInput(format!(
                "tier_count {} does not match the {} tiers present",
                raw.tier_count, series.tier_count
            )));
        }
        Ok(series)
    }
}

impl LabeledSeries {
    /// Create a series, checking that it is non-empty, that tiers are
    /// contiguous and numbered `0..tier_count` in order, and that each tier
    /// follows its design's phase runs (A then B for AB and multiple-baseline
    /// tiers, A1 B1 A2 B2 for ABAB). Alternating-treatment series may
    /// interleave freely but use occurrence 1 throughout.
    pub fn new(design: DesignKind, observations: Vec<Observation>) -> Result<Self> {
        let Some(last) = observations.last() else {
            return Err(Error::empty_input("labeled series"));
        };
        let tier_count = last.tier + 1;

        let mut expected_tier = 0;
        for obs in &observations {
            if obs.tier == expected_tier + 1 {
                expected_tier += 1;
            } else if obs.tier != expected_tier {
                return Err(Error::InvalidInput(format!(
                    "tier {} appears out of order (expected {} or {})",
                    obs.tier,
                    expected_tier,
                    expected_tier + 1
                )));
            }
        }

        if tier_count > 1 && design != DesignKind::MultipleBaseline {
            return Err(Error::InvalidInput(format!(
                "{design} series cannot have {tier_count} tiers"
            )));
        }

        for (tier, slice) in observations.chunk_by(|a, b| a.tier == b.tier).enumerate() {
            check_runs(design, tier, slice)?;
        }

        Ok(Self {
            design,
            tier_count,
            observations,
        })
    }

    pub fn design(&self) -> DesignKind {
        self.design
    }

    /// Number of tiers; carried explicitly rather than recovered from labels
    pub fn tier_count(&self) -> usize {
        self.tier_count
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always false: construction rejects empty series
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    /// Render the textual label of one observation
    pub fn label_of(&self, obs: &Observation) -> String {
        match self.design {
            DesignKind::Ab | DesignKind::AlternatingTreatment => obs.phase.to_string(),
            DesignKind::Abab => format!("{}{}", obs.phase, obs.occurrence),
            DesignKind::MultipleBaseline => format!("{}{}", obs.phase, obs.tier + 1),
        }
    }

    /// Textual labels in series order (`A`, `B`, `A1`, `B2`, ...)
    pub fn labels(&self) -> Vec<String> {
        self.observations.iter().map(|o| self.label_of(o)).collect()
    }

    /// `(label, value)` pairs in series order
    pub fn pairs(&self) -> Vec<(String, f64)> {
        self.observations
            .iter()
            .map(|o| (self.label_of(o), o.value))
            .collect()
    }

    /// Observations of tier `k`, if it exists
    pub fn tier(&self, k: usize) -> Option<&[Observation]> {
        self.tiers().nth(k)
    }

    /// Iterate over tiers as contiguous slices
    pub fn tiers(&self) -> impl Iterator<Item = &[Observation]> {
        self.observations.chunk_by(|a, b| a.tier == b.tier)
    }

    /// Values of every point in the given phase kind, time-ordered
    pub fn phase_values(&self, kind: PhaseKind) -> Vec<f64> {
        phase_values(&self.observations, kind)
    }

    /// Baseline and intervention values, each time-ordered
    pub fn split_phases(&self) -> (Vec<f64>, Vec<f64>) {
        split_phases(&self.observations)
    }

    /// Indices at which a new phase run starts within the same tier
    ///
    /// These are the positions where a renderer draws a phase-change marker
    /// (between index `i - 1` and `i`). Tier boundaries are not included.
    pub fn phase_changes(&self) -> Vec<usize> {
        self.observations
            .windows(2)
            .enumerate()
            .filter(|(_, w)| w[0].tier == w[1].tier && !w[0].same_run(&w[1]))
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// Apply `f` to the values of each tier in turn, keeping labels intact
    pub fn map_tiers<F>(mut self, mut f: F) -> Self
    where
        F: FnMut(&mut [f64]),
    {
        let mut start = 0;
        while start < self.observations.len() {
            let tier = self.observations[start].tier;
            let end = self.observations[start..]
                .iter()
                .position(|o| o.tier != tier)
                .map_or(self.observations.len(), |offset| start + offset);

            let mut values: Vec<f64> = self.observations[start..end]
                .iter()
                .map(|o| o.value)
                .collect();
            f(&mut values);
            for (obs, value) in self.observations[start..end].iter_mut().zip(values) {
                obs.value = value;
            }
            start = end;
        }
        self
    }
}

fn check_runs(design: DesignKind, tier: usize, slice: &[Observation]) -> Result<()> {
    let Some(required) = required_runs(design) else {
        if slice.iter().any(|o| o.occurrence != 1) {
            return Err(Error::InvalidInput(format!(
                "{design} observations use occurrence 1 only"
            )));
        }
        return Ok(());
    };

    let found: Vec<(PhaseKind, usize)> = slice
        .chunk_by(|a, b| a.same_run(b))
        .map(|run| (run[0].phase, run[0].occurrence))
        .collect();
    if found != required {
        return Err(Error::InvalidInput(format!(
            "{design} tier {tier} has phase runs [{}], expected [{}]",
            render_runs(&found),
            render_runs(required)
        )));
    }
    Ok(())
}

/// Values of the given phase kind in a slice of observations
pub fn phase_values(observations: &[Observation], kind: PhaseKind) -> Vec<f64> {
    observations
        .iter()
        .filter(|o| o.phase == kind)
        .map(|o| o.value)
        .collect()
}

/// Split a slice of observations into (baseline, intervention) values
pub fn split_phases(observations: &[Observation]) -> (Vec<f64>, Vec<f64>) {
    (
        phase_values(observations, PhaseKind::A),
        phase_values(observations, PhaseKind::B),
    )
}
