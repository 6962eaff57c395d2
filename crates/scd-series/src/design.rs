//! Phase topologies and their validated specifications

use crate::alternation::{self, AlternationScheme};
use scd_core::{DesignKind, Error, PhaseKind, RandomSource, Result};
use serde::{Deserialize, Serialize};

/// One measurement slot in a phase layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseSlot {
    pub phase: PhaseKind,
    /// 1-based occurrence of this phase kind within the tier
    pub occurrence: usize,
}

/// Per-tier phase layouts, outer index is the tier
pub type Layout = Vec<Vec<PhaseSlot>>;

/// Phase topology of a single-case design
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Design {
    /// `a` baseline points then `b` intervention points
    Ab { a: usize, b: usize },
    /// A1, B1, A2, B2 runs cut from one continuous series
    Abab {
        a1: usize,
        b1: usize,
        a2: usize,
        b2: usize,
    },
    /// At least `nb_points` occasions per condition, ordered by `scheme`
    AlternatingTreatment {
        nb_points: usize,
        scheme: AlternationScheme,
    },
    /// `tiers` independent AB series; tier `k` has a baseline of
    /// `nb_points_a + k * stagger` points and `nb_points_b` intervention points
    MultipleBaseline {
        nb_points_a: usize,
        nb_points_b: usize,
        stagger: usize,
        tiers: usize,
    },
}

impl Design {
    pub fn kind(&self) -> DesignKind {
        match self {
            Self::Ab { .. } => DesignKind::Ab,
            Self::Abab { .. } => DesignKind::Abab,
            Self::AlternatingTreatment { .. } => DesignKind::AlternatingTreatment,
            Self::MultipleBaseline { .. } => DesignKind::MultipleBaseline,
        }
    }

    pub fn tier_count(&self) -> usize {
        match self {
            Self::MultipleBaseline { tiers, .. } => *tiers,
            _ => 1,
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            Self::Ab { a, b } => {
                require_points(a, "Phase A")?;
                require_points(b, "Phase B")?;
            }
            Self::Abab { a1, b1, a2, b2 } => {
                require_points(a1, "Phase A1")?;
                require_points(b1, "Phase B1")?;
                require_points(a2, "Phase A2")?;
                require_points(b2, "Phase B2")?;
            }
            Self::AlternatingTreatment { nb_points, scheme } => {
                require_points(nb_points, "Points per condition")?;
                scheme.validate(nb_points)?;
            }
            Self::MultipleBaseline {
                nb_points_a,
                nb_points_b,
                tiers,
                ..
            } => {
                require_points(nb_points_a, "Phase A")?;
                require_points(nb_points_b, "Phase B")?;
                require_points(tiers, "Tier count")?;
            }
        }

        self.longest_tier()
            .and_then(|len| len.checked_mul(self.tier_count()))
            .map(|_| ())
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "{} phase lengths overflow the series length",
                    self.kind()
                ))
            })
    }

    /// Points in the longest tier (fixed-length schemes), `None` on overflow
    fn longest_tier(&self) -> Option<usize> {
        match *self {
            Self::Ab { a, b } => a.checked_add(b),
            Self::Abab { a1, b1, a2, b2 } => a1.checked_add(b1)?.checked_add(a2)?.checked_add(b2),
            Self::AlternatingTreatment { nb_points, .. } => nb_points.checked_mul(2),
            Self::MultipleBaseline {
                nb_points_a,
                nb_points_b,
                stagger,
                tiers,
            } => tiers
                .checked_sub(1)?
                .checked_mul(stagger)?
                .checked_add(nb_points_a)?
                .checked_add(nb_points_b),
        }
    }

    /// Baseline length of tier `k` (multiple-baseline stagger applied)
    pub fn baseline_length(&self, tier: usize) -> Option<usize> {
        match *self {
            Self::Ab { a, .. } if tier == 0 => Some(a),
            Self::Abab { a1, .. } if tier == 0 => Some(a1),
            Self::MultipleBaseline {
                nb_points_a,
                stagger,
                tiers,
                ..
            } if tier < tiers => tier.checked_mul(stagger)?.checked_add(nb_points_a),
            _ => None,
        }
    }

    /// Layout known without drawing any labels, `None` for the random
    /// alternation schemes and for designs that fail validation
    pub fn fixed_layout(&self) -> Option<Layout> {
        self.validate().ok()?;
        match *self {
            Self::Ab { a, b } => Some(vec![runs(&[(PhaseKind::A, 1, a), (PhaseKind::B, 1, b)])]),
            Self::Abab { a1, b1, a2, b2 } => Some(vec![runs(&[
                (PhaseKind::A, 1, a1),
                (PhaseKind::B, 1, b1),
                (PhaseKind::A, 2, a2),
                (PhaseKind::B, 2, b2),
            ])]),
            Self::AlternatingTreatment {
                nb_points,
                scheme: AlternationScheme::Systematic,
            } => Some(vec![single_occurrence(
                alternation::systematic(nb_points).ok()?,
            )]),
            Self::AlternatingTreatment { .. } => None,
            Self::MultipleBaseline {
                nb_points_a,
                nb_points_b,
                stagger,
                tiers,
            } => Some(
                (0..tiers)
                    .map(|k| {
                        runs(&[
                            (PhaseKind::A, 1, nb_points_a + k * stagger),
                            (PhaseKind::B, 1, nb_points_b),
                        ])
                    })
                    .collect(),
            ),
        }
    }

    /// Layout for one realisation, drawing alternation labels when needed
    pub fn layout<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Layout> {
        self.validate()?;
        if let Some(layout) = self.fixed_layout() {
            return Ok(layout);
        }
        match *self {
            Self::AlternatingTreatment { nb_points, scheme } => {
                let labels = alternation::alternation_labels(scheme, nb_points, rng)?;
                Ok(vec![single_occurrence(labels)])
            }
            _ => Err(Error::Computation(format!(
                "{} design has no label draw",
                self.kind()
            ))),
        }
    }
}

fn require_points(value: usize, what: &str) -> Result<()> {
    if value == 0 {
        return Err(Error::zero_length(what));
    }
    Ok(())
}

fn runs(spec: &[(PhaseKind, usize, usize)]) -> Vec<PhaseSlot> {
    let total = spec.iter().map(|&(_, _, len)| len).sum();
    let mut slots = Vec::with_capacity(total);
    for &(phase, occurrence, len) in spec {
        slots.extend(std::iter::repeat(PhaseSlot { phase, occurrence }).take(len));
    }
    slots
}

fn single_occurrence(labels: Vec<PhaseKind>) -> Vec<PhaseSlot> {
    labels
        .into_iter()
        .map(|phase| PhaseSlot {
            phase,
            occurrence: 1,
        })
        .collect()
}

/// A design plus the standardized mean difference added to treatment phases
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhaseSpec {
    design: Design,
    smd: f64,
}

impl PhaseSpec {
    /// Validate phase lengths and effect size up front
    pub fn new(design: Design, smd: f64) -> Result<Self> {
        design.validate()?;
        if !smd.is_finite() {
            return Err(Error::non_finite("Standardized mean difference"));
        }
        Ok(Self { design, smd })
    }

    pub fn ab(a: usize, b: usize, smd: f64) -> Result<Self> {
        Self::new(Design::Ab { a, b }, smd)
    }

    pub fn abab(a1: usize, b1: usize, a2: usize, b2: usize, smd: f64) -> Result<Self> {
        Self::new(Design::Abab { a1, b1, a2, b2 }, smd)
    }

    pub fn alternating(nb_points: usize, scheme: AlternationScheme, smd: f64) -> Result<Self> {
        Self::new(Design::AlternatingTreatment { nb_points, scheme }, smd)
    }

    pub fn multiple_baseline(
        nb_points_a: usize,
        nb_points_b: usize,
        stagger: usize,
        tiers: usize,
        smd: f64,
    ) -> Result<Self> {
        Self::new(
            Design::MultipleBaseline {
                nb_points_a,
                nb_points_b,
                stagger,
                tiers,
            },
            smd,
        )
    }

    pub fn design(&self) -> &Design {
        &self.design
    }

    pub fn kind(&self) -> DesignKind {
        self.design.kind()
    }

    pub fn smd(&self) -> f64 {
        self.smd
    }
}
