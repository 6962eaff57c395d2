//! Shared vocabulary: phase kinds, design kinds and verdicts

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Baseline (A) or intervention (B) phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PhaseKind {
    /// Baseline
    A,
    /// Intervention (treatment); receives the mean shift
    B,
}

impl PhaseKind {
    /// The other phase kind
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Whether this is the treatment phase
    pub fn is_treatment(self) -> bool {
        self == Self::B
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-case design topologies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesignKind {
    /// One baseline run followed by one intervention run
    Ab,
    /// Reversal design: A1, B1, A2, B2
    Abab,
    /// Rapid alternation between conditions
    AlternatingTreatment,
    /// Several AB tiers with staggered intervention onset
    MultipleBaseline,
}

impl DesignKind {
    /// Get the name of the design
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ab => "AB",
            Self::Abab => "ABAB",
            Self::AlternatingTreatment => "Alternating Treatment",
            Self::MultipleBaseline => "Multiple Baseline",
        }
    }
}

impl fmt::Display for DesignKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binary decision for one baseline/intervention pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Verdict {
    NoEffect = 0,
    Effect = 1,
}

impl Verdict {
    /// Ground truth for a simulated series: any positive mean shift is a true effect
    pub fn from_smd(smd: f64) -> Self {
        if smd > 0.0 {
            Self::Effect
        } else {
            Self::NoEffect
        }
    }

    pub fn is_effect(self) -> bool {
        self == Self::Effect
    }
}

impl From<Verdict> for u8 {
    fn from(verdict: Verdict) -> Self {
        verdict as u8
    }
}

impl From<bool> for Verdict {
    fn from(effect: bool) -> Self {
        if effect {
            Self::Effect
        } else {
            Self::NoEffect
        }
    }
}

impl TryFrom<u8> for Verdict {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::NoEffect),
            1 => Ok(Self::Effect),
            other => Err(Error::InvalidInput(format!(
                "verdict must be 0 or 1, got {other}"
            ))),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoEffect => write!(f, "no effect"),
            Self::Effect => write!(f, "effect"),
        }
    }
}
