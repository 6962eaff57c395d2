//! Condition orderings for alternating-treatment designs

use scd_core::{Error, PhaseKind, RandomSource, Result};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Floor for the random scheme's draw cap
pub const DEFAULT_DRAW_LIMIT: usize = 100_000;

/// Default draw cap for `nb_points` per condition
///
/// For a fair coin the chance of needing this many draws is negligible, so
/// the cap never shapes the distribution of sequence lengths in practice.
pub fn default_draw_limit(nb_points: usize) -> usize {
    DEFAULT_DRAW_LIMIT.max(nb_points.saturating_mul(64))
}

/// How the A/B order of an alternating-treatment design is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlternationScheme {
    /// A, B, A, B, ... for exactly `2 * nb_points` occasions
    Systematic,
    /// `nb_points` blocks, each a random order of {A, B}
    SemiRandom,
    /// Independent fair draws until both conditions reach `nb_points`
    ///
    /// The sequence length is variable. `draw_limit` caps the loop; `None`
    /// uses [`default_draw_limit`].
    Random { draw_limit: Option<usize> },
}

impl AlternationScheme {
    /// Fully random scheme with the default draw cap
    pub fn random() -> Self {
        Self::Random { draw_limit: None }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Systematic => "systematic",
            Self::SemiRandom => "semi-random",
            Self::Random { .. } => "random",
        }
    }

    pub(crate) fn validate(&self, nb_points: usize) -> Result<()> {
        if let Self::Random {
            draw_limit: Some(limit),
        } = *self
        {
            let minimum = nb_points.saturating_mul(2);
            if limit < minimum {
                return Err(Error::InvalidParameter(format!(
                    "draw limit {limit} is below the {minimum} draws needed for {nb_points} points per condition"
                )));
            }
        }
        Ok(())
    }
}

/// Occasions in a balanced sequence: `2 * nb_points`, checked
pub fn occasion_count(nb_points: usize) -> Result<usize> {
    nb_points.checked_mul(2).ok_or_else(|| {
        Error::InvalidParameter(format!(
            "{nb_points} points per condition overflows the occasion count"
        ))
    })
}

/// A, B, A, B, ... with `2 * nb_points` labels
pub fn systematic(nb_points: usize) -> Result<Vec<PhaseKind>> {
    Ok((0..occasion_count(nb_points)?)
        .map(|i| if i % 2 == 0 { PhaseKind::A } else { PhaseKind::B })
        .collect())
}

/// `nb_points` independently ordered {A, B} pairs
pub fn semi_random<R: RandomSource + ?Sized>(
    nb_points: usize,
    rng: &mut R,
) -> Result<Vec<PhaseKind>> {
    let mut labels = Vec::with_capacity(occasion_count(nb_points)?);
    for _ in 0..nb_points {
        let first = rng.draw_label();
        labels.push(first);
        labels.push(first.other());
    }
    Ok(labels)
}

/// Single draws until both conditions have at least `nb_points` occasions
///
/// Stops at the first draw that satisfies both counts.
pub fn random<R: RandomSource + ?Sized>(
    nb_points: usize,
    draw_limit: usize,
    rng: &mut R,
) -> Result<Vec<PhaseKind>> {
    let mut labels = Vec::with_capacity(occasion_count(nb_points)?.min(draw_limit));
    let (mut count_a, mut count_b) = (0, 0);

    while count_a < nb_points || count_b < nb_points {
        if labels.len() >= draw_limit {
            return Err(Error::IterationLimit { limit: draw_limit });
        }
        let label = rng.draw_label();
        match label {
            PhaseKind::A => count_a += 1,
            PhaseKind::B => count_b += 1,
        }
        labels.push(label);
    }

    trace!(
        draws = labels.len(),
        count_a,
        count_b,
        "random alternation stopped"
    );
    Ok(labels)
}

/// Label sequence for `scheme` with at least `nb_points` per condition
pub fn alternation_labels<R: RandomSource + ?Sized>(
    scheme: AlternationScheme,
    nb_points: usize,
    rng: &mut R,
) -> Result<Vec<PhaseKind>> {
    match scheme {
        AlternationScheme::Systematic => systematic(nb_points),
        AlternationScheme::SemiRandom => semi_random(nb_points, rng),
        AlternationScheme::Random { draw_limit } => {
            let limit = draw_limit.unwrap_or_else(|| default_draw_limit(nb_points));
            random(nb_points, limit, rng)
        }
    }
}
