//! Random sources
//!
//! Generation only ever needs two kinds of draws: standard-normal noise and a
//! fair choice between the two phase labels. [`RandomSource`] captures exactly
//! that, so any `rand::Rng` works out of the box and tests can script draws.

use crate::PhaseKind;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// Stream of independent draws consumed by the generators
pub trait RandomSource {
    /// One draw from N(0, 1)
    fn standard_normal(&mut self) -> f64;

    /// One fair draw from {A, B}
    fn draw_label(&mut self) -> PhaseKind;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn standard_normal(&mut self) -> f64 {
        self.sample::<f64, _>(StandardNormal)
    }

    fn draw_label(&mut self) -> PhaseKind {
        if self.gen_bool(0.5) {
            PhaseKind::A
        } else {
            PhaseKind::B
        }
    }
}

/// Reproducible source for fixtures and single-threaded runs
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Independent stream `stream` under a shared seed
///
/// Parallel workers each take their own stream, so results do not depend on
/// scheduling order.
pub fn stream_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}
