//! First-order autoregressive series generation
//!
//! `x[0] ~ N(0, 1)`, `x[i] = a * x[i - 1] + e[i]` with `e[i] ~ N(0, 1)`. The
//! constant is added after the recursion, so it shifts the level without
//! feeding back through the autocorrelation.

use scd_core::{Error, RandomSource, Result};
use serde::{Deserialize, Serialize};

/// Shape of one AR(1) draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    length: usize,
    autocorrelation: f64,
    constant: f64,
}

impl GenerationParameters {
    /// Validate and build. `length` must be at least 1 and the coefficients
    /// finite. Values of `autocorrelation` at or beyond ±1 are accepted but
    /// give a non-stationary process.
    pub fn new(length: usize, autocorrelation: f64, constant: f64) -> Result<Self> {
        if length == 0 {
            return Err(Error::zero_length("Series length"));
        }
        if !autocorrelation.is_finite() {
            return Err(Error::non_finite("Autocorrelation"));
        }
        if !constant.is_finite() {
            return Err(Error::non_finite("Constant"));
        }
        Ok(Self {
            length,
            autocorrelation,
            constant,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn autocorrelation(&self) -> f64 {
        self.autocorrelation
    }

    pub fn constant(&self) -> f64 {
        self.constant
    }
}

/// AR(1) series generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSeriesGenerator {
    params: GenerationParameters,
}

impl TimeSeriesGenerator {
    pub fn new(params: GenerationParameters) -> Self {
        Self { params }
    }

    pub fn parameters(&self) -> &GenerationParameters {
        &self.params
    }

    /// Draw one realisation; consumes exactly `length` normal draws
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let GenerationParameters {
            length,
            autocorrelation,
            constant,
        } = self.params;

        let mut values = Vec::with_capacity(length);
        let mut previous = rng.standard_normal();
        values.push(previous);
        for _ in 1..length {
            previous = autocorrelation * previous + rng.standard_normal();
            values.push(previous);
        }

        for value in &mut values {
            *value += constant;
        }
        values
    }
}

/// Generate `n` AR(1) points with autocorrelation `a` and constant `ct`
pub fn generate<R: RandomSource + ?Sized>(n: usize, a: f64, ct: f64, rng: &mut R) -> Result<Vec<f64>> {
    let params = GenerationParameters::new(n, a, ct)?;
    Ok(TimeSeriesGenerator::new(params).generate(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use scd_core::{seeded_rng, PhaseKind};

    /// Replays a fixed list of normal draws
    struct Scripted {
        draws: Vec<f64>,
        next: usize,
    }

    impl RandomSource for Scripted {
        fn standard_normal(&mut self) -> f64 {
            let value = self.draws[self.next];
            self.next += 1;
            value
        }

        fn draw_label(&mut self) -> PhaseKind {
            PhaseKind::A
        }
    }

    #[test]
    fn test_zero_length_rejected() {
        let mut rng = seeded_rng(1);
        assert!(matches!(
            generate(0, 0.2, 10.0, &mut rng),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_non_finite_parameters_rejected() {
        assert!(GenerationParameters::new(5, f64::NAN, 0.0).is_err());
        assert!(GenerationParameters::new(5, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_recursion_with_scripted_noise() {
        let mut rng = Scripted {
            draws: vec![1.0, 0.5, -1.0, 2.0],
            next: 0,
        };
        let series = generate(4, 0.5, 10.0, &mut rng).unwrap();

        // x = [1.0, 1.0, -0.5, 1.75] before the constant
        let expected = [11.0, 11.0, 9.5, 11.75];
        for (got, want) in series.iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-12);
        }
        assert_eq!(rng.next, 4);
    }

    #[test]
    fn test_constant_is_not_autocorrelated() {
        // With zero noise the constant must appear once, not accumulate
        let mut rng = Scripted {
            draws: vec![0.0; 6],
            next: 0,
        };
        let series = generate(6, 0.9, 3.0, &mut rng).unwrap();
        assert!(series.iter().all(|&v| v == 3.0));
    }

    #[test]
    fn test_single_point() {
        let mut rng = seeded_rng(3);
        let series = generate(1, 0.4, 10.0, &mut rng).unwrap();
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = generate(20, 0.3, 10.0, &mut seeded_rng(9)).unwrap();
        let b = generate(20, 0.3, 10.0, &mut seeded_rng(9)).unwrap();
        assert_eq!(a, b);
    }
}
