//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the random source consumed by the
//! strategies. It wraps the `rand` crate's `StdRng` and draws standard-normal
//! vectors through `rand_distr`.
//!
//! ## Example
//!
//! ```rust
//! use cmaes_elementary::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let direction = rng.fetch_standard_normal(3);
//!
//! assert_eq!(direction.len(), 3);
//! ```

use nalgebra::DVector;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

/// A wrapper around the `rand` crate's `StdRng` used for offspring sampling.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a vector of `dimension` independent standard-normal components.
    pub fn fetch_standard_normal(&mut self, dimension: usize) -> DVector<f64> {
        DVector::from_fn(dimension, |_, _| self.rng.sample(StandardNormal))
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_standard_normal_length() {
        let mut rng = RandomNumberGenerator::new();
        let result = rng.fetch_standard_normal(5);

        assert_eq!(result.len(), 5);
        assert!(result.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_fetch_standard_normal_empty() {
        let mut rng = RandomNumberGenerator::new();
        assert!(rng.fetch_standard_normal(0).is_empty());
    }

    #[test]
    fn test_seeded_streams_match() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = RandomNumberGenerator::from_seed(42);

        assert_eq!(rng1.fetch_standard_normal(8), rng2.fetch_standard_normal(8));
    }

    #[test]
    fn test_clone() {
        let mut rng1 = RandomNumberGenerator::from_seed(7);
        let mut rng2 = rng1.clone();

        assert_eq!(rng1.fetch_standard_normal(3), rng2.fetch_standard_normal(3));
    }

    #[test]
    fn test_sample_moments() {
        let mut rng = RandomNumberGenerator::from_seed(1234);
        let samples = rng.fetch_standard_normal(20_000);
        let mean = samples.mean();
        let variance = samples.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 20_000.0;

        assert!(mean.abs() < 0.05);
        assert!((variance - 1.0).abs() < 0.05);
    }
}
