//! Sources of standard-normal draws for hyperplane generation.
//!
//! Embeddings never reach for a global RNG; the caller hands in a
//! [`RandomSource`], which makes construction reproducible under test.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Produces independent draws from N(0, 1).
pub trait RandomSource {
    fn draw(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn draw(&mut self) -> f64 {
        (**self).draw()
    }
}

/// Standard-normal sampler over any `rand` generator.
pub struct GaussianSource<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> GaussianSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl GaussianSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for GaussianSource<R> {
    #[inline]
    fn draw(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }
}

/// Replays a fixed list of values, wrapping around at the end.
/// An empty list yields `0.0` forever.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for FixedSequence {
    fn draw(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}
