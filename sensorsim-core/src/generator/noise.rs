//! Noise sources
//!
//! - [`RngNoise`]: any `rand` generator. Seed it for reproducible series,
//!   use the thread-local generator for interactive sessions.
//! - [`Silent`]: no noise. Always draws the midpoint, so the centered draw
//!   is exactly zero and samples equal their noise-free value.

use rand::{rngs::StdRng, rngs::ThreadRng, Rng, RngCore, SeedableRng};

use crate::traits::NoiseSource;

/// Noise drawn from a `rand` generator
#[derive(Debug, Clone)]
pub struct RngNoise<R: RngCore> {
    rng: R,
}

impl<R: RngCore> RngNoise<R> {
    /// Wrap an existing generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Unwrap the generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngNoise<StdRng> {
    /// Reproducible noise: the same seed always yields the same draws
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl RngNoise<ThreadRng> {
    /// Thread-local, non-reproducible noise
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: RngCore> NoiseSource for RngNoise<R> {
    fn draw(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Noise source that adds nothing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Silent;

impl NoiseSource for Silent {
    fn draw(&mut self) -> f64 {
        0.5
    }
}
