//! Core traits for the simulation engine
//!
//! These traits define the seams between the engine and the things that vary:
//! the physics of each sensor and the source of randomness. Keep them
//! simple - the engine only needs a handful of operations from each.

use crate::sensor::SensorKind;

/// Source of uniform random draws in `[0, 1)` for sensor noise.
///
/// Generation takes `&mut dyn NoiseSource` so callers decide between
/// reproducible (seeded) and interactive (thread-local) randomness, or no
/// noise at all.
pub trait NoiseSource {
    /// Next uniform draw in `[0, 1)`
    fn draw(&mut self) -> f64;

    /// Draw centered on zero, in `[-0.5, 0.5)`
    fn centered(&mut self) -> f64 {
        self.draw() - 0.5
    }
}

/// Physics model of one sensor, bound to its parameter values.
///
/// A sample is built in three layers, each added on top of the previous:
///
/// ```text
/// signal = physics(t)
/// signal += disturbance(signal, t)
/// signal += noise(signal, draw - 0.5)
/// ```
pub trait SensorModel {
    /// Which sensor this model simulates
    fn kind(&self) -> SensorKind;

    /// Deterministic physics term at time `t` (seconds)
    fn physics(&self, t: f64) -> f64;

    /// Periodic disturbance added to the physics term.
    ///
    /// Receives the physics term so proportional disturbances can scale with
    /// the signal. Most sensors have none.
    fn disturbance(&self, _signal: f64, _t: f64) -> f64 {
        0.0
    }

    /// Noise added on top of the disturbed signal, given a centered draw in
    /// `[-0.5, 0.5)`
    fn noise(&self, signal: f64, centered_draw: f64) -> f64;

    /// Noise-free sample: physics plus disturbance
    fn clean_sample(&self, t: f64) -> f64 {
        let signal = self.physics(t);
        signal + self.disturbance(signal, t)
    }

    /// Full sample including noise
    fn sample(&self, t: f64, noise: &mut dyn NoiseSource) -> f64 {
        let signal = self.clean_sample(t);
        signal + self.noise(signal, noise.centered())
    }
}

/// Trait for values that can be checked for numeric validity
pub trait Validatable {
    /// Check if the value is usable (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
