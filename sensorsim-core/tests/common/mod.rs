//! Shared fixtures for the integration tests
//!
//! - Parameter strategies that stay inside each sensor's declared ranges
//! - Helpers to build the default engine and seeded noise

#![allow(dead_code)]

use proptest::prelude::*;

use sensorsim_core::{
    generator::RngNoise,
    params::{param_slots, ParameterTriple},
    Engine, NoiseSource, SensorKind, SensorParams,
};

/// Seed used wherever a test needs reproducible noise
pub const TEST_SEED: u64 = 0x5e75_0b1d;

/// Engine with the stock configuration
pub fn default_engine() -> Engine {
    Engine::default()
}

/// Reproducible noise source
pub fn seeded_noise() -> RngNoise<rand::rngs::StdRng> {
    RngNoise::seeded(TEST_SEED)
}

/// Noise source that returns the same draw every time
#[derive(Debug, Clone, Copy)]
pub struct FixedDraw(pub f64);

impl NoiseSource for FixedDraw {
    fn draw(&mut self) -> f64 {
        self.0
    }
}

/// Any sensor kind
pub fn any_kind() -> impl Strategy<Value = SensorKind> {
    (0..SensorKind::ALL.len()).prop_map(|i| SensorKind::ALL[i])
}

/// Triple whose active slots are drawn uniformly from their ranges.
/// Reserved slots are left at zero.
pub fn in_range_triple(kind: SensorKind) -> impl Strategy<Value = ParameterTriple> {
    let slots = param_slots(kind);
    let ranges: Vec<(f64, f64)> = slots
        .iter()
        .map(|slot| slot.spec().map_or((0.0, 0.0), |spec| (spec.min, spec.max)))
        .collect();
    (0.0..=1.0f64, 0.0..=1.0f64, 0.0..=1.0f64).prop_map(move |(a, b, c)| {
        let mut triple = [0.0; 3];
        for (i, fraction) in [a, b, c].into_iter().enumerate() {
            let (min, max) = ranges[i];
            triple[i] = (min + (max - min) * fraction).clamp(min, max);
        }
        triple
    })
}

/// Valid typed parameters for any sensor
pub fn any_params() -> impl Strategy<Value = SensorParams> {
    any_kind().prop_flat_map(|kind| {
        in_range_triple(kind).prop_map(move |triple| {
            SensorParams::from_triple(kind, triple).expect("triple is in range")
        })
    })
}
