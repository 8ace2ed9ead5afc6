//! Property-based tests over the whole parameter space

mod common;

use proptest::prelude::*;

use sensorsim_core::{
    generator::RngNoise,
    params::{param_slots, PARAM_SLOTS},
    poles::{expected_pole_radius, z_domain_poles},
    spectrum::SpectrumAnalyzer,
    ParameterStore, SensorParams, SignalGenerator, SimulationError,
};

use common::{any_kind, any_params, in_range_triple};

proptest! {
    #[test]
    fn store_values_stay_in_range(
        kind in any_kind(),
        slot in 0..PARAM_SLOTS,
        value in -1e6..1e6f64,
        position in 0u32..2000,
    ) {
        let mut store = ParameterStore::new();
        match param_slots(kind)[slot].spec() {
            Some(spec) => {
                let stored = store.set(kind, slot, value).unwrap();
                prop_assert!(spec.contains(stored));
                let stored = store.set_from_slider(kind, slot, position).unwrap();
                prop_assert!(spec.contains(stored));
                prop_assert!(store.slider_position(kind, slot).unwrap() <= 1000);
            }
            None => {
                let rejected = matches!(
                    store.set(kind, slot, value),
                    Err(SimulationError::ReservedParameter { .. })
                );
                prop_assert!(rejected);
            }
        }
        prop_assert!(SensorParams::from_triple(kind, store.triple(kind)).is_ok());
    }

    #[test]
    fn generated_samples_are_finite(params in any_params(), seed in any::<u64>()) {
        let series = SignalGenerator::default()
            .generate(&params, &mut RngNoise::seeded(seed))
            .unwrap();
        prop_assert_eq!(series.len(), 200);
        prop_assert!(series.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn generation_is_deterministic_per_seed(params in any_params(), seed in any::<u64>()) {
        let generator = SignalGenerator::default();
        let a = generator.generate(&params, &mut RngNoise::seeded(seed)).unwrap();
        let b = generator.generate(&params, &mut RngNoise::seeded(seed)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn spectrum_magnitudes_are_non_negative(params in any_params(), seed in any::<u64>()) {
        let series = SignalGenerator::default()
            .generate(&params, &mut RngNoise::seeded(seed))
            .unwrap();
        let spectrum = SpectrumAnalyzer::default().analyze(&series);
        prop_assert_eq!(spectrum.len(), 128);
        prop_assert!(spectrum.magnitudes().all(|m| m >= 0.0 && m.is_finite()));
    }

    #[test]
    fn z_poles_are_stable(kind in any_kind(), rate in 1.0..10_000.0f64) {
        let period = 1.0 / rate;
        let (poles, _) = z_domain_poles(kind, period).unwrap();
        let radius = expected_pole_radius(period);
        for pole in &poles {
            prop_assert!((pole.norm() - radius).abs() < 1e-12);
            prop_assert!(pole.norm() < 1.0);
        }
    }

    #[test]
    fn strict_and_clamped_agree_in_range(
        (kind, triple) in any_kind().prop_flat_map(|kind| (Just(kind), in_range_triple(kind)))
    ) {
        let strict = SensorParams::from_triple(kind, triple).unwrap();
        let clamped = SensorParams::clamped_from_triple(kind, triple).unwrap();
        prop_assert_eq!(strict, clamped);
    }
}
