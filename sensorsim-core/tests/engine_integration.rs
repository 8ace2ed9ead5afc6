//! End-to-end tests for the simulation engine
//!
//! Drives the engine the way an interactive front end does: switch sensors,
//! move sliders, regenerate.

mod common;

use sensorsim_core::{
    generator::{RngNoise, Silent},
    poles::PoleZeroMapper,
    Engine, EngineConfig, ParameterStore, SensorKind, SignalGenerator, SimulationError,
    SpectrumAnalyzer,
};

use common::{default_engine, seeded_noise, TEST_SEED};

#[test]
fn frame_matches_separate_components() {
    let engine = default_engine();
    let store = ParameterStore::new();

    for kind in SensorKind::ALL {
        let frame = engine.simulate_stored(&store, kind, &mut seeded_noise()).unwrap();

        let params = store.params(kind);
        let series = SignalGenerator::default()
            .generate(&params, &mut RngNoise::seeded(TEST_SEED))
            .unwrap();
        let spectrum = SpectrumAnalyzer::default().analyze(&series);
        let mapper = PoleZeroMapper::default();

        assert_eq!(frame.series, series, "{kind}");
        assert_eq!(frame.spectrum, spectrum, "{kind}");
        assert_eq!(frame.s_plane, mapper.s_plane(kind), "{kind}");
        assert_eq!(frame.z_plane, mapper.z_plane(kind), "{kind}");
    }
}

#[test]
fn slider_session() {
    let engine = default_engine();
    let mut store = ParameterStore::new();

    // Full-scale slider on the thermocouple
    let value = store.set_from_slider(SensorKind::Thermocouple, 0, 1000).unwrap();
    assert_eq!(value, 150.0);
    let frame = engine
        .simulate_stored(&store, SensorKind::Thermocouple, &mut Silent)
        .unwrap();
    assert_eq!(frame.series[0], 150.0);

    // Reserved slot is refused, the stored triple is untouched
    let before = store.triple(SensorKind::Thermocouple);
    assert!(matches!(
        store.set(SensorKind::Thermocouple, 1, 3.0),
        Err(SimulationError::ReservedParameter { kind: SensorKind::Thermocouple, slot: 1 })
    ));
    assert_eq!(store.triple(SensorKind::Thermocouple), before);

    // Out-of-range writes clamp
    assert_eq!(store.set(SensorKind::Pressure, 0, 99.0).unwrap(), 10.0);
    assert_eq!(store.formatted(SensorKind::Pressure, 0).unwrap(), "10.00");

    store.reset(SensorKind::Pressure);
    assert_eq!(store.get(SensorKind::Pressure, 0).unwrap(), 5.0);
}

#[test]
fn positional_selection_fails_fast() {
    assert_eq!(SensorKind::from_index(3), Ok(SensorKind::Flow));
    assert_eq!(
        SensorKind::from_index(5),
        Err(SimulationError::UnknownSensor { index: 5 })
    );
}

#[test]
fn reconfigured_engine() {
    let config = EngineConfig::default()
        .with_sample_count(1000)
        .with_sampling_rate(200.0)
        .with_fft_size(1024);
    let engine = Engine::new(config).unwrap();
    let store = ParameterStore::new();

    let frame = engine
        .simulate_stored(&store, SensorKind::Humidity, &mut seeded_noise())
        .unwrap();
    assert_eq!(frame.series.len(), 1000);
    assert_eq!(frame.spectrum.len(), 512);
    assert_eq!(frame.spectrum.resolution_hz(), 200.0 / 1024.0);
    assert!(frame.z_plane.poles.iter().all(|p| p.norm() < 1.0));
}

#[test]
fn pressure_spectrum_peaks_near_its_modulation() {
    // Longer record for a resolution well under the 1.5 Hz modulation
    let config = EngineConfig::default().with_sample_count(2048).with_fft_size(2048);
    let engine = Engine::new(config).unwrap();
    let frame = engine
        .simulate_stored(&ParameterStore::new(), SensorKind::Pressure, &mut Silent)
        .unwrap();
    // Skip the DC main lobe; the operating point dwarfs everything below 1 Hz
    let peak = frame
        .spectrum
        .bins()
        .iter()
        .filter(|bin| bin.frequency_hz > 1.0)
        .max_by(|a, b| a.magnitude.total_cmp(&b.magnitude))
        .unwrap();
    assert!((peak.frequency_hz - 1.5).abs() < 0.1, "peak at {} Hz", peak.frequency_hz);
}
