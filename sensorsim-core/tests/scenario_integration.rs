//! Known-value scenarios for the generator and pole/zero mapper
//!
//! Each test pins one concrete, hand-checkable number so a regression in a
//! formula or constant shows up as a precise failure.

mod common;

use approx::{assert_abs_diff_eq, assert_relative_eq};

use sensorsim_core::{
    generator::{self, clean_sample, physics_term, saturation_pressure_hpa, Silent},
    poles::{s_domain_poles, unit_circle, z_domain_poles, Complex64},
    spectrum::SpectrumAnalyzer,
    SensorKind, SensorParams, SignalGenerator, TimeSeries,
};

use common::{seeded_noise, FixedDraw};

use core::f64::consts::TAU;

#[test]
fn thermocouple_starts_at_set_temperature() {
    let series = generator::generate(
        SensorKind::Thermocouple,
        [25.0, 0.0, 0.0],
        200,
        100.0,
        &mut seeded_noise(),
    )
    .unwrap();
    assert_eq!(series.len(), 200);
    assert_abs_diff_eq!(series[0], 25.0, epsilon = 0.15);
}

#[test]
fn oxygen_in_air_reads_zero() {
    let series = generator::generate(
        SensorKind::Oxygen,
        [0.21, 298.0, 0.0],
        200,
        100.0,
        &mut seeded_noise(),
    )
    .unwrap();
    assert_abs_diff_eq!(series[0], 0.0, epsilon = 0.0015);

    let params = SensorParams::from_triple(SensorKind::Oxygen, [0.21, 298.0, 0.0]).unwrap();
    assert_abs_diff_eq!(physics_term(&params, 0.0), 0.0, epsilon = 1e-15);
}

#[test]
fn flow_default_recovers_configured_rate() {
    // Modulation is exactly 1 at t = 0, so the orifice equation returns Q
    let params = SensorParams::defaults(SensorKind::Flow);
    let clean = SignalGenerator::default().generate_clean(&params).unwrap();
    assert_relative_eq!(clean[0], 1000.0, max_relative = 1e-12);
}

#[test]
fn magnus_reference_points() {
    assert_relative_eq!(saturation_pressure_hpa(0.0), 6.1078, max_relative = 1e-12);
    assert_relative_eq!(saturation_pressure_hpa(20.0), 23.382, max_relative = 1e-4);
}

#[test]
fn oxygen_z_pole_magnitude() {
    let (poles, zeros) = z_domain_poles(SensorKind::Oxygen, 0.01).unwrap();
    let omega = core::f64::consts::TAU * 0.2;
    let expected = Complex64::from_polar((-0.001f64).exp(), omega * 0.01);

    assert_eq!(poles.len(), 2);
    assert_relative_eq!(poles[0].norm(), (-0.001f64).exp(), max_relative = 1e-12);
    assert_abs_diff_eq!(poles[0].re, expected.re, epsilon = 1e-12);
    assert_abs_diff_eq!(poles[0].im, expected.im, epsilon = 1e-12);
    assert_eq!(poles[1], poles[0].conj());
    assert_eq!(zeros.as_slice(), &[Complex64::new(0.0, 0.0)]);
}

#[test]
fn pole_counts_per_sensor() {
    for kind in SensorKind::ALL {
        let s_poles = s_domain_poles(kind);
        assert_eq!(s_poles.len(), 3);
        assert!(s_poles.iter().all(|p| p.re < 0.0 && p.im == 0.0));

        let (z_poles, _) = z_domain_poles(kind, 0.01).unwrap();
        let expected = if kind == SensorKind::Pressure { 4 } else { 2 };
        assert_eq!(z_poles.len(), expected, "{kind}");
        assert!(z_poles.iter().all(|p| p.norm() < 1.0));
    }
}

#[test]
fn unit_circle_outline() {
    let circle = unit_circle(5);
    assert_eq!(circle.len(), 73);
    for point in &circle {
        assert_relative_eq!(point.norm(), 1.0, max_relative = 1e-12);
    }
    assert_abs_diff_eq!(circle[0].re, circle[72].re, epsilon = 1e-12);
    assert_abs_diff_eq!(circle[0].im, circle[72].im, epsilon = 1e-12);
}

#[test]
fn pure_tone_peaks_at_its_bin() {
    let analyzer = SpectrumAnalyzer::default();
    for bin in [4usize, 20, 57, 100] {
        let samples = (0..256)
            .map(|i| (core::f64::consts::TAU * bin as f64 * i as f64 / 256.0).cos())
            .collect();
        let spectrum = analyzer.analyze(&TimeSeries::from_samples(samples, 100.0));
        assert_eq!(spectrum.peak().map(|p| p.index), Some(bin));
    }
}

#[test]
fn zero_series_has_zero_spectrum() {
    let spectrum = SpectrumAnalyzer::default().analyze(&TimeSeries::from_samples(vec![0.0; 256], 100.0));
    assert_eq!(spectrum.len(), 128);
    assert!(spectrum.magnitudes().all(|m| m == 0.0));
}

#[test]
fn silent_noise_reproduces_clean_signal() {
    let params = SensorParams::defaults(SensorKind::Pressure);
    let generator = SignalGenerator::default();
    let clean = generator.generate_clean(&params).unwrap();
    let silent = generator.generate(&params, &mut Silent).unwrap();
    assert_eq!(clean, silent);
}

#[test]
fn oxygen_heater_drift_disturbance() {
    let params = SensorParams::defaults(SensorKind::Oxygen);
    for t in [0.37, 1.9, 5.0, 12.25] {
        let disturbance = clean_sample(&params, t) - physics_term(&params, t);
        assert_abs_diff_eq!(disturbance, 0.001 * (TAU * 0.05 * t).sin(), epsilon = 1e-12);
    }
    // Quarter period of the 0.05 Hz drift
    let peak = clean_sample(&params, 5.0) - physics_term(&params, 5.0);
    assert_abs_diff_eq!(peak, 0.001, epsilon = 1e-12);
}

#[test]
fn pressure_harmonic_disturbance() {
    let params = SensorParams::defaults(SensorKind::Pressure);
    for t in [1.0 / 12.0, 0.2, 0.77, 1.43] {
        let physics = physics_term(&params, t);
        let disturbance = clean_sample(&params, t) - physics;
        assert_abs_diff_eq!(
            disturbance,
            0.1 * physics * (TAU * 3.0 * t).sin(),
            epsilon = 1e-12
        );
    }
    // Quarter period of the 3 Hz component: full 10% of the signal
    let t = 1.0 / 12.0;
    let physics = physics_term(&params, t);
    assert_relative_eq!(clean_sample(&params, t), 1.1 * physics, max_relative = 1e-12);
}

#[test]
fn undisturbed_sensors_equal_their_physics() {
    for kind in [SensorKind::Humidity, SensorKind::Flow, SensorKind::Thermocouple] {
        let params = SensorParams::defaults(kind);
        for t in [0.13, 0.9, 1.7] {
            assert_eq!(clean_sample(&params, t), physics_term(&params, t), "{kind}");
        }
    }
}

/// Peak noise excursion for a sample whose clean value is `clean`
fn noise_half_width(kind: SensorKind, clean: f64) -> f64 {
    match kind {
        SensorKind::Oxygen => 0.0005 / 2.0,
        SensorKind::Pressure => 0.02 * clean.abs() / 2.0,
        SensorKind::Humidity => 1.0 / 2.0,
        SensorKind::Flow => 0.05 * clean.abs() / 2.0,
        SensorKind::Thermocouple => 0.3 / 2.0,
    }
}

#[test]
fn noise_reaches_its_bounds_at_extreme_draws() {
    let generator = SignalGenerator::default();
    for kind in SensorKind::ALL {
        let params = SensorParams::defaults(kind);
        let clean = generator.generate_clean(&params).unwrap();
        let low = generator.generate(&params, &mut FixedDraw(0.0)).unwrap();
        let high = generator.generate(&params, &mut FixedDraw(1.0)).unwrap();

        for n in 0..clean.len() {
            let bound = noise_half_width(kind, clean[n]);
            assert_abs_diff_eq!(low[n] - clean[n], -bound, epsilon = 1e-9);
            assert_abs_diff_eq!(high[n] - clean[n], bound, epsilon = 1e-9);
        }
    }
}

#[test]
fn random_noise_stays_within_bounds() {
    let generator = SignalGenerator::default();
    for kind in SensorKind::ALL {
        let params = SensorParams::defaults(kind);
        let clean = generator.generate_clean(&params).unwrap();
        let noisy = generator.generate(&params, &mut seeded_noise()).unwrap();

        let mut largest = 0.0f64;
        for n in 0..clean.len() {
            let bound = noise_half_width(kind, clean[n]);
            let excursion = (noisy[n] - clean[n]).abs();
            assert!(excursion <= bound + 1e-9, "{kind} sample {n}: {excursion} > {bound}");
            largest = largest.max(excursion / bound);
        }
        // 200 uniform draws come close to the edge
        assert!(largest > 0.9, "{kind}: largest excursion only {largest} of bound");
    }
}
