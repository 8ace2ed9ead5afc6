//! Piezoresistive Pressure Bridge
//!
//! ## Physics Background
//!
//! A strain-gauge bridge converts pressure into a differential voltage with a
//! fixed sensitivity, so pressure is recovered by dividing:
//!
//! ```text
//! P = V_out / S
//! ```
//!
//! ## Simulated Dynamics
//!
//! - Bridge output pulsates ±30% at 1.5 Hz (pump or compressor stroke)
//! - A second harmonic at 3.0 Hz worth 10% of the signal
//! - ±1% noise, proportional to the signal
//!
//! The pulsation and its harmonic give pressure the richest spectrum of the
//! five sensors, which is why its z-plane plot carries an extra pole pair.

use crate::{
    constants::sensors::{
        PRESSURE_CHARACTERISTIC_HZ, PRESSURE_DISTURBANCE_HZ, PRESSURE_DISTURBANCE_RATIO,
        PRESSURE_MODULATION_DEPTH, PRESSURE_NOISE_RATIO,
    },
    sensor::SensorKind,
    traits::SensorModel,
};

use super::utils::{floor_positive, modulation, oscillation};

/// Pressure bridge bound to its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PressureBridge {
    /// Bridge output voltage (V)
    pub output_voltage_v: f64,
    /// Sensitivity (mV/Pa)
    pub sensitivity: f64,
}

impl SensorModel for PressureBridge {
    fn kind(&self) -> SensorKind {
        SensorKind::Pressure
    }

    fn physics(&self, t: f64) -> f64 {
        let v_dynamic = self.output_voltage_v
            * modulation(PRESSURE_MODULATION_DEPTH, PRESSURE_CHARACTERISTIC_HZ, t);
        v_dynamic / floor_positive(self.sensitivity, "pressure sensitivity")
    }

    fn disturbance(&self, signal: f64, t: f64) -> f64 {
        PRESSURE_DISTURBANCE_RATIO * signal * oscillation(PRESSURE_DISTURBANCE_HZ, t)
    }

    fn noise(&self, signal: f64, centered_draw: f64) -> f64 {
        PRESSURE_NOISE_RATIO * signal * centered_draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_state_is_voltage_over_sensitivity() {
        let bridge = PressureBridge { output_voltage_v: 5.0, sensitivity: 10.0 };
        assert_eq!(bridge.physics(0.0), 0.5);
        assert_eq!(bridge.clean_sample(0.0), 0.5);
    }

    #[test]
    fn pulsation_peaks_at_quarter_period() {
        let bridge = PressureBridge { output_voltage_v: 5.0, sensitivity: 10.0 };
        let quarter = 1.0 / (4.0 * PRESSURE_CHARACTERISTIC_HZ);
        assert!((bridge.physics(quarter) - 0.65).abs() < 1e-12);
    }

    #[test]
    fn noise_scales_with_signal() {
        let bridge = PressureBridge { output_voltage_v: 5.0, sensitivity: 10.0 };
        assert!((bridge.noise(2.0, 0.5) - 0.02).abs() < 1e-15);
        assert!((bridge.noise(4.0, 0.5) - 0.04).abs() < 1e-15);
    }
}
