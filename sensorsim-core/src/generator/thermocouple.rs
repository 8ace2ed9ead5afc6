//! Type K Thermocouple
//!
//! The thermocouple output is reported directly as a temperature. The
//! simulated junction sits in a process that swings ±5°C at 0.15 Hz with a
//! slower ±2°C drift at 0.05 Hz, read through ±0.15°C uniform noise.

use crate::{
    constants::sensors::{
        THERMOCOUPLE_CHARACTERISTIC_HZ, THERMOCOUPLE_NOISE_C, THERMOCOUPLE_PRIMARY_SWING_C,
        THERMOCOUPLE_SECONDARY_HZ, THERMOCOUPLE_SECONDARY_SWING_C,
    },
    sensor::SensorKind,
    traits::SensorModel,
};

use super::utils::oscillation;

/// Thermocouple bound to its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thermocouple {
    /// Mean junction temperature (°C)
    pub temperature_c: f64,
}

impl SensorModel for Thermocouple {
    fn kind(&self) -> SensorKind {
        SensorKind::Thermocouple
    }

    fn physics(&self, t: f64) -> f64 {
        self.temperature_c
            + THERMOCOUPLE_PRIMARY_SWING_C * oscillation(THERMOCOUPLE_CHARACTERISTIC_HZ, t)
            + THERMOCOUPLE_SECONDARY_SWING_C * oscillation(THERMOCOUPLE_SECONDARY_HZ, t)
    }

    fn noise(&self, _signal: f64, centered_draw: f64) -> f64 {
        THERMOCOUPLE_NOISE_C * centered_draw
    }
}
