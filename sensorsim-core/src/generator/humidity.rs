//! Capacitive Humidity Sensor
//!
//! ## Physics Background
//!
//! Relative humidity is the ratio of actual to saturation vapor pressure.
//! For a fixed moisture content, warming the air raises the saturation
//! pressure and lowers RH. The saturation pressure follows the Magnus-type
//! approximation:
//!
//! ```text
//! Psat(T) = 6.1078 · exp(17.27·T / (T + 237.3))     [hPa, T in °C]
//! ```
//!
//! A reading taken at reference temperature `T_ref` is carried over to the
//! ambient temperature `T` by:
//!
//! ```text
//! RH(T) = RH(T_ref) · Psat(T_ref) / Psat(T)
//! ```
//!
//! ## Simulated Dynamics
//!
//! - Ambient temperature swings ±2°C at 0.3 Hz
//! - Moisture content oscillates ±15% at 0.5 Hz
//! - ±0.5 %RH uniform noise
//!
//! No separate disturbance term; the two oscillations interact through the
//! exponential and already produce an asymmetric waveform.

use crate::{
    constants::{
        physics::{MAGNUS_BASE_PRESSURE_HPA, MAGNUS_COEFFICIENT_A, MAGNUS_COEFFICIENT_B_C},
        sensors::{
            HUMIDITY_MODULATION_DEPTH, HUMIDITY_MODULATION_HZ, HUMIDITY_NOISE_PCT,
            HUMIDITY_TEMP_SWING_C, HUMIDITY_TEMP_SWING_HZ,
        },
    },
    sensor::SensorKind,
    traits::SensorModel,
};

use super::utils::{floor_positive, modulation, oscillation};

/// Saturation vapor pressure over water (hPa) at `temp_c` (°C)
pub fn saturation_pressure_hpa(temp_c: f64) -> f64 {
    MAGNUS_BASE_PRESSURE_HPA
        * ((MAGNUS_COEFFICIENT_A * temp_c) / (temp_c + MAGNUS_COEFFICIENT_B_C)).exp()
}

/// Humidity sensor bound to its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumiditySensor {
    /// Relative humidity at the reference temperature (%)
    pub relative_humidity_pct: f64,
    /// Ambient temperature (°C)
    pub temperature_c: f64,
    /// Reference temperature (°C)
    pub reference_temperature_c: f64,
}

impl SensorModel for HumiditySensor {
    fn kind(&self) -> SensorKind {
        SensorKind::Humidity
    }

    fn physics(&self, t: f64) -> f64 {
        let temp_dynamic =
            self.temperature_c + HUMIDITY_TEMP_SWING_C * oscillation(HUMIDITY_TEMP_SWING_HZ, t);
        let rh_dynamic = self.relative_humidity_pct
            * modulation(HUMIDITY_MODULATION_DEPTH, HUMIDITY_MODULATION_HZ, t);

        let psat_reference = saturation_pressure_hpa(self.reference_temperature_c);
        let psat_ambient = floor_positive(
            saturation_pressure_hpa(temp_dynamic),
            "saturation vapor pressure",
        );
        rh_dynamic * (psat_reference / psat_ambient)
    }

    fn noise(&self, _signal: f64, centered_draw: f64) -> f64 {
        HUMIDITY_NOISE_PCT * centered_draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnus_reference_points() {
        // 6.1078 hPa at the freezing point by construction
        assert!((saturation_pressure_hpa(0.0) - 6.1078).abs() < 1e-12);
        // About 31.7 hPa at 25°C
        assert!((saturation_pressure_hpa(25.0) - 31.7).abs() < 0.1);
    }

    #[test]
    fn equal_temperatures_pass_rh_through() {
        let sensor = HumiditySensor {
            relative_humidity_pct: 50.0,
            temperature_c: 25.0,
            reference_temperature_c: 25.0,
        };
        assert!((sensor.physics(0.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn warmer_air_lowers_rh() {
        let sensor = HumiditySensor {
            relative_humidity_pct: 50.0,
            temperature_c: 30.0,
            reference_temperature_c: 20.0,
        };
        assert!(sensor.physics(0.0) < 50.0);
    }
}
