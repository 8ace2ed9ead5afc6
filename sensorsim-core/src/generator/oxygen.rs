//! Zirconia Oxygen Cell
//!
//! ## Physics Background
//!
//! A zirconia cell develops a potential between a reference electrode
//! (ambient air) and a measuring electrode, given by the Nernst equation:
//!
//! ```text
//! E = (R·T / 4F) · ln(P_ref / P_O₂)
//! ```
//!
//! - `R`: gas constant, `F`: Faraday constant
//! - `4`: electrons transferred per O₂ molecule
//! - `P_ref = 0.21 atm`: O₂ partial pressure of air
//!
//! The output is zero when the measured gas matches air, positive when it is
//! leaner. At 298 K the slope `R·T / 4F` is about 6.4 mV, so the signal
//! stays in the millivolt range.
//!
//! ## Simulated Dynamics
//!
//! - Partial pressure oscillates ±10% at 0.2 Hz (combustion cycling)
//! - A 1 mV disturbance at 0.05 Hz (thermal drift of the heater)
//! - ±0.25 mV uniform noise
//!
//! The partial pressure is floored before the logarithm, so a degenerate
//! parameter set still produces a finite sample.

use crate::{
    constants::{
        physics::{
            FARADAY_CONSTANT_C_PER_MOL, GAS_CONSTANT_J_PER_MOL_K, OXYGEN_ELECTRONS_PER_MOLECULE,
            OXYGEN_REFERENCE_PRESSURE_ATM,
        },
        sensors::{
            OXYGEN_CHARACTERISTIC_HZ, OXYGEN_DISTURBANCE_HZ, OXYGEN_DISTURBANCE_V,
            OXYGEN_MODULATION_DEPTH, OXYGEN_NOISE_V,
        },
    },
    sensor::SensorKind,
    traits::SensorModel,
};

use super::utils::{floor_positive, modulation, oscillation};

/// Oxygen cell bound to its parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OxygenCell {
    /// Measured O₂ partial pressure (atm)
    pub partial_pressure_atm: f64,
    /// Cell temperature (K)
    pub temperature_k: f64,
}

impl OxygenCell {
    /// Nernst slope `R·T / 4F` (V)
    fn nernst_slope(&self) -> f64 {
        GAS_CONSTANT_J_PER_MOL_K * self.temperature_k
            / (OXYGEN_ELECTRONS_PER_MOLECULE * FARADAY_CONSTANT_C_PER_MOL)
    }
}

impl SensorModel for OxygenCell {
    fn kind(&self) -> SensorKind {
        SensorKind::Oxygen
    }

    fn physics(&self, t: f64) -> f64 {
        let p_dynamic = floor_positive(
            self.partial_pressure_atm
                * modulation(OXYGEN_MODULATION_DEPTH, OXYGEN_CHARACTERISTIC_HZ, t),
            "oxygen partial pressure",
        );
        self.nernst_slope() * (OXYGEN_REFERENCE_PRESSURE_ATM / p_dynamic).ln()
    }

    fn disturbance(&self, _signal: f64, t: f64) -> f64 {
        OXYGEN_DISTURBANCE_V * oscillation(OXYGEN_DISTURBANCE_HZ, t)
    }

    fn noise(&self, _signal: f64, centered_draw: f64) -> f64 {
        OXYGEN_NOISE_V * centered_draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn air_cell() -> OxygenCell {
        OxygenCell { partial_pressure_atm: 0.21, temperature_k: 298.0 }
    }

    #[test]
    fn zero_output_in_air_at_t0() {
        assert_eq!(air_cell().physics(0.0), 0.0);
    }

    #[test]
    fn lean_gas_gives_positive_potential() {
        let cell = OxygenCell { partial_pressure_atm: 0.10, temperature_k: 298.0 };
        let expected = 8.314 * 298.0 / (4.0 * 96485.0) * (0.21f64 / 0.10).ln();
        assert!((cell.physics(0.0) - expected).abs() < 1e-12);
        assert!(cell.physics(0.0) > 0.0);
    }

    #[test]
    fn degenerate_partial_pressure_is_floored() {
        let cell = OxygenCell { partial_pressure_atm: 0.0, temperature_k: 298.0 };
        let value = cell.physics(0.3);
        assert!(value.is_finite());
        let expected = cell.nernst_slope() * (0.21f64 / 1e-3).ln();
        assert!((value - expected).abs() < 1e-12);
    }

    #[test]
    fn noise_is_bounded() {
        let cell = air_cell();
        assert_eq!(cell.noise(0.0, 0.0), 0.0);
        assert!((cell.noise(0.0, -0.5) + 0.00025).abs() < 1e-15);
    }
}
