//! Sensor kinds and their fixed characteristics
//!
//! Every per-sensor decision in the engine dispatches on [`SensorKind`]:
//! which formula runs, which parameter slots are meaningful, and where the
//! illustrative poles go.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::sensors::{
    FLOW_CHARACTERISTIC_HZ, HUMIDITY_CHARACTERISTIC_HZ, OXYGEN_CHARACTERISTIC_HZ,
    PRESSURE_CHARACTERISTIC_HZ, THERMOCOUPLE_CHARACTERISTIC_HZ,
};
use crate::errors::{SimulationError, SimulationResult};

/// Number of simulated sensor types
pub const SENSOR_COUNT: usize = 5;

/// The five simulated sensor types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorKind {
    /// Zirconia oxygen cell (Nernst potential)
    Oxygen,
    /// Piezoresistive pressure bridge
    Pressure,
    /// Capacitive relative humidity sensor
    Humidity,
    /// Orifice plate flow meter
    Flow,
    /// Type K thermocouple
    Thermocouple,
}

impl SensorKind {
    /// All kinds in selector order
    pub const ALL: [SensorKind; SENSOR_COUNT] = [
        SensorKind::Oxygen,
        SensorKind::Pressure,
        SensorKind::Humidity,
        SensorKind::Flow,
        SensorKind::Thermocouple,
    ];

    /// Look up a kind by its position in [`SensorKind::ALL`].
    ///
    /// Positional selectors (combo boxes, list views) hand out indexes; an
    /// index past the end is a programmer error and is reported rather than
    /// mapped to a default sensor.
    pub fn from_index(index: usize) -> SimulationResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(SimulationError::UnknownSensor { index })
    }

    /// Position of this kind in [`SensorKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            SensorKind::Oxygen => 0,
            SensorKind::Pressure => 1,
            SensorKind::Humidity => 2,
            SensorKind::Flow => 3,
            SensorKind::Thermocouple => 4,
        }
    }

    /// Human-readable sensor name
    pub fn display_name(self) -> &'static str {
        match self {
            SensorKind::Oxygen => "Oxygen Sensor - O₂",
            SensorKind::Pressure => "Pressure Sensor",
            SensorKind::Humidity => "Humidity Sensor - RH",
            SensorKind::Flow => "Flow Sensor",
            SensorKind::Thermocouple => "Thermocouple Type K",
        }
    }

    /// Governing equation, for display next to the parameter controls
    pub fn formula(self) -> &'static str {
        match self {
            SensorKind::Oxygen => "E_O₂ = (R·T / 4F) · ln(0.21 / P_O₂)",
            SensorKind::Pressure => "P = V_out / S",
            SensorKind::Humidity => "RH = (P_v / P_sat(T)) × 100%",
            SensorKind::Flow => "Q = A · √(2ΔP / ρ)",
            SensorKind::Thermocouple => "T = Temperature (°C)",
        }
    }

    /// Dominant oscillation frequency baked into the sensor's formula (Hz)
    pub fn characteristic_hz(self) -> f64 {
        match self {
            SensorKind::Oxygen => OXYGEN_CHARACTERISTIC_HZ,
            SensorKind::Pressure => PRESSURE_CHARACTERISTIC_HZ,
            SensorKind::Humidity => HUMIDITY_CHARACTERISTIC_HZ,
            SensorKind::Flow => FLOW_CHARACTERISTIC_HZ,
            SensorKind::Thermocouple => THERMOCOUPLE_CHARACTERISTIC_HZ,
        }
    }

    /// Characteristic angular frequency `ω = 2π·f` (rad/s)
    pub fn characteristic_omega(self) -> f64 {
        core::f64::consts::TAU * self.characteristic_hz()
    }

    /// Scale applied to the s-plane placeholder poles.
    ///
    /// Numerically the same as the characteristic frequency; kept as its own
    /// accessor because the two play different roles.
    pub fn pole_scale(self) -> f64 {
        self.characteristic_hz()
    }

    /// Whether the z-plane gets an extra pole pair at `3ω`
    pub fn has_harmonic_poles(self) -> bool {
        matches!(self, SensorKind::Pressure)
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SensorKind::Oxygen => "Oxygen",
            SensorKind::Pressure => "Pressure",
            SensorKind::Humidity => "Humidity",
            SensorKind::Flow => "Flow",
            SensorKind::Thermocouple => "Thermocouple",
        };
        f.write_str(name)
    }
}
