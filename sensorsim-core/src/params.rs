//! Parameter Store
//!
//! ## Overview
//!
//! Each sensor is driven by up to three physical parameters. The external
//! UI exposes them as a fixed triple of sliders, so the boundary type is a
//! plain [`ParameterTriple`]. Not every sensor uses all three slots: unused
//! slots are declared [`ParamSlot::Reserved`] in the lookup table and are
//! ignored by validation and generation.
//!
//! Inside the engine a triple is converted once into [`SensorParams`], which
//! carries only the fields a sensor actually has. The formulas never index
//! into a triple.
//!
//! ## Parameter Table
//!
//! ```text
//! Sensor        p1                     p2                     p3
//! Oxygen        P_O₂   [0.10, 0.30]    T (K)  [273, 373]      reserved
//! Pressure      V_out  [1, 10]         S      [5, 20]         reserved
//! Humidity      RH %   [20, 95]        T (°C) [10, 40]        T_ref [15, 30]
//! Flow          Q      [500, 2000]     ρ      [1.0, 1.5]      A     [50, 200]
//! Thermocouple  T (°C) [-50, 150]      reserved               reserved
//! ```
//!
//! ## Clamping vs. Rejection
//!
//! - [`ParameterStore`] is the mutable, UI-facing side. Every write is
//!   clamped into range, so the store's contents are always valid.
//! - [`SensorParams::from_triple`] is the strict boundary for callers that
//!   bring their own triple. Out-of-range values are rejected.
//! - [`SensorParams::clamped_from_triple`] is the lenient variant.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::sampling::SLIDER_RESOLUTION,
    errors::{SimulationError, SimulationResult},
    sensor::{SensorKind, SENSOR_COUNT},
    traits::Validatable,
};

/// Number of parameter slots per sensor
pub const PARAM_SLOTS: usize = 3;

/// Raw parameter values `[p1, p2, p3]` as the UI hands them over
pub type ParameterTriple = [f64; PARAM_SLOTS];

/// Declaration of one active parameter slot
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ParamSpec {
    /// Short symbol, e.g. `"P_O₂"`
    pub label: &'static str,
    /// Unit or quantity description, e.g. `"atm"`
    pub unit: &'static str,
    /// Inclusive lower bound
    pub min: f64,
    /// Inclusive upper bound
    pub max: f64,
    /// Initial value
    pub default: f64,
}

impl ParamSpec {
    const fn new(label: &'static str, unit: &'static str, min: f64, max: f64, default: f64) -> Self {
        Self { label, unit, min, max, default }
    }

    /// Check if a value lies within `[min, max]`
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp a value into `[min, max]`
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Width of the range
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Map a slider position in `0..=SLIDER_RESOLUTION` onto the range.
    ///
    /// Positions past the end are treated as the end. The result is clamped
    /// so rounding never lands just outside the range.
    pub fn value_at(&self, position: u32) -> f64 {
        let position = position.min(SLIDER_RESOLUTION);
        self.clamp(self.min + self.span() * f64::from(position) / f64::from(SLIDER_RESOLUTION))
    }

    /// Nearest slider position for a value (inverse of [`value_at`](Self::value_at))
    pub fn position_of(&self, value: f64) -> u32 {
        if self.span() <= 0.0 {
            return 0;
        }
        let fraction = (self.clamp(value) - self.min) / self.span();
        (fraction * f64::from(SLIDER_RESOLUTION)).round() as u32
    }

    /// Decimal places used to display values of this slot.
    ///
    /// Narrow ranges need more digits: 3 below a span of 1, 2 below 10,
    /// otherwise 1.
    pub fn display_precision(&self) -> usize {
        let span = self.span();
        if span < 1.0 {
            3
        } else if span < 10.0 {
            2
        } else {
            1
        }
    }

    /// Format a value with [`display_precision`](Self::display_precision) digits
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.display_precision(), value)
    }
}

/// A parameter slot is either used by the sensor or reserved
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ParamSlot {
    /// Slot drives the sensor's formula
    Active(ParamSpec),
    /// Slot is unused for this sensor; its value is ignored
    Reserved,
}

impl ParamSlot {
    /// The slot declaration if the slot is active
    pub fn spec(&self) -> Option<&ParamSpec> {
        match self {
            ParamSlot::Active(spec) => Some(spec),
            ParamSlot::Reserved => None,
        }
    }

    /// Whether the slot is unused
    pub fn is_reserved(&self) -> bool {
        matches!(self, ParamSlot::Reserved)
    }
}

use ParamSlot::{Active, Reserved};

const OXYGEN_SLOTS: [ParamSlot; PARAM_SLOTS] = [
    Active(ParamSpec::new("P_O₂", "atm", 0.10, 0.30, 0.21)),
    Active(ParamSpec::new("T", "Temperature K", 273.0, 373.0, 298.0)),
    Reserved,
];

const PRESSURE_SLOTS: [ParamSlot; PARAM_SLOTS] = [
    Active(ParamSpec::new("V_out", "Voltage V", 1.0, 10.0, 5.0)),
    Active(ParamSpec::new("S", "Sensitivity mV/Pa", 5.0, 20.0, 10.0)),
    Reserved,
];

const HUMIDITY_SLOTS: [ParamSlot; PARAM_SLOTS] = [
    Active(ParamSpec::new("RH", "%", 20.0, 95.0, 50.0)),
    Active(ParamSpec::new("T", "Temperature °C", 10.0, 40.0, 25.0)),
    // Lowest reference temperature the range allows
    Active(ParamSpec::new("T_ref", "°C", 15.0, 30.0, 15.0)),
];

const FLOW_SLOTS: [ParamSlot; PARAM_SLOTS] = [
    Active(ParamSpec::new("Q", "Flow m³/s", 500.0, 2000.0, 1000.0)),
    Active(ParamSpec::new("ρ", "Density kg/m³", 1.0, 1.5, 1.225)),
    Active(ParamSpec::new("A", "Area m²", 50.0, 200.0, 100.0)),
];

const THERMOCOUPLE_SLOTS: [ParamSlot; PARAM_SLOTS] = [
    Active(ParamSpec::new("Temperature", "°C", -50.0, 150.0, 25.0)),
    Reserved,
    Reserved,
];

/// Declared parameter slots for a sensor
pub fn param_slots(kind: SensorKind) -> &'static [ParamSlot; PARAM_SLOTS] {
    match kind {
        SensorKind::Oxygen => &OXYGEN_SLOTS,
        SensorKind::Pressure => &PRESSURE_SLOTS,
        SensorKind::Humidity => &HUMIDITY_SLOTS,
        SensorKind::Flow => &FLOW_SLOTS,
        SensorKind::Thermocouple => &THERMOCOUPLE_SLOTS,
    }
}

/// Declaration of one slot, rejecting indexes past the triple
pub fn param_slot(kind: SensorKind, slot: usize) -> SimulationResult<&'static ParamSlot> {
    param_slots(kind)
        .get(slot)
        .ok_or(SimulationError::UnknownParameter { slot })
}

/// Default triple for a sensor. Reserved slots are zero.
pub fn default_triple(kind: SensorKind) -> ParameterTriple {
    let slots = param_slots(kind);
    core::array::from_fn(|i| slots[i].spec().map_or(0.0, |spec| spec.default))
}

/// Typed parameters, one variant per sensor with only the fields it uses
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SensorParams {
    /// Zirconia oxygen cell
    Oxygen {
        /// Measured O₂ partial pressure (atm)
        partial_pressure_atm: f64,
        /// Cell temperature (K)
        temperature_k: f64,
    },
    /// Piezoresistive pressure bridge
    Pressure {
        /// Bridge output voltage (V)
        output_voltage_v: f64,
        /// Sensor sensitivity (mV/Pa)
        sensitivity: f64,
    },
    /// Capacitive humidity sensor
    Humidity {
        /// Relative humidity at the reference temperature (%)
        relative_humidity_pct: f64,
        /// Ambient temperature (°C)
        temperature_c: f64,
        /// Reference temperature for saturation pressure (°C)
        reference_temperature_c: f64,
    },
    /// Orifice plate flow meter
    Flow {
        /// Volumetric flow rate (m³/s)
        flow_rate: f64,
        /// Fluid density (kg/m³)
        density_kg_m3: f64,
        /// Orifice area (m²)
        area_m2: f64,
    },
    /// Type K thermocouple
    Thermocouple {
        /// Junction temperature (°C)
        temperature_c: f64,
    },
}

impl SensorParams {
    /// Validate a raw triple against the sensor's declared ranges.
    ///
    /// Reserved slots are ignored whatever they hold.
    pub fn from_triple(kind: SensorKind, triple: ParameterTriple) -> SimulationResult<Self> {
        for (slot, (declared, &value)) in param_slots(kind).iter().zip(triple.iter()).enumerate() {
            let Some(spec) = declared.spec() else { continue };
            if !value.is_valid() {
                return Err(SimulationError::InvalidValue);
            }
            if !spec.contains(value) {
                return Err(SimulationError::InvalidParameterRange {
                    kind,
                    slot,
                    value,
                    min: spec.min,
                    max: spec.max,
                });
            }
        }
        Ok(Self::typed(kind, triple))
    }

    /// Clamp a raw triple into the sensor's declared ranges.
    ///
    /// Non-finite values in active slots are still rejected.
    pub fn clamped_from_triple(kind: SensorKind, triple: ParameterTriple) -> SimulationResult<Self> {
        let mut clamped = triple;
        for (declared, value) in param_slots(kind).iter().zip(clamped.iter_mut()) {
            let Some(spec) = declared.spec() else { continue };
            if !value.is_valid() {
                return Err(SimulationError::InvalidValue);
            }
            *value = spec.clamp(*value);
        }
        Ok(Self::typed(kind, clamped))
    }

    /// Default parameters for a sensor
    pub fn defaults(kind: SensorKind) -> Self {
        Self::typed(kind, default_triple(kind))
    }

    fn typed(kind: SensorKind, [p1, p2, p3]: ParameterTriple) -> Self {
        match kind {
            SensorKind::Oxygen => SensorParams::Oxygen {
                partial_pressure_atm: p1,
                temperature_k: p2,
            },
            SensorKind::Pressure => SensorParams::Pressure {
                output_voltage_v: p1,
                sensitivity: p2,
            },
            SensorKind::Humidity => SensorParams::Humidity {
                relative_humidity_pct: p1,
                temperature_c: p2,
                reference_temperature_c: p3,
            },
            SensorKind::Flow => SensorParams::Flow {
                flow_rate: p1,
                density_kg_m3: p2,
                area_m2: p3,
            },
            SensorKind::Thermocouple => SensorParams::Thermocouple { temperature_c: p1 },
        }
    }

    /// Which sensor these parameters drive
    pub fn kind(&self) -> SensorKind {
        match self {
            SensorParams::Oxygen { .. } => SensorKind::Oxygen,
            SensorParams::Pressure { .. } => SensorKind::Pressure,
            SensorParams::Humidity { .. } => SensorKind::Humidity,
            SensorParams::Flow { .. } => SensorKind::Flow,
            SensorParams::Thermocouple { .. } => SensorKind::Thermocouple,
        }
    }

    /// Back to the UI triple. Reserved slots are zero.
    pub fn to_triple(&self) -> ParameterTriple {
        match *self {
            SensorParams::Oxygen { partial_pressure_atm, temperature_k } => {
                [partial_pressure_atm, temperature_k, 0.0]
            }
            SensorParams::Pressure { output_voltage_v, sensitivity } => {
                [output_voltage_v, sensitivity, 0.0]
            }
            SensorParams::Humidity {
                relative_humidity_pct,
                temperature_c,
                reference_temperature_c,
            } => [relative_humidity_pct, temperature_c, reference_temperature_c],
            SensorParams::Flow { flow_rate, density_kg_m3, area_m2 } => {
                [flow_rate, density_kg_m3, area_m2]
            }
            SensorParams::Thermocouple { temperature_c } => [temperature_c, 0.0, 0.0],
        }
    }
}

/// Current parameter values for every sensor.
///
/// Owned by the caller (typically the UI's event loop) and passed by
/// reference into generation. Every write is clamped, so the stored values
/// are always within their declared ranges. Deserialization goes through
/// [`ParameterStore::from_triples`] and is clamped the same way.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "StoredTriples"))]
pub struct ParameterStore {
    triples: [ParameterTriple; SENSOR_COUNT],
}

/// Unchecked wire form of a [`ParameterStore`]
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct StoredTriples {
    triples: [ParameterTriple; SENSOR_COUNT],
}

#[cfg(feature = "serde")]
impl From<StoredTriples> for ParameterStore {
    fn from(stored: StoredTriples) -> Self {
        Self::from_triples(stored.triples)
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterStore {
    /// Store initialised with every sensor's defaults
    pub fn new() -> Self {
        Self {
            triples: SensorKind::ALL.map(default_triple),
        }
    }

    /// Store holding the given triples, one per sensor in [`SensorKind::ALL`] order.
    ///
    /// Active slots are clamped into range and non-finite values fall back to
    /// the slot default. Reserved slots are zeroed.
    pub fn from_triples(triples: [ParameterTriple; SENSOR_COUNT]) -> Self {
        let mut store = Self::new();
        for kind in SensorKind::ALL {
            let raw = triples[kind.index()];
            for (slot, declared) in param_slots(kind).iter().enumerate() {
                let Some(spec) = declared.spec() else { continue };
                let value = raw[slot];
                store.triples[kind.index()][slot] = if value.is_valid() {
                    spec.clamp(value)
                } else {
                    log_debug!("{} {}: {} replaced by default", kind, spec.label, value);
                    spec.default
                };
            }
        }
        store
    }

    /// Current raw triple for a sensor
    pub fn triple(&self, kind: SensorKind) -> ParameterTriple {
        self.triples[kind.index()]
    }

    /// Current typed parameters for a sensor
    pub fn params(&self, kind: SensorKind) -> SensorParams {
        SensorParams::typed(kind, self.triple(kind))
    }

    /// Current value of one slot
    pub fn get(&self, kind: SensorKind, slot: usize) -> SimulationResult<f64> {
        param_slot(kind, slot)?;
        Ok(self.triples[kind.index()][slot])
    }

    /// Set one slot, clamping into range. Returns the value actually stored.
    pub fn set(&mut self, kind: SensorKind, slot: usize, value: f64) -> SimulationResult<f64> {
        let spec = Self::active_spec(kind, slot)?;
        if !value.is_valid() {
            return Err(SimulationError::InvalidValue);
        }
        let clamped = spec.clamp(value);
        if clamped != value {
            log_debug!(
                "{} {}: {} clamped to {} (range [{}, {}])",
                kind, spec.label, value, clamped, spec.min, spec.max
            );
        }
        self.triples[kind.index()][slot] = clamped;
        Ok(clamped)
    }

    /// Set one slot from a slider position in `0..=SLIDER_RESOLUTION`
    pub fn set_from_slider(&mut self, kind: SensorKind, slot: usize, position: u32) -> SimulationResult<f64> {
        let spec = Self::active_spec(kind, slot)?;
        let value = spec.value_at(position);
        self.triples[kind.index()][slot] = value;
        Ok(value)
    }

    /// Slider position matching the slot's current value
    pub fn slider_position(&self, kind: SensorKind, slot: usize) -> SimulationResult<u32> {
        let spec = Self::active_spec(kind, slot)?;
        Ok(spec.position_of(self.triples[kind.index()][slot]))
    }

    /// Current value of a slot formatted for display
    pub fn formatted(&self, kind: SensorKind, slot: usize) -> SimulationResult<String> {
        let spec = Self::active_spec(kind, slot)?;
        Ok(spec.format_value(self.triples[kind.index()][slot]))
    }

    /// Restore a sensor's defaults
    pub fn reset(&mut self, kind: SensorKind) {
        self.triples[kind.index()] = default_triple(kind);
    }

    fn active_spec(kind: SensorKind, slot: usize) -> SimulationResult<&'static ParamSpec> {
        param_slot(kind, slot)?
            .spec()
            .ok_or(SimulationError::ReservedParameter { kind, slot })
    }
}
