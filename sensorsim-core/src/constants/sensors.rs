//! Sensor Model Parameters
//!
//! Modulation depths, oscillation frequencies and noise amplitudes for each
//! simulated sensor. These are illustrative values chosen to make each
//! sensor's signal visually distinct, not calibrated transducer data.
//!
//! Noise amplitudes are peak-to-peak: a uniform draw in `[0, 1)` is centered
//! with `draw - 0.5` and multiplied by the amplitude, so the deviation is at
//! most half the amplitude.

// ===== OXYGEN (ZIRCONIA CELL) =====

/// Characteristic frequency of the oxygen partial-pressure oscillation (Hz).
pub const OXYGEN_CHARACTERISTIC_HZ: f64 = 0.2;

/// Relative depth of the partial-pressure oscillation.
pub const OXYGEN_MODULATION_DEPTH: f64 = 0.1;

/// Amplitude of the slow additive disturbance (V).
pub const OXYGEN_DISTURBANCE_V: f64 = 0.001;

/// Frequency of the slow additive disturbance (Hz).
pub const OXYGEN_DISTURBANCE_HZ: f64 = 0.05;

/// Peak-to-peak absolute noise (V).
pub const OXYGEN_NOISE_V: f64 = 0.0005;

// ===== PRESSURE (PIEZORESISTIVE BRIDGE) =====

/// Characteristic frequency of the bridge output oscillation (Hz).
pub const PRESSURE_CHARACTERISTIC_HZ: f64 = 1.5;

/// Relative depth of the bridge output oscillation.
pub const PRESSURE_MODULATION_DEPTH: f64 = 0.3;

/// Relative amplitude of the harmonic disturbance.
pub const PRESSURE_DISTURBANCE_RATIO: f64 = 0.1;

/// Frequency of the harmonic disturbance (Hz).
pub const PRESSURE_DISTURBANCE_HZ: f64 = 3.0;

/// Peak-to-peak noise relative to the signal.
pub const PRESSURE_NOISE_RATIO: f64 = 0.02;

// ===== HUMIDITY (CAPACITIVE) =====

/// Characteristic frequency used for pole placement (Hz).
pub const HUMIDITY_CHARACTERISTIC_HZ: f64 = 0.5;

/// Amplitude of the ambient temperature swing (°C).
pub const HUMIDITY_TEMP_SWING_C: f64 = 2.0;

/// Frequency of the ambient temperature swing (Hz).
pub const HUMIDITY_TEMP_SWING_HZ: f64 = 0.3;

/// Relative depth of the moisture oscillation.
pub const HUMIDITY_MODULATION_DEPTH: f64 = 0.15;

/// Frequency of the moisture oscillation (Hz).
pub const HUMIDITY_MODULATION_HZ: f64 = 0.5;

/// Peak-to-peak absolute noise (% RH).
pub const HUMIDITY_NOISE_PCT: f64 = 1.0;

// ===== FLOW (ORIFICE PLATE) =====

/// Characteristic frequency of the differential pressure pulsation (Hz).
pub const FLOW_CHARACTERISTIC_HZ: f64 = 0.8;

/// Relative depth of the differential pressure pulsation.
pub const FLOW_MODULATION_DEPTH: f64 = 0.25;

/// Peak-to-peak noise relative to the signal.
pub const FLOW_NOISE_RATIO: f64 = 0.05;

// ===== THERMOCOUPLE (TYPE K) =====

/// Characteristic frequency of the primary temperature swing (Hz).
pub const THERMOCOUPLE_CHARACTERISTIC_HZ: f64 = 0.15;

/// Amplitude of the primary temperature swing (°C).
pub const THERMOCOUPLE_PRIMARY_SWING_C: f64 = 5.0;

/// Amplitude of the slow secondary drift (°C).
pub const THERMOCOUPLE_SECONDARY_SWING_C: f64 = 2.0;

/// Frequency of the slow secondary drift (Hz).
pub const THERMOCOUPLE_SECONDARY_HZ: f64 = 0.05;

/// Peak-to-peak absolute noise (°C).
pub const THERMOCOUPLE_NOISE_C: f64 = 0.3;
