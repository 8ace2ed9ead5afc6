//! Physical Constants for SensorSim
//!
//! Fundamental constants used by the sensor formulas. Values are the rounded
//! figures the formulas are calibrated against, not full CODATA precision.

// ===== FUNDAMENTAL PHYSICS CONSTANTS =====

/// Universal gas constant (J/(mol·K)).
///
/// Appears in the Nernst equation for the oxygen cell potential.
///
/// Source: CODATA 2018, rounded to four significant figures
pub const GAS_CONSTANT_J_PER_MOL_K: f64 = 8.314;

/// Faraday constant (C/mol).
///
/// Charge per mole of electrons. Four electrons are transferred per O₂
/// molecule in a zirconia cell, hence the `4F` denominator.
///
/// Source: CODATA 2018, rounded to an integer
pub const FARADAY_CONSTANT_C_PER_MOL: f64 = 96485.0;

/// Electrons transferred per O₂ molecule in the oxygen cell reaction.
pub const OXYGEN_ELECTRONS_PER_MOLECULE: f64 = 4.0;

/// Reference oxygen partial pressure (atm).
///
/// Partial pressure of O₂ in dry air at sea level. The cell output is zero
/// when the measured partial pressure equals this value.
pub const OXYGEN_REFERENCE_PRESSURE_ATM: f64 = 0.21;

// ===== SATURATION VAPOR PRESSURE (MAGNUS) =====

/// Saturation vapor pressure at 0°C (hPa).
///
/// Leading coefficient of the Magnus-type approximation
/// `Psat(T) = 6.1078 · exp(17.27·T / (T + 237.3))`.
///
/// Source: Tetens (1930)
pub const MAGNUS_BASE_PRESSURE_HPA: f64 = 6.1078;

/// Magnus exponent coefficient (dimensionless).
pub const MAGNUS_COEFFICIENT_A: f64 = 17.27;

/// Magnus temperature offset (°C).
pub const MAGNUS_COEFFICIENT_B_C: f64 = 237.3;

// ===== NUMERIC GUARDS =====

/// Floor for quantities that must stay strictly positive (log arguments,
/// square-root arguments, divisors).
///
/// Chosen to match the oxygen partial-pressure floor; small enough to never
/// affect in-range parameters.
pub const NUMERIC_FLOOR: f64 = 1e-3;
