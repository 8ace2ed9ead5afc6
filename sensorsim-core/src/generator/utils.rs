//! Shared numeric helpers for the sensor formulas
//!
//! All helpers are pure functions. The floor helpers are how the engine
//! handles numeric degeneracy: a quantity that must stay strictly positive is
//! replaced by [`NUMERIC_FLOOR`] instead of producing NaN or infinity.

use core::f64::consts::TAU;

use crate::constants::physics::NUMERIC_FLOOR;

/// `sin(2π·f·t)`
pub fn oscillation(frequency_hz: f64, t: f64) -> f64 {
    (TAU * frequency_hz * t).sin()
}

/// `1 + depth·sin(2π·f·t)`, the modulation factor used by every dynamic term
pub fn modulation(depth: f64, frequency_hz: f64, t: f64) -> f64 {
    1.0 + depth * oscillation(frequency_hz, t)
}

/// Replace a non-positive or non-finite quantity with [`NUMERIC_FLOOR`].
///
/// `what` names the quantity for the trace log.
pub fn floor_positive(value: f64, what: &'static str) -> f64 {
    if value > 0.0 && value.is_finite() {
        value
    } else {
        log_trace!("{} = {} floored to {}", what, value, NUMERIC_FLOOR);
        NUMERIC_FLOOR
    }
}
