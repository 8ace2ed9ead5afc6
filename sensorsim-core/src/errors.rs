//! Error Types for the Simulation Engine
//!
//! ## Design Philosophy
//!
//! The engine is a pure computation library, so its error surface is small:
//!
//! 1. **Copy Semantics**: Errors implement Copy and carry only inline data
//!    (`&'static str` for messages), so they are cheap to return and store.
//!
//! 2. **Reject at the Boundary**: Bad input (out-of-range parameters, bad
//!    selectors, unusable configuration) is rejected before any sample is
//!    computed. Once generation starts it always completes.
//!
//! 3. **Degeneracy is not an Error**: A formula input that would produce a
//!    non-finite value is floored to a small positive constant and the sample
//!    is still produced. Callers never see NaN or infinity.
//!
//! ## Error Categories
//!
//! ### Parameter Errors
//! - `InvalidParameterRange`: Value outside the slot's declared range
//! - `ReservedParameter`: Write to a slot the sensor does not use
//! - `InvalidValue`: NaN or infinite parameter
//! - `UnknownParameter`: Slot index past the end of the triple
//!
//! ### Programmer Errors
//! - `UnknownSensor`: Positional selector does not name a sensor
//! - `InvalidConfig`: Sample count, sampling rate or transform size unusable
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use sensorsim_core::{SensorKind, SensorParams, SimulationError};
//!
//! let triple = [0.50, 298.0, 0.0];
//! match SensorParams::from_triple(SensorKind::Oxygen, triple) {
//!     Ok(_params) => {
//!         // Generate and render
//!     }
//!     Err(SimulationError::InvalidParameterRange { min, max, .. }) => {
//!         // Slider bounds are wrong - clamp into [min, max] and retry
//!         assert_eq!((min, max), (0.10, 0.30));
//!     }
//!     Err(_) => {
//!         // Other errors - log and investigate
//!     }
//! }
//! ```

use thiserror_no_std::Error;

use crate::sensor::SensorKind;

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Simulation errors - all inline data, no allocation
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SimulationError {
    /// Parameter outside its declared range for the sensor
    #[error("{kind} parameter {slot} = {value} outside range [{min}, {max}]")]
    InvalidParameterRange {
        /// Sensor the parameter belongs to
        kind: SensorKind,
        /// Zero-based slot index within the parameter triple
        slot: usize,
        /// The rejected value
        value: f64,
        /// Lower bound of the slot
        min: f64,
        /// Upper bound of the slot
        max: f64,
    },

    /// Attempt to set a slot the sensor does not use
    #[error("{kind} parameter {slot} is reserved")]
    ReservedParameter {
        /// Sensor the parameter belongs to
        kind: SensorKind,
        /// Zero-based slot index within the parameter triple
        slot: usize,
    },

    /// Slot index past the end of the parameter triple
    #[error("Parameter slot {slot} does not exist")]
    UnknownParameter {
        /// The rejected slot index
        slot: usize,
    },

    /// Value makes no numeric sense (NaN, infinity)
    #[error("Invalid value: not a valid number")]
    InvalidValue,

    /// Positional sensor selector out of range
    #[error("Unknown sensor index {index}")]
    UnknownSensor {
        /// The rejected selector index
        index: usize,
    },

    /// Engine configuration cannot produce a meaningful result
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration
        reason: &'static str,
    },
}
