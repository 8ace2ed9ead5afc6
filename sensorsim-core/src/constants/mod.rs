//! Constants for SensorSim Core
//!
//! Centralized, documented constants used throughout the engine. All numeric
//! values the formulas and transforms depend on live here, with units in
//! their names wherever a unit applies.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Physics**: Physical constants used by the sensor formulas
//! - **Sensors**: Per-sensor characteristic frequencies and modulation depths
//! - **Sampling**: Sample count, sampling rate and transform sizes
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Keep per-sensor values in `sensors`, shared values in `sampling`
//! 3. Use descriptive names that include units

/// Physical constants used by the sensor formulas.
pub mod physics;

/// Sensor-specific modulation, disturbance and noise parameters.
pub mod sensors;

/// Sampling and transform sizes shared by every sensor kind.
pub mod sampling;

// Re-export commonly used constants for convenience
pub use physics::{GAS_CONSTANT_J_PER_MOL_K, FARADAY_CONSTANT_C_PER_MOL, NUMERIC_FLOOR};

pub use sampling::{
    DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLING_RATE_HZ, DEFAULT_FFT_SIZE,
    SLIDER_RESOLUTION,
};
