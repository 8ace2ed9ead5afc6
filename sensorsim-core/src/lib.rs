//! Sensor simulation engine for SensorSim
//!
//! Synthesizes physics-based signals for five industrial sensors and
//! analyzes them in the time, frequency and pole/zero domains.
//! Rendering is left to the consumer: every result is plain data.
//!
//! Pipeline per generation cycle:
//! - Parameters from the [`ParameterStore`] (always in range)
//! - 200 samples at 100 Hz from the sensor's physics model
//! - Hamming-windowed 256-point magnitude spectrum
//! - Illustrative pole/zero positions in the s- and z-planes
//!
//! ```rust
//! use sensorsim_core::{Engine, ParameterStore, SensorKind};
//! use sensorsim_core::generator::RngNoise;
//!
//! let engine = Engine::default();
//! let mut store = ParameterStore::new();
//! store.set(SensorKind::Thermocouple, 0, 80.0)?;
//!
//! let frame = engine.simulate_stored(&store, SensorKind::Thermocouple, &mut RngNoise::seeded(7))?;
//! assert_eq!(frame.series.len(), 200);
//! assert_eq!(frame.spectrum.len(), 128);
//! # Ok::<(), sensorsim_core::SimulationError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    };
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        if false {
            let _ = ::core::format_args!($($arg)*);
        }
    };
}

pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod generator;
pub mod params;
pub mod poles;
pub mod sensor;
pub mod spectrum;
pub mod traits;

// Public API
pub use config::EngineConfig;
pub use engine::{Engine, SimulationFrame};
pub use errors::{SimulationError, SimulationResult};
pub use generator::{SignalGenerator, TimeSeries};
pub use params::{ParameterStore, ParameterTriple, SensorParams};
pub use poles::{PoleSet, PoleZeroMapper, PoleZeroPlot, ZeroSet};
pub use sensor::SensorKind;
pub use spectrum::{Spectrum, SpectrumAnalyzer};
pub use traits::{NoiseSource, SensorModel};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
