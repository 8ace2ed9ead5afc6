//! Engine configuration
//!
//! Runtime overrides for the sampling constants. The defaults reproduce the
//! fixed `N = 200`, `Fs = 100 Hz`, `fftSize = 256` setup; a consumer that
//! wants a longer record or a finer spectrum changes them here and the whole
//! engine follows.
//!
//! ```rust
//! use sensorsim_core::EngineConfig;
//!
//! let config = EngineConfig::default()
//!     .with_sample_count(1000)
//!     .with_fft_size(1024);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.sampling_period_s(), 0.01);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::sampling::{
        DEFAULT_FFT_SIZE, DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLING_RATE_HZ, MIN_FFT_SIZE,
    },
    errors::{SimulationError, SimulationResult},
    traits::Validatable,
};

/// Sampling and transform sizes for one engine instance
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Samples per generated series
    pub sample_count: usize,
    /// Sampling rate (Hz)
    pub sampling_rate_hz: f64,
    /// Forward transform length
    pub fft_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            sampling_rate_hz: DEFAULT_SAMPLING_RATE_HZ,
            fft_size: DEFAULT_FFT_SIZE,
        }
    }
}

impl EngineConfig {
    /// Override the number of samples per series
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Override the sampling rate
    pub fn with_sampling_rate(mut self, sampling_rate_hz: f64) -> Self {
        self.sampling_rate_hz = sampling_rate_hz;
        self
    }

    /// Override the transform length
    pub fn with_fft_size(mut self, fft_size: usize) -> Self {
        self.fft_size = fft_size;
        self
    }

    /// Sampling period `1 / Fs` (seconds)
    pub fn sampling_period_s(&self) -> f64 {
        1.0 / self.sampling_rate_hz
    }

    /// Reject configurations that cannot produce a meaningful result
    pub fn validate(&self) -> SimulationResult<()> {
        if self.sample_count == 0 {
            return Err(SimulationError::InvalidConfig {
                reason: "sample count must be at least 1",
            });
        }
        validate_sampling_rate(self.sampling_rate_hz)?;
        validate_fft_size(self.fft_size)
    }
}

/// Sampling rate must be finite and strictly positive
pub(crate) fn validate_sampling_rate(sampling_rate_hz: f64) -> SimulationResult<()> {
    if !sampling_rate_hz.is_valid() || sampling_rate_hz <= 0.0 {
        return Err(SimulationError::InvalidConfig {
            reason: "sampling rate must be finite and positive",
        });
    }
    Ok(())
}

/// Sampling period must be finite and strictly positive
pub(crate) fn validate_sampling_period(sampling_period_s: f64) -> SimulationResult<()> {
    if !sampling_period_s.is_valid() || sampling_period_s <= 0.0 {
        return Err(SimulationError::InvalidConfig {
            reason: "sampling period must be finite and positive",
        });
    }
    Ok(())
}

/// Transform must be long enough to yield a non-empty one-sided spectrum
pub(crate) fn validate_fft_size(fft_size: usize) -> SimulationResult<()> {
    if fft_size < MIN_FFT_SIZE {
        return Err(SimulationError::InvalidConfig {
            reason: "FFT size must be at least 2",
        });
    }
    Ok(())
}
