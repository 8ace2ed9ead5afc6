//! Windowed Magnitude Spectrum
//!
//! ## Algorithm
//!
//! ```text
//! 1. buffer[i] = x[i] · w(i)     for i < min(len, fft_size)
//!    buffer[i] = 0               otherwise (zero padding)
//! 2. X = DFT(buffer)             (forward, unnormalized)
//! 3. |X[k]| / fft_size           for k in [0, fft_size/2)
//! ```
//!
//! The window is Hamming, `w(i) = 0.54 − 0.46·cos(2π·i / (len − 1))`, sized
//! to the series rather than the transform, so the zero padding is not
//! tapered. A series of one sample has no defined window (the denominator is
//! zero); it gets a unit window instead.
//!
//! Series longer than the transform are truncated to the first `fft_size`
//! samples. The window is still computed against the full series length.
//!
//! ## Frequency Axis
//!
//! Bin `k` sits at `k · Fs / fft_size` Hz. With the defaults (100 Hz, 256
//! points) the resolution is about 0.39 Hz and the last bin is just below the
//! 50 Hz Nyquist limit.

use std::sync::Arc;

use core::f64::consts::TAU;
use core::fmt;

use rustfft::{num_complex::Complex64, Fft, FftPlanner};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    config::{validate_fft_size, EngineConfig},
    constants::sampling::{DEFAULT_FFT_SIZE, HAMMING_ALPHA, HAMMING_BETA},
    errors::SimulationResult,
    generator::TimeSeries,
};

/// Hamming window coefficients for a series of `len` samples.
///
/// Lengths 0 and 1 yield a unit window.
pub fn hamming_window(len: usize) -> Vec<f64> {
    if len <= 1 {
        return vec![1.0; len];
    }
    let denominator = (len - 1) as f64;
    (0..len)
        .map(|i| HAMMING_ALPHA - HAMMING_BETA * (TAU * i as f64 / denominator).cos())
        .collect()
}

/// One bin of a one-sided magnitude spectrum
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpectrumBin {
    /// Bin index `k`
    pub index: usize,
    /// Bin center frequency `k · Fs / fft_size` (Hz)
    pub frequency_hz: f64,
    /// `|X[k]| / fft_size`
    pub magnitude: f64,
}

/// One-sided magnitude spectrum of exactly `fft_size / 2` bins
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spectrum {
    bins: Vec<SpectrumBin>,
    fft_size: usize,
    sampling_rate_hz: f64,
}

impl Spectrum {
    /// All bins in index order
    pub fn bins(&self) -> &[SpectrumBin] {
        &self.bins
    }

    /// Number of bins (`fft_size / 2`)
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Whether the spectrum has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Transform length the spectrum was computed with
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Sampling rate of the analyzed series (Hz)
    pub fn sampling_rate_hz(&self) -> f64 {
        self.sampling_rate_hz
    }

    /// Spacing between bins (Hz)
    pub fn resolution_hz(&self) -> f64 {
        self.sampling_rate_hz / self.fft_size as f64
    }

    /// Center frequency of bin `index` (Hz)
    pub fn frequency_hz(&self, index: usize) -> f64 {
        index as f64 * self.resolution_hz()
    }

    /// `(index, magnitude)` pairs for plotting
    pub fn pairs(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.bins.iter().map(|bin| (bin.index, bin.magnitude))
    }

    /// Magnitudes in index order
    pub fn magnitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.bins.iter().map(|bin| bin.magnitude)
    }

    /// Strongest bin above DC.
    ///
    /// DC is skipped because every sensor with a non-zero operating point
    /// would otherwise peak there.
    pub fn peak(&self) -> Option<SpectrumBin> {
        self.bins
            .iter()
            .skip(1)
            .copied()
            .max_by(|a, b| a.magnitude.total_cmp(&b.magnitude))
    }
}

/// Forward transform plus windowing, planned once per transform length
#[derive(Clone)]
pub struct SpectrumAnalyzer {
    fft: Arc<dyn Fft<f64>>,
    fft_size: usize,
}

impl fmt::Debug for SpectrumAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpectrumAnalyzer")
            .field("fft_size", &self.fft_size)
            .finish()
    }
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::plan(DEFAULT_FFT_SIZE)
    }
}

impl SpectrumAnalyzer {
    /// Analyzer for a transform of `fft_size` points (at least 2)
    pub fn new(fft_size: usize) -> SimulationResult<Self> {
        validate_fft_size(fft_size)?;
        Ok(Self::plan(fft_size))
    }

    /// Analyzer for an engine configuration
    pub fn from_config(config: &EngineConfig) -> SimulationResult<Self> {
        Self::new(config.fft_size)
    }

    fn plan(fft_size: usize) -> Self {
        let fft = FftPlanner::<f64>::new().plan_fft_forward(fft_size);
        Self { fft, fft_size }
    }

    /// Transform length
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// One-sided magnitude spectrum of a series
    pub fn analyze(&self, series: &TimeSeries) -> Spectrum {
        let magnitudes = self.magnitudes(series.samples());
        let resolution = series.sampling_rate_hz() / self.fft_size as f64;
        let bins = magnitudes
            .into_iter()
            .enumerate()
            .map(|(index, magnitude)| SpectrumBin {
                index,
                frequency_hz: index as f64 * resolution,
                magnitude,
            })
            .collect();
        Spectrum {
            bins,
            fft_size: self.fft_size,
            sampling_rate_hz: series.sampling_rate_hz(),
        }
    }

    /// Raw one-sided magnitudes `|X[k]| / fft_size` of a sample slice
    pub fn magnitudes(&self, samples: &[f64]) -> Vec<f64> {
        let window = hamming_window(samples.len());
        let mut buffer = vec![Complex64::new(0.0, 0.0); self.fft_size];
        for ((slot, &sample), &w) in buffer.iter_mut().zip(samples).zip(&window) {
            *slot = Complex64::new(sample * w, 0.0);
        }
        if samples.len() > self.fft_size {
            log_debug!(
                "Series of {} samples truncated to {}-point transform",
                samples.len(), self.fft_size
            );
        }

        self.fft.process(&mut buffer);

        let scale = self.fft_size as f64;
        buffer[..self.fft_size / 2]
            .iter()
            .map(|x| x.norm() / scale)
            .collect()
    }
}

/// One-sided magnitude spectrum with a freshly planned transform
pub fn analyze(series: &TimeSeries, fft_size: usize) -> SimulationResult<Spectrum> {
    Ok(SpectrumAnalyzer::new(fft_size)?.analyze(series))
}
