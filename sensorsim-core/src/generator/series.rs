//! Time series produced by the generator

use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Uniformly sampled real-valued signal.
///
/// Sample `n` corresponds to time `t = n / sampling_rate_hz`. A series is
/// always produced whole and never partially mutated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeSeries {
    samples: Vec<f64>,
    sampling_rate_hz: f64,
}

impl TimeSeries {
    /// Wrap existing samples
    pub fn from_samples(samples: Vec<f64>, sampling_rate_hz: f64) -> Self {
        Self { samples, sampling_rate_hz }
    }

    /// The samples in order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series has no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sampling rate (Hz)
    pub fn sampling_rate_hz(&self) -> f64 {
        self.sampling_rate_hz
    }

    /// Time of sample `n` (seconds)
    pub fn time_at(&self, n: usize) -> f64 {
        n as f64 / self.sampling_rate_hz
    }

    /// `(t, value)` pairs for plotting
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.samples
            .iter()
            .enumerate()
            .map(|(n, &value)| (self.time_at(n), value))
    }

    /// Iterate over the samples
    pub fn iter(&self) -> core::slice::Iter<'_, f64> {
        self.samples.iter()
    }

    /// Unwrap into the sample vector
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

impl Index<usize> for TimeSeries {
    type Output = f64;

    fn index(&self, n: usize) -> &f64 {
        &self.samples[n]
    }
}

impl AsRef<[f64]> for TimeSeries {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
