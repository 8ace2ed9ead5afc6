//! Sampling Constants
//!
//! Sample count, sampling rate and transform sizes shared by every sensor
//! kind. Each can be overridden per call through
//! [`EngineConfig`](crate::config::EngineConfig).

/// Samples per generated time series.
///
/// 200 samples at 100 Hz covers two seconds, long enough to show at least a
/// third of the slowest (0.15 Hz) sensor oscillation.
pub const DEFAULT_SAMPLE_COUNT: usize = 200;

/// Sampling rate (Hz).
///
/// Sample `n` corresponds to time `t = n / DEFAULT_SAMPLING_RATE_HZ`.
pub const DEFAULT_SAMPLING_RATE_HZ: f64 = 100.0;

/// Forward transform length.
///
/// Next power of two above [`DEFAULT_SAMPLE_COUNT`]; the tail is zero padded.
pub const DEFAULT_FFT_SIZE: usize = 256;

/// Smallest accepted transform length. A one-sided spectrum of a shorter
/// transform would be empty.
pub const MIN_FFT_SIZE: usize = 2;

// ===== WINDOW =====

/// Hamming window constant term.
pub const HAMMING_ALPHA: f64 = 0.54;

/// Hamming window cosine coefficient.
pub const HAMMING_BETA: f64 = 0.46;

// ===== POLE/ZERO MAPPING =====

/// Real part of the illustrative z-plane pole pair (1/s).
pub const POLE_DAMPING: f64 = -0.1;

/// Real-axis multipliers of the three s-plane placeholder poles.
///
/// Each is scaled by the sensor's characteristic frequency.
pub const S_PLANE_POLE_MULTIPLIERS: [f64; 3] = [-4.0, -5.0, -8.0];

/// Harmonic of the extra pole pair placed for sensors with rich harmonic
/// content (pressure).
pub const HARMONIC_POLE_MULTIPLE: f64 = 3.0;

/// Left edge of the s-plane plot window, in units of the sensor scale.
pub const S_PLANE_SIGMA_SPAN: f64 = 10.0;

/// Right edge of the s-plane plot window (1/s).
pub const S_PLANE_SIGMA_MAX: f64 = 1.0;

/// Half-height of the s-plane plot window (rad/s).
pub const S_PLANE_OMEGA_SPAN: f64 = 2.0;

/// Half-width of the z-plane plot window.
pub const Z_PLANE_SPAN: f64 = 1.5;

/// Angular step of the z-plane unit circle outline (degrees).
pub const UNIT_CIRCLE_STEP_DEG: u32 = 5;

// ===== PARAMETER INPUT =====

/// Slider positions per parameter range (positions `0..=SLIDER_RESOLUTION`).
pub const SLIDER_RESOLUTION: u32 = 1000;
