//! Pole/Zero Placement in the s- and z-Planes
//!
//! ## Overview
//!
//! The pole/zero plots are illustrative: they are not fitted to the sensor
//! formulas. Each sensor's characteristic frequency places the points, so
//! switching sensors visibly moves them.
//!
//! ### s-plane
//!
//! Three real poles at `-4·scale`, `-5·scale`, `-8·scale`, where `scale` is
//! the sensor's characteristic frequency value. No zeros.
//!
//! ### z-plane
//!
//! A conjugate pair `s = σ ± jω` with `σ = -0.1` and `ω = 2π·f`, mapped with
//! the exponential (impulse-invariant) map:
//!
//! ```text
//! z = exp(s·T) = exp(σT) · (cos ωT + j·sin ωT)
//! |z| = exp(σT) < 1   since σ < 0
//! ```
//!
//! Pressure gets a second pair at `3ω` for its harmonic content. A single
//! placeholder zero sits at the origin.
//!
//! Every call recomputes the sets from scratch.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    config::{validate_sampling_period, validate_sampling_rate, EngineConfig},
    constants::sampling::{
        DEFAULT_SAMPLING_RATE_HZ, HARMONIC_POLE_MULTIPLE, POLE_DAMPING, S_PLANE_OMEGA_SPAN,
        S_PLANE_POLE_MULTIPLIERS, S_PLANE_SIGMA_MAX, S_PLANE_SIGMA_SPAN, UNIT_CIRCLE_STEP_DEG,
        Z_PLANE_SPAN,
    },
    errors::SimulationResult,
    sensor::SensorKind,
};

pub use rustfft::num_complex::Complex64;

/// Most poles any sensor places (pressure in the z-plane)
pub const MAX_POLES: usize = 4;

/// Most zeros any sensor places
pub const MAX_ZEROS: usize = 1;

/// Fixed-capacity set of pole positions
pub type PoleSet = Vec<Complex64, MAX_POLES>;

/// Fixed-capacity set of zero positions
pub type ZeroSet = Vec<Complex64, MAX_ZEROS>;

/// Axis-aligned plot window for a pole/zero chart
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlotExtent {
    /// Left edge (real axis)
    pub re_min: f64,
    /// Right edge (real axis)
    pub re_max: f64,
    /// Bottom edge (imaginary axis)
    pub im_min: f64,
    /// Top edge (imaginary axis)
    pub im_max: f64,
}

impl PlotExtent {
    /// Whether a point falls inside the window
    pub fn contains(&self, point: Complex64) -> bool {
        (self.re_min..=self.re_max).contains(&point.re)
            && (self.im_min..=self.im_max).contains(&point.im)
    }
}

/// Everything a renderer needs to draw one pole/zero chart
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoleZeroPlot {
    /// Pole positions
    pub poles: PoleSet,
    /// Zero positions
    pub zeros: ZeroSet,
    /// Suggested plot window
    pub extent: PlotExtent,
}

/// Continuous-domain placeholder poles, all on the negative real axis
pub fn s_domain_poles(kind: SensorKind) -> PoleSet {
    let scale = kind.pole_scale();
    let mut poles = PoleSet::new();
    for multiplier in S_PLANE_POLE_MULTIPLIERS {
        poles.push(Complex64::new(multiplier * scale, 0.0)).ok();
    }
    poles
}

/// Continuous-domain zeros (none are placed)
pub fn s_domain_zeros(_kind: SensorKind) -> ZeroSet {
    ZeroSet::new()
}

/// Map a continuous-domain point to the discrete domain: `z = exp(s·T)`
pub fn s_to_z(s: Complex64, sampling_period_s: f64) -> Complex64 {
    (s * sampling_period_s).exp()
}

/// Discrete-domain poles and zeros for a sampling period `T` (seconds).
///
/// Poles come in conjugate pairs, positive imaginary part first. `T` must be
/// finite and positive; anything else would place poles on or outside the
/// unit circle.
pub fn z_domain_poles(
    kind: SensorKind,
    sampling_period_s: f64,
) -> SimulationResult<(PoleSet, ZeroSet)> {
    validate_sampling_period(sampling_period_s)?;
    Ok(place_z_poles(kind, sampling_period_s))
}

fn place_z_poles(kind: SensorKind, sampling_period_s: f64) -> (PoleSet, ZeroSet) {
    let omega = kind.characteristic_omega();
    let mut poles = PoleSet::new();
    push_conjugate_pair(&mut poles, omega, sampling_period_s);
    if kind.has_harmonic_poles() {
        push_conjugate_pair(&mut poles, HARMONIC_POLE_MULTIPLE * omega, sampling_period_s);
    }

    let mut zeros = ZeroSet::new();
    zeros.push(Complex64::new(0.0, 0.0)).ok();

    (poles, zeros)
}

fn push_conjugate_pair(poles: &mut PoleSet, omega: f64, sampling_period_s: f64) {
    let z = s_to_z(Complex64::new(POLE_DAMPING, omega), sampling_period_s);
    poles.push(z).ok();
    poles.push(z.conj()).ok();
}

/// Plot window for a sensor's s-plane chart
pub fn s_plane_extent(kind: SensorKind) -> PlotExtent {
    PlotExtent {
        re_min: -S_PLANE_SIGMA_SPAN * kind.pole_scale(),
        re_max: S_PLANE_SIGMA_MAX,
        im_min: -S_PLANE_OMEGA_SPAN,
        im_max: S_PLANE_OMEGA_SPAN,
    }
}

/// Plot window for the z-plane chart (same for every sensor)
pub fn z_plane_extent() -> PlotExtent {
    PlotExtent {
        re_min: -Z_PLANE_SPAN,
        re_max: Z_PLANE_SPAN,
        im_min: -Z_PLANE_SPAN,
        im_max: Z_PLANE_SPAN,
    }
}

/// Closed outline of the unit circle, one point every `step_deg` degrees.
///
/// The first and last points coincide at `1 + 0j`. When `step_deg` does not
/// divide 360 the final, shorter segment ends at 360°. A step of 0 is treated
/// as 1 degree.
pub fn unit_circle(step_deg: u32) -> std::vec::Vec<Complex64> {
    let step = step_deg.max(1);
    let closing = (360 % step != 0).then_some(360u32);
    (0..=360u32)
        .step_by(step as usize)
        .chain(closing)
        .map(|deg| Complex64::from_polar(1.0, f64::from(deg).to_radians()))
        .collect()
}

/// Pole/zero charts for one sampling rate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoleZeroMapper {
    sampling_period_s: f64,
}

impl Default for PoleZeroMapper {
    fn default() -> Self {
        Self { sampling_period_s: 1.0 / DEFAULT_SAMPLING_RATE_HZ }
    }
}

impl PoleZeroMapper {
    /// Mapper for a sampling rate (Hz)
    pub fn new(sampling_rate_hz: f64) -> SimulationResult<Self> {
        validate_sampling_rate(sampling_rate_hz)?;
        Ok(Self { sampling_period_s: 1.0 / sampling_rate_hz })
    }

    /// Mapper for an engine configuration
    pub fn from_config(config: &EngineConfig) -> SimulationResult<Self> {
        Self::new(config.sampling_rate_hz)
    }

    /// Sampling period `T` (seconds)
    pub fn sampling_period_s(&self) -> f64 {
        self.sampling_period_s
    }

    /// s-plane chart for a sensor
    pub fn s_plane(&self, kind: SensorKind) -> PoleZeroPlot {
        PoleZeroPlot {
            poles: s_domain_poles(kind),
            zeros: s_domain_zeros(kind),
            extent: s_plane_extent(kind),
        }
    }

    /// z-plane chart for a sensor
    pub fn z_plane(&self, kind: SensorKind) -> PoleZeroPlot {
        let (poles, zeros) = place_z_poles(kind, self.sampling_period_s);
        PoleZeroPlot { poles, zeros, extent: z_plane_extent() }
    }

    /// Unit circle outline at the default resolution
    pub fn unit_circle(&self) -> std::vec::Vec<Complex64> {
        unit_circle(UNIT_CIRCLE_STEP_DEG)
    }
}

/// Pole magnitude expected for every z-plane pole: `exp(σ·T)`
pub fn expected_pole_radius(sampling_period_s: f64) -> f64 {
    (POLE_DAMPING * sampling_period_s).exp()
}
