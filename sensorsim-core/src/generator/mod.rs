//! Physics-Based Signal Generator
//!
//! ## Overview
//!
//! Each sensor's output is built from an analytic formula evaluated at
//! `t = n / Fs` for `n` in `[0, sample_count)`. The formulas live in one
//! module per sensor, each implementing [`SensorModel`]:
//!
//! | Sensor | Physics | Disturbance | Noise (peak) |
//! |---|---|---|---|
//! | Oxygen | Nernst potential, P_O₂ ±10% @ 0.2 Hz | 1 mV @ 0.05 Hz | ±0.25 mV |
//! | Pressure | V_out/S, V_out ±30% @ 1.5 Hz | 10% @ 3.0 Hz | ±1% |
//! | Humidity | RH carried across Magnus Psat | none | ±0.5 %RH |
//! | Flow | orifice equation, ΔP ±25% @ 0.8 Hz | none | ±2.5% |
//! | Thermocouple | T + 5·sin(0.15 Hz) + 2·sin(0.05 Hz) | none | ±0.15°C |
//!
//! ## Guarantees
//!
//! - Output length always equals the configured sample count
//! - Every sample is finite: parameters are validated up front and
//!   degenerate intermediate values are floored, never propagated
//! - Noise and disturbance are added on top of the physics term
//!
//! ## Usage
//!
//! ```rust
//! use sensorsim_core::{SensorKind, SensorParams, SignalGenerator};
//! use sensorsim_core::generator::RngNoise;
//!
//! let generator = SignalGenerator::default();
//! let params = SensorParams::defaults(SensorKind::Pressure);
//! let mut noise = RngNoise::seeded(1);
//!
//! let series = generator.generate(&params, &mut noise)?;
//! assert_eq!(series.len(), 200);
//! # Ok::<(), sensorsim_core::SimulationError>(())
//! ```

mod flow;
mod humidity;
mod noise;
mod oxygen;
mod pressure;
mod series;
mod thermocouple;
mod utils;

pub use flow::OrificeFlowMeter;
pub use humidity::{saturation_pressure_hpa, HumiditySensor};
pub use noise::{RngNoise, Silent};
pub use oxygen::OxygenCell;
pub use pressure::PressureBridge;
pub use series::TimeSeries;
pub use thermocouple::Thermocouple;

use crate::{
    config::{validate_sampling_rate, EngineConfig},
    constants::sampling::{DEFAULT_SAMPLE_COUNT, DEFAULT_SAMPLING_RATE_HZ},
    errors::{SimulationError, SimulationResult},
    params::{ParameterTriple, SensorParams},
    sensor::SensorKind,
    traits::{NoiseSource, SensorModel},
};

/// Produces fixed-length time series for any sensor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalGenerator {
    sample_count: usize,
    sampling_rate_hz: f64,
}

impl Default for SignalGenerator {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            sampling_rate_hz: DEFAULT_SAMPLING_RATE_HZ,
        }
    }
}

impl SignalGenerator {
    /// Generator with explicit sample count and sampling rate
    pub fn new(sample_count: usize, sampling_rate_hz: f64) -> SimulationResult<Self> {
        if sample_count == 0 {
            return Err(SimulationError::InvalidConfig {
                reason: "sample count must be at least 1",
            });
        }
        validate_sampling_rate(sampling_rate_hz)?;
        Ok(Self { sample_count, sampling_rate_hz })
    }

    /// Generator for an engine configuration
    pub fn from_config(config: &EngineConfig) -> SimulationResult<Self> {
        Self::new(config.sample_count, config.sampling_rate_hz)
    }

    /// Samples per generated series
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Sampling rate (Hz)
    pub fn sampling_rate_hz(&self) -> f64 {
        self.sampling_rate_hz
    }

    /// Generate a full series, drawing noise from `noise`.
    ///
    /// Parameters are checked against their declared ranges first; an
    /// out-of-range value is rejected rather than producing a series from
    /// physically meaningless input.
    pub fn generate(
        &self,
        params: &SensorParams,
        noise: &mut dyn NoiseSource,
    ) -> SimulationResult<TimeSeries> {
        let params = SensorParams::from_triple(params.kind(), params.to_triple())?;
        let samples = with_model(&params, |model| {
            (0..self.sample_count)
                .map(|n| model.sample(self.time_at(n), noise))
                .collect::<Vec<_>>()
        });
        log_debug!(
            "Generated {} samples for {} at {} Hz",
            samples.len(), params.kind(), self.sampling_rate_hz
        );
        Ok(TimeSeries::from_samples(samples, self.sampling_rate_hz))
    }

    /// Generate the noise-free series (physics plus disturbance)
    pub fn generate_clean(&self, params: &SensorParams) -> SimulationResult<TimeSeries> {
        self.generate(params, &mut Silent)
    }

    fn time_at(&self, n: usize) -> f64 {
        n as f64 / self.sampling_rate_hz
    }
}

/// Generate a series from a raw parameter triple.
///
/// Convenience entry point for callers that hold the UI's triple rather than
/// typed parameters. Reserved slots are ignored.
pub fn generate(
    kind: SensorKind,
    triple: ParameterTriple,
    sample_count: usize,
    sampling_rate_hz: f64,
    noise: &mut dyn NoiseSource,
) -> SimulationResult<TimeSeries> {
    let params = SensorParams::from_triple(kind, triple)?;
    SignalGenerator::new(sample_count, sampling_rate_hz)?.generate(&params, noise)
}

/// Noise-free value of a sensor at time `t` (seconds)
pub fn clean_sample(params: &SensorParams, t: f64) -> f64 {
    with_model(params, |model| model.clean_sample(t))
}

/// Deterministic physics term of a sensor at time `t`, before disturbance
pub fn physics_term(params: &SensorParams, t: f64) -> f64 {
    with_model(params, |model| model.physics(t))
}

/// Run `f` against the physics model matching `params`
fn with_model<T>(params: &SensorParams, f: impl FnOnce(&dyn SensorModel) -> T) -> T {
    match *params {
        SensorParams::Oxygen { partial_pressure_atm, temperature_k } => {
            f(&OxygenCell { partial_pressure_atm, temperature_k })
        }
        SensorParams::Pressure { output_voltage_v, sensitivity } => {
            f(&PressureBridge { output_voltage_v, sensitivity })
        }
        SensorParams::Humidity {
            relative_humidity_pct,
            temperature_c,
            reference_temperature_c,
        } => f(&HumiditySensor {
            relative_humidity_pct,
            temperature_c,
            reference_temperature_c,
        }),
        SensorParams::Flow { flow_rate, density_kg_m3, area_m2 } => {
            f(&OrificeFlowMeter { flow_rate, density_kg_m3, area_m2 })
        }
        SensorParams::Thermocouple { temperature_c } => f(&Thermocouple { temperature_c }),
    }
}
