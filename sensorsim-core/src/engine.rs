//! Simulation Engine
//!
//! One generation cycle, end to end:
//!
//! ```text
//! ParameterStore ──► SignalGenerator ──► TimeSeries ──► SpectrumAnalyzer ──► Spectrum
//!        │
//!        └──────────► PoleZeroMapper ──► s-plane / z-plane charts
//! ```
//!
//! The engine holds no mutable state. Each [`Engine::simulate`] call builds a
//! fresh [`SimulationFrame`] from the parameters it is given, so a UI event
//! loop can call it on every slider move or sensor switch and hand the frame
//! straight to its renderer.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    config::EngineConfig,
    errors::SimulationResult,
    generator::{SignalGenerator, TimeSeries},
    params::{ParameterStore, SensorParams},
    poles::{PoleZeroMapper, PoleZeroPlot},
    sensor::SensorKind,
    spectrum::{Spectrum, SpectrumAnalyzer},
    traits::NoiseSource,
};

/// Everything the rendering layer draws for one sensor and parameter set
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimulationFrame {
    /// Sensor the frame was generated for
    pub kind: SensorKind,
    /// Parameters the frame was generated from
    pub params: SensorParams,
    /// Time-domain output
    pub series: TimeSeries,
    /// One-sided magnitude spectrum of `series`
    pub spectrum: Spectrum,
    /// Continuous-domain pole/zero chart
    pub s_plane: PoleZeroPlot,
    /// Discrete-domain pole/zero chart
    pub z_plane: PoleZeroPlot,
}

/// Configured generator, analyzer and mapper
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    generator: SignalGenerator,
    analyzer: SpectrumAnalyzer,
    mapper: PoleZeroMapper,
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            generator: SignalGenerator::default(),
            analyzer: SpectrumAnalyzer::default(),
            mapper: PoleZeroMapper::default(),
        }
    }
}

impl Engine {
    /// Engine for a configuration, rejecting unusable settings up front
    pub fn new(config: EngineConfig) -> SimulationResult<Self> {
        config.validate()?;
        log_debug!(
            "Engine configured: {} samples at {} Hz, {}-point FFT",
            config.sample_count, config.sampling_rate_hz, config.fft_size
        );
        Ok(Self {
            config,
            generator: SignalGenerator::from_config(&config)?,
            analyzer: SpectrumAnalyzer::from_config(&config)?,
            mapper: PoleZeroMapper::from_config(&config)?,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Signal generator
    pub fn generator(&self) -> &SignalGenerator {
        &self.generator
    }

    /// Spectrum analyzer
    pub fn analyzer(&self) -> &SpectrumAnalyzer {
        &self.analyzer
    }

    /// Pole/zero mapper
    pub fn mapper(&self) -> &PoleZeroMapper {
        &self.mapper
    }

    /// Run a full generation cycle for one parameter set
    pub fn simulate(
        &self,
        params: &SensorParams,
        noise: &mut dyn NoiseSource,
    ) -> SimulationResult<SimulationFrame> {
        let kind = params.kind();
        let series = self.generator.generate(params, noise)?;
        let spectrum = self.analyzer.analyze(&series);
        let frame = SimulationFrame {
            kind,
            params: *params,
            series,
            spectrum,
            s_plane: self.mapper.s_plane(kind),
            z_plane: self.mapper.z_plane(kind),
        };
        if let Some(peak) = frame.spectrum.peak() {
            log_debug!(
                "{} frame: spectral peak {:.3} at {:.2} Hz",
                kind, peak.magnitude, peak.frequency_hz
            );
        }
        Ok(frame)
    }

    /// Run a full generation cycle with a sensor's current stored parameters
    pub fn simulate_stored(
        &self,
        store: &ParameterStore,
        kind: SensorKind,
        noise: &mut dyn NoiseSource,
    ) -> SimulationResult<SimulationFrame> {
        self.simulate(&store.params(kind), noise)
    }
}
