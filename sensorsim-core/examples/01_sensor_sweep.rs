//! Sensor Sweep Example
//!
//! Generates one frame for every sensor at its default parameters, then
//! sweeps the thermocouple slider across its range.
//!
//! ## What You'll Learn
//!
//! - Owning a `ParameterStore` and moving sliders
//! - Running the engine for a frame
//! - Reading the time series, spectrum and pole/zero charts
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_sensor_sweep
//! ```

use sensorsim_core::{
    generator::RngNoise,
    params::param_slots,
    Engine, ParameterStore, SensorKind, SimulationResult,
};

fn main() -> SimulationResult<()> {
    println!("SensorSim Sensor Sweep");
    println!("======================\n");

    let engine = Engine::default();
    let mut store = ParameterStore::new();
    let mut noise = RngNoise::seeded(2024);

    for kind in SensorKind::ALL {
        let frame = engine.simulate_stored(&store, kind, &mut noise)?;
        println!("{} ({})", kind, kind.formula());

        for (slot, declared) in param_slots(kind).iter().enumerate() {
            if let Some(spec) = declared.spec() {
                println!("  {} = {} {}", spec.label, store.formatted(kind, slot)?, spec.unit);
            }
        }

        let (min, max) = frame
            .series
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        println!("  signal range: [{:.4}, {:.4}]", min, max);

        if let Some(peak) = frame.spectrum.peak() {
            println!("  spectral peak: {:.4} at {:.2} Hz", peak.magnitude, peak.frequency_hz);
        }

        let s_poles: Vec<String> = frame.s_plane.poles.iter().map(|p| format!("{:.2}", p.re)).collect();
        println!("  s-plane poles: [{}]", s_poles.join(", "));
        for pole in &frame.z_plane.poles {
            println!("  z-plane pole: {:.4} {:+.4}j (|z| = {:.6})", pole.re, pole.im, pole.norm());
        }
        println!();
    }

    println!("Thermocouple slider sweep:");
    println!("--------------------------");
    for position in (0..=1000).step_by(250) {
        let value = store.set_from_slider(SensorKind::Thermocouple, 0, position)?;
        let frame = engine.simulate_stored(&store, SensorKind::Thermocouple, &mut noise)?;
        let mean = frame.series.iter().sum::<f64>() / frame.series.len() as f64;
        println!("  position {:4} -> T = {:6.1} °C, mean output {:7.2} °C", position, value, mean);
    }

    Ok(())
}
