//! Pull-distance sweep: bridge strength as the two halves separate.
//!
//! Outputs CSV: zones,pull,bridge_strength,persistence,reclaimed
//!
//! Run with:
//!   cargo run --example nested_dilation

use dilation_nest_sim::prelude::*;

fn main() -> Result<()> {
    let pulls = [0.0, 0.5, 1.0, 2.0, 4.0];

    println!("zones,pull,bridge_strength,persistence,reclaimed");

    for zones in 2..=6 {
        let sim = DilationNestSimulator::new(SimulatorConfig::default().with_zones(zones))?
            .with_resonance(DualPassResonance::default());
        // Same seed per row so only the pull changes between columns.
        let metrics = sim.em_dilation_pulse(&mut GaussianNoise::seeded(42))?;

        for &pull in &pulls {
            let bridge = sim.transmission_across_gap(pull)?;
            println!(
                "{},{:.1},{:.4},{:.4},{:.4}",
                zones, pull, bridge, metrics.persistence, metrics.reclaimed
            );
        }
    }
    Ok(())
}
