//! Basic Pipeline Example
//!
//! Runs one batch of raw samples through conditioning, shaping, decay
//! reduction and averaging, printing each intermediate stage.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_pipeline
//! ```

use thermovisc_core::{
    condition, reduce, shape_with_outcome, ConditioningParameters, DecayConfig, Pipeline,
    PipelineConfig,
};

fn main() -> thermovisc_core::Result<()> {
    println!("ThermoVisc Basic Pipeline Example");
    println!("=================================\n");

    // Eleven readings: a 3x3 grid uses nine, the last two are dropped
    let raw = [20.1, 20.4, 20.2, 20.9, 21.3, 21.0, 21.8, 22.1, 21.9, 22.5, 22.7];
    let config = PipelineConfig::new(ConditioningParameters::new(1.5, -2.0), DecayConfig::new(0.1));

    println!("Raw samples ({}): {:?}\n", raw.len(), raw);

    let conditioned = condition(&raw, config.conditioning);
    println!(
        "Conditioned (gain={}, offset={}):",
        config.conditioning.gain, config.conditioning.offset
    );
    println!("  {:?}\n", conditioned);

    let outcome = shape_with_outcome(&conditioned)?;
    let n = outcome.grid.dimension();
    println!("Grid {}x{} ({} samples discarded):", n, n, outcome.discarded);
    for row in 0..n {
        if let Some(values) = outcome.grid.row(row) {
            println!("  row {}: {:?}", row, values);
        }
    }

    let columns = reduce(&outcome.grid, config.decay.decay_factor)?;
    println!("\nColumn reductions (decay factor {}):", config.decay.decay_factor);
    for (col, value) in columns.iter().enumerate() {
        println!("  col {}: {:.4}", col, value);
    }

    // Same run in one call
    let report = Pipeline::new(config).run(&raw)?;
    println!("\nAverage: {:.4}", report.average);
    println!(
        "Samples used: {}, discarded: {}",
        report.samples_used, report.samples_discarded
    );

    Ok(())
}
