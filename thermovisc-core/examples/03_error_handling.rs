//! Error Handling Example
//!
//! Every way a run can fail and what each failure reports.
//!
//! ## Error Categories
//!
//! 1. **Acquisition** - an empty or unparseable batch
//! 2. **Configuration** - a parameter that is not a number
//! 3. **Reduction** - a zero-sized grid
//! 4. **Lookup** - a conductivity with no table entry
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 03_error_handling
//! ```

use std::fmt::Debug;

use thermovisc_core::{
    acquisition::parse_batch,
    average,
    config::{parse_value, FIELD_GAIN},
    reduce, run_pipeline, ConditioningParameters, PipelineConfig, SampleGrid, ThermoViscError,
    ViscosityTable,
};

fn report<T: Debug>(label: &str, result: Result<T, ThermoViscError>) {
    match result {
        Ok(value) => println!("  {:<28} ok: {:?}", label, value),
        Err(e) => println!("  {:<28} error: {}", label, e),
    }
}

fn main() {
    println!("ThermoVisc Error Handling Example");
    println!("=================================\n");

    let config = PipelineConfig::default();

    println!("1. Acquisition");
    report("empty batch", run_pipeline(&[], &config).map(|r| r.average));
    let batch = parse_batch("12.5 13.0 sensor-fault 14.0");
    println!(
        "  {:<28} kept {} samples, ignored {} tokens",
        "partially corrupt line",
        batch.samples.len(),
        batch.ignored_tokens
    );
    report(
        "corrupt line run",
        run_pipeline(&batch.samples, &config).map(|r| r.average),
    );

    println!("\n2. Configuration");
    report("gain = \"2.5\"", parse_value(FIELD_GAIN, "2.5"));
    report("gain = \"\" (keep current)", parse_value(FIELD_GAIN, ""));
    report("gain = \"fast\"", parse_value(FIELD_GAIN, "fast"));
    report(
        "gain = \"inf\"",
        ConditioningParameters::from_inputs(Some("inf"), None),
    );

    println!("\n3. Reduction");
    match SampleGrid::from_row_major(0, Vec::new()) {
        Some(grid) => report("0x0 grid", reduce(&grid, 0.1)),
        None => println!("  0x0 grid could not be built"),
    }
    report("average of no columns", average(&[]));

    println!("\n4. Lookup");
    let table = ViscosityTable::standard();
    report("lookup(0.4)", table.lookup(0.4));
    report("lookup(0.45)", table.lookup(0.45));
    println!("  {:<28} {}", "try_lookup(0.45)", table.try_lookup(0.45));
}
