//! Viscosity Lookup Example
//!
//! Exact-match lookups against the standard table, both miss policies, and
//! building a custom table.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_viscosity_lookup
//! ```

use thermovisc_core::{ViscosityEntry, ViscosityTable};

fn main() {
    println!("ThermoVisc Viscosity Lookup Example");
    println!("===================================\n");

    let table = ViscosityTable::standard();

    println!("Standard table ({} entries):", table.len());
    println!("  {:>12} | {:>9}", "conductivity", "viscosity");
    for entry in table.iter() {
        println!("  {:>12.1} | {:>9.1}", entry.thermal_conductivity, entry.viscosity);
    }

    println!("\nLookups:");
    for key in [0.5, 0.55, 0.1 + 0.2, 1.0] {
        match table.lookup(key) {
            Ok(viscosity) => println!("  lookup({})     = {}", key, viscosity),
            Err(e) => println!("  lookup({})     -> {}", key, e),
        }
        println!("  try_lookup({}) = {}", key, table.try_lookup(key));
    }

    println!("\nCustom table:");
    let custom = ViscosityTable::from_entries(&[
        ViscosityEntry::new(0.25, 3.2),
        ViscosityEntry::new(0.75, 2.1),
        ViscosityEntry::new(0.25, 3.4), // replaces 3.2
    ]);
    match custom {
        Ok(custom) => {
            println!("  entries: {}", custom.len());
            println!("  try_lookup(0.25) = {}", custom.try_lookup(0.25));
            println!("  try_lookup(0.5)  = {}", custom.try_lookup(0.5));
        }
        Err(e) => println!("  rejected: {}", e),
    }

    match ViscosityTable::from_entries(&[ViscosityEntry::new(0.3, -1.0)]) {
        Ok(_) => println!("  sentinel value accepted"),
        Err(e) => println!("  sentinel value rejected: {}", e),
    }
}
