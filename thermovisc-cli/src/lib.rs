//! Command-line front end for the ThermoVisc pipeline
//!
//! ## Overview
//!
//! The core crate only sees finished numbers. This crate owns everything
//! around it:
//!
//! - **Acquisition**: one newline-terminated batch from `--input` or stdin
//! - **Configuration**: defaults, a JSON file, `THERMOVISC_*` variables,
//!   flags and optional interactive prompts, merged in that order
//! - **Reporting**: the average (and optional viscosity) on stdout, or the
//!   full report as JSON
//! - **Logging**: `log` records from the core bridged into `tracing`,
//!   written to stderr
//!
//! ## Exit Status
//!
//! | Outcome                          | Status |
//! |----------------------------------|--------|
//! | Report written                   | 0      |
//! | Any error (config, input, stage) | 1      |
//!
//! ## Example
//!
//! ```bash
//! echo "1 2 3 4 5 6 7 8 9" | thermovisc --gain 2 --offset 1 --decay-factor 0
//! # 11
//!
//! thermovisc --input batch.txt --config plant.json --conductivity 0.4
//! ```

pub mod app;
pub mod cli;
pub mod error;
pub mod prompt;
pub mod settings;
pub mod telemetry;

// Re-export common types
pub use app::{run, RunSummary};
pub use cli::Cli;
pub use error::{CliError, CliResult};
