//! Core signal pipeline for ThermoVisc
//!
//! Turns one batch of raw sensor samples into a single reported value:
//!
//! ```text
//! raw samples → condition (gain, offset) → shape (N × N grid)
//!             → reduce (decay-weighted columns) → average
//! ```
//!
//! A fixed thermal-conductivity → viscosity table sits next to the pipeline
//! as an independent utility.
//!
//! Key constraints:
//! - Single-threaded, run-to-completion, no global state
//! - Configuration passed explicitly per run
//! - `no_std` + `alloc` capable (disable default features)
//!
//! ```
//! use thermovisc_core::{Pipeline, PipelineConfig, ViscosityTable};
//!
//! let pipeline = Pipeline::new(PipelineConfig::default());
//! let report = pipeline.run(&[1.0, 2.0, 3.0, 4.0]).unwrap();
//! assert_eq!(report.dimension, 2);
//!
//! let table = ViscosityTable::standard();
//! assert_eq!(table.try_lookup(0.1), 1.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

extern crate alloc;

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod acquisition;
pub mod aggregate;
pub mod conditioning;
pub mod config;
pub mod constants;
pub mod errors;
pub mod grid;
pub mod lookup;
pub mod pipeline;
pub mod reduction;

// Public API
pub use aggregate::{average, Aggregator};
pub use conditioning::{condition, ConditioningParameters, SignalConditioner};
pub use errors::{Result, ThermoViscError};
pub use grid::{shape, shape_with_outcome, MatrixShaper, SampleGrid, ShapeOutcome};
pub use lookup::{ViscosityEntry, ViscosityTable};
pub use pipeline::{run_pipeline, Pipeline, PipelineConfig, PipelineReport};
pub use reduction::{reduce, DecayConfig, DecayReducer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
