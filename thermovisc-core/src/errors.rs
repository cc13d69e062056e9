//! Error Types for Pipeline and Lookup Failures
//!
//! ## Design Philosophy
//!
//! Every stage of a run fails fast: the first error ends that run and is
//! handed to the caller unchanged. Nothing in the core retries, substitutes a
//! default, or returns a partial result.
//!
//! Errors stay small and inline:
//!
//! 1. **No Heap Allocation**: payloads are numbers or `&'static str`, so the
//!    type works the same with and without `std`.
//!
//! 2. **Copy Semantics**: errors are `Copy` and can be compared in tests with
//!    `assert_eq!`.
//!
//! ## Error Categories
//!
//! ### Precondition Violations (pipeline)
//! - `EmptyInput`: shaping received no samples
//! - `InsufficientData`: the grid dimension floored to zero
//! - `EmptyMatrix`: a zero-dimension grid or empty column set reached
//!   reduction or aggregation
//!
//! ### Lookup
//! - `KeyNotFound`: no exact table entry (fail-fast variant only; the
//!   sentinel variant never produces this)
//! - `TableFull`, `SentinelValue`: rejected custom table contents
//!
//! ### Configuration Boundary
//! - `ConfigParse`: a supplied value is not a finite number
//!
//! ```rust
//! use thermovisc_core::{shape, ThermoViscError};
//!
//! match shape(&[]) {
//!     Err(ThermoViscError::EmptyInput) => {
//!         // nothing was acquired for this run
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for pipeline and lookup operations
pub type Result<T> = core::result::Result<T, ThermoViscError>;

/// Pipeline, lookup and configuration errors
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ThermoViscError {
    /// No samples were supplied to the shaping stage
    #[error("Input is empty: no samples to shape")]
    EmptyInput,

    /// Grid dimension floored to zero
    #[error("Insufficient data: need {required} samples, have {available}")]
    InsufficientData {
        /// Minimum number of samples needed for a 1×1 grid
        required: usize,
        /// Number of samples supplied
        available: usize,
    },

    /// Reduction or aggregation received a grid with no rows or columns
    #[error("Data matrix is empty")]
    EmptyMatrix,

    /// No table entry matches the key exactly
    #[error("Invalid thermal conductivity value: {key}")]
    KeyNotFound {
        /// The thermal conductivity that was looked up
        key: f64,
    },

    /// A configuration value could not be read as a finite number
    #[error("Invalid input for {field}")]
    ConfigParse {
        /// Name of the offending configuration field
        field: &'static str,
    },

    /// Custom table has more entries than the fixed capacity
    #[error("Viscosity table is full ({capacity} entries)")]
    TableFull {
        /// Maximum number of entries a table holds
        capacity: usize,
    },

    /// Custom table tried to store the not-found sentinel as a value
    #[error("Viscosity value collides with the not-found sentinel")]
    SentinelValue,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ThermoViscError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::EmptyInput => defmt::write!(fmt, "Input is empty"),
            Self::InsufficientData { required, available } =>
                defmt::write!(fmt, "Need {} samples, have {}", required, available),
            Self::EmptyMatrix => defmt::write!(fmt, "Data matrix is empty"),
            Self::KeyNotFound { key } =>
                defmt::write!(fmt, "No viscosity for conductivity {}", key),
            Self::ConfigParse { field } =>
                defmt::write!(fmt, "Invalid input for {}", field),
            Self::TableFull { capacity } =>
                defmt::write!(fmt, "Table full ({} entries)", capacity),
            Self::SentinelValue => defmt::write!(fmt, "Value collides with sentinel"),
        }
    }
}
