//! Constants for ThermoVisc Core
//!
//! Every default and reserved value used by the pipeline and the lookup
//! table lives here so the numbers are written down exactly once.
//!
//! ## Organization
//!
//! - **Conditioning**: identity gain and offset applied when unset
//! - **Reduction**: default decay rate for the column weighting curve
//! - **Tables**: viscosity table capacity, sentinel and seed data

/// Signal conditioning defaults.
pub mod conditioning;

/// Decay-weighted reduction defaults.
pub mod reduction;

/// Viscosity lookup table capacity, sentinel and seed entries.
pub mod tables;

// Re-export commonly used constants for convenience
pub use conditioning::{DEFAULT_GAIN, DEFAULT_OFFSET};
pub use reduction::DEFAULT_DECAY_FACTOR;
pub use tables::{MAX_TABLE_ENTRIES, NOT_FOUND_SENTINEL};
