//! Signal Conditioning Defaults
//!
//! Conditioning is the affine transform `gain * raw + offset`. The defaults
//! make it the identity so an unconfigured run passes samples through
//! untouched.

/// Multiplier applied to each raw sample when no gain is configured.
pub const DEFAULT_GAIN: f64 = 1.0;

/// Additive shift applied after the gain when no offset is configured.
///
/// Used for zero-point adjustment of the incoming readings.
pub const DEFAULT_OFFSET: f64 = 0.0;
