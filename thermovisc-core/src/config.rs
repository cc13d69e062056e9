//! Configuration boundary
//!
//! Textual configuration values (prompt answers, flags, environment
//! variables) are turned into numbers here. Blank input means "keep the
//! default"; anything else must be a finite decimal number or the run is
//! rejected with `ConfigParse`.

use crate::{
    conditioning::ConditioningParameters,
    errors::{Result, ThermoViscError},
    reduction::DecayConfig,
};

/// Field name reported for gain parse failures
pub const FIELD_GAIN: &str = "gain";
/// Field name reported for offset parse failures
pub const FIELD_OFFSET: &str = "offset";
/// Field name reported for decay factor parse failures
pub const FIELD_DECAY_FACTOR: &str = "decay factor";

/// Parse one configuration value
///
/// Returns `Ok(None)` for blank input.
pub fn parse_value(field: &'static str, input: &str) -> Result<Option<f64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(ThermoViscError::ConfigParse { field }),
    }
}

impl ConditioningParameters {
    /// Build parameters from optional text, each field defaulting on its own
    pub fn from_inputs(gain: Option<&str>, offset: Option<&str>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            gain: parse_optional(FIELD_GAIN, gain)?.unwrap_or(defaults.gain),
            offset: parse_optional(FIELD_OFFSET, offset)?.unwrap_or(defaults.offset),
        })
    }
}

impl DecayConfig {
    /// Build a decay config from optional text
    pub fn from_input(decay_factor: Option<&str>) -> Result<Self> {
        let decay_factor = parse_optional(FIELD_DECAY_FACTOR, decay_factor)?
            .unwrap_or(Self::default().decay_factor);
        Ok(Self::new(decay_factor))
    }
}

/// Parse a value that may not have been supplied at all
///
/// `None` and blank text both give `Ok(None)`.
pub fn parse_optional(field: &'static str, input: Option<&str>) -> Result<Option<f64>> {
    match input {
        Some(text) => parse_value(field, text),
        None => Ok(None),
    }
}
