//! Layered configuration loading
//!
//! Sources, lowest to highest precedence:
//!
//! ```text
//! built-in defaults → --config JSON file → THERMOVISC_* env → flags → interactive prompts
//! ```
//!
//! Environment and flags arrive together through clap (a flag wins over its
//! variable). Prompts are applied by the caller on top of what this module
//! returns.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thermovisc_core::{
    config::{parse_optional, FIELD_DECAY_FACTOR, FIELD_GAIN, FIELD_OFFSET},
    PipelineConfig,
};

use crate::{
    cli::Cli,
    error::{CliError, CliResult},
};

/// Read a JSON pipeline config; absent fields take their defaults
pub fn load_file(path: &Path) -> CliResult<PipelineConfig> {
    let file = File::open(path).map_err(|source| CliError::Open {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ConfigFile {
        path: path.display().to_string(),
        source,
    })
}

/// Apply textual overrides on top of `base`
pub fn apply_overrides(
    mut base: PipelineConfig,
    gain: Option<&str>,
    offset: Option<&str>,
    decay_factor: Option<&str>,
) -> CliResult<PipelineConfig> {
    if let Some(gain) = parse_optional(FIELD_GAIN, gain)? {
        base.conditioning.gain = gain;
    }
    if let Some(offset) = parse_optional(FIELD_OFFSET, offset)? {
        base.conditioning.offset = offset;
    }
    if let Some(decay_factor) = parse_optional(FIELD_DECAY_FACTOR, decay_factor)? {
        base.decay.decay_factor = decay_factor;
    }
    Ok(base)
}

/// Resolve everything except interactive prompts
pub fn resolve(cli: &Cli) -> CliResult<PipelineConfig> {
    let base = match &cli.config {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config file");
            load_file(path)?
        }
        None => PipelineConfig::default(),
    };

    let config = apply_overrides(
        base,
        cli.gain.as_deref(),
        cli.offset.as_deref(),
        cli.decay_factor.as_deref(),
    )?;

    tracing::debug!(?config, "resolved pipeline configuration");
    Ok(config)
}
