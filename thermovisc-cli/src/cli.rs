//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::telemetry::LogFormat;

/// Condition, shape and reduce one batch of sensor samples
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// File holding the sample batch (one line of whitespace-separated numbers); stdin when omitted
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// JSON file with `conditioning` and `decay` sections
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Gain applied to every raw sample
    #[arg(long, env = "THERMOVISC_GAIN", allow_hyphen_values = true)]
    pub gain: Option<String>,

    /// Offset added after the gain
    #[arg(long, env = "THERMOVISC_OFFSET", allow_hyphen_values = true)]
    pub offset: Option<String>,

    /// Exponent rate of the row weighting curve
    #[arg(long, env = "THERMOVISC_DECAY_FACTOR", allow_hyphen_values = true)]
    pub decay_factor: Option<String>,

    /// Prompt for decay factor, gain and offset before reading samples
    #[arg(long)]
    pub interactive: bool,

    /// Also report the viscosity for this thermal conductivity
    #[arg(long, allow_hyphen_values = true)]
    pub conductivity: Option<String>,

    /// Fail when the conductivity has no table entry instead of printing -1
    #[arg(long, requires = "conductivity")]
    pub strict_lookup: bool,

    /// Print the full run report as JSON
    #[arg(long)]
    pub json: bool,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
