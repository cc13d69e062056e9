//! Errors surfaced by the command-line front end

use thermovisc_core::ThermoViscError;
use thiserror::Error;

/// Everything that can end a CLI run with a non-zero exit status
#[derive(Debug, Error)]
pub enum CliError {
    /// A core stage, lookup or configuration value failed
    #[error("pipeline error: {0}")]
    Pipeline(#[from] ThermoViscError),

    /// Reading stdin or writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A batch or config file could not be opened
    #[error("failed to open {path}: {source}")]
    Open {
        /// Path as given on the command line
        path: String,
        /// Underlying open error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid pipeline JSON
    #[error("failed to read config file {path}: {source}")]
    ConfigFile {
        /// Path as given on the command line
        path: String,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// The JSON report could not be written
    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
