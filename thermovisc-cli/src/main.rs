//! `thermovisc` binary entry point

use std::io;
use std::process::ExitCode;

use clap::Parser;
use thermovisc_cli::{run, telemetry::init_tracing, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(&cli.log_level, cli.log_format) {
        eprintln!("Warning: {}", err);
    }

    let stdin = io::stdin();
    match run(&cli, stdin.lock(), io::stdout().lock(), io::stderr()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "run failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
