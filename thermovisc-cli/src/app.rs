//! One CLI run: resolve configuration, acquire a batch, run the pipeline,
//! report.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use serde::Serialize;
use thermovisc_core::{
    acquisition::{read_batch, Batch},
    config::parse_value,
    Pipeline, PipelineReport, ThermoViscError, ViscosityTable,
};

use crate::{
    cli::Cli,
    error::{CliError, CliResult},
    prompt::Prompter,
    settings,
};

/// Field name reported when the conductivity argument is not a number
pub const FIELD_CONDUCTIVITY: &str = "thermal conductivity";

/// Everything printed for one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// Pipeline output
    #[serde(flatten)]
    pub report: PipelineReport,
    /// Viscosity for the requested conductivity, `-1` on a miss in lenient mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viscosity: Option<f64>,
}

/// Execute one run
///
/// `stdin` supplies prompt answers (with `--interactive`) and, without
/// `--input`, the sample batch. The result goes to `stdout`, prompts to
/// `prompts`.
pub fn run<R, W, P>(cli: &Cli, mut stdin: R, mut stdout: W, prompts: P) -> CliResult<RunSummary>
where
    R: BufRead,
    W: Write,
    P: Write,
{
    let table = ViscosityTable::standard();

    let mut config = settings::resolve(cli)?;
    let conductivity = cli.conductivity.as_deref().map(parse_conductivity).transpose()?;

    if cli.interactive {
        let mut prompter = Prompter::new(stdin, prompts);
        config = prompter.configure(config)?;
        stdin = prompter.into_input();
    }

    let batch = acquire(cli, &mut stdin)?;
    tracing::info!(
        samples = batch.samples.len(),
        ignored_tokens = batch.ignored_tokens,
        "acquired batch"
    );

    let report = Pipeline::new(config).run(&batch.samples)?;
    if report.samples_discarded > 0 {
        tracing::warn!(
            discarded = report.samples_discarded,
            dimension = report.dimension,
            "batch did not fill a square grid"
        );
    }

    let viscosity = match conductivity {
        Some(key) => Some(lookup_viscosity(&table, key, cli.strict_lookup)?),
        None => None,
    };

    let summary = RunSummary { report, viscosity };
    write_summary(&mut stdout, &summary, cli.json)?;
    Ok(summary)
}

fn acquire<R: BufRead>(cli: &Cli, stdin: &mut R) -> CliResult<Batch> {
    match &cli.input {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.display().to_string(),
                source,
            })?;
            Ok(read_batch(&mut BufReader::new(file))?)
        }
        None => Ok(read_batch(stdin)?),
    }
}

/// A conductivity was asked for, so blank text is an error rather than "keep"
fn parse_conductivity(text: &str) -> CliResult<f64> {
    parse_value(FIELD_CONDUCTIVITY, text)?.ok_or(CliError::Pipeline(ThermoViscError::ConfigParse {
        field: FIELD_CONDUCTIVITY,
    }))
}

fn lookup_viscosity(table: &ViscosityTable, key: f64, strict: bool) -> CliResult<f64> {
    if strict {
        Ok(table.lookup(key)?)
    } else {
        Ok(table.try_lookup(key))
    }
}

fn write_summary<W: Write>(out: &mut W, summary: &RunSummary, json: bool) -> CliResult<()> {
    if json {
        serde_json::to_writer(&mut *out, summary)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", summary.report.average)?;
        if let Some(viscosity) = summary.viscosity {
            writeln!(out, "{}", viscosity)?;
        }
    }
    out.flush()?;
    Ok(())
}
