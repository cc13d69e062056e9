//! Interactive parameter entry
//!
//! Asks for the decay factor, gain and offset in turn, showing the value
//! currently in effect. An empty answer (or end of input) keeps that value.
//! The finished [`PipelineConfig`] is handed to the core as plain data.

use std::io::{BufRead, Write};

use thermovisc_core::{
    config::{parse_value, FIELD_DECAY_FACTOR, FIELD_GAIN, FIELD_OFFSET},
    PipelineConfig,
};

use crate::error::CliResult;

/// Line-oriented prompter over any reader/writer pair
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Create a prompter reading answers from `input` and writing prompts to `output`
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for one value, returning `current` when the answer is blank
    pub fn ask(&mut self, field: &'static str, current: f64) -> CliResult<f64> {
        writeln!(self.output, "Current {}: {}", field, current)?;
        write!(self.output, "Enter new {} or press Enter to keep current: ", field)?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;

        Ok(parse_value(field, &answer)?.unwrap_or(current))
    }

    /// Walk through every tunable field of `config`
    pub fn configure(&mut self, mut config: PipelineConfig) -> CliResult<PipelineConfig> {
        config.decay.decay_factor = self.ask(FIELD_DECAY_FACTOR, config.decay.decay_factor)?;
        config.conditioning.gain = self.ask(FIELD_GAIN, config.conditioning.gain)?;
        config.conditioning.offset = self.ask(FIELD_OFFSET, config.conditioning.offset)?;
        tracing::debug!(?config, "interactive configuration complete");
        Ok(config)
    }

    /// Hand back the reader, e.g. to read the sample batch from the same stream
    pub fn into_input(self) -> R {
        self.input
    }
}
