//! Sample Processing Pipeline
//!
//! ## Overview
//!
//! One run takes one batch of raw samples through four stages, strictly in
//! order:
//!
//! ```text
//! raw ──► SignalConditioner ──► MatrixShaper ──► DecayReducer ──► Aggregator ──► average
//!         gain·x + offset       N × N grid       one value/col    mean of cols
//! ```
//!
//! No stage starts before the previous one has finished, and the first error
//! ends the run. There are no retries and no partial results.
//!
//! ## Configuration
//!
//! Everything a run needs arrives in a [`PipelineConfig`] passed to
//! [`Pipeline::new`]. Nothing is read from global state, so two pipelines
//! with the same config and input always produce the same report.
//!
//! ```rust
//! use thermovisc_core::{Pipeline, PipelineConfig, ConditioningParameters, DecayConfig};
//!
//! let config = PipelineConfig {
//!     conditioning: ConditioningParameters::new(2.0, 1.0),
//!     decay: DecayConfig::new(0.0),
//! };
//! let raw = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
//!
//! let report = Pipeline::new(config).run(&raw).unwrap();
//! assert_eq!(report.columns, vec![9.0, 11.0, 13.0]);
//! assert_eq!(report.average, 11.0);
//! ```

use alloc::vec::Vec;

use crate::{
    aggregate::Aggregator,
    conditioning::{ConditioningParameters, SignalConditioner},
    errors::Result,
    grid::MatrixShaper,
    reduction::{DecayConfig, DecayReducer},
};

/// Complete configuration for one run
///
/// Every field defaults independently when absent from serialized input.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PipelineConfig {
    /// Gain and offset for the conditioning stage
    pub conditioning: ConditioningParameters,
    /// Weighting curve for the reduction stage
    pub decay: DecayConfig,
}

/// What one run produced
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PipelineReport {
    /// Mean of the column reductions
    pub average: f64,
    /// One decay-weighted value per grid column
    pub columns: Vec<f64>,
    /// Grid dimension `N`
    pub dimension: usize,
    /// Samples that made it into the grid (`N * N`)
    pub samples_used: usize,
    /// Trailing samples dropped by shaping
    pub samples_discarded: usize,
}

/// Sequential conditioning → shaping → reduction → aggregation
#[derive(Debug, Clone, Copy, Default)]
pub struct Pipeline {
    config: PipelineConfig,
    conditioner: SignalConditioner,
    shaper: MatrixShaper,
    reducer: DecayReducer,
    aggregator: Aggregator,
}

impl Pipeline {
    /// Create a pipeline for the given configuration
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            conditioner: SignalConditioner::new(config.conditioning),
            shaper: MatrixShaper,
            reducer: DecayReducer::new(config.decay),
            aggregator: Aggregator,
        }
    }

    /// Configuration this pipeline runs with
    pub fn config(&self) -> PipelineConfig {
        self.config
    }

    /// Run one batch of raw samples to completion
    pub fn run(&self, raw: &[f64]) -> Result<PipelineReport> {
        let conditioned = self.conditioner.condition(raw);
        let outcome = self.shaper.shape_with_outcome(&conditioned)?;
        let dimension = outcome.grid.dimension();

        log_debug!(
            "Shaped {} samples into {}x{} grid (gain={}, offset={})",
            raw.len(), dimension, dimension,
            self.config.conditioning.gain, self.config.conditioning.offset
        );

        let columns = self.reducer.reduce(&outcome.grid)?;
        let average = self.aggregator.average(&columns)?;

        log_debug!(
            "Reduced {} columns with decay factor {}: average {}",
            columns.len(), self.config.decay.decay_factor, average
        );

        Ok(PipelineReport {
            average,
            columns,
            dimension,
            samples_used: dimension * dimension,
            samples_discarded: outcome.discarded,
        })
    }
}

/// Run one batch with the given configuration
pub fn run_pipeline(raw: &[f64], config: &PipelineConfig) -> Result<PipelineReport> {
    Pipeline::new(*config).run(raw)
}

impl From<PipelineConfig> for Pipeline {
    fn from(config: PipelineConfig) -> Self {
        Self::new(config)
    }
}

impl PipelineConfig {
    /// Create a config from its two parts
    pub const fn new(conditioning: ConditioningParameters, decay: DecayConfig) -> Self {
        Self { conditioning, decay }
    }
}
