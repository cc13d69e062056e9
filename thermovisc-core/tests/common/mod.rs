//! Common test utilities and data generators for integration tests
//!
//! This module provides:
//! - A deterministic sample batch generator (drifting sensor with noise)
//! - Reference scenarios with hand-checked expected results
//! - Float comparison helpers

#![allow(dead_code)]

use thermovisc_core::{ConditioningParameters, DecayConfig, PipelineConfig};

/// Absolute tolerance for comparing computed reductions
pub const EPSILON: f64 = 1e-9;

/// Deterministic generator for raw sample batches
pub struct TestDataGenerator {
    seed: u32,
}

impl TestDataGenerator {
    /// Create a generator with a fixed seed
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// Batch of `count` readings around `base`, drifting by `drift` per sample
    pub fn drifting_batch(&mut self, count: usize, base: f64, drift: f64, noise: f64) -> Vec<f64> {
        (0..count)
            .map(|i| base + drift * i as f64 + self.random_noise(noise))
            .collect()
    }

    /// Uniform noise in `[-amplitude, amplitude]`
    fn random_noise(&mut self, amplitude: f64) -> f64 {
        self.seed = self.seed.wrapping_mul(1664525).wrapping_add(1013904223);
        let uniform = self.seed as f64 / u32::MAX as f64;
        (uniform - 0.5) * 2.0 * amplitude
    }
}

/// A batch plus the result it must produce
pub struct TestScenario {
    pub name: &'static str,
    pub raw: Vec<f64>,
    pub config: PipelineConfig,
    pub expected_columns: Vec<f64>,
    pub expected_average: f64,
}

impl TestScenario {
    /// Scenarios with results worked out by hand
    pub fn reference_scenarios() -> Vec<Self> {
        let nine: Vec<f64> = (1..=9).map(f64::from).collect();
        vec![
            Self {
                name: "identity_nine",
                raw: nine.clone(),
                config: undecayed(1.0, 0.0),
                expected_columns: vec![4.0, 5.0, 6.0],
                expected_average: 5.0,
            },
            Self {
                name: "gain_two_offset_one",
                raw: nine.clone(),
                config: undecayed(2.0, 1.0),
                expected_columns: vec![9.0, 11.0, 13.0],
                expected_average: 11.0,
            },
            Self {
                name: "ten_samples_drop_one",
                raw: (1..=10).map(f64::from).collect(),
                config: undecayed(1.0, 0.0),
                expected_columns: vec![4.0, 5.0, 6.0],
                expected_average: 5.0,
            },
            Self {
                name: "constant_batch_decayed",
                raw: vec![2.0; 4],
                config: PipelineConfig::new(ConditioningParameters::default(), DecayConfig::new(1.0)),
                // Each column: (2 + 2e^-1) / 2
                expected_columns: vec![1.0 + (-1.0f64).exp(); 2],
                expected_average: 1.0 + (-1.0f64).exp(),
            },
        ]
    }
}

/// Config with the given conditioning and no decay
pub fn undecayed(gain: f64, offset: f64) -> PipelineConfig {
    PipelineConfig::new(ConditioningParameters::new(gain, offset), DecayConfig::new(0.0))
}

/// Assert two floats agree within `EPSILON`
pub fn assert_close(actual: f64, expected: f64, context: &str) {
    assert!(
        (actual - expected).abs() <= EPSILON,
        "{}: expected {}, got {}",
        context,
        expected,
        actual
    );
}
