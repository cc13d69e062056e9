//! Decay-Weighted Column Reduction
//!
//! ## Overview
//!
//! Each grid column collapses to one scalar. Rows are read as a recency
//! index: row 0 is the most recent and keeps full weight, later rows are
//! discounted exponentially.
//!
//! ```text
//! result[c] = ( Σ_{j=0}^{N-1} grid[j][c] × e^(-k·j) ) / N
//!
//! Where:
//! - k = decay factor
//! - j = row index (0-based)
//! - N = grid dimension
//! ```
//!
//! The divisor is always `N`, not the sum of the weights, so for `k > 0` the
//! result is smaller than the weighted mean. With `k = 0` every weight is 1
//! and the result is the plain column mean. Negative `k` is accepted and
//! inverts the curve.
//!
//! This is a deterministic weighted reduction, not a parametric fit.

use alloc::vec::Vec;

use crate::{
    constants::DEFAULT_DECAY_FACTOR,
    errors::{Result, ThermoViscError},
    grid::SampleGrid,
};

/// Weighting curve configuration for one run
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecayConfig {
    /// Exponent rate for the row weights
    pub decay_factor: f64,
}

impl DecayConfig {
    /// Create a config with the given decay factor
    pub const fn new(decay_factor: f64) -> Self {
        Self { decay_factor }
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DECAY_FACTOR)
    }
}

/// Weight applied to `row` for the given decay factor
#[inline]
pub fn decay_weight(row: usize, decay_factor: f64) -> f64 {
    libm::exp(-decay_factor * row as f64)
}

/// Reduce every column of `grid` to one decay-weighted value
pub fn reduce(grid: &SampleGrid, decay_factor: f64) -> Result<Vec<f64>> {
    let n = grid.dimension();
    if grid.rows() == 0 || grid.cols() == 0 {
        return Err(ThermoViscError::EmptyMatrix);
    }

    let weights: Vec<f64> = (0..n).map(|row| decay_weight(row, decay_factor)).collect();

    let columns = (0..n)
        .map(|col| {
            let sum: f64 = grid
                .column(col)
                .zip(weights.iter())
                .map(|(value, weight)| value * weight)
                .sum();
            sum / n as f64
        })
        .collect();

    Ok(columns)
}

/// Reduction stage owning its decay configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct DecayReducer {
    config: DecayConfig,
}

impl DecayReducer {
    /// Create a reducer for the given configuration
    pub const fn new(config: DecayConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    pub fn config(&self) -> DecayConfig {
        self.config
    }

    /// Reduce a grid, see [`reduce`]
    pub fn reduce(&self, grid: &SampleGrid) -> Result<Vec<f64>> {
        reduce(grid, self.config.decay_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::shape;
    use alloc::vec;

    fn nine() -> SampleGrid {
        shape(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap()
    }

    #[test]
    fn zero_decay_is_column_mean() {
        assert_eq!(reduce(&nine(), 0.0).unwrap(), vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn one_by_one_returns_value() {
        let grid = shape(&[7.5]).unwrap();
        for k in [0.0, 0.1, -3.0, 50.0] {
            assert_eq!(reduce(&grid, k).unwrap(), vec![7.5]);
        }
    }

    #[test]
    fn positive_decay_discounts_later_rows() {
        let grid = shape(&[1.0, 1.0, 1.0, 1.0]).unwrap();
        let out = reduce(&grid, 0.1).unwrap();
        let expected = (1.0 + libm::exp(-0.1)) / 2.0;
        assert!((out[0] - expected).abs() < 1e-12);
        assert!((out[1] - expected).abs() < 1e-12);
        assert!(out[0] < 1.0);
    }

    #[test]
    fn negative_decay_inflates_later_rows() {
        let grid = shape(&[0.0, 0.0, 1.0, 1.0]).unwrap();
        let damped = reduce(&grid, 0.5).unwrap();
        let boosted = reduce(&grid, -0.5).unwrap();
        assert!(boosted[0] > damped[0]);
        assert!((boosted[0] - libm::exp(0.5) / 2.0).abs() < 1e-12);
    }

    #[test]
    fn weights_follow_curve() {
        assert_eq!(decay_weight(0, 0.1), 1.0);
        assert!((decay_weight(3, 0.1) - libm::exp(-0.3)).abs() < 1e-15);
    }

    #[test]
    fn empty_grid_rejected() {
        let empty = SampleGrid::from_row_major(0, Vec::new()).unwrap();
        assert_eq!(reduce(&empty, 0.1), Err(ThermoViscError::EmptyMatrix));
    }

    #[test]
    fn reducer_uses_config() {
        let reducer = DecayReducer::new(DecayConfig::new(0.0));
        assert_eq!(reducer.reduce(&nine()).unwrap(), vec![4.0, 5.0, 6.0]);
        assert_eq!(DecayReducer::default().config().decay_factor, 0.1);
    }
}
