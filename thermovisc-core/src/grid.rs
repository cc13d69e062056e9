//! Square Sample Grid
//!
//! ## Overview
//!
//! The shaping stage lays a linear batch of conditioned samples out as an
//! `N × N` grid, row-major, with `N = floor(sqrt(len))`:
//!
//! ```text
//! samples: s0 s1 s2 s3 s4 s5 s6 s7 s8 s9 s10
//!          └──────────── N*N = 9 ─────────┘ └─ discarded
//!
//! grid:    [s0 s1 s2]
//!          [s3 s4 s5]
//!          [s6 s7 s8]
//! ```
//!
//! Element `(i, j)` takes sample `i*N + j`. Samples past index `N*N - 1` are
//! dropped. That loss is part of the contract, not an error; the count is
//! reported in [`ShapeOutcome::discarded`] and logged.
//!
//! Row order is significant downstream: the reducer treats the row index as
//! a recency index, with row 0 weighted most heavily.

use alloc::vec::Vec;

use crate::errors::{Result, ThermoViscError};

/// Immutable `N × N` grid of conditioned samples, stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    dimension: usize,
    values: Vec<f64>,
}

impl SampleGrid {
    /// Build a grid directly from row-major values
    ///
    /// Returns `None` unless `values.len() == dimension * dimension`. A
    /// zero-dimension grid is representable here (the reducer rejects it),
    /// but never produced by [`shape`].
    pub fn from_row_major(dimension: usize, values: Vec<f64>) -> Option<Self> {
        if dimension.checked_mul(dimension)? != values.len() {
            return None;
        }
        Some(Self { dimension, values })
    }

    /// Number of rows (and columns)
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.dimension
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.dimension
    }

    /// Value at `(row, col)`, if inside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.dimension && col < self.dimension {
            Some(self.values[row * self.dimension + col])
        } else {
            None
        }
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.dimension {
            let start = row * self.dimension;
            Some(&self.values[start..start + self.dimension])
        } else {
            None
        }
    }

    /// Iterate one column top to bottom (row 0 first)
    pub fn column(&self, col: usize) -> impl Iterator<Item = f64> + '_ {
        let dimension = self.dimension;
        let skip = if col < dimension { col } else { self.values.len() };
        self.values.iter().skip(skip).step_by(dimension.max(1)).copied()
    }

    /// All values in row-major order
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// A shaped grid plus how many trailing samples did not fit
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeOutcome {
    /// The shaped grid
    pub grid: SampleGrid,
    /// Samples past `N*N - 1` that were dropped
    pub discarded: usize,
}

/// Largest `n` with `n * n <= len`
fn floor_sqrt(len: usize) -> usize {
    let mut n = libm::sqrt(len as f64) as usize;
    // Correct for rounding in the float estimate on large inputs
    while n > 0 && n.saturating_mul(n) > len {
        n -= 1;
    }
    while (n + 1).saturating_mul(n + 1) <= len {
        n += 1;
    }
    n
}

/// Shape a batch into a grid and report how many samples were dropped
pub fn shape_with_outcome(conditioned: &[f64]) -> Result<ShapeOutcome> {
    if conditioned.is_empty() {
        return Err(ThermoViscError::EmptyInput);
    }

    let dimension = floor_sqrt(conditioned.len());
    if dimension == 0 {
        return Err(ThermoViscError::InsufficientData {
            required: 1,
            available: conditioned.len(),
        });
    }

    let used = dimension * dimension;
    let discarded = conditioned.len() - used;
    if discarded > 0 {
        log_warn!(
            "Shaping {} samples into {}x{} grid: discarding {} trailing samples",
            conditioned.len(), dimension, dimension, discarded
        );
    }

    Ok(ShapeOutcome {
        grid: SampleGrid {
            dimension,
            values: conditioned[..used].to_vec(),
        },
        discarded,
    })
}

/// Shape a batch of conditioned samples into a square grid
pub fn shape(conditioned: &[f64]) -> Result<SampleGrid> {
    shape_with_outcome(conditioned).map(|outcome| outcome.grid)
}

/// Shaping stage
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixShaper;

impl MatrixShaper {
    /// Shape a batch, see [`shape`]
    pub fn shape(&self, conditioned: &[f64]) -> Result<SampleGrid> {
        shape(conditioned)
    }

    /// Shape a batch, see [`shape_with_outcome`]
    pub fn shape_with_outcome(&self, conditioned: &[f64]) -> Result<ShapeOutcome> {
        shape_with_outcome(conditioned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn nine_samples_make_three_by_three() {
        let grid = shape(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
        assert_eq!(grid.dimension(), 3);
        assert_eq!(grid.row(0).unwrap(), &[1.0, 2.0, 3.0]);
        assert_eq!(grid.row(1).unwrap(), &[4.0, 5.0, 6.0]);
        assert_eq!(grid.row(2).unwrap(), &[7.0, 8.0, 9.0]);
        assert!(grid.row(3).is_none());
    }

    #[test]
    fn trailing_samples_are_dropped() {
        let samples: Vec<f64> = (0..11).map(|i| i as f64).collect();
        let outcome = shape_with_outcome(&samples).unwrap();
        assert_eq!(outcome.grid.dimension(), 3);
        assert_eq!(outcome.discarded, 2);
        assert_eq!(outcome.grid.as_slice(), &samples[..9]);
    }

    #[test]
    fn single_sample_is_one_by_one() {
        let grid = shape(&[42.0]).unwrap();
        assert_eq!(grid.dimension(), 1);
        assert_eq!(grid.get(0, 0), Some(42.0));
    }

    #[test]
    fn three_samples_keep_only_the_first() {
        let outcome = shape_with_outcome(&[5.0, 6.0, 7.0]).unwrap();
        assert_eq!(outcome.grid.as_slice(), &[5.0]);
        assert_eq!(outcome.discarded, 2);
    }

    #[test]
    fn empty_input_rejected() {
        assert_eq!(shape(&[]), Err(ThermoViscError::EmptyInput));
    }

    #[test]
    fn column_walks_down_rows() {
        let grid = shape(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(grid.column(0).collect::<Vec<_>>(), vec![1.0, 3.0]);
        assert_eq!(grid.column(1).collect::<Vec<_>>(), vec![2.0, 4.0]);
        assert_eq!(grid.column(2).count(), 0);
        assert_eq!(grid.get(1, 0), Some(3.0));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn from_row_major_checks_length() {
        assert!(SampleGrid::from_row_major(2, vec![1.0, 2.0, 3.0]).is_none());
        let grid = SampleGrid::from_row_major(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(grid, shape(&[1.0, 2.0, 3.0, 4.0]).unwrap());
        assert_eq!(SampleGrid::from_row_major(0, Vec::new()).unwrap().dimension(), 0);
    }

    #[test]
    fn floor_sqrt_is_exact() {
        assert_eq!(floor_sqrt(0), 0);
        assert_eq!(floor_sqrt(1), 1);
        assert_eq!(floor_sqrt(3), 1);
        assert_eq!(floor_sqrt(4), 2);
        assert_eq!(floor_sqrt(15), 3);
        assert_eq!(floor_sqrt(16), 4);
        assert_eq!(floor_sqrt(1_000_000), 1000);
        assert_eq!(floor_sqrt(999_999), 999);
    }
}
