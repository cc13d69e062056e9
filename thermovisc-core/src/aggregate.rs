//! Final aggregation of column reductions into the reported average

use crate::errors::{Result, ThermoViscError};

/// Mean of the per-column values
///
/// An empty slice is the same empty-grid condition the reducer already
/// rejects, so it reports `EmptyMatrix` rather than dividing by zero.
pub fn average(columns: &[f64]) -> Result<f64> {
    if columns.is_empty() {
        return Err(ThermoViscError::EmptyMatrix);
    }
    let sum: f64 = columns.iter().sum();
    Ok(sum / columns.len() as f64)
}

/// Aggregation stage
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator;

impl Aggregator {
    /// Average the column values, see [`average`]
    pub fn average(&self, columns: &[f64]) -> Result<f64> {
        average(columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_columns() {
        assert_eq!(average(&[4.0, 5.0, 6.0]).unwrap(), 5.0);
        assert_eq!(average(&[9.0, 11.0, 13.0]).unwrap(), 11.0);
    }

    #[test]
    fn single_column() {
        assert_eq!(average(&[-3.25]).unwrap(), -3.25);
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(average(&[]), Err(ThermoViscError::EmptyMatrix));
        assert_eq!(Aggregator.average(&[]), Err(ThermoViscError::EmptyMatrix));
    }
}
