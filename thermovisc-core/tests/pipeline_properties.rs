//! Property tests for shaping, reduction and aggregation

mod common;

use proptest::prelude::*;
use thermovisc_core::{
    average, condition, reduce, shape_with_outcome, ConditioningParameters, SampleGrid,
};

fn finite_samples(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6f64..1.0e6, 1..max_len)
}

proptest! {
    #[test]
    fn shaping_keeps_leading_square(samples in finite_samples(300)) {
        let outcome = shape_with_outcome(&samples).unwrap();
        let n = outcome.grid.dimension();

        prop_assert!(n * n <= samples.len());
        prop_assert!((n + 1) * (n + 1) > samples.len());
        prop_assert_eq!(outcome.discarded, samples.len() - n * n);
        prop_assert_eq!(outcome.grid.as_slice(), &samples[..n * n]);
    }

    #[test]
    fn zero_decay_reduces_to_column_means(samples in finite_samples(200)) {
        let grid = shape_with_outcome(&samples).unwrap().grid;
        let n = grid.dimension();
        let columns = reduce(&grid, 0.0).unwrap();

        prop_assert_eq!(columns.len(), n);
        for (c, value) in columns.iter().enumerate() {
            let mean = grid.column(c).sum::<f64>() / n as f64;
            prop_assert!((value - mean).abs() <= 1e-6 * (1.0 + mean.abs()));
        }
    }

    #[test]
    fn single_cell_ignores_decay(value in -1.0e6f64..1.0e6, k in -5.0f64..5.0) {
        let grid = SampleGrid::from_row_major(1, vec![value]).unwrap();
        prop_assert_eq!(reduce(&grid, k).unwrap(), vec![value]);
    }

    #[test]
    fn identity_conditioning_is_noop(samples in finite_samples(64)) {
        prop_assert_eq!(condition(&samples, ConditioningParameters::IDENTITY), samples);
    }

    #[test]
    fn average_of_single_value(value in -1.0e6f64..1.0e6) {
        prop_assert_eq!(average(&[value]).unwrap(), value);
    }

    #[test]
    fn average_of_constant_columns(value in -1.0e3f64..1.0e3, n in 1usize..16) {
        let mean = average(&vec![value; n]).unwrap();
        common::assert_close(mean, value, "constant average");
    }
}
