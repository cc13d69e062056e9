//! Signal conditioning
//!
//! Applies the affine calibration `gain * raw + offset` to every sample of a
//! batch, in order. Same length out as in, no error conditions.

use alloc::vec::Vec;

use crate::constants::{DEFAULT_GAIN, DEFAULT_OFFSET};

/// Gain and offset applied uniformly to every sample of one run
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConditioningParameters {
    /// Scale factor for incoming samples
    pub gain: f64,
    /// Shift added after scaling
    pub offset: f64,
}

impl ConditioningParameters {
    /// Identity conditioning: `gain = 1.0`, `offset = 0.0`
    pub const IDENTITY: Self = Self {
        gain: DEFAULT_GAIN,
        offset: DEFAULT_OFFSET,
    };

    /// Create parameters with a custom gain and offset
    pub const fn new(gain: f64, offset: f64) -> Self {
        Self { gain, offset }
    }

    /// Condition a single raw sample
    #[inline]
    pub fn apply(&self, raw: f64) -> f64 {
        raw * self.gain + self.offset
    }
}

impl Default for ConditioningParameters {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Condition a batch of raw samples, preserving order
pub fn condition(raw: &[f64], params: ConditioningParameters) -> Vec<f64> {
    raw.iter().map(|&x| params.apply(x)).collect()
}

/// Conditioning stage owning its parameters for a run
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalConditioner {
    params: ConditioningParameters,
}

impl SignalConditioner {
    /// Create a conditioner with the given parameters
    pub const fn new(params: ConditioningParameters) -> Self {
        Self { params }
    }

    /// Parameters this conditioner applies
    pub fn params(&self) -> ConditioningParameters {
        self.params
    }

    /// Condition a whole batch
    pub fn condition(&self, raw: &[f64]) -> Vec<f64> {
        condition(raw, self.params)
    }

    /// Condition samples lazily as they are produced
    pub fn condition_iter<I>(&self, raw: I) -> impl Iterator<Item = f64>
    where
        I: IntoIterator<Item = f64>,
    {
        let params = self.params;
        raw.into_iter().map(move |x| params.apply(x))
    }
}
