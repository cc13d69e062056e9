//! Decay-Weighted Reduction Defaults

/// Default exponent rate for the row weighting curve.
///
/// Row `j` of a column is weighted by `exp(-DEFAULT_DECAY_FACTOR * j)`:
///
/// ```text
/// row:     0      1      2      3      4
/// weight:  1.000  0.905  0.819  0.741  0.670
/// ```
///
/// Zero turns the reduction into a plain column mean; negative values weight
/// later rows more heavily. Neither is rejected.
pub const DEFAULT_DECAY_FACTOR: f64 = 0.1;
