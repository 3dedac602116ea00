//! Numerical constants shared across the crate.

/// Allowed deviation of `sum(dist)` from `1`.
pub const SIMPLEX_TOLERANCE: f64 = 1e-5;

/// Weighted errors are clamped into `[ERROR_FLOOR, 1 - ERROR_FLOOR]`
/// before computing the confidence of a weak hypothesis.
pub const ERROR_FLOOR: f64 = 1e-10;

/// Default additive smoothing of the AdaBoost.MH confidences.
pub const DEFAULT_SMOOTHING: f64 = 1.0;

/// Default maximal depth of a decision tree weak learner.
pub const DEFAULT_MAX_DEPTH: usize = 3;
