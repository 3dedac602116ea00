//! This file defines some functions that checks some pre-conditions
//! E.g., emptiness of the training set, shape of the weights.
//!
//! Functions returning [`Result`] guard user input;
//! the asserting ones guard internal invariants.

use crate::constants::SIMPLEX_TOLERANCE;
use crate::error::{BoostError, Result};


/// Check that a learner or booster received at least one example.
#[inline(always)]
pub(crate) fn check_examples(n_examples: usize) -> Result<()> {
    if n_examples == 0 {
        return Err(BoostError::EmptyExamples);
    }
    Ok(())
}


/// Check that a learner received at least one feature.
#[inline(always)]
pub(crate) fn check_features(n_features: usize) -> Result<()> {
    if n_features == 0 {
        return Err(BoostError::EmptyFeatures);
    }
    Ok(())
}


/// Check that `dist` has one weight per example
/// and puts positive mass somewhere.
pub(crate) fn check_weights(n_examples: usize, dist: &[f64]) -> Result<()> {
    if dist.len() != n_examples {
        return Err(BoostError::LengthMismatch {
            expected: n_examples,
            got: dist.len(),
        });
    }
    check_weight_values(dist)
}


/// Check that every weight is finite and non-negative
/// and that some weight is positive.
pub(crate) fn check_weight_values(dist: &[f64]) -> Result<()> {
    let bad = dist.iter()
        .position(|&d| !d.is_finite() || d < 0f64);
    if let Some(index) = bad {
        return Err(BoostError::InvalidWeight { index, weight: dist[index] });
    }
    if dist.iter().all(|&d| d <= 0f64) {
        return Err(BoostError::ZeroWeight);
    }
    Ok(())
}


/// Assert that `slice` is a probability vector.
#[inline(always)]
pub(crate) fn simplex_condition(slice: &[f64]) {
    let sum = slice.iter().sum::<f64>();
    assert!((sum - 1f64).abs() < SIMPLEX_TOLERANCE, "sum(dist[..]) = {sum}");
    assert!(
        slice.iter().all(|s| *s >= 0f64),
        "distribution has a negative weight"
    );
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_success() {
        assert!(check_examples(1).is_ok());
    }

    #[test]
    fn test_examples_failure() {
        assert!(matches!(check_examples(0), Err(BoostError::EmptyExamples)));
    }

    #[test]
    fn test_features_failure() {
        assert!(matches!(check_features(0), Err(BoostError::EmptyFeatures)));
    }

    #[test]
    fn test_weights_length() {
        let err = check_weights(3, &[0.5, 0.5]).unwrap_err();
        assert!(matches!(
            err,
            BoostError::LengthMismatch { expected: 3, got: 2 }
        ));
    }

    #[test]
    fn test_weights_zero() {
        let err = check_weights(2, &[0.0, 0.0]).unwrap_err();
        assert!(matches!(err, BoostError::ZeroWeight));
    }

    #[test]
    fn test_weights_negative_or_not_finite() {
        let err = check_weights(3, &[0.5, -0.1, 0.6]).unwrap_err();
        assert!(matches!(err, BoostError::InvalidWeight { index: 1, .. }));

        let err = check_weights(2, &[f64::NAN, 1.0]).unwrap_err();
        assert!(matches!(err, BoostError::InvalidWeight { index: 0, .. }));

        let err = check_weights(2, &[1.0, f64::INFINITY]).unwrap_err();
        assert!(matches!(err, BoostError::InvalidWeight { index: 1, .. }));
    }

    #[test]
    fn test_simplex_success() {
        simplex_condition(&[0.25, 0.25, 0.5]);
    }

    #[test]
    #[should_panic]
    fn test_simplex_failure_01() {
        simplex_condition(&[0.25, 0.25, 0.25]);
    }

    #[test]
    #[should_panic]
    fn test_simplex_failure_02() {
        simplex_condition(&[1.25, -0.25]);
    }
}
