//! Error type shared by every learner and booster in this crate.
//!
//! Only recoverable input conditions are reported through [`BoostError`].
//! Broken internal invariants (a malformed cumulative distribution,
//! a zero-sum normalization) are programming errors and panic instead.
use std::io;
use thiserror::Error;


/// Errors reported while training or evaluating.
#[derive(Error, Debug)]
pub enum BoostError {
    /// A learner or booster received no examples.
    #[error("the example set is empty")]
    EmptyExamples,

    /// A learner received no features to split on.
    #[error("the feature set is empty")]
    EmptyFeatures,

    /// A multi-label booster found no label on any training example.
    #[error("no example carries a label")]
    EmptyLabels,

    /// Every weight handed to a learner is zero.
    #[error("the weights on the examples sum to zero")]
    ZeroWeight,

    /// A weight is negative, infinite, or NaN.
    #[error("weight {weight} at index {index} is not a finite non-negative number")]
    InvalidWeight {
        /// Position of the offending weight.
        index: usize,
        /// The offending weight.
        weight: f64,
    },

    /// The number of weights does not match the number of examples.
    #[error("expected {expected} weights, got {got}")]
    LengthMismatch {
        /// Number of examples.
        expected: usize,
        /// Number of weights supplied.
        got: usize,
    },

    /// A builder or config parameter is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Why the value is rejected.
        reason: String,
    },

    /// Writing the progress log failed.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying error.
        #[from]
        source: io::Error,
    },
}


impl BoostError {
    #[inline]
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>)
        -> Self
    {
        Self::InvalidParameter { name, reason: reason.into() }
    }
}


/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BoostError>;
