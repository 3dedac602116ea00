//! Weighted distributions over training examples
//! and the sampler built on top of them.

// Provides the weight vector over examples.
pub(crate) mod weights;
// Provides the weight grid over (example, label) pairs.
pub(crate) mod label_weights;
// Provides the cumulative form and the binary-search sampler.
pub(crate) mod cumulative;


pub use weights::{Distribution, WeightSummary};
pub use label_weights::LabelDistribution;
pub use cumulative::Cumulative;
