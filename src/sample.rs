//! Capability traits the boosters consume.
//!
//! The engine never looks inside an example.
//! It only asks an example for its label(s)
//! and asks features whether they hold on it.

// Provides the example traits.
pub(crate) mod example;
// Provides the feature trait and the clause combinator.
pub(crate) mod feature;


pub use example::{Example, MultiLabelExample};
pub use feature::{Feature, Clause};
