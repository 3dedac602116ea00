/// Defines the decision stump weak learner.
pub mod dstump;
/// Defines the decision stump weak learner for AdaBoost.MH.
pub mod mh_dstump;
/// Defines the builder of `DecisionStump`.
pub mod builder;
/// Defines the classifiers produced by the decision stumps.
pub mod dstump_classifier;

mod candidates;


pub use dstump::DecisionStump;
pub use mh_dstump::MultiLabelDecisionStump;
pub use builder::DecisionStumpBuilder;
pub use candidates::Candidates;
pub use dstump_classifier::{
    DecisionStumpClassifier,
    MultiLabelStumpClassifier,
};
