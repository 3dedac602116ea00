/// Defines the decision tree weak learner.
pub mod dtree;
/// Defines the builder of `DecisionTree`.
pub mod builder;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;

/// Defines the inner representation of `DecisionTreeClassifier`.
mod node;
mod criterion;


pub use dtree::DecisionTree;
pub use builder::DecisionTreeBuilder;
pub use dtree_classifier::DecisionTreeClassifier;
pub use criterion::CountBy;
pub use node::{Node, BranchNode, LeafNode};
