//! The files in `weak_learner/` directory defines
//! `WeakLearner` traits and weak learners.

/// Provides the `WeakLearner` traits.
pub mod core;

/// Defines Decision Stump.
pub mod decision_stump;

/// Defines Decision Tree.
pub mod decision_tree;


pub use self::core::{
    LearnerInfo,
    MultiLabelWeakLearner,
    WeakLearner,
};

pub use self::decision_stump::{
    Candidates,
    DecisionStump,
    DecisionStumpBuilder,
    DecisionStumpClassifier,
    MultiLabelDecisionStump,
    MultiLabelStumpClassifier,
};

pub use self::decision_tree::{
    CountBy,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
};
