//! Exports the standard boosting algorithms and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,
    RoundStats,

    // Binary classification
    AdaBoost,

    // Multi-label classification
    AdaBoostMH,
};


pub use crate::weak_learner::{
    // Weak learner traits
    LearnerInfo,
    WeakLearner,
    MultiLabelWeakLearner,

    // Decision stump
    Candidates,
    DecisionStump,
    DecisionStumpBuilder,
    DecisionStumpClassifier,
    MultiLabelDecisionStump,
    MultiLabelStumpClassifier,

    // Decision tree
    CountBy,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
};


pub use crate::hypothesis::{
    Classifier,
    MultiLabelClassifier,
    WeightedMajority,
};


pub use crate::sample::{
    Example,
    MultiLabelExample,
    Feature,
    Clause,
};


pub use crate::distribution::{
    Distribution,
    LabelDistribution,
};


pub use crate::config::{
    BoosterConfig,
    Sampling,
    StumpConfig,
    TreeConfig,
};


pub use crate::research::{
    Logger,
    CurrentHypothesis,
    LoggingObjective,
    ExponentialLoss,
    HammingLoss,
};


pub use crate::common::utils::{
    zero_one_loss,
    hamming_loss,
};
