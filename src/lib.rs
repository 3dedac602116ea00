#![warn(missing_docs)]

//!
//! A crate that provides boosting algorithms over caller-defined
//! examples and binary features.
//!
//! The crate never looks inside an example.
//! An example only reports its label(s)
//! ([`Example`], [`MultiLabelExample`]),
//! and a feature only reports whether it holds on an example
//! ([`Feature`]).
//!
//! This crate includes
//!
//! - Boosters
//!     - [`AdaBoost`] for binary classification,
//!       resampling or reweighting the training set each round.
//!     - [`AdaBoostMH`] for multi-label classification
//!       with confidence-rated weak hypotheses.
//!
//! - Weak learners
//!     - [`DecisionStump`] and [`MultiLabelDecisionStump`],
//!       which split on one feature or on the AND of two.
//!     - [`DecisionTree`], which grows a small tree by information gain.
//!
//! - A weighted sampler ([`Distribution`], [`Cumulative`]).
//!
//! Every random choice goes through the random source
//! handed to the booster,
//! so a fixed seed reproduces a run bit for bit.
//!
//! Diagnostics go through the [`log`] facade;
//! [`research::Logger`] prints a progress table
//! and writes the per-round statistics to a CSV file.

pub mod booster;
pub mod weak_learner;
pub mod hypothesis;
pub mod sample;
pub mod distribution;
pub mod research;
pub mod config;
pub mod error;
pub mod prelude;

pub mod common;
pub mod constants;


pub use booster::{
    Booster,
    RoundStats,

    AdaBoost,
    AdaBoostMH,
};

pub use weak_learner::{
    LearnerInfo,
    WeakLearner,
    MultiLabelWeakLearner,

    Candidates,
    DecisionStump,
    DecisionStumpBuilder,
    DecisionStumpClassifier,
    MultiLabelDecisionStump,
    MultiLabelStumpClassifier,

    CountBy,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
};

pub use hypothesis::{
    Classifier,
    MultiLabelClassifier,
    WeightedMajority,
};

pub use sample::{
    Example,
    MultiLabelExample,
    Feature,
    Clause,
};

pub use distribution::{
    Distribution,
    WeightSummary,
    LabelDistribution,
    Cumulative,
};

pub use error::{BoostError, Result};

pub use common::utils::{
    weighted_error,
    zero_one_loss,
    hamming_distance,
    hamming_loss,
};
