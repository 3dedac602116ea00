//! This directory provides some features for research
//! Measure the followings of boosting algorithm per iteration
//! - Running time
//! - Objective value
//! - Training loss
//! - Test loss

/// Defines `Logger`, which runs a booster with logging.
pub mod logger;

/// Defines the objectives `Logger` reports.
pub mod objective;

pub use logger::{
    Logger,
    CurrentHypothesis,
};

pub use objective::{
    LoggingObjective,
    ExponentialLoss,
    HammingLoss,
};
