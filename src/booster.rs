//! Provides the boosting algorithms.

mod core;

mod adaboost;
mod adaboost_mh;


/// Booster trait
pub use self::core::{Booster, RoundStats};

pub use self::adaboost::AdaBoost;
pub use self::adaboost_mh::AdaBoostMH;
