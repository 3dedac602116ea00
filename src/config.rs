//! Settings records for the boosters and weak learners.
//!
//! Every record mirrors the builder methods of the type it configures
//! and deserializes with `serde`, missing fields taking the defaults:
//!
//! ```no_run
//! # use labelboost::config::BoosterConfig;
//! let config: BoosterConfig = serde_json::from_str(
//!     r#"{ "sampling": "reweight", "force_quit_at": 50 }"#
//! ).unwrap();
//! ```
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{
    Candidates,
    CountBy,
    constants::{DEFAULT_MAX_DEPTH, DEFAULT_SMOOTHING},
};


/// How a binary booster hands the training set to the weak learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sampling {
    /// Draw `size` examples with replacement from the current distribution
    /// and pass them with uniform weights.
    /// `None` draws as many examples as the training set holds.
    Resample {
        /// Number of draws per round.
        #[serde(default)]
        size: Option<usize>,
    },
    /// Pass every training example with its current weight.
    Reweight,
}


impl Default for Sampling {
    fn default() -> Self {
        Self::Resample { size: None }
    }
}


impl fmt::Display for Sampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resample { size: None } => write!(f, "Resample (n)"),
            Self::Resample { size: Some(size) } => {
                write!(f, "Resample ({size})")
            },
            Self::Reweight => write!(f, "Reweight"),
        }
    }
}


/// Settings of [`AdaBoost`](crate::AdaBoost)
/// and [`AdaBoostMH`](crate::AdaBoostMH).
/// `sampling` only affects `AdaBoost`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoosterConfig {
    /// See [`Sampling`].
    pub sampling: Sampling,
    /// Stop after this many rounds.
    pub force_quit_at: Option<usize>,
    /// Tolerance of the training error,
    /// which bounds the number of rounds.
    pub tolerance: Option<f64>,
}


/// Settings of the decision stump learners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StumpConfig {
    /// See [`Candidates`].
    pub candidates: Candidates,
    /// Additive smoothing of the AdaBoost.MH confidences.
    pub smoothing: f64,
}


impl Default for StumpConfig {
    fn default() -> Self {
        Self {
            candidates: Candidates::default(),
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}


/// Settings of the decision tree learner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Maximal depth, the root counting as `1`.
    pub max_depth: usize,
    /// See [`CountBy`].
    pub count_by: CountBy,
}


impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            count_by: CountBy::default(),
        }
    }
}
