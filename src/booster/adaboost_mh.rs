//! Provides `AdaBoostMH` by Schapire & Singer, 1999.
pub mod adaboost_mh_algorithm;

pub use adaboost_mh_algorithm::AdaBoostMH;
