//! Provides `AdaBoost` by Freund & Schapire, 1995.
pub mod adaboost_algorithm;

pub use adaboost_algorithm::AdaBoost;
