//! Objectives reported by [`Logger`](super::Logger).
use crate::{
    Classifier,
    Example,
    MultiLabelClassifier,
    MultiLabelExample,
    common::utils,
};


/// The quantity [`Logger`](super::Logger) reports
/// as the objective value of the ensemble `H` on examples `E`.
pub trait LoggingObjective<E, H> {
    /// Name of the objective, printed in the stats banner.
    fn name(&self) -> String;


    /// Objective value of `f` on `examples`.
    fn objective_value(&self, examples: &[E], f: &H) -> f64;
}


/// The empirical exponential loss
/// `(1/n) Σ exp(-y_i f(x_i))`,
/// the objective AdaBoost minimizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialLoss;


impl<E, H> LoggingObjective<E, H> for ExponentialLoss
    where E: Example,
          H: Classifier<E>,
{
    fn name(&self) -> String {
        "Exponential loss".to_string()
    }


    fn objective_value(&self, examples: &[E], f: &H) -> f64 {
        if examples.is_empty() {
            return 0f64;
        }
        let n_examples = examples.len() as f64;
        utils::margins_of_hypothesis(examples, f)
            .into_iter()
            .map(|yf| (-yf).exp())
            .sum::<f64>()
            / n_examples
    }
}


/// The Hamming loss over a fixed label set.
#[derive(Debug, Clone)]
pub struct HammingLoss<L> {
    labels: Vec<L>,
}


impl<L> HammingLoss<L> {
    /// The Hamming loss over `labels`,
    /// typically [`AdaBoostMH::labels`](crate::AdaBoostMH::labels).
    pub fn new(labels: Vec<L>) -> Self {
        Self { labels }
    }
}


impl<E, H> LoggingObjective<E, H> for HammingLoss<E::Label>
    where E: MultiLabelExample,
          H: MultiLabelClassifier<E>,
{
    fn name(&self) -> String {
        "Hamming loss".to_string()
    }


    fn objective_value(&self, examples: &[E], f: &H) -> f64 {
        utils::hamming_loss(examples, &self.labels[..], f)
    }
}
