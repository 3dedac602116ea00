//! Provides `WeakLearner` traits.
use rand::RngCore;

use crate::{
    Classifier,
    LabelDistribution,
    MultiLabelClassifier,
    MultiLabelExample,
    error::Result,
};


/// Name and parameters of a weak learner,
/// printed by [`Logger`](crate::research::Logger).
pub trait LearnerInfo {
    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the parameters of the weak learner as key/value pairs.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }
}


/// A trait that defines the behavor of a weak learner
/// for binary classification.
///
/// A weak learner is a stateless strategy:
/// the booster borrows it read-only for every round.
pub trait WeakLearner<E>: LearnerInfo {
    /// The hypothesis this weak learner returns.
    type Hypothesis: Classifier<E>;


    /// Returns a hypothesis with small weighted error on `examples`.
    ///
    /// `dist[i]` is the weight on `examples[i]`.
    /// A booster that resamples passes the drawn examples
    /// with uniform weights;
    /// a booster that reweights passes every training example
    /// with its current weight.
    /// `rng` is the booster's random source,
    /// for learners that search randomly.
    fn produce(
        &self,
        examples: &[&E],
        dist: &[f64],
        rng: &mut dyn RngCore,
    ) -> Result<Self::Hypothesis>;
}


/// A trait that defines the behavor of a weak learner
/// for multi-label classification.
pub trait MultiLabelWeakLearner<E: MultiLabelExample>: LearnerInfo {
    /// The hypothesis this weak learner returns.
    type Hypothesis: MultiLabelClassifier<E>;


    /// Returns a hypothesis with a small normalization factor `Z`
    /// under the per-label distribution `dist`.
    ///
    /// `dist.labels()` lists the labels to score,
    /// `dist.label(k)[i]` is the weight on `(examples[i], labels[k])`.
    fn produce(
        &self,
        examples: &[E],
        dist: &LabelDistribution<E::Label>,
        rng: &mut dyn RngCore,
    ) -> Result<Self::Hypothesis>;
}
