//! Provides `Booster` trait.
use crate::error::Result;

use std::ops::ControlFlow;


/// The trait [`Booster`] defines the standard framework of Boosting.
/// Here, the **standard framework** is defined as
/// a repeated game between **Booster** and **Weak Learner**
/// of the following form:
///
/// In each round `t = 1, 2, ...`,
/// 1. Booster chooses a probability distribution over
///    training instances.
/// 2. Weak Learner chooses a hypothesis that achieves
///    some **accuracy** with respect to the distribution.
///
/// After sufficient rounds, Booster outputs a combined hypothesis
/// with high accuracy for any probability distribution on training examples.
///
/// `W` is the type of the weak learner.
///
/// # Required Methods
/// - [`Booster::name`]
/// - [`Booster::preprocess`]
/// - [`Booster::boost`]
/// - [`Booster::postprocess`]
/// - [`Booster::info`] ... optional.
///
/// # Provided Methods
/// - [`Booster::run`]
pub trait Booster<W> {
    /// The final hypothesis output by a boosting algorithm.
    type Output;


    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str;


    /// Returns the parameters of the boosting algorithm
    /// as key/value pairs.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// A main function that runs boosting algorithm.
    /// Stops at the first error of the weak learner.
    fn run(&mut self, weak_learner: &W) -> Result<Self::Output> {
        self.preprocess()?;

        for iter in 1.. {
            if self.boost(weak_learner, iter)?.is_break() {
                break;
            }
        }

        Ok(self.postprocess())
    }


    /// Pre-processing for `self`.
    /// As you can see in [`Booster::run`],
    /// this method is called before the boosting process.
    /// Validates the parameters and resets the training state.
    fn preprocess(&mut self) -> Result<()>;


    /// Boosting step per iteration.
    /// This method returns
    /// `ControlFlow::Continue(())` to keep boosting,
    /// `ControlFlow::Break(terminated_iter)` once the booster is done.
    fn boost(&mut self, weak_learner: &W, iteration: usize)
        -> Result<ControlFlow<usize>>;


    /// Post-processing.
    fn postprocess(&mut self) -> Self::Output;
}


/// Statistics of one boosting round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundStats {
    /// The round number, starting at `1`.
    pub round: usize,
    /// The (clamped) weighted error `e_t` of the new weak hypothesis.
    /// AdaBoost.MH reports the normalization factor `Z_t` here.
    pub weighted_error: f64,
    /// The coefficient `a_t` of the new weak hypothesis.
    pub confidence: f64,
}
