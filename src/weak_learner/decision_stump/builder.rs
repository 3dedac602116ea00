use crate::{
    DecisionStump,
    MultiLabelDecisionStump,
    config::StumpConfig,
    constants::DEFAULT_SMOOTHING,
    error::{BoostError, Result},
};
use super::Candidates;


/// A struct that builds [`DecisionStump`] and [`MultiLabelDecisionStump`].
/// `DecisionStumpBuilder` keeps parameters for constructing `DecisionStump`.
///
/// # Example
///
/// ```no_run
/// use labelboost::prelude::*;
/// # let features: Vec<Box<dyn Feature<()>>> = Vec::new();
///
/// let weak_learner = DecisionStumpBuilder::new(&features)
///     .candidates(Candidates::RandomPairs(1_000))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct DecisionStumpBuilder<'a, F> {
    features: &'a [F],
    candidates: Candidates,
    smoothing: f64,
}


impl<'a, F> DecisionStumpBuilder<'a, F> {
    /// Construct a new instance of [`DecisionStumpBuilder`].
    /// By default, [`DecisionStumpBuilder`] sets the parameters as follows;
    /// ```text
    /// candidates: Candidates::Exhaustive,
    /// smoothing: DEFAULT_SMOOTHING == 1.0,
    /// ```
    pub fn new(features: &'a [F]) -> Self {
        Self {
            features,
            candidates: Candidates::default(),
            smoothing: DEFAULT_SMOOTHING,
        }
    }


    /// Set how the stump enumerates candidate clauses.
    #[inline]
    pub fn candidates(mut self, candidates: Candidates) -> Self {
        self.candidates = candidates;
        self
    }


    /// Set the additive smoothing of the multi-label confidences
    /// `0.5 ln((s + W+) / (s + W-))`.
    /// Ignored in binary boosting.
    #[inline]
    pub fn smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }


    /// Apply every setting in `config`.
    #[inline]
    pub fn config(self, config: &StumpConfig) -> Self {
        self.candidates(config.candidates)
            .smoothing(config.smoothing)
    }


    /// Build a [`DecisionStump`] for binary boosting.
    /// This method consumes `self`.
    pub fn build(self) -> Result<DecisionStump<'a, F>> {
        self.validate()?;
        Ok(DecisionStump::from_components(self.features, self.candidates))
    }


    /// Build a [`MultiLabelDecisionStump`] for AdaBoost.MH.
    /// This method consumes `self`.
    pub fn build_multi_label(self) -> Result<MultiLabelDecisionStump<'a, F>> {
        self.validate()?;
        Ok(MultiLabelDecisionStump::from_components(
            self.features, self.candidates, self.smoothing
        ))
    }


    fn validate(&self) -> Result<()> {
        if self.features.is_empty() {
            return Err(BoostError::EmptyFeatures);
        }
        if self.candidates == Candidates::RandomPairs(0) {
            return Err(BoostError::invalid(
                "candidates", "at least one random pair is required"
            ));
        }
        if !(self.smoothing > 0f64 && self.smoothing.is_finite()) {
            return Err(BoostError::invalid(
                "smoothing",
                format!("must be positive and finite, got {}", self.smoothing)
            ));
        }
        Ok(())
    }
}
