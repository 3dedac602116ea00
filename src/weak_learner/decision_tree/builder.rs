use crate::{
    DecisionTree,
    config::TreeConfig,
    constants::DEFAULT_MAX_DEPTH,
    error::{BoostError, Result},
};
use super::CountBy;


/// A struct that builds [`DecisionTree`].
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use labelboost::prelude::*;
/// # let features: Vec<Box<dyn Feature<()>>> = Vec::new();
///
/// let weak_learner = DecisionTreeBuilder::new(&features)
///     .max_depth(2)
///     .count_by(CountBy::Weighted)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<'a, F> {
    features: &'a [F],
    max_depth: usize,
    count_by: CountBy,
}


impl<'a, F> DecisionTreeBuilder<'a, F> {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// max_depth: DEFAULT_MAX_DEPTH == 3,
    /// count_by: CountBy::Unweighted,
    /// ```
    pub fn new(features: &'a [F]) -> Self {
        Self {
            features,
            max_depth: DEFAULT_MAX_DEPTH,
            count_by: CountBy::default(),
        }
    }


    /// Specify the maximal depth of the tree.
    /// The root sits at depth `1`,
    /// so `max_depth(1)` grows a single leaf.
    #[inline]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }


    /// Set how examples are counted in the entropy of a node.
    /// See [`CountBy`].
    #[inline]
    pub fn count_by(mut self, count_by: CountBy) -> Self {
        self.count_by = count_by;
        self
    }


    /// Apply every setting in `config`.
    #[inline]
    pub fn config(self, config: &TreeConfig) -> Self {
        self.max_depth(config.max_depth)
            .count_by(config.count_by)
    }


    /// Build a [`DecisionTree`].
    /// This method consumes `self`.
    pub fn build(self) -> Result<DecisionTree<'a, F>> {
        if self.features.is_empty() {
            return Err(BoostError::EmptyFeatures);
        }
        if self.max_depth == 0 {
            return Err(BoostError::invalid(
                "max_depth", "the root already has depth 1"
            ));
        }
        Ok(DecisionTree::from_components(
            self.features, self.max_depth, self.count_by
        ))
    }
}
