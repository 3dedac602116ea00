use rand::RngCore;
use log::{debug, trace};

use crate::{
    LearnerInfo,
    Example,
    Feature,
    WeakLearner,
    common::checker,
    error::Result,
};
use super::{
    criterion::CountBy,
    node::Node,
    dtree_classifier::DecisionTreeClassifier,
};


/// The Decision Tree algorithm.
/// Given a set of training examples for classification
/// and a distribution over the set,
/// [`DecisionTree`] grows a tree of binary features
/// by information gain (ID3-style) and returns it as
/// a [`DecisionTreeClassifier`].
///
/// Growing a node works as follows;
/// 1. If every example at the node shares one class,
///     the node is a leaf of that class.
///     An empty node is a `-1` leaf.
/// 2. If the node sits at the maximal depth,
///     the node is a leaf of the majority class (ties go to `-1`).
/// 3. Otherwise the node splits on the feature
///     with the strictly largest positive information gain,
///     the first such feature on ties.
///     If no feature gains anything, the node is a `-1` leaf.
///
/// Every feature stays available at every node.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](crate::weak_learner::DecisionTreeBuilder).
pub struct DecisionTree<'a, F> {
    features: &'a [F],
    max_depth: usize,
    count_by: CountBy,
}


impl<'a, F> DecisionTree<'a, F> {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn from_components(
        features: &'a [F],
        max_depth: usize,
        count_by: CountBy,
    ) -> Self
    {
        Self { features, max_depth, count_by, }
    }


    /// Grow the subtree over the examples at `indices`,
    /// rooted at depth `depth`.
    fn grow<E>(
        &self,
        examples: &[&E],
        dist: &[f64],
        indices: Vec<usize>,
        depth: usize,
    ) -> Node<'a, F>
        where E: Example,
              F: Feature<E>,
    {
        // A node is pure when one class holds all of its mass.
        // Under `CountBy::Weighted`, zero-weight examples do not count.
        let mass = self.count_by.mass(examples, dist, &indices[..]);
        if mass.pos <= 0f64 {
            return Node::leaf(false);
        }
        if mass.neg <= 0f64 {
            return Node::leaf(true);
        }

        if depth >= self.max_depth {
            return Node::leaf(mass.pos > mass.neg);
        }

        let mut best: Option<(f64, &'a F)> = None;
        for feature in self.features {
            let gain = self.count_by.gain(
                examples, dist, &indices[..], &mass, feature
            );
            trace!("depth {depth}, gain {gain:.6}: \"{feature}\"");
            if gain > best.map_or(0f64, |(g, _)| g) {
                best = Some((gain, feature));
            }
        }

        let Some((gain, feature)) = best else {
            debug!("no feature gains at depth {depth}, falling back to -1");
            return Node::leaf(false);
        };
        debug!("split at depth {depth} on \"{feature}\" (gain {gain:.6})");

        let (on_true, on_false): (Vec<usize>, Vec<usize>) = indices.into_iter()
            .partition(|&i| feature.test(examples[i]));

        let on_true = self.grow(examples, dist, on_true, depth + 1);
        let on_false = self.grow(examples, dist, on_false, depth + 1);
        Node::branch(feature, on_true, on_false)
    }
}


impl<F> LearnerInfo for DecisionTree<'_, F> {
    fn name(&self) -> &str {
        "Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of features", format!("{}", self.features.len())),
            ("Max depth", format!("{}", self.max_depth)),
            ("Count by", format!("{}", self.count_by)),
        ]);
        Some(info)
    }
}


impl<'a, E, F> WeakLearner<E> for DecisionTree<'a, F>
    where E: Example,
          F: Feature<E>,
{
    type Hypothesis = DecisionTreeClassifier<'a, F>;


    fn produce(
        &self,
        examples: &[&E],
        dist: &[f64],
        _rng: &mut dyn RngCore,
    ) -> Result<Self::Hypothesis>
    {
        checker::check_examples(examples.len())?;
        checker::check_features(self.features.len())?;
        checker::check_weights(examples.len(), dist)?;

        let indices = (0..examples.len()).collect::<Vec<_>>();
        let root = self.grow(examples, dist, indices, 1);
        debug!(
            "grew a tree of depth {} with {} leaves",
            root.depth(), root.n_leaves()
        );
        Ok(DecisionTreeClassifier::from(root))
    }
}
