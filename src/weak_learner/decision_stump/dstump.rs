//! Provides the decision stump weak learner.
use rand::RngCore;
use log::{debug, trace};

use crate::{
    LearnerInfo,
    Example,
    Feature,
    WeakLearner,
    common::checker,
    error::{BoostError, Result},
};
use super::{Candidates, DecisionStumpClassifier};


/// The decision stump weak learner.
/// Given weighted examples,
/// [`DecisionStump`] returns the single clause
/// (a feature, possibly the AND of two, possibly negated)
/// with the smallest weighted error.
///
/// See [`MultiLabelDecisionStump`](super::MultiLabelDecisionStump)
/// for the AdaBoost.MH counterpart.
///
/// [`DecisionStump`] is constructed by
/// [`DecisionStumpBuilder`](crate::weak_learner::DecisionStumpBuilder).
///
/// # Example
/// ```no_run
/// use labelboost::prelude::*;
/// use rand::{SeedableRng, rngs::StdRng};
/// # struct Fruit { heavy: bool, label: bool }
/// # impl Example for Fruit { fn label(&self) -> bool { self.label } }
/// # struct Heavy;
/// # impl std::fmt::Display for Heavy {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
/// #         write!(f, "heavy")
/// #     }
/// # }
/// # impl Feature<Fruit> for Heavy { fn test(&self, e: &Fruit) -> bool { e.heavy } }
///
/// let features = vec![Heavy];
/// let examples = vec![
///     Fruit { heavy: true, label: true },
///     Fruit { heavy: false, label: false },
/// ];
/// let refs = examples.iter().collect::<Vec<_>>();
///
/// let stump = DecisionStumpBuilder::new(&features).build().unwrap();
/// let mut rng = StdRng::seed_from_u64(0);
/// let h = stump.produce(&refs, &[0.5, 0.5], &mut rng).unwrap();
/// assert_eq!(h.error(), 0.0);
/// ```
pub struct DecisionStump<'a, F> {
    features: &'a [F],
    candidates: Candidates,
}


impl<'a, F> DecisionStump<'a, F> {
    /// Initialize [`DecisionStump`].
    /// This method is called only via `DecisionStumpBuilder::build`.
    #[inline]
    pub(super) fn from_components(
        features: &'a [F],
        candidates: Candidates,
    ) -> Self
    {
        Self { features, candidates, }
    }


    /// The feature pool.
    #[inline]
    pub fn features(&self) -> &'a [F] {
        self.features
    }
}


impl<F> LearnerInfo for DecisionStump<'_, F> {
    fn name(&self) -> &str {
        "Decision Stump"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of features", format!("{}", self.features.len())),
            ("Candidates", format!("{}", self.candidates)),
        ]);
        Some(info)
    }
}


impl<'a, E, F> WeakLearner<E> for DecisionStump<'a, F>
    where E: Example,
          F: Feature<E>,
{
    type Hypothesis = DecisionStumpClassifier<'a, F>;


    fn produce(
        &self,
        examples: &[&E],
        dist: &[f64],
        rng: &mut dyn RngCore,
    ) -> Result<Self::Hypothesis>
    {
        checker::check_examples(examples.len())?;
        checker::check_features(self.features.len())?;
        checker::check_weights(examples.len(), dist)?;

        let mut best: Option<DecisionStumpClassifier<'a, F>> = None;

        for clause in self.candidates.enumerate(self.features, rng) {
            let (correct, incorrect) = examples.iter()
                .copied()
                .zip(dist)
                .fold((0f64, 0f64), |(c, w), (example, &d)| {
                    if clause.test(example) == example.label() {
                        (c + d, w)
                    } else {
                        (c, w + d)
                    }
                });
            let total = correct + incorrect;

            // Point the clause to the side with the smaller error,
            // so that every stump has error at most 0.5.
            let (clause, error) = if correct < incorrect {
                (clause.negate(), correct / total)
            } else {
                (clause, incorrect / total)
            };
            trace!("candidate {error:.6}: \"{clause}\"");

            if best.as_ref().map_or(true, |b| error < b.error()) {
                best = Some(DecisionStumpClassifier::new(clause, error));
            }
        }

        let stump = best.ok_or(BoostError::EmptyFeatures)?;
        debug!("best stump {:.6}: \"{}\"", stump.error(), stump.clause());
        Ok(stump)
    }
}
