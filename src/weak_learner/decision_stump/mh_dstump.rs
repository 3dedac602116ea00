//! Provides the decision stump weak learner for AdaBoost.MH.
use rand::RngCore;
use log::{debug, trace};

use crate::{
    LearnerInfo,
    Clause,
    Feature,
    LabelDistribution,
    MultiLabelExample,
    MultiLabelWeakLearner,
    common::checker,
    error::{BoostError, Result},
};
use super::{Candidates, MultiLabelStumpClassifier};

use std::collections::BTreeMap;


/// The decision stump weak learner for multi-label boosting.
///
/// One clause is shared by every label.
/// The clause splits the examples into two blocks (holds / fails);
/// for each block `j` and label `l` the learner measures
/// `W+[j][l]`, the mass on pairs whose example carries `l`,
/// and `W-[j][l]`, the mass on the other pairs.
/// It returns the clause minimizing
/// ```text
/// Z = 2 Σ_j Σ_l sqrt(W+[j][l] · W-[j][l])
/// ```
/// with confidences `c[j][l] = 0.5 ln((s + W+[j][l]) / (s + W-[j][l]))`,
/// where `s` is the smoothing parameter.
///
/// This is the real-valued AdaBoost.MH of Schapire & Singer (1999)
/// with domain-partitioning weak hypotheses.
///
/// Built by
/// [`DecisionStumpBuilder::build_multi_label`](super::DecisionStumpBuilder::build_multi_label).
pub struct MultiLabelDecisionStump<'a, F> {
    features: &'a [F],
    candidates: Candidates,
    smoothing: f64,
}


impl<'a, F> MultiLabelDecisionStump<'a, F> {
    #[inline]
    pub(super) fn from_components(
        features: &'a [F],
        candidates: Candidates,
        smoothing: f64,
    ) -> Self
    {
        Self { features, candidates, smoothing, }
    }


    /// The feature pool.
    #[inline]
    pub fn features(&self) -> &'a [F] {
        self.features
    }


    /// The additive smoothing of the confidences.
    #[inline]
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }
}


impl<F> LearnerInfo for MultiLabelDecisionStump<'_, F> {
    fn name(&self) -> &str {
        "Decision Stump (AdaBoost.MH)"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of features", format!("{}", self.features.len())),
            ("Candidates", format!("{}", self.candidates)),
            ("Smoothing", format!("{}", self.smoothing)),
        ]);
        Some(info)
    }
}


impl<'a, E, F> MultiLabelWeakLearner<E> for MultiLabelDecisionStump<'a, F>
    where E: MultiLabelExample,
          F: Feature<E>,
{
    type Hypothesis = MultiLabelStumpClassifier<'a, F, E::Label>;


    fn produce(
        &self,
        examples: &[E],
        dist: &LabelDistribution<E::Label>,
        rng: &mut dyn RngCore,
    ) -> Result<Self::Hypothesis>
    {
        checker::check_examples(examples.len())?;
        checker::check_features(self.features.len())?;
        if dist.n_examples() != examples.len() {
            return Err(BoostError::LengthMismatch {
                expected: examples.len(),
                got: dist.n_examples(),
            });
        }
        let labels = dist.labels();
        if labels.is_empty() {
            return Err(BoostError::EmptyLabels);
        }
        checker::check_weight_values(dist.as_slice())?;

        let mut best: Option<(f64, Clause<'a, F>, Vec<BlockWeights>)> = None;

        for clause in self.candidates.enumerate(self.features, rng) {
            let weights = block_weights(examples, dist, &clause);
            let z = 2f64 * weights.iter()
                .map(BlockWeights::sqrt_sum)
                .sum::<f64>();
            trace!("candidate Z = {z:.6}: \"{clause}\"");

            if best.as_ref().map_or(true, |(best_z, _, _)| z < *best_z) {
                best = Some((z, clause, weights));
            }
        }

        let (z, clause, weights) = best.ok_or(BoostError::EmptyFeatures)?;

        let s = self.smoothing;
        let confidences = labels.iter()
            .cloned()
            .zip(weights)
            .map(|(label, w)| (label, w.confidences(s)))
            .collect::<BTreeMap<_, _>>();

        debug!("best stump Z = {z:.6}: \"{clause}\"");
        Ok(MultiLabelStumpClassifier::new(clause, confidences, z))
    }
}


/// Weighted mass of one label, split by the two blocks.
#[derive(Debug, Clone, Copy, Default)]
struct BlockWeights {
    // `[holds, fails]`, each `(with label, without label)`.
    blocks: [(f64, f64); 2],
}


impl BlockWeights {
    #[inline]
    fn sqrt_sum(&self) -> f64 {
        self.blocks.iter()
            .map(|(pos, neg)| (pos * neg).sqrt())
            .sum::<f64>()
    }


    #[inline]
    fn confidences(&self, smoothing: f64) -> [f64; 2] {
        self.blocks.map(|(pos, neg)| {
            0.5 * ((smoothing + pos) / (smoothing + neg)).ln()
        })
    }
}


fn block_weights<E, F>(
    examples: &[E],
    dist: &LabelDistribution<E::Label>,
    clause: &Clause<'_, F>,
) -> Vec<BlockWeights>
    where E: MultiLabelExample,
          F: Feature<E>,
{
    let labels = dist.labels();
    let mut weights = vec![BlockWeights::default(); labels.len()];

    for (i, example) in examples.iter().enumerate() {
        let block = if clause.test(example) { 0 } else { 1 };
        for (k, label) in labels.iter().enumerate() {
            let d = dist.get(i, k);
            let (pos, neg) = &mut weights[k].blocks[block];
            if example.has_label(label) {
                *pos += d;
            } else {
                *neg += d;
            }
        }
    }
    weights
}
