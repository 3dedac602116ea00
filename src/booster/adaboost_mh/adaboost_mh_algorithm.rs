//! Provides [`AdaBoostMH`] by Schapire & Singer, 1999.
use rand::RngCore;
use log::{debug, info};

use crate::{
    Booster,
    LabelDistribution,
    MultiLabelClassifier,
    MultiLabelExample,
    MultiLabelWeakLearner,
    WeightedMajority,

    booster::RoundStats,
    common::{checker, utils},
    config::BoosterConfig,
    error::{BoostError, Result},
    research::CurrentHypothesis,
};

use std::collections::BTreeSet;
use std::ops::ControlFlow;


/// Defines `AdaBoostMH`, the multi-label extension of AdaBoost
/// with real-valued weak hypotheses.
/// This struct is based on the paper:
/// [Improved Boosting Algorithms Using Confidence-rated Predictions](https://doi.org/10.1023/A:1007614523901)
/// by Robert E. Schapire and Yoram Singer.
///
/// The booster keeps one weight per `(example, label)` pair.
/// Each round the weak learner returns `h(x, l)`,
/// every pair is reweighted by `exp(-Y h(x, l))`
/// (`Y = +1` if the example carries `l`, `-1` otherwise)
/// and the whole grid is renormalized.
/// The confidence is folded into `h`,
/// so every hypothesis enters the ensemble with coefficient `1`.
///
/// The label set is the union of the labels of the training examples,
/// in ascending order.
///
/// # Example
/// ```no_run
/// use labelboost::prelude::*;
/// use rand::{SeedableRng, rngs::StdRng};
/// # use std::collections::BTreeSet;
/// # struct Doc { words: Vec<&'static str>, tags: BTreeSet<&'static str> }
/// # impl MultiLabelExample for Doc {
/// #     type Label = &'static str;
/// #     fn has_label(&self, l: &Self::Label) -> bool { self.tags.contains(l) }
/// #     fn labels(&self) -> BTreeSet<Self::Label> { self.tags.clone() }
/// # }
/// # struct Word(&'static str);
/// # impl std::fmt::Display for Word {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
/// #         write!(f, "{}", self.0)
/// #     }
/// # }
/// # impl Feature<Doc> for Word { fn test(&self, d: &Doc) -> bool { d.words.contains(&self.0) } }
/// # let docs: Vec<Doc> = Vec::new();
/// # let features: Vec<Word> = Vec::new();
/// let mut booster = AdaBoostMH::init(&docs, StdRng::seed_from_u64(7))
///     .unwrap()
///     .force_quit_at(20);
///
/// let weak_learner = DecisionStumpBuilder::new(&features)
///     .build_multi_label()
///     .unwrap();
///
/// let f = booster.run(&weak_learner).unwrap();
/// println!("Hamming loss (train): {}", booster.hamming_loss(&docs));
/// ```
pub struct AdaBoostMH<'a, E, H, R>
    where E: MultiLabelExample,
{
    // Training examples
    examples: &'a [E],

    // Labels, in ascending order.
    labels: Vec<E::Label>,

    // Distribution on the (example, label) pairs.
    dist: LabelDistribution<E::Label>,

    // Tolerance parameter
    tolerance: f64,

    // Sum of the weak hypotheses.
    ensemble: WeightedMajority<H>,

    // Normalization factors, round by round.
    normalizers: Vec<f64>,

    // Random source for randomized weak learners.
    rng: R,

    // Max iteration
    max_iter: usize,

    // Optional. If this value is `Some(it)`,
    // the algorithm terminates after `it` iterations.
    force_quit_at: Option<usize>,
}


impl<'a, E, H, R> AdaBoostMH<'a, E, H, R>
    where E: MultiLabelExample,
{
    /// Initialize the `AdaBoostMH`.
    /// Every pair starts with weight `1 / (n k)`,
    /// where `n` is the number of examples and `k` the number of labels.
    ///
    /// Fails with [`BoostError::EmptyLabels`]
    /// if no training example carries a label.
    pub fn init(examples: &'a [E], rng: R) -> Result<Self> {
        checker::check_examples(examples.len())?;

        let labels = examples.iter()
            .flat_map(|example| example.labels())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        if labels.is_empty() {
            return Err(BoostError::EmptyLabels);
        }

        let n_pairs = examples.len() * labels.len();
        let dist = LabelDistribution::uniform(examples.len(), labels.clone());

        Ok(Self {
            examples,
            labels,
            dist,
            tolerance: 1f64 / (n_pairs as f64 + 1f64),

            ensemble: WeightedMajority::default(),
            normalizers: Vec::new(),
            rng,

            max_iter: usize::MAX,
            force_quit_at: None,
        })
    }


    /// Returns the round bound `ln(n k) / tolerance²`,
    /// the `AdaBoost` bound over the `n k` pairs.
    pub fn max_loop(&self) -> usize {
        let n_pairs = (self.examples.len() * self.labels.len()) as f64;

        // At least one round, even when the logarithm vanishes.
        ((n_pairs.ln() / self.tolerance.powi(2)) as usize).max(1)
    }


    /// Force quits after `it` iterations.
    #[inline]
    pub fn force_quit_at(mut self, it: usize) -> Self {
        self.force_quit_at = Some(it);
        self
    }


    /// Set the tolerance parameter.
    #[inline]
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }


    /// Apply the settings in `config`.
    /// `config.sampling` does not apply to `AdaBoostMH`.
    pub fn config(mut self, config: &BoosterConfig) -> Self {
        if let Some(it) = config.force_quit_at {
            self.force_quit_at = Some(it);
        }
        if let Some(tolerance) = config.tolerance {
            self.tolerance = tolerance;
        }
        self
    }


    /// The labels, in ascending order.
    #[inline]
    pub fn labels(&self) -> &[E::Label] {
        &self.labels[..]
    }


    /// The current distribution over the `(example, label)` pairs.
    #[inline]
    pub fn distribution(&self) -> &LabelDistribution<E::Label> {
        &self.dist
    }


    /// The ensemble built so far.
    #[inline]
    pub fn ensemble(&self) -> &WeightedMajority<H> {
        &self.ensemble
    }


    /// The normalization factor `Z_t` of every round so far.
    #[inline]
    pub fn normalizers(&self) -> &[f64] {
        &self.normalizers[..]
    }
}


impl<'a, E, H, R> AdaBoostMH<'a, E, H, R>
    where E: MultiLabelExample,
          H: MultiLabelClassifier<E>,
          R: RngCore,
{
    /// Runs one round of boosting with `weak_learner`
    /// and appends the new hypothesis to the ensemble.
    /// The returned [`RoundStats`] carries `Z_t` as its weighted error
    /// and `1` as its confidence.
    pub fn round<W>(&mut self, weak_learner: &W) -> Result<RoundStats>
        where W: MultiLabelWeakLearner<E, Hypothesis = H>,
    {
        let h = weak_learner.produce(self.examples, &self.dist, &mut self.rng)?;

        let examples = self.examples;
        for (k, label) in self.labels.iter().enumerate() {
            self.dist.label_mut(k)
                .iter_mut()
                .zip(examples)
                .for_each(|(d, example)| {
                    let margin = example.sign(label)
                        * h.confidence(example, label);
                    *d *= (-margin).exp();
                });
        }
        let z = self.dist.total();
        self.dist.normalize();
        checker::simplex_condition(self.dist.as_slice());

        self.ensemble.push(1f64, h);
        self.normalizers.push(z);

        let stats = RoundStats {
            round: self.ensemble.len(),
            weighted_error: z,
            confidence: 1f64,
        };
        debug!("round {}: Z = {z:.6}", stats.round);
        debug!("weights: {:?}", self.dist.summary());
        Ok(stats)
    }


    /// The score `Σ h_t(example, label)` of the current ensemble.
    /// `label` is predicted present iff the score is positive.
    #[inline]
    pub fn predict(&self, example: &E, label: &E::Label) -> f64 {
        MultiLabelClassifier::confidence(&self.ensemble, example, label)
    }


    /// Number of `(example, label)` pairs over the training labels
    /// that the current ensemble gets wrong.
    #[inline]
    pub fn evaluate(&self, examples: &[E]) -> usize {
        utils::hamming_distance(examples, &self.labels[..], &self.ensemble)
    }


    /// [`AdaBoostMH::evaluate`] divided by the number of pairs.
    /// Returns `0` for an empty set.
    #[inline]
    pub fn hamming_loss(&self, examples: &[E]) -> f64 {
        utils::hamming_loss(examples, &self.labels[..], &self.ensemble)
    }
}


impl<'a, E, H, R, W> Booster<W> for AdaBoostMH<'a, E, H, R>
    where E: MultiLabelExample,
          H: MultiLabelClassifier<E> + Clone,
          R: RngCore,
          W: MultiLabelWeakLearner<E, Hypothesis = H>,
{
    type Output = WeightedMajority<H>;


    fn name(&self) -> &str {
        "AdaBoost.MH"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let quit = if let Some(it) = self.force_quit_at {
            format!("{it}")
        } else {
            "-".to_string()
        };
        let info = Vec::from([
            ("# of examples", format!("{}", self.examples.len())),
            ("# of labels", format!("{}", self.labels.len())),
            ("Tolerance", format!("{}", self.tolerance)),
            ("Max iteration", format!("{}", self.max_loop())),
            ("Force quit", quit),
        ]);
        Some(info)
    }


    fn preprocess(&mut self) -> Result<()> {
        if !(self.tolerance > 0f64 && self.tolerance < 1f64) {
            return Err(BoostError::invalid(
                "tolerance",
                format!("must lie in (0, 1), got {}", self.tolerance)
            ));
        }

        self.dist = LabelDistribution::uniform(
            self.examples.len(), self.labels.clone()
        );
        self.ensemble = WeightedMajority::default();
        self.normalizers.clear();

        self.max_iter = self.force_quit_at
            .unwrap_or_else(|| self.max_loop());
        info!("AdaBoost.MH runs at most {} rounds", self.max_iter);
        Ok(())
    }


    fn boost(&mut self, weak_learner: &W, iteration: usize)
        -> Result<ControlFlow<usize>>
    {
        if self.max_iter < iteration {
            return Ok(ControlFlow::Break(self.max_iter));
        }

        self.round(weak_learner)?;
        Ok(ControlFlow::Continue(()))
    }


    fn postprocess(&mut self) -> Self::Output {
        self.ensemble.clone()
    }
}


impl<E, H, R> CurrentHypothesis for AdaBoostMH<'_, E, H, R>
    where E: MultiLabelExample,
          H: Clone,
{
    type Output = WeightedMajority<H>;


    fn current_hypothesis(&self) -> Self::Output {
        self.ensemble.clone()
    }
}
