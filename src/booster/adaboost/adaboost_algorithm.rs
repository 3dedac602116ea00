//! Provides [`AdaBoost`] by Freund & Schapire, 1995.
use rand::RngCore;
use log::{debug, info, warn};

use crate::{
    Booster,
    Classifier,
    Distribution,
    Example,
    WeakLearner,
    WeightedMajority,

    booster::RoundStats,
    common::{checker, utils},
    config::{BoosterConfig, Sampling},
    error::{BoostError, Result},
    research::CurrentHypothesis,
};

use std::ops::ControlFlow;


/// Defines `AdaBoost`.
/// This struct is based on the book:
/// [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
/// by Robert E. Schapire and Yoav Freund.
///
/// Each round,
/// 1. the weak learner receives either a sample drawn
///     from the current distribution ([`Sampling::Resample`])
///     or every example with its weight ([`Sampling::Reweight`]);
/// 2. the weighted error `e` of the returned hypothesis `h`
///     is measured on the whole training set
///     and clamped into `[1e-10, 1 - 1e-10]`;
/// 3. `h` enters the ensemble with coefficient `a = 0.5 ln((1 - e) / e)`;
/// 4. every weight is multiplied by `exp(-a y h(x))` and renormalized.
///
/// # Example
/// The following code shows a small example
/// for running [`AdaBoost`].
///
/// ```no_run
/// use labelboost::prelude::*;
/// use rand::{SeedableRng, rngs::StdRng};
/// # struct Point { x: f64, label: bool }
/// # impl Example for Point { fn label(&self) -> bool { self.label } }
/// # struct Positive;
/// # impl std::fmt::Display for Positive {
/// #     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
/// #         write!(f, "x > 0")
/// #     }
/// # }
/// # impl Feature<Point> for Positive { fn test(&self, p: &Point) -> bool { p.x > 0.0 } }
/// # let examples: Vec<Point> = Vec::new();
/// let features = vec![Positive];
///
/// // Initialize `AdaBoost` and stop after `5` rounds.
/// let mut booster = AdaBoost::init(&examples, StdRng::seed_from_u64(7))
///     .unwrap()
///     .force_quit_at(5);
///
/// let weak_learner = DecisionStumpBuilder::new(&features)
///     .build()
///     .unwrap();
///
/// // Run `AdaBoost` and obtain the resulting hypothesis `f`.
/// let f = booster.run(&weak_learner).unwrap();
///
/// let training_loss = zero_one_loss(&examples, &f);
/// println!("Training Loss is: {training_loss}");
/// ```
pub struct AdaBoost<'a, E, H, R> {
    // Training examples
    examples: &'a [E],

    // Distribution on the examples.
    dist: Distribution,

    // How the weak learner sees the examples.
    sampling: Sampling,

    // Tolerance parameter
    tolerance: f64,

    // Weighted majority vote of the weak hypotheses.
    ensemble: WeightedMajority<H>,

    // Clamped weighted errors, round by round.
    errors: Vec<f64>,

    // Random source for resampling and randomized weak learners.
    rng: R,

    // Max iteration until AdaBoost guarantees the optimality.
    max_iter: usize,

    // Optional. If this value is `Some(it)`,
    // the algorithm terminates after `it` iterations.
    force_quit_at: Option<usize>,
}


impl<'a, E, H, R> AdaBoost<'a, E, H, R> {
    /// Initialize the `AdaBoost`.
    /// The distribution starts uniform and the ensemble empty.
    /// `rng` drives every random choice of the run.
    ///
    /// The default tolerance is `1 / (n + 1)`,
    /// where `n` is the number of training examples.
    pub fn init(examples: &'a [E], rng: R) -> Result<Self> {
        checker::check_examples(examples.len())?;
        let n_examples = examples.len();

        Ok(Self {
            examples,

            dist: Distribution::uniform(n_examples),
            sampling: Sampling::default(),
            tolerance: 1f64 / (n_examples as f64 + 1f64),

            ensemble: WeightedMajority::default(),
            errors: Vec::new(),
            rng,

            max_iter: usize::MAX,
            force_quit_at: None,
        })
    }


    /// Returns the maximum iteration
    /// of the `AdaBoost` to find a combined hypothesis
    /// that has error at most `tolerance`.
    /// After the `self.max_loop()` iterations,
    /// `AdaBoost` guarantees zero training error in terms of zero-one loss
    /// if the training examples are linearly separable.
    pub fn max_loop(&self) -> usize {
        let n_examples = self.examples.len() as f64;

        // At least one round, even when the logarithm vanishes.
        ((n_examples.ln() / self.tolerance.powi(2)) as usize).max(1)
    }


    /// Set how the weak learner receives the examples.
    /// See [`Sampling`].
    #[inline]
    pub fn sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }


    /// Resample `size` examples per round.
    #[inline]
    pub fn sample_size(self, size: usize) -> Self {
        self.sampling(Sampling::Resample { size: Some(size) })
    }


    /// Force quits after `it` iterations.
    /// Note that if `it` is smaller than the iteration bound
    /// for AdaBoost, the returned hypothesis has no guarantee.
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


    /// Apply every setting in `config`.
    pub fn config(mut self, config: &BoosterConfig) -> Self {
        self.sampling = config.sampling;
        if let Some(it) = config.force_quit_at {
            self.force_quit_at = Some(it);
        }
        if let Some(tolerance) = config.tolerance {
            self.tolerance = tolerance;
        }
        self
    }


    /// The current distribution over the training examples.
    #[inline]
    pub fn distribution(&self) -> &Distribution {
        &self.dist
    }


    /// The ensemble built so far.
    #[inline]
    pub fn ensemble(&self) -> &WeightedMajority<H> {
        &self.ensemble
    }


    /// The clamped weighted error of every round so far.
    #[inline]
    pub fn errors(&self) -> &[f64] {
        &self.errors[..]
    }


    /// Number of examples drawn per round,
    /// or `None` when reweighting.
    fn sample_size_per_round(&self) -> Result<Option<usize>> {
        match self.sampling {
            Sampling::Reweight => Ok(None),
            Sampling::Resample { size: None } => Ok(Some(self.examples.len())),
            Sampling::Resample { size: Some(0) } => Err(BoostError::invalid(
                "sample_size", "at least one example must be drawn"
            )),
            Sampling::Resample { size } => Ok(size),
        }
    }
}


impl<'a, E, H, R> AdaBoost<'a, E, H, R>
    where E: Example,
          H: Classifier<E>,
          R: RngCore,
{
    /// Runs one round of boosting with `weak_learner`
    /// and appends the new hypothesis to the ensemble.
    pub fn round<W>(&mut self, weak_learner: &W) -> Result<RoundStats>
        where W: WeakLearner<E, Hypothesis = H>,
    {
        let examples = self.examples;
        let h = match self.sample_size_per_round()? {
            Some(size) => {
                let cumulative = self.dist.to_cumulative();
                let sample = (0..size)
                    .map(|_| &examples[cumulative.draw(&mut self.rng)])
                    .collect::<Vec<_>>();
                let uniform = vec![1f64 / size as f64; size];
                weak_learner.produce(&sample, &uniform, &mut self.rng)?
            },
            None => {
                let all = examples.iter().collect::<Vec<_>>();
                weak_learner.produce(&all, self.dist.as_slice(), &mut self.rng)?
            },
        };

        // Measured on the full set, under the pre-round distribution.
        let raw = utils::weighted_error(examples, self.dist.as_slice(), &h);
        let error = utils::clamp_error(raw);
        if error != raw {
            warn!("weighted error {raw} clamped to {error}");
        }
        let confidence = utils::confidence_of_error(error);

        self.dist.as_mut_slice()
            .iter_mut()
            .zip(examples)
            .for_each(|(d, example)| {
                let p = h.predict(example) as f64;
                *d *= (-confidence * example.sign() * p).exp();
            });
        self.dist.normalize();
        checker::simplex_condition(self.dist.as_slice());

        self.ensemble.push(confidence, h);
        self.errors.push(error);

        let stats = RoundStats {
            round: self.ensemble.len(),
            weighted_error: error,
            confidence,
        };
        debug!(
            "round {}: error {error:.6}, confidence {confidence:.6}",
            stats.round
        );
        debug!("weights: {:?}", self.dist.summary());
        Ok(stats)
    }


    /// The score `Σ a_t h_t(example)` of the current ensemble.
    #[inline]
    pub fn predict(&self, example: &E) -> f64 {
        Classifier::confidence(&self.ensemble, example)
    }


    /// Fraction of `examples` the current ensemble misclassifies.
    /// A zero score counts as a positive prediction.
    #[inline]
    pub fn evaluate(&self, examples: &[E]) -> f64 {
        utils::zero_one_loss(examples, &self.ensemble)
    }
}


impl<'a, E, H, R, W> Booster<W> for AdaBoost<'a, E, H, R>
    where E: Example,
          H: Classifier<E> + Clone,
          R: RngCore,
          W: WeakLearner<E, Hypothesis = H>,
{
    type Output = WeightedMajority<H>;


    fn name(&self) -> &str {
        "AdaBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let n_examples = self.examples.len();
        let quit = if let Some(it) = self.force_quit_at {
            format!("{it}")
        } else {
            "-".to_string()
        };
        let info = Vec::from([
            ("# of examples", format!("{n_examples}")),
            ("Sampling", format!("{}", self.sampling)),
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
        self.sample_size_per_round()?;

        // Initialize parameters
        self.dist = Distribution::uniform(self.examples.len());
        self.ensemble = WeightedMajority::default();
        self.errors.clear();

        self.max_iter = self.force_quit_at
            .unwrap_or_else(|| self.max_loop());
        info!("AdaBoost runs at most {} rounds", self.max_iter);
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


impl<E, H, R> CurrentHypothesis for AdaBoost<'_, E, H, R>
    where H: Clone,
{
    type Output = WeightedMajority<H>;


    fn current_hypothesis(&self) -> Self::Output {
        self.ensemble.clone()
    }
}
