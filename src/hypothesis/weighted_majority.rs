use crate::{
    Classifier,
    MultiLabelClassifier,
    MultiLabelExample,
};


/// A struct that the boosting algorithms in this library return:
/// the weighted sum of the hypotheses gathered round by round.
///
/// The ensemble only grows during training;
/// afterwards it is read-only.
#[derive(Debug, Clone)]
pub struct WeightedMajority<H> {
    /// Weights on each hypothesis in `self.hypotheses`.
    pub weights: Vec<f64>,
    /// Set of hypotheses.
    pub hypotheses: Vec<H>,
}


impl<H> Default for WeightedMajority<H> {
    fn default() -> Self {
        Self { weights: Vec::new(), hypotheses: Vec::new() }
    }
}


impl<H: Clone> WeightedMajority<H> {
    /// Construct a new `WeightedMajority` from given slices.
    #[inline]
    pub fn from_slices(weights: &[f64], hypotheses: &[H]) -> Self {
        assert_eq!(weights.len(), hypotheses.len());
        Self {
            weights: weights.to_vec(),
            hypotheses: hypotheses.to_vec(),
        }
    }
}


impl<H> WeightedMajority<H> {
    /// Append a pair `(weight, H)` to the current combined hypothesis.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// Number of hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if no hypothesis has been added yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Iterates over the `(weight, hypothesis)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (f64, &H)> + '_ {
        self.weights.iter().copied().zip(&self.hypotheses[..])
    }


    /// Decompose the combined hypothesis
    /// into the two vectors `Vec<f64>` and `Vec<H>`
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<E, H> Classifier<E> for WeightedMajority<H>
    where H: Classifier<E>,
{
    fn confidence(&self, example: &E) -> f64 {
        self.iter()
            .map(|(w, h)| w * h.confidence(example))
            .sum::<f64>()
    }
}


impl<E, H> MultiLabelClassifier<E> for WeightedMajority<H>
    where E: MultiLabelExample,
          H: MultiLabelClassifier<E>,
{
    fn confidence(&self, example: &E, label: &E::Label) -> f64 {
        self.iter()
            .map(|(w, h)| w * h.confidence(example, label))
            .sum::<f64>()
    }
}
