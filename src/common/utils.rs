//! This file provides some common functions
//! such as weighted-error and entropy calculation.
use crate::{
    Classifier,
    Example,
    MultiLabelClassifier,
    MultiLabelExample,
    constants::ERROR_FLOOR,
};


/// Returns the margin vector `y_i h(x_i)` of a single hypothesis.
#[inline(always)]
pub(crate) fn margins_of_hypothesis<E, H>(examples: &[E], h: &H)
    -> Vec<f64>
    where E: Example,
          H: Classifier<E>,
{
    examples.iter()
        .map(|example| example.sign() * h.confidence(example))
        .collect()
}


/// Returns the weighted misclassification rate of `h`:
/// the mass of `dist` on the examples `h` predicts wrongly.
#[inline]
pub fn weighted_error<E, H>(examples: &[E], dist: &[f64], h: &H) -> f64
    where E: Example,
          H: Classifier<E>,
{
    examples.iter()
        .zip(dist)
        .filter(|(example, _)| (h.predict(example) > 0) != example.label())
        .map(|(_, d)| *d)
        .sum::<f64>()
}


/// Clamps a weighted error into `[ERROR_FLOOR, 1 - ERROR_FLOOR]`.
/// A perfect (or perfectly wrong) weak hypothesis
/// would otherwise make the confidence infinite.
#[inline(always)]
pub(crate) fn clamp_error(error: f64) -> f64 {
    error.clamp(ERROR_FLOOR, 1f64 - ERROR_FLOOR)
}


/// Returns the AdaBoost confidence `0.5 ln((1 - e) / e)`
/// of a weak hypothesis with weighted error `e`.
#[inline(always)]
pub(crate) fn confidence_of_error(error: f64) -> f64 {
    0.5 * ((1f64 - error) / error).ln()
}


/// Binary entropy (in bits) of a node
/// holding `pos` positive and `neg` negative mass.
/// An empty node has zero entropy.
#[inline]
pub(crate) fn binary_entropy(pos: f64, neg: f64) -> f64 {
    let total = pos + neg;
    if total <= 0f64 {
        return 0f64;
    }
    [pos / total, neg / total].into_iter()
        .map(|p| if p <= 0f64 { 0f64 } else { -p * p.log2() })
        .sum::<f64>()
}


/// Fraction of `examples` that `f` misclassifies.
/// Returns `0` for an empty set.
pub fn zero_one_loss<E, H>(examples: &[E], f: &H) -> f64
    where E: Example,
          H: Classifier<E>,
{
    if examples.is_empty() {
        return 0f64;
    }
    let n_miss = examples.iter()
        .filter(|example| (f.predict(example) > 0) != example.label())
        .count();
    n_miss as f64 / examples.len() as f64
}


/// Number of `(example, label)` pairs over `labels`
/// on which `f` disagrees with the ground truth.
pub fn hamming_distance<E, H>(examples: &[E], labels: &[E::Label], f: &H)
    -> usize
    where E: MultiLabelExample,
          H: MultiLabelClassifier<E>,
{
    examples.iter()
        .map(|example| {
            labels.iter()
                .filter(|label| {
                    f.predict(example, label) != example.has_label(label)
                })
                .count()
        })
        .sum::<usize>()
}


/// [`hamming_distance`] divided by the number of pairs.
/// Returns `0` when there is no pair.
pub fn hamming_loss<E, H>(examples: &[E], labels: &[E::Label], f: &H) -> f64
    where E: MultiLabelExample,
          H: MultiLabelClassifier<E>,
{
    let n_pairs = examples.len() * labels.len();
    if n_pairs == 0 {
        return 0f64;
    }
    hamming_distance(examples, labels, f) as f64 / n_pairs as f64
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn entropy_of_pure_and_balanced_nodes() {
        assert_eq!(binary_entropy(3.0, 0.0), 0.0);
        assert_eq!(binary_entropy(0.0, 0.0), 0.0);
        assert_relative_eq!(binary_entropy(2.0, 2.0), 1.0);
        assert_relative_eq!(
            binary_entropy(1.0, 3.0),
            -(0.25f64 * 0.25f64.log2() + 0.75 * 0.75f64.log2())
        );
    }

    #[test]
    fn error_clamping() {
        assert_eq!(clamp_error(0.0), ERROR_FLOOR);
        assert_eq!(clamp_error(1.0), 1.0 - ERROR_FLOOR);
        assert_eq!(clamp_error(0.3), 0.3);
        assert!(confidence_of_error(clamp_error(0.0)).is_finite());
        assert_relative_eq!(confidence_of_error(0.5), 0.0);
    }
}
