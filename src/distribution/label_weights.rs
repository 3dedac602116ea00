use super::{Distribution, WeightSummary};


/// A joint distribution over `(example, label)` pairs,
/// viewed as one weight slice per label.
///
/// Each label owns the slice [`LabelDistribution::label`] returns.
/// The joint grid (every slice together) sums to `1`
/// after [`LabelDistribution::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDistribution<L> {
    labels: Vec<L>,
    n_examples: usize,
    // Label-major: the weights of label `k` live in
    // `grid[k * n_examples..(k + 1) * n_examples]`.
    grid: Distribution,
}


impl<L> LabelDistribution<L> {
    /// Returns the uniform distribution over `n_examples × labels.len()`
    /// pairs. Each pair gets `1 / (n_examples * labels.len())`.
    pub fn uniform(n_examples: usize, labels: Vec<L>) -> Self {
        let grid = Distribution::uniform(n_examples * labels.len());
        Self { labels, n_examples, grid }
    }


    /// The labels, in the order of their slices.
    #[inline]
    pub fn labels(&self) -> &[L] {
        &self.labels[..]
    }


    /// Number of examples.
    #[inline]
    pub fn n_examples(&self) -> usize {
        self.n_examples
    }


    /// The weights of the `k`th label.
    #[inline]
    pub fn label(&self, k: usize) -> &[f64] {
        let n = self.n_examples;
        &self.grid.as_slice()[k * n..(k + 1) * n]
    }


    /// The weights of the `k`th label, mutably.
    /// Call [`LabelDistribution::normalize`] after updating them.
    #[inline]
    pub fn label_mut(&mut self, k: usize) -> &mut [f64] {
        let n = self.n_examples;
        &mut self.grid.as_mut_slice()[k * n..(k + 1) * n]
    }


    /// Weight on the pair `(i, k)`:
    /// the `i`th example and the `k`th label.
    #[inline]
    pub fn get(&self, i: usize, k: usize) -> f64 {
        self.grid[k * self.n_examples + i]
    }


    /// Sum of the weights over every pair.
    #[inline]
    pub fn total(&self) -> f64 {
        self.grid.total()
    }


    /// Normalizes jointly across every `(example, label)` pair.
    ///
    /// # Panics
    /// Panics if every weight is zero.
    #[inline]
    pub fn normalize(&mut self) {
        self.grid.normalize();
    }


    /// The joint weights, label-major.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        self.grid.as_slice()
    }


    /// Min, mean, and max over every pair.
    #[inline]
    pub fn summary(&self) -> WeightSummary {
        self.grid.summary()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn uniform_over_the_grid() {
        let dist = LabelDistribution::uniform(4, vec!["a", "b", "c"]);
        assert_relative_eq!(dist.total(), 1f64, epsilon = 1e-12);
        for k in 0..3 {
            assert_eq!(dist.label(k).len(), 4);
            assert!(dist.label(k).iter().all(|&w| w == 1f64 / 12f64));
        }
    }

    #[test]
    fn joint_normalization() {
        let mut dist = LabelDistribution::uniform(2, vec![0_u8, 1]);
        dist.label_mut(0)[1] *= 5.0;
        dist.label_mut(1)[0] = 0.0;
        dist.normalize();

        assert_relative_eq!(dist.total(), 1f64, epsilon = 1e-12);
        assert_relative_eq!(dist.get(1, 0), 5f64 / 7f64, epsilon = 1e-12);
        assert_eq!(dist.get(0, 1), 0f64);
        // Per-label slices do not sum to one on their own.
        let label0 = dist.label(0).iter().sum::<f64>();
        assert_relative_eq!(label0, 6f64 / 7f64, epsilon = 1e-12);
    }
}
