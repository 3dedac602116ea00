use std::ops::Index;

use super::Cumulative;


/// A probability vector over a fixed index set.
///
/// Weights are never negative and sum to `1`
/// after every call of [`Distribution::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    weights: Vec<f64>,
}


impl Distribution {
    /// Returns the uniform distribution over `n_items` items.
    /// Each weight is `1 / n_items`.
    pub fn uniform(n_items: usize) -> Self {
        let uni = 1f64 / n_items as f64;
        Self { weights: vec![uni; n_items] }
    }


    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }


    /// Returns `true` if the distribution has no item.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }


    /// Weights as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.weights[..]
    }


    /// Weights as a mutable slice.
    /// Call [`Distribution::normalize`] after updating them.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.weights[..]
    }


    /// Sum of the weights.
    #[inline]
    pub fn total(&self) -> f64 {
        self.weights.iter().sum::<f64>()
    }


    /// Divides every weight by the current sum.
    ///
    /// # Panics
    /// Panics if the sum is zero or not finite,
    /// or if some weight is negative.
    /// Callers must keep at least one positive weight.
    pub fn normalize(&mut self) {
        assert!(
            self.weights.iter().all(|w| *w >= 0f64),
            "tried to normalize a distribution with a negative weight"
        );
        let z = self.total();
        assert!(
            z > 0f64 && z.is_finite(),
            "tried to normalize a distribution whose weights sum to {z}"
        );

        self.weights.iter_mut()
            .for_each(|w| { *w /= z; });
    }


    /// Builds the cumulative form of `self`.
    #[inline]
    pub fn to_cumulative(&self) -> Cumulative {
        Cumulative::from(self)
    }


    /// Min, mean, and max of the weights.
    pub fn summary(&self) -> WeightSummary {
        WeightSummary::of(&self.weights[..])
    }
}


impl Index<usize> for Distribution {
    type Output = f64;
    #[inline]
    fn index(&self, i: usize) -> &f64 {
        &self.weights[i]
    }
}


impl From<Vec<f64>> for Distribution {
    /// Wraps the given weights and normalizes them.
    fn from(weights: Vec<f64>) -> Self {
        let mut dist = Self { weights };
        dist.normalize();
        dist
    }
}


/// Min/mean/max of a weight vector, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightSummary {
    /// Smallest weight.
    pub min: f64,
    /// Mean weight.
    pub mean: f64,
    /// Largest weight.
    pub max: f64,
}


impl WeightSummary {
    pub(crate) fn of(weights: &[f64]) -> Self {
        let (min, max, sum) = weights.iter()
            .fold((f64::MAX, f64::MIN, 0f64), |(lo, hi, s), &w| {
                (lo.min(w), hi.max(w), s + w)
            });
        let mean = sum / weights.len() as f64;
        Self { min, mean, max }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn uniform_sums_to_one() {
        for n in [1_usize, 2, 3, 7, 100, 1_234] {
            let dist = Distribution::uniform(n);
            assert_eq!(dist.len(), n);
            assert_relative_eq!(dist.total(), 1f64, epsilon = 1e-9);
            let uni = 1f64 / n as f64;
            assert!(dist.as_slice().iter().all(|&w| w == uni));
        }
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut dist = Distribution::uniform(4);
        dist.as_mut_slice().copy_from_slice(&[0.3, 2.0, 0.7, 1.0]);
        dist.normalize();
        let once = dist.clone();
        dist.normalize();

        assert_relative_eq!(dist.total(), 1f64, epsilon = 1e-12);
        for (a, b) in once.as_slice().iter().zip(dist.as_slice()) {
            assert_relative_eq!(a, b, epsilon = 1e-15);
        }
        assert_relative_eq!(once[1], 0.5);
    }

    #[test]
    #[should_panic]
    fn normalize_zero_sum() {
        let mut dist = Distribution::uniform(3);
        dist.as_mut_slice().iter_mut().for_each(|w| *w = 0f64);
        dist.normalize();
    }

    #[test]
    #[should_panic]
    fn normalize_negative_weight() {
        let _ = Distribution::from(vec![0.5, -0.1, 0.6]);
    }

    #[test]
    fn summary_of_weights() {
        let dist = Distribution::from(vec![1.0, 2.0, 5.0]);
        let s = dist.summary();
        assert_relative_eq!(s.min, 0.125);
        assert_relative_eq!(s.max, 0.625);
        assert_relative_eq!(s.mean, 1f64 / 3f64);
    }
}
