use rand::{Rng, RngCore};

use crate::constants::SIMPLEX_TOLERANCE;
use super::Distribution;


/// The prefix sums of a [`Distribution`].
///
/// A `Cumulative` is non-decreasing, starts at a non-negative value,
/// and ends at `1` within [`SIMPLEX_TOLERANCE`].
/// Sampling an index by its weight is a binary search over this sequence.
/// It is rebuilt whenever the underlying weights change.
#[derive(Debug, Clone, PartialEq)]
pub struct Cumulative {
    sums: Vec<f64>,
}


impl Cumulative {
    /// Wraps a precomputed cumulative sequence.
    ///
    /// # Panics
    /// Panics if `sums` is empty, decreasing somewhere,
    /// starts below zero, or does not end at `1`.
    pub fn new(sums: Vec<f64>) -> Self {
        assert!(!sums.is_empty(), "cumulative distribution is empty");
        assert!(
            sums[0] >= 0f64,
            "cumulative distribution starts at {} < 0", sums[0]
        );
        if let Some(i) = sums.windows(2).position(|w| w[0] > w[1]) {
            panic!(
                "cumulative distribution decreases at index {}: {} > {}",
                i + 1, sums[i], sums[i + 1]
            );
        }
        let last = sums[sums.len() - 1];
        assert!(
            (last - 1f64).abs() < SIMPLEX_TOLERANCE,
            "cumulative distribution ends at {last}, not 1"
        );

        Self { sums }
    }


    /// Number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.sums.len()
    }


    /// Always `false`; a `Cumulative` has at least one item.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sums.is_empty()
    }


    /// The prefix sums as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.sums[..]
    }


    /// Returns the smallest index `i` such that
    /// `sums[i - 1] < r <= sums[i]`, where `sums[-1]` reads as `0`.
    ///
    /// The last prefix sum lies within [`SIMPLEX_TOLERANCE`] of `1`,
    /// so a value of `r` past it maps to the last index with positive weight.
    ///
    /// # Panics
    /// Panics unless `0 < r <= 1 + SIMPLEX_TOLERANCE`.
    pub fn search(&self, r: f64) -> usize {
        assert!(
            r > 0f64 && r <= 1f64 + SIMPLEX_TOLERANCE,
            "sampled value {r} is outside of (0, 1]"
        );

        let n = self.sums.len();
        let (mut lo, mut hi) = (0_usize, n);
        // Invariant: sums[..lo] < r <= sums[hi..]
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.sums[mid] < r {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        if lo < n {
            return lo;
        }

        let last = self.sums[n - 1];
        // Walk back over trailing zero-weight items.
        let mut i = n - 1;
        while i > 0 && self.sums[i - 1] >= last {
            i -= 1;
        }
        i
    }


    /// Draws an index with probability proportional to its weight.
    /// The random value is drawn from `(0, last]`,
    /// `last` being the final prefix sum,
    /// so that items with zero weight are never returned.
    #[inline]
    pub fn draw<R>(&self, rng: &mut R) -> usize
        where R: RngCore + ?Sized,
    {
        let last = self.sums[self.sums.len() - 1];
        let r = last * (1f64 - rng.gen::<f64>());
        self.search(r)
    }
}


impl From<&Distribution> for Cumulative {
    fn from(dist: &Distribution) -> Self {
        let sums = dist.as_slice()
            .iter()
            .scan(0f64, |acc, &w| {
                *acc += w;
                Some(*acc)
            })
            .collect::<Vec<_>>();
        Self::new(sums)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn unitary_distribution() {
        let cumulative = Distribution::uniform(1).to_cumulative();
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            assert_eq!(cumulative.draw(&mut rng), 0);
        }
    }

    #[test]
    fn search_boundaries() {
        let cumulative = Cumulative::new(vec![0.25, 0.5, 0.75, 1.0]);
        assert_eq!(cumulative.search(f64::MIN_POSITIVE), 0);
        assert_eq!(cumulative.search(0.25), 0);
        assert_eq!(cumulative.search(0.2500001), 1);
        assert_eq!(cumulative.search(0.5), 1);
        assert_eq!(cumulative.search(0.74), 2);
        assert_eq!(cumulative.search(1.0), 3);
    }

    #[test]
    fn search_skips_zero_weights() {
        // weights: [0, 0.5, 0, 0.5, 0]
        let cumulative = Cumulative::new(vec![0.0, 0.5, 0.5, 1.0, 1.0]);
        assert_eq!(cumulative.search(1e-12), 1);
        assert_eq!(cumulative.search(0.5), 1);
        assert_eq!(cumulative.search(0.5 + 1e-12), 3);
        assert_eq!(cumulative.search(1.0), 3);
    }

    #[test]
    fn search_tolerates_rounding_at_the_top() {
        let cumulative = Cumulative::new(vec![0.5, 0.9999999999999]);
        assert_eq!(cumulative.search(1.0), 1);

        let cumulative = Cumulative::new(vec![0.5, 0.9999999999999, 0.9999999999999]);
        assert_eq!(cumulative.search(1.0), 1);
    }

    #[test]
    fn sampling_law() {
        let weights = [0.1, 0.2, 0.7];
        let cumulative = Distribution::from(weights.to_vec()).to_cumulative();
        let mut rng = StdRng::seed_from_u64(1234);

        let n_draws = 200_000;
        let mut counts = [0_usize; 3];
        for _ in 0..n_draws {
            counts[cumulative.draw(&mut rng)] += 1;
        }

        for (count, w) in counts.iter().zip(weights) {
            let freq = *count as f64 / n_draws as f64;
            assert!((freq - w).abs() < 0.01, "frequency {freq} vs weight {w}");
        }
    }

    #[test]
    fn same_seed_same_draws() {
        let cumulative = Distribution::from(vec![0.1, 0.2, 0.7]).to_cumulative();
        let mut r1 = StdRng::seed_from_u64(7);
        let mut r2 = StdRng::seed_from_u64(7);
        let a = (0..50).map(|_| cumulative.draw(&mut r1)).collect::<Vec<_>>();
        let b = (0..50).map(|_| cumulative.draw(&mut r2)).collect::<Vec<_>>();
        assert_eq!(a, b);
    }

    #[test]
    fn accepted_sums_never_panic_at_the_top() {
        // Within tolerance of `1`, but well below it.
        let cumulative = Cumulative::new(vec![0.5, 0.999995]);
        assert_eq!(cumulative.search(0.999999), 1);
        assert_eq!(cumulative.search(1.0 + 5e-6), 1);

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10_000 {
            assert!(cumulative.draw(&mut rng) < 2);
        }
    }

    #[test]
    #[should_panic(expected = "decreases")]
    fn decreasing_cumulative() {
        let _ = Cumulative::new(vec![0.4, 0.3, 1.0]);
    }

    #[test]
    #[should_panic(expected = "not 1")]
    fn cumulative_not_ending_at_one() {
        let _ = Cumulative::new(vec![0.2, 0.5, 0.8]);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn search_zero() {
        let cumulative = Cumulative::new(vec![0.5, 1.0]);
        cumulative.search(0.0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn search_above_one() {
        let cumulative = Cumulative::new(vec![0.5, 1.0]);
        cumulative.search(1.5);
    }
}
