//! Defines how the decision tree scores a split.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{
    Example,
    Feature,
    common::utils::binary_entropy,
};


/// How examples are counted when the decision tree
/// measures the entropy of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountBy {
    /// Every example counts `1`, whatever its weight.
    Unweighted,
    /// Every example counts its current weight.
    Weighted,
}


impl Default for CountBy {
    fn default() -> Self {
        Self::Unweighted
    }
}


impl fmt::Display for CountBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unweighted => "Unweighted (example count)",
            Self::Weighted => "Weighted (distribution mass)",
        };
        write!(f, "{name}")
    }
}


/// Positive and negative mass of a set of examples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(super) struct Mass {
    pub(super) pos: f64,
    pub(super) neg: f64,
}


impl Mass {
    #[inline]
    pub(super) fn total(&self) -> f64 {
        self.pos + self.neg
    }


    #[inline]
    pub(super) fn entropy(&self) -> f64 {
        binary_entropy(self.pos, self.neg)
    }


    #[inline]
    fn add(&mut self, label: bool, amount: f64) {
        if label {
            self.pos += amount;
        } else {
            self.neg += amount;
        }
    }
}


impl CountBy {
    #[inline(always)]
    fn amount(&self, weight: f64) -> f64 {
        match self {
            Self::Unweighted => 1f64,
            Self::Weighted => weight,
        }
    }


    /// Mass of the examples at `indices`.
    pub(super) fn mass<E>(
        &self,
        examples: &[&E],
        dist: &[f64],
        indices: &[usize],
    ) -> Mass
        where E: Example,
    {
        let mut mass = Mass::default();
        for &i in indices {
            mass.add(examples[i].label(), self.amount(dist[i]));
        }
        mass
    }


    /// Information gain of splitting the examples at `indices`
    /// by `feature`:
    /// `H(node) - P(true) H(true) - P(false) H(false)`.
    pub(super) fn gain<E, F>(
        &self,
        examples: &[&E],
        dist: &[f64],
        indices: &[usize],
        node: &Mass,
        feature: &F,
    ) -> f64
        where E: Example,
              F: Feature<E>,
    {
        let total = node.total();
        if total <= 0f64 {
            return 0f64;
        }

        let mut on_true = Mass::default();
        let mut on_false = Mass::default();
        for &i in indices {
            let example = examples[i];
            let amount = self.amount(dist[i]);
            if feature.test(example) {
                on_true.add(example.label(), amount);
            } else {
                on_false.add(example.label(), amount);
            }
        }

        let p_true = on_true.total() / total;
        let p_false = on_false.total() / total;
        node.entropy()
            - p_true * on_true.entropy()
            - p_false * on_false.entropy()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    struct Ex(bool, bool);

    impl Example for Ex {
        fn label(&self) -> bool { self.1 }
    }

    struct First;

    impl fmt::Display for First {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "first")
        }
    }

    impl Feature<Ex> for First {
        fn test(&self, e: &Ex) -> bool { e.0 }
    }

    #[test]
    fn perfect_split_gains_the_node_entropy() {
        let data = [Ex(true, true), Ex(false, false)];
        let examples = data.iter().collect::<Vec<_>>();
        let dist = [0.5, 0.5];
        let indices = [0, 1];

        let node = CountBy::Unweighted.mass(&examples, &dist, &indices);
        assert_eq!(node, Mass { pos: 1.0, neg: 1.0 });
        let gain = CountBy::Unweighted
            .gain(&examples, &dist, &indices, &node, &First);
        assert_eq!(gain, 1.0);
    }

    #[test]
    fn weighted_mass_follows_the_distribution() {
        let data = [Ex(true, true), Ex(false, false), Ex(false, true)];
        let examples = data.iter().collect::<Vec<_>>();
        let dist = [0.2, 0.5, 0.3];
        let mass = CountBy::Weighted.mass(&examples, &dist, &[0, 1, 2]);
        assert!((mass.pos - 0.5).abs() < 1e-12);
        assert!((mass.neg - 0.5).abs() < 1e-12);
    }
}
