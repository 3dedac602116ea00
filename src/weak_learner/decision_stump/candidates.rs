use rand::{Rng, RngCore};
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::Clause;


/// How a decision stump enumerates the clauses it tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Candidates {
    /// Try every feature on its own, in the given order.
    Exhaustive,
    /// Try this many AND-combinations of two features,
    /// each feature drawn uniformly at random.
    /// Suited to large feature pools.
    RandomPairs(usize),
}


impl Default for Candidates {
    fn default() -> Self {
        Self::Exhaustive
    }
}


impl fmt::Display for Candidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhaustive => write!(f, "Exhaustive"),
            Self::RandomPairs(k) => write!(f, "{k} random pairs"),
        }
    }
}


impl Candidates {
    /// Lists the clauses to try this round.
    /// `features` must not be empty.
    pub(super) fn enumerate<'a, F>(
        &self,
        features: &'a [F],
        rng: &mut dyn RngCore,
    ) -> Vec<Clause<'a, F>>
    {
        match *self {
            Self::Exhaustive => {
                features.iter()
                    .map(Clause::single)
                    .collect()
            },
            Self::RandomPairs(k) => {
                let n_features = features.len();
                (0..k).map(|_| {
                        let first = &features[rng.gen_range(0..n_features)];
                        let second = &features[rng.gen_range(0..n_features)];
                        Clause::and(first, second)
                    })
                    .collect()
            },
        }
    }
}
