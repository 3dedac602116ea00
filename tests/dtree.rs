mod common;

use rand::{SeedableRng, rngs::StdRng};

use labelboost::prelude::*;
use labelboost::BoostError;
use labelboost::weak_learner::decision_tree::Node;
use common::*;


/// Tests for `DecisionTree`.
#[cfg(test)]
pub mod dtree_tests {
    use super::*;

    #[test]
    fn depth_one_is_a_majority_leaf() {
        let fruits = fruits();
        let features = fruit_features();
        let refs = fruits.iter().collect::<Vec<_>>();

        let tree = DecisionTreeBuilder::new(&features)
            .max_depth(1)
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let f = tree.produce(&refs, &[0.25; 4], &mut rng).unwrap();

        // Two tasty fruits, two not: the tie goes to `-1`.
        assert_eq!(f.depth(), 1);
        assert_eq!(f.n_leaves(), 1);
        assert_eq!(f.predict_all(&fruits), vec![-1; 4]);
    }

    #[test]
    fn pure_node_is_a_leaf() {
        let points = points(&[(-1.0, true), (1.0, true), (2.0, true)]);
        let features = vec![Above(0.0), Above(1.5)];
        let refs = points.iter().collect::<Vec<_>>();

        let tree = DecisionTreeBuilder::new(&features).build().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let f = tree.produce(&refs, &[1.0 / 3.0; 3], &mut rng).unwrap();

        assert!(matches!(f.root(), Node::Leaf(leaf) if leaf.is_positive()));
        assert_eq!(f.predict_all(&points), vec![1; 3]);
    }

    #[test]
    fn splits_on_the_largest_gain() {
        let fruits = fruits();
        let features = fruit_features();
        let refs = fruits.iter().collect::<Vec<_>>();

        let tree = DecisionTreeBuilder::new(&features)
            .max_depth(2)
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let f = tree.produce(&refs, &[0.25; 4], &mut rng).unwrap();

        let Node::Branch(root) = f.root() else {
            panic!("expected a split, got {f}");
        };
        assert_eq!(root.feature().to_string(), "Weight=heavy");
        assert_eq!(f.depth(), 2);
        assert_eq!(f.n_leaves(), 2);
        assert_eq!(f.predict_all(&fruits), vec![1, -1, -1, -1]);

        let rendered = f.to_string();
        assert!(rendered.starts_with("if Weight=heavy:"));
    }

    #[test]
    fn separable_points_are_learned() {
        let points = points(&[
            (-3.0, false), (-1.0, true), (1.0, true), (3.0, false),
        ]);
        let features = vec![Above(-2.0), Above(2.0)];
        let refs = points.iter().collect::<Vec<_>>();

        let tree = DecisionTreeBuilder::new(&features)
            .max_depth(3)
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let f = tree.produce(&refs, &[0.25; 4], &mut rng).unwrap();

        assert_eq!(f.predict_all(&points), vec![-1, 1, 1, -1]);
        assert_eq!(zero_one_loss(&points, &f), 0.0);
    }

    #[test]
    fn no_gain_falls_back_to_negative() {
        let data = xor();
        let features = vec![Bit(0), Bit(1)];
        let refs = data.iter().collect::<Vec<_>>();

        let tree = DecisionTreeBuilder::new(&features)
            .max_depth(3)
            .build()
            .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let f = tree.produce(&refs, &[0.25; 4], &mut rng).unwrap();

        assert_eq!(f.n_leaves(), 1);
        assert_eq!(f.predict_all(&data), vec![-1; 4]);
    }

    #[test]
    fn weighted_counting_ignores_zero_weights() {
        let data = xor();
        let features = vec![Bit(0), Bit(1)];
        let refs = data.iter().collect::<Vec<_>>();
        // Only `11 -> false` and `10 -> true` carry weight.
        let dist = [0.5, 0.5, 0.0, 0.0];
        let mut rng = StdRng::seed_from_u64(0);

        let unweighted = DecisionTreeBuilder::new(&features)
            .build()
            .unwrap()
            .produce(&refs, &dist, &mut rng)
            .unwrap();
        assert_eq!(unweighted.n_leaves(), 1);

        let weighted = DecisionTreeBuilder::new(&features)
            .count_by(CountBy::Weighted)
            .build()
            .unwrap()
            .produce(&refs, &dist, &mut rng)
            .unwrap();
        let Node::Branch(root) = weighted.root() else {
            panic!("expected a split, got {weighted}");
        };
        assert_eq!(root.feature().to_string(), "b1");
        assert_eq!(weighted.predict(&data[0]), -1);
        assert_eq!(weighted.predict(&data[1]), 1);
    }

    #[test]
    fn config_is_applied() {
        let fruits = fruits();
        let features = fruit_features();
        let refs = fruits.iter().collect::<Vec<_>>();
        let config = TreeConfig { max_depth: 1, count_by: CountBy::Weighted };

        let f = DecisionTreeBuilder::new(&features)
            .config(&config)
            .build()
            .unwrap()
            .produce(&refs, &[0.25; 4], &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(f.depth(), 1);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let features = fruit_features();
        let err = DecisionTreeBuilder::new(&features)
            .max_depth(0)
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            BoostError::InvalidParameter { name: "max_depth", .. }
        ));

        let no_features: Vec<Attr> = Vec::new();
        let err = DecisionTreeBuilder::new(&no_features)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, BoostError::EmptyFeatures));

        let tree = DecisionTreeBuilder::new(&features)
            .count_by(CountBy::Weighted)
            .build()
            .unwrap();
        let fruits = fruits();
        let refs = fruits.iter().collect::<Vec<_>>();
        let mut rng = StdRng::seed_from_u64(0);
        let err = tree
            .produce(&refs, &[1.0, -1.0, 0.5, -0.5], &mut rng)
            .unwrap_err();
        assert!(matches!(err, BoostError::InvalidWeight { index: 1, .. }));

        let err = tree
            .produce(&refs, &[0.25, f64::INFINITY, 0.25, 0.25], &mut rng)
            .unwrap_err();
        assert!(matches!(err, BoostError::InvalidWeight { index: 1, .. }));

        let empty: Vec<&Fruit> = Vec::new();
        let err = tree
            .produce(&empty, &[], &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, BoostError::EmptyExamples));
    }
}
