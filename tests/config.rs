mod common;

use rand::{SeedableRng, rngs::StdRng};

use labelboost::prelude::*;
use labelboost::constants::{DEFAULT_MAX_DEPTH, DEFAULT_SMOOTHING};
use common::*;


/// Tests for the settings records.
#[cfg(test)]
pub mod config_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let booster: BoosterConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(booster, BoosterConfig::default());
        assert_eq!(booster.sampling, Sampling::Resample { size: None });

        let stump: StumpConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(stump.candidates, Candidates::Exhaustive);
        assert_eq!(stump.smoothing, DEFAULT_SMOOTHING);

        let tree: TreeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(tree.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(tree.count_by, CountBy::Unweighted);
    }

    #[test]
    fn parses_every_field() {
        let booster: BoosterConfig = serde_json::from_str(
            r#"{ "sampling": "reweight", "force_quit_at": 50, "tolerance": 0.1 }"#
        ).unwrap();
        assert_eq!(booster.sampling, Sampling::Reweight);
        assert_eq!(booster.force_quit_at, Some(50));
        assert_eq!(booster.tolerance, Some(0.1));

        let booster: BoosterConfig = serde_json::from_str(
            r#"{ "sampling": { "resample": { "size": 10 } } }"#
        ).unwrap();
        assert_eq!(booster.sampling, Sampling::Resample { size: Some(10) });

        let booster: BoosterConfig = serde_json::from_str(
            r#"{ "sampling": { "resample": {} } }"#
        ).unwrap();
        assert_eq!(booster.sampling, Sampling::Resample { size: None });

        let stump: StumpConfig = serde_json::from_str(
            r#"{ "candidates": { "random_pairs": 20 }, "smoothing": 0.5 }"#
        ).unwrap();
        assert_eq!(stump.candidates, Candidates::RandomPairs(20));
        assert_eq!(stump.smoothing, 0.5);

        let tree: TreeConfig = serde_json::from_str(
            r#"{ "max_depth": 5, "count_by": "weighted" }"#
        ).unwrap();
        assert_eq!(tree.max_depth, 5);
        assert_eq!(tree.count_by, CountBy::Weighted);
    }

    #[test]
    fn unknown_variants_are_rejected() {
        let parsed = serde_json::from_str::<BoosterConfig>(
            r#"{ "sampling": "bagging" }"#
        );
        assert!(parsed.is_err());

        let parsed = serde_json::from_str::<TreeConfig>(
            r#"{ "count_by": "gini" }"#
        );
        assert!(parsed.is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let config = BoosterConfig {
            sampling: Sampling::Resample { size: Some(3) },
            force_quit_at: Some(7),
            tolerance: None,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: BoosterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn configs_reach_the_learners() {
        let words = words();
        let stump_config: StumpConfig = serde_json::from_str(
            r#"{ "smoothing": 0.25 }"#
        ).unwrap();
        let stump = DecisionStumpBuilder::new(&words)
            .config(&stump_config)
            .build_multi_label()
            .unwrap();
        assert_eq!(stump.smoothing(), 0.25);

        let bad: StumpConfig = serde_json::from_str(
            r#"{ "smoothing": -1.0 }"#
        ).unwrap();
        let err = DecisionStumpBuilder::new(&words)
            .config(&bad)
            .build_multi_label()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            labelboost::BoostError::InvalidParameter { name: "smoothing", .. }
        ));

        let fruits = fruits();
        let features = fruit_features();
        let refs = fruits.iter().collect::<Vec<_>>();
        let tree_config: TreeConfig = serde_json::from_str(
            r#"{ "max_depth": 2 }"#
        ).unwrap();
        let f = DecisionTreeBuilder::new(&features)
            .config(&tree_config)
            .build()
            .unwrap()
            .produce(&refs, &[0.25; 4], &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(f.depth(), 2);
    }
}
