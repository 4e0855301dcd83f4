//! Property-based tests for the mining engine
//!
//! Invariants that hold for every transaction table:
//! - Anti-monotonicity: X ⊆ Y ⇒ support(X) >= support(Y)
//! - Equivalence: Apriori and FP-Growth return the same collection
//! - Threshold monotonicity: raising min_support never adds itemsets
//! - Rule consistency: rule support = support(A ∪ B)
//! - Lift symmetry: lift(A⇒B) = lift(B⇒A)

mod common;

use basket_mining::features::apriori::AprioriMiner;
use basket_mining::features::fp_growth::FpGrowthMiner;
use basket_mining::features::miner::ItemsetMiner;
use basket_mining::shared::models::SUPPORT_EPSILON;
use basket_mining::{generate_rules, mine_apriori, mine_fpgrowth, RuleMetric, TransactionStore};
use common::*;
use proptest::prelude::*;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

// ============================================================================
// Strategies
// ============================================================================

/// (width, rows) with 1..=7 items and 0..=24 transactions
fn table_strategy() -> impl Strategy<Value = (usize, Vec<Vec<bool>>)> {
    (1usize..=7).prop_flat_map(|width| {
        (
            Just(width),
            prop::collection::vec(prop::collection::vec(any::<bool>(), width), 0..=24),
        )
    })
}

fn support_strategy() -> impl Strategy<Value = f64> {
    (1u32..=20).prop_map(|step| step as f64 / 20.0)
}

// ============================================================================
// Proptest
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn prop_miners_equivalent((width, rows) in table_strategy(), s in support_strategy()) {
        let store = store_from_matrix(width, &rows);
        let apriori = mine_apriori(&store, s).unwrap();
        let fpgrowth = mine_fpgrowth(&store, s).unwrap();

        prop_assert!(apriori.matches(&fpgrowth, SUPPORT_EPSILON));
        prop_assert_eq!(apriori, fpgrowth);
    }

    #[test]
    fn prop_collection_sound_and_anti_monotone((width, rows) in table_strategy(), s in support_strategy()) {
        let store = store_from_matrix(width, &rows);
        let itemsets = mine_fpgrowth(&store, s).unwrap();
        assert_collection_sound(&itemsets, &store);
        assert_anti_monotone(&itemsets);
    }

    #[test]
    fn prop_threshold_monotonic(
        (width, rows) in table_strategy(),
        low in support_strategy(),
        high in support_strategy(),
    ) {
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        let store = store_from_matrix(width, &rows);
        let loose = mine_apriori(&store, low).unwrap();
        let strict = mine_apriori(&store, high).unwrap();

        prop_assert!(strict.len() <= loose.len());
        for record in &strict {
            prop_assert!(loose.contains(&record.itemset));
        }
    }

    #[test]
    fn prop_rules_consistent((width, rows) in table_strategy(), s in support_strategy()) {
        let store = store_from_matrix(width, &rows);
        let itemsets = mine_fpgrowth(&store, s).unwrap();
        let rules = generate_rules(&itemsets, RuleMetric::Confidence, 0.0).unwrap();

        assert_rules_consistent(&rules, &itemsets);
        assert_rules_sorted(&rules);
        for rule in &rules {
            prop_assert!(rule.confidence <= 1.0 + SUPPORT_EPSILON);
            prop_assert!(rule.lift >= 0.0);
        }
    }

    #[test]
    fn prop_lift_symmetric((width, rows) in table_strategy(), s in support_strategy()) {
        let store = store_from_matrix(width, &rows);
        let itemsets = mine_apriori(&store, s).unwrap();
        let rules = generate_rules(&itemsets, RuleMetric::Lift, 0.0).unwrap();

        for rule in &rules {
            let mirror = rules
                .iter()
                .find(|r| r.antecedent == rule.consequent && r.consequent == rule.antecedent);
            let mirror = mirror.expect("every split appears in both directions at lift >= 0");
            prop_assert_eq!(mirror.lift, rule.lift);
        }
    }

    #[test]
    fn prop_max_len_is_prefix_of_lattice(
        (width, rows) in table_strategy(),
        s in support_strategy(),
        max_len in 1usize..=3,
    ) {
        let store = store_from_matrix(width, &rows);
        let full = FpGrowthMiner::new().mine(&store, s).unwrap();
        let capped_fp = FpGrowthMiner::new().max_len(Some(max_len)).mine(&store, s).unwrap();
        let capped_ap = AprioriMiner::new().max_len(Some(max_len)).mine(&store, s).unwrap();

        prop_assert_eq!(&capped_fp, &capped_ap);
        let expected = full.iter().filter(|r| r.itemset.len() <= max_len).count();
        prop_assert_eq!(capped_fp.len(), expected);
    }
}

// ============================================================================
// QuickCheck
// ============================================================================

#[quickcheck]
fn qc_serial_matches_parallel(seed: u64, density_pct: u8) -> TestResult {
    let density = (density_pct % 100) as f64 / 100.0;
    let store = fixture_random_store(seed, 40, 8, density);

    let serial = FpGrowthMiner::new().parallel(false).mine(&store, 0.1).unwrap();
    let parallel = FpGrowthMiner::new().parallel(true).mine(&store, 0.1).unwrap();
    TestResult::from_bool(serial == parallel)
}

#[quickcheck]
fn qc_invalid_support_rejected(raw: f64) -> TestResult {
    if raw > 0.0 && raw <= 1.0 {
        return TestResult::discard();
    }
    let store = fixture_grocery();
    TestResult::from_bool(mine_apriori(&store, raw).is_err() && mine_fpgrowth(&store, raw).is_err())
}

#[quickcheck]
fn qc_confidence_threshold_range(raw: f64) -> bool {
    let itemsets = mine_fpgrowth(&fixture_grocery(), 0.25).unwrap();
    let valid = (0.0..=1.0).contains(&raw);
    generate_rules(&itemsets, RuleMetric::Confidence, raw).is_ok() == valid
}

#[quickcheck]
fn qc_empty_store_is_empty(width: u8, step: u8) -> TestResult {
    let width = (width % 6) as usize + 1;
    let s = (step % 20 + 1) as f64 / 20.0;
    let names: Vec<String> = (0..width).map(|i| format!("i{i}")).collect();
    let store = TransactionStore::from_table(names, &[]).unwrap();
    TestResult::from_bool(mine_apriori(&store, s).unwrap().is_empty() && mine_fpgrowth(&store, s).unwrap().is_empty())
}
