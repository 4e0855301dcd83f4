//! Domain assertions for mining output

use basket_mining::{AssociationRule, FrequentItemsets, TransactionStore};

pub const EPS: f64 = 1e-9;

/// Assert the support of the itemset named by `names`
pub fn assert_support(itemsets: &FrequentItemsets, store: &TransactionStore, names: &[&str], expected: f64) {
    let itemset = store
        .itemset(names.iter().copied())
        .unwrap_or_else(|| panic!("unknown items in {names:?}"));
    let record = itemsets
        .get(&itemset)
        .unwrap_or_else(|| panic!("{names:?} is not frequent"));
    assert!(
        (record.support - expected).abs() < EPS,
        "support of {names:?}: expected {expected}, got {}",
        record.support
    );
}

/// Assert the itemset named by `names` is absent
pub fn assert_not_frequent(itemsets: &FrequentItemsets, store: &TransactionStore, names: &[&str]) {
    let itemset = store.itemset(names.iter().copied()).unwrap();
    assert!(!itemsets.contains(&itemset), "{names:?} should not be frequent");
}

/// Every record reaches the threshold and its support matches a recount
pub fn assert_collection_sound(itemsets: &FrequentItemsets, store: &TransactionStore) {
    let n = store.transaction_count();
    for record in itemsets {
        assert!(
            record.support + EPS >= itemsets.min_support(),
            "{} below threshold: {}",
            record.itemset,
            record.support
        );
        assert_eq!(record.count, store.count_containing(&record.itemset));
        assert!((record.support - record.count as f64 / n as f64).abs() < EPS);
    }
}

/// Every subset of a frequent itemset is frequent with at least its support
pub fn assert_anti_monotone(itemsets: &FrequentItemsets) {
    for record in itemsets {
        let set = &record.itemset;
        for position in 0..set.len() {
            if set.len() == 1 {
                break;
            }
            let subset = set.without_position(position);
            let parent = itemsets
                .get(&subset)
                .unwrap_or_else(|| panic!("{subset} missing although {set} is frequent"));
            assert!(parent.support + EPS >= record.support);
        }
    }
}

/// Rule sides are disjoint, the union is frequent and support matches it
pub fn assert_rules_consistent(rules: &[AssociationRule], itemsets: &FrequentItemsets) {
    for rule in rules {
        assert!(!rule.antecedent.is_empty() && !rule.consequent.is_empty());
        assert!(rule.antecedent.iter().all(|item| !rule.consequent.contains(item)));

        let union = itemsets
            .get(&rule.itemset())
            .unwrap_or_else(|| panic!("{rule}: union not frequent"));
        assert!((rule.support - union.support).abs() < EPS, "{rule}: support mismatch");
    }
}

/// Lift desc, then confidence desc, then antecedent order
pub fn assert_rules_sorted(rules: &[AssociationRule]) {
    for pair in rules.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let ordered = a.lift > b.lift
            || (a.lift == b.lift && a.confidence > b.confidence)
            || (a.lift == b.lift && a.confidence == b.confidence && a.antecedent <= b.antecedent);
        assert!(ordered, "rules out of order: {a} before {b}");
    }
}
