//! Association rule model

use crate::features::metrics::RuleScores;
use crate::features::transactions::TransactionStore;
use crate::shared::models::Itemset;
use serde::Serialize;

/// Scored rule A ⇒ B
///
/// Antecedent and consequent are disjoint and non-empty, and their union is
/// a frequent itemset. Built once by the generator, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssociationRule {
    pub antecedent: Itemset,
    pub consequent: Itemset,

    /// Transactions containing A ∪ B
    pub count: u64,

    pub antecedent_support: f64,
    pub consequent_support: f64,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub leverage: f64,
    pub conviction: f64,
}

impl AssociationRule {
    pub fn new(antecedent: Itemset, consequent: Itemset, count: u64, scores: RuleScores) -> Self {
        Self {
            antecedent,
            consequent,
            count,
            antecedent_support: scores.antecedent_support,
            consequent_support: scores.consequent_support,
            support: scores.support,
            confidence: scores.confidence,
            lift: scores.lift,
            leverage: scores.leverage,
            conviction: scores.conviction,
        }
    }

    /// A ∪ B
    pub fn itemset(&self) -> Itemset {
        self.antecedent.union(&self.consequent)
    }

    /// "{bread} => {milk}" using the store's item names
    pub fn describe(&self, store: &TransactionStore) -> String {
        format!(
            "{{{}}} => {{{}}}",
            store.labels(&self.antecedent).join(", "),
            store.labels(&self.consequent).join(", ")
        )
    }
}

impl std::fmt::Display for AssociationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} => {} (support={:.4}, confidence={:.4}, lift={:.4})",
            self.antecedent, self.consequent, self.support, self.confidence, self.lift
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_copies_scores() {
        let scores = RuleScores::from_counts(2, 3, 3, 4);
        let rule = AssociationRule::new(
            Itemset::from_indices([0]),
            Itemset::from_indices([1]),
            2,
            scores,
        );
        assert_eq!(rule.count, 2);
        assert_eq!(rule.antecedent_support, scores.antecedent_support);
        assert_eq!(rule.confidence, scores.confidence);
        assert_eq!(rule.lift, scores.lift);
        assert_eq!(rule.conviction, scores.conviction);
        assert_eq!(rule.itemset(), Itemset::from_indices([0, 1]));
    }

    #[test]
    fn test_describe_uses_names() {
        let store = TransactionStore::from_baskets(["milk", "bread"], vec![vec!["milk", "bread"]]).unwrap();
        let rule = AssociationRule::new(
            Itemset::from_indices([1]),
            Itemset::from_indices([0]),
            1,
            RuleScores::from_counts(1, 1, 1, 1),
        );
        assert_eq!(rule.describe(&store), "{bread} => {milk}");
    }
}
