//! Apriori candidate generation (join + prune)
//!
//! # Algorithm
//!
//! ```text
//! L_k (sorted canonically)
//!   join : a, b ∈ L_k sharing their first k-1 items, a.last < b.last
//!          → c = a ∪ {b.last}
//!   prune: drop c unless every k-subset of c is in L_k
//! ```
//!
//! Sorting makes each shared-prefix group contiguous, so the inner scan stops
//! at the first itemset with a different prefix.

use crate::shared::models::Itemset;
use rustc_hash::FxHashSet;

/// Build level k+1 candidates from the frequent level `level`
///
/// `level` must hold distinct itemsets of one size in canonical order.
pub fn generate_candidates(level: &[Itemset]) -> Vec<Itemset> {
    let frequent: FxHashSet<&Itemset> = level.iter().collect();
    let mut candidates = Vec::new();

    for (i, a) in level.iter().enumerate() {
        for b in &level[i + 1..] {
            let Some(candidate) = a.join(b) else {
                // Prefix group ended
                break;
            };
            if has_frequent_subsets(&candidate, &frequent) {
                candidates.push(candidate);
            }
        }
    }

    candidates
}

/// Anti-monotonicity check over all k-subsets
///
/// The two subsets obtained by dropping one of the last two items are the
/// join parents and are known frequent.
fn has_frequent_subsets(candidate: &Itemset, frequent: &FxHashSet<&Itemset>) -> bool {
    let len = candidate.len();
    if len <= 2 {
        return true;
    }
    (0..len - 2).all(|position| frequent.contains(&candidate.without_position(position)))
}
