//! Metric Engine - support, confidence, lift (plus leverage, conviction)
//!
//! Every metric is computed from exact integer counts with a single final
//! division, so no floating error is carried between metrics.
//!
//! ```text
//! support(X)      = |X| / n
//! confidence(A⇒B) = |A∪B| / |A|
//! lift(A⇒B)       = |A∪B| · n / (|A| · |B|)
//! leverage(A⇒B)   = (|A∪B| · n − |A| · |B|) / n²
//! conviction(A⇒B) = |A| · (n − |B|) / (n · (|A| − |A∪B|))     (∞ when |A∪B| = |A|)
//!
//! where |X| = number of transactions containing X
//! ```
//!
//! lift = 1 means independence, > 1 positive association, < 1 negative.

use serde::Serialize;

/// Fraction of `transaction_count` transactions
pub fn support(count: u64, transaction_count: u64) -> f64 {
    if transaction_count == 0 {
        return 0.0;
    }
    count as f64 / transaction_count as f64
}

/// Confidence of A⇒B, 0 for an antecedent that never occurs
pub fn confidence(count_ab: u64, count_a: u64) -> f64 {
    if count_a == 0 {
        return 0.0;
    }
    count_ab as f64 / count_a as f64
}

/// Lift of A⇒B (symmetric in A and B)
pub fn lift(count_ab: u64, count_a: u64, count_b: u64, transaction_count: u64) -> f64 {
    let numerator = count_ab as u128 * transaction_count as u128;
    let denominator = count_a as u128 * count_b as u128;
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}

/// Leverage of A⇒B, in [-0.25, 0.25]
pub fn leverage(count_ab: u64, count_a: u64, count_b: u64, transaction_count: u64) -> f64 {
    if transaction_count == 0 {
        return 0.0;
    }
    let n = transaction_count as i128;
    let numerator = count_ab as i128 * n - count_a as i128 * count_b as i128;
    numerator as f64 / (n * n) as f64
}

/// Conviction of A⇒B, `f64::INFINITY` when confidence is 1
///
/// Counts that cannot come from one table (|A∪B| > |A| or |B| > n) score NaN.
pub fn conviction(count_ab: u64, count_a: u64, count_b: u64, transaction_count: u64) -> f64 {
    if transaction_count == 0 {
        return 0.0;
    }
    let (Some(misses), Some(absent_b)) = (
        count_a.checked_sub(count_ab),
        transaction_count.checked_sub(count_b),
    ) else {
        return f64::NAN;
    };
    if misses == 0 {
        return f64::INFINITY;
    }
    let numerator = count_a as u128 * absent_b as u128;
    let denominator = transaction_count as u128 * misses as u128;
    numerator as f64 / denominator as f64
}

/// All scores of one directional rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleScores {
    pub antecedent_support: f64,
    pub consequent_support: f64,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub leverage: f64,
    pub conviction: f64,
}

impl RuleScores {
    /// Score A⇒B from |A∪B|, |A|, |B| and n
    pub fn from_counts(count_ab: u64, count_a: u64, count_b: u64, transaction_count: u64) -> Self {
        Self {
            antecedent_support: support(count_a, transaction_count),
            consequent_support: support(count_b, transaction_count),
            support: support(count_ab, transaction_count),
            confidence: confidence(count_ab, count_a),
            lift: lift(count_ab, count_a, count_b, transaction_count),
            leverage: leverage(count_ab, count_a, count_b, transaction_count),
            conviction: conviction(count_ab, count_a, count_b, transaction_count),
        }
    }
}
