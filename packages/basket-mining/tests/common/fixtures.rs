//! Transaction store fixtures

use basket_mining::TransactionStore;

/// Four grocery baskets over {milk, bread, eggs}
///
/// | t | milk | bread | eggs |
/// |---|------|-------|------|
/// | 0 |  1   |   1   |  0   |
/// | 1 |  1   |   1   |  1   |
/// | 2 |  1   |   0   |  0   |
/// | 3 |  0   |   1   |  1   |
pub fn fixture_grocery() -> TransactionStore {
    TransactionStore::from_table(
        ["milk", "bread", "eggs"],
        &[
            vec![true, true, false],
            vec![true, true, true],
            vec![true, false, false],
            vec![false, true, true],
        ],
    )
    .unwrap()
}

/// Grocery table in the CLI's JSON input shape
pub fn fixture_grocery_json() -> serde_json::Value {
    serde_json::json!({
        "columns": ["milk", "bread", "eggs"],
        "rows": [
            [true, true, false],
            [1, 1, 1],
            [true, false, false],
            [0, 1, 1]
        ]
    })
}

/// Grocery table as a quantity export: index column, counts, blanks and
/// text where an item was not bought
pub fn fixture_grocery_quantities_json() -> serde_json::Value {
    serde_json::json!({
        "columns": ["Unnamed: 0", "milk", "bread", "eggs"],
        "rows": [
            [0, 2, 1, ""],
            [1, 1, "3", 12],
            [2, "1", null, 0],
            [3, "n/a", 2, 1.5]
        ]
    })
}

/// Ten supermarket baskets with a few strongly co-occurring pairs
pub fn fixture_supermarket() -> TransactionStore {
    TransactionStore::from_baskets(
        ["beer", "diapers", "chips", "salsa", "milk", "bread"],
        vec![
            vec!["beer", "diapers", "chips"],
            vec!["beer", "diapers"],
            vec!["beer", "diapers", "milk"],
            vec!["chips", "salsa"],
            vec!["chips", "salsa", "beer"],
            vec!["milk", "bread"],
            vec!["milk", "bread", "diapers"],
            vec!["milk", "bread", "chips", "salsa"],
            vec!["beer", "chips", "salsa", "diapers"],
            vec!["bread"],
        ],
    )
    .unwrap()
}

/// Store over `item_0..item_{width-1}` from a boolean matrix
pub fn store_from_matrix(width: usize, rows: &[Vec<bool>]) -> TransactionStore {
    let names: Vec<String> = (0..width).map(|i| format!("item_{i}")).collect();
    TransactionStore::from_table(names, rows).unwrap()
}

/// Deterministic pseudo-random store (xorshift), roughly `density` full
pub fn fixture_random_store(seed: u64, transactions: usize, width: usize, density: f64) -> TransactionStore {
    let mut state = seed.max(1);
    let mut rows = Vec::with_capacity(transactions);
    for _ in 0..transactions {
        let mut row = Vec::with_capacity(width);
        for _ in 0..width {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let draw = (state >> 11) as f64 / (1u64 << 53) as f64;
            row.push(draw < density);
        }
        rows.push(row);
    }
    store_from_matrix(width, &rows)
}
