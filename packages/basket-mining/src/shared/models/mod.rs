//! Shared domain models

pub mod frequent_itemsets;
pub mod item;
pub mod itemset;

pub use frequent_itemsets::{FrequentItemset, FrequentItemsets, SUPPORT_EPSILON};
pub use item::ItemId;
pub use itemset::Itemset;
