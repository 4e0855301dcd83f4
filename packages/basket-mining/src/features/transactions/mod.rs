//! Transaction Store
//!
//! Validated, read-only input to both miners. Coercion of raw tabular data
//! into booleans happens before construction (`RawTable::coerce`).

pub mod raw_table;
pub mod store;

pub use raw_table::{RawTable, INDEX_COLUMN};
pub use store::TransactionStore;
