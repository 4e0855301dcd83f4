//! Raw tabular input
//!
//! `{ "columns": [...], "rows": [[...], ...] }` as read from disk. Strict
//! loading hands the cells to `TransactionStore::from_json_rows` untouched.
//! `coerce` first applies the quantity-table conventions: the exported
//! index column is dropped, blank or non-numeric cells count as 0 and any
//! non-zero quantity means the item is present.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::store::TransactionStore;
use crate::errors::SchemaError;

/// Index column written by dataframe exports
pub const INDEX_COLUMN: &str = "Unnamed: 0";

/// Column names plus one JSON array per transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Value>,
}

impl RawTable {
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Drop the index column and turn every cell into a boolean
    ///
    /// # Errors
    /// Row shape is checked against the header as read: a non-array row is
    /// a `NonBooleanCell`, a width mismatch a `RaggedRow`.
    pub fn coerce(self) -> Result<Self, SchemaError> {
        let width = self.columns.len();
        let keep: Vec<usize> = (0..width)
            .filter(|&i| self.columns[i] != INDEX_COLUMN)
            .collect();

        let mut rows = Vec::with_capacity(self.rows.len());
        for (row_index, row) in self.rows.iter().enumerate() {
            let cells = row.as_array().ok_or_else(|| SchemaError::NonBooleanCell {
                row: row_index,
                column: String::from("*"),
                value: row.to_string(),
            })?;
            if cells.len() != width {
                return Err(SchemaError::RaggedRow {
                    row: row_index,
                    expected: width,
                    found: cells.len(),
                });
            }
            rows.push(Value::Array(
                keep.iter().map(|&i| Value::Bool(coerce_cell(&cells[i]))).collect(),
            ));
        }

        let columns = keep.iter().map(|&i| self.columns[i].clone()).collect();
        Ok(Self { columns, rows })
    }

    /// Validate into a store (no coercion)
    pub fn into_store(self) -> Result<TransactionStore, SchemaError> {
        TransactionStore::from_json_rows(self.columns, &self.rows)
    }
}

/// Non-zero quantity → present; blanks, text and null → absent
fn coerce_cell(cell: &Value) -> bool {
    let is_nonzero = |v: f64| v != 0.0 && !v.is_nan();
    match cell {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, is_nonzero),
        Value::String(s) => s.trim().parse::<f64>().map_or(false, is_nonzero),
        _ => false,
    }
}
