//! Transaction Store
//!
//! Immutable boolean matrix of transactions × items, held in both
//! orientations:
//!
//! ```text
//!              milk bread eggs        rows    : one BitSet per transaction (width = items)
//!   t0           1    1    0          columns : one BitSet per item (width = transactions)
//!   t1           1    1    1
//!   t2           1    0    0          count({milk, bread}) = popcount(col[milk] & col[bread]) = 2
//!   t3           0    1    1
//! ```
//!
//! Rows feed the FP-tree builder; columns give exact support counts for any
//! itemset in O(|X| · n/64).

use crate::errors::SchemaError;
use crate::shared::models::{ItemId, Itemset};
use crate::shared::utils::bitset::BitSet;
use rustc_hash::FxHashMap;

/// Immutable transaction table with a stable item ↔ column mapping
#[derive(Debug, Clone)]
pub struct TransactionStore {
    items: Vec<String>,
    index: FxHashMap<String, ItemId>,
    rows: Vec<BitSet>,
    columns: Vec<BitSet>,
}

impl TransactionStore {
    /// Build from named columns and rectangular boolean rows
    ///
    /// # Errors
    /// - `NoColumns` when `columns` is empty
    /// - `DuplicateColumn` when a name repeats
    /// - `RaggedRow` when a row width differs from the header
    pub fn from_table<S: Into<String>>(
        columns: impl IntoIterator<Item = S>,
        rows: &[Vec<bool>],
    ) -> Result<Self, SchemaError> {
        let mut store = Self::with_items(columns)?;
        let width = store.items.len();

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(SchemaError::RaggedRow {
                    row: row_index,
                    expected: width,
                    found: row.len(),
                });
            }
            let present = row
                .iter()
                .enumerate()
                .filter(|(_, cell)| **cell)
                .map(|(column, _)| column);
            store.rows.push(BitSet::from_positions(width, present));
        }

        store.build_columns();
        Ok(store)
    }

    /// Build from JSON rows (arrays of cells)
    ///
    /// Accepts `true`/`false` and the numbers `0`/`1`. Anything else is a
    /// `NonBooleanCell`; coercing blanks or other numerics is the caller's
    /// job.
    pub fn from_json_rows<S: Into<String>>(
        columns: impl IntoIterator<Item = S>,
        rows: &[serde_json::Value],
    ) -> Result<Self, SchemaError> {
        let names: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut table = Vec::with_capacity(rows.len());

        for (row_index, row) in rows.iter().enumerate() {
            let cells = match row.as_array() {
                Some(cells) => cells,
                None => {
                    return Err(SchemaError::NonBooleanCell {
                        row: row_index,
                        column: String::from("*"),
                        value: row.to_string(),
                    })
                }
            };
            if cells.len() != names.len() {
                return Err(SchemaError::RaggedRow {
                    row: row_index,
                    expected: names.len(),
                    found: cells.len(),
                });
            }

            let mut parsed = Vec::with_capacity(cells.len());
            for (column, cell) in cells.iter().enumerate() {
                let value = json_cell_to_bool(cell).ok_or_else(|| SchemaError::NonBooleanCell {
                    row: row_index,
                    column: names[column].clone(),
                    value: cell.to_string(),
                })?;
                parsed.push(value);
            }
            table.push(parsed);
        }

        Self::from_table(names, &table)
    }

    /// Build from baskets of item names over a fixed universe
    pub fn from_baskets<S, B, N>(items: impl IntoIterator<Item = S>, baskets: B) -> Result<Self, SchemaError>
    where
        S: Into<String>,
        B: IntoIterator,
        B::Item: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut store = Self::with_items(items)?;
        let width = store.items.len();

        for basket in baskets {
            let mut row = BitSet::with_len(width);
            for name in basket {
                let name = name.as_ref();
                let id = store.item_id(name).ok_or_else(|| SchemaError::UnknownItem {
                    name: name.to_string(),
                })?;
                row.insert(id.index());
            }
            store.rows.push(row);
        }

        store.build_columns();
        Ok(store)
    }

    fn with_items<S: Into<String>>(items: impl IntoIterator<Item = S>) -> Result<Self, SchemaError> {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return Err(SchemaError::NoColumns);
        }

        let mut index = FxHashMap::default();
        for (i, name) in items.iter().enumerate() {
            if index.insert(name.clone(), ItemId::new(i as u32)).is_some() {
                return Err(SchemaError::DuplicateColumn { name: name.clone() });
            }
        }

        Ok(Self {
            items,
            index,
            rows: Vec::new(),
            columns: Vec::new(),
        })
    }

    fn build_columns(&mut self) {
        let n = self.rows.len();
        let mut columns = vec![BitSet::with_len(n); self.items.len()];
        for (t, row) in self.rows.iter().enumerate() {
            for item in row.iter_ones() {
                columns[item].insert(t);
            }
        }
        self.columns = columns;
    }

    pub fn transaction_count(&self) -> u64 {
        self.rows.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Item names in column order
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Item ids in column order
    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> {
        (0..self.items.len() as u32).map(ItemId::new)
    }

    pub fn item_id(&self, name: &str) -> Option<ItemId> {
        self.index.get(name).copied()
    }

    pub fn item_name(&self, item: ItemId) -> Option<&str> {
        self.items.get(item.index()).map(String::as_str)
    }

    /// Itemset from names; `None` if any name is unknown
    pub fn itemset<N: AsRef<str>>(&self, names: impl IntoIterator<Item = N>) -> Option<Itemset> {
        names
            .into_iter()
            .map(|name| self.item_id(name.as_ref()))
            .collect::<Option<Vec<_>>>()
            .map(Itemset::new)
    }

    /// Transactions containing `item`
    pub fn item_support_count(&self, item: ItemId) -> u64 {
        self.columns
            .get(item.index())
            .map_or(0, BitSet::count_ones)
    }

    /// Exact number of transactions containing every item of `itemset`
    pub fn count_containing(&self, itemset: &Itemset) -> u64 {
        let mut items = itemset.iter();
        let first = match items.next() {
            Some(item) => item,
            None => return self.transaction_count(),
        };
        let second = match items.next() {
            Some(item) => item,
            None => return self.item_support_count(first),
        };

        let mut acc = self.columns[first.index()].clone();
        acc.intersect_with(&self.columns[second.index()]);
        for item in items {
            acc.intersect_with(&self.columns[item.index()]);
        }
        acc.count_ones()
    }

    /// Transactions as item bitsets, in input order
    pub fn transactions(&self) -> impl ExactSizeIterator<Item = &BitSet> {
        self.rows.iter()
    }

    /// Member names sorted alphabetically
    pub fn labels(&self, itemset: &Itemset) -> Vec<&str> {
        let mut labels: Vec<&str> = itemset
            .iter()
            .filter_map(|item| self.item_name(item))
            .collect();
        labels.sort_unstable();
        labels
    }
}

fn json_cell_to_bool(cell: &serde_json::Value) -> Option<bool> {
    match cell {
        serde_json::Value::Bool(b) => Some(*b),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(v) if v == 0.0 => Some(false),
            Some(v) if v == 1.0 => Some(true),
            _ => None,
        },
        _ => None,
    }
}
