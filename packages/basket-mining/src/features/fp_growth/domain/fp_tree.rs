//! Frequent-pattern tree
//!
//! Arena-backed prefix tree. Nodes own nothing: parent/children/next are
//! indices into `nodes`, and the header table is a per-item index into the
//! node chains.
//!
//! ```text
//!   header                 tree (order: milk, bread, eggs)
//!   ┌───────┬───┐          root
//!   │ milk  │ 3 │ ──────▶  ├─ milk:3 ── bread:2 ── eggs:1
//!   │ bread │ 3 │ ──┐      │
//!   │ eggs  │ 2 │   └───▶  └─ bread:1 ── eggs:1
//!   └───────┴───┘
//! ```

use crate::shared::models::ItemId;
use rustc_hash::FxHashMap;

/// Index of a node in the arena
pub type NodeId = usize;

const ROOT: NodeId = 0;

/// A weighted prefix path: items (any order) and the number of transactions
/// that share it
pub type WeightedPath = (Vec<ItemId>, u64);

#[derive(Debug, Clone)]
struct FpNode {
    /// Header position of the item; `usize::MAX` for the root
    rank: usize,
    count: u64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Next node with the same item
    next: Option<NodeId>,
}

impl FpNode {
    fn root() -> Self {
        Self {
            rank: usize::MAX,
            count: 0,
            parent: None,
            children: Vec::new(),
            next: None,
        }
    }
}

/// One header table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    pub item: ItemId,
    /// Total count of the item in this tree
    pub count: u64,
    head: Option<NodeId>,
}

/// Prefix tree over the frequent items of a (conditional) database
#[derive(Debug, Clone)]
pub struct FpTree {
    nodes: Vec<FpNode>,
    header: Vec<HeaderEntry>,
}

impl FpTree {
    /// Build a tree from weighted paths, keeping only items whose total
    /// weight reaches `min_count`
    ///
    /// Items are ordered by total count descending, ties by item id. Every
    /// path is inserted in that order so shared prefixes merge.
    pub fn build(paths: &[WeightedPath], min_count: u64) -> Self {
        let mut totals: FxHashMap<ItemId, u64> = FxHashMap::default();
        for (items, weight) in paths {
            for &item in items {
                *totals.entry(item).or_insert(0) += weight;
            }
        }

        let mut frequent: Vec<(ItemId, u64)> = totals
            .into_iter()
            .filter(|&(_, count)| count >= min_count)
            .collect();
        frequent.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let rank_of: FxHashMap<ItemId, usize> = frequent
            .iter()
            .enumerate()
            .map(|(rank, &(item, _))| (item, rank))
            .collect();

        let mut tree = Self {
            nodes: vec![FpNode::root()],
            header: frequent
                .into_iter()
                .map(|(item, count)| HeaderEntry {
                    item,
                    count,
                    head: None,
                })
                .collect(),
        };

        let mut ranks = Vec::new();
        for (items, weight) in paths {
            ranks.clear();
            ranks.extend(items.iter().filter_map(|item| rank_of.get(item).copied()));
            if ranks.is_empty() {
                continue;
            }
            ranks.sort_unstable();
            tree.insert(&ranks, *weight);
        }

        tree
    }

    fn insert(&mut self, ranks: &[usize], weight: u64) {
        let mut current = ROOT;
        for &rank in ranks {
            let existing = self.nodes[current]
                .children
                .iter()
                .copied()
                .find(|&child| self.nodes[child].rank == rank);

            current = match existing {
                Some(child) => {
                    self.nodes[child].count += weight;
                    child
                }
                None => {
                    let id = self.nodes.len();
                    let entry = &mut self.header[rank];
                    self.nodes.push(FpNode {
                        rank,
                        count: weight,
                        parent: Some(current),
                        children: Vec::new(),
                        next: entry.head,
                    });
                    entry.head = Some(id);
                    self.nodes[current].children.push(id);
                    id
                }
            };
        }
    }

    /// Header rows, most frequent first
    pub fn header(&self) -> &[HeaderEntry] {
        &self.header
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }

    /// Number of item nodes (root excluded)
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Nodes carrying the item at header position `rank`
    fn chain(&self, rank: usize) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.header[rank].head, move |&id| self.nodes[id].next)
    }

    /// Prefix paths leading to every node of the item at `rank`, weighted by
    /// that node's count
    pub fn conditional_pattern_base(&self, rank: usize) -> Vec<WeightedPath> {
        self.chain(rank)
            .filter_map(|id| {
                let mut prefix = Vec::new();
                let mut cursor = self.nodes[id].parent;
                while let Some(parent) = cursor {
                    if parent == ROOT {
                        break;
                    }
                    prefix.push(self.header[self.nodes[parent].rank].item);
                    cursor = self.nodes[parent].parent;
                }
                if prefix.is_empty() {
                    None
                } else {
                    Some((prefix, self.nodes[id].count))
                }
            })
            .collect()
    }

    /// Tree built from the conditional pattern base of the item at `rank`
    pub fn conditional_tree(&self, rank: usize, min_count: u64) -> FpTree {
        FpTree::build(&self.conditional_pattern_base(rank), min_count)
    }

    /// Items and counts along the tree when it is a single chain
    ///
    /// Counts are non-increasing from root to leaf.
    pub fn single_path(&self) -> Option<Vec<(ItemId, u64)>> {
        let mut path = Vec::new();
        let mut current = ROOT;
        loop {
            match self.nodes[current].children.as_slice() {
                [] => return Some(path),
                [only] => {
                    let node = &self.nodes[*only];
                    path.push((self.header[node.rank].item, node.count));
                    current = *only;
                }
                _ => return None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<ItemId> {
        raw.iter().copied().map(ItemId::new).collect()
    }

    /// milk=0, bread=1, eggs=2
    fn grocery_paths() -> Vec<WeightedPath> {
        vec![
            (ids(&[0, 1]), 1),
            (ids(&[0, 1, 2]), 1),
            (ids(&[0]), 1),
            (ids(&[1, 2]), 1),
        ]
    }

    #[test]
    fn test_header_order_and_counts() {
        let tree = FpTree::build(&grocery_paths(), 1);
        let header: Vec<_> = tree.header().iter().map(|e| (e.item.value(), e.count)).collect();
        // milk and bread tie at 3, broken by id
        assert_eq!(header, vec![(0, 3), (1, 3), (2, 2)]);
    }

    #[test]
    fn test_shared_prefixes_merge() {
        let tree = FpTree::build(&grocery_paths(), 1);
        // milk:3 ─ bread:2 ─ eggs:1 / bread:1 ─ eggs:1
        assert_eq!(tree.node_count(), 5);
        assert!(tree.single_path().is_none());
    }

    #[test]
    fn test_infrequent_items_dropped() {
        let tree = FpTree::build(&grocery_paths(), 3);
        assert_eq!(tree.header().len(), 2);
        assert!(tree.header().iter().all(|e| e.item.value() != 2));
    }

    #[test]
    fn test_conditional_pattern_base() {
        let tree = FpTree::build(&grocery_paths(), 1);
        let mut base = tree.conditional_pattern_base(2);
        for (items, _) in base.iter_mut() {
            items.sort();
        }
        base.sort();
        assert_eq!(base, vec![(ids(&[0, 1]), 1), (ids(&[1]), 1)]);

        // milk sits directly under the root
        assert!(tree.conditional_pattern_base(0).is_empty());
    }

    #[test]
    fn test_conditional_tree_of_eggs() {
        let tree = FpTree::build(&grocery_paths(), 2);
        let conditional = tree.conditional_tree(2, 2);
        assert_eq!(
            conditional.single_path(),
            Some(vec![(ItemId::new(1), 2)])
        );
    }

    #[test]
    fn test_single_path() {
        let paths = vec![(ids(&[3, 1, 2]), 2), (ids(&[3, 1]), 1)];
        let tree = FpTree::build(&paths, 1);
        assert_eq!(
            tree.single_path(),
            Some(vec![(ItemId::new(1), 3), (ItemId::new(3), 3), (ItemId::new(2), 2)])
        );
    }

    #[test]
    fn test_empty_tree() {
        let tree = FpTree::build(&[], 1);
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.single_path(), Some(Vec::new()));
    }
}
