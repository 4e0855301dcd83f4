//! Index combinations
//!
//! Subset enumeration for rule splits and single-path FP-trees. Works on
//! positions rather than bitmasks so itemset size is never capped by a
//! machine word.

/// Lexicographic k-combinations of `0..n`
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        let k = self.indices.len();
        // Rightmost position that can still advance
        let mut i = k;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - k + i {
                self.indices[i] += 1;
                for j in i + 1..k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}

/// All non-empty proper subsets of `0..n` as ascending position lists,
/// smallest subsets first
pub fn proper_subsets(n: usize) -> impl Iterator<Item = Vec<usize>> {
    (1..n).flat_map(move |k| Combinations::new(n, k))
}
