//! Disjoint-set (union-find) with path compression and union by rank.
//!
//! Maintains a partition of `{0, .., n - 1}` that only ever coarsens:
//! there is no split or removal. `find` compresses iteratively in two
//! passes (locate the root, then relink the walked path), avoiding
//! recursion-depth concerns on large inputs while keeping the amortised
//! inverse-Ackermann bound.
//!
//! The MST verifier drives this structure directly: a `union` that
//! reports the endpoints already joined is its cycle-detection signal.

use thiserror::Error;

/// Errors raised by [`DisjointSet`] operations.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum DisjointSetError {
    /// A node id fell outside `[0, len)`. Indices are never clamped.
    #[error("node {node} is out of bounds for a disjoint set of {len} nodes")]
    OutOfBounds {
        /// The offending node id.
        node: usize,
        /// The number of nodes in the partition.
        len: usize,
    },
}

/// A partition of `{0, .., n - 1}` into disjoint sets.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl DisjointSet {
    /// Creates `n` singleton sets; `find(i) == i` for every `i`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Returns the number of nodes in the partition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when the partition holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of `node`'s set, compressing the
    /// walked path so later lookups along it are O(1).
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::OutOfBounds`] when `node >= len`.
    pub fn find(&mut self, node: usize) -> Result<usize, DisjointSetError> {
        self.check_bounds(node)?;

        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: relink everything on the walked path to the root.
        let mut current = node;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// Returns `Ok(false)` when both nodes already share a
    /// representative and no merge occurred. The lower-rank root
    /// attaches under the higher-rank one; on equal rank, `right`'s
    /// root attaches under `left`'s root and `left`'s root gains a
    /// rank. Rank approximates an upper bound on tree height, so this
    /// policy keeps uncompressed finds at O(log n).
    ///
    /// # Errors
    ///
    /// Returns [`DisjointSetError::OutOfBounds`] when either node id is
    /// out of range.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool, DisjointSetError> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;

        if left_root == right_root {
            return Ok(false);
        }

        if self.rank[left_root] < self.rank[right_root] {
            self.parent[left_root] = right_root;
        } else if self.rank[left_root] > self.rank[right_root] {
            self.parent[right_root] = left_root;
        } else {
            self.parent[right_root] = left_root;
            self.rank[left_root] += 1;
        }

        Ok(true)
    }

    fn check_bounds(&self, node: usize) -> Result<(), DisjointSetError> {
        if node >= self.parent.len() {
            return Err(DisjointSetError::OutOfBounds {
                node,
                len: self.parent.len(),
            });
        }
        Ok(())
    }
}
