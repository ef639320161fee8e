//! Collision resolution (pass 2)
//!
//! Merges provisional labels that collided during the scan into disjoint
//! regions using an array-indexed union-find (disjoint set) structure.
//! Unions always hang the larger root under the smaller one, so every root
//! is the minimum label of its set and doubles as the region's
//! representative.

use crate::scan::{Collision, FIRST_LABEL, Label, ProvisionalLabels};
use std::ops::Range;

/// Disjoint-set forest over `0..len` with path compression
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Label>,
}

impl UnionFind {
    /// Create `len` singleton sets
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len as Label).collect(),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// True if there are no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the set containing `x`
    ///
    /// Every node on the path is re-pointed directly at the root.
    ///
    /// # Panics
    ///
    /// Panics if `x >= len`.
    pub fn find(&mut self, x: Label) -> Label {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = x;
        while node != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }
        root
    }

    /// Merge the sets containing `a` and `b`
    ///
    /// Returns `false` if they were already the same set.
    pub fn union(&mut self, a: Label, b: Label) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
        self.parent[hi as usize] = lo;
        true
    }
}

/// Partition of the provisional labels into regions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// `representative[label]` for every label in `0..next_label`;
    /// 0 and 1 map to themselves
    representative: Vec<Label>,
    /// Region representatives in ascending order
    roots: Vec<Label>,
}

impl Partition {
    /// Provisional labels covered by this partition
    pub fn label_range(&self) -> Range<Label> {
        FIRST_LABEL..self.representative.len().max(FIRST_LABEL as usize) as Label
    }

    /// Representative (minimum label) of the region containing `label`
    ///
    /// Returns `None` for labels outside [`label_range`](Self::label_range).
    #[inline]
    pub fn representative(&self, label: Label) -> Option<Label> {
        if label < FIRST_LABEL {
            return None;
        }
        self.representative.get(label as usize).copied()
    }

    /// Region representatives in ascending order
    #[inline]
    pub fn representatives(&self) -> &[Label] {
        &self.roots
    }

    /// Number of regions
    #[inline]
    pub fn region_count(&self) -> usize {
        self.roots.len()
    }

    /// Dense `label -> representative` lookup table
    #[inline]
    pub fn table(&self) -> &[Label] {
        &self.representative
    }

    /// Dense `label -> region id` table with ids `1..=region_count`
    /// assigned in ascending representative order; background stays 0.
    pub fn region_ids(&self) -> Vec<u32> {
        let mut ids = vec![0u32; self.representative.len()];
        let mut next = 0u32;
        for label in self.label_range() {
            let rep = self.representative[label as usize];
            if rep == label {
                next += 1;
                ids[label as usize] = next;
            } else {
                ids[label as usize] = ids[rep as usize];
            }
        }
        ids
    }
}

/// Merge labels over `FIRST_LABEL..next_label` along `collisions`
///
/// The grouping is exactly the transitive closure of the collision pairs:
/// two labels share a representative iff a chain of collisions joins them.
pub fn resolve<I>(next_label: Label, collisions: I) -> Partition
where
    I: IntoIterator<Item = Collision>,
{
    let len = (next_label as usize).max(FIRST_LABEL as usize);
    let mut uf = UnionFind::new(len);

    let mut merges = 0usize;
    for collision in collisions {
        let (a, b) = collision.labels();
        if uf.union(a, b) {
            merges += 1;
        }
    }

    let mut representative: Vec<Label> = (0..len as Label).collect();
    let mut roots = Vec::new();
    for label in FIRST_LABEL..len as Label {
        let rep = uf.find(label);
        representative[label as usize] = rep;
        if rep == label {
            roots.push(label);
        }
    }

    log::debug!(
        "collision resolution: {} labels, {} merges, {} regions",
        len - FIRST_LABEL as usize,
        merges,
        roots.len()
    );

    Partition {
        representative,
        roots,
    }
}

/// Resolve the collisions recorded by a label scan
pub fn resolve_collisions(provisional: &ProvisionalLabels) -> Partition {
    resolve(
        provisional.next_label(),
        provisional.collisions().iter().copied(),
    )
}
