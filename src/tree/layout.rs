//! Flat-array layout of the implicit binary tree
//!
//! Slots `[0, offset)` are internal nodes, `[offset, size)` are leaves.
//! Node `k` has children `2k + 1` and `2k + 2`.

use std::fmt;

/// Index arithmetic for a tree built over `len` input values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreeLayout {
    depth: u32,
    offset: usize,
    size: usize,
    len: usize,
}

impl TreeLayout {
    /// Smallest layout whose leaf level holds `len` values.
    ///
    /// `depth` is the least `d` with `2^d >= len` (zero for `len <= 1`).
    pub fn for_len(len: usize) -> Self {
        let depth = len.next_power_of_two().trailing_zeros();
        let leaves = 1usize << depth;
        Self {
            depth,
            offset: leaves - 1,
            size: 2 * leaves - 1,
            len,
        }
    }

    /// Number of levels below the root.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Flat index of the first leaf.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Total slot count.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of values supplied at construction.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when built from an empty sequence.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Leaf slots, including phantom leaves past `len`.
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.size - self.offset
    }

    /// Flat index of the leaf at leaf-local position `local`.
    #[inline]
    pub fn leaf_index(&self, local: usize) -> usize {
        self.offset + local
    }

    /// Flat index of leaf `local`, `None` past the leaf level.
    #[inline]
    pub fn checked_leaf_index(&self, local: usize) -> Option<usize> {
        (local < self.leaf_count()).then(|| self.offset + local)
    }

    /// True when `index` is a slot of this layout.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.size
    }

    /// True for leaf slots.
    #[inline]
    pub fn is_leaf(&self, index: usize) -> bool {
        index >= self.offset && index < self.size
    }

    /// Left child of `index`.
    #[inline]
    pub fn left_child(index: usize) -> usize {
        2 * index + 1
    }

    /// Right child of `index`.
    #[inline]
    pub fn right_child(index: usize) -> usize {
        2 * index + 2
    }

    /// Parent of `index`, `None` for the root.
    #[inline]
    pub fn parent(index: usize) -> Option<usize> {
        index.checked_sub(1).map(|i| i / 2)
    }
}

impl fmt::Display for TreeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "depth={} offset={} size={} len={}",
            self.depth, self.offset, self.size, self.len
        )
    }
}
