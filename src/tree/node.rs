//! Implicit tree node representation
//!
//! Node = flat index + half-open leaf-local span [begin, end)
//! Children computed via midpoint: m = (begin + end) / 2
//!   Left child: [begin, m)
//!   Right child: [m, end)

use std::fmt;

use super::TreeLayout;

/// Tree node (implicit - an index and the leaves it covers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeSpan {
    /// Flat array index of the node
    pub index: usize,

    /// First covered leaf (inclusive)
    pub begin: usize,

    /// Last covered leaf (exclusive)
    pub end: usize,
}

impl NodeSpan {
    /// Root spanning every leaf slot of `layout`
    pub fn root(layout: &TreeLayout) -> Self {
        Self {
            index: 0,
            begin: 0,
            end: layout.leaf_count(),
        }
    }

    /// Check if leaf (unit span)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.end - self.begin == 1
    }

    /// Number of covered leaves
    #[inline]
    pub fn length(&self) -> usize {
        self.end - self.begin
    }

    /// Split point
    #[inline]
    pub fn midpoint(&self) -> usize {
        (self.begin + self.end) / 2
    }

    /// True when this span shares no leaf with `[begin, end)`
    #[inline]
    pub fn is_disjoint(&self, begin: usize, end: usize) -> bool {
        self.end <= begin || end <= self.begin
    }

    /// True when this span lies inside `[begin, end)`
    #[inline]
    pub fn is_within(&self, begin: usize, end: usize) -> bool {
        begin <= self.begin && self.end <= end
    }

    /// Get children via midpoint split
    pub fn children(&self) -> (NodeSpan, NodeSpan) {
        debug_assert!(!self.is_leaf(), "Leaf has no children");

        let mid = self.midpoint();
        let left = NodeSpan {
            index: TreeLayout::left_child(self.index),
            begin: self.begin,
            end: mid,
        };
        let right = NodeSpan {
            index: TreeLayout::right_child(self.index),
            begin: mid,
            end: self.end,
        };

        (left, right)
    }
}

impl fmt::Display for NodeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} [{}, {})", self.index, self.begin, self.end)
    }
}
