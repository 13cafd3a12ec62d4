//! Upward traversal used by path-only refresh
//!
//! Walking from a slot to the root touches `depth + 1` nodes; every node
//! off that path keeps its value across an update.

use super::TreeLayout;

/// Iterator over the strict ancestors of a slot, nearest first
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<usize>,
}

impl Ancestors {
    /// Ancestors of `index`, excluding `index` itself
    pub fn of(index: usize) -> Self {
        Self {
            next: TreeLayout::parent(index),
        }
    }
}

impl Iterator for Ancestors {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        self.next = TreeLayout::parent(current);
        Some(current)
    }
}
