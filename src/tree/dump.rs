//! Human-readable dumps of the slot array
//!
//! Diagnostic output only; not a stable serialization format.

use std::fmt;

use super::TreeLayout;

/// `Display` adaptor returned by [`SegmentTree::dump`](super::SegmentTree::dump)
///
/// Prints `offset=<n>`, then one `<index> <value>` line per slot (`-` for
/// an absent slot), then a blank line.
#[derive(Debug)]
pub struct TreeDump<'a, T> {
    pub(super) layout: &'a TreeLayout,
    pub(super) nodes: &'a [Option<T>],
}

impl<T: fmt::Debug> fmt::Display for TreeDump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "offset={}", self.layout.offset())?;
        for (index, slot) in self.nodes.iter().enumerate() {
            match slot {
                Some(value) => writeln!(f, "{} {:?}", index, value)?,
                None => writeln!(f, "{} -", index)?,
            }
        }
        writeln!(f)
    }
}

/// Serializable copy of the tree state for external visualisation
#[cfg(feature = "visualize")]
#[derive(Debug, Clone, serde::Serialize)]
pub struct TreeSnapshot<T> {
    /// Levels below the root
    pub depth: u32,
    /// Flat index of the first leaf
    pub offset: usize,
    /// Total slot count
    pub size: usize,
    /// Every slot in index order
    pub nodes: Vec<Option<T>>,
}

#[cfg(feature = "visualize")]
impl<T: Clone> TreeSnapshot<T> {
    pub(super) fn capture(layout: &TreeLayout, nodes: &[Option<T>]) -> Self {
        Self {
            depth: layout.depth(),
            offset: layout.offset(),
            size: layout.size(),
            nodes: nodes.to_vec(),
        }
    }
}
