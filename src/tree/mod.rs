//! Static segment tree over a flat array
//!
//! The tree is a complete binary tree stored implicitly: internal nodes
//! occupy `[0, offset)`, leaves occupy `[offset, size)`. Leaves past the
//! input length are absent and act as an identity for the merge.
//!
//! Invariant after every mutation: for each internal node `k`,
//! `nodes[k] = merge(nodes[2k+1], nodes[2k+2])`, except that an absent right
//! child copies the left child without calling `merge`.

mod dump;
mod layout;
mod node;
mod traversal;

pub use dump::TreeDump;
#[cfg(feature = "visualize")]
pub use dump::TreeSnapshot;
pub use layout::TreeLayout;
pub use node::NodeSpan;
pub use traversal::Ancestors;

use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

/// Errors reported by [`SegmentTree`] operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentTreeError {
    /// Flat index outside `[0, size)`
    #[error("index {index} out of range for tree of {size} slots")]
    IndexOutOfRange {
        /// Requested flat index
        index: usize,
        /// Total slot count
        size: usize,
    },

    /// Query window is inverted or extends past the leaf level
    #[error("invalid range [{begin}, {end}) for {leaf_count} leaves")]
    InvalidRange {
        /// Requested start (inclusive)
        begin: usize,
        /// Requested end (exclusive)
        end: usize,
        /// Leaf slots available
        leaf_count: usize,
    },
}

/// How ancestors are recomputed after a write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshStrategy {
    /// Recompute every internal node, `O(size)` per update
    #[default]
    FullRebuild,

    /// Recompute only the written slot's ancestors, `O(depth)` per update
    AncestorPath,
}

/// Tree configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeConfig {
    /// Refresh applied after [`SegmentTree::update`]
    pub refresh: RefreshStrategy,
}

impl TreeConfig {
    /// Set the refresh strategy.
    pub fn with_refresh(mut self, refresh: RefreshStrategy) -> Self {
        self.refresh = refresh;
        self
    }
}

/// Range-aggregation tree with a caller-supplied associative merge
///
/// ```
/// use segtree::SegmentTree;
///
/// let mut tree = SegmentTree::build(vec![1, 2, 3, 4, 5], |a: &i64, b: &i64| a + b);
/// assert_eq!(tree.top(), Some(&15));
/// assert_eq!(tree.calc(1, 4), Some(9));
///
/// tree.update(tree.offset() + 2, 10).unwrap();
/// assert_eq!(tree.top(), Some(&22));
/// ```
pub struct SegmentTree<T, F> {
    layout: TreeLayout,
    nodes: Vec<Option<T>>,
    merge: F,
    config: TreeConfig,
}

impl<T, F> SegmentTree<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Build a tree over `data` with the default configuration.
    pub fn build<I>(data: I, merge: F) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_config(data, merge, TreeConfig::default())
    }

    /// Build a tree over `data`.
    pub fn with_config<I>(data: I, merge: F, config: TreeConfig) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let data: Vec<T> = data.into_iter().collect();
        let layout = TreeLayout::for_len(data.len());

        let mut nodes: Vec<Option<T>> = Vec::with_capacity(layout.size());
        nodes.resize_with(layout.offset(), || None);
        nodes.extend(data.into_iter().map(Some));
        nodes.resize_with(layout.size(), || None);

        debug!(
            len = layout.len(),
            depth = layout.depth(),
            offset = layout.offset(),
            size = layout.size(),
            "building segment tree"
        );

        let mut tree = Self {
            layout,
            nodes,
            merge,
            config,
        };
        tree.fix();
        tree
    }

    /// Merge of all present leaves in leaf-local `[begin, end)`.
    ///
    /// Empty, inverted and out-of-range windows yield `None`; the window is
    /// intersected with the leaf level.
    pub fn calc(&self, begin: usize, end: usize) -> Option<T> {
        self.calc_span(begin, end, NodeSpan::root(&self.layout))
    }

    /// Like [`calc`](Self::calc), but rejects `begin > end` and
    /// `end > leaf_count`.
    pub fn checked_calc(&self, begin: usize, end: usize) -> Result<Option<T>, SegmentTreeError> {
        let leaf_count = self.layout.leaf_count();
        if begin > end || end > leaf_count {
            return Err(SegmentTreeError::InvalidRange {
                begin,
                end,
                leaf_count,
            });
        }
        Ok(self.calc(begin, end))
    }

    fn calc_span(&self, begin: usize, end: usize, span: NodeSpan) -> Option<T> {
        if span.is_disjoint(begin, end) {
            return None;
        }
        if span.is_within(begin, end) {
            return self.nodes[span.index].clone();
        }

        let (left, right) = span.children();
        let lhs = self.calc_span(begin, end, left);
        let rhs = self.calc_span(begin, end, right);
        match (lhs, rhs) {
            (Some(l), Some(r)) => Some((self.merge)(&l, &r)),
            (l, None) => l,
            (None, r) => r,
        }
    }

    /// Overwrite slot `index` and restore the aggregation invariant.
    ///
    /// `index` is a flat index; leaves live at `offset()..size()`. Returns the
    /// tree for chaining.
    pub fn update(&mut self, index: usize, value: T) -> Result<&mut Self, SegmentTreeError> {
        self.check_index(index)?;
        trace!(index, refresh = ?self.config.refresh, "updating slot");

        self.nodes[index] = Some(value);
        match self.config.refresh {
            RefreshStrategy::FullRebuild => self.fix(),
            RefreshStrategy::AncestorPath => self.fix_path(index),
        }
        Ok(self)
    }

    /// [`update`](Self::update) addressed by leaf-local position.
    pub fn update_leaf(&mut self, local: usize, value: T) -> Result<&mut Self, SegmentTreeError> {
        let index = self
            .layout
            .checked_leaf_index(local)
            .ok_or(SegmentTreeError::IndexOutOfRange {
                index: self.layout.offset().saturating_add(local),
                size: self.layout.size(),
            })?;
        self.update(index, value)
    }

    // Children are finalised before their parent: indices descend.
    fn fix(&mut self) {
        trace!(internal = self.layout.offset(), "full refresh");
        for k in (0..self.layout.offset()).rev() {
            self.refresh_node(k);
        }
    }

    fn fix_path(&mut self, index: usize) {
        // A written internal slot is itself re-derived, as a full rebuild would.
        if !self.layout.is_leaf(index) {
            self.refresh_node(index);
        }
        for k in Ancestors::of(index) {
            self.refresh_node(k);
        }
    }

    fn refresh_node(&mut self, k: usize) {
        let left = &self.nodes[TreeLayout::left_child(k)];
        let right = &self.nodes[TreeLayout::right_child(k)];
        let value = match (left, right) {
            (Some(l), Some(r)) => Some((self.merge)(l, r)),
            (left, None) => left.clone(),
            (None, right) => right.clone(),
        };
        self.nodes[k] = value;
    }
}

impl<T, F> SegmentTree<T, F> {
    /// Slot at flat `index`, `None` when absent.
    pub fn get(&self, index: usize) -> Result<Option<&T>, SegmentTreeError> {
        self.check_index(index)?;
        Ok(self.nodes[index].as_ref())
    }

    /// Aggregate of the whole input, `None` for an empty tree.
    pub fn top(&self) -> Option<&T> {
        self.nodes[0].as_ref()
    }

    /// Number of values supplied at construction.
    pub fn len(&self) -> usize {
        self.layout.len()
    }

    /// True when built from an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Total slot count.
    pub fn size(&self) -> usize {
        self.layout.size()
    }

    /// Flat index of the first leaf.
    pub fn offset(&self) -> usize {
        self.layout.offset()
    }

    /// Levels below the root.
    pub fn depth(&self) -> u32 {
        self.layout.depth()
    }

    /// Index arithmetic for this tree.
    pub fn layout(&self) -> &TreeLayout {
        &self.layout
    }

    /// Active configuration.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// All slots in flat index order.
    pub fn nodes(&self) -> &[Option<T>] {
        &self.nodes
    }

    /// Leaf slots in leaf-local order, phantom leaves included.
    pub fn leaves(&self) -> impl Iterator<Item = Option<&T>> + '_ {
        self.nodes[self.layout.offset()..]
            .iter()
            .map(Option::as_ref)
    }

    /// Diagnostic dump of every slot.
    pub fn dump(&self) -> TreeDump<'_, T> {
        TreeDump {
            layout: &self.layout,
            nodes: &self.nodes,
        }
    }

    /// Write [`dump`](Self::dump) to stdout.
    pub fn print(&self)
    where
        T: fmt::Debug,
    {
        print!("{}", self.dump());
    }

    /// Serializable copy of the current slots.
    #[cfg(feature = "visualize")]
    pub fn snapshot(&self) -> TreeSnapshot<T>
    where
        T: Clone,
    {
        TreeSnapshot::capture(&self.layout, &self.nodes)
    }

    fn check_index(&self, index: usize) -> Result<(), SegmentTreeError> {
        if self.layout.contains(index) {
            Ok(())
        } else {
            Err(SegmentTreeError::IndexOutOfRange {
                index,
                size: self.layout.size(),
            })
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for SegmentTree<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTree")
            .field("layout", &self.layout)
            .field("config", &self.config)
            .field("nodes", &self.nodes)
            .finish_non_exhaustive()
    }
}
