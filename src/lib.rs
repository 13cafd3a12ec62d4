//! # Static Segment Tree
//!
//! A complete binary tree stored in a flat array that answers range
//! aggregation queries under a caller-supplied associative merge.
//!
//! ## Layout
//!
//! 1. **Depth**: least `d` with `2^d >= n`
//! 2. **Offset**: `2^d - 1`, the first leaf slot
//! 3. **Size**: `2^(d+1) - 1` slots; node `k` has children `2k+1`, `2k+2`
//! 4. **Phantom leaves**: slots past `n` are absent and never merged
//!
//! ## Usage Example
//!
//! ```
//! use segtree::{SegmentTree, TreeConfig, RefreshStrategy};
//!
//! let config = TreeConfig::default().with_refresh(RefreshStrategy::AncestorPath);
//! let max = |a: &i32, b: &i32| *a.max(b);
//! let mut tree = SegmentTree::with_config(vec![4, 3, 2, 8, 5], max, config);
//! assert_eq!(tree.calc(0, 3), Some(4));
//!
//! tree.update_leaf(1, 9)?;
//! assert_eq!(tree.top(), Some(&9));
//! # Ok::<(), segtree::SegmentTreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod math; // Scalar helpers
pub mod tree; // Segment tree core

// Re-exports for convenience
pub use math::{abs, MathError};
pub use tree::{
    NodeSpan, RefreshStrategy, SegmentTree, SegmentTreeError, TreeConfig, TreeDump, TreeLayout,
};
#[cfg(feature = "visualize")]
pub use tree::TreeSnapshot;
