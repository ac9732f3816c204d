//! Binary tree measurement.
//!
//! Measures the shape of binary trees: the height in edges of the subtree
//! below a given (possibly absent) node, node and leaf counts, and
//! leaf-to-root branches. Heights are the input to balance-factor
//! computations in consumers; the balancing itself is out of scope here.
//!
//! Two representations are provided: shared [`NodeRef`] handles for trees
//! assembled from plain nodes, and the index-based [`TreeArena`] with
//! parent links. [`tree_stack`] and [`tree_queue`] offer the same
//! measurements with explicit work lists for trees too deep for recursion.
//!
//! ```
//! use treemetry::{height, BinaryNode};
//!
//! let root = BinaryNode::with_children(
//!     5,
//!     Some(BinaryNode::new(4)),
//!     Some(BinaryNode::with_children(6, None, Some(BinaryNode::new(7)))),
//! );
//! assert_eq!(height(Some(&root)), 2);
//!
//! // a consumer's balance factor for the root
//! let (left, right) = {
//!     let node = root.borrow();
//!     (node.left.clone(), node.right.clone())
//! };
//! let balance = height(left.as_ref()) as isize - height(right.as_ref()) as isize;
//! assert_eq!(balance, -1);
//! ```

pub mod arena;
pub mod errors;
pub mod tree;
pub mod tree_queue;
pub mod tree_stack;
pub mod tree_traits;
pub mod util;

pub use arena::{Side, TreeArena, TreeNode};
pub use errors::{TreeError, TreeResult};
pub use tree::{height, leaf_count, size, BinaryNode, NodeRef};
pub use tree_traits::TreeRender;
