//! Binary tree nodes and the recursive measurement core.
//!
//! `NodeRef` is the shared node handle used throughout the crate. The
//! `RefCell` allows borrowing the node contents, the `Rc` allows shared
//! ownership of subtrees, and absent children are explicit `None`s so the
//! height formula can distinguish a missing branch from a leaf.

use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a binary tree node.
pub type NodeRef<T> = Rc<RefCell<BinaryNode<T>>>;

/// A node with a payload and up to two children.
///
/// The payload plays no role in any measurement; it is carried for the
/// consumer and only surfaces again at the rendering seam.
#[derive(Debug, Clone)]
pub struct BinaryNode<T> {
    pub value: T,
    pub left: Option<NodeRef<T>>,
    pub right: Option<NodeRef<T>>,
}

impl<T> BinaryNode<T> {
    /// Creates a leaf node and wraps it in the shared handle.
    pub fn new(value: T) -> NodeRef<T> {
        Rc::new(RefCell::new(Self {
            value,
            left: None,
            right: None,
        }))
    }

    /// Creates a node with the given child slots already filled.
    pub fn with_children(
        value: T,
        left: Option<NodeRef<T>>,
        right: Option<NodeRef<T>>,
    ) -> NodeRef<T> {
        Rc::new(RefCell::new(Self { value, left, right }))
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Height of the subtree rooted at this node, in edges.
    ///
    /// A leaf has height 0. Each present child contributes `1 +` its own
    /// height, an absent child contributes nothing, and the result is the
    /// larger of the two contributions.
    ///
    /// The structure must be acyclic and quiescent for the duration of the
    /// call; a cycle makes the traversal non-terminating. This precondition
    /// is not checked.
    pub fn height(&self) -> usize {
        let left = self
            .left
            .as_ref()
            .map(|child| 1 + child.borrow().height())
            .unwrap_or(0);
        let right = self
            .right
            .as_ref()
            .map(|child| 1 + child.borrow().height())
            .unwrap_or(0);
        left.max(right)
    }

    /// Number of nodes in the subtree rooted at this node.
    pub fn size(&self) -> usize {
        1 + self
            .left
            .iter()
            .chain(self.right.iter())
            .map(|child| child.borrow().size())
            .sum::<usize>()
    }

    /// Number of leaves in the subtree rooted at this node.
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.left
                .iter()
                .chain(self.right.iter())
                .map(|child| child.borrow().leaf_count())
                .sum()
        }
    }
}

/// Height of a possibly absent tree, in edges.
///
/// An absent node yields 0, which both defines the height of an empty tree
/// and anchors the recursion. See [`BinaryNode::height`] for the formula
/// and the acyclicity precondition.
pub fn height<T>(node: Option<&NodeRef<T>>) -> usize {
    node.map(|n| n.borrow().height()).unwrap_or(0)
}

/// Node count of a possibly absent tree.
pub fn size<T>(node: Option<&NodeRef<T>>) -> usize {
    node.map(|n| n.borrow().size()).unwrap_or(0)
}

/// Leaf count of a possibly absent tree.
pub fn leaf_count<T>(node: Option<&NodeRef<T>>) -> usize {
    node.map(|n| n.borrow().leaf_count()).unwrap_or(0)
}
