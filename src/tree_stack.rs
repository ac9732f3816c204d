//! Stack-based traversal variants.
//!
//! Same measurement semantics as the recursive core in [`crate::tree`], but
//! with an explicit work stack so the call depth stays constant regardless
//! of tree shape. Use these for deep or badly unbalanced trees where true
//! recursion would exhaust the call stack.
//!
//! Only `Rc` handles are cloned when pushing children, never the nodes
//! themselves.

use crate::tree::NodeRef;

/// Height in edges, computed with an explicit DFS stack.
///
/// Each stack entry carries the node together with its distance in edges
/// from the starting node; the result is the largest distance seen.
pub fn height<T>(node: Option<&NodeRef<T>>) -> usize {
    let mut max_edges = 0;
    let mut stack: Vec<(NodeRef<T>, usize)> = match node {
        Some(root) => vec![(root.clone(), 0)],
        None => return 0,
    };

    while let Some((node_rc, edges)) = stack.pop() {
        if edges > max_edges {
            max_edges = edges;
        }
        let node = node_rc.borrow();
        for child_rc in node.left.iter().chain(node.right.iter()) {
            stack.push((child_rc.clone(), edges + 1));
        }
    }

    max_edges
}

/// Leaf count, computed with an explicit DFS stack.
pub fn leaf_count<T>(node: Option<&NodeRef<T>>) -> usize {
    let mut leaves = 0;
    let mut stack: Vec<NodeRef<T>> = match node {
        Some(root) => vec![root.clone()],
        None => return 0,
    };

    while let Some(node_rc) = stack.pop() {
        let node = node_rc.borrow();
        if node.is_leaf() {
            leaves += 1;
        } else {
            for child_rc in node.left.iter().chain(node.right.iter()) {
                stack.push(child_rc.clone());
            }
        }
    }

    leaves
}
