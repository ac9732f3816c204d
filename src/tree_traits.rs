//! Rendering seam for terminal tree display.
//!
//! Inherent impls are not allowed on types defined outside the crate
//! (E0116), so rendering lives behind a trait implemented for the handle
//! types.

use std::fmt::Display;

use generational_arena::Index;
use termtree::Tree;

use crate::arena::TreeArena;
use crate::tree::NodeRef;

pub trait TreeRender {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: Display> TreeRender for NodeRef<T> {
    fn to_tree_string(&self) -> Tree<String> {
        let node = self.borrow();

        // Recursively construct the children, left before right
        let leaves: Vec<_> = node
            .left
            .iter()
            .chain(node.right.iter())
            .map(|child| child.to_tree_string())
            .collect();

        Tree::new(node.value.to_string()).with_leaves(leaves)
    }
}

impl<T: Display> TreeRender for TreeArena<T> {
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root_idx) => render_subtree(self, root_idx),
            None => Tree::new("empty tree".to_string()),
        }
    }
}

fn render_subtree<T: Display>(arena: &TreeArena<T>, idx: Index) -> Tree<String> {
    match arena.get_node(idx) {
        Some(node) => {
            let leaves: Vec<_> = node
                .children()
                .map(|child| render_subtree(arena, child))
                .collect();
            Tree::new(node.data.to_string()).with_leaves(leaves)
        }
        None => Tree::new(String::new()),
    }
}
