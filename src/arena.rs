//! Arena-backed binary tree with parent links.
//!
//! Uses a generational arena for memory-safe node indices and O(1) lookups.
//! Insertion only ever creates fresh nodes under an existing empty child
//! slot, so a `TreeArena` cannot express a cycle and every traversal
//! terminates.

use std::fmt::Display;

use generational_arena::{Arena, Index};
use itertools::Itertools;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};

/// Which child slot of a parent an insertion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Tree node stored in the arena.
#[derive(Debug)]
pub struct TreeNode<T> {
    /// Payload, irrelevant to every measurement
    pub data: T,
    /// Index of the parent node, None for the root
    pub parent: Option<Index>,
    /// Left child slot
    pub left: Option<Index>,
    /// Right child slot
    pub right: Option<Index>,
}

impl<T> TreeNode<T> {
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Present children, left before right.
    pub fn children(&self) -> impl Iterator<Item = Index> {
        self.left.into_iter().chain(self.right)
    }
}

/// Arena-based binary tree.
#[derive(Debug)]
pub struct TreeArena<T> {
    /// Arena storage for all tree nodes
    arena: Arena<TreeNode<T>>,
    /// Index of the root node, None for empty trees
    root: Option<Index>,
}

impl<T> Default for TreeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TreeArena<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self, data))]
    pub fn insert_root(&mut self, data: T) -> TreeResult<Index> {
        if self.root.is_some() {
            return Err(TreeError::RootExists);
        }
        let idx = self.arena.insert(TreeNode {
            data,
            parent: None,
            left: None,
            right: None,
        });
        self.root = Some(idx);
        Ok(idx)
    }

    /// Creates a new node in the empty `side` slot of `parent`.
    #[instrument(level = "trace", skip(self, data))]
    pub fn insert_child(&mut self, data: T, parent: Index, side: Side) -> TreeResult<Index> {
        let parent_node = self
            .arena
            .get(parent)
            .ok_or(TreeError::NodeNotFound(parent))?;
        if parent_node.child(side).is_some() {
            return Err(TreeError::SlotOccupied { parent, side });
        }

        let child = self.arena.insert(TreeNode {
            data,
            parent: Some(parent),
            left: None,
            right: None,
        });
        if let Some(parent_node) = self.arena.get_mut(parent) {
            match side {
                Side::Left => parent_node.left = Some(child),
                Side::Right => parent_node.right = Some(child),
            }
        }
        Ok(child)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&TreeNode<T>> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut TreeNode<T>> {
        self.arena.get_mut(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator<'_, T> {
        TreeIterator::new(self)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn iter_postorder(&self) -> PostOrderIterator<'_, T> {
        PostOrderIterator::new(self)
    }

    /// Height of the whole tree in edges; 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self) -> usize {
        self.height_of(self.root)
    }

    /// Height in edges of the subtree below `node`.
    ///
    /// An absent (or stale) index yields 0; a leaf yields 0; otherwise each
    /// present child contributes `1 +` its own height and the larger
    /// contribution wins.
    #[instrument(level = "trace", skip(self))]
    pub fn height_of(&self, node: Option<Index>) -> usize {
        match node.and_then(|idx| self.arena.get(idx)) {
            Some(n) => {
                let left = n.left.map(|c| 1 + self.height_of(Some(c))).unwrap_or(0);
                let right = n.right.map(|c| 1 + self.height_of(Some(c))).unwrap_or(0);
                left.max(right)
            }
            None => 0,
        }
    }

    /// Number of nodes reachable from the root.
    #[instrument(level = "debug", skip(self))]
    pub fn size(&self) -> usize {
        self.iter().count()
    }

    /// Collects the indices of all leaf nodes in the tree.
    ///
    /// Empty trees return an empty vector.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_indices(&self) -> Vec<Index> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_indices().len()
    }

    #[instrument(level = "trace", skip(self))]
    fn collect_leaves(&self, node_idx: Index, leaves: &mut Vec<Index>) {
        if let Some(node) = self.get_node(node_idx) {
            if node.is_leaf() {
                leaves.push(node_idx);
            } else {
                for child in node.children() {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }

    /// Number of edges between the root and `node_idx`, following parent
    /// links upward.
    #[instrument(level = "debug", skip(self))]
    pub fn depth_of(&self, node_idx: Index) -> TreeResult<usize> {
        let mut node = self
            .arena
            .get(node_idx)
            .ok_or(TreeError::NodeNotFound(node_idx))?;
        let mut edges = 0;
        while let Some(parent_idx) = node.parent {
            edges += 1;
            node = self
                .arena
                .get(parent_idx)
                .ok_or(TreeError::NodeNotFound(parent_idx))?;
        }
        Ok(edges)
    }

    /// Every leaf-to-root path. The longest branch holds `height() + 1`
    /// nodes.
    #[instrument(level = "debug", skip(self))]
    pub fn branches(&self) -> Vec<Vec<Index>> {
        self.leaf_indices()
            .into_iter()
            .map(|leaf| {
                let mut branch = vec![leaf];
                let mut current = self.arena.get(leaf).and_then(|n| n.parent);
                while let Some(idx) = current {
                    branch.push(idx);
                    current = self.arena.get(idx).and_then(|n| n.parent);
                }
                branch
            })
            .collect()
    }
}

impl<T: Display> TreeArena<T> {
    /// Branches as display strings, leaf first.
    #[instrument(level = "debug", skip(self))]
    pub fn format_branches(&self) -> Vec<String> {
        self.branches()
            .iter()
            .map(|branch| {
                branch
                    .iter()
                    .filter_map(|&idx| self.arena.get(idx))
                    .map(|node| node.data.to_string())
                    .join(" <- ")
            })
            .collect()
    }
}

pub struct TreeIterator<'a, T> {
    arena: &'a TreeArena<T>,
    stack: Vec<Index>,
}

impl<'a, T> TreeIterator<'a, T> {
    fn new(arena: &'a TreeArena<T>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push(root);
        }
        Self { arena, stack }
    }
}

impl<'a, T> Iterator for TreeIterator<'a, T> {
    type Item = (Index, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                // Push right before left so the left subtree pops first
                for child in node.right.into_iter().chain(node.left) {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}

pub struct PostOrderIterator<'a, T> {
    arena: &'a TreeArena<T>,
    stack: Vec<(Index, bool)>,
}

impl<'a, T> PostOrderIterator<'a, T> {
    fn new(arena: &'a TreeArena<T>) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = arena.root() {
            stack.push((root, false));
        }
        Self { arena, stack }
    }
}

impl<'a, T> Iterator for PostOrderIterator<'a, T> {
    type Item = (Index, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_idx, visited)) = self.stack.pop() {
            if let Some(node) = self.arena.get_node(current_idx) {
                if !visited {
                    self.stack.push((current_idx, true));
                    for child in node.right.into_iter().chain(node.left) {
                        self.stack.push((child, false));
                    }
                } else {
                    return Some((current_idx, node));
                }
            }
        }
        None
    }
}
