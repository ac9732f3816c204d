//! Tests for the arena-backed tree

use generational_arena::Index;
use rstest::rstest;

use treemetry::util::testing::init_test_setup;
use treemetry::{height, BinaryNode, Side, TreeArena, TreeError, TreeRender};

// ============================================================
// Shape helpers
// ============================================================

//     5
//    / \
//   4   6
//        \
//         7
fn sample_arena() -> (TreeArena<i32>, [Index; 4]) {
    let mut tree = TreeArena::new();
    let root = tree.insert_root(5).unwrap();
    let left = tree.insert_child(4, root, Side::Left).unwrap();
    let right = tree.insert_child(6, root, Side::Right).unwrap();
    let grandchild = tree.insert_child(7, right, Side::Right).unwrap();
    (tree, [root, left, right, grandchild])
}

/// An index no arena in these tests contains: the last slot of a throwaway
/// arena much larger than any tree built here.
fn foreign_index() -> Index {
    let mut other = TreeArena::new();
    let mut cursor = other.insert_root(0).unwrap();
    for value in 1..16 {
        cursor = other.insert_child(value, cursor, Side::Left).unwrap();
    }
    cursor
}

// ============================================================
// Empty Tree
// ============================================================

#[test]
fn given_empty_arena_when_measuring_then_everything_is_zero() {
    init_test_setup();
    let tree: TreeArena<i32> = TreeArena::new();

    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.height_of(None), 0);
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.leaf_count(), 0);
    assert!(tree.branches().is_empty());
    assert_eq!(tree.iter().count(), 0);
}

// ============================================================
// Height Contract
// ============================================================

#[test]
fn given_sample_arena_when_measuring_height_then_returns_two() {
    init_test_setup();
    let (tree, _) = sample_arena();
    assert_eq!(tree.height(), 2);
}

#[test]
fn given_sample_arena_when_measuring_subtrees_then_each_matches_contract() {
    let (tree, [root, left, right, grandchild]) = sample_arena();

    assert_eq!(tree.height_of(Some(root)), 2);
    assert_eq!(tree.height_of(Some(left)), 0);
    assert_eq!(tree.height_of(Some(right)), 1);
    assert_eq!(tree.height_of(Some(grandchild)), 0);
    assert_eq!(tree.height_of(None), 0);
}

#[test]
fn given_single_root_when_measuring_height_then_returns_zero() {
    let mut tree = TreeArena::new();
    tree.insert_root("only").unwrap();
    assert_eq!(tree.height(), 0);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(7)]
fn given_left_chain_arena_when_measuring_height_then_returns_len_minus_one(#[case] len: usize) {
    let mut tree = TreeArena::new();
    let mut cursor = tree.insert_root(0).unwrap();
    for value in 1..len {
        cursor = tree.insert_child(value, cursor, Side::Left).unwrap();
    }
    assert_eq!(tree.height(), len - 1);
}

#[test]
fn given_same_shape_when_measuring_arena_and_node_refs_then_heights_agree() {
    let (tree, _) = sample_arena();
    let root = BinaryNode::with_children(
        5,
        Some(BinaryNode::new(4)),
        Some(BinaryNode::with_children(6, None, Some(BinaryNode::new(7)))),
    );
    assert_eq!(tree.height(), height(Some(&root)));
}

#[test]
fn given_mirrored_arena_when_measuring_height_then_result_unchanged() {
    let (tree, _) = sample_arena();

    // same shape with every left/right pair swapped
    let mut flipped = TreeArena::new();
    let root = flipped.insert_root(5).unwrap();
    let left = flipped.insert_child(6, root, Side::Left).unwrap();
    flipped.insert_child(4, root, Side::Right).unwrap();
    flipped.insert_child(7, left, Side::Left).unwrap();

    assert_eq!(flipped.height(), tree.height());
    assert_eq!(flipped.leaf_count(), tree.leaf_count());
}

// ============================================================
// Insertion Errors
// ============================================================

#[test]
fn given_existing_root_when_inserting_root_then_errors() {
    let mut tree = TreeArena::new();
    tree.insert_root(1).unwrap();

    let result = tree.insert_root(2);
    assert!(matches!(result, Err(TreeError::RootExists)));
}

#[test]
fn given_occupied_slot_when_inserting_child_then_errors() {
    let mut tree = TreeArena::new();
    let root = tree.insert_root(1).unwrap();
    tree.insert_child(2, root, Side::Left).unwrap();

    let result = tree.insert_child(3, root, Side::Left);
    assert!(matches!(
        result,
        Err(TreeError::SlotOccupied {
            side: Side::Left,
            ..
        })
    ));
    // the failed insert must not have grown the tree
    assert_eq!(tree.size(), 2);
}

#[test]
fn given_unknown_parent_when_inserting_child_then_errors() {
    let mut tree = TreeArena::new();
    tree.insert_root(1).unwrap();

    let result = tree.insert_child(2, foreign_index(), Side::Right);
    assert!(matches!(result, Err(TreeError::NodeNotFound(_))));
}

// ============================================================
// Depth and Branches
// ============================================================

#[test]
fn given_sample_arena_when_walking_depths_then_deepest_leaf_matches_height() {
    let (tree, [root, left, right, grandchild]) = sample_arena();

    assert_eq!(tree.depth_of(root).unwrap(), 0);
    assert_eq!(tree.depth_of(left).unwrap(), 1);
    assert_eq!(tree.depth_of(right).unwrap(), 1);
    assert_eq!(tree.depth_of(grandchild).unwrap(), tree.height());
}

#[test]
fn given_unknown_index_when_walking_depth_then_errors() {
    let (tree, _) = sample_arena();
    assert!(matches!(
        tree.depth_of(foreign_index()),
        Err(TreeError::NodeNotFound(_))
    ));
}

#[test]
fn given_sample_arena_when_enumerating_branches_then_paths_run_leaf_to_root() {
    let (tree, _) = sample_arena();

    let mut branches: Vec<Vec<i32>> = tree
        .branches()
        .into_iter()
        .map(|branch| {
            branch
                .into_iter()
                .filter_map(|idx| tree.get_node(idx).map(|n| n.data))
                .collect()
        })
        .collect();
    branches.sort();

    assert_eq!(branches, vec![vec![4, 5], vec![7, 6, 5]]);

    let longest = tree.branches().iter().map(Vec::len).max().unwrap();
    assert_eq!(longest, tree.height() + 1);
}

#[test]
fn given_sample_arena_when_formatting_branches_then_joined_leaf_first() {
    let (tree, _) = sample_arena();

    let formatted = tree.format_branches();
    assert!(formatted.contains(&"4 <- 5".to_string()));
    assert!(formatted.contains(&"7 <- 6 <- 5".to_string()));
}

// ============================================================
// Leaves and Counts
// ============================================================

#[test]
fn given_sample_arena_when_collecting_leaves_then_returns_both_leaves() {
    let (tree, _) = sample_arena();

    let mut leaves: Vec<i32> = tree
        .leaf_indices()
        .into_iter()
        .filter_map(|idx| tree.get_node(idx).map(|n| n.data))
        .collect();
    leaves.sort();

    assert_eq!(leaves, vec![4, 7]);
    assert_eq!(tree.leaf_count(), 2);
    assert_eq!(tree.size(), 4);
}

// ============================================================
// Iterators
// ============================================================

#[test]
fn given_sample_arena_when_iterating_then_visits_all_nodes_left_first() {
    let (tree, _) = sample_arena();

    let order: Vec<i32> = tree.iter().map(|(_, node)| node.data).collect();
    assert_eq!(order, vec![5, 4, 6, 7]);

    for (idx, node) in tree.iter() {
        assert!(tree.get_node(idx).is_some());
        let _ = node.is_leaf();
    }
}

#[test]
fn given_sample_arena_when_postorder_iterating_then_leaves_come_before_root() {
    let (tree, _) = sample_arena();

    let order: Vec<i32> = tree.iter_postorder().map(|(_, node)| node.data).collect();
    assert_eq!(order, vec![4, 7, 6, 5]);
}

// ============================================================
// Rendering
// ============================================================

#[test]
fn given_sample_arena_when_rendering_then_all_values_appear() {
    let (tree, _) = sample_arena();
    let rendered = tree.to_tree_string().to_string();

    assert!(rendered.starts_with('5'));
    for value in ["4", "6", "7"] {
        assert!(rendered.contains(value), "missing {value} in:\n{rendered}");
    }
}

#[test]
fn given_empty_arena_when_rendering_then_placeholder_shown() {
    let tree: TreeArena<i32> = TreeArena::new();
    assert_eq!(tree.to_tree_string().to_string().trim(), "empty tree");
}
