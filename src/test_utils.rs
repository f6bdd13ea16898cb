use std::fmt::Debug;

use proptest::prelude::*;

use crate::{arena::NodeId, AvlTree};

const VALUE_MAX: usize = 50;

/// Generate arbitrary values from [0..[`VALUE_MAX`]).
///
/// A small value domain encourages multiple operations to act on the same
/// value.
pub(crate) fn arbitrary_value() -> impl Strategy<Value = usize> {
    0..VALUE_MAX
}

/// Assert the BST and AVL properties of tree nodes, and the consistency of
/// the parent links, ensuring the tree is well-formed.
pub(crate) fn validate_tree_structure<T>(t: &AvlTree<T>)
where
    T: Ord + Debug,
{
    let root = match t.root {
        Some(v) => v,
        None => {
            assert_eq!(t.len(), 0);
            return;
        }
    };

    // Invariant 1: the root, and only the root, has no parent.
    assert_eq!(t.arena[root].parent, None);

    // Perform a pre-order traversal of the tree.
    let mut visited = 0;
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        visited += 1;
        let n = &t.arena[id];

        // Prepare to visit the children
        stack.extend(n.left.iter().chain(n.right.iter()));

        // Invariant 2: each child links back to this node as its parent.
        for child in n.left.iter().chain(n.right.iter()) {
            assert_eq!(
                t.arena[*child].parent,
                Some(id),
                "child {:?} of {:?} has wrong parent",
                t.arena[*child].value,
                n.value,
            );
        }

        // Invariant 3: the left child always contains a value strictly less
        // than this node.
        assert!(n
            .left
            .map(|v| t.arena[v].value < n.value)
            .unwrap_or(true));

        // Invariant 4: the right child always contains a value strictly
        // greater than this node.
        assert!(n
            .right
            .map(|v| t.arena[v].value > n.value)
            .unwrap_or(true));

        // Invariant 5: the height of this node is always +1 of the maximum
        // child height, with an absent child contributing 0.
        let left_height = height(t, n.left);
        let right_height = height(t, n.right);
        let want_height = left_height.max(right_height) + 1;

        assert_eq!(
            n.height, want_height,
            "expect node with value {:?} to have height {}, has {}",
            n.value, want_height, n.height,
        );

        // Invariant 6: the absolute height difference between the left
        // subtree and right subtree (the "balance factor") cannot exceed 1.
        let balance = (left_height as i64 - right_height as i64).abs();
        assert!(balance <= 1, "balance={balance}, node={:?}", n.value);
    }

    // Invariant 7: every stored node is reachable from the root.
    assert_eq!(visited, t.len());

    // Invariant 8: an in-order traversal yields strictly ascending values,
    // which (with invariants 3 and 4 holding locally) confirms the BST
    // ordering holds across whole subtrees.
    let values = t.iter().collect::<Vec<_>>();
    assert_eq!(values.len(), visited);
    for window in values.windows(2) {
        assert!(window[0] < window[1], "{:?} >= {:?}", window[0], window[1]);
    }
}

fn height<T>(t: &AvlTree<T>, id: Option<NodeId>) -> u8 {
    id.map(|v| t.arena[v].height).unwrap_or_default()
}
