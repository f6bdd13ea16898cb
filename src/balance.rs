use log::trace;

use crate::arena::{Arena, NodeId};

/// How far [`rebalance_upward()`] continues after correcting an imbalance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Walk {
    /// Stop after the first rotation.
    ///
    /// Inserting a single node can unbalance at most one subtree, and
    /// rotating it restores the subtree to its pre-insert height.
    FirstImbalance,

    /// Visit every node up to (and including) the root, rotating each
    /// imbalanced subtree encountered.
    ///
    /// Removing a node can shrink a rotated subtree, unbalancing ancestors
    /// further up the path.
    ToRoot,
}

pub(crate) fn height<T>(arena: &Arena<T>, id: Option<NodeId>) -> u8 {
    id.map(|v| arena[v].height).unwrap_or_default()
}

/// Recompute the height of `id` from the (current) heights of its children.
pub(crate) fn update_height<T>(arena: &mut Arena<T>, id: NodeId) {
    let n = &arena[id];
    let h = height(arena, n.left).max(height(arena, n.right)) + 1;
    arena[id].height = h;
}

/// Recompute the height of `from` and every ancestor of it, ending at the
/// root.
pub(crate) fn update_heights_upward<T>(arena: &mut Arena<T>, from: Option<NodeId>) {
    let mut cursor = from;
    while let Some(id) = cursor {
        update_height(arena, id);
        cursor = arena[id].parent;
    }
}

/// Compute the "balance factor" of the subtree rooted at `id`.
///
/// Returns the subtree height skew / magnitude, which is a positive number when
/// left heavy, and a negative number when right heavy.
pub(crate) fn balance<T>(arena: &Arena<T>, id: NodeId) -> i8 {
    let n = &arena[id];

    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(arena, n.left) as i16 - height(arena, n.right) as i16) as i8
}

fn child_balance<T>(arena: &Arena<T>, child: Option<NodeId>) -> i8 {
    child.map(|v| balance(arena, v)).unwrap_or_default()
}

/// Point whichever link referred to `old` (the left or right pointer of
/// `parent`, or the tree root when `parent` is [`None`]) at `new`.
fn replace_child<T>(
    arena: &mut Arena<T>,
    root: &mut Option<NodeId>,
    parent: Option<NodeId>,
    old: NodeId,
    new: NodeId,
) {
    let Some(parent) = parent else {
        debug_assert_eq!(*root, Some(old));
        *root = Some(new);
        return;
    };

    let p = &mut arena[parent];
    if p.left == Some(old) {
        p.left = Some(new);
    } else {
        debug_assert_eq!(p.right, Some(old));
        p.right = Some(new);
    }
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`,
/// returning the handle of `P` (the new subtree root).
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// `P` takes the place of `x` in its parent (or as the tree root). Heights
/// are recomputed from `x` up to the root once all links are rewritten.
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
pub(crate) fn rotate_left<T>(
    arena: &mut Arena<T>,
    root: &mut Option<NodeId>,
    x: NodeId,
) -> NodeId {
    let p = arena[x].right.unwrap();
    let parent = arena[x].parent;
    let inner = arena[p].left;

    replace_child(arena, root, parent, x, p);
    arena[p].parent = parent;

    arena[x].right = inner;
    if let Some(inner) = inner {
        arena[inner].parent = Some(x);
    }

    arena[p].left = Some(x);
    arena[x].parent = Some(p);

    update_heights_upward(arena, Some(x));

    trace!("rotated left at {x:?} around pivot {p:?}");
    p
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`,
/// returning the handle of `P` (the new subtree root).
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
pub(crate) fn rotate_right<T>(
    arena: &mut Arena<T>,
    root: &mut Option<NodeId>,
    y: NodeId,
) -> NodeId {
    let p = arena[y].left.unwrap();
    let parent = arena[y].parent;
    let inner = arena[p].right;

    replace_child(arena, root, parent, y, p);
    arena[p].parent = parent;

    arena[y].left = inner;
    if let Some(inner) = inner {
        arena[inner].parent = Some(y);
    }

    arena[p].right = Some(y);
    arena[y].parent = Some(p);

    update_heights_upward(arena, Some(y));

    trace!("rotated right at {y:?} around pivot {p:?}");
    p
}

/// Left rotate the left child of `n`, then right rotate `n`.
///
/// ```text
///        n                      n
///       / \                    / \                   P
///      x   4                  P   4                /   \
///     / \       --------->   / \     --------->   x     n
///    1   P                  x   3                / \   / \
///       / \                / \                  1   2 3   4
///      2   3              1   2
/// ```
///
/// # Panics
///
/// Panics if `n` has no left child, or the left child has no right child.
pub(crate) fn rotate_left_right<T>(
    arena: &mut Arena<T>,
    root: &mut Option<NodeId>,
    n: NodeId,
) -> NodeId {
    let left = arena[n].left.unwrap();
    rotate_left(arena, root, left);
    rotate_right(arena, root, n)
}

/// Right rotate the right child of `n`, then left rotate `n`.
///
/// The mirror of [`rotate_left_right()`].
///
/// # Panics
///
/// Panics if `n` has no right child, or the right child has no left child.
pub(crate) fn rotate_right_left<T>(
    arena: &mut Arena<T>,
    root: &mut Option<NodeId>,
    n: NodeId,
) -> NodeId {
    let right = arena[n].right.unwrap();
    rotate_right(arena, root, right);
    rotate_left(arena, root, n)
}

/// Rotate the subtree rooted at `id` if its balance factor is out of range,
/// returning the new subtree root, or [`None`] if `id` is balanced.
///
/// A child balance factor of 0 (only possible after a removal) resolves with
/// a single rotation.
pub(crate) fn rebalance_node<T>(
    arena: &mut Arena<T>,
    root: &mut Option<NodeId>,
    id: NodeId,
) -> Option<NodeId> {
    let top = match balance(arena, id) {
        // Left-heavy
        2 if child_balance(arena, arena[id].left) >= 0 => rotate_right(arena, root, id),
        2 => rotate_left_right(arena, root, id),
        // Right-heavy
        -2 if child_balance(arena, arena[id].right) <= 0 => rotate_left(arena, root, id),
        -2 => rotate_right_left(arena, root, id),

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => return None,

        // Every mutation is followed by a rebalance, so the skew never
        // exceeds 2.
        v => unreachable!("balance factor {v} out of range"),
    };

    // Invariant: the absolute difference between tree heights ("balance
    // factor") cannot exceed 1 after a rotation.
    debug_assert!(balance(arena, top).abs() <= 1);

    Some(top)
}

/// Walk from `from` towards the root, rotating imbalanced subtrees as
/// described by `walk`.
///
/// The heights of `from` and all its ancestors must be correct before this
/// is called.
pub(crate) fn rebalance_upward<T>(
    arena: &mut Arena<T>,
    root: &mut Option<NodeId>,
    from: Option<NodeId>,
    walk: Walk,
) {
    let mut cursor = from;
    while let Some(id) = cursor {
        let top = match rebalance_node(arena, root, id) {
            Some(_) if walk == Walk::FirstImbalance => return,
            Some(top) => top,
            None => id,
        };
        cursor = arena[top].parent;
    }
}
