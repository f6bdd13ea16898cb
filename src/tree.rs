use std::{
    cmp::Ordering,
    fmt::{Debug, Display},
};

use log::debug;

use crate::{
    arena::{Arena, NodeId},
    balance::{rebalance_upward, update_heights_upward, Walk},
    dot::Dot,
    iter::{IntoIter, Iter},
    node::{subtree_max, subtree_min, Node, NodeRef},
};

/// A self-balancing AVL tree storing a set of unique, totally ordered values.
///
/// Every insert and delete restores the AVL property (the heights of the two
/// subtrees of any node differ by at most 1), bounding the height of the tree
/// to O(log n).
///
/// Nodes are held in an arena owned by the tree and link to their children
/// and their parent by index, making the parent of any node reachable from a
/// [`NodeRef`] returned by [`AvlTree::search()`] or [`AvlTree::root()`].
///
/// ```
/// use avltree::AvlTree;
///
/// let mut t = AvlTree::new();
///
/// for v in [5, 10, 14, 2, 3, 4] {
///     t.insert(v);
/// }
///
/// assert_eq!(t.to_string(), "((2) <- 3 -> (4)) <- 5 -> (10 -> (14))");
/// assert_eq!(t.height(), 3);
///
/// assert_eq!(t.delete(&5), Some(5));
/// assert!(t.search(&5).is_none());
/// assert_eq!(t.iter().copied().collect::<Vec<_>>(), [2, 3, 4, 10, 14]);
/// ```
#[derive(Clone)]
pub struct AvlTree<T> {
    pub(crate) arena: Arena<T>,
    pub(crate) root: Option<NodeId>,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            root: None,
        }
    }
}

impl<T> AvlTree<T> {
    /// Construct an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// The root node of the tree, or [`None`] if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|id| NodeRef::new(&self.arena, id))
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The height of the tree: 0 when empty, 1 for a single node.
    pub fn height(&self) -> usize {
        self.root().map(|v| v.height()).unwrap_or_default()
    }

    /// The smallest value in the tree, if any.
    pub fn first(&self) -> Option<&T> {
        self.root().map(|v| v.minimum().value())
    }

    /// The largest value in the tree, if any.
    pub fn last(&self) -> Option<&T> {
        self.root().map(|v| v.maximum().value())
    }

    /// Remove all values from the tree.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Visit the values in the tree in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.arena, self.root)
    }

    /// Return a [Graphviz] DOT rendering of the tree structure, annotating
    /// each node with its height.
    ///
    /// [Graphviz]: https://graphviz.org/
    pub fn dot(&self) -> Dot<'_, T> {
        Dot::new(self.root())
    }
}

impl<T> AvlTree<T>
where
    T: Ord,
{
    /// Insert `value` into the tree, returning true if it was not already
    /// present.
    ///
    /// Inserting a value that already exists is a no-op, leaving the tree
    /// unchanged and returning false.
    pub fn insert(&mut self, value: T) -> bool {
        let mut cursor = match self.root {
            Some(v) => v,
            None => {
                self.root = Some(self.arena.insert(Node::new(value, None)));
                return true;
            }
        };

        // Descend to the node that will become the parent of the new leaf.
        let ordering = loop {
            let n = &self.arena[cursor];
            let (ordering, child) = match value.cmp(&n.value) {
                Ordering::Less => (Ordering::Less, n.left),
                Ordering::Equal => return false,
                Ordering::Greater => (Ordering::Greater, n.right),
            };

            match child {
                Some(v) => cursor = v,
                None => break ordering,
            }
        };

        let id = self.arena.insert(Node::new(value, Some(cursor)));
        match ordering {
            Ordering::Less => self.arena[cursor].left = Some(id),
            _ => self.arena[cursor].right = Some(id),
        }

        update_heights_upward(&mut self.arena, Some(cursor));

        // Adding a child to "cursor" changes its height by at most 1 and
        // cannot unbalance it, but it may skew any ancestor.
        rebalance_upward(
            &mut self.arena,
            &mut self.root,
            Some(cursor),
            Walk::FirstImbalance,
        );

        true
    }

    /// Search for the node holding `value`.
    pub fn search(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.find(value).map(|id| NodeRef::new(&self.arena, id))
    }

    /// Returns true if `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Remove `value` from the tree, returning it if it was present.
    ///
    /// When the node holding `value` has children, the largest value in its
    /// left subtree (or, lacking a left child, the smallest value in its right
    /// subtree) is promoted into it, and the node that held the promoted
    /// value is removed in its place. This repeats until the node to be
    /// unlinked is a leaf.
    pub fn delete(&mut self, value: &T) -> Option<T> {
        let mut target = self.find(value)?;

        loop {
            let n = &self.arena[target];
            let replacement = match (n.left, n.right) {
                (None, None) => break,
                (Some(left), _) => subtree_max(&self.arena, left),
                (None, Some(right)) => subtree_min(&self.arena, right),
            };

            debug!("promoting replacement {replacement:?} into {target:?}");

            // Move the value being removed into the replacement node, which
            // becomes the next node to remove.
            self.arena.swap_values(target, replacement);
            target = replacement;
        }

        Some(self.unlink_leaf(target))
    }

    fn find(&self, value: &T) -> Option<NodeId> {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let n = &self.arena[id];
            cursor = match value.cmp(&n.value) {
                Ordering::Less => n.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => n.right,
            };
        }
        None
    }

    /// Detach the leaf `id` from its parent and rebalance every ancestor.
    fn unlink_leaf(&mut self, id: NodeId) -> T {
        let node = self.arena.remove(id);

        // Invariant: only leaves are unlinked.
        debug_assert!(node.is_leaf());

        debug!("unlinking leaf {id:?} from parent {:?}", node.parent);

        let Some(parent) = node.parent else {
            debug_assert_eq!(self.root, Some(id));
            self.root = None;
            return node.value;
        };

        let p = &mut self.arena[parent];
        if p.left == Some(id) {
            p.left = None;
        } else {
            debug_assert_eq!(p.right, Some(id));
            p.right = None;
        }

        update_heights_upward(&mut self.arena, Some(parent));
        rebalance_upward(&mut self.arena, &mut self.root, Some(parent), Walk::ToRoot);

        node.value
    }
}

impl<T> Debug for AvlTree<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Renders the tree using the [`Display`] implementation of [`NodeRef`] for
/// the root node, or an empty string when the tree is empty.
impl<T> Display for AvlTree<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.root() {
            Some(v) => Display::fmt(&v, f),
            None => Ok(()),
        }
    }
}

impl<T> FromIterator<T> for AvlTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut t = Self::default();
        t.extend(iter);
        t
    }
}

impl<T> Extend<T> for AvlTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

impl<T> IntoIterator for AvlTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.arena, self.root)
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
