use std::fmt::{Debug, Display};

use crate::arena::{Arena, NodeId};

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,

    /// The node that links to this node as a child, or [`None`] for the root.
    ///
    /// This is a non-owning back-reference; the [`Arena`] owns every node.
    pub(crate) parent: Option<NodeId>,

    /// Child node handles.
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1, and an absent child contributes a height of
    /// 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 5.78*10⁷⁶ entries.
    pub(crate) height: u8,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
            height: 1,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Descend the left-most edge of the subtree rooted at `id`, returning the
/// node holding the minimum value.
pub(crate) fn subtree_min<T>(arena: &Arena<T>, mut id: NodeId) -> NodeId {
    while let Some(left) = arena[id].left {
        id = left;
    }
    id
}

/// Descend the right-most edge of the subtree rooted at `id`, returning the
/// node holding the maximum value.
pub(crate) fn subtree_max<T>(arena: &Arena<T>, mut id: NodeId) -> NodeId {
    while let Some(right) = arena[id].right {
        id = right;
    }
    id
}

/// A read-only view of a single node within an
/// [`AvlTree`](crate::AvlTree).
///
/// A [`NodeRef`] can navigate to its children and parent, making it possible
/// to inspect the shape of the tree.
///
/// ```
/// use avltree::AvlTree;
///
/// let t = AvlTree::from_iter([5, 10, 14]);
///
/// let root = t.root().unwrap();
/// assert_eq!(*root.value(), 10);
/// assert_eq!(root.left().map(|v| *v.value()), Some(5));
/// assert_eq!(root.right().map(|v| *v.value()), Some(14));
///
/// let five = t.search(&5).unwrap();
/// assert!(five.is_leaf());
/// assert!(five.is_left_child());
/// assert_eq!(five.parent().map(|v| *v.value()), Some(10));
/// ```
pub struct NodeRef<'a, T> {
    arena: &'a Arena<T>,
    id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, id: NodeId) -> Self {
        Self { arena, id }
    }

    fn node(&self) -> &'a Node<T> {
        &self.arena[self.id]
    }

    fn at(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.arena, id))
    }

    /// The value held by this node.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// The height of the subtree rooted at this node; 1 for a leaf.
    pub fn height(&self) -> usize {
        usize::from(self.node().height)
    }

    pub fn left(&self) -> Option<Self> {
        self.at(self.node().left)
    }

    pub fn right(&self) -> Option<Self> {
        self.at(self.node().right)
    }

    /// The node that holds this node as a child, or [`None`] if this node is
    /// the root of the tree.
    pub fn parent(&self) -> Option<Self> {
        self.at(self.node().parent)
    }

    /// Returns true if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// Returns true if this node is the left child of its parent.
    pub fn is_left_child(&self) -> bool {
        self.node()
            .parent
            .map(|p| self.arena[p].left == Some(self.id))
            .unwrap_or_default()
    }

    /// Returns true if this node is the right child of its parent.
    pub fn is_right_child(&self) -> bool {
        self.node()
            .parent
            .map(|p| self.arena[p].right == Some(self.id))
            .unwrap_or_default()
    }

    /// The node holding the smallest value in the subtree rooted at this
    /// node (which is this node if it has no left child).
    pub fn minimum(&self) -> Self {
        Self::new(self.arena, subtree_min(self.arena, self.id))
    }

    /// The node holding the largest value in the subtree rooted at this node
    /// (which is this node if it has no right child).
    pub fn maximum(&self) -> Self {
        Self::new(self.arena, subtree_max(self.arena, self.id))
    }
}

impl<T> Debug for NodeRef<'_, T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("value", self.value())
            .field("height", &self.height())
            .finish()
    }
}

/// Renders the subtree rooted at this node in-order, each child wrapped in
/// parentheses:
///
/// ```text
/// (left) <- value -> (right)
/// ```
///
/// Absent children (and their arrow) are omitted.
impl<T> Display for NodeRef<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(left) = self.left() {
            write!(f, "({left}) <- ")?;
        }
        write!(f, "{}", self.value())?;
        if let Some(right) = self.right() {
            write!(f, " -> ({right})")?;
        }
        Ok(())
    }
}
