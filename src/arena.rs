use std::ops::{Index, IndexMut};

use crate::node::Node;

/// A handle to a [`Node`] stored in an [`Arena`].
///
/// Handles are only meaningful for the arena that issued them, and only
/// until the node they refer to is removed (after which the slot may be
/// reused by a later insert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

/// Slot storage owning every [`Node`] in a tree.
///
/// Nodes refer to each other (children and parent) by [`NodeId`] rather than
/// by pointer, so the parent back-reference carries no ownership. Vacated
/// slots are recorded in a free list and reused before the slot vector grows.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<NodeId>,
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }
}

impl<T> Arena<T> {
    /// Store `node`, returning the handle to it.
    pub(crate) fn insert(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                debug_assert!(self.slots[id.0].is_none());
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Remove and return the node identified by `id`, freeing its slot.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not refer to an occupied slot.
    pub(crate) fn remove(&mut self, id: NodeId) -> Node<T> {
        let node = self.slots[id.0].take().unwrap();
        self.free.push(id);
        node
    }

    /// Exchange the values held by the two distinct nodes `a` and `b`,
    /// leaving their links and heights untouched.
    ///
    /// # Panics
    ///
    /// Panics if `a == b` or either handle refers to a vacant slot.
    pub(crate) fn swap_values(&mut self, a: NodeId, b: NodeId) {
        assert_ne!(a, b);

        let (lo, hi) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.slots.split_at_mut(hi);

        let x = head[lo].as_mut().unwrap();
        let y = tail[0].as_mut().unwrap();
        std::mem::swap(&mut x.value, &mut y.value);
    }

    /// The number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        self.slots[id.0].as_ref().unwrap()
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        self.slots[id.0].as_mut().unwrap()
    }
}
