use std::iter::FusedIterator;

use crate::arena::{Arena, NodeId};

/// An in-order iterator over the values of an [`AvlTree`](crate::AvlTree),
/// yielding them in ascending order.
///
/// This `struct` is created by [`AvlTree::iter()`](crate::AvlTree::iter).
#[derive(Debug)]
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    stack: Vec<NodeId>,

    /// The number of values not yet yielded.
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, root: Option<NodeId>) -> Self {
        let mut this = Self {
            arena,
            stack: vec![],
            remaining: arena.len(),
        };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: Option<NodeId>) {
        let mut ptr = subtree_root;

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = self.arena[v].left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let v = &self.arena[self.stack.pop()?];

        // Descend down the left side of the right hand child of this node, if
        // any.
        self.push_subtree(v.right);
        self.remaining -= 1;

        Some(&v.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
