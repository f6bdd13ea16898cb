use std::iter::FusedIterator;

use crate::arena::{Arena, NodeId};

/// An iterator of owned values as the underlying tree `into_iter()` impl,
/// yielding them in ascending order.
#[derive(Debug)]
pub struct IntoIter<T> {
    arena: Arena<T>,
    stack: Vec<NodeId>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(arena: Arena<T>, root: Option<NodeId>) -> Self {
        let mut this = Self {
            arena,
            stack: vec![],
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

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        // All nodes in the left subtree have been yielded (and removed) by
        // the time a node is popped, leaving only the right link to follow.
        let v = self.arena.remove(self.stack.pop()?);

        // Descend down the left side of the right hand child of this node, if
        // any.
        self.push_subtree(v.right);

        Some(v.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.arena.len(), Some(self.arena.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
