//! A self-balancing [AVL tree] storing an ordered set of unique values.
//!
//! After every insert and delete the tree restores the AVL property: for
//! every node, the heights of its left and right subtrees differ by at most
//! one. This bounds the height of the tree (and therefore the cost of every
//! search, insert and delete) to O(log n).
//!
//! Nodes live in an arena owned by the [`AvlTree`] and refer to their
//! children and parent by index, so any node returned from a search can be
//! used to walk up towards the root as well as down into its subtrees.
//!
//! ```
//! use avltree::AvlTree;
//!
//! let mut t = AvlTree::new();
//!
//! t.insert(5);
//! t.insert(10);
//! t.insert(14); // Skews the tree right, triggering a left rotation.
//!
//! assert_eq!(t.to_string(), "(5) <- 10 -> (14)");
//!
//! let node = t.search(&14).unwrap();
//! assert!(node.is_right_child());
//! assert_eq!(node.parent().map(|v| *v.value()), Some(10));
//!
//! assert_eq!(t.delete(&10), Some(10));
//! assert_eq!(t.delete(&10), None);
//! assert_eq!(t.to_string(), "5 -> (14)");
//! ```
//!
//! [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree

mod arena;
mod balance;
mod dot;
mod iter;
mod node;
mod tree;

pub use dot::Dot;
pub use iter::{IntoIter, Iter};
pub use node::NodeRef;
pub use tree::AvlTree;

#[cfg(test)]
mod test_utils;

