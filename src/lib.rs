//! This crate exposes a small family of Binary Search Trees (BSTs) built on
//! one shared engine: an unbalanced tree, an AVL tree, and a Red-Black tree.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. Every node stores one key and
//! may have a left and a right subtree. The ordering invariant is:
//!
//! 1. For every node, all the keys in its left subtree are less than its own key.
//! 2. For every node, all the keys in its right subtree are greater than its own key.
//!
//! > Keys are unique. Inserting a key that is already present changes nothing.
//!
//! Searching takes `O(height)`, where `height` is the number of edges on the
//! longest path from the root to a leaf. A plain tree can degrade into a list,
//! so two balancing strategies keep the height at `O(lg N)`:
//!
//! - [`AvlTree`] keeps the heights of any node's two subtrees within one of each
//!   other.
//! - [`RedBlackTree`] colors every node and keeps the number of black nodes
//!   equal on every downward path.
//!
//! All three share the same [`Tree`] type and differ only in their [`Balance`]
//! strategy. Operations that restructure a tree by hand (rotating, splitting,
//! and merging) are only offered by the plain [`BinarySearchTree`]; balancing
//! trees answer them with [`Error::NotSupported`].
//!
//! ```
//! use search_trees::{AvlTree, BinarySearchTree, Error, TraverseDirection};
//!
//! let mut plain: BinarySearchTree<_> = (1..=5).collect();
//! let mut avl: AvlTree<_> = (1..=5).collect();
//!
//! // The same keys, very different shapes.
//! assert_eq!(plain.root().unwrap().height(), 4);
//! assert_eq!(avl.root().unwrap().height(), 2);
//!
//! let breadth: Vec<_> = avl.iter(TraverseDirection::Breadth).copied().collect();
//! assert_eq!(breadth, [2, 1, 4, 3, 5]);
//!
//! assert!(plain.rotate_left().is_ok());
//! assert!(matches!(avl.rotate_left(), Err(Error::NotSupported { .. })));
//! ```
//!
//! Nothing here is synchronized. Share a tree across threads behind your own lock.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
pub mod balance;
pub mod error;
pub mod node;
pub mod traverse;
mod tree;

#[cfg(test)]
mod test;

pub use balance::{Avl, Balance, Plain, RedBlack, TreeKind};
pub use error::{Error, Operation, Result};
pub use node::{Color, NodeRef};
pub use traverse::{Strategy, Traversal, TraverseDirection};
pub use tree::Tree;

/// A binary search tree that never rebalances itself.
pub type BinarySearchTree<T> = Tree<T, Plain>;

/// A height-balanced binary search tree.
pub type AvlTree<T> = Tree<T, Avl>;

/// A color-balanced binary search tree.
pub type RedBlackTree<T> = Tree<T, RedBlack>;
