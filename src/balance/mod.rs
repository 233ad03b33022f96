//! Balancing strategies plugged into the shared [`Tree`] engine.
//!
//! The engine does the mechanical tree surgery (attaching, splicing, rotating) and hands control
//! to a [`Balance`] implementation at the points where the variants differ: right after a node is
//! attached, when a node has to be removed, and when a node is checked by
//! [`Tree::verify`](crate::Tree::verify).

use std::fmt;

use log::debug;

use crate::error::{Error, Operation, Result};
use crate::node::{Color, NodeId, Tag};
use crate::tree::Tree;

pub mod avl;
pub mod plain;
pub mod red_black;

pub use avl::Avl;
pub use plain::Plain;
pub use red_black::RedBlack;

mod private {
    pub trait Sealed {}
}

/// Which member of the tree family a strategy implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKind {
    /// No balancing at all.
    Plain,
    /// Height balanced.
    Avl,
    /// Color balanced.
    RedBlack,
}

impl TreeKind {
    /// Whether callers may rotate, split, and merge this kind of tree by hand. Balancing trees
    /// refuse, since nothing would repair their invariant afterwards.
    pub fn allows_restructuring(self) -> bool {
        matches!(self, Self::Plain)
    }

    pub(crate) fn ensure_restructurable(self, operation: Operation) -> Result<()> {
        if self.allows_restructuring() {
            Ok(())
        } else {
            debug!("refusing manual {} on a {} tree", operation, self);
            Err(Error::NotSupported {
                operation,
                kind: self,
            })
        }
    }

    /// The tag a freshly inserted node starts with.
    pub(crate) fn fresh_tag(self) -> Tag {
        match self {
            Self::Plain => Tag::Plain,
            Self::Avl => Tag::Avl { height: 0 },
            Self::RedBlack => Tag::RedBlack { color: Color::Red },
        }
    }
}

impl fmt::Display for TreeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Plain => "plain",
            Self::Avl => "AVL",
            Self::RedBlack => "red-black",
        })
    }
}

/// The hooks a balancing scheme provides to the [`Tree`] engine. This trait is sealed; the
/// implementations are [`Plain`], [`Avl`], and [`RedBlack`].
pub trait Balance: private::Sealed + Sized {
    /// The variant this strategy implements.
    const KIND: TreeKind;

    /// Called after `node` was attached as a new leaf (or became the root of an empty tree).
    fn rebalance_after_insert<T: Ord>(tree: &mut Tree<T, Self>, node: NodeId);

    /// Removes `node` from the tree, restoring the invariant, and returns the removed content.
    fn remove_node<T: Ord>(tree: &mut Tree<T, Self>, node: NodeId) -> T;

    /// Checks the variant's own invariant at `node`. Ordering and parent links are checked by
    /// the engine.
    fn verify_node<T: Ord>(tree: &Tree<T, Self>, node: NodeId) -> bool;
}
