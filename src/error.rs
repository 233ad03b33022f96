//! Errors for the operations a balancing tree refuses.

use std::fmt;

use thiserror::Error;

use crate::balance::TreeKind;

/// Result alias for the operations that a balancing tree may refuse.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors reported by tree operations. Missing keys are never errors, those show up as `None` or
/// `false` instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation would restructure the tree behind the back of its balancing scheme.
    #[error("manual {operation} is not supported on {kind} trees")]
    NotSupported {
        /// What the caller attempted.
        operation: Operation,
        /// The variant that refused it.
        kind: TreeKind,
    },
}

/// Restructuring operations only a plain binary search tree allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`Tree::rotate_left`](crate::Tree::rotate_left)
    RotateLeft,
    /// [`Tree::rotate_right`](crate::Tree::rotate_right)
    RotateRight,
    /// [`Tree::split_by_key`](crate::Tree::split_by_key)
    SplitByKey,
    /// [`Tree::merge_with`](crate::Tree::merge_with)
    MergeWith,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RotateLeft => "rotate-left",
            Self::RotateRight => "rotate-right",
            Self::SplitByKey => "split",
            Self::MergeWith => "merge",
        })
    }
}
