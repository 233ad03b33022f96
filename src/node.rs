//! Tree nodes and read-only views of them.
//!
//! Nodes live in their tree's arena and point at each other through [`NodeId`]s. Callers never
//! hold a node directly; lookups hand out a [`NodeRef`] that borrows the tree and exposes the
//! node's content, its neighbours, and the properties derived from the tree's shape.

use std::fmt;
use std::ptr;

use crate::arena::Arena;

/// Opaque handle of a node inside one particular tree. Only the balancing hooks of
/// [`Balance`](crate::Balance) receive one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// The color of a node in a Red-Black tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Red nodes never have red children.
    Red,
    /// Black nodes are the ones counted by the black height.
    Black,
}

/// Per-variant bookkeeping stored next to a node's links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tag {
    Plain,
    /// Edges on the longest path down to a leaf, maintained incrementally.
    Avl {
        height: usize,
    },
    RedBlack {
        color: Color,
    },
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    pub(crate) content: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) tag: Tag,
}

impl<T> Node<T> {
    pub(crate) fn new(content: T, tag: Tag) -> Self {
        Self {
            content,
            parent: None,
            left: None,
            right: None,
            tag,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn stored_height(&self) -> Option<usize> {
        match self.tag {
            Tag::Avl { height } => Some(height),
            _ => None,
        }
    }

    pub(crate) fn color(&self) -> Option<Color> {
        match self.tag {
            Tag::RedBlack { color } => Some(color),
            _ => None,
        }
    }
}

/// A borrowed view of a single node of a tree.
///
/// # Examples
///
/// ```
/// use search_trees::BinarySearchTree;
///
/// let tree: BinarySearchTree<_> = [5, 4, 6].into_iter().collect();
///
/// let root = tree.root().unwrap();
/// assert_eq!(root.content(), &5);
/// assert_eq!(root.degree(), 2);
/// assert_eq!(root.count(), 3);
///
/// let left = root.left().unwrap();
/// assert!(left.is_leaf());
/// assert!(left.is_left_child());
/// assert_eq!(left.depth(), 1);
/// assert_eq!(left.level(), 2);
/// assert_eq!(left.parent(), Some(root));
/// ```
pub struct NodeRef<'a, T> {
    nodes: &'a Arena<T>,
    id: NodeId,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

/// Two views are equal when they refer to the same node of the same tree.
impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.nodes, other.nodes) && self.id == other.id
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T> fmt::Debug for NodeRef<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("content", self.content())
            .field("tag", &self.node().tag)
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(nodes: &'a Arena<T>, id: NodeId) -> Self {
        Self { nodes, id }
    }

    fn node(&self) -> &'a Node<T> {
        &self.nodes[self.id]
    }

    fn wrap(&self, id: Option<NodeId>) -> Option<Self> {
        id.map(|id| Self::new(self.nodes, id))
    }

    /// The key stored in this node.
    pub fn content(&self) -> &'a T {
        &self.node().content
    }

    /// The node this one hangs from, `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.wrap(self.node().parent)
    }

    /// The root of the left subtree.
    pub fn left(&self) -> Option<Self> {
        self.wrap(self.node().left)
    }

    /// The root of the right subtree.
    pub fn right(&self) -> Option<Self> {
        self.wrap(self.node().right)
    }

    /// Whether this node is not the root.
    pub fn has_parent(&self) -> bool {
        self.node().parent.is_some()
    }

    /// Whether there is a left subtree.
    pub fn has_left(&self) -> bool {
        self.node().left.is_some()
    }

    /// Whether there is a right subtree.
    pub fn has_right(&self) -> bool {
        self.node().right.is_some()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// Whether this node is its parent's left child.
    pub fn is_left_child(&self) -> bool {
        self.node()
            .parent
            .is_some_and(|parent| self.nodes[parent].left == Some(self.id))
    }

    /// Whether this node is its parent's right child.
    pub fn is_right_child(&self) -> bool {
        self.node()
            .parent
            .is_some_and(|parent| self.nodes[parent].right == Some(self.id))
    }

    /// Number of subtrees hanging off this node: 0, 1 or 2.
    pub fn degree(&self) -> usize {
        let node = self.node();
        usize::from(node.left.is_some()) + usize::from(node.right.is_some())
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn count(&self) -> usize {
        self.nodes.subtree_len(self.id)
    }

    /// Edges on the longest path from this node down to a leaf. Leaves have height 0. This is
    /// always computed from the tree's shape; see [`NodeRef::stored_height`] for the AVL field.
    pub fn height(&self) -> usize {
        self.nodes.subtree_height(self.id)
    }

    /// Edges between this node and the root.
    pub fn depth(&self) -> usize {
        self.nodes.depth(self.id)
    }

    /// `depth + 1`: the root is on level 1.
    pub fn level(&self) -> usize {
        self.depth() + 1
    }

    /// The height an AVL tree keeps for this node, `None` outside AVL trees.
    pub fn stored_height(&self) -> Option<usize> {
        self.node().stored_height()
    }

    /// `height(right) - height(left)` over the stored AVL heights, where a missing child counts as
    /// -1. `None` outside AVL trees.
    pub fn balance_factor(&self) -> Option<isize> {
        self.stored_height()?;
        let height = |child: Option<NodeId>| {
            child
                .and_then(|child| self.nodes[child].stored_height())
                .map_or(-1, |height| height as isize)
        };
        let node = self.node();
        Some(height(node.right) - height(node.left))
    }

    /// The color of this node in a Red-Black tree, `None` in other trees.
    pub fn color(&self) -> Option<Color> {
        self.node().color()
    }

    /// Black nodes from here down to a null leaf, the null leaf included. `None` outside
    /// Red-Black trees.
    pub fn black_height(&self) -> Option<usize> {
        self.color()?;
        Some(self.nodes.black_height(self.id))
    }
}
