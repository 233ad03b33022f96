//! The binary search tree engine shared by every member of the family.
//!
//! A [`Tree`] owns its nodes in an arena and links them by index, parent links included. The
//! engine implements everything that only depends on the ordering invariant: searching,
//! traversals, order statistics, and the structural primitives (attach, splice, rotate). Where
//! the variants differ it calls into its [`Balance`] strategy.
//!
//! # Examples
//!
//! ```
//! use search_trees::{BinarySearchTree, Strategy, TraverseDirection};
//!
//! let mut tree = BinarySearchTree::new();
//! for key in [5, 3, 7, 2, 1, 4] {
//!     assert!(tree.insert(key));
//! }
//!
//! // Keys are unique.
//! assert!(!tree.insert(4));
//!
//! let mut sorted = Vec::new();
//! tree.traverse(TraverseDirection::Infix, Strategy::Recursive, |key| sorted.push(*key));
//! assert_eq!(sorted, [1, 2, 3, 4, 5, 7]);
//!
//! assert!(tree.remove(&5));
//! assert!(tree.verify());
//! assert_eq!(tree.root().map(|root| *root.content()), Some(7));
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::iter;
use std::marker::PhantomData;

use log::{debug, trace};

use crate::arena::Arena;
use crate::balance::{Balance, Plain, TreeKind};
use crate::error::{Operation, Result};
use crate::node::{Node, NodeId, NodeRef};
use crate::traverse::{self, Strategy, Traversal, TraverseDirection};

/// A binary search tree over unique, totally ordered keys, balanced according to `B`.
///
/// Use the aliases [`BinarySearchTree`](crate::BinarySearchTree), [`AvlTree`](crate::AvlTree),
/// and [`RedBlackTree`](crate::RedBlackTree) rather than naming the strategy directly.
pub struct Tree<T, B = Plain> {
    pub(crate) nodes: Arena<T>,
    pub(crate) root: Option<NodeId>,
    balance: PhantomData<B>,
}

impl<T, B> Default for Tree<T, B>
where
    B: Balance,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B> Clone for Tree<T, B>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            root: self.root,
            balance: PhantomData,
        }
    }
}

impl<T, B> fmt::Debug for Tree<T, B>
where
    T: fmt::Debug,
    B: Balance,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.iter(TraverseDirection::Infix))
            .finish()
    }
}

impl<'a, T, B> IntoIterator for &'a Tree<T, B>
where
    B: Balance,
{
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Traversal<'a, T> {
        self.iter(TraverseDirection::Infix)
    }
}

impl<T, B> FromIterator<T> for Tree<T, B>
where
    T: Ord,
    B: Balance,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T, B> Extend<T> for Tree<T, B>
where
    T: Ord,
    B: Balance,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for content in iter {
            self.insert(content);
        }
    }
}

impl<T, B> Tree<T, B>
where
    B: Balance,
{
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            balance: PhantomData,
        }
    }

    /// The member of the tree family this is.
    pub fn kind(&self) -> TreeKind {
        B::KIND
    }

    /// Number of keys in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every key.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// The root node, `None` for an empty tree.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|root| NodeRef::new(&self.nodes, root))
    }

    /// The smallest key.
    pub fn min(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.min_id(root)].content)
    }

    /// The largest key.
    pub fn max(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.max_id(root)].content)
    }

    /// The key at position `index` of the ascending order, `None` when `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::AvlTree;
    ///
    /// let tree: AvlTree<_> = [64, 7, 93, 59, 73, 95, 70].into_iter().collect();
    ///
    /// assert_eq!(tree.kth_in_order(0), Some(&7));
    /// assert_eq!(tree.kth_in_order(3), Some(&70));
    /// assert_eq!(tree.kth_in_order(7), None);
    /// ```
    pub fn kth_in_order(&self, index: usize) -> Option<&T> {
        let mut current = self.root?;
        let mut index = index;
        loop {
            let node = &self.nodes[current];
            let left_count = node.left.map_or(0, |left| self.nodes.subtree_len(left));
            match index.cmp(&left_count) {
                Ordering::Equal => return Some(&node.content),
                Ordering::Less => current = node.left?,
                Ordering::Greater => {
                    index -= left_count + 1;
                    current = node.right?;
                }
            }
        }
    }

    /// Lazily walks the keys in the given order.
    pub fn iter(&self, direction: TraverseDirection) -> Traversal<'_, T> {
        Traversal::new(&self.nodes, self.root, direction)
    }

    /// Calls `visit` once for every key, in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::{BinarySearchTree, Strategy, TraverseDirection};
    ///
    /// let tree: BinarySearchTree<_> = [7, 3, 1, 4, 9, 8, 15].into_iter().collect();
    ///
    /// let mut levels = Vec::new();
    /// tree.traverse(TraverseDirection::Breadth, Strategy::Iterative, |key| levels.push(*key));
    /// assert_eq!(levels, [7, 3, 9, 1, 4, 8, 15]);
    /// ```
    pub fn traverse<F>(&self, direction: TraverseDirection, strategy: Strategy, mut visit: F)
    where
        F: FnMut(&T),
    {
        match strategy {
            Strategy::Recursive => traverse::walk(&self.nodes, self.root, direction, &mut visit),
            Strategy::Iterative => self.iter(direction).for_each(visit),
        }
    }

    /// Rotates the whole tree left: the root's right child becomes the root. Does nothing when
    /// the root has no right child.
    ///
    /// # Errors
    ///
    /// [`Error::NotSupported`](crate::Error::NotSupported) on balancing trees.
    pub fn rotate_left(&mut self) -> Result<()> {
        B::KIND.ensure_restructurable(Operation::RotateLeft)?;
        if let Some(root) = self.root {
            self.rotate_left_at(root);
        }
        Ok(())
    }

    /// Rotates the whole tree right: the root's left child becomes the root. Does nothing when
    /// the root has no left child.
    ///
    /// # Errors
    ///
    /// [`Error::NotSupported`](crate::Error::NotSupported) on balancing trees.
    pub fn rotate_right(&mut self) -> Result<()> {
        B::KIND.ensure_restructurable(Operation::RotateRight)?;
        if let Some(root) = self.root {
            self.rotate_right_at(root);
        }
        Ok(())
    }

    pub(crate) fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    pub(crate) fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].left
    }

    pub(crate) fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].right
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id]
    }

    pub(crate) fn is_left_child(&self, id: NodeId) -> bool {
        self.parent(id)
            .is_some_and(|parent| self.left(parent) == Some(id))
    }

    pub(crate) fn is_right_child(&self, id: NodeId) -> bool {
        self.parent(id)
            .is_some_and(|parent| self.right(parent) == Some(id))
    }

    /// The other child of `id`'s parent.
    pub(crate) fn sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        if self.left(parent) == Some(id) {
            self.right(parent)
        } else {
            self.left(parent)
        }
    }

    pub(crate) fn min_id(&self, from: NodeId) -> NodeId {
        iter::successors(Some(from), |&id| self.left(id))
            .last()
            .unwrap_or(from)
    }

    pub(crate) fn max_id(&self, from: NodeId) -> NodeId {
        iter::successors(Some(from), |&id| self.right(id))
            .last()
            .unwrap_or(from)
    }

    /// The node holding the next smaller key.
    pub(crate) fn predecessor_id(&self, id: NodeId) -> Option<NodeId> {
        if let Some(left) = self.left(id) {
            return Some(self.max_id(left));
        }
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            if self.right(parent) == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    /// The node holding the next larger key.
    pub(crate) fn successor_id(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.right(id) {
            return Some(self.min_id(right));
        }
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            if self.left(parent) == Some(current) {
                return Some(parent);
            }
            current = parent;
        }
        None
    }

    fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        iter::successors(Some(id), move |&id| self.parent(id))
    }

    /// The deepest node that is an ancestor of (or equal to) both `a` and `b`.
    pub(crate) fn common_ancestor(&self, a: NodeId, b: NodeId) -> Option<NodeId> {
        let ancestors_of_a: HashSet<NodeId> = self.ancestors(a).collect();
        self.ancestors(b).find(|id| ancestors_of_a.contains(id))
    }

    /// Makes `child` the left child of `parent`, fixing the child's back reference.
    pub(crate) fn set_left(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.nodes[parent].left = child;
        if let Some(child) = child {
            self.nodes[child].parent = Some(parent);
        }
    }

    /// Makes `child` the right child of `parent`, fixing the child's back reference.
    pub(crate) fn set_right(&mut self, parent: NodeId, child: Option<NodeId>) {
        self.nodes[parent].right = child;
        if let Some(child) = child {
            self.nodes[child].parent = Some(parent);
        }
    }

    /// Puts `new` into the slot of `parent` that currently holds `old`, or makes it the root when
    /// there is no parent.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) if self.left(parent) == Some(old) => self.nodes[parent].left = new,
            Some(parent) => self.nodes[parent].right = new,
        }
        if let Some(new) = new {
            self.nodes[new].parent = parent;
        }
    }

    /// Unlinks a childless node and releases it.
    pub(crate) fn remove_leaf(&mut self, id: NodeId) -> T {
        debug_assert!(self.nodes[id].is_leaf(), "only leaves can be detached");
        let parent = self.parent(id);
        self.replace_child(parent, id, None);
        trace!("detached leaf {:?}", id);
        self.nodes.release(id).content
    }

    /// Replaces a node that has the single child `child` by that child and releases it.
    pub(crate) fn splice(&mut self, id: NodeId, child: NodeId) -> T {
        let parent = self.parent(id);
        self.replace_child(parent, id, Some(child));
        trace!("spliced {:?} out, {:?} takes its place", id, child);
        self.nodes.release(id).content
    }

    /// Rotates the subtree rooted at `id` to the left and returns the subtree's new root, or
    /// `None` (leaving everything untouched) when `id` has no right child.
    ///
    /// ```text
    ///      id                pivot
    ///     /  \               /   \
    ///    a   pivot   ->     id    c
    ///        /   \         /  \
    ///       b     c       a    b
    /// ```
    pub(crate) fn rotate_left_at(&mut self, id: NodeId) -> Option<NodeId> {
        let pivot = self.right(id)?;
        let parent = self.parent(id);
        let inner = self.left(pivot);

        self.set_right(id, inner);
        self.set_left(pivot, Some(id));
        self.replace_child(parent, id, Some(pivot));
        trace!("rotated left at {:?}, {:?} moved up", id, pivot);
        Some(pivot)
    }

    /// Mirror image of [`Tree::rotate_left_at`].
    pub(crate) fn rotate_right_at(&mut self, id: NodeId) -> Option<NodeId> {
        let pivot = self.left(id)?;
        let parent = self.parent(id);
        let inner = self.right(pivot);

        self.set_left(id, inner);
        self.set_right(pivot, Some(id));
        self.replace_child(parent, id, Some(pivot));
        trace!("rotated right at {:?}, {:?} moved up", id, pivot);
        Some(pivot)
    }

    /// Moves every node of `other` into this tree's arena, leaving `other` empty. Returns the
    /// id of `other`'s former root, which is not linked to anything yet.
    fn adopt(&mut self, other: &mut Self) -> Option<NodeId> {
        let root = other
            .root
            .take()
            .map(|root| self.nodes.transplant(&mut other.nodes, root));
        other.clear();
        root
    }

    /// Moves the subtree rooted at `root` out into a tree of its own.
    fn extract(&mut self, root: Option<NodeId>) -> Self {
        let mut tree = Self::new();
        tree.root = root.map(|root| tree.nodes.transplant(&mut self.nodes, root));
        tree
    }

    /// Joins two detached subtrees where every key of `lesser` is smaller than every key of
    /// `greater`. The taller one stays on top and the other is merged into its inner side.
    fn merge_roots(&mut self, lesser: Option<NodeId>, greater: Option<NodeId>) -> Option<NodeId> {
        match (lesser, greater) {
            (None, side) | (side, None) => side,
            (Some(lesser), Some(greater)) => {
                if self.nodes.subtree_height(lesser) > self.nodes.subtree_height(greater) {
                    let right = self.right(lesser);
                    let merged = self.merge_roots(right, Some(greater));
                    self.set_right(lesser, merged);
                    Some(lesser)
                } else {
                    let left = self.left(greater);
                    let merged = self.merge_roots(Some(lesser), left);
                    self.set_left(greater, merged);
                    Some(greater)
                }
            }
        }
    }
}

impl<T, B> Tree<T, B>
where
    T: Ord,
    B: Balance,
{
    /// Inserts `content` unless an equal key is already present. Returns whether the tree
    /// changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert!(tree.insert(4));
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    ///
    /// assert_eq!(tree.root().map(|root| *root.content()), Some(2));
    /// assert!(tree.verify());
    /// ```
    pub fn insert(&mut self, content: T) -> bool {
        if self.find_id(&content).is_some() {
            return false;
        }
        let id = self.nodes.alloc(Node::new(content, B::KIND.fresh_tag()));
        match self.root {
            None => self.root = Some(id),
            Some(root) => self.attach(root, id),
        }
        B::rebalance_after_insert(self, id);
        true
    }

    /// Finds the node holding `content`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [5, 3, 7].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&3).map(|node| *node.content()), Some(3));
    /// assert!(tree.find(&4).is_none());
    /// ```
    pub fn find(&self, content: &T) -> Option<NodeRef<'_, T>> {
        self.find_id(content)
            .map(|id| NodeRef::new(&self.nodes, id))
    }

    /// Whether `content` is in the tree.
    pub fn contains(&self, content: &T) -> bool {
        self.find_id(content).is_some()
    }

    /// Removes `content` and returns whether it was present.
    pub fn remove(&mut self, content: &T) -> bool {
        self.take(content).is_some()
    }

    /// Removes `content` and hands back the key that was stored for it.
    pub fn take(&mut self, content: &T) -> Option<T> {
        let id = self.find_id(content)?;
        Some(B::remove_node(self, id))
    }

    /// Checks the ordering invariant and the parent links of every node, plus the invariant of
    /// the balancing scheme.
    pub fn verify(&self) -> bool {
        let Some(root) = self.root else {
            return true;
        };
        if self.parent(root).is_some() {
            return false;
        }

        let mut pending: Vec<(NodeId, Option<&T>, Option<&T>)> = vec![(root, None, None)];
        while let Some((id, lower, upper)) = pending.pop() {
            let node = &self.nodes[id];
            let content = &node.content;
            if lower.is_some_and(|lower| lower >= content)
                || upper.is_some_and(|upper| content >= upper)
            {
                return false;
            }
            let children = [node.left, node.right];
            if children
                .into_iter()
                .flatten()
                .any(|child| self.parent(child) != Some(id))
            {
                return false;
            }
            if !B::verify_node(self, id) {
                return false;
            }
            if let Some(left) = node.left {
                pending.push((left, lower, Some(content)));
            }
            if let Some(right) = node.right {
                pending.push((right, Some(content), upper));
            }
        }
        true
    }

    /// The node holding the largest key smaller than `content`. `None` when `content` is absent
    /// or already the smallest key.
    pub fn predecessor(&self, content: &T) -> Option<NodeRef<'_, T>> {
        let id = self.predecessor_id(self.find_id(content)?)?;
        Some(NodeRef::new(&self.nodes, id))
    }

    /// The node holding the smallest key larger than `content`. `None` when `content` is absent
    /// or already the largest key.
    pub fn successor(&self, content: &T) -> Option<NodeRef<'_, T>> {
        let id = self.successor_id(self.find_id(content)?)?;
        Some(NodeRef::new(&self.nodes, id))
    }

    /// Splits the tree around `key`. This tree keeps `key` and every larger key; the returned
    /// tree gets every smaller key. Returns `Ok(None)`, and changes nothing, when `key` is
    /// absent.
    ///
    /// # Errors
    ///
    /// [`Error::NotSupported`](crate::Error::NotSupported) on balancing trees.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = [25, 10, 35, 6, 19, 27, 40].into_iter().collect();
    ///
    /// let lesser = tree.split_by_key(&19).unwrap().unwrap();
    /// assert_eq!(lesser.into_iter().copied().collect::<Vec<_>>(), [6, 10]);
    /// assert_eq!(tree.into_iter().copied().collect::<Vec<_>>(), [19, 25, 27, 35, 40]);
    ///
    /// assert!(tree.split_by_key(&26).unwrap().is_none());
    /// ```
    pub fn split_by_key(&mut self, key: &T) -> Result<Option<Self>> {
        B::KIND.ensure_restructurable(Operation::SplitByKey)?;
        let Some(splitter) = self.find_id(key) else {
            debug!("split key is absent, leaving the tree alone");
            return Ok(None);
        };

        let mut lesser = self.left(splitter);
        let mut greater = self.right(splitter);
        let mut parent = self.parent(splitter);
        {
            let node = self.node_mut(splitter);
            node.left = None;
            node.right = None;
            node.parent = None;
        }
        for side in [lesser, greater].into_iter().flatten() {
            self.nodes[side].parent = None;
        }

        // Climb to the root. Every ancestor reached from its left side is larger than the key, so
        // it adopts the larger half below it as its new left subtree and becomes the top of the
        // larger half. Ancestors reached from the right mirror that into the smaller half.
        let mut current = splitter;
        while let Some(ancestor) = parent {
            parent = self.parent(ancestor);
            if self.left(ancestor) == Some(current) {
                self.set_left(ancestor, greater);
                greater = Some(ancestor);
            } else {
                self.set_right(ancestor, lesser);
                lesser = Some(ancestor);
            }
            self.nodes[ancestor].parent = None;
            current = ancestor;
        }

        // The splitter is the smallest key of the larger half.
        match greater {
            Some(greater) => {
                let smallest = self.min_id(greater);
                self.set_left(smallest, Some(splitter));
            }
            None => greater = Some(splitter),
        }
        self.root = greater;

        trace!("split at {:?}", splitter);
        Ok(Some(self.extract(lesser)))
    }

    /// Moves every key of `other` into this tree, leaving `other` empty. Every key of `other`
    /// must be larger than every key of this tree. When that does not hold nothing happens, to
    /// either tree; overlapping trees are never interleaved.
    ///
    /// # Errors
    ///
    /// [`Error::NotSupported`](crate::Error::NotSupported) on balancing trees.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::BinarySearchTree;
    ///
    /// let mut tree: BinarySearchTree<_> = [10, 6].into_iter().collect();
    /// let mut overlapping: BinarySearchTree<_> = [4].into_iter().collect();
    /// let mut larger: BinarySearchTree<_> = [19].into_iter().collect();
    ///
    /// tree.merge_with(&mut overlapping).unwrap();
    /// assert!(!tree.contains(&4));
    /// assert_eq!(overlapping.len(), 1);
    ///
    /// tree.merge_with(&mut larger).unwrap();
    /// assert!(tree.contains(&19));
    /// assert!(larger.is_empty());
    /// assert!(tree.verify());
    /// ```
    pub fn merge_with(&mut self, other: &mut Self) -> Result<()> {
        B::KIND.ensure_restructurable(Operation::MergeWith)?;
        if other.is_empty() {
            return Ok(());
        }
        if let (Some(max), Some(min)) = (self.max(), other.min()) {
            if max >= min {
                debug!("merge skipped, the trees' key ranges overlap");
                return Ok(());
            }
        }

        let incoming = self.adopt(other);
        self.root = self.merge_roots(self.root, incoming);
        if let Some(root) = self.root {
            self.nodes[root].parent = None;
        }
        trace!("merged, {} keys in total", self.len());
        Ok(())
    }

    /// The deepest node that has both keys in its subtree. `None` when either key is absent.
    pub fn common_root(&self, a: &T, b: &T) -> Option<NodeRef<'_, T>> {
        let a = self.find_id(a)?;
        let b = self.find_id(b)?;
        let id = self.common_ancestor(a, b)?;
        Some(NodeRef::new(&self.nodes, id))
    }

    /// Edges on the path between the nodes holding `a` and `b`. `None` when either key is
    /// absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_trees::AvlTree;
    ///
    /// let tree: AvlTree<_> = [6, 10, 16, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.distance_between(&3, &16), Some(3));
    /// assert_eq!(tree.distance_between(&3, &8), Some(2));
    /// assert_eq!(tree.distance_between(&10, &10), Some(0));
    /// assert_eq!(tree.distance_between(&1, &10), None);
    /// ```
    pub fn distance_between(&self, a: &T, b: &T) -> Option<usize> {
        let first = self.find_id(a)?;
        let second = self.find_id(b)?;
        if first == second {
            return Some(0);
        }
        let common = self.common_ancestor(first, second)?;
        Some(self.edges_down(common, a) + self.edges_down(common, b))
    }

    pub(crate) fn find_id(&self, content: &T) -> Option<NodeId> {
        let mut current = self.root?;
        loop {
            let node = &self.nodes[current];
            current = match content.cmp(&node.content) {
                Ordering::Equal => return Some(current),
                Ordering::Less => node.left?,
                Ordering::Greater => node.right?,
            };
        }
    }

    /// Hangs the detached node `id` below the leaf reached by descending from `from`.
    fn attach(&mut self, from: NodeId, id: NodeId) {
        let mut current = from;
        loop {
            let goes_left = self.nodes[current].content > self.nodes[id].content;
            let next = if goes_left {
                self.left(current)
            } else {
                self.right(current)
            };
            match next {
                Some(next) => current = next,
                None if goes_left => {
                    self.set_left(current, Some(id));
                    break;
                }
                None => {
                    self.set_right(current, Some(id));
                    break;
                }
            }
        }

        if cfg!(debug_assertions) {
            let parent = &self.nodes[current];
            if let Some(left) = parent.left {
                assert!(self.nodes[left].content < parent.content);
            }
            if let Some(right) = parent.right {
                assert!(self.nodes[right].content > parent.content);
            }
        }
    }

    /// Edges from `from` down to the node holding `content`, which must be in `from`'s subtree.
    fn edges_down(&self, from: NodeId, content: &T) -> usize {
        let mut current = from;
        let mut edges = 0;
        loop {
            let node = &self.nodes[current];
            current = match content.cmp(&node.content) {
                Ordering::Equal => return edges,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            }
            .expect("The key lives below its common root");
            edges += 1;
        }
    }
}
