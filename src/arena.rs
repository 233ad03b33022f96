//! Index-addressed node storage. A tree owns exactly one `Arena` and every link between its nodes
//! is a [`NodeId`] into it, so parent back references never own anything.

use std::mem;
use std::ops::{Index, IndexMut};

use crate::node::{Color, Node, NodeId};

#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    vacant: Vec<usize>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
            len: 0,
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
        self.len = 0;
    }

    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        self.len += 1;
        match self.vacant.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Frees the slot of `id` and hands back the node that lived there. Links pointing at `id`
    /// must have been cleared by the caller.
    pub(crate) fn release(&mut self, id: NodeId) -> Node<T> {
        let node = self.slots[id.0]
            .take()
            .expect("Releasing a node requires a live slot");
        self.vacant.push(id.0);
        self.len -= 1;
        node
    }

    /// Exchanges the contents of two live nodes, leaving their links alone.
    pub(crate) fn swap_content(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (low, high) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.slots.split_at_mut(high);
        let low = head[low].as_mut().expect("Swapping requires live nodes");
        let high = tail[0].as_mut().expect("Swapping requires live nodes");
        mem::swap(&mut low.content, &mut high.content);
    }

    /// Moves the subtree rooted at `root` out of `source` and into `self`, preserving its shape.
    /// Returns the id of the subtree's root in `self`; that root has no parent.
    pub(crate) fn transplant(&mut self, source: &mut Arena<T>, root: NodeId) -> NodeId {
        let mut new_root = None;
        // (id in `source`, new parent in `self`, is that parent's left child)
        let mut pending = vec![(root, None, false)];
        while let Some((old, parent, is_left)) = pending.pop() {
            let node = source.release(old);
            let (left, right) = (node.left, node.right);
            let id = self.alloc(Node {
                parent,
                left: None,
                right: None,
                ..node
            });
            match parent {
                None => new_root = Some(id),
                Some(parent) if is_left => self[parent].left = Some(id),
                Some(parent) => self[parent].right = Some(id),
            }
            if let Some(right) = right {
                pending.push((right, Some(id), false));
            }
            if let Some(left) = left {
                pending.push((left, Some(id), true));
            }
        }
        new_root.expect("Transplanting always moves at least the root")
    }

    /// Number of nodes in the subtree rooted at `id`.
    pub(crate) fn subtree_len(&self, id: NodeId) -> usize {
        let mut count = 0;
        let mut pending = vec![id];
        while let Some(id) = pending.pop() {
            count += 1;
            let node = &self[id];
            pending.extend(node.left);
            pending.extend(node.right);
        }
        count
    }

    /// Edges on the longest downward path from `id` to a leaf.
    pub(crate) fn subtree_height(&self, id: NodeId) -> usize {
        let mut height = 0;
        let mut pending = vec![(id, 0)];
        while let Some((id, depth)) = pending.pop() {
            height = height.max(depth);
            let node = &self[id];
            pending.extend(node.left.map(|left| (left, depth + 1)));
            pending.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }

    /// Edges from `id` up to the root.
    pub(crate) fn depth(&self, id: NodeId) -> usize {
        std::iter::successors(self[id].parent, |&parent| self[parent].parent).count()
    }

    /// Black nodes on the path from `id` down to a null leaf, counting the null leaf itself. The
    /// path follows the left child when there is one, else the right child.
    pub(crate) fn black_height(&self, id: NodeId) -> usize {
        let mut height = 1;
        let mut current = Some(id);
        while let Some(id) = current {
            let node = &self[id];
            if node.color() == Some(Color::Black) {
                height += 1;
            }
            current = node.left.or(node.right);
        }
        height
    }
}

impl<T> Index<NodeId> for Arena<T> {
    type Output = Node<T>;

    fn index(&self, id: NodeId) -> &Node<T> {
        self.slots[id.0]
            .as_ref()
            .expect("Node ids always refer to live nodes")
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots[id.0]
            .as_mut()
            .expect("Node ids always refer to live nodes")
    }
}
