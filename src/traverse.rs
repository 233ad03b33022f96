//! The four classic traversal orders, each available recursively and as an explicit-stack
//! [`Iterator`].

use std::collections::VecDeque;

use crate::arena::Arena;
use crate::node::NodeId;

/// The order in which a traversal visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraverseDirection {
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    Infix,
    /// Node, left subtree, right subtree.
    Prefix,
    /// Left subtree, right subtree, node.
    Postfix,
    /// Level by level from the root, each level left to right.
    Breadth,
}

/// How [`Tree::traverse`](crate::Tree::traverse) walks the tree. Both produce the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Recurse over the node links.
    #[default]
    Recursive,
    /// Drive a [`Traversal`] with its explicit stack or queue.
    Iterative,
}

/// A lazy traversal over a tree's keys. Created by [`Tree::iter`](crate::Tree::iter); every call
/// starts from the root again.
pub struct Traversal<'a, T> {
    nodes: &'a Arena<T>,
    state: State,
}

enum State {
    Prefix(Vec<NodeId>),
    Infix {
        stack: Vec<NodeId>,
        current: Option<NodeId>,
    },
    /// `true` marks nodes whose children were already pushed.
    Postfix(Vec<(NodeId, bool)>),
    Breadth(VecDeque<NodeId>),
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(
        nodes: &'a Arena<T>,
        root: Option<NodeId>,
        direction: TraverseDirection,
    ) -> Self {
        let state = match direction {
            TraverseDirection::Prefix => State::Prefix(root.into_iter().collect()),
            TraverseDirection::Infix => State::Infix {
                stack: Vec::new(),
                current: root,
            },
            TraverseDirection::Postfix => {
                State::Postfix(root.map(|root| (root, false)).into_iter().collect())
            }
            TraverseDirection::Breadth => State::Breadth(root.into_iter().collect()),
        };
        Self { nodes, state }
    }

    fn next_id(&mut self) -> Option<NodeId> {
        let nodes = self.nodes;
        match &mut self.state {
            State::Prefix(stack) => {
                let id = stack.pop()?;
                let node = &nodes[id];
                stack.extend(node.right);
                stack.extend(node.left);
                Some(id)
            }
            State::Infix { stack, current } => {
                while let Some(id) = *current {
                    stack.push(id);
                    *current = nodes[id].left;
                }
                let id = stack.pop()?;
                *current = nodes[id].right;
                Some(id)
            }
            State::Postfix(stack) => loop {
                let (id, expanded) = stack.pop()?;
                if expanded {
                    return Some(id);
                }
                let node = &nodes[id];
                stack.push((id, true));
                stack.extend(node.right.map(|right| (right, false)));
                stack.extend(node.left.map(|left| (left, false)));
            },
            State::Breadth(queue) => {
                let id = queue.pop_front()?;
                let node = &nodes[id];
                queue.extend(node.left);
                queue.extend(node.right);
                Some(id)
            }
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let nodes = self.nodes;
        self.next_id().map(|id| &nodes[id].content)
    }
}

/// Recursive counterpart of [`Traversal`].
pub(crate) fn walk<T, F>(
    nodes: &Arena<T>,
    root: Option<NodeId>,
    direction: TraverseDirection,
    visit: &mut F,
) where
    F: FnMut(&T),
{
    match direction {
        TraverseDirection::Breadth => walk_levels(nodes, root.into_iter().collect(), visit),
        _ => walk_depth_first(nodes, root, direction, visit),
    }
}

fn walk_depth_first<T, F>(
    nodes: &Arena<T>,
    id: Option<NodeId>,
    direction: TraverseDirection,
    visit: &mut F,
) where
    F: FnMut(&T),
{
    let Some(id) = id else {
        return;
    };
    let node = &nodes[id];
    match direction {
        TraverseDirection::Prefix => {
            visit(&node.content);
            walk_depth_first(nodes, node.left, direction, visit);
            walk_depth_first(nodes, node.right, direction, visit);
        }
        TraverseDirection::Infix => {
            walk_depth_first(nodes, node.left, direction, visit);
            visit(&node.content);
            walk_depth_first(nodes, node.right, direction, visit);
        }
        TraverseDirection::Postfix => {
            walk_depth_first(nodes, node.left, direction, visit);
            walk_depth_first(nodes, node.right, direction, visit);
            visit(&node.content);
        }
        TraverseDirection::Breadth => unreachable!("breadth first walks level by level"),
    }
}

fn walk_levels<T, F>(nodes: &Arena<T>, level: Vec<NodeId>, visit: &mut F)
where
    F: FnMut(&T),
{
    if level.is_empty() {
        return;
    }
    let mut next_level = Vec::with_capacity(level.len() * 2);
    for id in level {
        let node = &nodes[id];
        visit(&node.content);
        next_level.extend(node.left);
        next_level.extend(node.right);
    }
    walk_levels(nodes, next_level, visit);
}
