//! Color balancing.
//!
//! Every node is red or black, the root is black, a red node never has a red child, and every
//! path from a node down to a missing child passes the same number of black nodes. Missing
//! children count as black.

use log::trace;

use super::{private, Balance, TreeKind};
use crate::node::{Color, NodeId, Tag};
use crate::tree::Tree;

/// Red-Black balancing strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedBlack;

impl private::Sealed for RedBlack {}

fn is_red<T>(tree: &Tree<T, RedBlack>, id: Option<NodeId>) -> bool {
    id.and_then(|id| tree.node(id).color()) == Some(Color::Red)
}

fn set_color<T>(tree: &mut Tree<T, RedBlack>, id: NodeId, color: Color) {
    tree.node_mut(id).tag = Tag::RedBlack { color };
}

fn color_of<T>(tree: &Tree<T, RedBlack>, id: NodeId) -> Color {
    tree.node(id).color().unwrap_or(Color::Black)
}

/// Rotates at `parent` so that it moves down to its left side, or its right side when
/// `towards_left` is false.
fn rotate_down<T>(tree: &mut Tree<T, RedBlack>, parent: NodeId, towards_left: bool) {
    let top = if towards_left {
        tree.rotate_left_at(parent)
    } else {
        tree.rotate_right_at(parent)
    };
    debug_assert!(top.is_some(), "rotating down needs a child on the far side");
}

fn fix_after_insert<T>(tree: &mut Tree<T, RedBlack>, node: NodeId) {
    let mut node = node;
    loop {
        let Some(parent) = tree.parent(node) else {
            set_color(tree, node, Color::Black);
            return;
        };
        if !is_red(tree, Some(parent)) {
            return;
        }
        let grandparent = tree
            .parent(parent)
            .expect("Red parent => parent is not the root");

        let uncle = tree.sibling(parent);
        if let Some(uncle) = uncle.filter(|&uncle| is_red(tree, Some(uncle))) {
            trace!("red uncle {:?}, recoloring", uncle);
            set_color(tree, parent, Color::Black);
            set_color(tree, uncle, Color::Black);
            set_color(tree, grandparent, Color::Red);
            node = grandparent;
            continue;
        }

        let parent_is_left = tree.is_left_child(parent);
        let mut parent = parent;
        // Straighten a zig-zag first so the final rotation lifts the middle key.
        if parent_is_left && tree.is_right_child(node) {
            tree.rotate_left_at(parent);
            parent = node;
        } else if !parent_is_left && tree.is_left_child(node) {
            tree.rotate_right_at(parent);
            parent = node;
        }

        set_color(tree, parent, Color::Black);
        set_color(tree, grandparent, Color::Red);
        rotate_down(tree, grandparent, !parent_is_left);
        return;
    }
}

/// Restores the black height around the black leaf `node` before it is detached.
fn fix_before_remove<T>(tree: &mut Tree<T, RedBlack>, node: NodeId) {
    let mut node = node;
    while let Some(parent) = tree.parent(node) {
        let node_is_left = tree.left(parent) == Some(node);
        let sibling_of = |tree: &Tree<T, RedBlack>| {
            let sibling = if node_is_left {
                tree.right(parent)
            } else {
                tree.left(parent)
            };
            sibling.expect("Black node => sibling subtree")
        };

        let mut sibling = sibling_of(tree);
        if is_red(tree, Some(sibling)) {
            trace!("red sibling {:?}, rotating it up", sibling);
            set_color(tree, sibling, Color::Black);
            set_color(tree, parent, Color::Red);
            rotate_down(tree, parent, node_is_left);
            sibling = sibling_of(tree);
        }

        let (near, far) = if node_is_left {
            (tree.left(sibling), tree.right(sibling))
        } else {
            (tree.right(sibling), tree.left(sibling))
        };

        if !is_red(tree, near) && !is_red(tree, far) {
            set_color(tree, sibling, Color::Red);
            if is_red(tree, Some(parent)) {
                set_color(tree, parent, Color::Black);
                return;
            }
            node = parent;
            continue;
        }

        if !is_red(tree, far) {
            let near = near.expect("Red near nephew => near nephew");
            set_color(tree, near, Color::Black);
            set_color(tree, sibling, Color::Red);
            rotate_down(tree, sibling, !node_is_left);
            sibling = near;
        }

        let far = if node_is_left {
            tree.right(sibling)
        } else {
            tree.left(sibling)
        }
        .expect("Red far nephew => far nephew");
        let parent_color = color_of(tree, parent);
        set_color(tree, sibling, parent_color);
        set_color(tree, parent, Color::Black);
        set_color(tree, far, Color::Black);
        rotate_down(tree, parent, node_is_left);
        return;
    }
}

impl Balance for RedBlack {
    const KIND: TreeKind = TreeKind::RedBlack;

    fn rebalance_after_insert<T: Ord>(tree: &mut Tree<T, Self>, node: NodeId) {
        fix_after_insert(tree, node);
    }

    fn remove_node<T: Ord>(tree: &mut Tree<T, Self>, node: NodeId) -> T {
        // Move the doomed content down until it sits in a leaf.
        let mut current = node;
        loop {
            current = match (tree.left(current), tree.right(current)) {
                (None, None) => break,
                (Some(left), Some(right)) => {
                    let taller_left =
                        tree.nodes.subtree_height(left) > tree.nodes.subtree_height(right);
                    let replacement = if taller_left {
                        tree.max_id(left)
                    } else {
                        tree.min_id(right)
                    };
                    tree.nodes.swap_content(current, replacement);
                    replacement
                }
                // A lone child is a red leaf under a black node.
                (Some(child), None) | (None, Some(child)) => {
                    debug_assert!(is_red(tree, Some(child)) && !is_red(tree, Some(current)));
                    tree.nodes.swap_content(current, child);
                    child
                }
            };
        }

        if !is_red(tree, Some(current)) {
            fix_before_remove(tree, current);
        }
        tree.remove_leaf(current)
    }

    fn verify_node<T: Ord>(tree: &Tree<T, Self>, node: NodeId) -> bool {
        let Some(color) = tree.node(node).color() else {
            return false;
        };
        let (left, right) = (tree.left(node), tree.right(node));
        if color == Color::Red
            && (tree.parent(node).is_none() || is_red(tree, left) || is_red(tree, right))
        {
            return false;
        }
        let black_height =
            |child: Option<NodeId>| child.map_or(1, |id| tree.nodes.black_height(id));
        black_height(left) == black_height(right)
    }
}
