//! Height balancing. Every node stores the height of its subtree, and the heights of any node's
//! two subtrees differ by at most one.
//!
//! Heights count edges: a leaf has height 0 and a missing subtree counts as -1, so the balance
//! factor `height(right) - height(left)` of every node stays within `-1..=1`.

use log::trace;

use super::{private, Balance, TreeKind};
use crate::node::{NodeId, Tag};
use crate::tree::Tree;

/// AVL balancing strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Avl;

impl private::Sealed for Avl {}

fn height<T>(tree: &Tree<T, Avl>, id: Option<NodeId>) -> isize {
    id.and_then(|id| tree.node(id).stored_height())
        .map_or(-1, |height| height as isize)
}

fn balance_factor<T>(tree: &Tree<T, Avl>, id: NodeId) -> isize {
    height(tree, tree.right(id)) - height(tree, tree.left(id))
}

fn update_height<T>(tree: &mut Tree<T, Avl>, id: NodeId) {
    let (left, right) = (height(tree, tree.left(id)), height(tree, tree.right(id)));
    tree.node_mut(id).tag = Tag::Avl {
        height: (left.max(right) + 1) as usize,
    };
}

/// Rotates left at `id` and refreshes the two heights that changed. Returns the new subtree root.
fn rotate_left<T>(tree: &mut Tree<T, Avl>, id: NodeId) -> NodeId {
    let top = tree.rotate_left_at(id).expect("Rotate left => right child");
    update_height(tree, id);
    update_height(tree, top);
    top
}

fn rotate_right<T>(tree: &mut Tree<T, Avl>, id: NodeId) -> NodeId {
    let top = tree
        .rotate_right_at(id)
        .expect("Rotate right => left child");
    update_height(tree, id);
    update_height(tree, top);
    top
}

/// Walks from `start` to the root, refreshing heights and rotating wherever a node leaned too far.
fn rebalance<T>(tree: &mut Tree<T, Avl>, start: NodeId) {
    let mut current = Some(start);
    while let Some(id) = current {
        update_height(tree, id);
        let top = match balance_factor(tree, id) {
            2 => {
                let right = tree.right(id).expect("Right heavy => right child");
                if balance_factor(tree, right) < 0 {
                    trace!("right-left case at {:?}", id);
                    rotate_right(tree, right);
                }
                rotate_left(tree, id)
            }
            -2 => {
                let left = tree.left(id).expect("Left heavy => left child");
                if balance_factor(tree, left) > 0 {
                    trace!("left-right case at {:?}", id);
                    rotate_left(tree, left);
                }
                rotate_right(tree, id)
            }
            _ => id,
        };

        if cfg!(debug_assertions) {
            let factor = balance_factor(tree, top);
            assert!((-1..=1).contains(&factor), "unbalanced after fix: {factor}");
        }
        current = tree.parent(top);
    }
}

impl Balance for Avl {
    const KIND: TreeKind = TreeKind::Avl;

    fn rebalance_after_insert<T: Ord>(tree: &mut Tree<T, Self>, node: NodeId) {
        if let Some(parent) = tree.parent(node) {
            rebalance(tree, parent);
        }
    }

    fn remove_node<T: Ord>(tree: &mut Tree<T, Self>, node: NodeId) -> T {
        // Push the doomed content down into a leaf by swapping with the in-order neighbour on the
        // taller side, then detach that leaf.
        let mut current = node;
        loop {
            let replacement = match (tree.left(current), tree.right(current)) {
                (None, None) => break,
                (Some(left), right) if height(tree, Some(left)) > height(tree, right) => {
                    tree.max_id(left)
                }
                (_, Some(right)) => tree.min_id(right),
                (Some(left), None) => tree.max_id(left),
            };
            tree.nodes.swap_content(current, replacement);
            current = replacement;
        }

        let parent = tree.parent(current);
        let content = tree.remove_leaf(current);
        if let Some(parent) = parent {
            rebalance(tree, parent);
        }
        content
    }

    fn verify_node<T: Ord>(tree: &Tree<T, Self>, node: NodeId) -> bool {
        let Some(stored) = tree.node(node).stored_height() else {
            return false;
        };
        stored == tree.nodes.subtree_height(node) && balance_factor(tree, node).abs() <= 1
    }
}

#[cfg(test)]
mod tests {
    use crate::test::init_logging;
    use crate::{AvlTree, Strategy, TraverseDirection};

    fn root_content(tree: &AvlTree<i32>) -> Option<i32> {
        tree.root().map(|root| *root.content())
    }

    #[test]
    fn left_left_insertion_rotates() {
        init_logging();
        let tree: AvlTree<_> = [4, 2, 1].into_iter().collect();

        assert_eq!(root_content(&tree), Some(2));
        let root = tree.root().unwrap();
        assert_eq!(root.stored_height(), Some(1));
        assert_eq!(root.balance_factor(), Some(0));
        assert!(tree.verify());
    }

    #[test]
    fn right_right_insertion_rotates() {
        init_logging();
        let tree: AvlTree<_> = [2, 6, 1, 3, 11, 12].into_iter().collect();

        assert_eq!(root_content(&tree), Some(6));
        assert_eq!(tree.len(), 6);
        assert!(tree.verify());
    }

    #[test]
    fn double_rotations() {
        init_logging();
        let left_right: AvlTree<_> = [5, 1, 3].into_iter().collect();
        assert_eq!(root_content(&left_right), Some(3));
        assert!(left_right.verify());

        let right_left: AvlTree<_> = [1, 5, 3].into_iter().collect();
        assert_eq!(root_content(&right_left), Some(3));
        assert!(right_left.verify());
    }

    #[test]
    fn removals_keep_balance() {
        init_logging();
        let mut tree: AvlTree<_> = [5, 3, 8, 2, 4, 7, 9, 1, 6].into_iter().collect();
        assert_eq!(tree.len(), 9);

        assert!(tree.remove(&9));
        assert!(tree.remove(&8));
        assert!(tree.remove(&7));
        assert!(!tree.remove(&7));
        assert_eq!(tree.len(), 6);
        assert!(tree.verify());

        let mut sorted = Vec::new();
        tree.traverse(TraverseDirection::Infix, Strategy::Iterative, |key| {
            sorted.push(*key)
        });
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn removing_the_root_with_two_children() {
        init_logging();
        let mut tree: AvlTree<_> = [2, 1, 3].into_iter().collect();

        assert!(tree.remove(&2));
        assert_eq!(tree.len(), 2);
        assert!(tree.verify());
        assert!(tree.contains(&1));
        assert!(tree.contains(&3));
    }

    #[test]
    fn stale_height_fails_verification() {
        let mut tree: AvlTree<_> = [6, 10, 16, 3, 8].into_iter().collect();
        assert!(tree.verify());

        let root = tree.root.unwrap();
        tree.nodes[root].tag = crate::node::Tag::Avl { height: 7 };
        assert!(!tree.verify());
    }

    #[test]
    fn ascending_inserts_stay_logarithmic() {
        let tree: AvlTree<_> = (0..1024).collect();

        assert!(tree.verify());
        // An AVL tree of n nodes is at most ~1.44 log2(n) high.
        assert!(tree.root().unwrap().height() <= 14);
    }
}
