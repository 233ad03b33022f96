//! The unbalanced strategy: keys go where the ordering puts them and nothing moves afterwards.

use log::trace;

use super::{private, Balance, TreeKind};
use crate::node::{NodeId, Tag};
use crate::tree::Tree;

/// Balancing strategy of a plain binary search tree, which is no balancing at all. The only
/// variant that permits manual rotation, splitting, and merging.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl private::Sealed for Plain {}

impl Balance for Plain {
    const KIND: TreeKind = TreeKind::Plain;

    fn rebalance_after_insert<T: Ord>(_tree: &mut Tree<T, Self>, _node: NodeId) {}

    fn remove_node<T: Ord>(tree: &mut Tree<T, Self>, node: NodeId) -> T {
        match (tree.left(node), tree.right(node)) {
            (None, None) => tree.remove_leaf(node),
            (Some(child), None) | (None, Some(child)) => tree.splice(node, child),
            (Some(_), Some(right)) => {
                // The successor has no left child, so it can be unlinked directly once it holds
                // the doomed content.
                let successor = tree.min_id(right);
                trace!("{:?} takes the place of {:?}", successor, node);
                tree.nodes.swap_content(node, successor);
                match tree.right(successor) {
                    Some(child) => tree.splice(successor, child),
                    None => tree.remove_leaf(successor),
                }
            }
        }
    }

    fn verify_node<T: Ord>(tree: &Tree<T, Self>, node: NodeId) -> bool {
        matches!(tree.node(node).tag, Tag::Plain)
    }
}
