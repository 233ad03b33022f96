//! Property tests over the public API of every tree variant.

mod ordering;
mod restructuring;

use search_trees::{Balance, Tree};

/// Bulk inserts `xs`, duplicates included.
pub(crate) fn build<B: Balance>(xs: &[i16]) -> Tree<i16, B> {
    xs.iter().copied().collect()
}

/// The sorted, deduplicated keys.
pub(crate) fn model(xs: &[i16]) -> Vec<i16> {
    let mut keys = xs.to_vec();
    keys.sort_unstable();
    keys.dedup();
    keys
}
