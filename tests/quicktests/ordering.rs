use std::collections::HashSet;

use search_trees::{
    AvlTree, Balance, BinarySearchTree, RedBlackTree, Strategy, TraverseDirection, Tree,
};

use crate::{build, model};

fn sorted_views_agree<B: Balance>(xs: &[i16]) -> bool {
    let tree: Tree<i16, B> = build(xs);
    let expected = model(xs);

    let infix: Vec<_> = tree.iter(TraverseDirection::Infix).copied().collect();
    let kth: Vec<_> = (0..tree.len())
        .filter_map(|i| tree.kth_in_order(i))
        .copied()
        .collect();

    infix == expected
        && kth == expected
        && tree.kth_in_order(tree.len()).is_none()
        && tree.min() == expected.first()
        && tree.max() == expected.last()
        && tree.len() == expected.len()
        && tree.verify()
}

fn strategies_agree<B: Balance>(xs: &[i16]) -> bool {
    let tree: Tree<i16, B> = build(xs);
    [
        TraverseDirection::Infix,
        TraverseDirection::Prefix,
        TraverseDirection::Postfix,
        TraverseDirection::Breadth,
    ]
    .into_iter()
    .all(|direction| {
        let mut recursive = Vec::new();
        tree.traverse(direction, Strategy::Recursive, |key| recursive.push(*key));
        let mut iterative = Vec::new();
        tree.traverse(direction, Strategy::Iterative, |key| iterative.push(*key));
        recursive == iterative && recursive.len() == tree.len()
    })
}

/// Path length between two nodes measured by walking parent links.
fn path_len<B: Balance>(tree: &Tree<i16, B>, a: &i16, b: &i16) -> Option<usize> {
    let ancestors = |key: &i16| {
        let node = tree.find(key)?;
        let path = std::iter::successors(Some(node), |node| node.parent());
        Some(path.collect::<Vec<_>>())
    };
    let from_a = ancestors(a)?;
    let from_b = ancestors(b)?;
    let (up, common) = from_a
        .iter()
        .enumerate()
        .find(|(_, node)| from_b.contains(*node))?;
    let down = from_b.iter().position(|node| node == common)?;
    Some(up + down)
}

fn distances_follow_paths<B: Balance>(xs: &[i16], probes: &[(i16, i16)]) -> bool {
    let tree: Tree<i16, B> = build(xs);
    probes
        .iter()
        .all(|(a, b)| tree.distance_between(a, b) == path_len(&tree, a, b))
}

quickcheck::quickcheck! {
    fn sorted_views(xs: Vec<i16>) -> bool {
        sorted_views_agree::<search_trees::Plain>(&xs)
            && sorted_views_agree::<search_trees::Avl>(&xs)
            && sorted_views_agree::<search_trees::RedBlack>(&xs)
    }
}

quickcheck::quickcheck! {
    fn traversal_strategies(xs: Vec<i16>) -> bool {
        strategies_agree::<search_trees::Plain>(&xs)
            && strategies_agree::<search_trees::Avl>(&xs)
            && strategies_agree::<search_trees::RedBlack>(&xs)
    }
}

quickcheck::quickcheck! {
    fn distances(xs: Vec<i16>, probes: Vec<(i16, i16)>) -> bool {
        let probes: Vec<_> = probes
            .into_iter()
            .chain(xs.iter().zip(xs.iter().rev()).map(|(a, b)| (*a, *b)))
            .collect();
        distances_follow_paths::<search_trees::Plain>(&xs, &probes)
            && distances_follow_paths::<search_trees::Avl>(&xs, &probes)
            && distances_follow_paths::<search_trees::RedBlack>(&xs, &probes)
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i16>) -> bool {
        let tree: AvlTree<_> = build(&xs);
        xs.iter().all(|x| tree.find(x).map(|node| node.content()) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i16>, nots: Vec<i16>) -> bool {
        let tree: RedBlackTree<_> = build(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none() && tree.predecessor(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i16>, deletes: Vec<i16>) -> bool {
        let mut tree: BinarySearchTree<_> = build(&xs);
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        tree.verify()
            && deletes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x).is_some())
    }
}

quickcheck::quickcheck! {
    fn duplicate_inserts_change_nothing(xs: Vec<i16>) -> bool {
        let mut tree: RedBlackTree<_> = build(&xs);
        let before: Vec<_> = tree.iter(TraverseDirection::Prefix).copied().collect();

        xs.iter().all(|x| !tree.insert(*x))
            && tree.iter(TraverseDirection::Prefix).copied().eq(before)
    }
}
