use search_trees::{AvlTree, BinarySearchTree, Error, Operation, TreeKind};

use crate::{build, model};

quickcheck::quickcheck! {
    fn split_then_merge_round_trips(xs: Vec<i16>, pick: usize) -> bool {
        let mut tree: BinarySearchTree<_> = build(&xs);
        let expected = model(&xs);
        let Some(key) = expected.get(pick % expected.len().max(1)).copied() else {
            return tree.split_by_key(&0).map(|split| split.is_none()).unwrap_or(false);
        };

        let mut lesser = match tree.split_by_key(&key) {
            Ok(Some(lesser)) => lesser,
            _ => return false,
        };
        let halves_valid = tree.verify()
            && lesser.verify()
            && tree.min() == Some(&key)
            && lesser.max().is_none_or(|max| *max < key)
            && lesser.len() + tree.len() == expected.len();

        if lesser.merge_with(&mut tree).is_err() {
            return false;
        }
        halves_valid
            && tree.is_empty()
            && lesser.verify()
            && lesser.into_iter().copied().eq(expected)
    }
}

quickcheck::quickcheck! {
    fn overlapping_merge_is_a_no_op(xs: Vec<i16>, ys: Vec<i16>) -> bool {
        let mut tree: BinarySearchTree<_> = build(&xs);
        let mut other: BinarySearchTree<_> = build(&ys);
        let overlaps = match (tree.max(), other.min()) {
            (Some(max), Some(min)) => max >= min,
            _ => false,
        };
        let (len, other_len) = (tree.len(), other.len());

        if tree.merge_with(&mut other).is_err() {
            return false;
        }
        if overlaps {
            tree.len() == len && other.len() == other_len
        } else {
            tree.len() == len + other_len && other.is_empty() && tree.verify()
        }
    }
}

quickcheck::quickcheck! {
    fn rotations_preserve_order(xs: Vec<i16>, lefts: Vec<bool>) -> bool {
        let mut tree: BinarySearchTree<_> = build(&xs);
        for left in lefts {
            let rotated = if left { tree.rotate_left() } else { tree.rotate_right() };
            if rotated.is_err() || !tree.verify() {
                return false;
            }
        }
        tree.into_iter().copied().eq(model(&xs))
    }
}

#[test]
fn balanced_trees_reject_manual_restructuring() {
    let mut tree: AvlTree<_> = build(&[10, 6, 16, 3, 8]);

    let error = tree.rotate_right().unwrap_err();
    assert_eq!(
        error,
        Error::NotSupported {
            operation: Operation::RotateRight,
            kind: TreeKind::Avl,
        }
    );
    assert_eq!(
        error.to_string(),
        "manual rotate-right is not supported on AVL trees"
    );
    assert_eq!(tree.root().map(|root| *root.content()), Some(10));
}
