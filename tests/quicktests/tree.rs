use balanced_bst::{Order, Tree, TreeError};

use std::collections::{BTreeSet, HashSet};

/// Builds a tree by inserting `xs` in order into an empty tree.
fn inserted(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::default();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

/// Collects the values of a traversal in the given order.
fn visited(tree: &Tree<i8>, order: Order) -> Vec<i8> {
    let mut values = Vec::new();
    tree.traverse(order, Some(|n: &balanced_bst::Node<i8>| values.push(*n.value())))
        .unwrap();
    values
}

quickcheck::quickcheck! {
    fn build_is_sorted_and_unique(xs: Vec<i8>) -> bool {
        match Tree::build(xs.clone()) {
            Ok(tree) => {
                let expected: Vec<i8> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
                visited(&tree, Order::In) == expected
            }
            Err(e) => xs.is_empty() && e == TreeError::Construction,
        }
    }
}

quickcheck::quickcheck! {
    fn build_has_minimal_height(xs: Vec<i16>) -> bool {
        let Ok(tree) = Tree::build(xs) else {
            return true;
        };

        // ceil(log2(n + 1)) is the number of bits needed to write `n`.
        let n = tree.len();
        let bound = (usize::BITS - n.leading_zeros()) as isize;
        tree.height() <= bound && tree.is_balanced() && tree.is_height_balanced()
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = inserted(&xs);
        xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = inserted(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn insert_existing_changes_nothing(xs: Vec<i8>) -> bool {
        let mut tree = inserted(&xs);
        let before = visited(&tree, Order::Pre);

        let reinserted = xs.iter().any(|x| tree.insert(*x));
        !reinserted && visited(&tree, Order::Pre) == before
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = inserted(&xs);
        let mut model: BTreeSet<i8> = xs.iter().copied().collect();

        for delete in &deletes {
            let expected = if model.remove(delete) {
                Ok(*delete)
            } else {
                Err(TreeError::NotFound)
            };
            if tree.delete(delete) != expected || tree.find(delete).is_some() {
                return false;
            }
        }

        model.iter().all(|x| tree.contains(x)) && tree.iter().eq(model.iter())
    }
}

quickcheck::quickcheck! {
    fn delete_root_repeatedly(xs: Vec<i8>) -> bool {
        let mut tree = inserted(&xs);
        let mut remaining = tree.len();

        while let Some(root) = tree.root().map(|n| *n.value()) {
            if tree.delete(&root) != Ok(root) || tree.contains(&root) {
                return false;
            }
            remaining -= 1;
            if tree.len() != remaining || !visited(&tree, Order::In).windows(2).all(|w| w[0] < w[1]) {
                return false;
            }
        }

        remaining == 0 && tree.is_empty()
    }
}

quickcheck::quickcheck! {
    fn rebalance_preserves_values(xs: Vec<i8>) -> bool {
        let mut tree = inserted(&xs);
        let before = visited(&tree, Order::In);

        tree.rebalance();

        visited(&tree, Order::In) == before && tree.is_balanced() && tree.is_height_balanced()
    }
}

quickcheck::quickcheck! {
    fn traversals_visit_every_node_once(xs: Vec<i8>) -> bool {
        let tree = inserted(&xs);
        let mut expected = visited(&tree, Order::In);
        expected.sort_unstable();

        [Order::Level, Order::Pre, Order::Post].into_iter().all(|order| {
            let mut values = visited(&tree, order);
            values.sort_unstable();
            values == expected
        })
    }
}

quickcheck::quickcheck! {
    fn level_order_is_by_depth(xs: Vec<i8>) -> bool {
        let tree = inserted(&xs);
        let depths: Vec<usize> = tree
            .iter_level_order()
            .map(|n| tree.depth(n).unwrap())
            .collect();

        depths.windows(2).all(|w| w[0] <= w[1])
    }
}
