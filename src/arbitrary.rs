//! [`Arbitrary`] support so downstream property tests can generate trees.

use quickcheck::{Arbitrary, Gen};

use crate::Tree;

/// Inserts `values` one by one into an empty tree, so the tree's shape follows their order.
fn inserted<T: Ord>(values: impl IntoIterator<Item = T>) -> Tree<T> {
    let mut tree = Tree::default();
    for value in values {
        tree.insert(value);
    }
    tree
}

/// Trees are generated by inserting arbitrary values without rebalancing, so they come in all
/// shapes including empty and badly lopsided ones.
impl<T> Arbitrary for Tree<T>
where
    T: Arbitrary + Ord,
{
    fn arbitrary(g: &mut Gen) -> Self {
        inserted(Vec::<T>::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Re-inserting a pre-order sequence rebuilds the same shape, so shrinking it shrinks the
        // tree while keeping what's left of its structure.
        let values: Vec<T> = self.iter_pre_order().map(|n| n.value().clone()).collect();
        Box::new(values.shrink().map(inserted))
    }
}
