//! Builds minimal-height trees from sorted values.

use crate::node::{Link, Node};

/// Builds a balanced subtree from strictly ascending `values` and returns its root (`None` for
/// empty input).
///
/// The middle value (at index `len / 2`) becomes the root, the values before it build the left
/// subtree and the values after it build the right subtree, recursively. At every node the two
/// subtrees differ in size by at most one so the height is `floor(log2(len))`. Values are moved
/// into the nodes, never cloned.
///
/// The caller is responsible for `values` being sorted and free of duplicates; the result is not
/// a search tree otherwise.
///
/// # Examples
///
/// ```
/// use balanced_bst::build::build_balanced;
///
/// let root = build_balanced(vec![1, 3, 4, 5, 8]).unwrap();
///
/// assert_eq!(*root.value(), 4);
/// assert_eq!(root.left().map(|n| *n.value()), Some(3));
/// assert_eq!(root.right().map(|n| *n.value()), Some(8));
/// ```
pub fn build_balanced<T>(values: Vec<T>) -> Option<Box<Node<T>>> {
    let len = values.len();
    build(&mut values.into_iter(), len)
}

/// Builds a subtree from the next `len` values of `values`.
///
/// Building the left subtree first consumes exactly the values before the middle one, so the
/// iterator is then positioned at the subtree's root value, followed by the right subtree's.
fn build<T>(values: &mut impl Iterator<Item = T>, len: usize) -> Link<T> {
    if len == 0 {
        return None;
    }

    let mid = len / 2;
    let left = build(values, mid);
    let value = values.next()?;
    let right = build(values, len - mid - 1);

    Some(Node::with_children(value, left, right))
}
