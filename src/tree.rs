//! The public tree type.
//!
//! # Examples
//!
//! ```
//! use balanced_bst::{Tree, TreeError};
//!
//! // Input is sorted and de-duplicated, then built into a balanced tree.
//! let mut tree = Tree::build([5, 3, 8, 1, 4, 3])?;
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 8]);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(4));
//!
//! // Inserting never rebalances...
//! for x in 9..15 {
//!     tree.insert(x);
//! }
//! assert!(!tree.is_balanced());
//!
//! // ...until asked to.
//! tree.rebalance();
//! assert!(tree.is_balanced());
//!
//! assert_eq!(tree.delete(&4), Ok(4));
//! assert_eq!(tree.delete(&4), Err(TreeError::NotFound));
//! # Ok::<(), TreeError>(())
//! ```

use std::fmt;

use crate::build::build_balanced;
use crate::error::{Result, TreeError};
use crate::node::{self, Link, Node};
use crate::sort::{merge_sort, remove_duplicates};
use crate::traverse::{self, InOrder, Iter, LevelOrder, Order, PostOrder, PreOrder};

/// A binary search tree of unique values.
///
/// The tree is balanced when it is built and after [`rebalance`][Tree::rebalance]; inserting and
/// deleting never restructure it beyond the affected slot.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    /// An empty tree. The first [`insert`][Tree::insert] becomes its root.
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Dropping the root box would recurse once per level, and an unbalanced tree can have as
        // many levels as values. Unlink everything first so each node drops as a leaf.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            let (left, right) = node.take_children();
            stack.extend(left);
            stack.extend(right);
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: Node::clone_subtree(self.root()),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Each node shows only its children's values, so listing them breadth first describes the
        // whole shape without recursing.
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("nodes", &self.iter_level_order().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> TryFrom<Vec<T>> for Tree<T>
where
    T: Ord,
{
    type Error = TreeError;

    fn try_from(values: Vec<T>) -> Result<Self> {
        Self::build(values)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Tree<T> {
    /// Builds a balanced tree from an arbitrary sequence of values. The values are merge sorted
    /// and duplicates dropped before building, so the result holds each distinct value once.
    ///
    /// Fails with [`TreeError::Construction`] if `values` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Tree, TreeError};
    ///
    /// let tree = Tree::build([5, 3, 8, 1, 4]).unwrap();
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(4));
    ///
    /// assert_eq!(Tree::<i32>::build([]).unwrap_err(), TreeError::Construction);
    /// ```
    pub fn build(values: impl IntoIterator<Item = T>) -> Result<Self>
    where
        T: Ord,
    {
        let values: Vec<T> = values.into_iter().collect();
        if values.is_empty() {
            return Err(TreeError::Construction);
        }

        Self::from_sorted_unique(remove_duplicates(merge_sort(values)))
    }

    /// Builds a balanced tree from values that are already strictly ascending, skipping the sort.
    ///
    /// Fails with [`TreeError::Construction`] if `values` is empty. Unsorted or duplicated input
    /// produces a tree that doesn't uphold the search invariant (this is checked in debug builds).
    pub fn from_sorted_unique(values: Vec<T>) -> Result<Self>
    where
        T: Ord,
    {
        if values.is_empty() {
            return Err(TreeError::Construction);
        }
        debug_assert!(
            values.windows(2).all(|w| w[0] < w[1]),
            "values must be strictly ascending"
        );

        let len = values.len();
        Ok(Self {
            root: build_balanced(values),
            len,
        })
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values. A tree only becomes empty by deleting its last value or
    /// by starting from [`Tree::default`].
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Inserts `value` as a new leaf. Returns `false` and leaves the tree untouched if `value` is
    /// already present.
    ///
    /// The tree is not rebalanced; see [`rebalance`][Tree::rebalance].
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let mut tree = Tree::build([2]).unwrap();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert!(tree.find(&1).is_some());
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let inserted = Node::insert(&mut self.root, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Deletes `value` from the tree and returns it.
    ///
    /// A node with no children is removed and a node with one child is replaced by that child. A
    /// node with two children keeps its place and takes on its in-order predecessor's value, and
    /// the predecessor's node is removed instead. The root follows the same rules.
    ///
    /// Fails with [`TreeError::NotFound`], leaving the tree untouched, if `value` isn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Tree, TreeError};
    ///
    /// let mut tree = Tree::build([1, 2, 3]).unwrap();
    ///
    /// assert_eq!(tree.delete(&2), Ok(2));
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(1));
    /// assert_eq!(tree.delete(&2), Err(TreeError::NotFound));
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<T>
    where
        T: Ord,
    {
        let removed = Node::delete(&mut self.root, value).ok_or(TreeError::NotFound)?;
        self.len -= 1;
        Ok(removed)
    }

    /// Finds the node holding `value`.
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root().and_then(|root| root.find(value))
    }

    /// Whether `value` is in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.value())
    }

    /// The height of the root: `-1` for an empty tree and `0` for a single node.
    pub fn height(&self) -> isize {
        node::height(self.root())
    }

    /// The number of edges between the root and `node`.
    ///
    /// This searches the tree again for `node`'s value rather than following the reference, so it
    /// fails with [`TreeError::NotFound`] when given a node from some other tree whose value isn't
    /// in this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([1, 3, 4, 5, 8]).unwrap();
    /// let node = tree.find(&5).unwrap();
    ///
    /// assert_eq!(tree.depth(node), Ok(2));
    /// ```
    pub fn depth(&self, node: &Node<T>) -> Result<usize>
    where
        T: Ord,
    {
        self.depth_of(node.value())
    }

    /// The number of edges between the root and the node holding `value`. Fails with
    /// [`TreeError::NotFound`] if `value` isn't present.
    pub fn depth_of(&self, value: &T) -> Result<usize>
    where
        T: Ord,
    {
        self.root()
            .and_then(|root| root.depth_of(value))
            .ok_or(TreeError::NotFound)
    }

    /// Whether the root's two subtrees differ in height by less than two.
    ///
    /// Only the root is checked: subtrees further down may be arbitrarily lopsided. Use
    /// [`is_height_balanced`][Tree::is_height_balanced] to check every node. An empty tree is
    /// balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, |root| {
            (node::height(root.left()) - node::height(root.right())).abs() < 2
        })
    }

    /// Whether every node's two subtrees differ in height by less than two, i.e. the AVL
    /// condition holds throughout. This implies [`is_balanced`][Tree::is_balanced].
    pub fn is_height_balanced(&self) -> bool {
        self.root().map_or(true, |root| {
            root.fold_heights(|left, right| (left - right).abs() < 2)
                .is_some()
        })
    }

    /// Rebuilds the whole tree into a balanced shape holding the same values.
    ///
    /// The values are moved out in order and handed to the same builder used by
    /// [`build`][Tree::build]. This takes `O(n)` time and `O(n)` extra space.
    pub fn rebalance(&mut self) {
        let values = traverse::into_sorted_values(self.root.take(), self.len);
        self.root = build_balanced(values);

        debug_assert!(self.is_height_balanced());
    }

    /// Consumes the tree, returning its values in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        traverse::into_sorted_values(self.root.take(), self.len)
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len)
    }

    /// Iterates over the nodes breadth first.
    pub fn iter_level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root())
    }

    /// Iterates over the nodes in pre-order (node, left, right).
    pub fn iter_pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    /// Iterates over the nodes in in-order (left, node, right), i.e. by ascending value.
    pub fn iter_in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    /// Iterates over the nodes in post-order (left, right, node).
    pub fn iter_post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root())
    }

    /// Calls `visit` with every node, breadth first.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::Tree;
    ///
    /// let tree = Tree::build([1, 3, 4, 5, 8]).unwrap();
    /// let mut visited = Vec::new();
    /// tree.level_order(|node| visited.push(*node.value()));
    ///
    /// assert_eq!(visited, vec![4, 3, 8, 1, 5]);
    /// ```
    pub fn level_order(&self, visit: impl FnMut(&Node<T>)) {
        self.iter_level_order().for_each(visit);
    }

    /// Calls `visit` with every node in pre-order.
    pub fn pre_order(&self, visit: impl FnMut(&Node<T>)) {
        self.iter_pre_order().for_each(visit);
    }

    /// Calls `visit` with every node in in-order.
    pub fn in_order(&self, visit: impl FnMut(&Node<T>)) {
        self.iter_in_order().for_each(visit);
    }

    /// Calls `visit` with every node in post-order.
    pub fn post_order(&self, visit: impl FnMut(&Node<T>)) {
        self.iter_post_order().for_each(visit);
    }

    /// Calls `visit` with every node in the given `order`.
    ///
    /// Unlike the dedicated visitor methods, the visitor here is optional so it can be chosen at
    /// runtime. Fails with [`TreeError::MissingConsumer`] without visiting anything if it is
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use balanced_bst::{Node, Order, Tree, TreeError};
    ///
    /// let tree = Tree::build([2, 1, 3]).unwrap();
    ///
    /// let mut visited = Vec::new();
    /// tree.traverse(Order::Post, Some(|node: &Node<i32>| visited.push(*node.value())))?;
    /// assert_eq!(visited, vec![1, 3, 2]);
    ///
    /// let no_visitor: Option<fn(&Node<i32>)> = None;
    /// assert_eq!(tree.traverse(Order::In, no_visitor), Err(TreeError::MissingConsumer));
    /// # Ok::<(), TreeError>(())
    /// ```
    pub fn traverse<F>(&self, order: Order, visit: Option<F>) -> Result<()>
    where
        F: FnMut(&Node<T>),
    {
        let visit = visit.ok_or(TreeError::MissingConsumer)?;
        match order {
            Order::Level => self.level_order(visit),
            Order::Pre => self.pre_order(visit),
            Order::In => self.in_order(visit),
            Order::Post => self.post_order(visit),
        }

        Ok(())
    }
}
