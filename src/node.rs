//! The structural unit of a [`Tree`][crate::Tree].
//!
//! Each `Node` owns its children outright through a [`Box`]. There are no parent pointers and no
//! shared ownership so detaching a subtree is just moving a `Box` out of its slot. Operations that
//! need to rewrite the tree's shape work on a `Link`, the slot a node hangs from, which lets the
//! root be handled exactly like any other child.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::traverse::PostOrder;

/// The slot a `Node` hangs from: a parent's `left` or `right` or the tree's root.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single value in the tree along with its (possibly empty) left and right subtrees.
///
/// Every value in the left subtree is strictly less than `value` and every value in the right
/// subtree is strictly greater.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Children are shown by value only. Recursing into them would use one stack frame per
        // level; `Tree`'s Debug lists every node instead.
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// Returns the height of an optional node: `-1` for no node, `0` for a leaf, and otherwise one
/// more than the taller of its children.
///
/// # Examples
///
/// ```
/// use balanced_bst::{height, Tree};
///
/// let tree = Tree::build([2, 1, 3]).unwrap();
///
/// assert_eq!(height(tree.root()), 1);
/// assert_eq!(height(tree.find(&1)), 0);
/// assert_eq!(height::<i32>(None), -1);
/// ```
pub fn height<T>(node: Option<&Node<T>>) -> isize {
    node.map_or(-1, Node::height)
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Self::with_children(value, None, None)
    }

    pub(crate) fn with_children(value: T, left: Link<T>, right: Link<T>) -> Box<Self> {
        Box::new(Self { value, left, right })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a leaf. A leaf has a height
    /// of `0`.
    pub fn height(&self) -> isize {
        self.fold_heights(|_, _| true).unwrap_or(-1)
    }

    /// Walks this subtree bottom up, calling `check` with the left and right child heights of
    /// every node. Returns the height of `self`, or `None` as soon as `check` returns `false`.
    ///
    /// This is a post-order walk with an explicit stack of subtree heights, so arbitrarily deep
    /// (degenerate) trees don't exhaust the call stack.
    pub(crate) fn fold_heights(
        &self,
        mut check: impl FnMut(isize, isize) -> bool,
    ) -> Option<isize> {
        let mut heights: Vec<isize> = Vec::new();
        for node in PostOrder::new(Some(self)) {
            // Children were finished left then right so the right height is on top.
            let right = if node.right.is_some() { heights.pop() } else { None };
            let left = if node.left.is_some() { heights.pop() } else { None };
            let (left, right) = (left.unwrap_or(-1), right.unwrap_or(-1));

            if !check(left, right) {
                return None;
            }
            heights.push(1 + left.max(right));
        }

        heights.pop()
    }

    /// Finds the node holding `value` in this subtree.
    pub(crate) fn find(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        let mut current = Some(self);
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Counts the edges from this node down to the node holding `value`, re-searching by
    /// comparison rather than following a held reference.
    pub(crate) fn depth_of(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        let mut current = Some(self);
        let mut depth = 0;
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(depth),
                Ordering::Greater => node.right(),
            };
            depth += 1;
        }

        None
    }

    /// Follows the search path for `value` starting at `link` and returns the slot that either
    /// holds `value` or is the empty slot where it would be attached.
    fn find_link<'a>(mut link: &'a mut Link<T>, value: &T) -> &'a mut Link<T>
    where
        T: Ord,
    {
        while let Some(ordering) = link.as_deref().map(|node| value.cmp(&node.value)) {
            link = match (ordering, link) {
                (Ordering::Less, Some(node)) => &mut node.left,
                (Ordering::Greater, Some(node)) => &mut node.right,
                (_, link) => return link,
            };
        }

        link
    }

    /// Inserts `value` as a new leaf below `link`. Returns `false`, leaving the tree untouched, if
    /// `value` is already present.
    pub(crate) fn insert(link: &mut Link<T>, value: T) -> bool
    where
        T: Ord,
    {
        let slot = Self::find_link(link, &value);
        if slot.is_some() {
            return false;
        }

        *slot = Some(Self::new_boxed(value));
        true
    }

    /// Deletes the node holding `value` from the subtree at `link` and returns its value. Returns
    /// `None` without modifying anything if no node holds `value`.
    ///
    /// A node with at most one child is replaced in its slot by that child. A node with two
    /// children stays where it is and takes the value of its in-order predecessor (the largest
    /// value in its left subtree), after which the predecessor's node is removed from the left
    /// subtree.
    pub(crate) fn delete(link: &mut Link<T>, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let slot = Self::find_link(link, value);
        let mut target = slot.take()?;

        match (target.left.take(), target.right.take()) {
            (None, None) => {}
            (Some(child), None) | (None, Some(child)) => *slot = Some(child),
            (Some(left), Some(right)) => {
                let (left, predecessor) = left.split_largest();
                let removed = mem::replace(&mut target.value, predecessor.value);
                target.left = left;
                target.right = Some(right);
                *slot = Some(target);

                return Some(removed);
            }
        }

        Some(target.value)
    }

    /// Splits the largest node off this subtree. Returns what is left of the subtree and the
    /// detached node. The largest node has no right child so its left child takes its place.
    fn split_largest(mut self: Box<Self>) -> (Link<T>, Box<Self>) {
        match Self::remove_largest(&mut self.right) {
            Some(largest) => (Some(self), largest),
            None => (self.left.take(), self),
        }
    }

    /// Walks the right links below `link` and detaches the last node, splicing its left child into
    /// its slot. Returns `None` only if `link` is empty.
    fn remove_largest(mut link: &mut Link<T>) -> Option<Box<Self>> {
        while let Some(has_right) = link.as_deref().map(|node| node.right.is_some()) {
            link = match (has_right, link) {
                (true, Some(node)) => &mut node.right,
                (_, link) => {
                    let mut largest = link.take()?;
                    *link = largest.left.take();
                    return Some(largest);
                }
            };
        }

        None
    }

    /// Copies the subtree at `root` node by node, pairing each source node with the slot its copy
    /// goes in so deep trees don't recurse.
    pub(crate) fn clone_subtree(root: Option<&Self>) -> Link<T>
    where
        T: Clone,
    {
        let mut cloned = None;
        let mut stack: Vec<(&Self, &mut Link<T>)> = Vec::new();
        if let Some(root) = root {
            stack.push((root, &mut cloned));
        }
        while let Some((source, slot)) = stack.pop() {
            let node = slot.insert(Self::new_boxed(source.value.clone()));
            if let Some(left) = source.left() {
                stack.push((left, &mut node.left));
            }
            if let Some(right) = source.right() {
                stack.push((right, &mut node.right));
            }
        }

        cloned
    }

    /// Moves this node's children out, leaving it a leaf. Used to tear trees down without
    /// recursion.
    pub(crate) fn take_children(&mut self) -> (Link<T>, Link<T>) {
        (self.left.take(), self.right.take())
    }

    /// Consumes this node, returning its value and its children.
    pub(crate) fn into_parts(self: Box<Self>) -> (T, Link<T>, Link<T>) {
        let Node { value, left, right } = *self;
        (value, left, right)
    }
}
