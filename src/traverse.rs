//! Depth-first and breadth-first walks over a tree.
//!
//! Every walk here keeps its own explicit stack or queue instead of recursing, so the tree's shape
//! (which is never rebalanced automatically) can't exhaust the call stack.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// The order in which a traversal visits nodes. See [`Tree::traverse`][crate::Tree::traverse].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first: every node at depth `d` before any node at depth `d + 1`, left to right
    /// within a depth.
    Level,
    /// A node, then its left subtree, then its right subtree.
    Pre,
    /// A node's left subtree, then the node, then its right subtree. Yields ascending values.
    In,
    /// A node's left subtree, then its right subtree, then the node.
    Post,
}

/// Breadth-first iterator over the nodes of a tree.
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}

/// Pre-order (node, left, right) iterator over the nodes of a tree.
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// In-order (left, node, right) iterator over the nodes of a tree.
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree is being (or has been) visited but which haven't been yielded.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Post-order (left, right, node) iterator over the nodes of a tree.
pub struct PostOrder<'a, T> {
    /// Each node is pushed once unexpanded and, after its children are queued up above it, once
    /// more expanded. It's yielded when popped expanded.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }

        None
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

/// Ascending iterator over the values of a tree.
pub struct Iter<'a, T> {
    nodes: InOrder<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            nodes: InOrder::new(root),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Tears down the subtree at `root`, collecting its values in ascending order.
pub(crate) fn into_sorted_values<T>(root: Link<T>, len: usize) -> Vec<T> {
    let mut values = Vec::with_capacity(len);
    let mut stack = Vec::new();
    let mut current = root;

    loop {
        while let Some(mut node) = current {
            let (left, right) = node.take_children();
            current = left;
            stack.push((node, right));
        }

        let Some((node, right)) = stack.pop() else {
            break;
        };
        let (value, _, _) = node.into_parts();
        values.push(value);
        current = right;
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The tree from building `[1, 3, 4, 5, 8]`:
    ///
    /// ```text
    ///        4
    ///      /   \
    ///     3     8
    ///    /     /
    ///   1     5
    /// ```
    fn sample() -> Link<i32> {
        crate::build::build_balanced(vec![1, 3, 4, 5, 8])
    }

    fn values<'a>(nodes: impl Iterator<Item = &'a Node<i32>>) -> Vec<i32> {
        nodes.map(|n| *n.value()).collect()
    }

    #[test]
    fn level_order() {
        let root = sample();
        assert_eq!(values(LevelOrder::new(root.as_deref())), vec![4, 3, 8, 1, 5]);
    }

    #[test]
    fn pre_order() {
        let root = sample();
        assert_eq!(values(PreOrder::new(root.as_deref())), vec![4, 3, 1, 8, 5]);
    }

    #[test]
    fn in_order() {
        let root = sample();
        assert_eq!(values(InOrder::new(root.as_deref())), vec![1, 3, 4, 5, 8]);
    }

    #[test]
    fn post_order() {
        let root = sample();
        assert_eq!(values(PostOrder::new(root.as_deref())), vec![1, 3, 5, 8, 4]);
    }

    #[test]
    fn empty_walks_yield_nothing() {
        assert_eq!(LevelOrder::<i32>::new(None).count(), 0);
        assert_eq!(PreOrder::<i32>::new(None).count(), 0);
        assert_eq!(InOrder::<i32>::new(None).count(), 0);
        assert_eq!(PostOrder::<i32>::new(None).count(), 0);
    }

    #[test]
    fn iter_reports_exact_size() {
        let root = sample();
        let mut iter = Iter::new(root.as_deref(), 5);

        assert_eq!(iter.len(), 5);
        iter.next();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.copied().collect::<Vec<_>>(), vec![3, 4, 5, 8]);
    }

    #[test]
    fn into_sorted_values_drains_in_order() {
        assert_eq!(into_sorted_values(sample(), 5), vec![1, 3, 4, 5, 8]);
        assert!(into_sorted_values::<i32>(None, 0).is_empty());
    }
}
