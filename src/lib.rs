//! This crate provides a Binary Search Tree (BST) of unique values that is balanced when it's
//! built and can be rebalanced on demand.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find, and delete
//! stored values. BSTs are typically defined recursively using the notion of a `Node`. A `Node`
//! stores a value and may have a left and a right child `Node`. The most important invariants of
//! a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a value less than its
//!    own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a value greater than
//!    its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a value takes `O(height)`, where `height` is the longest path from the root
//! `Node` to a leaf `Node`.
//!
//! ## Balance
//!
//! A [`Tree`] is built from an arbitrary sequence of values by sorting them, dropping duplicates,
//! and repeatedly picking the middle value as a subtree's root. The result has the smallest
//! possible height, `floor(lg N)`.
//!
//! Inserting and deleting do **not** restore balance, so a tree that sees many ascending inserts
//! degrades towards a linked list. [`Tree::rebalance`] rebuilds the whole tree in `O(N)` when
//! that becomes a problem, and [`Tree::is_balanced`] is a cheap check of whether it has.
//!
//! ```
//! use balanced_bst::Tree;
//!
//! let mut tree = Tree::build([40, 10, 30, 20, 10])?;
//! assert_eq!(tree.len(), 4);
//!
//! tree.insert(50);
//! tree.insert(60);
//! tree.insert(70);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30, 40, 50, 60, 70]);
//! # Ok::<(), balanced_bst::TreeError>(())
//! ```
//!
//! ## Features
//!
//! * `quickcheck`: implements `quickcheck::Arbitrary` for [`Tree`] so it can be generated in
//!   property tests.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

#[cfg(feature = "quickcheck")]
mod arbitrary;
pub mod build;
mod error;
mod node;
pub mod sort;
#[cfg(test)]
mod test;
mod traverse;
mod tree;

pub use error::{Result, TreeError};
pub use node::{height, Node};
pub use traverse::{InOrder, Iter, LevelOrder, Order, PostOrder, PreOrder};
pub use tree::Tree;
