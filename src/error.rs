//! Error types for tree operations.

use thiserror::Error;

/// Errors that can occur while building, mutating, or walking a [`Tree`][crate::Tree].
///
/// None of these leave the tree partially modified: an operation either succeeds completely or
/// fails before touching any node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// A tree was requested from an empty sequence of values.
    #[error("cannot build a tree from an empty sequence of values")]
    Construction,

    /// The requested value is not stored in the tree.
    #[error("value not found in tree")]
    NotFound,

    /// A traversal was started without a visitor to hand the nodes to.
    #[error("traversal requires a visitor")]
    MissingConsumer,
}

/// Result type alias for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
