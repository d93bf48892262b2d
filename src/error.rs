//! Error types for tree operations.

use thiserror::Error;

/// The one way a tree operation can fail: an operation that requires an
/// element was handed an absent one. Returned by the checked entry points
/// ([`try_insert`][crate::recursive::Tree::try_insert] and
/// [`try_contains`][crate::recursive::Tree::try_contains]) before any
/// mutation takes place.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The element argument was absent.
    #[error("element must be present")]
    InvalidArgument,
}
