//! This crate exposes a set-flavored Binary Search Tree (BST) built
//! from owned, recursively linked nodes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores an element
//! and will sometimes have child `Node`s. The most important invariants
//! of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have an
//!    element less than its own element.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have an
//!    element greater than its own element.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! elements in the tree takes `O(height)` (where `height` is defined as the
//! longest path from the root `Node` to a leaf `Node`). BSTs also naturally
//! support sorted traversal by visiting the left subtree, then the subtree
//! root, then the right subtree.
//!
//! The tree here stores each distinct element exactly once - inserting an
//! element that compares equal to a stored one is a no-op that reports
//! `false`. There is no delete operation and no rebalancing: the shape of
//! the tree is determined entirely by insertion order.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod recursive;

pub use error::Error;
