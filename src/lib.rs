//! This crate collects a few classic interview puzzles built around a
//! Binary Search Tree, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree stores values in `Node`s. Every `Node` may have a
//! left and a right child and the tree keeps two invariants:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! [`bst::Tree`] keeps these invariants on insertion and can draw itself as
//! text art (see [`bst::layout`]).
//!
//! ## Lowest Common Ancestor
//!
//! The invariants above make it possible to find the deepest node sitting
//! above two values with one walk from the root and no extra memory. See
//! [`lca`].
//!
//! ## Matrix Fill
//!
//! Unrelated to trees: turning a 0/1 matrix into one where a cell is 1 if its
//! row or its column held a 1, in linear time and constant extra space. See
//! [`matrix_fill`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod error;
pub mod lca;
pub mod matrix_fill;
mod util;

pub use error::{Error, MatrixDefect, Precondition, Result};
pub use util::Side;
