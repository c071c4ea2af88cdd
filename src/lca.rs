//! Lowest common ancestor of two values in a [`Tree`].
//!
//! An ancestor of a node is any node on the path from it back up to the root,
//! the node itself included. The lowest common ancestor of two nodes is the
//! deepest node that is an ancestor of both.
//!
//! Because the tree is ordered, the search never has to remember a path.
//! Starting at the root: if both values are smaller than the current node
//! they both live in its left subtree, if both are greater they both live in
//! its right subtree, and otherwise they are split by (or equal to) the
//! current node, which makes it the answer. That is a single `O(height)`
//! descent with `O(1)` extra space.
//!
//! # Examples
//!
//! ```
//! use bst_puzzles::bst::Tree;
//! use bst_puzzles::lca;
//!
//! let tree = Tree::from_values([7, 2, 1, 5, 4, 3, 6, 12, 9, 13, 8, 11, 10, 15, 14, 16]).unwrap();
//!
//! let ancestor = lca::find(&tree, &8, &10).unwrap();
//! assert_eq!(tree.value(ancestor), Some(&9));
//!
//! let ancestor = lca::find(&tree, &6, &3).unwrap();
//! assert_eq!(tree.value(ancestor), Some(&5));
//! ```

use std::cmp::Ordering;

use tracing::{instrument, trace};

use crate::bst::{NodeId, Tree};
use crate::error::{Precondition, Result};

/// Finds the lowest common ancestor of the nodes holding `first` and
/// `second`. The order of the two values doesn't matter.
///
/// # Errors
///
/// [`Precondition::EqualValues`] if the values are equal,
/// [`Precondition::EmptyTree`] if there is nothing to search, and
/// [`Precondition::MissingValue`] if either value isn't in the tree.
#[instrument(level = "debug", skip_all)]
pub fn find<T: Ord>(tree: &Tree<T>, first: &T, second: &T) -> Result<NodeId> {
    if first == second {
        return Err(Precondition::EqualValues.into());
    }
    if tree.is_empty() {
        return Err(Precondition::EmptyTree.into());
    }
    if !tree.contains(first) || !tree.contains(second) {
        return Err(Precondition::MissingValue.into());
    }
    find_unchecked(tree, first, second).ok_or_else(|| Precondition::MissingValue.into())
}

/// The bare descent. The caller promises both values are in the tree and
/// differ; if they aren't, the node returned is merely where the two values
/// *would* split, and `None` comes back only when the descent falls off the
/// bottom of the tree.
pub fn find_unchecked<T: Ord>(tree: &Tree<T>, first: &T, second: &T) -> Option<NodeId> {
    let (low, high) = match first.cmp(second) {
        Ordering::Greater => (second, first),
        _ => (first, second),
    };

    let mut current = tree.root();
    while let Some(id) = current {
        let node = tree.get(id)?;
        current = if node.value() > high {
            node.left()
        } else if node.value() < low {
            node.right()
        } else {
            trace!(node = %id, "values split here");
            return Some(id);
        };
    }
    None
}

impl<T: Ord> Tree<T> {
    /// Method form of [`find`].
    pub fn lowest_common_ancestor(&self, first: &T, second: &T) -> Result<NodeId> {
        find(self, first, second)
    }
}
