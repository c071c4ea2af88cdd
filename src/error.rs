//! Errors shared by every puzzle in this crate.
//!
//! None of these are fatal. They describe a precondition the caller broke
//! (or a tree shape the layout could not fit) and leave the inputs in a
//! usable state so the caller can decide what to do next.

use thiserror::Error;

use crate::bst::NodeId;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value is already stored in the tree. The tree and its count are
    /// left untouched.
    #[error("value already present in the tree at node {existing}")]
    InvalidInsert {
        /// The node that already holds the value.
        existing: NodeId,
    },

    /// A lowest common ancestor query was made with unusable values.
    #[error("precondition violated: {0}")]
    PreconditionViolation(#[from] Precondition),

    /// The matrix handed to the fill is not a rectangular 0/1 grid.
    #[error("malformed matrix: {0}")]
    MalformedMatrix(#[from] MatrixDefect),

    /// The render grid ran out of columns while nodes were being pushed
    /// right to avoid each other.
    #[error("tree does not fit a {rows}x{columns} render grid")]
    LayoutOverflow {
        /// Rows of the grid that overflowed.
        rows: usize,
        /// Columns of the grid that overflowed.
        columns: usize,
    },

    /// A label would have been written over an occupied cell.
    #[error("render cell ({row}, {column}) is already occupied")]
    LayoutOverlap {
        /// Grid row of the contested cell.
        row: usize,
        /// Grid column of the contested cell.
        column: usize,
    },
}

/// Why a lowest common ancestor query was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Precondition {
    /// Both values were equal.
    #[error("the two values must differ")]
    EqualValues,
    /// The tree has no nodes.
    #[error("the tree is empty")]
    EmptyTree,
    /// One of the values is not stored in the tree.
    #[error("value is not present in the tree")]
    MissingValue,
}

/// What exactly is wrong with a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixDefect {
    /// There are no rows at all.
    #[error("matrix has no rows")]
    NoRows,
    /// The rows are empty.
    #[error("matrix has no columns")]
    NoColumns,
    /// A row is not as long as the first one.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A cell holds something other than 0 or 1.
    #[error("cell ({row}, {column}) is not binary")]
    NonBinary {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        column: usize,
    },
}
