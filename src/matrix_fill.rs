//! Fills a boolean matrix so that cell `(i, j)` becomes 1 exactly when row
//! `i` or column `j` held a 1 to begin with, in `O(rows * columns)` time and
//! `O(1)` extra space.
//!
//! The easy version keeps a side array saying which columns held a 1, fills
//! every row containing a 1, then fills the marked columns. The side array is
//! the only thing costing more than constant space, and the matrix can hold
//! it itself: a row with no 1s in it is never touched by the row pass, so its
//! cells are free to carry the column marks. If no such row exists every row
//! has a 1, and the answer is a matrix of 1s.
//!
//! ```text
//! 0 0 0 1 0        1 1 1 1 1
//! 1 0 0 0 0   ->   1 1 1 1 1
//! 0 0 0 0 0        1 0 0 1 0
//! 0 0 0 1 0        1 1 1 1 1
//! ```
//!
//! # Examples
//!
//! ```
//! use bst_puzzles::matrix_fill;
//!
//! let mut matrix = vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]];
//! matrix_fill::fill(&mut matrix).unwrap();
//!
//! assert_eq!(matrix, vec![vec![0, 1, 0], vec![1, 1, 1], vec![0, 1, 0]]);
//! ```

use tracing::{debug, instrument};

use crate::error::{MatrixDefect, Result};

/// The four passes of [`fill`], in the order they have to run. Each pass
/// reads state that the following one overwrites.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Find the first row without any 1s to use as scratch space.
    Locate,
    /// Mark in the scratch row every column holding a 1 elsewhere.
    Populate,
    /// Fill every other row that holds a 1.
    FillRows,
    /// Fill every column marked in the scratch row.
    FillColumns,
}

/// Fills `matrix` in place and hands it back.
///
/// # Errors
///
/// [`MatrixDefect`] if the matrix has no rows or no columns, is ragged, or
/// holds anything other than 0 and 1. The matrix is untouched in that case.
#[instrument(level = "debug", skip_all, fields(rows = matrix.len()))]
pub fn fill(matrix: &mut [Vec<u8>]) -> Result<&mut [Vec<u8>]> {
    validate(matrix)?;

    debug!(phase = ?Phase::Locate, "running");
    let Some(scratch) = locate_scratch_row(matrix) else {
        debug!("every row holds a 1");
        for row in matrix.iter_mut() {
            row.fill(1);
        }
        return Ok(matrix);
    };

    debug!(phase = ?Phase::Populate, scratch, "running");
    populate_scratch_row(matrix, scratch);
    debug!(phase = ?Phase::FillRows, scratch, "running");
    fill_rows(matrix, scratch);
    debug!(phase = ?Phase::FillColumns, scratch, "running");
    fill_columns(matrix, scratch);
    Ok(matrix)
}

/// Parses one string of `0`s and `1`s per row.
///
/// ```
/// use bst_puzzles::matrix_fill::parse_rows;
///
/// assert_eq!(parse_rows(&["01", "10"]).unwrap(), vec![vec![0, 1], vec![1, 0]]);
/// assert!(parse_rows(&["01", "1"]).is_err());
/// assert!(parse_rows(&["0x"]).is_err());
/// ```
pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<Vec<Vec<u8>>> {
    let matrix = rows
        .iter()
        .enumerate()
        .map(|(row, line)| {
            line.as_ref()
                .chars()
                .enumerate()
                .map(|(column, c)| match c {
                    '0' => Ok(0),
                    '1' => Ok(1),
                    _ => Err(MatrixDefect::NonBinary { row, column }.into()),
                })
                .collect::<Result<Vec<u8>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    validate(&matrix)?;
    Ok(matrix)
}

/// Formats rows as space separated digits, one row per line.
pub fn format_rows(matrix: &[Vec<u8>]) -> String {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn validate(matrix: &[Vec<u8>]) -> Result<()> {
    let first = matrix.first().ok_or(MatrixDefect::NoRows)?;
    let expected = first.len();
    if expected == 0 {
        return Err(MatrixDefect::NoColumns.into());
    }
    for (row, cells) in matrix.iter().enumerate() {
        if cells.len() != expected {
            return Err(MatrixDefect::Ragged {
                row,
                expected,
                found: cells.len(),
            }
            .into());
        }
        if let Some(column) = cells.iter().position(|&cell| cell > 1) {
            return Err(MatrixDefect::NonBinary { row, column }.into());
        }
    }
    Ok(())
}

fn has_one(row: &[u8]) -> bool {
    row.contains(&1)
}

/// [`Phase::Locate`]
fn locate_scratch_row(matrix: &[Vec<u8>]) -> Option<usize> {
    matrix.iter().position(|row| !has_one(row))
}

/// [`Phase::Populate`]
fn populate_scratch_row(matrix: &mut [Vec<u8>], scratch: usize) {
    let columns = matrix[scratch].len();
    for column in 0..columns {
        let marked = matrix
            .iter()
            .enumerate()
            .any(|(row, cells)| row != scratch && cells[column] == 1);
        if marked {
            matrix[scratch][column] = 1;
        }
    }
}

/// [`Phase::FillRows`]
fn fill_rows(matrix: &mut [Vec<u8>], scratch: usize) {
    for (index, row) in matrix.iter_mut().enumerate() {
        if index != scratch && has_one(row) {
            row.fill(1);
        }
    }
}

/// [`Phase::FillColumns`]
fn fill_columns(matrix: &mut [Vec<u8>], scratch: usize) {
    let columns = matrix[scratch].len();
    for column in 0..columns {
        if matrix[scratch][column] == 1 {
            for row in matrix.iter_mut() {
                row[column] = 1;
            }
        }
    }
}
