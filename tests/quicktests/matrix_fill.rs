use bst_puzzles::matrix_fill::{fill, format_rows, parse_rows};
use quickcheck_macros::quickcheck;

use crate::BinaryMatrix;

/// The straightforward version with a flag per row and per column.
fn naive(matrix: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let rows: Vec<bool> = matrix.iter().map(|row| row.contains(&1)).collect();
    let columns: Vec<bool> = (0..matrix[0].len())
        .map(|column| matrix.iter().any(|row| row[column] == 1))
        .collect();

    (0..matrix.len())
        .map(|i| {
            (0..columns.len())
                .map(|j| u8::from(rows[i] || columns[j]))
                .collect::<Vec<u8>>()
        })
        .collect()
}

#[quickcheck]
fn matches_naive(matrix: BinaryMatrix) -> bool {
    let expected = naive(&matrix.0);
    let mut matrix = matrix.0;
    fill(&mut matrix).unwrap();
    matrix == expected
}

/// A second fill treats the first one's output as fresh input, so any 1
/// the column pass dropped into a zero row spreads along that row.
#[quickcheck]
fn refilling_matches_naive_on_the_filled_matrix(matrix: BinaryMatrix) -> bool {
    let mut once = matrix.0;
    fill(&mut once).unwrap();
    let expected = naive(&once);
    let mut twice = once;
    fill(&mut twice).unwrap();
    twice == expected
}

#[quickcheck]
fn never_clears_a_one(matrix: BinaryMatrix) -> bool {
    let original = matrix.0.clone();
    let mut filled = matrix.0;
    fill(&mut filled).unwrap();
    original
        .iter()
        .flatten()
        .zip(filled.iter().flatten())
        .all(|(before, after)| before <= after)
}

#[quickcheck]
fn text_round_trips(matrix: BinaryMatrix) -> bool {
    let lines: Vec<String> = format_rows(&matrix.0)
        .lines()
        .map(|line| line.replace(' ', ""))
        .collect();
    parse_rows(&lines).ok() == Some(matrix.0)
}
