mod bst;
mod lca;
mod matrix_fill;

use quickcheck::{Arbitrary, Gen};

/// Values with every duplicate after the first occurrence removed, so they
/// can all be inserted into a tree.
#[derive(Clone, Debug)]
pub(crate) struct DistinctValues(pub Vec<i16>);

impl DistinctValues {
    fn from_vec(values: Vec<i16>) -> Self {
        let mut seen = std::collections::HashSet::new();
        Self(values.into_iter().filter(|v| seen.insert(*v)).collect())
    }

    pub(crate) fn tree(&self) -> bst_puzzles::bst::Tree<i16> {
        bst_puzzles::bst::Tree::from_values(self.0.iter().copied())
            .expect("values are distinct")
    }
}

impl Arbitrary for DistinctValues {
    fn arbitrary(g: &mut Gen) -> Self {
        Self::from_vec(Vec::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self::from_vec))
    }
}

/// A non-empty rectangular matrix of 0s and 1s.
#[derive(Clone, Debug)]
pub(crate) struct BinaryMatrix(pub Vec<Vec<u8>>);

impl Arbitrary for BinaryMatrix {
    /// Tells quickcheck how to pick dimensions and cells. Small matrices are
    /// plenty to hit every interesting case and keep zero rows likely.
    fn arbitrary(g: &mut Gen) -> Self {
        let rows = usize::arbitrary(g) % 6 + 1;
        let columns = usize::arbitrary(g) % 6 + 1;
        let matrix: Vec<Vec<u8>> = (0..rows)
            .map(|_| {
                (0..columns)
                    .map(|_| *g.choose(&[0, 0, 0, 1]).unwrap())
                    .collect::<Vec<u8>>()
            })
            .collect();
        Self(matrix)
    }

    /// Drops one row or one column at a time so every candidate stays
    /// rectangular and non-empty.
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let matrix = self.0.clone();
        let rows = matrix.len();
        let columns = matrix[0].len();

        let without_row = {
            let matrix = matrix.clone();
            (0..rows).filter(move |_| rows > 1).map(move |skip| {
                let mut smaller = matrix.clone();
                smaller.remove(skip);
                Self(smaller)
            })
        };
        let without_column = (0..columns)
            .filter(move |_| columns > 1)
            .map(move |skip| {
                let smaller = matrix
                    .iter()
                    .map(|row| {
                        let mut row = row.clone();
                        row.remove(skip);
                        row
                    })
                    .collect();
                Self(smaller)
            });
        Box::new(without_row.chain(without_column))
    }
}
