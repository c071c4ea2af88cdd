use bst_puzzles::bst::layout::Cell;
use bst_puzzles::bst::Tree;
use bst_puzzles::Error;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::DistinctValues;

#[quickcheck]
fn in_order_is_strictly_ascending(values: DistinctValues) -> bool {
    let tree = values.tree();
    let sorted: Vec<_> = tree.iter().collect();
    sorted.windows(2).all(|pair| pair[0] < pair[1]) && sorted.len() == values.0.len()
}

#[quickcheck]
fn duplicates_are_rejected_and_not_counted(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    let mut seen = HashSet::new();
    for x in &xs {
        let inserted = tree.insert(*x);
        let fresh = seen.insert(*x);
        match inserted {
            Ok(_) if fresh => {}
            Err(Error::InvalidInsert { existing }) if !fresh => {
                if tree.value(existing) != Some(x) {
                    return false;
                }
            }
            _ => return false,
        }
    }
    tree.len() == seen.len()
}

#[quickcheck]
fn contains_exactly_what_was_inserted(values: DistinctValues, others: Vec<i16>) -> bool {
    let tree = values.tree();
    let added: HashSet<_> = values.0.iter().copied().collect();

    values.0.iter().all(|v| tree.contains(v))
        && others
            .iter()
            .filter(|v| !added.contains(v))
            .all(|v| tree.find(v).is_none())
}

#[quickcheck]
fn height_is_bounded_by_size(values: DistinctValues) -> bool {
    let tree = values.tree();
    let len = tree.len();
    let height = tree.height();

    // A full tree of height h holds at most 2^h - 1 values.
    let fits = height >= 64 || (1u64 << height) > len as u64;
    height <= len && fits && (len == 0) == (height == 0)
}

#[quickcheck]
fn parent_links_agree_with_children(values: DistinctValues) -> bool {
    let tree = values.tree();
    tree.nodes().all(|id| {
        let node = tree.get(id).unwrap();
        [node.left(), node.right()]
            .iter()
            .flatten()
            .all(|&child| tree.parent(child) == Some(id))
    })
}

#[quickcheck]
fn layout_draws_every_label_once(values: DistinctValues) -> bool {
    let tree = values.tree();
    let layout = match tree.layout() {
        Ok(Some(layout)) => layout,
        Ok(None) => return tree.is_empty(),
        // Running out of room is allowed, drawing over a label isn't.
        Err(Error::LayoutOverflow { .. }) => return true,
        Err(_) => return false,
    };

    let grid = layout.grid();
    let mut labels = 0;
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            if let Some(Cell::Label(id)) = grid.get(row, column) {
                labels += 1;
                let slot = layout.slot(id).unwrap();
                if (slot.row, slot.column) != (row, column) || row != 2 * tree.depth(id) {
                    return false;
                }
            }
        }
    }
    labels == tree.len()
}

#[quickcheck]
fn short_trees_always_render(values: DistinctValues) -> bool {
    let short: Vec<_> = values.0.into_iter().take(3).collect();
    let tree = Tree::from_values(short).unwrap();
    if tree.height() > 2 {
        return true;
    }

    match tree.layout() {
        Ok(Some(layout)) => layout.slots().count() == tree.len(),
        Ok(None) => tree.is_empty(),
        Err(_) => false,
    }
}
