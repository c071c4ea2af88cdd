use bst_puzzles::bst::{NodeId, Tree};
use bst_puzzles::lca;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

use crate::DistinctValues;

/// Finds the LCA the slow way: the deepest node on both root paths.
fn brute_force(tree: &Tree<i16>, first: NodeId, second: NodeId) -> Option<NodeId> {
    let first_path: Vec<_> = tree.ancestors(first).collect();
    tree.ancestors(second).find(|id| first_path.contains(id))
}

#[quickcheck]
fn matches_brute_force(values: DistinctValues, a: usize, b: usize) -> TestResult {
    let values = values.0;
    if values.len() < 2 || a % values.len() == b % values.len() {
        return TestResult::discard();
    }
    let (first, second) = (values[a % values.len()], values[b % values.len()]);
    let tree = Tree::from_values(values.iter().copied()).unwrap();

    let found = lca::find(&tree, &first, &second).unwrap();
    let expected = brute_force(
        &tree,
        tree.find(&first).unwrap(),
        tree.find(&second).unwrap(),
    );
    TestResult::from_bool(Some(found) == expected)
}

#[quickcheck]
fn no_child_is_a_common_ancestor(values: DistinctValues, a: usize, b: usize) -> TestResult {
    let values = values.0;
    if values.len() < 2 || a % values.len() == b % values.len() {
        return TestResult::discard();
    }
    let (first, second) = (values[a % values.len()], values[b % values.len()]);
    let tree = Tree::from_values(values.iter().copied()).unwrap();
    let first_id = tree.find(&first).unwrap();
    let second_id = tree.find(&second).unwrap();

    let found = tree.lowest_common_ancestor(&first, &second).unwrap();
    let node = tree.get(found).unwrap();
    let common = |id: NodeId| tree.is_ancestor(id, first_id) && tree.is_ancestor(id, second_id);

    TestResult::from_bool(
        common(found)
            && [node.left(), node.right()]
                .iter()
                .flatten()
                .all(|&child| !common(child)),
    )
}

#[quickcheck]
fn unchecked_agrees_when_values_are_present(values: DistinctValues) -> TestResult {
    let tree = values.tree();
    let sorted: Vec<_> = tree.iter().copied().collect();
    if sorted.len() < 2 {
        return TestResult::discard();
    }
    let (low, high) = (sorted[0], sorted[sorted.len() - 1]);

    // The smallest and largest values only split at the root.
    TestResult::from_bool(
        lca::find_unchecked(&tree, &low, &high) == tree.root()
            && lca::find(&tree, &high, &low).ok() == tree.root(),
    )
}

#[quickcheck]
fn missing_values_are_rejected(values: DistinctValues, missing: i16) -> TestResult {
    let tree = values.tree();
    if tree.is_empty() || tree.contains(&missing) {
        return TestResult::discard();
    }
    let present = *tree.iter().next().unwrap();
    TestResult::from_bool(lca::find(&tree, &present, &missing).is_err())
}
