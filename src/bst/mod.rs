//! An arena backed Binary Search Tree. Nodes live in a `Vec` owned by the
//! [`Tree`] and refer to each other through [`NodeId`]s. Children are the
//! owning direction; the parent link is only a back-reference so the layout
//! code can walk upward when it has to push nodes around.
//!
//! # Examples
//!
//! ```
//! use bst_puzzles::bst::Tree;
//!
//! let mut tree = Tree::new();
//! assert_eq!(tree.height(), 0);
//!
//! let root = tree.insert(7).unwrap();
//! let left = tree.insert(2).unwrap();
//!
//! assert_eq!(tree.root(), Some(root));
//! assert_eq!(tree.parent(left), Some(root));
//! assert_eq!(tree.height(), 2);
//!
//! // Duplicates are rejected and don't count.
//! assert!(tree.insert(2).is_err());
//! assert_eq!(tree.len(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::{instrument, trace};

use crate::error::{Error, Result};
use crate::util::Side;

pub mod layout;

/// Handle to a node stored in a [`Tree`]. Only meaningful for the tree that
/// handed it out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value in the tree along with its links.
#[derive(Clone, Debug)]
pub struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }

    /// The stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The child holding smaller values, if any.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The child holding greater values, if any.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// The node this one hangs off. `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// A Binary Search Tree. Values are kept unique: every value in a node's
/// left subtree is smaller than it and every value in its right subtree is
/// greater.
#[derive(Clone, Debug)]
pub struct Tree<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Builds a tree by inserting `values` in order. Fails on the first
    /// duplicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_puzzles::bst::Tree;
    ///
    /// let tree = Tree::from_values([2, 1, 3]).unwrap();
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    ///
    /// assert!(Tree::from_values([2, 1, 2]).is_err());
    /// ```
    pub fn from_values<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value)?;
        }
        Ok(tree)
    }

    /// Inserts `value` by descending from the root and hanging a new leaf
    /// off the last node visited. Returns the new node.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInsert`] if an equal value is already stored. The tree
    /// is left as it was and [`len`][Tree::len] doesn't change.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: T) -> Result<NodeId>
    where
        T: Ord,
    {
        let Some(mut current) = self.root else {
            let id = self.push(Node::new(value, None));
            self.root = Some(id);
            return Ok(id);
        };

        loop {
            let node = self.at(current);
            let side = match value.cmp(&node.value) {
                Ordering::Less => Side::Left,
                Ordering::Equal => return Err(Error::InvalidInsert { existing: current }),
                Ordering::Greater => Side::Right,
            };

            match node.child(side) {
                Some(child) => current = child,
                None => {
                    let id = self.push(Node::new(value, Some(current)));
                    let parent = &mut self.nodes[current.index()];
                    match side {
                        Side::Left => parent.left = Some(id),
                        Side::Right => parent.right = Some(id),
                    }
                    trace!(node = %id, parent = %current, ?side, "inserted");
                    return Ok(id);
                }
            }
        }
    }

    /// Number of values stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of levels in the tree. An empty tree has a height of 0 and a
    /// lone root has a height of 1.
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Looks up a node by id.
    pub fn get(&self, id: NodeId) -> Option<&Node<T>> {
        self.nodes.get(id.index())
    }

    /// Shorthand for the value stored at `id`.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.get(id).map(Node::value)
    }

    /// The parent of `id`. `None` for the root (or a foreign id).
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Which side of its parent `id` hangs on. `None` for the root.
    pub fn side(&self, id: NodeId) -> Option<Side> {
        let parent = self.get(self.parent(id)?)?;
        if parent.left == Some(id) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Number of edges between the root and `id`.
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).count().saturating_sub(1)
    }

    /// Whether `ancestor` lies on the path from `node` up to the root. A node
    /// counts as its own ancestor.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|id| id == ancestor)
    }

    /// Walks from `id` up to the root, starting with `id` itself.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let start = self.get(id).map(|_| id);
        std::iter::successors(start, move |&id| self.parent(id))
    }

    /// Finds the node holding `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_puzzles::bst::Tree;
    ///
    /// let tree = Tree::from_values([5, 3, 8]).unwrap();
    /// let id = tree.find(&8).unwrap();
    ///
    /// assert_eq!(tree.value(id), Some(&8));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.at(id);
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Node ids in ascending value order.
    pub fn nodes(&self) -> InOrder<'_, T> {
        InOrder::new(self)
    }

    /// Values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes().map(move |id| &self.at(id).value)
    }

    /// Number of nodes in the subtree rooted at `id`.
    pub(crate) fn subtree_len(&self, id: Option<NodeId>) -> usize {
        match id {
            None => 0,
            Some(id) => {
                let node = self.at(id);
                1 + self.subtree_len(node.left) + self.subtree_len(node.right)
            }
        }
    }

    fn subtree_height(&self, id: Option<NodeId>) -> usize {
        match id {
            None => 0,
            Some(id) => {
                let node = self.at(id);
                self.subtree_height(node.left)
                    .max(self.subtree_height(node.right))
                    + 1
            }
        }
    }

    /// Ids are only ever created by this tree, so indexing can't miss.
    pub(crate) fn at(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    fn push(&mut self, node: Node<T>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }
}

/// Collects values into a tree, skipping any duplicates.
impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            // Duplicates are dropped on purpose here, `from_values` reports them.
            let _ = tree.insert(value);
        }
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = NodeId;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes()
    }
}

/// In-order (left, root, right) walk over a [`Tree`]'s node ids.
#[derive(Debug)]
pub struct InOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> InOrder<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        let mut walk = Self {
            tree,
            stack: Vec::new(),
        };
        walk.push_left_spine(tree.root);
        walk
    }

    fn push_left_spine(&mut self, mut current: Option<NodeId>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.tree.at(id).left;
        }
    }
}

impl<T> Iterator for InOrder<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.push_left_spine(self.tree.at(id).right);
        Some(id)
    }
}
