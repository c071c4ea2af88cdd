//! Draws a [`Tree`] as text art on a 2-D grid of cells.
//!
//! Every level of the tree takes two grid rows: one for the values and one
//! for the `/` and `\` branch markers underneath them. A child naturally sits
//! two columns away from its parent. When a left child (or, with
//! [`CollisionPolicy::Symmetric`], any child) would land on or next to
//! something already drawn, its parent is nudged one column to the right,
//! and the nudge is carried up through the ancestors until the child has
//! room.
//!
//! ```text
//!        5
//!    /    \
//!   3      8
//!  / \    / \
//! 1   4  7   9
//! ```
//!
//! # Examples
//!
//! ```
//! use bst_puzzles::bst::Tree;
//!
//! let tree = Tree::from_values([2, 1, 3]).unwrap();
//! assert_eq!(tree.render().unwrap(), "  2\n / \\\n1   3");
//! ```

use std::fmt;

use tracing::{instrument, trace};

use super::{NodeId, Tree};
use crate::error::{Error, Result};
use crate::util::Side;

/// Which children get checked for collisions before they are drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Only left children are checked. Right children are drawn two columns
    /// right of their parent no matter what is there, so a label can end up
    /// on an occupied cell, which is reported as [`Error::LayoutOverlap`].
    LeftOnly,
    /// Both children are checked against a mirrored set of cells.
    #[default]
    Symmetric,
}

/// Where the root goes on the first row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum RootColumn {
    /// Two columns per node in the root's left subtree, which is the column
    /// the root would get if every node had a column of its own.
    #[default]
    InOrder,
    /// A fixed column. The classic drawing starts the root at column 2 and
    /// lets the collision handling push it right.
    Fixed(usize),
}

/// Knobs for [`Tree::render_with`] and [`Tree::layout_with`].
///
/// ```
/// use bst_puzzles::bst::layout::{CollisionPolicy, LayoutOptions};
///
/// let options = LayoutOptions::default().collisions(CollisionPolicy::LeftOnly);
/// assert_eq!(options.widenings, 2);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Which children are checked for collisions.
    pub collisions: CollisionPolicy,
    /// Starting column of the root.
    pub root_column: RootColumn,
    /// How many times the grid may double in width after running out of
    /// columns. The first grid is `2 * len - 1` columns wide.
    pub widenings: u32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            collisions: CollisionPolicy::Symmetric,
            root_column: RootColumn::InOrder,
            widenings: 2,
        }
    }
}

impl LayoutOptions {
    /// The classroom drawing: only left children are checked, the root starts
    /// at column 2 and the grid never grows.
    pub fn classic() -> Self {
        Self {
            collisions: CollisionPolicy::LeftOnly,
            root_column: RootColumn::Fixed(2),
            widenings: 0,
        }
    }

    /// Sets [`LayoutOptions::collisions`].
    pub fn collisions(mut self, collisions: CollisionPolicy) -> Self {
        self.collisions = collisions;
        self
    }

    /// Sets [`LayoutOptions::root_column`].
    pub fn root_column(mut self, root_column: RootColumn) -> Self {
        self.root_column = root_column;
        self
    }

    /// Sets [`LayoutOptions::widenings`].
    pub fn widenings(mut self, widenings: u32) -> Self {
        self.widenings = widenings;
        self
    }
}

/// Row and column a node was drawn at.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Slot {
    /// Grid row, two per tree level.
    pub row: usize,
    /// Grid column.
    pub column: usize,
}

/// Contents of one grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    /// Nothing drawn here.
    #[default]
    Blank,
    /// A `/` or `\` branch marker.
    Marker(char),
    /// The label of a node.
    Label(NodeId),
}

impl Cell {
    fn is_blank(self) -> bool {
        self == Cell::Blank
    }
}

/// Row-major cell buffer the layout draws on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Blank; rows * columns],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The cell at `(row, column)`, `None` outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row < self.rows && column < self.columns {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// Cells outside the grid count as free.
    fn is_occupied(&self, row: usize, column: isize) -> bool {
        usize::try_from(column)
            .ok()
            .and_then(|column| self.get(row, column))
            .map_or(false, |cell| !cell.is_blank())
    }

    fn set(&mut self, row: usize, column: usize, cell: Cell) -> Result<()> {
        if row >= self.rows || column >= self.columns {
            return Err(self.overflow());
        }
        self.cells[row * self.columns + column] = cell;
        Ok(())
    }

    fn put_label(&mut self, row: usize, column: usize, id: NodeId) -> Result<()> {
        match self.get(row, column) {
            None => Err(self.overflow()),
            Some(Cell::Blank) => self.set(row, column, Cell::Label(id)),
            Some(_) => Err(Error::LayoutOverlap { row, column }),
        }
    }

    fn put_marker(&mut self, row: usize, column: usize, side: Side) -> Result<()> {
        match self.get(row, column) {
            None => Err(self.overflow()),
            Some(Cell::Label(_)) => Err(Error::LayoutOverlap { row, column }),
            Some(_) => self.set(row, column, Cell::Marker(side.marker())),
        }
    }

    fn swap(&mut self, row: usize, column: usize) {
        let at = row * self.columns + column;
        self.cells.swap(at, at + 1);
    }

    fn overflow(&self) -> Error {
        Error::LayoutOverflow {
            rows: self.rows,
            columns: self.columns,
        }
    }
}

/// A finished drawing of a tree.
#[derive(Clone, Debug)]
pub struct Layout<'a, T> {
    tree: &'a Tree<T>,
    grid: Grid,
    slots: Vec<Option<Slot>>,
}

impl<T> Layout<'_, T> {
    /// The cells as drawn.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Where `id` was drawn.
    pub fn slot(&self, id: NodeId) -> Option<Slot> {
        self.slots.get(id.index()).copied().flatten()
    }

    /// Every node together with where it was drawn, in ascending value order.
    pub fn slots(&self) -> impl Iterator<Item = (NodeId, Slot)> + '_ {
        self.tree
            .nodes()
            .filter_map(move |id| self.slot(id).map(|slot| (id, slot)))
    }
}

impl<T: fmt::Display> Layout<'_, T> {
    /// Joins the grid into lines of text. Blank columns shared by every line
    /// on the left and trailing blanks on each line are trimmed.
    pub fn render(&self) -> String {
        let lines: Vec<String> = (0..self.grid.rows).map(|row| self.line(row)).collect();
        let indent = lines
            .iter()
            .filter(|line| !line.is_empty())
            .map(|line| line.len() - line.trim_start().len())
            .min()
            .unwrap_or(0);

        lines
            .iter()
            .map(|line| line.get(indent..).unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn line(&self, row: usize) -> String {
        let mut line = String::new();
        for column in 0..self.grid.columns {
            match self.grid.get(row, column).unwrap_or_default() {
                Cell::Blank => line.push(' '),
                Cell::Marker(marker) => line.push(marker),
                Cell::Label(id) => line.push_str(&self.tree.at(id).value().to_string()),
            }
        }
        line.trim_end().to_owned()
    }
}

impl<T> Tree<T> {
    /// Lays the tree out with the default [`LayoutOptions`]. Returns `None`
    /// for an empty tree.
    pub fn layout(&self) -> Result<Option<Layout<'_, T>>> {
        self.layout_with(&LayoutOptions::default())
    }

    /// Lays the tree out on a `2 * height - 1` by `2 * len - 1` grid, widening
    /// it as `options` allow. Returns `None` for an empty tree.
    ///
    /// # Errors
    ///
    /// [`Error::LayoutOverflow`] if the tree still doesn't fit after every
    /// allowed widening or a [`RootColumn::Fixed`] column lies off the initial
    /// grid, [`Error::LayoutOverlap`] if a label would be drawn on top of
    /// another cell.
    #[instrument(level = "debug", skip_all, fields(len = self.len()))]
    pub fn layout_with(&self, options: &LayoutOptions) -> Result<Option<Layout<'_, T>>> {
        let Some(root) = self.root else {
            return Ok(None);
        };
        let rows = 2 * self.height() - 1;
        let base = 2 * self.len() - 1;
        let column = match options.root_column {
            // A lone root gets a one cell grid.
            _ if self.len() == 1 => 0,
            RootColumn::InOrder => 2 * self.subtree_len(self.at(root).left),
            RootColumn::Fixed(column) => column,
        };

        // Widening makes room for collisions, it never brings a root back
        // onto the grid.
        if column >= base {
            return Err(Error::LayoutOverflow {
                rows,
                columns: base,
            });
        }

        let mut columns = base;
        let mut widenings = 0;
        loop {
            let mut placer = Placer::new(self, options, Grid::new(rows, columns));
            match placer.place(root, 0, column) {
                Ok(()) => return Ok(Some(placer.finish())),
                Err(err @ Error::LayoutOverflow { .. }) if widenings < options.widenings => {
                    let Some(wider) = widen(rows, columns) else {
                        return Err(err);
                    };
                    trace!(columns, wider, "grid too narrow, widening");
                    columns = wider;
                    widenings += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Renders the tree with the default [`LayoutOptions`]. An empty tree
    /// renders as an empty string and a lone root as just its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_puzzles::bst::Tree;
    ///
    /// let tree = Tree::from_values([5, 3, 8, 1, 4, 7, 9]).unwrap();
    /// let expected = [
    ///     "       5",
    ///     "   /    \\",
    ///     "  3      8",
    ///     " / \\    / \\",
    ///     "1   4  7   9",
    /// ];
    ///
    /// assert_eq!(tree.render().unwrap(), expected.join("\n"));
    /// ```
    pub fn render(&self) -> Result<String>
    where
        T: fmt::Display,
    {
        self.render_with(&LayoutOptions::default())
    }

    /// Renders the tree with the given options.
    pub fn render_with(&self, options: &LayoutOptions) -> Result<String>
    where
        T: fmt::Display,
    {
        Ok(self
            .layout_with(options)?
            .map(|layout| layout.render())
            .unwrap_or_default())
    }
}

/// Doubles the width of a `rows` high grid, unless the cell count would no
/// longer fit in a `usize`.
fn widen(rows: usize, columns: usize) -> Option<usize> {
    columns
        .checked_mul(2)
        .filter(|columns| columns.checked_mul(rows).is_some())
}

/// One attempt at drawing a tree on a grid of fixed size. `slots` is the
/// transient row/column annotation of every node drawn so far.
struct Placer<'a, T> {
    tree: &'a Tree<T>,
    options: LayoutOptions,
    grid: Grid,
    slots: Vec<Option<Slot>>,
}

impl<'a, T> Placer<'a, T> {
    fn new(tree: &'a Tree<T>, options: &LayoutOptions, grid: Grid) -> Self {
        Self {
            tree,
            options: *options,
            grid,
            slots: vec![None; tree.len()],
        }
    }

    fn finish(self) -> Layout<'a, T> {
        Layout {
            tree: self.tree,
            grid: self.grid,
            slots: self.slots,
        }
    }

    /// Slots are written before any child of the node is looked at, and
    /// shifting only ever reaches ancestors, so a missing slot can't happen.
    fn slot(&self, id: NodeId) -> Slot {
        self.slots[id.index()].expect("Shifting only reaches drawn nodes")
    }

    fn place(&mut self, id: NodeId, row: usize, column: usize) -> Result<()> {
        self.grid.put_label(row, column, id)?;
        self.slots[id.index()] = Some(Slot { row, column });

        let tree = self.tree;
        let node = tree.at(id);
        let child_row = row + 2;

        if let Some(left) = node.left {
            let mut column = column as isize - 2;
            while column < 0 {
                self.shift(left)?;
                column += 1;
            }
            while self.blocked(Side::Left, row, column) {
                self.shift(left)?;
                column += 1;
            }
            let column = column as usize;
            self.grid.put_marker(row + 1, column + 1, Side::Left)?;
            self.place(left, child_row, column)?;
        }

        if let Some(right) = node.right {
            // Placing the left subtree may have pushed this node along.
            let mut column = self.slot(id).column as isize + 2;
            if self.options.collisions == CollisionPolicy::Symmetric {
                while self.blocked(Side::Right, row, column) {
                    self.shift(right)?;
                    column += 1;
                }
            }
            let column = column as usize;
            self.grid.put_marker(row + 1, column - 1, Side::Right)?;
            self.place(right, child_row, column)?;
        }

        Ok(())
    }

    /// Whether a child about to be drawn on `side` of the node at `row` would
    /// touch anything: the marker row cell beyond its branch, its own cell,
    /// and two cells either side of it.
    fn blocked(&self, side: Side, row: usize, column: isize) -> bool {
        let outward = match side {
            Side::Left => -1,
            Side::Right => 1,
        };
        let child_row = row + 2;
        [
            (row + 1, column + outward),
            (child_row, column + outward),
            (child_row, column + 2 * outward),
            (child_row, column - outward),
            (child_row, column - 2 * outward),
            (child_row, column),
        ]
        .iter()
        .any(|&(row, column)| self.grid.is_occupied(row, column))
    }

    /// Makes room for `child` one column further right by nudging its
    /// parent. A left child's parent drags its own ancestors along; a right
    /// child's parent moves alone. The root has no parent, so shifting it does
    /// nothing.
    fn shift(&mut self, child: NodeId) -> Result<()> {
        let (Some(parent), Some(side)) = (self.tree.parent(child), self.tree.side(child)) else {
            return Ok(());
        };
        trace!(child = %child, parent = %parent, ?side, "shifting");
        self.nudge(parent, side)?;
        match side {
            Side::Left => self.shift(parent),
            Side::Right => Ok(()),
        }
    }

    /// Moves the label of `id` one column right along with the branch marker
    /// cell that leads to its child on `side`.
    fn nudge(&mut self, id: NodeId, side: Side) -> Result<()> {
        let Slot { row, column } = self.slot(id);
        let marker = match side {
            Side::Left => column as isize - 1,
            Side::Right => column as isize + 1,
        };
        self.slide(row, column as isize)?;
        self.slide(row + 1, marker)
    }

    /// Swaps `(row, column)` with the cell to its right and keeps the slot
    /// of any label involved in sync.
    fn slide(&mut self, row: usize, column: isize) -> Result<()> {
        let Ok(column) = usize::try_from(column) else {
            return Ok(());
        };
        if column + 1 >= self.grid.columns {
            return if self.grid.is_occupied(row, column as isize) {
                Err(self.grid.overflow())
            } else {
                Ok(())
            };
        }

        self.grid.swap(row, column);
        for column in [column, column + 1] {
            if let Some(Cell::Label(id)) = self.grid.get(row, column) {
                self.slots[id.index()] = Some(Slot { row, column });
            }
        }
        Ok(())
    }
}
