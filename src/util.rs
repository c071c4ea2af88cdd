/// Which child slot of its parent a node occupies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// The node is smaller than its parent.
    Left,
    /// The node is greater than its parent.
    Right,
}

impl Side {
    /// The branch marker drawn between a parent and a child on this side.
    pub(crate) fn marker(self) -> char {
        match self {
            Side::Left => '/',
            Side::Right => '\\',
        }
    }
}
