//! Typed coordinates for the shared cell table and the playable grid.
//!
//! Two coordinate frames coexist: the table frame (whole matrix, row
//! before column) and the grid frame (playable grid only, column before
//! row, matching pointer coordinates). Keeping them as distinct types
//! means a grid-local value can never be used to index the table without
//! going through an explicit layout translation.

use std::fmt;

/// A matrix-wide coordinate on the shared cell table.
///
/// Row 0 is the topmost word row; column 0 is the row-header column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TablePos {
    /// Table row, top to bottom.
    pub row: i32,
    /// Table column, left to right.
    pub col: i32,
}

impl TablePos {
    /// Create a table coordinate from `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for TablePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for TablePos {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// A coordinate local to the playable grid.
///
/// `(0, 0)` is the grid's top-left cell. Column comes first because
/// grid positions originate from pointer input, which reports `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    /// Grid column, left to right.
    pub col: i32,
    /// Grid row, top to bottom.
    pub row: i32,
}

impl GridPos {
    /// Create a grid coordinate from `(col, row)`.
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The coordinate offset by `(d_col, d_row)`.
    pub const fn offset(self, d_col: i32, d_row: i32) -> Self {
        Self {
            col: self.col + d_col,
            row: self.row + d_row,
        }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((col, row): (i32, i32)) -> Self {
        Self { col, row }
    }
}

/// A coordinate local to the word rows: one word slot character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotPos {
    /// Which word row, top to bottom.
    pub word: u32,
    /// Character index within the word row, left to right.
    pub index: u32,
}

impl SlotPos {
    /// Create a word-slot coordinate.
    pub const fn new(word: u32, index: u32) -> Self {
        Self { word, index }
    }
}

impl fmt::Display for SlotPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "word {} index {}", self.word, self.index)
    }
}
