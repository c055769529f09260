//! Rectangular windows onto the shared cell table.

use std::fmt;
use wordfog_core::TablePos;

/// Names the logical areas of the shared cell table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// The word entry rows at the top of the table.
    WordRows,
    /// The single row of column labels above the grid.
    ColumnHeaders,
    /// The single column of row labels left of the grid.
    RowHeaders,
    /// The playable grid.
    Grid,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordRows => write!(f, "word rows"),
            Self::ColumnHeaders => write!(f, "column headers"),
            Self::RowHeaders => write!(f, "row headers"),
            Self::Grid => write!(f, "grid"),
        }
    }
}

/// A rectangular window onto the shared cell table.
///
/// A region is defined by its top-left origin and its extent, both in
/// table coordinates. Regions are only ever built by
/// [`Layout`](crate::Layout), which guarantees that the regions of one
/// layout never overlap. Local coordinates are `(row, col)` offsets from
/// the region's origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    kind: RegionKind,
    row_start: u32,
    col_start: u32,
    row_count: u32,
    col_count: u32,
}

impl Region {
    /// Build a region window. Origin and extent must fit the table that
    /// the owning layout describes; the layout constructor enforces that.
    pub(crate) const fn new(
        kind: RegionKind,
        row_start: u32,
        col_start: u32,
        row_count: u32,
        col_count: u32,
    ) -> Self {
        Self {
            kind,
            row_start,
            col_start,
            row_count,
            col_count,
        }
    }

    /// Which logical area this region is.
    pub fn kind(&self) -> RegionKind {
        self.kind
    }

    /// First table row of the region.
    pub fn row_start(&self) -> u32 {
        self.row_start
    }

    /// First table column of the region.
    pub fn col_start(&self) -> u32 {
        self.col_start
    }

    /// Number of rows in the region.
    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Number of columns in the region.
    pub fn col_count(&self) -> u32 {
        self.col_count
    }

    /// One past the last table row of the region.
    pub fn row_end(&self) -> u32 {
        self.row_start + self.row_count
    }

    /// One past the last table column of the region.
    pub fn col_end(&self) -> u32 {
        self.col_start + self.col_count
    }

    /// Whether the table coordinate falls inside this region.
    pub fn contains(&self, pos: TablePos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as u32) >= self.row_start
            && (pos.row as u32) < self.row_end()
            && (pos.col as u32) >= self.col_start
            && (pos.col as u32) < self.col_end()
    }

    /// Translate a table coordinate into this region's local frame.
    ///
    /// Returns `None` when the coordinate lies outside the region;
    /// callers must check before indexing region-local storage.
    pub fn to_local(&self, pos: TablePos) -> Option<(u32, u32)> {
        if !self.contains(pos) {
            return None;
        }
        Some((
            pos.row as u32 - self.row_start,
            pos.col as u32 - self.col_start,
        ))
    }

    /// Translate a region-local coordinate back into the table frame.
    ///
    /// The local coordinate must lie within the region's extent.
    pub fn to_global(&self, local_row: u32, local_col: u32) -> TablePos {
        debug_assert!(
            local_row < self.row_count && local_col < self.col_count,
            "local ({local_row}, {local_col}) outside region extent {}x{}",
            self.row_count,
            self.col_count,
        );
        TablePos::new(
            (self.row_start + local_row) as i32,
            (self.col_start + local_col) as i32,
        )
    }
}
