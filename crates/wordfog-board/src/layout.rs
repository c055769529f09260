//! The four-region partition of the shared cell table.

use crate::error::BoardError;
use crate::region::{Region, RegionKind};
use wordfog_core::{GridPos, SlotPos, TablePos};

/// Partition of the shared cell table for one game configuration.
///
/// Built from `(grid_size, word_count)` and immutable afterwards. The
/// table has `word_count + 1 + grid_size` rows and `1 + grid_size`
/// columns, partitioned top to bottom as:
///
/// - word rows: rows `0..word_count`, columns `1..=grid_size`
/// - column headers: row `word_count`, columns `1..=grid_size`
/// - row headers: rows below that, column `0`
/// - grid: rows below the header row, columns `1..=grid_size`
///
/// Column 0 beside the word rows and the header row is spacer and
/// belongs to no region. The four regions never overlap, so every table
/// cell matches at most one region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    grid_size: u32,
    word_count: u32,
    word_rows: Region,
    column_headers: Region,
    row_headers: Region,
    grid: Region,
}

impl Layout {
    /// Largest supported grid size. Column labels are the letters
    /// `A..=Z`, so a grid axis cannot exceed the alphabet.
    pub const MAX_GRID: u32 = 26;

    /// Largest supported word count: table rows must fit in `i32`
    /// coordinates alongside the header row and the grid.
    pub const MAX_WORDS: u32 = i32::MAX as u32 - Self::MAX_GRID - 1;

    /// Build the layout used while players enter and place their words.
    ///
    /// Returns `Err(BoardError::EmptyGrid)` for a zero grid size,
    /// `Err(BoardError::GridTooLarge)` past [`Layout::MAX_GRID`], and
    /// `Err(BoardError::TooManyWords)` past [`Layout::MAX_WORDS`].
    pub fn for_setup(grid_size: u32, word_count: u32) -> Result<Self, BoardError> {
        if grid_size == 0 {
            return Err(BoardError::EmptyGrid);
        }
        if grid_size > Self::MAX_GRID {
            return Err(BoardError::GridTooLarge {
                value: grid_size,
                max: Self::MAX_GRID,
            });
        }
        if word_count > Self::MAX_WORDS {
            return Err(BoardError::TooManyWords {
                value: word_count,
                max: Self::MAX_WORDS,
            });
        }
        let grid_row_start = word_count + 1;
        Ok(Self {
            grid_size,
            word_count,
            word_rows: Region::new(RegionKind::WordRows, 0, 1, word_count, grid_size),
            column_headers: Region::new(RegionKind::ColumnHeaders, word_count, 1, 1, grid_size),
            row_headers: Region::new(RegionKind::RowHeaders, grid_row_start, 0, grid_size, 1),
            grid: Region::new(RegionKind::Grid, grid_row_start, 1, grid_size, grid_size),
        })
    }

    /// Build the layout used during play.
    ///
    /// Structurally identical to [`Layout::for_setup`]; the two phases
    /// differ only in which cells accept input, which is state carried
    /// by the cells themselves.
    pub fn for_gameplay(grid_size: u32, word_count: u32) -> Result<Self, BoardError> {
        Self::for_setup(grid_size, word_count)
    }

    /// Side length of the playable grid.
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Number of word entry rows.
    pub fn word_count(&self) -> u32 {
        self.word_count
    }

    /// Total rows of the shared table.
    pub fn total_rows(&self) -> u32 {
        self.word_count + 1 + self.grid_size
    }

    /// Total columns of the shared table.
    pub fn total_cols(&self) -> u32 {
        1 + self.grid_size
    }

    /// The word entry rows region.
    pub fn word_rows(&self) -> &Region {
        &self.word_rows
    }

    /// The column header row region.
    pub fn column_headers(&self) -> &Region {
        &self.column_headers
    }

    /// The row header column region.
    pub fn row_headers(&self) -> &Region {
        &self.row_headers
    }

    /// The playable grid region.
    pub fn grid(&self) -> &Region {
        &self.grid
    }

    /// All four regions in classification order.
    pub fn regions(&self) -> [&Region; 4] {
        [
            &self.grid,
            &self.column_headers,
            &self.row_headers,
            &self.word_rows,
        ]
    }

    /// The region containing the table coordinate, if any.
    ///
    /// Spacer cells (column 0 above the grid) match no region. Regions
    /// are checked in a fixed order so classification is deterministic.
    pub fn region_at(&self, pos: TablePos) -> Option<&Region> {
        self.regions().into_iter().find(|r| r.contains(pos))
    }

    /// Whether the table coordinate lies on the playable grid.
    pub fn is_in_grid(&self, pos: TablePos) -> bool {
        self.grid.contains(pos)
    }

    /// Whether the table coordinate lies on a word entry row.
    pub fn is_in_word_rows(&self, pos: TablePos) -> bool {
        self.word_rows.contains(pos)
    }

    /// Translate a table coordinate into the grid frame.
    pub fn table_to_grid(&self, pos: TablePos) -> Option<GridPos> {
        self.grid
            .to_local(pos)
            .map(|(row, col)| GridPos::new(col as i32, row as i32))
    }

    /// Translate a grid coordinate into the table frame.
    pub fn grid_to_table(&self, pos: GridPos) -> Option<TablePos> {
        let size = self.grid_size as i32;
        if pos.col < 0 || pos.col >= size || pos.row < 0 || pos.row >= size {
            return None;
        }
        Some(self.grid.to_global(pos.row as u32, pos.col as u32))
    }

    /// Translate a table coordinate into a word-slot coordinate.
    pub fn table_to_slot(&self, pos: TablePos) -> Option<SlotPos> {
        self.word_rows
            .to_local(pos)
            .map(|(row, col)| SlotPos::new(row, col))
    }

    /// Translate a word-slot coordinate into the table frame.
    pub fn slot_to_table(&self, slot: SlotPos) -> Option<TablePos> {
        if slot.word >= self.word_count || slot.index >= self.grid_size {
            return None;
        }
        Some(self.word_rows.to_global(slot.word, slot.index))
    }

    /// The label character for a grid column: `A` for column 0.
    ///
    /// Labels are pure functions of the local index and are never
    /// stored as layout state.
    pub fn column_header_char(grid_col: u32) -> char {
        debug_assert!(grid_col < Self::MAX_GRID, "column {grid_col} has no label");
        (b'A' + grid_col as u8) as char
    }

    /// The label number for a grid row: `1` for row 0.
    pub fn row_header_number(grid_row: u32) -> i32 {
        grid_row as i32 + 1
    }
}
