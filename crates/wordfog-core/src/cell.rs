//! The cell record and its closed classification enums.

/// Structural classification of a table cell.
///
/// Assigned once when a model is built from a layout and only changed
/// by a whole-model reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Filler cell outside every named region (the top-left corner column).
    Spacer,
    /// One character position of a word entry row.
    WordSlot,
    /// A column label cell (`A`, `B`, `C`, ...).
    ColumnHeader,
    /// A row label cell (`1`, `2`, `3`, ...).
    RowHeader,
    /// A playable grid cell.
    Grid,
}

/// Interaction and display state of a cell.
///
/// This is the full closed set; rendering maps each variant to a visual
/// treatment outside this workspace. The `Placement*` variants are
/// transient preview states used only while word placement is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// No state assigned (spacer cells).
    None,
    /// Ordinary interactive cell.
    Normal,
    /// Cell cannot be interacted with.
    Disabled,
    /// Cell is not shown at all.
    Hidden,
    /// Cell is currently selected.
    Selected,
    /// Pointer is over the cell.
    Hovered,
    /// Cell content is frozen for the rest of the game.
    Locked,
    /// Cell displays fixed content (headers).
    ReadOnly,
    /// Placement preview: choosing this cell continues a valid placement.
    PlacementValid,
    /// Placement preview: choosing this cell is not a valid continuation.
    PlacementInvalid,
    /// Placement preview: cell lies on the hovered word path.
    PlacementPath,
    /// Placement preview: the committed first cell of the attempt.
    PlacementAnchor,
    /// Placement preview: the hovered second cell of the attempt.
    PlacementSecond,
    /// Unrevealed grid cell.
    Fog,
    /// Grid cell revealed by a guess.
    Revealed,
    /// Revealed cell containing a letter.
    Hit,
    /// Revealed cell containing nothing.
    Miss,
    /// Revealed cell whose letter belongs to an already-found word.
    WrongWord,
    /// Cell flagged for attention.
    Warning,
}

impl CellState {
    /// Every state, in declaration order.
    pub const ALL: [CellState; 19] = [
        CellState::None,
        CellState::Normal,
        CellState::Disabled,
        CellState::Hidden,
        CellState::Selected,
        CellState::Hovered,
        CellState::Locked,
        CellState::ReadOnly,
        CellState::PlacementValid,
        CellState::PlacementInvalid,
        CellState::PlacementPath,
        CellState::PlacementAnchor,
        CellState::PlacementSecond,
        CellState::Fog,
        CellState::Revealed,
        CellState::Hit,
        CellState::Miss,
        CellState::WrongWord,
        CellState::Warning,
    ];

    /// `true` for the transient placement preview states.
    ///
    /// These never survive a preview reconciliation pass; a grid cell
    /// outside an active placement attempt is never in one of them.
    pub fn is_placement_preview(self) -> bool {
        matches!(
            self,
            CellState::PlacementValid
                | CellState::PlacementInvalid
                | CellState::PlacementPath
                | CellState::PlacementAnchor
                | CellState::PlacementSecond
        )
    }
}

/// Which player a cell's content belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellOwner {
    /// No player owns the cell.
    Neutral,
    /// The first player.
    PlayerOne,
    /// The second player.
    PlayerTwo,
}

impl Default for CellOwner {
    fn default() -> Self {
        Self::Neutral
    }
}

/// One cell of the shared table.
///
/// A plain value record: reads hand out copies, and a stored cell always
/// carries the `(row, col)` it lives at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Table row this cell lives at.
    pub row: i32,
    /// Table column this cell lives at.
    pub col: i32,
    /// Structural classification.
    pub kind: CellKind,
    /// Interaction and display state.
    pub state: CellState,
    /// Displayed character, if any.
    pub ch: Option<char>,
    /// Displayed integer, if any (row header labels).
    pub value: Option<i32>,
    /// Owning player.
    pub owner: CellOwner,
}

impl Cell {
    /// Create an empty cell of the given kind at `(row, col)`.
    pub const fn new(row: i32, col: i32, kind: CellKind) -> Self {
        Self {
            row,
            col,
            kind,
            state: CellState::None,
            ch: None,
            value: None,
            owner: CellOwner::Neutral,
        }
    }

    /// The same cell with `state` replaced.
    pub const fn with_state(mut self, state: CellState) -> Self {
        self.state = state;
        self
    }

    /// The same cell with `ch` replaced.
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = Some(ch);
        self
    }

    /// The same cell with `value` replaced.
    pub const fn with_value(mut self, value: i32) -> Self {
        self.value = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_state_once() {
        assert_eq!(CellState::ALL.len(), 19);
        for (i, a) in CellState::ALL.iter().enumerate() {
            for b in &CellState::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn preview_states_are_exactly_the_placement_ones() {
        let preview: Vec<CellState> = CellState::ALL
            .iter()
            .copied()
            .filter(|s| s.is_placement_preview())
            .collect();
        assert_eq!(
            preview,
            vec![
                CellState::PlacementValid,
                CellState::PlacementInvalid,
                CellState::PlacementPath,
                CellState::PlacementAnchor,
                CellState::PlacementSecond,
            ]
        );
    }

    #[test]
    fn cell_builders_compose() {
        let cell = Cell::new(2, 3, CellKind::Grid)
            .with_state(CellState::Fog)
            .with_char('K');
        assert_eq!(cell.row, 2);
        assert_eq!(cell.col, 3);
        assert_eq!(cell.kind, CellKind::Grid);
        assert_eq!(cell.state, CellState::Fog);
        assert_eq!(cell.ch, Some('K'));
        assert_eq!(cell.value, None);
        assert_eq!(cell.owner, CellOwner::Neutral);
    }
}
