//! The owned cell matrix.

use std::fmt;

use crossbeam_channel::Receiver;

use crate::error::ModelError;
use crate::event::{ChannelObserver, ModelEvent, ModelObserver};
use wordfog_board::{Layout, RegionKind};
use wordfog_core::{
    Cell, CellKind, CellOwner, CellState, GridPos, ModelVersion, ObserverId, SlotPos, TablePos,
};

/// The shared cell matrix, sized and classified by a [`Layout`].
///
/// The model is the single owner of the backing storage. Reads return
/// copies; every mutation runs through a validated setter that bumps
/// [`version`](CellModel::version), sets the dirty flag, and notifies
/// observers synchronously before the setter returns. Out-of-bounds
/// coordinates are reported as [`ModelError`], never clamped.
pub struct CellModel {
    layout: Layout,
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
    version: ModelVersion,
    dirty: bool,
    observers: Vec<(ObserverId, Box<dyn ModelObserver>)>,
    next_observer: u64,
}

impl CellModel {
    /// Allocate and classify the matrix for `layout`.
    ///
    /// Every cell receives its kind, initial state, and header label in
    /// one pass: grid cells start in fog, word slots empty and normal,
    /// headers read-only with their labels stamped, spacers inert.
    pub fn new(layout: Layout) -> Self {
        let rows = layout.total_rows();
        let cols = layout.total_cols();
        let mut cells = Vec::with_capacity((rows as usize) * (cols as usize));
        for row in 0..rows {
            for col in 0..cols {
                cells.push(classified_cell(
                    &layout,
                    TablePos::new(row as i32, col as i32),
                ));
            }
        }
        Self {
            layout,
            rows,
            cols,
            cells,
            version: ModelVersion(0),
            dirty: false,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// The layout this model was built from.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Total rows of the matrix.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Total columns of the matrix.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Current model version. Strictly increases with every mutation.
    pub fn version(&self) -> ModelVersion {
        self.version
    }

    /// Whether any mutation happened since the last [`clear_dirty`].
    ///
    /// [`clear_dirty`]: CellModel::clear_dirty
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Reset the dirty flag. Does not change the version and emits no
    /// event.
    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    // ── Reads ──────────────────────────────────────────────────────

    /// Copy of the cell at a table coordinate, `None` outside the
    /// matrix.
    pub fn cell(&self, pos: TablePos) -> Option<Cell> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Copy of the cell at a grid coordinate.
    pub fn grid_cell(&self, pos: GridPos) -> Option<Cell> {
        self.layout.grid_to_table(pos).and_then(|t| self.cell(t))
    }

    /// Copy of the cell at a word-slot coordinate.
    pub fn slot_cell(&self, slot: SlotPos) -> Option<Cell> {
        self.layout.slot_to_table(slot).and_then(|t| self.cell(t))
    }

    // ── Table-frame mutators ───────────────────────────────────────

    /// Replace the whole cell record at `pos`.
    ///
    /// The stored record always carries the coordinate it lives at, so
    /// `cell.row`/`cell.col` are overwritten with `pos`.
    pub fn set_cell(&mut self, pos: TablePos, cell: Cell) -> Result<(), ModelError> {
        self.update(pos, |c| *c = cell)
    }

    /// Set the interaction state of the cell at `pos`.
    pub fn set_state(&mut self, pos: TablePos, state: CellState) -> Result<(), ModelError> {
        self.update(pos, |c| c.state = state)
    }

    /// Set or clear the displayed character of the cell at `pos`.
    pub fn set_char(&mut self, pos: TablePos, ch: Option<char>) -> Result<(), ModelError> {
        self.update(pos, |c| c.ch = ch)
    }

    /// Set or clear the displayed integer of the cell at `pos`.
    pub fn set_value(&mut self, pos: TablePos, value: Option<i32>) -> Result<(), ModelError> {
        self.update(pos, |c| c.value = value)
    }

    /// Set the structural kind of the cell at `pos`.
    pub fn set_kind(&mut self, pos: TablePos, kind: CellKind) -> Result<(), ModelError> {
        self.update(pos, |c| c.kind = kind)
    }

    /// Set the owning player of the cell at `pos`.
    pub fn set_owner(&mut self, pos: TablePos, owner: CellOwner) -> Result<(), ModelError> {
        self.update(pos, |c| c.owner = owner)
    }

    /// Set character and state together: one write, one event.
    pub fn set_char_and_state(
        &mut self,
        pos: TablePos,
        ch: Option<char>,
        state: CellState,
    ) -> Result<(), ModelError> {
        self.update(pos, |c| {
            c.ch = ch;
            c.state = state;
        })
    }

    // ── Grid-frame mutators ────────────────────────────────────────

    /// Set the interaction state of a grid cell.
    pub fn set_grid_state(&mut self, pos: GridPos, state: CellState) -> Result<(), ModelError> {
        let table = self.grid_table(pos)?;
        self.set_state(table, state)
    }

    /// Set the owning player of a grid cell.
    pub fn set_grid_owner(&mut self, pos: GridPos, owner: CellOwner) -> Result<(), ModelError> {
        let table = self.grid_table(pos)?;
        self.set_owner(table, owner)
    }

    /// Set character and state of a grid cell together: one event.
    pub fn set_grid_char_and_state(
        &mut self,
        pos: GridPos,
        ch: Option<char>,
        state: CellState,
    ) -> Result<(), ModelError> {
        let table = self.grid_table(pos)?;
        self.set_char_and_state(table, ch, state)
    }

    // ── Slot-frame mutators ────────────────────────────────────────

    /// Set or clear one character of a word entry row.
    pub fn set_slot_char(&mut self, slot: SlotPos, ch: Option<char>) -> Result<(), ModelError> {
        let table = self.slot_table(slot)?;
        self.set_char(table, ch)
    }

    // ── Reset ──────────────────────────────────────────────────────

    /// Reset every cell to its freshly-classified value in place.
    ///
    /// Reuses the existing allocation, bumps the version once, and
    /// emits a single [`ModelEvent::Cleared`] instead of a per-cell
    /// storm. Observer registrations survive.
    pub fn clear(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let pos = TablePos::new(row as i32, col as i32);
                let idx = (row * self.cols + col) as usize;
                self.cells[idx] = classified_cell(&self.layout, pos);
            }
        }
        self.bump();
        self.notify(&ModelEvent::Cleared);
    }

    // ── Observers ──────────────────────────────────────────────────

    /// Register an observer. Observers are notified in registration
    /// order, synchronously, inside every mutating call.
    pub fn subscribe(&mut self, observer: Box<dyn ModelObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    /// Remove a previously registered observer. Returns `false` when
    /// the handle is unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    /// Register a channel-backed observer and hand back the receiver.
    ///
    /// The receiver sees the same ordered, uncoalesced event stream as
    /// callback observers and can be drained at any later point. Use
    /// the returned id to unsubscribe.
    pub fn event_channel(&mut self) -> (ObserverId, Receiver<ModelEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        let id = self.subscribe(Box::new(ChannelObserver { tx }));
        (id, rx)
    }

    // ── Internals ──────────────────────────────────────────────────

    fn index_of(&self, pos: TablePos) -> Option<usize> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        let (row, col) = (pos.row as u32, pos.col as u32);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some((row * self.cols + col) as usize)
    }

    fn grid_table(&self, pos: GridPos) -> Result<TablePos, ModelError> {
        self.layout
            .grid_to_table(pos)
            .ok_or(ModelError::GridOutOfBounds {
                pos,
                size: self.layout.grid_size(),
            })
    }

    fn slot_table(&self, slot: SlotPos) -> Result<TablePos, ModelError> {
        self.layout
            .slot_to_table(slot)
            .ok_or(ModelError::SlotOutOfRange {
                slot,
                words: self.layout.word_count(),
                len: self.layout.grid_size(),
            })
    }

    /// Apply one mutation: validate, write, bump, notify.
    fn update<F: FnOnce(&mut Cell)>(&mut self, pos: TablePos, f: F) -> Result<(), ModelError> {
        let idx = self.index_of(pos).ok_or(ModelError::OutOfBounds {
            pos,
            rows: self.rows,
            cols: self.cols,
        })?;
        let cell = &mut self.cells[idx];
        f(cell);
        // Stored cells always carry their own location.
        cell.row = pos.row;
        cell.col = pos.col;
        let written = *cell;
        self.bump();
        self.notify(&ModelEvent::CellChanged { pos, cell: written });
        Ok(())
    }

    fn bump(&mut self) {
        self.version.0 += 1;
        self.dirty = true;
    }

    fn notify(&mut self, event: &ModelEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_event(event);
        }
    }
}

impl fmt::Debug for CellModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellModel")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("version", &self.version)
            .field("dirty", &self.dirty)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// The freshly-classified cell for one table coordinate.
///
/// Regions are probed in the layout's fixed order, so classification
/// stays deterministic even if a future layout shape let regions touch.
fn classified_cell(layout: &Layout, pos: TablePos) -> Cell {
    let region = match layout.region_at(pos) {
        Some(r) => r,
        None => return Cell::new(pos.row, pos.col, CellKind::Spacer),
    };
    match region.kind() {
        RegionKind::Grid => Cell::new(pos.row, pos.col, CellKind::Grid).with_state(CellState::Fog),
        RegionKind::ColumnHeaders => {
            let local_col = pos.col as u32 - region.col_start();
            Cell::new(pos.row, pos.col, CellKind::ColumnHeader)
                .with_state(CellState::ReadOnly)
                .with_char(Layout::column_header_char(local_col))
        }
        RegionKind::RowHeaders => {
            let local_row = pos.row as u32 - region.row_start();
            Cell::new(pos.row, pos.col, CellKind::RowHeader)
                .with_state(CellState::ReadOnly)
                .with_value(Layout::row_header_number(local_row))
        }
        RegionKind::WordRows => {
            Cell::new(pos.row, pos.col, CellKind::WordSlot).with_state(CellState::Normal)
        }
    }
}
