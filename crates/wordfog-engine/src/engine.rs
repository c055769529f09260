//! The placement engine: validity checking, the two-click flow,
//! randomized search, and claim-counted clearing.

use std::fmt;

use crossbeam_channel::Receiver;
use indexmap::IndexMap;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use wordfog_board::Layout;
use wordfog_core::{CellOwner, CellState, GridPos, ObserverId, SlotPos};
use wordfog_model::{CellModel, ModelError, ModelEvent, ModelObserver};

use crate::config::{ConfigError, SetupConfig};
use crate::direction::Direction;
use crate::error::PlacementError;
use crate::event::{ChannelObserver, PlacementEvent, PlacementObserver};
use crate::view::PlacementView;

/// Outcome of feeding one click to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The click was not the engine's to handle: no placement is in
    /// progress, or the cell is outside the playable grid.
    NotHandled,
    /// The clicked cell cannot start the word in any direction. The
    /// engine stays in first-cell selection.
    Rejected,
    /// The first cell was accepted; the engine now waits for a second
    /// click to choose the direction.
    AnchorSelected,
    /// The second cell completed a valid placement and the word is now
    /// on the grid.
    Committed,
    /// The second click did not select a valid neighbour and the whole
    /// attempt was abandoned.
    Cancelled,
}

/// A committed placement of one word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementRecord {
    /// The word as committed, uppercase.
    pub word: String,
    /// Grid cell of the first letter.
    pub start: GridPos,
    /// The direction the letters run in.
    pub direction: Direction,
    /// Grid cell of every letter, in letter order.
    pub positions: Vec<GridPos>,
}

/// A committed letter on one grid cell and the number of placed words
/// claiming it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PlacedLetter {
    pub(crate) ch: char,
    pub(crate) claims: u32,
}

/// The two-click placement state machine.
#[derive(Debug)]
enum Phase {
    Inactive,
    SelectingFirstCell {
        word_index: usize,
        word: String,
    },
    SelectingDirection {
        word_index: usize,
        word: String,
        anchor: GridPos,
        seconds: SmallVec<[GridPos; 8]>,
    },
}

/// Places words on the playable grid of a [`CellModel`].
///
/// The engine owns its model exclusively. All grid writes flow through
/// it, which is what lets the claim map in here stay authoritative: a
/// cell is occupied if and only if it has an entry with a nonzero claim
/// count.
///
/// Every operation works in grid coordinates. Callers holding table
/// coordinates go through [`crate::PlacementAdapter`] instead.
pub struct PlacementEngine {
    model: CellModel,
    words: Vec<String>,
    placing_owner: CellOwner,
    phase: Phase,
    records: Vec<Option<PlacementRecord>>,
    letters: IndexMap<GridPos, PlacedLetter>,
    observers: Vec<(ObserverId, Box<dyn PlacementObserver>)>,
    next_observer: u64,
    rng: ChaCha8Rng,
}

impl PlacementEngine {
    // ── Construction ────────────────────────────────────────────

    /// Builds an engine, its board and its cell model from a validated
    /// configuration. Word rows are stamped with the configured words,
    /// uppercased; the grid starts fully fogged.
    pub fn new(config: SetupConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = Layout::for_gameplay(config.grid_size, config.words.len() as u32)?;
        let words = config.normalized_words();
        let mut engine = Self {
            model: CellModel::new(layout),
            placing_owner: config.placing_owner,
            phase: Phase::Inactive,
            records: vec![None; words.len()],
            letters: IndexMap::new(),
            observers: Vec::new(),
            next_observer: 0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            words,
        };
        for index in 0..engine.words.len() {
            engine.stamp_word_row(index)?;
        }
        Ok(engine)
    }

    // ── Accessors ───────────────────────────────────────────────

    /// The cell model this engine draws on.
    pub fn model(&self) -> &CellModel {
        &self.model
    }

    /// Edge length of the playable grid, in cells.
    pub fn grid_size(&self) -> u32 {
        self.model.layout().grid_size()
    }

    /// The current word per slot. Committing a placement updates the
    /// slot it filled.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// A read-only view of committed placements.
    pub fn view(&self) -> PlacementView<'_> {
        PlacementView::new(self)
    }

    /// True while an interactive placement attempt is in progress.
    pub fn is_placing(&self) -> bool {
        !matches!(self.phase, Phase::Inactive)
    }

    /// The word slot the current interactive attempt is for, if any.
    pub fn active_word(&self) -> Option<usize> {
        match &self.phase {
            Phase::Inactive => None,
            Phase::SelectingFirstCell { word_index, .. }
            | Phase::SelectingDirection { word_index, .. } => Some(*word_index),
        }
    }

    /// True if the slot currently has a committed placement.
    pub fn is_placed(&self, word_index: usize) -> bool {
        self.records.get(word_index).map_or(false, |r| r.is_some())
    }

    pub(crate) fn letters(&self) -> &IndexMap<GridPos, PlacedLetter> {
        &self.letters
    }

    pub(crate) fn records(&self) -> &[Option<PlacementRecord>] {
        &self.records
    }

    // ── Validity ────────────────────────────────────────────────

    /// True if `word`, uppercased, fits the grid starting at `start`
    /// and running along `direction`: every letter lands on the grid,
    /// and every occupied cell it crosses already holds the same
    /// letter. An empty word is never valid.
    pub fn is_valid_placement(&self, word: &str, start: GridPos, direction: Direction) -> bool {
        if word.is_empty() {
            return false;
        }
        for (i, ch) in word.chars().map(|c| c.to_ascii_uppercase()).enumerate() {
            let pos = direction.step_from(start, i as i32);
            if !self.in_grid(pos) {
                return false;
            }
            if let Some(placed) = self.letters.get(&pos) {
                if placed.ch != ch {
                    return false;
                }
            }
        }
        true
    }

    /// Every direction `word` could run in from `start`.
    pub fn valid_directions(&self, word: &str, start: GridPos) -> SmallVec<[Direction; 8]> {
        Direction::ALL
            .into_iter()
            .filter(|d| self.is_valid_placement(word, start, *d))
            .collect()
    }

    fn valid_second_cells(&self, word: &str, anchor: GridPos) -> SmallVec<[GridPos; 8]> {
        let mut seconds = SmallVec::new();
        for direction in Direction::ALL {
            if self.is_valid_placement(word, anchor, direction) {
                seconds.push(direction.step_from(anchor, 1));
            }
        }
        seconds
    }

    fn in_grid(&self, pos: GridPos) -> bool {
        let size = self.grid_size() as i32;
        pos.col >= 0 && pos.col < size && pos.row >= 0 && pos.row < size
    }

    // ── Interactive placement ───────────────────────────────────

    /// Starts an interactive placement attempt for `word` into the
    /// given slot. An attempt already in progress is cancelled first,
    /// and a previously committed placement of that slot is cleared so
    /// the word can be re-placed.
    pub fn enter_placement_mode(&mut self, word_index: usize, word: &str) -> Result<(), PlacementError> {
        let word = self.checked_word(word_index, word)?;
        if self.is_placing() {
            self.cancel_placement_mode()?;
        }
        if self.is_placed(word_index) {
            self.clear_word(word_index)?;
        }
        self.phase = Phase::SelectingFirstCell { word_index, word };
        Ok(())
    }

    /// Abandons the interactive attempt in progress, restoring any
    /// preview cells and emitting [`PlacementEvent::Cancelled`].
    /// Returns false if no attempt was active.
    pub fn cancel_placement_mode(&mut self) -> Result<bool, PlacementError> {
        match std::mem::replace(&mut self.phase, Phase::Inactive) {
            Phase::Inactive => Ok(false),
            Phase::SelectingFirstCell { word_index, .. }
            | Phase::SelectingDirection { word_index, .. } => {
                self.clear_placement_highlighting()?;
                self.emit(PlacementEvent::Cancelled { word_index });
                Ok(true)
            }
        }
    }

    /// Feeds one grid click to the state machine.
    pub fn handle_grid_click(&mut self, pos: GridPos) -> Result<ClickOutcome, PlacementError> {
        if !self.in_grid(pos) {
            return Ok(ClickOutcome::NotHandled);
        }
        match std::mem::replace(&mut self.phase, Phase::Inactive) {
            Phase::Inactive => Ok(ClickOutcome::NotHandled),
            Phase::SelectingFirstCell { word_index, word } => {
                let seconds = self.valid_second_cells(&word, pos);
                if seconds.is_empty() {
                    // No direction fits from here. Refuse the anchor but
                    // keep the attempt alive.
                    self.phase = Phase::SelectingFirstCell { word_index, word };
                    return Ok(ClickOutcome::Rejected);
                }
                self.paint_anchor_preview(&word, pos, &seconds)?;
                self.phase = Phase::SelectingDirection {
                    word_index,
                    word,
                    anchor: pos,
                    seconds,
                };
                Ok(ClickOutcome::AnchorSelected)
            }
            Phase::SelectingDirection { word_index, word, anchor, seconds } => {
                match Direction::between(anchor, pos) {
                    Some(direction) if seconds.contains(&pos) => {
                        self.commit_placement(word_index, &word, anchor, direction)?;
                        Ok(ClickOutcome::Committed)
                    }
                    _ => {
                        // Anything but a lit second cell abandons the attempt.
                        self.clear_placement_highlighting()?;
                        self.emit(PlacementEvent::Cancelled { word_index });
                        Ok(ClickOutcome::Cancelled)
                    }
                }
            }
        }
    }

    /// Feeds one grid hover to the preview painter. Hovers outside the
    /// grid, or while no attempt is active, do nothing.
    pub fn handle_grid_hover(&mut self, pos: GridPos) -> Result<(), PlacementError> {
        if !self.in_grid(pos) {
            return Ok(());
        }
        match &self.phase {
            Phase::Inactive => Ok(()),
            Phase::SelectingFirstCell { word, .. } => {
                let word = word.clone();
                self.paint_hover_preview(&word, pos)
            }
            Phase::SelectingDirection { word, anchor, seconds, .. } => {
                let word = word.clone();
                let anchor = *anchor;
                let seconds = seconds.clone();
                if seconds.contains(&pos) {
                    self.paint_path_preview(&word, anchor, pos, &seconds)
                } else {
                    self.paint_anchor_preview(&word, anchor, &seconds)
                }
            }
        }
    }

    // ── Random placement ────────────────────────────────────────

    /// Places `word` into the slot at a position and direction chosen
    /// uniformly from every valid candidate, using the engine's own
    /// seeded generator. Returns false if the word fits nowhere.
    pub fn place_word_randomly(&mut self, word_index: usize, word: &str) -> Result<bool, PlacementError> {
        let mut rng = self.rng.clone();
        let placed = self.place_word_randomly_with(word_index, word, &mut rng);
        self.rng = rng;
        placed
    }

    /// [`Self::place_word_randomly`] with a caller-supplied generator.
    pub fn place_word_randomly_with<R: Rng + ?Sized>(
        &mut self,
        word_index: usize,
        word: &str,
        rng: &mut R,
    ) -> Result<bool, PlacementError> {
        let word = self.checked_word(word_index, word)?;
        if self.is_placing() {
            self.cancel_placement_mode()?;
        }
        if self.is_placed(word_index) {
            self.clear_word(word_index)?;
        }

        let size = self.grid_size() as i32;
        let mut candidates: Vec<(GridPos, Direction)> = Vec::new();
        for row in 0..size {
            for col in 0..size {
                let start = GridPos::new(col, row);
                for direction in Direction::ALL {
                    if self.is_valid_placement(&word, start, direction) {
                        candidates.push((start, direction));
                    }
                }
            }
        }
        if candidates.is_empty() {
            return Ok(false);
        }
        candidates.shuffle(rng);
        let (start, direction) = candidates[0];
        self.commit_placement(word_index, &word, start, direction)?;
        Ok(true)
    }

    // ── Clearing ────────────────────────────────────────────────

    /// Removes the slot's committed placement, dropping one claim from
    /// each of its cells. Cells still claimed by a crossing word keep
    /// their letter; the rest return to fog. Returns false if the slot
    /// had no placement.
    pub fn clear_word(&mut self, word_index: usize) -> Result<bool, PlacementError> {
        if word_index >= self.words.len() {
            return Err(PlacementError::WordIndexOutOfRange {
                index: word_index,
                count: self.words.len(),
            });
        }
        let record = match self.records[word_index].take() {
            Some(record) => record,
            None => return Ok(false),
        };
        for pos in record.positions {
            let claims_left = match self.letters.get_mut(&pos) {
                Some(placed) => {
                    placed.claims -= 1;
                    placed.claims
                }
                None => {
                    debug_assert!(false, "committed cell {pos} missing from the claim map");
                    continue;
                }
            };
            if claims_left == 0 {
                self.letters.shift_remove(&pos);
                self.model.set_grid_char_and_state(pos, None, CellState::Fog)?;
                self.model.set_grid_owner(pos, CellOwner::Neutral)?;
            }
        }
        Ok(true)
    }

    /// Removes every committed placement and returns the whole grid to
    /// fog. An interactive attempt in progress is cancelled first.
    pub fn clear_all_placed_words(&mut self) -> Result<(), PlacementError> {
        if self.is_placing() {
            self.cancel_placement_mode()?;
        }
        self.letters.clear();
        for record in &mut self.records {
            *record = None;
        }
        let size = self.grid_size() as i32;
        for row in 0..size {
            for col in 0..size {
                let pos = GridPos::new(col, row);
                self.model.set_grid_char_and_state(pos, None, CellState::Fog)?;
                self.model.set_grid_owner(pos, CellOwner::Neutral)?;
            }
        }
        Ok(())
    }

    /// Restores every grid cell to ground truth: committed letters
    /// shown normal, every other cell fogged. This is the single
    /// reconciliation point between transient preview paint and the
    /// claim map. Cells already at ground truth are not rewritten, so
    /// reconciling a quiet grid emits no events.
    pub fn clear_placement_highlighting(&mut self) -> Result<(), PlacementError> {
        let size = self.grid_size() as i32;
        for row in 0..size {
            for col in 0..size {
                let pos = GridPos::new(col, row);
                // The hover cursor and the placement previews are the
                // only transient paint; every other state already shows
                // ground truth.
                let transient = self.model.grid_cell(pos).is_some_and(|cell| {
                    cell.state.is_placement_preview() || cell.state == CellState::Hovered
                });
                if !transient {
                    continue;
                }
                match self.letters.get(&pos).copied() {
                    Some(placed) => {
                        self.model
                            .set_grid_char_and_state(pos, Some(placed.ch), CellState::Normal)?;
                    }
                    None => {
                        self.model.set_grid_char_and_state(pos, None, CellState::Fog)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Returns the engine to its freshly constructed state and reseeds
    /// the randomized search. An interactive attempt in progress emits
    /// [`PlacementEvent::Cancelled`] first.
    pub fn reset(&mut self, seed: u64) -> Result<(), PlacementError> {
        match std::mem::replace(&mut self.phase, Phase::Inactive) {
            Phase::Inactive => {}
            Phase::SelectingFirstCell { word_index, .. }
            | Phase::SelectingDirection { word_index, .. } => {
                self.emit(PlacementEvent::Cancelled { word_index });
            }
        }
        self.letters.clear();
        for record in &mut self.records {
            *record = None;
        }
        self.model.clear();
        for index in 0..self.words.len() {
            self.stamp_word_row(index)?;
        }
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        Ok(())
    }

    // ── Observers ───────────────────────────────────────────────

    /// Registers an observer. Observers are notified synchronously in
    /// registration order.
    pub fn subscribe(&mut self, observer: Box<dyn PlacementObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes an observer. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Registers a channel-backed observer and returns the receiving
    /// end along with the id to unsubscribe with.
    pub fn event_channel(&mut self) -> (ObserverId, Receiver<PlacementEvent>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        let id = self.subscribe(Box::new(ChannelObserver { tx }));
        (id, rx)
    }

    /// Registers a cell-change observer on the underlying model. The
    /// engine owns its model exclusively, so this is how callers watch
    /// individual cells repaint.
    pub fn subscribe_cells(&mut self, observer: Box<dyn ModelObserver>) -> ObserverId {
        self.model.subscribe(observer)
    }

    /// Removes a cell-change observer registered through
    /// [`Self::subscribe_cells`].
    pub fn unsubscribe_cells(&mut self, id: ObserverId) -> bool {
        self.model.unsubscribe(id)
    }

    /// Channel-backed cell-change observer on the underlying model.
    pub fn cell_event_channel(&mut self) -> (ObserverId, Receiver<ModelEvent>) {
        self.model.event_channel()
    }

    fn emit(&mut self, event: PlacementEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_event(&event);
        }
    }

    // ── Internals ───────────────────────────────────────────────

    fn checked_word(&self, word_index: usize, word: &str) -> Result<String, PlacementError> {
        if word.is_empty() {
            return Err(PlacementError::EmptyWord);
        }
        let len = word.chars().count();
        if len < SetupConfig::MIN_WORD_LEN {
            return Err(PlacementError::WordTooShort {
                len,
                min: SetupConfig::MIN_WORD_LEN,
            });
        }
        if word_index >= self.words.len() {
            return Err(PlacementError::WordIndexOutOfRange {
                index: word_index,
                count: self.words.len(),
            });
        }
        Ok(word.to_ascii_uppercase())
    }

    /// Commits a placement already known to be valid: paints the
    /// letters, records the placement, merges its claims, then emits
    /// [`PlacementEvent::WordPlaced`], in that order.
    fn commit_placement(
        &mut self,
        word_index: usize,
        word: &str,
        start: GridPos,
        direction: Direction,
    ) -> Result<(), PlacementError> {
        debug_assert!(self.is_valid_placement(word, start, direction));
        self.clear_placement_highlighting()?;

        let positions: Vec<GridPos> = (0..word.chars().count() as i32)
            .map(|i| direction.step_from(start, i))
            .collect();

        for (pos, ch) in positions.iter().zip(word.chars()) {
            self.model.set_grid_char_and_state(*pos, Some(ch), CellState::Normal)?;
            self.model.set_grid_owner(*pos, self.placing_owner)?;
        }

        self.records[word_index] = Some(PlacementRecord {
            word: word.to_string(),
            start,
            direction,
            positions: positions.clone(),
        });
        self.words[word_index] = word.to_string();
        self.stamp_word_row(word_index)?;

        for (pos, ch) in positions.iter().zip(word.chars()) {
            match self.letters.get_mut(pos) {
                Some(placed) => {
                    debug_assert_eq!(placed.ch, ch);
                    placed.claims += 1;
                }
                None => {
                    self.letters.insert(*pos, PlacedLetter { ch, claims: 1 });
                }
            }
        }

        self.phase = Phase::Inactive;
        self.emit(PlacementEvent::WordPlaced {
            word_index,
            word: word.to_string(),
            positions,
        });
        Ok(())
    }

    /// Writes the slot's word into its row, one letter per cell, and
    /// blanks the cells past the word's end.
    fn stamp_word_row(&mut self, word_index: usize) -> Result<(), ModelError> {
        let word: Vec<char> = self.words[word_index].chars().collect();
        for index in 0..self.model.layout().grid_size() {
            let ch = word.get(index as usize).copied();
            self.model.set_slot_char(SlotPos::new(word_index as u32, index), ch)?;
        }
        Ok(())
    }

    // ── Preview painting ────────────────────────────────────────

    /// First-click hover: the cursor cell, ringed by a per-direction
    /// verdict on each in-grid neighbour.
    fn paint_hover_preview(&mut self, word: &str, pos: GridPos) -> Result<(), PlacementError> {
        self.clear_placement_highlighting()?;
        self.model.set_grid_state(pos, CellState::Hovered)?;
        for direction in Direction::ALL {
            let second = direction.step_from(pos, 1);
            if !self.in_grid(second) {
                continue;
            }
            let state = if self.is_valid_placement(word, pos, direction) {
                CellState::PlacementValid
            } else {
                CellState::PlacementInvalid
            };
            self.model.set_grid_state(second, state)?;
        }
        Ok(())
    }

    /// Anchor accepted: the first letter shown on the anchor, with
    /// every selectable second cell lit.
    fn paint_anchor_preview(
        &mut self,
        word: &str,
        anchor: GridPos,
        seconds: &[GridPos],
    ) -> Result<(), PlacementError> {
        self.clear_placement_highlighting()?;
        if let Some(first) = word.chars().next() {
            self.model
                .set_grid_char_and_state(anchor, Some(first), CellState::PlacementAnchor)?;
        }
        for &second in seconds {
            self.model.set_grid_state(second, CellState::PlacementValid)?;
        }
        Ok(())
    }

    /// Second-click hover over a selectable cell: the anchor preview
    /// plus the full path the word would take.
    fn paint_path_preview(
        &mut self,
        word: &str,
        anchor: GridPos,
        second: GridPos,
        seconds: &[GridPos],
    ) -> Result<(), PlacementError> {
        self.paint_anchor_preview(word, anchor, seconds)?;
        let direction = match Direction::between(anchor, second) {
            Some(direction) => direction,
            None => {
                debug_assert!(false, "selectable cell {second} is not adjacent to {anchor}");
                return Ok(());
            }
        };
        self.model.set_grid_state(second, CellState::PlacementSecond)?;
        for i in 2..word.chars().count() as i32 {
            self.model
                .set_grid_state(direction.step_from(anchor, i), CellState::PlacementPath)?;
        }
        Ok(())
    }
}

impl fmt::Debug for PlacementEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlacementEngine")
            .field("grid_size", &self.grid_size())
            .field("words", &self.words)
            .field("placing_owner", &self.placing_owner)
            .field("phase", &self.phase)
            .field("letters", &self.letters.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wordfog_board::BoardError;

    fn engine(grid_size: u32, words: &[&str]) -> PlacementEngine {
        PlacementEngine::new(SetupConfig {
            grid_size,
            words: words.iter().map(|w| w.to_string()).collect(),
            placing_owner: CellOwner::PlayerOne,
            seed: 42,
        })
        .unwrap()
    }

    /// Drives the two-click flow to put `word` at a known spot.
    fn place(engine: &mut PlacementEngine, word_index: usize, word: &str, start: GridPos, direction: Direction) {
        engine.enter_placement_mode(word_index, word).unwrap();
        assert_eq!(engine.handle_grid_click(start).unwrap(), ClickOutcome::AnchorSelected);
        let second = direction.step_from(start, 1);
        assert_eq!(engine.handle_grid_click(second).unwrap(), ClickOutcome::Committed);
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_stamps_word_rows_and_fogs_the_grid() {
        let engine = engine(6, &["cat", "HORSE"]);
        let model = engine.model();

        assert_eq!(model.slot_cell(SlotPos::new(0, 0)).unwrap().ch, Some('C'));
        assert_eq!(model.slot_cell(SlotPos::new(0, 2)).unwrap().ch, Some('T'));
        assert_eq!(model.slot_cell(SlotPos::new(0, 3)).unwrap().ch, None);
        assert_eq!(model.slot_cell(SlotPos::new(1, 4)).unwrap().ch, Some('E'));

        for row in 0..6 {
            for col in 0..6 {
                let cell = model.grid_cell(GridPos::new(col, row)).unwrap();
                assert_eq!(cell.state, CellState::Fog);
                assert_eq!(cell.ch, None);
            }
        }
    }

    #[test]
    fn construction_rejects_bad_configs() {
        let result = PlacementEngine::new(SetupConfig {
            grid_size: 0,
            words: vec!["CAT".to_string()],
            placing_owner: CellOwner::Neutral,
            seed: 0,
        });
        match result {
            Err(ConfigError::Board(BoardError::EmptyGrid)) => {}
            other => panic!("expected Board(EmptyGrid), got {other:?}"),
        }
    }

    #[test]
    fn a_wordless_setup_constructs_and_rejects_slot_operations() {
        let mut engine = engine(6, &[]);
        assert_eq!(engine.model().layout().word_count(), 0);
        assert_eq!(engine.view().placed_count(), 0);

        match engine.enter_placement_mode(0, "CAT") {
            Err(PlacementError::WordIndexOutOfRange { index: 0, count: 0 }) => {}
            other => panic!("expected WordIndexOutOfRange, got {other:?}"),
        }
        match engine.place_word_randomly(0, "CAT") {
            Err(PlacementError::WordIndexOutOfRange { index: 0, count: 0 }) => {}
            other => panic!("expected WordIndexOutOfRange, got {other:?}"),
        }
        match engine.clear_word(0) {
            Err(PlacementError::WordIndexOutOfRange { index: 0, count: 0 }) => {}
            other => panic!("expected WordIndexOutOfRange, got {other:?}"),
        }
    }

    // ── Validity ────────────────────────────────────────────────

    #[test]
    fn validity_respects_grid_bounds() {
        let engine = engine(6, &["CAT"]);
        let origin = GridPos::new(0, 0);
        assert!(engine.is_valid_placement("CAT", origin, Direction::East));
        assert!(engine.is_valid_placement("CAT", origin, Direction::SouthEast));
        assert!(!engine.is_valid_placement("CAT", origin, Direction::West));
        assert!(!engine.is_valid_placement("CAT", origin, Direction::North));

        let corner = GridPos::new(5, 5);
        assert!(engine.is_valid_placement("CAT", corner, Direction::NorthWest));
        assert!(!engine.is_valid_placement("CAT", corner, Direction::South));
    }

    #[test]
    fn validity_is_case_insensitive() {
        let engine = engine(6, &["CAT"]);
        assert!(engine.is_valid_placement("cat", GridPos::new(0, 0), Direction::East));
    }

    #[test]
    fn empty_word_is_never_valid() {
        let engine = engine(6, &["CAT"]);
        assert!(!engine.is_valid_placement("", GridPos::new(3, 3), Direction::East));
    }

    #[test]
    fn validity_agrees_with_span_arithmetic_everywhere() {
        // On an empty grid, validity is exactly "the far end stays on
        // the grid", for every start, direction, and length.
        let engine = engine(6, &["AB"]);
        for len in 1..=6usize {
            let word = &"ABCDEF"[..len];
            for row in 0..6 {
                for col in 0..6 {
                    let start = GridPos::new(col, row);
                    for direction in Direction::ALL {
                        let (d_col, d_row) = direction.delta();
                        let end_col = col + d_col * (len as i32 - 1);
                        let end_row = row + d_row * (len as i32 - 1);
                        let fits = (0..6).contains(&end_col) && (0..6).contains(&end_row);
                        assert_eq!(
                            engine.is_valid_placement(word, start, direction),
                            fits,
                            "len {len} at {start} heading {direction}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn crossing_letters_must_match() {
        let mut engine = engine(6, &["CAT", "AXE"]);
        place(&mut engine, 0, "CAT", GridPos::new(0, 0), Direction::East);

        // AXE southward from (1, 0) would put A on CAT's A.
        assert!(engine.is_valid_placement("AXE", GridPos::new(1, 0), Direction::South));
        // AXE southward from (0, 0) would put A on CAT's C.
        assert!(!engine.is_valid_placement("AXE", GridPos::new(0, 0), Direction::South));
    }

    // ── Interactive flow ────────────────────────────────────────

    #[test]
    fn click_without_an_active_attempt_is_not_handled() {
        let mut engine = engine(6, &["CAT"]);
        assert_eq!(engine.handle_grid_click(GridPos::new(2, 2)).unwrap(), ClickOutcome::NotHandled);
    }

    #[test]
    fn click_outside_the_grid_is_not_handled_even_mid_attempt() {
        let mut engine = engine(6, &["CAT"]);
        engine.enter_placement_mode(0, "CAT").unwrap();
        assert_eq!(engine.handle_grid_click(GridPos::new(6, 0)).unwrap(), ClickOutcome::NotHandled);
        assert_eq!(engine.handle_grid_click(GridPos::new(-1, 3)).unwrap(), ClickOutcome::NotHandled);
        assert!(engine.is_placing());
    }

    #[test]
    fn anchor_with_no_valid_direction_is_rejected() {
        let mut engine = engine(2, &["AB", "CD", "EF"]);
        place(&mut engine, 1, "CD", GridPos::new(0, 0), Direction::East);
        place(&mut engine, 2, "EF", GridPos::new(0, 1), Direction::East);

        // Every cell now holds a letter AB disagrees with, so no anchor
        // works, and refusal must keep the attempt alive.
        engine.enter_placement_mode(0, "AB").unwrap();
        assert_eq!(engine.handle_grid_click(GridPos::new(0, 0)).unwrap(), ClickOutcome::Rejected);
        assert_eq!(engine.handle_grid_click(GridPos::new(1, 1)).unwrap(), ClickOutcome::Rejected);
        assert!(engine.is_placing());
        assert_eq!(engine.active_word(), Some(0));
    }

    #[test]
    fn second_click_away_from_a_lit_cell_cancels() {
        let mut engine = engine(6, &["CAT"]);
        engine.enter_placement_mode(0, "CAT").unwrap();
        assert_eq!(engine.handle_grid_click(GridPos::new(0, 0)).unwrap(), ClickOutcome::AnchorSelected);
        assert_eq!(engine.handle_grid_click(GridPos::new(4, 4)).unwrap(), ClickOutcome::Cancelled);
        assert!(!engine.is_placing());
        assert!(!engine.is_placed(0));
    }

    #[test]
    fn second_click_on_the_anchor_cancels() {
        let mut engine = engine(6, &["CAT"]);
        engine.enter_placement_mode(0, "CAT").unwrap();
        engine.handle_grid_click(GridPos::new(2, 2)).unwrap();
        assert_eq!(engine.handle_grid_click(GridPos::new(2, 2)).unwrap(), ClickOutcome::Cancelled);
    }

    #[test]
    fn committed_placement_is_recorded_and_painted() {
        let mut engine = engine(6, &["CAT"]);
        place(&mut engine, 0, "CAT", GridPos::new(1, 1), Direction::South);

        let record = engine.view().placement(0).unwrap().clone();
        assert_eq!(record.word, "CAT");
        assert_eq!(record.start, GridPos::new(1, 1));
        assert_eq!(record.direction, Direction::South);
        assert_eq!(
            record.positions,
            vec![GridPos::new(1, 1), GridPos::new(1, 2), GridPos::new(1, 3)]
        );

        for (pos, ch) in record.positions.iter().zip("CAT".chars()) {
            let cell = engine.model().grid_cell(*pos).unwrap();
            assert_eq!(cell.ch, Some(ch));
            assert_eq!(cell.state, CellState::Normal);
            assert_eq!(cell.owner, CellOwner::PlayerOne);
        }
        assert!(!engine.is_placing());
    }

    #[test]
    fn entering_placement_mode_again_clears_the_previous_placement() {
        let mut engine = engine(6, &["CAT"]);
        place(&mut engine, 0, "CAT", GridPos::new(0, 0), Direction::East);
        engine.enter_placement_mode(0, "CAT").unwrap();

        assert!(!engine.is_placed(0));
        let cell = engine.model().grid_cell(GridPos::new(0, 0)).unwrap();
        assert_eq!(cell.state, CellState::Fog);
        assert_eq!(cell.ch, None);
    }

    #[test]
    fn word_checks_fail_loudly() {
        let mut engine = engine(6, &["CAT"]);
        match engine.enter_placement_mode(0, "") {
            Err(PlacementError::EmptyWord) => {}
            other => panic!("expected EmptyWord, got {other:?}"),
        }
        match engine.enter_placement_mode(0, "A") {
            Err(PlacementError::WordTooShort { len: 1, min: 2 }) => {}
            other => panic!("expected WordTooShort, got {other:?}"),
        }
        match engine.enter_placement_mode(3, "CAT") {
            Err(PlacementError::WordIndexOutOfRange { index: 3, count: 1 }) => {}
            other => panic!("expected WordIndexOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn cancel_without_an_attempt_returns_false() {
        let mut engine = engine(6, &["CAT"]);
        assert!(!engine.cancel_placement_mode().unwrap());
    }

    // ── Events ──────────────────────────────────────────────────

    #[test]
    fn commit_emits_word_placed() {
        let mut engine = engine(6, &["CAT"]);
        let (_, rx) = engine.event_channel();
        place(&mut engine, 0, "cat", GridPos::new(0, 0), Direction::SouthEast);

        match rx.try_recv() {
            Ok(PlacementEvent::WordPlaced { word_index: 0, word, positions }) => {
                assert_eq!(word, "CAT");
                assert_eq!(
                    positions,
                    vec![GridPos::new(0, 0), GridPos::new(1, 1), GridPos::new(2, 2)]
                );
            }
            other => panic!("expected WordPlaced, got {other:?}"),
        }
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn cancel_emits_cancelled() {
        let mut engine = engine(6, &["CAT"]);
        let (_, rx) = engine.event_channel();
        engine.enter_placement_mode(0, "CAT").unwrap();
        engine.cancel_placement_mode().unwrap();

        match rx.try_recv() {
            Ok(PlacementEvent::Cancelled { word_index: 0 }) => {}
            other => panic!("expected Cancelled, got {other:?}"),
        }
    }

    #[test]
    fn unsubscribed_observers_stop_receiving() {
        let mut engine = engine(6, &["CAT"]);
        let (id, rx) = engine.event_channel();
        assert!(engine.unsubscribe(id));
        place(&mut engine, 0, "CAT", GridPos::new(0, 0), Direction::East);
        assert!(rx.try_recv().is_err());
    }

    // ── Clearing ────────────────────────────────────────────────

    #[test]
    fn clear_word_returns_the_cells_to_fog() {
        let mut engine = engine(6, &["CAT"]);
        place(&mut engine, 0, "CAT", GridPos::new(2, 0), Direction::South);

        assert!(engine.clear_word(0).unwrap());
        assert!(!engine.is_placed(0));
        for row in 0..3 {
            let cell = engine.model().grid_cell(GridPos::new(2, row)).unwrap();
            assert_eq!(cell.state, CellState::Fog);
            assert_eq!(cell.ch, None);
            assert_eq!(cell.owner, CellOwner::Neutral);
        }
    }

    #[test]
    fn clear_word_without_a_placement_returns_false() {
        let mut engine = engine(6, &["CAT"]);
        assert!(!engine.clear_word(0).unwrap());
    }

    #[test]
    fn reconciliation_rewrites_only_transient_cells() {
        let mut engine = engine(6, &["CAT", "AXE"]);
        place(&mut engine, 0, "CAT", GridPos::new(0, 0), Direction::East);

        // A grid with no preview on it reconciles without a write.
        let (_id, events) = engine.cell_event_channel();
        engine.clear_placement_highlighting().unwrap();
        assert_eq!(events.try_iter().count(), 0);

        // Hovering paints the cursor and its verdict ring; reconciling
        // writes exactly those cells back and nothing else.
        engine.enter_placement_mode(1, "AXE").unwrap();
        engine.handle_grid_hover(GridPos::new(1, 0)).unwrap();
        let painted = events.try_iter().count();
        engine.clear_placement_highlighting().unwrap();
        assert_eq!(events.try_iter().count(), painted);

        // A second sweep finds only ground truth and stays quiet.
        engine.clear_placement_highlighting().unwrap();
        assert_eq!(events.try_iter().count(), 0);

        // The hovered and ringed committed cells read normal again.
        for (col, ch) in [(0, 'C'), (1, 'A'), (2, 'T')] {
            let cell = engine.model().grid_cell(GridPos::new(col, 0)).unwrap();
            assert_eq!(cell.state, CellState::Normal);
            assert_eq!(cell.ch, Some(ch));
        }
    }

    #[test]
    fn reset_forgets_placements_and_restamps_word_rows() {
        let mut engine = engine(6, &["CAT"]);
        place(&mut engine, 0, "CAT", GridPos::new(0, 0), Direction::East);
        engine.reset(99).unwrap();

        assert!(!engine.is_placed(0));
        assert_eq!(engine.view().placed_count(), 0);
        assert_eq!(engine.model().grid_cell(GridPos::new(0, 0)).unwrap().state, CellState::Fog);
        assert_eq!(engine.model().slot_cell(SlotPos::new(0, 0)).unwrap().ch, Some('C'));
    }

    // ── Random placement ────────────────────────────────────────

    #[test]
    fn random_placement_is_deterministic_per_seed() {
        let words = ["CAT", "HORSE", "ZIP"];
        let mut first = engine(6, &words);
        let mut second = engine(6, &words);
        for (index, word) in words.iter().enumerate() {
            assert!(first.place_word_randomly(index, word).unwrap());
            assert!(second.place_word_randomly(index, word).unwrap());
        }
        for index in 0..words.len() {
            assert_eq!(first.view().placement(index), second.view().placement(index));
        }
    }

    #[test]
    fn random_placement_reports_when_nothing_fits() {
        let mut engine = engine(2, &["AB", "CD"]);
        assert!(engine.place_word_randomly(0, "AB").unwrap());
        assert!(engine.place_word_randomly(1, "CD").unwrap());
        // No three-cell line exists on a 2x2 grid.
        assert!(!engine.place_word_randomly(0, "XYZ").unwrap());
        // The failed attempt released slot 0, as entering placement does,
        // but left slot 1 alone.
        assert!(!engine.is_placed(0));
        assert!(engine.is_placed(1));
    }

    proptest! {
        #[test]
        fn randomly_placed_words_always_fit(seed in proptest::num::u64::ANY) {
            let words = ["CAT", "HORSE", "ZIP"];
            let mut engine = engine(6, &words);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for (index, word) in words.iter().enumerate() {
                prop_assert!(engine.place_word_randomly_with(index, word, &mut rng).unwrap());
            }
            for (index, word) in words.iter().enumerate() {
                let view = engine.view();
                let record = view.placement(index).unwrap();
                prop_assert_eq!(record.positions.len(), word.len());
                let (d_col, d_row) = record.direction.delta();
                for (i, pos) in record.positions.iter().enumerate() {
                    prop_assert!(pos.col >= 0 && pos.col < 6);
                    prop_assert!(pos.row >= 0 && pos.row < 6);
                    prop_assert_eq!(*pos, record.start.offset(d_col * i as i32, d_row * i as i32));
                }
            }
        }
    }
}
