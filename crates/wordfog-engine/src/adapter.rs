//! Table-coordinate adapter over the placement engine.

use crossbeam_channel::Receiver;

use wordfog_core::{ObserverId, TablePos};
use wordfog_model::{CellModel, ModelEvent, ModelObserver};

use crate::config::{ConfigError, SetupConfig};
use crate::engine::{ClickOutcome, PlacementEngine};
use crate::error::PlacementError;
use crate::event::{PlacementEvent, PlacementObserver};
use crate::view::PlacementView;

/// Bridges callers that live in table coordinates, such as a widget
/// sitting on the full cell matrix, onto the grid-coordinate engine.
///
/// Clicks and hovers that land on header, spacer or word-row cells are
/// not the engine's business: clicks report
/// [`ClickOutcome::NotHandled`] and hovers do nothing.
#[derive(Debug)]
pub struct PlacementAdapter {
    engine: PlacementEngine,
}

impl PlacementAdapter {
    /// Builds the adapter and the engine under it.
    pub fn new(config: SetupConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: PlacementEngine::new(config)?,
        })
    }

    /// The engine under this adapter.
    pub fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    /// The cell model the engine draws on.
    pub fn model(&self) -> &CellModel {
        self.engine.model()
    }

    /// A read-only view of committed placements.
    pub fn view(&self) -> PlacementView<'_> {
        self.engine.view()
    }

    /// Feeds one table-coordinate click through to the engine.
    pub fn click(&mut self, pos: TablePos) -> Result<ClickOutcome, PlacementError> {
        let grid = self.engine.model().layout().table_to_grid(pos);
        match grid {
            Some(grid) => self.engine.handle_grid_click(grid),
            None => Ok(ClickOutcome::NotHandled),
        }
    }

    /// Feeds one table-coordinate hover through to the engine.
    pub fn hover(&mut self, pos: TablePos) -> Result<(), PlacementError> {
        let grid = self.engine.model().layout().table_to_grid(pos);
        match grid {
            Some(grid) => self.engine.handle_grid_hover(grid),
            None => Ok(()),
        }
    }

    /// See [`PlacementEngine::enter_placement_mode`].
    pub fn enter_placement_mode(&mut self, word_index: usize, word: &str) -> Result<(), PlacementError> {
        self.engine.enter_placement_mode(word_index, word)
    }

    /// See [`PlacementEngine::cancel_placement_mode`].
    pub fn cancel_placement_mode(&mut self) -> Result<bool, PlacementError> {
        self.engine.cancel_placement_mode()
    }

    /// See [`PlacementEngine::place_word_randomly`].
    pub fn place_word_randomly(&mut self, word_index: usize, word: &str) -> Result<bool, PlacementError> {
        self.engine.place_word_randomly(word_index, word)
    }

    /// See [`PlacementEngine::clear_word`].
    pub fn clear_word(&mut self, word_index: usize) -> Result<bool, PlacementError> {
        self.engine.clear_word(word_index)
    }

    /// See [`PlacementEngine::clear_all_placed_words`].
    pub fn clear_all_placed_words(&mut self) -> Result<(), PlacementError> {
        self.engine.clear_all_placed_words()
    }

    /// See [`PlacementEngine::reset`].
    pub fn reset(&mut self, seed: u64) -> Result<(), PlacementError> {
        self.engine.reset(seed)
    }

    /// True while an interactive placement attempt is in progress.
    pub fn is_placing(&self) -> bool {
        self.engine.is_placing()
    }

    /// See [`PlacementEngine::subscribe`].
    pub fn subscribe(&mut self, observer: Box<dyn PlacementObserver>) -> ObserverId {
        self.engine.subscribe(observer)
    }

    /// See [`PlacementEngine::unsubscribe`].
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.engine.unsubscribe(id)
    }

    /// See [`PlacementEngine::event_channel`].
    pub fn event_channel(&mut self) -> (ObserverId, Receiver<PlacementEvent>) {
        self.engine.event_channel()
    }

    /// See [`PlacementEngine::subscribe_cells`].
    pub fn subscribe_cells(&mut self, observer: Box<dyn ModelObserver>) -> ObserverId {
        self.engine.subscribe_cells(observer)
    }

    /// See [`PlacementEngine::unsubscribe_cells`].
    pub fn unsubscribe_cells(&mut self, id: ObserverId) -> bool {
        self.engine.unsubscribe_cells(id)
    }

    /// See [`PlacementEngine::cell_event_channel`].
    pub fn cell_event_channel(&mut self) -> (ObserverId, Receiver<ModelEvent>) {
        self.engine.cell_event_channel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordfog_core::{CellOwner, CellState, GridPos};

    fn adapter(words: &[&str]) -> PlacementAdapter {
        PlacementAdapter::new(SetupConfig {
            grid_size: 6,
            words: words.iter().map(|w| w.to_string()).collect(),
            placing_owner: CellOwner::PlayerOne,
            seed: 11,
        })
        .unwrap()
    }

    // One word row, so the grid spans table rows 2..8 and columns 1..7.

    #[test]
    fn clicks_off_the_grid_are_not_handled() {
        let mut adapter = adapter(&["CAT"]);
        adapter.enter_placement_mode(0, "CAT").unwrap();

        // Spacer, word row, column header, row header.
        for pos in [
            TablePos::new(0, 0),
            TablePos::new(0, 3),
            TablePos::new(1, 2),
            TablePos::new(4, 0),
        ] {
            assert_eq!(adapter.click(pos).unwrap(), ClickOutcome::NotHandled);
        }
        assert!(adapter.is_placing());
    }

    #[test]
    fn the_two_click_flow_works_in_table_coordinates() {
        let mut adapter = adapter(&["CAT"]);
        adapter.enter_placement_mode(0, "CAT").unwrap();

        assert_eq!(adapter.click(TablePos::new(2, 1)).unwrap(), ClickOutcome::AnchorSelected);
        assert_eq!(adapter.click(TablePos::new(3, 2)).unwrap(), ClickOutcome::Committed);

        let record = adapter.view().placement(0).unwrap().clone();
        assert_eq!(
            record.positions,
            vec![GridPos::new(0, 0), GridPos::new(1, 1), GridPos::new(2, 2)]
        );
        let cell = adapter.model().cell(TablePos::new(4, 3)).unwrap();
        assert_eq!(cell.ch, Some('T'));
        assert_eq!(cell.state, CellState::Normal);
    }

    #[test]
    fn hovers_off_the_grid_do_nothing() {
        let mut adapter = adapter(&["CAT"]);
        adapter.enter_placement_mode(0, "CAT").unwrap();
        adapter.hover(TablePos::new(1, 3)).unwrap();

        // No preview paint anywhere on the grid.
        for row in 0..6 {
            for col in 0..6 {
                let cell = adapter.model().grid_cell(GridPos::new(col, row)).unwrap();
                assert_eq!(cell.state, CellState::Fog);
            }
        }
    }
}
