//! Read-only access to committed placements.

use wordfog_core::GridPos;

use crate::engine::{PlacementEngine, PlacementRecord};

/// A read-only window onto a [`PlacementEngine`]'s committed
/// placements.
///
/// Systems that only need to ask "what is on the grid" take one of
/// these instead of the engine, so they cannot place or clear anything.
#[derive(Clone, Copy, Debug)]
pub struct PlacementView<'a> {
    engine: &'a PlacementEngine,
}

impl<'a> PlacementView<'a> {
    pub(crate) fn new(engine: &'a PlacementEngine) -> Self {
        Self { engine }
    }

    /// Edge length of the playable grid, in cells.
    pub fn grid_size(&self) -> u32 {
        self.engine.grid_size()
    }

    /// True if a committed letter sits on the cell.
    pub fn is_occupied(&self, pos: GridPos) -> bool {
        self.engine.letters().contains_key(&pos)
    }

    /// The committed letter on the cell, if any.
    pub fn letter_at(&self, pos: GridPos) -> Option<char> {
        self.engine.letters().get(&pos).map(|placed| placed.ch)
    }

    /// True if any committed cell holds the letter. The comparison is
    /// case-insensitive.
    pub fn contains_letter(&self, ch: char) -> bool {
        let ch = ch.to_ascii_uppercase();
        self.engine.letters().values().any(|placed| placed.ch == ch)
    }

    /// Every occupied cell, in the order letters were first committed.
    pub fn occupied_positions(&self) -> impl Iterator<Item = GridPos> + 'a {
        self.engine.letters().keys().copied()
    }

    /// The committed placement for the slot, if any.
    pub fn placement(&self, word_index: usize) -> Option<&'a PlacementRecord> {
        self.engine
            .records()
            .get(word_index)
            .and_then(|record| record.as_ref())
    }

    /// Every committed placement, with its slot index, in slot order.
    pub fn placements(&self) -> impl Iterator<Item = (usize, &'a PlacementRecord)> + 'a {
        self.engine
            .records()
            .iter()
            .enumerate()
            .filter_map(|(index, record)| record.as_ref().map(|r| (index, r)))
    }

    /// Number of slots with a committed placement.
    pub fn placed_count(&self) -> usize {
        self.engine
            .records()
            .iter()
            .filter(|record| record.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SetupConfig;
    use crate::direction::Direction;
    use crate::engine::ClickOutcome;
    use wordfog_core::CellOwner;

    fn engine_with(words: &[&str]) -> PlacementEngine {
        PlacementEngine::new(SetupConfig {
            grid_size: 6,
            words: words.iter().map(|w| w.to_string()).collect(),
            placing_owner: CellOwner::PlayerTwo,
            seed: 5,
        })
        .unwrap()
    }

    fn place(engine: &mut PlacementEngine, word_index: usize, word: &str, start: GridPos, direction: Direction) {
        engine.enter_placement_mode(word_index, word).unwrap();
        assert_eq!(engine.handle_grid_click(start).unwrap(), ClickOutcome::AnchorSelected);
        let second = direction.step_from(start, 1);
        assert_eq!(engine.handle_grid_click(second).unwrap(), ClickOutcome::Committed);
    }

    #[test]
    fn reports_occupancy_and_letters() {
        let mut engine = engine_with(&["CAT"]);
        place(&mut engine, 0, "CAT", GridPos::new(0, 0), Direction::East);

        let view = engine.view();
        assert_eq!(view.grid_size(), 6);
        assert!(view.is_occupied(GridPos::new(1, 0)));
        assert!(!view.is_occupied(GridPos::new(0, 1)));
        assert_eq!(view.letter_at(GridPos::new(2, 0)), Some('T'));
        assert_eq!(view.letter_at(GridPos::new(3, 0)), None);
        assert!(view.contains_letter('a'));
        assert!(!view.contains_letter('Z'));
        assert_eq!(view.occupied_positions().count(), 3);
    }

    #[test]
    fn iterates_placements_in_slot_order() {
        let mut engine = engine_with(&["CAT", "DOG", "HEN"]);
        place(&mut engine, 2, "HEN", GridPos::new(0, 5), Direction::East);
        place(&mut engine, 0, "CAT", GridPos::new(0, 0), Direction::East);

        let view = engine.view();
        assert_eq!(view.placed_count(), 2);
        assert!(view.placement(1).is_none());
        let slots: Vec<usize> = view.placements().map(|(index, _)| index).collect();
        assert_eq!(slots, vec![0, 2]);
        let words: Vec<&str> = view.placements().map(|(_, record)| record.word.as_str()).collect();
        assert_eq!(words, vec!["CAT", "HEN"]);
    }
}
