//! Placement events and observer plumbing.

use crossbeam_channel::Sender;

use wordfog_core::GridPos;

/// A notification from the placement engine.
///
/// Events describe completed outcomes, not intermediate preview state.
/// Cell-level repaints travel through the cell model's own events.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementEvent {
    /// A word was committed to the grid.
    WordPlaced {
        /// Index of the word slot that was filled.
        word_index: usize,
        /// The committed word, uppercase.
        word: String,
        /// Grid cell of every letter, in letter order.
        positions: Vec<GridPos>,
    },
    /// An interactive placement attempt ended without committing.
    Cancelled {
        /// Index of the word slot the attempt was for.
        word_index: usize,
    },
}

/// Receives placement events synchronously, in the order the engine
/// produced them.
pub trait PlacementObserver {
    /// Called once per event, before the engine returns to its caller.
    fn on_event(&mut self, event: &PlacementEvent);
}

/// Observer that forwards events into a channel, dropping them if the
/// receiving side has gone away.
pub(crate) struct ChannelObserver {
    pub(crate) tx: Sender<PlacementEvent>,
}

impl PlacementObserver for ChannelObserver {
    fn on_event(&mut self, event: &PlacementEvent) {
        let _ = self.tx.send(event.clone());
    }
}
