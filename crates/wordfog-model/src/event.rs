//! Model change events and the observer trait.

use crossbeam_channel::Sender;
use wordfog_core::{Cell, TablePos};

/// A change notification from the cell model.
///
/// Delivered synchronously inside the mutating call, in mutation order.
/// One `CellChanged` per mutator call; a whole-model reset sends one
/// `Cleared` instead of a per-cell storm.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelEvent {
    /// A single cell was written. Carries a copy of the new cell.
    CellChanged {
        /// Table coordinate of the cell.
        pos: TablePos,
        /// The cell's value after the write.
        cell: Cell,
    },
    /// The whole model was reset to its freshly-classified state.
    Cleared,
}

/// Callback interface for model change notification.
///
/// Observers are invoked in registration order. They receive the event
/// by reference and hold no reference to the model, so they cannot
/// re-enter it mid-mutation.
pub trait ModelObserver {
    /// Called once per model event.
    fn on_event(&mut self, event: &ModelEvent);
}

/// Observer that forwards every event into a channel.
///
/// Events sent after the receiving end is dropped are discarded.
pub(crate) struct ChannelObserver {
    pub(crate) tx: Sender<ModelEvent>,
}

impl ModelObserver for ChannelObserver {
    fn on_event(&mut self, event: &ModelEvent) {
        let _ = self.tx.send(event.clone());
    }
}
