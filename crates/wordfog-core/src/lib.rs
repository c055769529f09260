//! Core types for the Wordfog board game.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: typed
//! coordinates, the [`Cell`] record, and the closed cell enums.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod id;
pub mod pos;

pub use cell::{Cell, CellKind, CellOwner, CellState};
pub use id::{ModelVersion, ObserverId};
pub use pos::{GridPos, SlotPos, TablePos};
