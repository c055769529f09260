//! Word placement engine for the Wordfog board game.
//!
//! This crate owns everything that happens between "the player wants to
//! place a word" and "the word is on the grid": validity checking in the
//! eight compass directions, the two-click interactive placement flow
//! with hover previews, seeded randomized placement for automatic grid
//! fills, and claim counting so that crossing words can share cells and
//! still be cleared one at a time.
//!
//! [`PlacementEngine`] is the core type and works purely in grid
//! coordinates. [`PlacementAdapter`] wraps it for callers that live in
//! table coordinates, such as a widget sitting on the full cell matrix.
//! [`PlacementView`] is the read-only window other game systems use to
//! inspect committed placements without being able to mutate them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adapter;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod event;
pub mod view;

pub use adapter::PlacementAdapter;
pub use config::{ConfigError, SetupConfig};
pub use direction::Direction;
pub use engine::{ClickOutcome, PlacementEngine, PlacementRecord};
pub use error::PlacementError;
pub use event::{PlacementEvent, PlacementObserver};
pub use view::PlacementView;
