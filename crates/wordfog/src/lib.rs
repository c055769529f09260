//! Wordfog: the logical core of a grid word-placement game.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Wordfog sub-crates. For most users, adding `wordfog` as a
//! single dependency is sufficient.
//!
//! The game surface is a single cell matrix: word rows across the top,
//! a column header row, a row header column, and the playable grid.
//! Words are placed on the grid in any of the eight compass directions,
//! either interactively through a two-click flow or by seeded
//! randomized search, and crossing words may share cells that hold the
//! same letter.
//!
//! # Quick start
//!
//! ```rust
//! use wordfog::prelude::*;
//!
//! // A 6x6 grid offering two words for placement.
//! let mut engine = PlacementEngine::new(SetupConfig {
//!     grid_size: 6,
//!     words: vec!["CAT".to_string(), "AXE".to_string()],
//!     placing_owner: CellOwner::PlayerOne,
//!     seed: 42,
//! })
//! .unwrap();
//!
//! // Place CAT interactively: the first click anchors the C, the
//! // second click picks the direction.
//! engine.enter_placement_mode(0, "CAT").unwrap();
//! engine.handle_grid_click(GridPos::new(0, 0)).unwrap();
//! let outcome = engine.handle_grid_click(GridPos::new(1, 1)).unwrap();
//! assert_eq!(outcome, ClickOutcome::Committed);
//!
//! // The letters now run down the diagonal.
//! let view = engine.view();
//! assert_eq!(view.letter_at(GridPos::new(0, 0)), Some('C'));
//! assert_eq!(view.letter_at(GridPos::new(2, 2)), Some('T'));
//!
//! // AXE finds its own spot through the seeded search.
//! assert!(engine.place_word_randomly(1, "AXE").unwrap());
//! assert_eq!(engine.view().placed_count(), 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wordfog-core` | Cells, cell states, coordinates, ids |
//! | [`board`] | `wordfog-board` | Table layout and its region partition |
//! | [`model`] | `wordfog-model` | The shared cell matrix and its change events |
//! | [`engine`] | `wordfog-engine` | Placement engine, table adapter, read-only view |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell and coordinate types (`wordfog-core`).
///
/// Contains the [`types::Cell`] record, the closed [`types::CellState`]
/// set, the three coordinate frames, and the id newtypes.
pub use wordfog_core as types;

/// Board geometry (`wordfog-board`).
///
/// [`board::Layout`] partitions the cell table into its four regions
/// and bridges between coordinate frames.
pub use wordfog_board as board;

/// The shared cell matrix (`wordfog-model`).
///
/// [`model::CellModel`] holds every cell, versions each mutation, and
/// notifies observers synchronously and in order.
pub use wordfog_model as model;

/// Word placement (`wordfog-engine`).
///
/// [`engine::PlacementEngine`] for grid-coordinate callers,
/// [`engine::PlacementAdapter`] for table-coordinate callers, and
/// [`engine::PlacementView`] for read-only access.
pub use wordfog_engine as engine;

/// Common imports for typical Wordfog usage.
///
/// ```rust
/// use wordfog::prelude::*;
/// ```
///
/// This imports the most frequently used types: the engine and its
/// configuration, the cell model, cell and coordinate types, and the
/// event and error types callers match on.
pub mod prelude {
    // Cells and coordinates
    pub use wordfog_core::{
        Cell, CellKind, CellOwner, CellState, GridPos, ModelVersion, ObserverId, SlotPos,
        TablePos,
    };

    // Board geometry
    pub use wordfog_board::{Layout, Region, RegionKind};

    // Cell model
    pub use wordfog_model::{CellModel, ModelEvent, ModelObserver};

    // Errors
    pub use wordfog_board::BoardError;
    pub use wordfog_engine::{ConfigError, PlacementError};
    pub use wordfog_model::ModelError;

    // Placement
    pub use wordfog_engine::{
        ClickOutcome, Direction, PlacementAdapter, PlacementEngine, PlacementEvent,
        PlacementObserver, PlacementView, SetupConfig,
    };
}
