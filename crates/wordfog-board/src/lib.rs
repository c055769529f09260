//! Table layout and region mapping for the Wordfog board game.
//!
//! One shared cell table hosts the word entry rows, a column header row,
//! a row header column, and the playable grid. This crate defines the
//! [`Region`] window type and the [`Layout`] that partitions the table
//! into those four disjoint regions and translates between table
//! coordinates and area-local coordinates.
//!
//! The table is laid out top to bottom: one row per word, then the
//! column header row, then the grid with its row header column on the
//! left. Column 0 above the grid is unused spacer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod layout;
pub mod region;

pub use error::BoardError;
pub use layout::Layout;
pub use region::{Region, RegionKind};
