//! Error types for cell model mutation.

use std::fmt;
use wordfog_core::{GridPos, SlotPos, TablePos};

/// Errors from cell model mutators.
///
/// Every variant marks a caller bug: coordinates are never clamped or
/// silently dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// A table coordinate lies outside the model.
    OutOfBounds {
        /// The offending coordinate.
        pos: TablePos,
        /// Total rows of the model.
        rows: u32,
        /// Total columns of the model.
        cols: u32,
    },
    /// A grid coordinate lies outside the playable grid.
    GridOutOfBounds {
        /// The offending coordinate.
        pos: GridPos,
        /// Side length of the grid.
        size: u32,
    },
    /// A word-slot coordinate names a missing word row or character.
    SlotOutOfRange {
        /// The offending coordinate.
        slot: SlotPos,
        /// Number of word rows.
        words: u32,
        /// Characters per word row.
        len: u32,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, rows, cols } => {
                write!(f, "table coordinate {pos} outside {rows}x{cols} model")
            }
            Self::GridOutOfBounds { pos, size } => {
                write!(f, "grid coordinate {pos} outside {size}x{size} grid")
            }
            Self::SlotOutOfRange { slot, words, len } => {
                write!(
                    f,
                    "{slot} outside {words} word rows of {len} characters"
                )
            }
        }
    }
}

impl std::error::Error for ModelError {}
