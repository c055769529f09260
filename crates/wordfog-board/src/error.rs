//! Error types for layout construction.

use std::fmt;

/// Errors arising from building a [`Layout`](crate::Layout).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Attempted to build a layout with a zero-sized grid.
    EmptyGrid,
    /// The grid size exceeds the column header alphabet.
    GridTooLarge {
        /// The requested grid size.
        value: u32,
        /// The largest supported grid size.
        max: u32,
    },
    /// The word count would push table rows past the coordinate range.
    TooManyWords {
        /// The requested word count.
        value: u32,
        /// The largest supported word count.
        max: u32,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::GridTooLarge { value, max } => {
                write!(f, "grid size {value} exceeds maximum of {max}")
            }
            Self::TooManyWords { value, max } => {
                write!(f, "word count {value} exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for BoardError {}
