//! Runtime errors from placement operations.

use std::error::Error;
use std::fmt;

use wordfog_model::ModelError;

/// An error from a placement operation on a running engine.
///
/// Misuse of the engine API is loud. Merely unsuccessful outcomes, such
/// as a random placement finding no room, are reported through return
/// values instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// The word to place was empty.
    EmptyWord,
    /// The word was too short for the two-click flow to have a second
    /// cell to select.
    WordTooShort {
        /// Length of the rejected word in characters.
        len: usize,
        /// Minimum accepted length.
        min: usize,
    },
    /// The word index does not name a configured word slot.
    WordIndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of configured words.
        count: usize,
    },
    /// Writing through to the cell model failed.
    Model(ModelError),
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::EmptyWord => write!(f, "cannot place an empty word"),
            PlacementError::WordTooShort { len, min } => {
                write!(f, "word of length {len} is too short to place (minimum {min})")
            }
            PlacementError::WordIndexOutOfRange { index, count } => {
                write!(f, "word index {index} out of range ({count} words configured)")
            }
            PlacementError::Model(e) => write!(f, "cell model rejected a placement write: {e}"),
        }
    }
}

impl Error for PlacementError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlacementError::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ModelError> for PlacementError {
    fn from(e: ModelError) -> Self {
        PlacementError::Model(e)
    }
}
