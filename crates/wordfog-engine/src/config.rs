//! Engine setup configuration and its validation errors.

use std::error::Error;
use std::fmt;

use wordfog_board::{BoardError, Layout};
use wordfog_core::CellOwner;
use wordfog_model::ModelError;

/// Configuration for a placement engine and the board it runs on.
///
/// Validation happens once, in [`crate::PlacementEngine::new`]. The
/// running engine trusts these bounds and does not re-check them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupConfig {
    /// Playable grid edge length, in cells.
    pub grid_size: u32,
    /// The words to offer for placement. Stored uppercase by the engine
    /// regardless of the case given here. May be empty: a wordless
    /// setup is a valid degenerate board, and the word count is bounded
    /// only by the board's coordinate range.
    pub words: Vec<String>,
    /// Owner stamped onto cells the engine fills.
    pub placing_owner: CellOwner,
    /// Seed for the engine's randomized placement search.
    pub seed: u64,
}

impl SetupConfig {
    /// Minimum word length. A one-letter word has no second cell for
    /// the two-click flow to select.
    pub const MIN_WORD_LEN: usize = 2;

    /// Checks every bound this configuration promises the engine.
    /// Word-count bounds come from the board factory alone.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Layout::for_gameplay(self.grid_size, self.words.len() as u32)?;
        for (index, word) in self.words.iter().enumerate() {
            if word.is_empty() {
                return Err(ConfigError::EmptyWord { index });
            }
            let len = word.chars().count();
            if len < Self::MIN_WORD_LEN {
                return Err(ConfigError::WordTooShort {
                    index,
                    len,
                    min: Self::MIN_WORD_LEN,
                });
            }
            if len as u32 > self.grid_size {
                return Err(ConfigError::WordTooLong {
                    index,
                    len,
                    max: self.grid_size,
                });
            }
            if !word.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(ConfigError::NonAlphabeticWord {
                    index,
                    word: word.clone(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn normalized_words(&self) -> Vec<String> {
        self.words.iter().map(|w| w.to_ascii_uppercase()).collect()
    }
}

/// An error constructing a placement engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The board itself was rejected.
    Board(BoardError),
    /// Stamping the initial cell contents failed.
    Model(ModelError),
    /// A configured word was empty.
    EmptyWord {
        /// Index of the offending word.
        index: usize,
    },
    /// A configured word was below the minimum placeable length.
    WordTooShort {
        /// Index of the offending word.
        index: usize,
        /// Its length in characters.
        len: usize,
        /// Minimum accepted length.
        min: usize,
    },
    /// A configured word cannot fit on the grid in any direction.
    WordTooLong {
        /// Index of the offending word.
        index: usize,
        /// Its length in characters.
        len: usize,
        /// Grid edge length it must fit within.
        max: u32,
    },
    /// A configured word contained a non-ASCII-alphabetic character.
    NonAlphabeticWord {
        /// Index of the offending word.
        index: usize,
        /// The offending word.
        word: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Board(e) => write!(f, "board rejected: {e}"),
            ConfigError::Model(e) => write!(f, "initial cell contents rejected: {e}"),
            ConfigError::EmptyWord { index } => write!(f, "word {index} is empty"),
            ConfigError::WordTooShort { index, len, min } => {
                write!(f, "word {index} has length {len}, minimum is {min}")
            }
            ConfigError::WordTooLong { index, len, max } => {
                write!(f, "word {index} has length {len}, grid is only {max} cells wide")
            }
            ConfigError::NonAlphabeticWord { index, word } => {
                write!(f, "word {index} ({word:?}) must be ASCII alphabetic")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Board(e) => Some(e),
            ConfigError::Model(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BoardError> for ConfigError {
    fn from(e: BoardError) -> Self {
        ConfigError::Board(e)
    }
}

impl From<ModelError> for ConfigError {
    fn from(e: ModelError) -> Self {
        ConfigError::Model(e)
    }
}
