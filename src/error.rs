use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read word list {path}")]
    WordList {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not build the word graph")]
    WordGraph(#[from] fst::Error),
    #[error("could not read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed json in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("board has {rows} rows, expected 15")]
    BoardShape { rows: usize },
    #[error("board row {row} has {len} squares, expected 15")]
    BoardRow { row: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Raised by a referee when a candidate breaks the full game rules.
/// The selector treats it as a rejection, never as a failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("illegal move: {reason}")]
pub struct IllegalMove {
    pub reason: String,
}

impl IllegalMove {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
