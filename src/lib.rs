//! Move generation for a 15x15 tile-and-board word game.
//!
//! Every turn the engine rebuilds a [`ConstraintGrid`](scrabble::constraint::grid::ConstraintGrid)
//! from the board and rack, walks every line of it against the word graph, expands plays that
//! use wildcard tiles, and hands the candidates to an external [`Referee`](scrabble::agent::Referee)
//! that decides legality and score.

pub mod config;
pub mod error;
pub mod scrabble;
mod utils;

pub use crate::config::EngineConfig;
pub use crate::error::{Error, IllegalMove, Result};
pub use crate::scrabble::agent::{Action, MoveSelector, Referee};
pub use crate::scrabble::board::{BoardQuery, ScrabbleBoard, SquareEffect, Tile};
pub use crate::scrabble::dictionary::{NodeId, WordDictionary};
pub use crate::scrabble::engine::MoveGenerator;
pub use crate::scrabble::rack::Rack;
pub use crate::scrabble::util::{Candidate, Direction, Letter, Position, TileSource, WordTile};
