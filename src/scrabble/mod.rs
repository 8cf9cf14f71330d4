// 15x15x26
pub mod agent;
pub mod blanks;
pub mod board;
pub mod constraint;
pub mod dictionary;
pub mod engine;
pub mod letter_set;
pub mod rack;
pub mod util;
pub mod word_search;

pub const BOARD_SIZE: usize = 15;

/// Every opening play has to cover this square
pub const CENTER: util::Position = util::Position { row: 7, col: 7 };
