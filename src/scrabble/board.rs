use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::serialization;

use super::util::{Candidate, Position};
use super::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareEffect {
    DoubleWord,
    DoubleLetter,
    TripleWord,
    TripleLetter,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Special(SquareEffect),
    Letter(char),
}

impl Tile {
    /// Decodes a square in the character protocol used by board collaborators.
    /// Letters are tiles (a wildcard already on the board may be shown in uppercase),
    /// `-` `=` `+` `#` `*` are double letter, triple letter, double word, triple word and
    /// the centre; everything else is an empty square
    pub fn from_square(c: char) -> Self {
        match c {
            'a'..='z' | 'A'..='Z' => Tile::Letter(c.to_ascii_lowercase()),
            '-' => Tile::Special(SquareEffect::DoubleLetter),
            '=' => Tile::Special(SquareEffect::TripleLetter),
            '+' => Tile::Special(SquareEffect::DoubleWord),
            '#' => Tile::Special(SquareEffect::TripleWord),
            '*' => Tile::Special(SquareEffect::Center),
            _ => Tile::Empty,
        }
    }

    /// Inverse of [`Tile::from_square`]
    pub fn to_square(&self) -> char {
        match self {
            Tile::Letter(l) => *l,
            Tile::Empty => ' ',
            Tile::Special(SquareEffect::DoubleLetter) => '-',
            Tile::Special(SquareEffect::TripleLetter) => '=',
            Tile::Special(SquareEffect::DoubleWord) => '+',
            Tile::Special(SquareEffect::TripleWord) => '#',
            Tile::Special(SquareEffect::Center) => '*',
        }
    }

    pub fn letter(&self) -> Option<char> {
        match self {
            Tile::Letter(l) => Some(*l),
            _ => None,
        }
    }

    pub fn is_letter(&self) -> bool {
        matches!(self, Tile::Letter(_))
    }
}

/// Read-only view of the board the engine plans against
pub trait BoardQuery {
    /// Contents of the square at `pos`
    fn tile(&self, pos: Position) -> Tile;

    /// Checks if the square at the given position holds a letter
    fn is_letter(&self, pos: Position) -> bool {
        self.tile(pos).is_letter()
    }
}

/// In-memory 15x15 board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrabbleBoard {
    /// Actual letters on the board
    state: Vec<Vec<Tile>>,
}

impl ScrabbleBoard {
    pub fn empty() -> Self {
        let state = vec![vec![Tile::Empty; BOARD_SIZE]; BOARD_SIZE];
        Self { state }
    }

    /// Builds a board from 15 rows written in the square protocol of [`Tile::from_square`].
    /// Short rows are padded with empty squares
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(Error::BoardShape { rows: rows.len() });
        }
        let mut board = Self::empty();
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let len = row.chars().count();
            if len > BOARD_SIZE {
                return Err(Error::BoardRow { row: i, len });
            }
            for (j, c) in row.chars().enumerate() {
                board.state[i][j] = Tile::from_square(c);
            }
        }
        Ok(board)
    }

    /// Loads a board stored as a JSON array of 15 rows of 15 strings. `""` is an empty
    /// square, `"DL" "TL" "DW" "TW" "CN"` are premium squares and a single letter is a tile
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw_board: Vec<Vec<String>> = serialization::load_from_disk(path)?;
        if raw_board.len() != BOARD_SIZE {
            return Err(Error::BoardShape {
                rows: raw_board.len(),
            });
        }

        let mut state = vec![vec![Tile::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (i, row) in raw_board.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(Error::BoardRow {
                    row: i,
                    len: row.len(),
                });
            }
            for (j, square) in row.iter().enumerate() {
                state[i][j] = match square.as_str() {
                    "TL" => Tile::Special(SquareEffect::TripleLetter),
                    "TW" => Tile::Special(SquareEffect::TripleWord),
                    "DL" => Tile::Special(SquareEffect::DoubleLetter),
                    "DW" => Tile::Special(SquareEffect::DoubleWord),
                    "CN" => Tile::Special(SquareEffect::Center),
                    s => s.chars().next().map_or(Tile::Empty, Tile::from_square),
                }
            }
        }

        Ok(Self { state })
    }

    /// Lays the tiles of a play on the board without any rule checking. The engine
    /// never calls this; it is for setting up positions
    pub fn place(&mut self, candidate: &Candidate) {
        for (pos, tile) in candidate.iter() {
            self[pos] = Tile::Letter(tile.letter);
        }
    }

    /// The same board mirrored along its main diagonal
    pub fn transpose(&self) -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Position { row, col };
                board[pos.transpose()] = self[pos];
            }
        }
        board
    }

    /// True if no letter has been played yet
    pub fn is_empty(&self) -> bool {
        self.state.iter().flatten().all(|t| !t.is_letter())
    }
}

impl BoardQuery for ScrabbleBoard {
    fn tile(&self, pos: Position) -> Tile {
        self[pos]
    }
}

impl std::ops::Index<Position> for ScrabbleBoard {
    type Output = Tile;

    fn index(&self, index: Position) -> &Self::Output {
        &self.state[index.row][index.col]
    }
}

impl std::ops::IndexMut<Position> for ScrabbleBoard {
    fn index_mut(&mut self, index: Position) -> &mut Self::Output {
        &mut self.state[index.row][index.col]
    }
}

impl fmt::Display for ScrabbleBoard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.state.iter() {
            let line: String = row
                .iter()
                .map(|t| match t {
                    Tile::Letter(l) => l.to_ascii_uppercase(),
                    Tile::Empty => '.',
                    other => other.to_square(),
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrabble::util::{Direction, TileSource, WordTile};

    #[test]
    fn test_square_protocol() {
        assert_eq!(Tile::from_square('q'), Tile::Letter('q'));
        assert_eq!(Tile::from_square('Q'), Tile::Letter('q'));
        assert_eq!(Tile::from_square(' '), Tile::Empty);
        assert_eq!(
            Tile::from_square('#'),
            Tile::Special(SquareEffect::TripleWord)
        );
        for c in " -=+#*".chars() {
            assert_eq!(Tile::from_square(c).to_square(), c);
        }
    }

    #[test]
    fn test_from_rows() {
        let mut rows = vec![""; BOARD_SIZE];
        rows[7] = "       cat";
        let board = ScrabbleBoard::from_rows(&rows).unwrap();
        assert_eq!(board[Position { row: 7, col: 8 }], Tile::Letter('a'));
        assert!(board.is_letter(Position { row: 7, col: 7 }));
        assert!(!board.is_letter(Position { row: 7, col: 10 }));
        assert!(!board.is_empty());

        assert!(matches!(
            ScrabbleBoard::from_rows(&["abc"]),
            Err(Error::BoardShape { rows: 1 })
        ));
        rows[3] = "abcdefghijklmnop";
        assert!(matches!(
            ScrabbleBoard::from_rows(&rows),
            Err(Error::BoardRow { row: 3, len: 16 })
        ));
    }

    #[test]
    fn test_place_and_transpose() {
        let mut board = ScrabbleBoard::empty();
        assert!(board.is_empty());
        let play = Candidate::new(
            "dog"
                .chars()
                .map(|c| WordTile::new(c, TileSource::Rack))
                .collect(),
            Position { row: 2, col: 5 },
            Direction::Across,
        );
        board.place(&play);
        assert_eq!(board[Position { row: 2, col: 7 }], Tile::Letter('g'));
        let t = board.transpose();
        assert_eq!(t[Position { row: 7, col: 2 }], Tile::Letter('g'));
        assert_eq!(t.transpose(), board);
    }

    #[test]
    fn test_from_file() {
        let mut raw = vec![vec![String::new(); BOARD_SIZE]; BOARD_SIZE];
        raw[7][7] = "CN".into();
        raw[0][0] = "TW".into();
        raw[4][4] = "z".into();
        let path = std::env::temp_dir().join(format!("scrabble_ai_board_{}.json", std::process::id()));
        std::fs::write(&path, serde_json::to_string(&raw).unwrap()).unwrap();
        let board = ScrabbleBoard::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            board[Position { row: 7, col: 7 }],
            Tile::Special(SquareEffect::Center)
        );
        assert_eq!(
            board[Position { row: 0, col: 0 }],
            Tile::Special(SquareEffect::TripleWord)
        );
        assert_eq!(board[Position { row: 4, col: 4 }], Tile::Letter('z'));
        assert_eq!(board[Position { row: 1, col: 1 }], Tile::Empty);
    }
}
