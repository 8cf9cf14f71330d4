use std::fmt;
use std::slice::Iter;

use serde::{Deserialize, Serialize};

use super::BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub fn iter() -> Iter<'static, Direction> {
        static DIRS: [Direction; 2] = [Direction::Across, Direction::Down];
        DIRS.iter()
    }

    pub fn flip(&self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Across => write!(f, "across"),
            Self::Down => write!(f, "down"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Position of the cell `offset` squares into `line`, where lines run along `dir`.
    /// Across lines are rows and down lines are columns
    pub fn on_line(dir: Direction, line: usize, offset: usize) -> Self {
        match dir {
            Direction::Across => Position {
                row: line,
                col: offset,
            },
            Direction::Down => Position {
                row: offset,
                col: line,
            },
        }
    }

    /// Returns the next position in the given direction
    pub fn next(&self, dir: Direction) -> Option<Position> {
        let mut p = *self;
        if p[dir] + 1 < BOARD_SIZE {
            p[dir] += 1;
            Some(p)
        } else {
            None
        }
    }

    /// Returns the previous position in the given direction
    pub fn prev(&self, dir: Direction) -> Option<Position> {
        let mut p = *self;
        if p[dir] != 0 {
            p[dir] -= 1;
            Some(p)
        } else {
            None
        }
    }

    /// Iterates over the positions following this one in the given direction, up to the edge
    pub fn iter_next(&self, dir: Direction) -> impl Iterator<Item = Position> {
        std::iter::successors(self.next(dir), move |p| p.next(dir))
    }

    /// Iterates over the positions preceding this one in the given direction, up to the edge
    pub fn iter_prev(&self, dir: Direction) -> impl Iterator<Item = Position> {
        std::iter::successors(self.prev(dir), move |p| p.prev(dir))
    }

    /// Moves the position forward a fixed number of steps
    pub fn step_n(&self, n: usize, dir: Direction) -> Option<Position> {
        let mut p = *self;
        for _ in 0..n {
            p = p.next(dir)?;
        }
        Some(p)
    }

    /// The same square with rows and columns swapped
    pub fn transpose(&self) -> Position {
        Position {
            row: self.col,
            col: self.row,
        }
    }
}

impl std::ops::Index<Direction> for Position {
    type Output = usize;

    fn index(&self, index: Direction) -> &Self::Output {
        match index {
            Direction::Across => &self.col,
            Direction::Down => &self.row,
        }
    }
}

impl std::ops::IndexMut<Direction> for Position {
    fn index_mut(&mut self, index: Direction) -> &mut Self::Output {
        match index {
            Direction::Across => &mut self.col,
            Direction::Down => &mut self.row,
        }
    }
}

/// A tile as it sits in a rack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    Blank,
    Letter(char),
}

impl From<char> for Letter {
    fn from(c: char) -> Self {
        Letter::Letter(c.to_ascii_lowercase())
    }
}

/// Where the tile covering a square of a candidate comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileSource {
    /// A lettered tile taken from the rack
    Rack,
    /// A wildcard from the rack standing in for the letter
    Blank,
    /// Already on the board, nothing is consumed
    Board,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordTile {
    pub letter: char,
    pub source: TileSource,
}

impl WordTile {
    pub fn new(letter: char, source: TileSource) -> Self {
        Self { letter, source }
    }

    /// True if placing this tile consumes something from the rack
    pub fn is_placed(&self) -> bool {
        self.source != TileSource::Board
    }
}

/// A proposed play: the tiles along the line, where the first one lands, and the direction.
/// Nothing about it has been checked against the full game rules yet
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub tiles: Vec<WordTile>,
    pub pos: Position,
    pub dir: Direction,
}

impl Candidate {
    pub fn new(tiles: Vec<WordTile>, pos: Position, dir: Direction) -> Self {
        Self { tiles, pos, dir }
    }

    /// The word spelled by the play, wildcards included as the letter they impersonate
    pub fn word(&self) -> String {
        self.tiles.iter().map(|t| t.letter).collect()
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn blanks_used(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.source == TileSource::Blank)
            .count()
    }

    /// Squares covered by the play, in order
    pub fn iter(&self) -> impl Iterator<Item = (Position, WordTile)> + '_ {
        let (pos, dir) = (self.pos, self.dir);
        self.tiles
            .iter()
            .enumerate()
            .filter_map(move |(i, t)| pos.step_n(i, dir).map(|p| (p, *t)))
    }

    /// Squares that receive a tile from the rack
    pub fn placed(&self) -> impl Iterator<Item = (Position, WordTile)> + '_ {
        self.iter().filter(|(_, t)| t.is_placed())
    }

    /// Legacy string form of the play: board tiles are spaces, wildcard tiles
    /// are uppercase and rack tiles lowercase
    pub fn notation(&self) -> String {
        self.tiles
            .iter()
            .map(|t| match t.source {
                TileSource::Rack => t.letter,
                TileSource::Blank => t.letter.to_ascii_uppercase(),
                TileSource::Board => ' ',
            })
            .collect()
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) {} [{}]",
            self.word(),
            self.pos.row,
            self.pos.col,
            self.dir,
            self.notation()
        )
    }
}
