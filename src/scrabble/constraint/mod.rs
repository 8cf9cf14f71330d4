use super::letter_set::LetterSet;

pub mod grid;

/// What a new play may do with one cell of one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraint {
    /// Letters that may end up on this cell
    pub letters: LetterSet,
    /// A wildcard from the rack may be put down here
    pub blank_allowed: bool,
    /// A play covering this cell is connected to the rest of the board
    pub anchor: bool,
    /// A word may stop right before this cell
    pub terminable: bool,
    /// Already holds a tile, which the play reuses for free
    pub fixed: bool,
}

impl Constraint {
    /// A cell already holding `letter`
    pub fn filled(letter: char) -> Self {
        Self {
            letters: LetterSet::single(letter),
            blank_allowed: false,
            anchor: true,
            terminable: false,
            fixed: true,
        }
    }

    /// An empty cell accepting `letters`
    pub fn open(letters: LetterSet, blank_allowed: bool, anchor: bool) -> Self {
        Self {
            letters,
            blank_allowed,
            anchor,
            terminable: true,
            fixed: false,
        }
    }
}
