use ndarray::{Array2, ArrayView1};

use super::Constraint;
use crate::scrabble::board::{BoardQuery, Tile};
use crate::scrabble::dictionary::WordDictionary;
use crate::scrabble::letter_set::LetterSet;
use crate::scrabble::rack::Rack;
use crate::scrabble::util::{Direction, Position};
use crate::scrabble::{BOARD_SIZE, CENTER};

/// Index of `pos` inside the array for `dir`: `[line, offset along the line]`
fn cell_index(pos: Position, dir: Direction) -> [usize; 2] {
    match dir {
        Direction::Across => [pos.row, pos.col],
        Direction::Down => [pos.col, pos.row],
    }
}

/// Constraint grid used for generating move candidates. Takes the current board and the
/// rack of the player to move and works out, for both directions, what a play may put on
/// every cell.
///
/// Each direction gets its own array laid out line by line (`[line, offset]`), so a row
/// of the across array and a row of the down array are walked exactly the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintGrid {
    across: Array2<Constraint>,
    down: Array2<Constraint>,
}

impl ConstraintGrid {
    pub fn build(board: &impl BoardQuery, rack: &Rack, vocab: &WordDictionary) -> Self {
        let blank_allowed = rack.has_blank();
        // A wildcard can stand in for anything, otherwise we are limited to what we hold
        let playable = if blank_allowed {
            LetterSet::any()
        } else {
            rack.letter_set()
        };

        let across = Self::build_axis(board, Direction::Across, playable, blank_allowed, vocab);
        let down = Self::build_axis(board, Direction::Down, playable, blank_allowed, vocab);
        Self { across, down }
    }

    fn build_axis(
        board: &impl BoardQuery,
        dir: Direction,
        playable: LetterSet,
        blank_allowed: bool,
        vocab: &WordDictionary,
    ) -> Array2<Constraint> {
        let mut cells = Array2::from_elem((BOARD_SIZE, BOARD_SIZE), Constraint::default());
        for ((line, offset), cell) in cells.indexed_iter_mut() {
            let pos = Position::on_line(dir, line, offset);
            *cell = Self::constrain(board, pos, dir, playable, blank_allowed, vocab);
        }
        // Forces the opening play through the centre
        cells[cell_index(CENTER, dir)].anchor = true;
        cells
    }

    fn constrain(
        board: &impl BoardQuery,
        pos: Position,
        dir: Direction,
        playable: LetterSet,
        blank_allowed: bool,
        vocab: &WordDictionary,
    ) -> Constraint {
        if let Tile::Letter(l) = board.tile(pos) {
            return Constraint::filled(l);
        }

        // Tiles running perpendicular to the play on either side of this cell
        let cross = dir.flip();
        let mut prefix = pos
            .iter_prev(cross)
            .map_while(|p| board.tile(p).letter())
            .collect::<Vec<_>>();
        prefix.reverse();
        let suffix = pos
            .iter_next(cross)
            .map_while(|p| board.tile(p).letter())
            .collect::<Vec<_>>();

        if prefix.is_empty() && suffix.is_empty() {
            Constraint::open(playable, blank_allowed, false)
        } else {
            // Whatever goes here also extends the perpendicular word, so it has to stay legal
            let letters = Self::cross_check(vocab, &prefix, &suffix, playable);
            Constraint::open(letters, blank_allowed, true)
        }
    }

    /// Letters from `playable` that turn `prefix ? suffix` into a word
    pub fn cross_check(
        vocab: &WordDictionary,
        prefix: &[char],
        suffix: &[char],
        playable: LetterSet,
    ) -> LetterSet {
        let node = match vocab.walk(vocab.root(), prefix.iter().copied()) {
            Some(node) => node,
            None => return LetterSet::empty(),
        };
        playable
            .iter()
            .filter(|&l| {
                vocab
                    .child(node, l)
                    .and_then(|n| vocab.walk(n, suffix.iter().copied()))
                    .map_or(false, |n| vocab.is_terminal(n))
            })
            .collect()
    }

    fn axis(&self, dir: Direction) -> &Array2<Constraint> {
        match dir {
            Direction::Across => &self.across,
            Direction::Down => &self.down,
        }
    }

    /// Constraints along one line, in the order a play running in `dir` visits them
    pub fn line(&self, dir: Direction, line: usize) -> ArrayView1<'_, Constraint> {
        self.axis(dir).row(line)
    }

    /// Constraint on the cell at `pos` for plays running in `dir`
    pub fn get(&self, pos: Position, dir: Direction) -> &Constraint {
        &self.axis(dir)[cell_index(pos, dir)]
    }

    #[cfg(test)]
    pub(crate) fn get_mut(&mut self, pos: Position, dir: Direction) -> &mut Constraint {
        let cells = match dir {
            Direction::Across => &mut self.across,
            Direction::Down => &mut self.down,
        };
        &mut cells[cell_index(pos, dir)]
    }
}
