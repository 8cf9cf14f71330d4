use ndarray::ArrayView1;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::constraint::grid::ConstraintGrid;
use super::constraint::Constraint;
use super::dictionary::{NodeId, WordDictionary};
use super::rack::Rack;
use super::util::{Candidate, Direction, Position, TileSource, WordTile};
use super::BOARD_SIZE;

/// Where a line walk started, copied into every candidate it finds
#[derive(Debug, Clone, Copy)]
struct Origin {
    pos: Position,
    dir: Direction,
}

/// State carried down one branch of a line walk
#[derive(Debug, Clone)]
struct WalkState {
    /// Offset of the next cell to fill
    next: usize,
    /// Dictionary node for the tiles laid so far
    node: NodeId,
    /// What is left of the rack on this branch
    rack: Rack,
    /// Some consumed cell was an anchor
    anchored: bool,
    /// At least one tile came from the rack
    placed: bool,
}

/// Backtracking search over the constraint grid that produces every word the rack can form.
///
/// Each of the 15x15 cells is tried as the start of a play in both directions. From there the
/// walk extends one cell at a time, only following letters that the cell allows, that continue
/// some dictionary word and that the rack (or the board) can supply.
pub struct MoveEnumerator<'a> {
    vocab: &'a WordDictionary,
    grid: &'a ConstraintGrid,
}

impl<'a> MoveEnumerator<'a> {
    pub fn new(vocab: &'a WordDictionary, grid: &'a ConstraintGrid) -> Self {
        Self { vocab, grid }
    }

    /// All candidates, ordered by line, then start offset, then direction
    #[cfg(not(feature = "parallel"))]
    pub fn enumerate(&self, rack: &Rack) -> Vec<Candidate> {
        let mut moves = Vec::new();
        for line in 0..BOARD_SIZE {
            for start in 0..BOARD_SIZE {
                for &dir in Direction::iter() {
                    self.walk_line(dir, line, start, rack, &mut moves);
                }
            }
        }
        moves
    }

    /// All candidates, ordered by line, then start offset, then direction
    #[cfg(feature = "parallel")]
    pub fn enumerate(&self, rack: &Rack) -> Vec<Candidate> {
        (0..BOARD_SIZE * BOARD_SIZE)
            .into_par_iter()
            .flat_map(|i| {
                let (line, start) = (i / BOARD_SIZE, i % BOARD_SIZE);
                let mut moves = Vec::new();
                for &dir in Direction::iter() {
                    self.walk_line(dir, line, start, rack, &mut moves);
                }
                moves
            })
            .collect()
    }

    /// Candidates whose first tile sits `start` cells into `line`
    pub fn enumerate_from(
        &self,
        dir: Direction,
        line: usize,
        start: usize,
        rack: &Rack,
    ) -> Vec<Candidate> {
        let mut moves = Vec::new();
        self.walk_line(dir, line, start, rack, &mut moves);
        moves
    }

    fn walk_line(
        &self,
        dir: Direction,
        line: usize,
        start: usize,
        rack: &Rack,
        moves: &mut Vec<Candidate>,
    ) {
        let cells = self.grid.line(dir, line);
        // skip the cell just after a tile, the word there would only be a fragment
        if start > 0 && cells[start - 1].fixed {
            return;
        }

        let origin = Origin {
            pos: Position::on_line(dir, line, start),
            dir,
        };
        let state = WalkState {
            next: start,
            node: self.vocab.root(),
            rack: rack.clone(),
            anchored: false,
            placed: false,
        };
        let mut word = Vec::with_capacity(BOARD_SIZE - start);
        self.extend(&cells, origin, state, &mut word, moves);
    }

    fn extend(
        &self,
        cells: &ArrayView1<Constraint>,
        origin: Origin,
        state: WalkState,
        word: &mut Vec<WordTile>,
        moves: &mut Vec<Candidate>,
    ) {
        let next_cell = cells.get(state.next);

        // The word may stop here if the line ends or the following cell can be left empty
        let can_end = next_cell.map_or(true, |c| c.terminable);
        if can_end && state.anchored && state.placed && self.vocab.is_terminal(state.node) {
            moves.push(Candidate::new(word.clone(), origin.pos, origin.dir));
        }

        let cell = match next_cell {
            Some(cell) => cell,
            None => return,
        };
        let anchored = state.anchored || cell.anchor;

        for letter in cell.letters.iter() {
            // No word continues with this letter
            let node = match self.vocab.child(state.node, letter) {
                Some(node) => node,
                None => continue,
            };

            let (source, rack) = if cell.fixed {
                (TileSource::Board, state.rack.clone())
            } else if let Some(rack) = state.rack.remove(letter) {
                (TileSource::Rack, rack)
            } else if let Some(rack) = state
                .rack
                .remove_wildcard()
                .filter(|_| cell.blank_allowed)
            {
                (TileSource::Blank, rack)
            } else {
                continue;
            };

            word.push(WordTile::new(letter, source));
            let next_state = WalkState {
                next: state.next + 1,
                node,
                rack,
                anchored,
                placed: state.placed || !cell.fixed,
            };
            self.extend(cells, origin, next_state, word, moves);
            word.pop();
        }
    }
}
