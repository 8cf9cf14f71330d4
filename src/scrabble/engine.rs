use log::debug;

use crate::config::EngineConfig;
use crate::error::Result;

use super::agent::{Action, MoveSelector, Referee};
use super::blanks::BlankPermutator;
use super::board::BoardQuery;
use super::constraint::grid::ConstraintGrid;
use super::dictionary::WordDictionary;
use super::rack::Rack;
use super::util::Candidate;
use super::word_search::MoveEnumerator;

/// The move generator for one player. Owns the word graph for the life of the process;
/// everything else is rebuilt from scratch each turn and dropped once the turn is decided
pub struct MoveGenerator {
    vocab: WordDictionary,
}

impl MoveGenerator {
    pub fn new(vocab: WordDictionary) -> Self {
        Self { vocab }
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let vocab = WordDictionary::from_file(&config.dictionary_path)?;
        Ok(Self::new(vocab))
    }

    pub fn vocab(&self) -> &WordDictionary {
        &self.vocab
    }

    /// Every play the rack can make on the board, with each way of placing its wildcards
    pub fn find_all_moves(&self, board: &impl BoardQuery, rack: &Rack) -> Vec<Candidate> {
        let grid = ConstraintGrid::build(board, rack, &self.vocab);
        let raw = MoveEnumerator::new(&self.vocab, &grid).enumerate(rack);
        let n_raw = raw.len();
        let moves = BlankPermutator::new(rack).expand_all(raw);
        debug!(
            "rack {}: {} candidates, {} after wildcard placement",
            rack,
            n_raw,
            moves.len()
        );
        moves
    }

    /// Decides the turn: the best legal play according to the referee, or a full exchange
    pub fn choose_move<R: Referee>(
        &self,
        board: &impl BoardQuery,
        rack: &Rack,
        referee: &R,
    ) -> Action {
        let moves = self.find_all_moves(board, rack);
        MoveSelector::new(referee).select(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IllegalMove;
    use crate::scrabble::board::{ScrabbleBoard, Tile};
    use crate::scrabble::util::{Direction, Position, TileSource};
    use crate::scrabble::CENTER;

    /// Accepts a play when every word it forms is in the list and it does not run into
    /// tiles at either end. Scores one point per tile, none for wildcards
    struct TestReferee<'a> {
        board: &'a ScrabbleBoard,
        vocab: &'a WordDictionary,
    }

    impl TestReferee<'_> {
        fn cross_word(&self, pos: Position, letter: char, dir: Direction) -> String {
            let cross = dir.flip();
            let mut before = pos
                .iter_prev(cross)
                .map_while(|p| self.board.tile(p).letter())
                .collect::<Vec<_>>();
            before.reverse();
            let after = pos.iter_next(cross).map_while(|p| self.board.tile(p).letter());
            before
                .into_iter()
                .chain(std::iter::once(letter))
                .chain(after)
                .collect()
        }
    }

    impl Referee for TestReferee<'_> {
        fn verify_legality(&self, candidate: &Candidate) -> std::result::Result<(), IllegalMove> {
            if !self.vocab.contains(&candidate.word()) {
                return Err(IllegalMove::new("not a word"));
            }
            let last = candidate.pos.step_n(candidate.len() - 1, candidate.dir);
            let ends = [
                candidate.pos.prev(candidate.dir),
                last.and_then(|p| p.next(candidate.dir)),
            ];
            if ends.iter().flatten().any(|&p| self.board.is_letter(p)) {
                return Err(IllegalMove::new("runs into other tiles"));
            }
            for (pos, tile) in candidate.placed() {
                let word = self.cross_word(pos, tile.letter, candidate.dir);
                if word.len() > 1 && !self.vocab.contains(&word) {
                    return Err(IllegalMove::new(format!("forms {}", word)));
                }
            }
            Ok(())
        }

        fn score(&self, candidate: &Candidate) -> i32 {
            candidate
                .tiles
                .iter()
                .filter(|t| t.source != TileSource::Blank)
                .count() as i32
        }
    }

    fn board_with(tiles: &[(usize, usize, char)]) -> ScrabbleBoard {
        let mut board = ScrabbleBoard::empty();
        for &(row, col, l) in tiles {
            board[Position { row, col }] = Tile::Letter(l);
        }
        board
    }

    #[test]
    fn test_opening_play_through_center() {
        let engine = MoveGenerator::new(WordDictionary::build(["cat"]).unwrap());
        let board = ScrabbleBoard::empty();
        let rack: Rack = "cat".chars().collect();

        let moves = engine.find_all_moves(&board, &rack);
        assert!(moves
            .iter()
            .any(|m| m.word() == "cat" && m.iter().any(|(p, _)| p == CENTER)));

        let referee = TestReferee {
            board: &board,
            vocab: engine.vocab(),
        };
        match engine.choose_move(&board, &rack, &referee) {
            Action::Play(m) => {
                assert_eq!(m.word(), "cat");
                assert!(m.iter().any(|(p, _)| p == CENTER));
            }
            Action::ExchangeAll => panic!("expected a play"),
        }
    }

    #[test]
    fn test_fixed_letter_inside_word() {
        let engine = MoveGenerator::new(WordDictionary::build(["dog", "god"]).unwrap());
        let board = board_with(&[(7, 8, 'd')]);
        let rack: Rack = "og".chars().collect();
        let moves = engine.find_all_moves(&board, &rack);

        let d = Position { row: 7, col: 8 };
        for m in moves.iter() {
            assert!(engine.vocab().contains(&m.word()));
            // every play goes through the d and uses it as is
            let (_, tile) = m.iter().find(|(p, _)| *p == d).unwrap();
            assert_eq!(tile.letter, 'd');
            assert_eq!(tile.source, TileSource::Board);
        }
        // across from the centre the d would have to be the second letter, which no word allows
        assert!(!moves
            .iter()
            .any(|m| m.pos == CENTER && m.dir == Direction::Across));
        assert!(moves
            .iter()
            .any(|m| m.word() == "dog" && m.pos == d && m.dir == Direction::Across));
        assert!(moves.iter().any(|m| m.word() == "god"
            && m.pos == Position { row: 7, col: 6 }
            && m.dir == Direction::Across));
        assert!(moves
            .iter()
            .any(|m| m.word() == "dog" && m.pos == d && m.dir == Direction::Down));
    }

    #[test]
    fn test_exchange_when_stuck() {
        let engine = MoveGenerator::new(
            WordDictionary::build(["ox", "ax", "xi", "jo", "za", "quiz", "jinx"]).unwrap(),
        );
        // A crowded endgame board with no vowels left to hook onto
        let board = ScrabbleBoard::from_rows(&[
            "", "", "", "", "", "",
            "     tsk",
            "     sh",
            "     tsk",
            "", "", "", "", "", "",
        ])
        .unwrap();
        let rack: Rack = "qzxj".chars().collect();
        let referee = TestReferee {
            board: &board,
            vocab: engine.vocab(),
        };
        assert!(engine.find_all_moves(&board, &rack).is_empty());
        assert_eq!(
            engine.choose_move(&board, &rack, &referee),
            Action::ExchangeAll
        );
    }

    #[test]
    fn test_wildcard_placement_feeds_the_referee() {
        let engine = MoveGenerator::new(WordDictionary::build(["occur"]).unwrap());
        let board = ScrabbleBoard::empty();
        let rack: Rack = "ocur?".chars().collect();
        let moves = engine.find_all_moves(&board, &rack);
        let at = |col| Position { row: 7, col };
        let here = moves
            .iter()
            .filter(|m| m.pos == at(3) && m.dir == Direction::Across)
            .map(|m| m.notation())
            .collect::<Vec<_>>();
        assert_eq!(here, vec!["oCcur", "ocCur"]);
    }

    #[test]
    fn test_every_play_comes_out_of_the_rack() {
        let engine = MoveGenerator::new(WordDictionary::build(["cat"]).unwrap());
        let board = ScrabbleBoard::empty();
        for hand in ["???", "ca??", "c?t", "cat?"] {
            let rack: Rack = hand.chars().collect();
            let moves = engine.find_all_moves(&board, &rack);
            assert!(!moves.is_empty(), "nothing for {}", hand);
            for m in moves.iter() {
                let mut left = rack.clone();
                for (_, tile) in m.placed() {
                    left = match tile.source {
                        TileSource::Blank => left.remove_wildcard(),
                        _ => left.remove(tile.letter),
                    }
                    .unwrap_or_else(|| panic!("{} overdraws {}", m, hand));
                }
            }
        }
        let all_blank = engine.find_all_moves(&board, &"???".chars().collect());
        assert!(all_blank.iter().all(|m| m.notation() == "CAT"));
    }

    #[test]
    fn test_best_score_wins() {
        let engine =
            MoveGenerator::new(WordDictionary::build(["at", "cat", "cart", "art"]).unwrap());
        let board = board_with(&[(7, 7, 'a')]);
        let rack: Rack = "crtx".chars().collect();
        let referee = TestReferee {
            board: &board,
            vocab: engine.vocab(),
        };
        match engine.choose_move(&board, &rack, &referee) {
            Action::Play(m) => assert_eq!(m.word(), "cart"),
            Action::ExchangeAll => panic!("expected a play"),
        }
    }

    #[test]
    fn test_from_config() {
        let path = std::env::temp_dir().join(format!("scrabble_ai_engine_{}.txt", std::process::id()));
        std::fs::write(&path, "cat\ndog\n").unwrap();
        let engine = MoveGenerator::from_config(&EngineConfig::new(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(engine.vocab().len(), 2);

        assert!(MoveGenerator::from_config(&EngineConfig::new("/no/such/words.txt")).is_err());
    }
}
