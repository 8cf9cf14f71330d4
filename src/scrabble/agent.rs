use log::{debug, trace};

use crate::error::IllegalMove;

use super::util::Candidate;

/// Knows the full rules of the game. The engine only proposes plays, the referee
/// decides whether they stand and what they are worth
pub trait Referee {
    /// Checks the play against everything the engine does not model itself
    fn verify_legality(&self, candidate: &Candidate) -> Result<(), IllegalMove>;
    /// Points for a play that passed [`Referee::verify_legality`]
    fn score(&self, candidate: &Candidate) -> i32;
}

/// What the player does this turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Play(Candidate),
    /// Swap the whole rack for new tiles
    ExchangeAll,
}

/// Picks the highest scoring legal play
pub struct MoveSelector<'r, R: Referee> {
    referee: &'r R,
}

impl<'r, R: Referee> MoveSelector<'r, R> {
    pub fn new(referee: &'r R) -> Self {
        Self { referee }
    }

    /// Ties go to the play seen first. If nothing is legal the whole rack is exchanged
    pub fn select<I>(&self, candidates: I) -> Action
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut best: Option<(i32, Candidate)> = None;
        let mut n_legal = 0;
        for candidate in candidates {
            if let Err(e) = self.referee.verify_legality(&candidate) {
                trace!("rejected {}: {}", candidate, e);
                continue;
            }
            n_legal += 1;
            let score = self.referee.score(&candidate);
            if best.as_ref().map_or(true, |(top, _)| score > *top) {
                best = Some((score, candidate));
            }
        }

        match best {
            Some((score, candidate)) => {
                debug!("{} legal plays, best is {} for {}", n_legal, candidate, score);
                Action::Play(candidate)
            }
            None => {
                debug!("no legal play, exchanging the rack");
                Action::ExchangeAll
            }
        }
    }
}
