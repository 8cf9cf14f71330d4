use super::rack::Rack;
use super::util::{Candidate, TileSource};

/// Expands plays into every way of spreading wildcards over the tiles they put down.
///
/// The search only reaches for a wildcard when the lettered tile has run out, so a play
/// like `occur` with one `c` and a wildcard comes out as `oc?ur` and never as `o?cur`. The
/// two score differently once premium squares are involved, and any lettered tile may be
/// swapped for a wildcard the rack still holds, so the referee gets to see all of them.
pub struct BlankPermutator {
    /// Wildcards in the rack before anything is played
    n_blanks: usize,
}

impl BlankPermutator {
    pub fn new(rack: &Rack) -> Self {
        Self {
            n_blanks: rack.n_blanks() as usize,
        }
    }

    pub fn expand_all(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        candidates
            .into_iter()
            .flat_map(|c| self.expand(c))
            .collect()
    }

    /// Every wildcard placement of one play. A play using more than two wildcards is kept as is
    pub fn expand(&self, candidate: Candidate) -> Vec<Candidate> {
        let blank_letters = candidate
            .tiles
            .iter()
            .filter(|t| t.source == TileSource::Blank)
            .map(|t| t.letter)
            .collect::<Vec<_>>();
        let open_blanks = self.n_blanks.saturating_sub(blank_letters.len());

        // Squares receiving a tile from the rack, and the play with all of them lettered
        let slots = candidate
            .tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_placed())
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        let mut plain = candidate.clone();
        for &i in slots.iter() {
            plain.tiles[i].source = TileSource::Rack;
        }
        let letter = |i: usize| candidate.tiles[i].letter;
        let with_blanks = |blanks: &[usize]| {
            let mut c = plain.clone();
            for &i in blanks {
                c.tiles[i].source = TileSource::Blank;
            }
            c
        };

        let mut out = Vec::new();
        match blank_letters[..] {
            [] => {
                out.push(candidate.clone());
                if open_blanks >= 1 {
                    for (n, &i) in slots.iter().enumerate() {
                        out.push(with_blanks(&[i]));
                        if open_blanks >= 2 {
                            for &j in slots[n + 1..].iter() {
                                out.push(with_blanks(&[i, j]));
                            }
                        }
                    }
                }
            }
            [b] => {
                for &i in slots.iter().filter(|&&i| letter(i) == b) {
                    out.push(with_blanks(&[i]));
                    if open_blanks >= 1 {
                        // a second wildcard can replace any other lettered tile; pairs of
                        // the first wildcard's letter are only counted once
                        for &j in slots.iter() {
                            if j != i && (letter(j) != b || j > i) {
                                out.push(with_blanks(&[i, j]));
                            }
                        }
                    }
                }
            }
            [b0, b1] => {
                for &i in slots.iter().filter(|&&i| letter(i) == b0) {
                    for &j in slots.iter().filter(|&&j| letter(j) == b1) {
                        if i != j && (b0 != b1 || j > i) {
                            out.push(with_blanks(&[i, j]));
                        }
                    }
                }
            }
            // three or more wildcards are only ever placed where the search put them
            _ => out.push(candidate.clone()),
        }
        out
    }
}
