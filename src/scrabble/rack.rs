use std::fmt;

use super::letter_set::{index_letter, letter_index, LetterSet};
use super::util::Letter;

/// Character the hand collaborator uses for a wildcard unless configured otherwise
pub const DEFAULT_WILDCARD: char = '?';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rack {
    /// Histogram count of each letter in the rack
    letters: [u8; 26],
    /// Number of blanks in the rack
    n_blanks: u8,
    /// The total number of remaining letters+wildcards to play
    n_total: u32,
}

impl Rack {
    pub fn new(letters: [u8; 26], n_blanks: u8) -> Self {
        let n_total = letters.iter().map(|&i| i as u32).sum::<u32>() + n_blanks as u32;
        Self {
            letters,
            n_blanks,
            n_total,
        }
    }

    pub fn empty() -> Self {
        Self::new([0; 26], 0)
    }

    /// Decodes the hand as the board collaborator reports it. `wildcard` marks a blank tile,
    /// letters are case-insensitive and anything else is skipped
    pub fn from_hand(hand: impl IntoIterator<Item = char>, wildcard: char) -> Self {
        let mut rack = Self::empty();
        for c in hand {
            if c == wildcard {
                rack.add_inplace(Letter::Blank);
            } else if c.is_ascii_alphabetic() {
                rack.add_inplace(Letter::from(c));
            }
        }
        rack
    }

    /// Adds an additional tile in-place
    pub fn add_inplace(&mut self, letter: Letter) {
        match letter {
            Letter::Blank => self.n_blanks += 1,
            Letter::Letter(l) => match letter_index(l) {
                Some(i) => self.letters[i] += 1,
                None => return,
            },
        };
        self.n_total += 1;
    }

    pub fn n_blanks(&self) -> u8 {
        self.n_blanks
    }

    pub fn has_blank(&self) -> bool {
        self.n_blanks > 0
    }

    pub fn len(&self) -> usize {
        self.n_total as usize
    }

    pub fn is_empty(&self) -> bool {
        self.n_total == 0
    }

    /// Distinct lettered tiles held, wildcards excluded
    pub fn letter_set(&self) -> LetterSet {
        (0..26)
            .filter(|&i| self.letters[i] > 0)
            .map(index_letter)
            .collect()
    }

    /// Used while searching: a copy of the rack with one `letter` taken out
    pub fn remove(&self, letter: char) -> Option<Self> {
        let i = letter_index(letter)?;
        if self.letters[i] > 0 {
            let mut tmp = self.clone();
            tmp.letters[i] -= 1;
            tmp.n_total -= 1;
            Some(tmp)
        } else {
            None
        }
    }

    /// Used while searching: a copy of the rack with one wildcard taken out
    pub fn remove_wildcard(&self) -> Option<Self> {
        if self.n_blanks > 0 {
            let mut tmp = self.clone();
            tmp.n_blanks -= 1;
            tmp.n_total -= 1;
            Some(tmp)
        } else {
            None
        }
    }

    pub fn get_letters(&self) -> Vec<Letter> {
        let mut letters = Vec::new();
        for _ in 0..self.n_blanks {
            letters.push(Letter::Blank);
        }
        for i in 0..26 {
            for _ in 0..self.letters[i] {
                letters.push(Letter::Letter(index_letter(i)));
            }
        }
        letters
    }

    /// The rack written out the way the hand collaborator sends it, wildcards first
    pub fn to_hand(&self, wildcard: char) -> String {
        self.get_letters()
            .into_iter()
            .map(|l| match l {
                Letter::Blank => wildcard,
                Letter::Letter(c) => c,
            })
            .collect()
    }
}

impl Default for Rack {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::iter::FromIterator<char> for Rack {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::from_hand(iter, DEFAULT_WILDCARD)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hand(DEFAULT_WILDCARD))
    }
}
