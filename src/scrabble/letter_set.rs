use std::fmt;

const ALL_LETTERS: u32 = (1 << 26) - 1;

/// Maps `a..=z` to `0..26`
pub fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some(letter as usize - 'a' as usize)
    } else {
        None
    }
}

pub fn index_letter(i: usize) -> char {
    debug_assert!(i < 26);
    (b'a' + i as u8) as char
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct LetterSet {
    // bit is one if letter is in it
    accepted: u32,
}

impl LetterSet {
    pub fn empty() -> Self {
        Self { accepted: 0 }
    }
    pub fn any() -> Self {
        Self {
            accepted: ALL_LETTERS,
        }
    }
    pub fn single(letter: char) -> Self {
        let mut tmp = Self::empty();
        tmp.insert(letter);
        tmp
    }
    pub fn contains(&self, letter: char) -> bool {
        match letter_index(letter) {
            Some(i) => self.accepted & (1u32 << i) != 0,
            None => false,
        }
    }
    /// Letters outside `a..=z` are ignored
    pub fn insert(&mut self, letter: char) {
        if let Some(i) = letter_index(letter) {
            self.accepted |= 1u32 << i;
        }
    }
    pub fn is_empty(&self) -> bool {
        self.accepted == 0
    }
    pub fn is_any(&self) -> bool {
        self.accepted == ALL_LETTERS
    }
    pub fn len(&self) -> usize {
        self.accepted.count_ones() as usize
    }
    /// Letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = char> {
        let accepted = self.accepted;
        (0..26usize)
            .filter(move |&i| accepted & (1u32 << i) != 0)
            .map(index_letter)
    }
}

impl Default for LetterSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::iter::FromIterator<char> for LetterSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = char>,
    {
        let mut tmp = Self::default();
        iter.into_iter().for_each(|l| tmp.insert(l));
        tmp
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_any() {
            write!(f, ".")
        } else {
            write!(f, "[")?;
            for l in self.iter() {
                write!(f, "{}", l)?;
            }
            write!(f, "]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let set: LetterSet = "cat".chars().collect();
        assert!(set.contains('a'));
        assert!(!set.contains('b'));
        assert!(!set.contains('A'));
        assert_eq!(set.len(), 3);
        assert_eq!(set.iter().collect::<String>(), "act");
        assert_eq!(format!("{:?}", set), "[act]");
    }

    #[test]
    fn test_any() {
        let any = LetterSet::any();
        assert!(any.is_any());
        assert_eq!(any.len(), 26);
        assert_eq!(any.iter().last(), Some('z'));
        assert!(any.contains('q'));
        assert!(!LetterSet::single('q').is_any());
    }
}
