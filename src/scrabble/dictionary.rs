use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fst::raw::{CompiledAddr, Fst};
use fst::Set;
use log::info;

use crate::error::{Error, Result};

/// Handle on a node of the word graph. The root stands for the empty prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(CompiledAddr);

/// Immutable prefix graph over the legal word list.
///
/// Backed by an [`fst::Set`], which stores the words as a minimal acyclic automaton
/// in one flat buffer; nodes are addressed by their offset into it, so the graph can be
/// shared read-only between turns without any pointer juggling.
pub struct WordDictionary {
    words: Set<Vec<u8>>,
}

impl WordDictionary {
    /// Builds the graph from words in any order. Words are lowercased and duplicates collapse
    pub fn build<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // fst needs its keys sorted and unique
        let entries: BTreeSet<Vec<u8>> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase().into_bytes())
            .collect();
        let words = Set::from_iter(entries)?;
        Ok(Self { words })
    }

    /// Loads a newline separated word list. Failing to read it is fatal for the engine
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let read_err = |source: std::io::Error| Error::WordList {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_err)?;
        let reader = BufReader::new(file);
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line.map_err(read_err)?;
            let word = line.trim();
            if word.is_empty() {
                continue;
            }
            words.push(word.to_string());
        }

        let dict = Self::build(words)?;
        info!("loaded {} words from {}", dict.len(), path.display());
        Ok(dict)
    }

    fn graph(&self) -> &Fst<Vec<u8>> {
        self.words.as_fst()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn root(&self) -> NodeId {
        NodeId(self.graph().root().addr())
    }

    /// Follows the edge labelled `letter` out of `node`, if there is one
    pub fn child(&self, node: NodeId, letter: char) -> Option<NodeId> {
        if !letter.is_ascii() {
            return None;
        }
        let node = self.graph().node(node.0);
        node.find_input(letter as u8)
            .map(|i| NodeId(node.transition_addr(i)))
    }

    /// A word ends at this node
    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.graph().node(node.0).is_final()
    }

    /// Follows a run of letters from `node`. Stops at the first missing edge
    pub fn walk<I>(&self, node: NodeId, letters: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = char>,
    {
        letters
            .into_iter()
            .try_fold(node, |node, letter| self.child(node, letter))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.walk(self.root(), word.chars())
            .map_or(false, |node| self.is_terminal(node))
    }
}

impl std::fmt::Debug for WordDictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("WordDictionary")
            .field("words", &self.len())
            .finish()
    }
}
