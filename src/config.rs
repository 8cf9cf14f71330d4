use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scrabble::rack::DEFAULT_WILDCARD;
use crate::utils::serialization;

/// Startup settings for the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Newline separated list of legal words
    pub dictionary_path: PathBuf,
    /// Character the hand collaborator uses for a wildcard tile
    #[serde(default = "default_wildcard")]
    pub wildcard: char,
}

fn default_wildcard() -> char {
    DEFAULT_WILDCARD
}

impl EngineConfig {
    pub fn new<P: Into<PathBuf>>(dictionary_path: P) -> Self {
        Self {
            dictionary_path: dictionary_path.into(),
            wildcard: DEFAULT_WILDCARD,
        }
    }

    /// Reads the settings from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        serialization::load_from_disk(path)
    }
}
