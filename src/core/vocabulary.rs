//! The fixed candidate word set for a game.
//!
//! A `Vocabulary` is validated once at construction and is read-only
//! afterwards. Every word it holds:
//!
//! - is trimmed and lowercased
//! - has at least 2 characters
//! - has at least 2 distinct characters, so some permutation differs from it
//!
//! Words are kept sorted and deduplicated so that a seeded session draws the
//! same sequence regardless of input order.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Built-in word list, one lowercase word per line.
static DEFAULT_WORDS: &str = include_str!("../../data/words.txt");

/// Validated, immutable word set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from arbitrary words.
    ///
    /// Fails on the first word that could never be scrambled, or if no
    /// words remain.
    pub fn new<I, S>(words: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = FxHashSet::default();
        let mut out = Vec::new();

        for raw in words {
            let word = raw.as_ref().trim().to_lowercase();
            check_word(&word)?;
            if seen.insert(word.clone()) {
                out.push(word);
            }
        }

        if out.is_empty() {
            return Err(ConfigError::EmptyVocabulary);
        }

        out.sort_unstable();
        Ok(Self { words: out })
    }

    /// The embedded default word list.
    #[must_use]
    pub fn builtin() -> Self {
        // The embedded list is lowercase, unique, and scramblable.
        let mut words: Vec<String> = DEFAULT_WORDS
            .lines()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_owned)
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed vocabulary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check membership (case-insensitive).
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let lower = word.trim().to_lowercase();
        self.words.binary_search(&lower).is_ok()
    }

    /// Iterate over words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Words as a sorted slice.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TryFrom<Vec<String>> for Vocabulary {
    type Error = ConfigError;

    fn try_from(words: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(words)
    }
}

impl From<Vocabulary> for Vec<String> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.words
    }
}

fn check_word(word: &str) -> Result<(), ConfigError> {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return Err(ConfigError::WordTooShort { word: word.to_owned() });
    };

    let mut len = 1;
    let mut distinct = false;
    for c in chars {
        len += 1;
        distinct |= c != first;
    }

    if len < 2 {
        return Err(ConfigError::WordTooShort { word: word.to_owned() });
    }
    if !distinct {
        return Err(ConfigError::NoDistinctPermutation { word: word.to_owned() });
    }
    Ok(())
}
