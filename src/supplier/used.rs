//! Words already served in the current session.

use im::{HashSet as ImHashSet, Vector};

/// Session-scoped record of served source words.
///
/// Uses `im` persistent structures so that cloning a session is O(1).
/// Membership goes through the set, draw order through the vector; both
/// always hold the same words.
#[derive(Clone, Debug, Default)]
pub struct UsedWords {
    set: ImHashSet<String>,
    order: Vector<String>,
}

impl UsedWords {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word. Returns false if it was already present.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        if self.set.contains(&word) {
            return false;
        }
        self.set.insert(word.clone());
        self.order.push_back(word);
        true
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Forget every served word.
    pub fn clear(&mut self) {
        self.set.clear();
        self.order.clear();
    }

    /// Served words, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
