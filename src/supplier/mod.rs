//! Word supplier: picks unused words and scrambles them.
//!
//! The supplier owns everything random about a session. It holds the
//! vocabulary, the words served so far, and the RNG, and hands the engine
//! one `Draw` per round.

mod scramble;
mod used;

pub use scramble::{scramble, select_and_scramble, Draw, MAX_SHUFFLE_ATTEMPTS};
pub use used::UsedWords;

use crate::core::{GameRng, GameRngState, Vocabulary};

/// Source of scrambled words for one engine.
#[derive(Clone, Debug)]
pub struct WordSupplier {
    vocabulary: Vocabulary,
    used: UsedWords,
    rng: GameRng,
}

impl WordSupplier {
    /// Create a supplier with nothing served yet.
    #[must_use]
    pub fn new(vocabulary: Vocabulary, rng: GameRng) -> Self {
        Self {
            vocabulary,
            used: UsedWords::new(),
            rng,
        }
    }

    /// Draw the next unused word.
    ///
    /// Returns `None` once the vocabulary is exhausted.
    pub fn next_word(&mut self) -> Option<Draw> {
        select_and_scramble(&mut self.used, &self.vocabulary, &mut self.rng)
    }

    /// Start a new session: forget served words. The RNG stream continues.
    pub fn clear(&mut self) {
        self.used.clear();
    }

    #[must_use]
    pub fn used(&self) -> &UsedWords {
        &self.used
    }

    /// Words not yet served this session.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.vocabulary.len() - self.used.len()
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_exhausts_then_clears() {
        let vocab = Vocabulary::new(["cat", "dog", "bird"]).unwrap();
        let mut supplier = WordSupplier::new(vocab, GameRng::new(5));

        assert_eq!(supplier.remaining(), 3);
        for expected_remaining in [2, 1, 0] {
            assert!(supplier.next_word().is_some());
            assert_eq!(supplier.remaining(), expected_remaining);
        }
        assert!(supplier.next_word().is_none());

        supplier.clear();
        assert!(supplier.used().is_empty());
        assert_eq!(supplier.remaining(), 3);
        assert!(supplier.next_word().is_some());
    }

    #[test]
    fn test_same_seed_same_draws() {
        let vocab = Vocabulary::builtin();
        let mut a = WordSupplier::new(vocab.clone(), GameRng::new(42));
        let mut b = WordSupplier::new(vocab, GameRng::new(42));

        for _ in 0..10 {
            assert_eq!(a.next_word(), b.next_word());
        }
        assert_eq!(a.rng_state(), b.rng_state());
    }
}
