//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical word draws and scrambles
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use unscramble::core::GameRng;
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! let mut a = vec!['c', 'a', 't'];
//! let mut b = a.clone();
//! rng1.shuffle(&mut a);
//! rng2.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded RNG owned by a single engine.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    #[test]
    fn test_same_seed_same_scrambles() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for word in ["kaleidoscope", "marshmallow", "xylophone"] {
            let mut a = letters(word);
            let mut b = letters(word);
            rng1.shuffle(&mut a);
            rng2.shuffle(&mut b);
            assert_eq!(a, b, "{word} diverged");
        }
    }

    #[test]
    fn test_seeds_pick_different_words() {
        let words = ["cat", "dog", "bird", "fish", "frog", "goat", "lion", "wolf"];
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let picks1: Vec<_> = (0..16).map(|_| *rng1.choose(&words).unwrap()).collect();
        let picks2: Vec<_> = (0..16).map(|_| *rng2.choose(&words).unwrap()).collect();

        assert_ne!(picks1, picks2);
    }

    #[test]
    fn test_shuffle_keeps_letters() {
        let mut rng = GameRng::new(7);
        let word = "stargazing";
        let mut shuffled = letters(word);
        rng.shuffle(&mut shuffled);

        let mut sorted_shuffled = shuffled.clone();
        sorted_shuffled.sort_unstable();
        let mut sorted_word = letters(word);
        sorted_word.sort_unstable();
        assert_eq!(sorted_shuffled, sorted_word);
    }

    #[test]
    fn test_choose_word() {
        let mut rng = GameRng::new(3);
        let words = ["cat", "dog"];

        for _ in 0..20 {
            let picked = rng.choose(&words).unwrap();
            assert!(words.contains(picked));
        }
        assert!(rng.choose::<&str>(&[]).is_none());
    }

    #[test]
    fn test_range_stays_in_bounds() {
        let mut rng = GameRng::new(9);
        for len in 1..20 {
            assert!(rng.gen_range_usize(0..len) < len);
        }
    }

    #[test]
    fn test_state_round_trip() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.gen_range_usize(0..1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range_usize(0..1000)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
