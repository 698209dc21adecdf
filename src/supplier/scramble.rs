//! Word selection and letter shuffling.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{GameRng, Vocabulary};

use super::used::UsedWords;

/// Shuffles tried before falling back to a rotation.
///
/// A word with two distinct letters has at most a 1/2 chance of shuffling
/// back to itself, so the fallback is effectively never reached.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 64;

/// A word drawn for one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draw {
    /// The answer.
    pub source: String,
    /// The puzzle shown to the player.
    pub scrambled: String,
}

/// Draw an unused word uniformly at random, record it, and scramble it.
///
/// Candidates are `vocabulary \ used`, materialized up front, so the draw
/// takes one step. Returns `None` only when every word has been used.
pub fn select_and_scramble(
    used: &mut UsedWords,
    vocabulary: &Vocabulary,
    rng: &mut GameRng,
) -> Option<Draw> {
    let candidates: Vec<&str> = vocabulary.iter().filter(|w| !used.contains(w)).collect();
    let source = (*rng.choose(&candidates)?).to_owned();

    used.insert(source.clone());
    let scrambled = scramble(&source, rng);
    Some(Draw { source, scrambled })
}

/// Produce a random permutation of `word` that differs from it.
///
/// Words with fewer than two distinct characters have no such permutation
/// and are returned unchanged; `Vocabulary` never contains them.
pub fn scramble(word: &str, rng: &mut GameRng) -> String {
    let original: SmallVec<[char; 16]> = word.chars().collect();
    if !has_distinct_permutation(&original) {
        return word.to_owned();
    }

    let mut letters = original.clone();
    for attempt in 0..MAX_SHUFFLE_ATTEMPTS {
        rng.shuffle(&mut letters);
        if letters != original {
            trace!(word, attempt, "scrambled");
            return letters.into_iter().collect();
        }
    }

    // Rotating by one only maps a word onto itself when all letters match.
    let mut rotated = original;
    rotated.rotate_left(1);
    rotated.into_iter().collect()
}

fn has_distinct_permutation(letters: &[char]) -> bool {
    letters.windows(2).any(|pair| pair[0] != pair[1])
}
