//! Construction-time errors.
//!
//! The engine has no per-call error surface: a wrong guess is reported
//! through `GameState::is_guess_wrong` and out-of-order intents are ignored.
//! The only failures are configuration contract violations, which are
//! rejected before a session can start.

use thiserror::Error;

/// A configuration that cannot produce a playable session.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The vocabulary has no words.
    #[error("vocabulary is empty")]
    EmptyVocabulary,

    /// A word has fewer than two characters.
    #[error("word {word:?} is too short (need at least 2 characters)")]
    WordTooShort { word: String },

    /// Every permutation of the word equals the word itself.
    #[error("word {word:?} has no permutation distinct from itself")]
    NoDistinctPermutation { word: String },

    /// `max_rounds` is zero.
    #[error("max rounds must be at least 1")]
    ZeroRounds,

    /// `score_increment` is zero.
    #[error("score increment must be at least 1")]
    ZeroScoreIncrement,

    /// More rounds than distinct words to serve.
    #[error("max rounds ({max_rounds}) exceeds vocabulary size ({vocabulary_size})")]
    RoundsExceedVocabulary {
        max_rounds: u32,
        vocabulary_size: usize,
    },
}
