//! Game configuration.
//!
//! Hosts provide a `GameConfig` at startup. It is checked once, when the
//! engine is built, and never changes for the lifetime of the engine.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::vocabulary::Vocabulary;

/// Rounds per session when not configured.
pub const DEFAULT_MAX_ROUNDS: u32 = 10;

/// Points per correct guess when not configured.
pub const DEFAULT_SCORE_INCREMENT: u32 = 20;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Candidate words.
    pub vocabulary: Vocabulary,

    /// Total rounds per session (1..=vocabulary size).
    #[serde(default = "default_max_rounds")]
    pub max_rounds: u32,

    /// Points awarded per correct guess.
    #[serde(default = "default_score_increment")]
    pub score_increment: u32,

    /// RNG seed. `None` draws one from entropy when the engine is built.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_rounds() -> u32 {
    DEFAULT_MAX_ROUNDS
}

fn default_score_increment() -> u32 {
    DEFAULT_SCORE_INCREMENT
}

impl GameConfig {
    /// Create a configuration with default round count and scoring.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            max_rounds: DEFAULT_MAX_ROUNDS,
            score_increment: DEFAULT_SCORE_INCREMENT,
            seed: None,
        }
    }

    /// Set the number of rounds per session.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Set the points awarded per correct guess.
    #[must_use]
    pub fn with_score_increment(mut self, increment: u32) -> Self {
        self.score_increment = increment;
        self
    }

    /// Fix the RNG seed for a reproducible session.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that a session can always be played to completion.
    ///
    /// Every round consumes one unused word, so `max_rounds` may not exceed
    /// the vocabulary size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vocabulary.is_empty() {
            return Err(ConfigError::EmptyVocabulary);
        }
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        if self.score_increment == 0 {
            return Err(ConfigError::ZeroScoreIncrement);
        }
        if self.max_rounds as usize > self.vocabulary.len() {
            return Err(ConfigError::RoundsExceedVocabulary {
                max_rounds: self.max_rounds,
                vocabulary_size: self.vocabulary.len(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Vocabulary::builtin())
    }
}
