//! Observable game state.
//!
//! `GameState` is an immutable snapshot: the engine never mutates a
//! published snapshot, it builds the next one and replaces it wholesale.
//! Snapshots are shared as `Arc<GameState>`, so any number of readers can
//! hold one without coordinating with the engine.

use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a guess or skip.
    Playing,
    /// The last guess was rejected; still waiting for a guess or skip.
    RoundResolvedWrong,
    /// All rounds resolved. Only reset leaves this phase.
    GameOver,
}

/// Snapshot of everything the presentation layer renders.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Current puzzle: a permutation of the source word, never equal to it.
    pub scrambled_word: String,

    /// Cumulative points.
    pub score: u32,

    /// 1-based round in play, or the final round once the game is over.
    pub round: u32,

    /// Set only by a rejected guess; cleared by the next transition.
    pub is_guess_wrong: bool,

    /// Set once the final round is resolved.
    pub is_game_over: bool,
}

impl GameState {
    /// State at the start of a session.
    #[must_use]
    pub fn new(scrambled_word: impl Into<String>) -> Self {
        Self {
            scrambled_word: scrambled_word.into(),
            score: 0,
            round: 1,
            is_guess_wrong: false,
            is_game_over: false,
        }
    }

    /// Derive the lifecycle phase from the flags.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.is_game_over {
            GamePhase::GameOver
        } else if self.is_guess_wrong {
            GamePhase::RoundResolvedWrong
        } else {
            GamePhase::Playing
        }
    }

    /// Whether guesses and skips are still accepted.
    #[must_use]
    pub fn accepts_guesses(&self) -> bool {
        !self.is_game_over
    }

    /// Next snapshot after a rejected guess.
    #[must_use]
    pub(crate) fn with_wrong_guess(&self) -> Self {
        Self {
            is_guess_wrong: true,
            ..self.clone()
        }
    }

    /// Next snapshot after the final round resolves.
    ///
    /// The scrambled word is left as it was.
    #[must_use]
    pub(crate) fn finished(&self, score: u32) -> Self {
        Self {
            score,
            is_guess_wrong: false,
            is_game_over: true,
            ..self.clone()
        }
    }

    /// Next snapshot after moving on to a new word.
    #[must_use]
    pub(crate) fn next_round(&self, scrambled_word: String, score: u32) -> Self {
        Self {
            scrambled_word,
            score,
            round: self.round + 1,
            is_guess_wrong: false,
            is_game_over: false,
        }
    }
}
