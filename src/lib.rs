//! # unscramble
//!
//! A single-player word-unscrambling game engine.
//!
//! The player is shown a scrambled word, submits guesses, and scores points
//! for each word unscrambled. A session lasts a fixed number of rounds and
//! never serves the same word twice.
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: Every transition produces a new `GameState`,
//!    shared as `Arc<GameState>`. Published snapshots never change.
//!
//! 2. **Single Owner**: `GameEngine` applies intents one at a time.
//!    Multi-threaded hosts go through `SharedEngine`.
//!
//! 3. **Fail Fast**: Configurations that could stall a session (too many
//!    rounds, unscramblable words) are rejected at construction.
//!
//! 4. **Deterministic**: A seeded session replays identically.
//!
//! ## Modules
//!
//! - `core`: Configuration, vocabulary, RNG, state snapshots, errors
//! - `supplier`: Word selection without repetition and letter scrambling
//! - `engine`: Intents, transitions, snapshot publication

pub mod core;
pub mod engine;
pub mod supplier;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameConfig, GamePhase, GameRng, GameRngState, GameState, Vocabulary,
    DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREMENT,
};

pub use crate::engine::{GameEngine, Intent, SharedEngine, SnapshotPublisher, SubscriptionId};

pub use crate::supplier::{scramble, select_and_scramble, Draw, UsedWords, WordSupplier};
