//! Core types: configuration, vocabulary, RNG, state snapshots, errors.

pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod vocabulary;

pub use config::{GameConfig, DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREMENT};
pub use error::ConfigError;
pub use rng::{GameRng, GameRngState};
pub use state::{GamePhase, GameState};
pub use vocabulary::Vocabulary;
