//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameConfig, Vocabulary, DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREMENT};
use crate::engine::GameEngine;

use super::py_core::PyGameState;

/// Python wrapper for GameEngine.
#[pyclass(name = "UnscrambleGame")]
pub struct PyUnscrambleGame {
    engine: GameEngine,
}

#[pymethods]
impl PyUnscrambleGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - words: Vocabulary (defaults to the built-in word list)
    /// - max_rounds: Rounds per session
    /// - score_increment: Points per correct guess
    /// - seed: RNG seed for reproducible games
    ///
    /// Raises ValueError for a configuration that cannot be played.
    #[new]
    #[pyo3(signature = (
        words = None,
        max_rounds = DEFAULT_MAX_ROUNDS,
        score_increment = DEFAULT_SCORE_INCREMENT,
        seed = None
    ))]
    fn new(
        words: Option<Vec<String>>,
        max_rounds: u32,
        score_increment: u32,
        seed: Option<u64>,
    ) -> PyResult<Self> {
        let vocabulary = match words {
            Some(words) => Vocabulary::new(words).map_err(|e| PyValueError::new_err(e.to_string()))?,
            None => Vocabulary::builtin(),
        };

        let mut config = GameConfig::new(vocabulary)
            .with_max_rounds(max_rounds)
            .with_score_increment(score_increment);
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }

        let engine = GameEngine::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Store the in-progress guess.
    fn update_guess(&mut self, guess: String) {
        self.engine.update_draft(guess);
    }

    /// Check the stored guess.
    fn check_guess(&mut self) -> PyGameState {
        PyGameState(self.engine.submit_guess())
    }

    /// Skip the current word.
    fn skip(&mut self) -> PyGameState {
        PyGameState(self.engine.skip())
    }

    /// Start a new session.
    fn reset(&mut self) -> PyGameState {
        PyGameState(self.engine.reset())
    }

    /// Current snapshot.
    #[getter]
    fn state(&self) -> PyGameState {
        PyGameState(self.engine.state())
    }

    #[getter]
    fn user_guess(&self) -> String {
        self.engine.draft().to_owned()
    }

    #[getter]
    fn scrambled_word(&self) -> String {
        self.engine.state().scrambled_word.clone()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.engine.state().score
    }

    #[getter]
    fn round(&self) -> u32 {
        self.engine.state().round
    }

    #[getter]
    fn is_guess_wrong(&self) -> bool {
        self.engine.state().is_guess_wrong
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.engine.state().is_game_over
    }

    #[getter]
    fn max_rounds(&self) -> u32 {
        self.engine.max_rounds()
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.engine.seed()
    }

    fn __repr__(&self) -> String {
        let state = self.engine.state();
        let status = if state.is_game_over { "over" } else { "playing" };
        format!(
            "UnscrambleGame(round={}/{}, score={}, status={})",
            state.round,
            self.engine.max_rounds(),
            state.score,
            status
        )
    }
}
