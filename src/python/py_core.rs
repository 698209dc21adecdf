//! Snapshot bindings for Python.

use std::sync::Arc;

use pyo3::prelude::*;

use crate::core::{GamePhase, GameState};

/// Python wrapper for an immutable game snapshot.
#[pyclass(name = "GameState", frozen)]
#[derive(Clone, Debug)]
pub struct PyGameState(pub Arc<GameState>);

#[pymethods]
impl PyGameState {
    #[getter]
    fn scrambled_word(&self) -> String {
        self.0.scrambled_word.clone()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.0.score
    }

    /// 1-based round number.
    #[getter]
    fn round(&self) -> u32 {
        self.0.round
    }

    #[getter]
    fn is_guess_wrong(&self) -> bool {
        self.0.is_guess_wrong
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.0.is_game_over
    }

    /// One of "playing", "wrong", "game_over".
    #[getter]
    fn phase(&self) -> &'static str {
        match self.0.phase() {
            GamePhase::Playing => "playing",
            GamePhase::RoundResolvedWrong => "wrong",
            GamePhase::GameOver => "game_over",
        }
    }

    fn __eq__(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }

    fn __repr__(&self) -> String {
        format!(
            "GameState(scrambled_word={:?}, score={}, round={}, is_guess_wrong={}, is_game_over={})",
            self.0.scrambled_word, self.0.score, self.0.round, self.0.is_guess_wrong, self.0.is_game_over
        )
    }
}
