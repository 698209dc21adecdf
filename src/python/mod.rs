//! Python bindings for the unscramble game engine.
//!
//! Lets a Python host act as the presentation layer: it forwards user
//! intents and re-renders from the returned snapshot.
//!
//! # Quick Start
//!
//! ```python
//! import unscramble
//!
//! game = unscramble.UnscrambleGame(seed=42)
//! print(game.scrambled_word)
//!
//! game.update_guess("guess")
//! state = game.check_guess()
//! if state.is_guess_wrong:
//!     print("try again")
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// unscramble: a word-unscrambling game engine.
#[pymodule]
fn unscramble(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGameState>()?;
    m.add_class::<PyUnscrambleGame>()?;
    m.add("DEFAULT_MAX_ROUNDS", crate::core::DEFAULT_MAX_ROUNDS)?;
    m.add("DEFAULT_SCORE_INCREMENT", crate::core::DEFAULT_SCORE_INCREMENT)?;
    Ok(())
}
