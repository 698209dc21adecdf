//! User intents forwarded by the presentation layer.

use serde::{Deserialize, Serialize};

/// Everything the presentation layer can ask of the engine.
///
/// ```
/// use unscramble::engine::Intent;
///
/// let intents = vec![
///     Intent::UpdateDraft("cat".into()),
///     Intent::SubmitGuess,
///     Intent::Skip,
///     Intent::Reset,
/// ];
/// assert!(!intents[0].resolves_round());
/// assert!(intents[1].resolves_round());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Replace the in-progress guess text.
    UpdateDraft(String),
    /// Check the stored draft against the current word.
    SubmitGuess,
    /// Give up on the current word.
    Skip,
    /// Start a new session.
    Reset,
}

impl Intent {
    /// Whether this intent can move the game to the next round.
    #[must_use]
    pub fn resolves_round(&self) -> bool {
        matches!(self, Intent::SubmitGuess | Intent::Skip)
    }
}
