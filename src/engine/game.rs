//! The game engine: single owner of session state.
//!
//! Every change goes through one of four intents. Each resolved intent
//! builds a new `GameState`, swaps it in, and publishes it to observers.
//!
//! ## Lifecycle
//!
//! - Construction and `reset` start a session at round 1 with a fresh word.
//! - A correct guess or a skip resolves the round. Before the final round
//!   this draws a new word; on the final round it sets `is_game_over` and
//!   keeps the last scrambled word on screen.
//! - A wrong guess only sets `is_guess_wrong`.
//! - Guesses and skips after game over leave the state untouched; they only
//!   clear the draft.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::core::{ConfigError, GameConfig, GameRng, GameRngState, GameState};
use crate::supplier::{Draw, WordSupplier};

use super::intent::Intent;
use super::publisher::{SnapshotPublisher, SubscriptionId};

/// Case-insensitive exact match after trimming surrounding whitespace.
#[must_use]
pub fn is_correct_guess(guess: &str, answer: &str) -> bool {
    guess.trim().to_lowercase() == answer.to_lowercase()
}

/// Word-unscrambling game engine.
///
/// ```
/// use unscramble::core::{GameConfig, Vocabulary};
/// use unscramble::engine::GameEngine;
///
/// let vocab = Vocabulary::new(["cat", "dog"]).unwrap();
/// let config = GameConfig::new(vocab).with_max_rounds(2).with_seed(1);
/// let mut engine = GameEngine::new(config).unwrap();
///
/// let answer = engine.source_word().to_string();
/// engine.update_draft(answer.to_uppercase());
/// let state = engine.submit_guess();
/// assert_eq!(state.score, 20);
/// assert_eq!(state.round, 2);
/// assert!(engine.draft().is_empty());
/// ```
#[derive(Debug)]
pub struct GameEngine {
    max_rounds: u32,
    score_increment: u32,
    supplier: WordSupplier,
    source_word: String,
    state: Arc<GameState>,
    draft: String,
    publisher: SnapshotPublisher,
}

impl GameEngine {
    /// Validate the configuration and start the first session.
    #[instrument(skip(config), fields(words = config.vocabulary.len(), rounds = config.max_rounds))]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let GameConfig {
            vocabulary,
            max_rounds,
            score_increment,
            seed,
        } = config;

        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut supplier = WordSupplier::new(vocabulary, rng);
        let Draw { source, scrambled } = supplier.next_word().ok_or(ConfigError::EmptyVocabulary)?;

        info!(seed = supplier.rng_state().seed, "session started");
        Ok(Self {
            max_rounds,
            score_increment,
            supplier,
            source_word: source,
            state: Arc::new(GameState::new(scrambled)),
            draft: String::new(),
            publisher: SnapshotPublisher::new(),
        })
    }

    // === Observation ===

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> Arc<GameState> {
        Arc::clone(&self.state)
    }

    /// In-progress guess text.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The unscrambled answer for the current round.
    #[must_use]
    pub fn source_word(&self) -> &str {
        &self.source_word
    }

    /// Source words served this session, oldest first.
    pub fn used_words(&self) -> impl Iterator<Item = &str> {
        self.supplier.used().iter()
    }

    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    #[must_use]
    pub fn score_increment(&self) -> u32 {
        self.score_increment
    }

    /// Seed of the session RNG, drawn from entropy if none was configured.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.supplier.rng_state().seed
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.supplier.rng_state()
    }

    /// Register an observer for every snapshot published from now on.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Arc<GameState>) + Send + 'static,
    {
        self.publisher.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.publisher.unsubscribe(id)
    }

    // === Intents ===

    /// Route an intent to its operation and return the resulting snapshot.
    pub fn dispatch(&mut self, intent: Intent) -> Arc<GameState> {
        match intent {
            Intent::UpdateDraft(text) => {
                self.update_draft(text);
                self.state()
            }
            Intent::SubmitGuess => self.submit_guess(),
            Intent::Skip => self.skip(),
            Intent::Reset => self.reset(),
        }
    }

    /// Store the in-progress guess. Game state is untouched.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Check the stored draft against the current word.
    ///
    /// A match awards `score_increment` and resolves the round; a miss sets
    /// `is_guess_wrong`. The draft is cleared either way.
    #[instrument(skip(self), fields(round = self.state.round))]
    pub fn submit_guess(&mut self) -> Arc<GameState> {
        if !self.state.accepts_guesses() {
            debug!("guess ignored after game over");
            self.draft.clear();
            return self.state();
        }

        let guess = std::mem::take(&mut self.draft);
        if is_correct_guess(&guess, &self.source_word) {
            let score = self.state.score.saturating_add(self.score_increment);
            debug!(score, "correct guess");
            self.advance_round(score)
        } else {
            debug!(guess = guess.as_str(), "wrong guess");
            let next = self.state.with_wrong_guess();
            self.publish(next)
        }
    }

    /// Resolve the round without scoring. The draft is cleared.
    #[instrument(skip(self), fields(round = self.state.round))]
    pub fn skip(&mut self) -> Arc<GameState> {
        if !self.state.accepts_guesses() {
            debug!("skip ignored after game over");
            self.draft.clear();
            return self.state();
        }

        self.draft.clear();
        let score = self.state.score;
        self.advance_round(score)
    }

    /// Start a new session with an empty history and a fresh word.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Arc<GameState> {
        self.supplier.clear();
        self.draft.clear();

        match self.supplier.next_word() {
            Some(Draw { source, scrambled }) => {
                self.source_word = source;
                info!("session reset");
                self.publish(GameState::new(scrambled))
            }
            None => {
                // Unreachable for a validated vocabulary.
                warn!("no words available after reset");
                self.state()
            }
        }
    }

    fn advance_round(&mut self, score: u32) -> Arc<GameState> {
        if self.state.round >= self.max_rounds {
            info!(score, "game over");
            let next = self.state.finished(score);
            return self.publish(next);
        }

        match self.supplier.next_word() {
            Some(Draw { source, scrambled }) => {
                self.source_word = source;
                let next = self.state.next_round(scrambled, score);
                debug!(round = next.round, "next round");
                self.publish(next)
            }
            None => {
                // max_rounds <= vocabulary size keeps this unreachable.
                warn!(round = self.state.round, "vocabulary exhausted early");
                let next = self.state.finished(score);
                self.publish(next)
            }
        }
    }

    fn publish(&mut self, next: GameState) -> Arc<GameState> {
        self.state = Arc::new(next);
        self.publisher.publish(&self.state);
        self.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GamePhase, Vocabulary};

    fn engine(words: &[&str], rounds: u32, seed: u64) -> GameEngine {
        let vocab = Vocabulary::new(words.iter().copied()).unwrap();
        let config = GameConfig::new(vocab).with_max_rounds(rounds).with_seed(seed);
        GameEngine::new(config).unwrap()
    }

    fn answer(engine: &mut GameEngine) -> Arc<GameState> {
        let word = engine.source_word().to_string();
        engine.update_draft(word);
        engine.submit_guess()
    }

    #[test]
    fn test_is_correct_guess() {
        assert!(is_correct_guess("cat", "cat"));
        assert!(is_correct_guess("cAt", "CAT"));
        assert!(is_correct_guess("  cat\n", "cat"));
        assert!(!is_correct_guess("ca t", "cat"));
        assert!(!is_correct_guess("ca", "cat"));
        assert!(!is_correct_guess("", "cat"));
    }

    #[test]
    fn test_initial_state() {
        let engine = engine(&["cat", "dog"], 2, 1);
        let state = engine.state();

        assert_eq!(state.round, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_ne!(state.scrambled_word, engine.source_word());
        assert_eq!(engine.used_words().count(), 1);
        assert!(engine.draft().is_empty());
    }

    #[test]
    fn test_rejects_bad_config() {
        let vocab = Vocabulary::new(["cat", "dog"]).unwrap();
        let config = GameConfig::new(vocab).with_max_rounds(3);
        assert!(matches!(
            GameEngine::new(config),
            Err(ConfigError::RoundsExceedVocabulary { .. })
        ));
    }

    #[test]
    fn test_wrong_guess_keeps_round() {
        let mut engine = engine(&["cat", "dog"], 2, 2);
        let before = engine.state();

        engine.update_draft("xyz");
        let state = engine.submit_guess();

        assert!(state.is_guess_wrong);
        assert_eq!(state.phase(), GamePhase::RoundResolvedWrong);
        assert_eq!(state.score, 0);
        assert_eq!(state.round, 1);
        assert_eq!(state.scrambled_word, before.scrambled_word);
        assert!(engine.draft().is_empty());
    }

    #[test]
    fn test_empty_guess_is_wrong() {
        let mut engine = engine(&["cat", "dog"], 2, 2);
        let state = engine.submit_guess();
        assert!(state.is_guess_wrong);
    }

    #[test]
    fn test_correct_guess_clears_wrong_flag() {
        let mut engine = engine(&["cat", "dog"], 2, 3);
        engine.update_draft("nope");
        engine.submit_guess();

        let state = answer(&mut engine);
        assert!(!state.is_guess_wrong);
        assert_eq!(state.score, 20);
        assert_eq!(state.round, 2);
    }

    #[test]
    fn test_skip_advances_without_score() {
        let mut engine = engine(&["cat", "dog", "bird"], 3, 4);
        engine.update_draft("partial");

        let state = engine.skip();
        assert_eq!(state.score, 0);
        assert_eq!(state.round, 2);
        assert!(!state.is_guess_wrong);
        assert!(engine.draft().is_empty());
        assert_eq!(engine.used_words().count(), 2);
    }

    #[test]
    fn test_final_round_keeps_word() {
        let mut engine = engine(&["cat", "dog"], 2, 5);
        engine.skip();
        let before = engine.state();
        let used_before: Vec<String> = engine.used_words().map(str::to_owned).collect();

        let state = answer(&mut engine);
        assert!(state.is_game_over);
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(state.round, 2);
        assert_eq!(state.score, 20);
        assert_eq!(state.scrambled_word, before.scrambled_word);

        let used_after: Vec<String> = engine.used_words().map(str::to_owned).collect();
        assert_eq!(used_before, used_after);
    }

    #[test]
    fn test_intents_ignored_after_game_over() {
        let mut engine = engine(&["cat", "dog"], 1, 6);
        let over = engine.skip();
        assert!(over.is_game_over);

        let word = engine.source_word().to_string();
        engine.update_draft(word);
        let after_guess = engine.submit_guess();
        assert!(engine.draft().is_empty());

        engine.update_draft("leftover");
        let after_skip = engine.skip();
        assert!(engine.draft().is_empty());

        assert_eq!(*after_guess, *over);
        assert_eq!(*after_skip, *over);
        assert!(Arc::ptr_eq(&after_skip, &engine.state()));
    }

    #[test]
    fn test_reset() {
        let mut engine = engine(&["cat", "dog", "bird"], 2, 7);
        answer(&mut engine);
        answer(&mut engine);
        assert!(engine.state().is_game_over);

        engine.update_draft("leftover");
        let state = engine.reset();
        assert_eq!(*state, GameState::new(state.scrambled_word.clone()));
        assert_eq!(engine.used_words().count(), 1);
        assert!(engine.draft().is_empty());
        assert_ne!(state.scrambled_word, engine.source_word());
    }

    #[test]
    fn test_update_draft_does_not_publish() {
        let mut engine = engine(&["cat", "dog"], 2, 8);
        let published = Arc::new(std::sync::Mutex::new(0));
        let counter = Arc::clone(&published);
        engine.subscribe(move |_| *counter.lock().unwrap() += 1);

        let before = engine.state();
        engine.update_draft("c");
        assert_eq!(engine.draft(), "c");
        assert!(Arc::ptr_eq(&before, &engine.state()));
        assert_eq!(*published.lock().unwrap(), 0);

        engine.submit_guess();
        engine.skip();
        engine.reset();
        assert_eq!(*published.lock().unwrap(), 3);
    }

    #[test]
    fn test_dispatch() {
        let mut engine = engine(&["cat", "dog"], 2, 9);
        let word = engine.source_word().to_string();

        engine.dispatch(Intent::UpdateDraft(word));
        let state = engine.dispatch(Intent::SubmitGuess);
        assert_eq!(state.score, 20);

        let state = engine.dispatch(Intent::Skip);
        assert!(state.is_game_over);

        let state = engine.dispatch(Intent::Reset);
        assert_eq!(state.round, 1);
        assert_eq!(state.score, 0);
    }
}
