//! Multi-threaded host tests.
//!
//! Intents from several threads must be applied one at a time, so the
//! session invariants hold no matter how the threads interleave.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use unscramble::core::{GameConfig, Vocabulary};
use unscramble::engine::SharedEngine;

/// Concurrent skips resolve exactly `max_rounds` rounds.
#[test]
fn test_concurrent_skips() {
    let config = GameConfig::default().with_max_rounds(10).with_seed(42);
    let shared = SharedEngine::new(config).unwrap();

    let published = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&published);
    shared.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = shared.clone();
            thread::spawn(move || {
                for _ in 0..10 {
                    engine.skip();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let state = shared.state();
    assert!(state.is_game_over);
    assert_eq!(state.round, 10);
    assert_eq!(state.score, 0);

    // Nine advances plus the final game-over transition; the rest are ignored.
    assert_eq!(published.load(Ordering::SeqCst), 10);
    shared.with(|engine| assert_eq!(engine.used_words().count(), 10));
}

/// Concurrent correct guesses score each round exactly once.
#[test]
fn test_concurrent_correct_guesses() {
    let vocab = Vocabulary::new(["cat", "dog", "bird", "fish", "frog", "goat"]).unwrap();
    let config = GameConfig::new(vocab).with_max_rounds(6).with_seed(7);
    let shared = SharedEngine::new(config).unwrap();

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let engine = shared.clone();
            thread::spawn(move || {
                for _ in 0..20 {
                    // Read the answer and submit it under one lock.
                    engine.with(|e| {
                        let answer = e.source_word().to_string();
                        e.update_draft(answer);
                        e.submit_guess();
                    });
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let state = shared.state();
    assert!(state.is_game_over);
    assert_eq!(state.score, 6 * 20);
}
