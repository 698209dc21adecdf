//! Thread-safe handle for multi-threaded hosts.
//!
//! The engine has no internal synchronization. `SharedEngine` puts all of
//! it behind one mutex so intents from any thread are applied one at a
//! time, in lock order.
//!
//! Observers registered here are notified after the engine lock is
//! released, so a callback may read from or dispatch to the same
//! `SharedEngine`. Snapshots are queued while the engine lock is held and
//! delivered in that order; a snapshot produced from inside a callback is
//! delivered once the current callback round finishes.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError};

use crate::core::{ConfigError, GameConfig, GameState};

use super::game::GameEngine;
use super::intent::Intent;
use super::publisher::{SnapshotPublisher, SubscriptionId};

// A panicking observer must not wedge the game, so poisoning is ignored.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Observers plus the snapshots still waiting to reach them.
#[derive(Debug, Default)]
struct Observers {
    publisher: Mutex<SnapshotPublisher>,
    pending: Mutex<VecDeque<Arc<GameState>>>,
}

impl Observers {
    fn enqueue(&self, snapshot: Arc<GameState>) {
        lock(&self.pending).push_back(snapshot);
    }

    fn pop(&self) -> Option<Arc<GameState>> {
        lock(&self.pending).pop_front()
    }

    /// Drain the queue unless another caller is already draining it.
    fn deliver(&self) {
        loop {
            let mut publisher = match self.publisher.try_lock() {
                Ok(guard) => guard,
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
                // The current holder drains whatever we queued.
                Err(TryLockError::WouldBlock) => return,
            };
            while let Some(snapshot) = self.pop() {
                publisher.publish(&snapshot);
            }
            drop(publisher);

            // Something queued between the last pop and the unlock.
            if lock(&self.pending).is_empty() {
                return;
            }
        }
    }
}

/// Cloneable, `Send + Sync` handle to one engine.
#[derive(Clone, Debug)]
pub struct SharedEngine {
    inner: Arc<Mutex<GameEngine>>,
    observers: Arc<Observers>,
}

impl SharedEngine {
    /// Build an engine and wrap it.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(GameEngine::new(config)?))
    }

    #[must_use]
    pub fn from_engine(engine: GameEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
            observers: Arc::new(Observers::default()),
        }
    }

    /// Run a closure with exclusive access to the engine.
    ///
    /// Snapshots produced inside the closure reach observers registered on
    /// this handle once the closure returns. Observers registered directly
    /// on the inner engine run while the lock is held and must not call
    /// back into this handle.
    pub fn with<R>(&self, f: impl FnOnce(&mut GameEngine) -> R) -> R {
        self.apply(f)
    }

    /// Apply `f` under the engine lock, queue a new snapshot if one was
    /// published, then notify outside the lock.
    fn apply<R>(&self, f: impl FnOnce(&mut GameEngine) -> R) -> R {
        let result = {
            let mut engine = lock(&self.inner);
            let before = engine.state();
            let result = f(&mut engine);
            let after = engine.state();
            if !Arc::ptr_eq(&before, &after) {
                self.observers.enqueue(after);
            }
            result
        };
        self.observers.deliver();
        result
    }

    pub fn dispatch(&self, intent: Intent) -> Arc<GameState> {
        self.apply(|engine| engine.dispatch(intent))
    }

    pub fn update_draft(&self, text: impl Into<String>) {
        lock(&self.inner).update_draft(text);
    }

    pub fn submit_guess(&self) -> Arc<GameState> {
        self.apply(GameEngine::submit_guess)
    }

    pub fn skip(&self) -> Arc<GameState> {
        self.apply(GameEngine::skip)
    }

    pub fn reset(&self) -> Arc<GameState> {
        self.apply(GameEngine::reset)
    }

    #[must_use]
    pub fn state(&self) -> Arc<GameState> {
        lock(&self.inner).state()
    }

    #[must_use]
    pub fn draft(&self) -> String {
        lock(&self.inner).draft().to_owned()
    }

    /// Register an observer for every snapshot published from now on.
    ///
    /// Callbacks run without the engine lock held and may read from or
    /// dispatch to this handle. They may not subscribe or unsubscribe from
    /// inside a callback.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Arc<GameState>) + Send + 'static,
    {
        lock(&self.observers.publisher).subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        lock(&self.observers.publisher).unsubscribe(id)
    }
}
