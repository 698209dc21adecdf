//! Snapshot fan-out to observers.
//!
//! Observers register a callback and receive every snapshot the engine
//! publishes, in order. The registry stores callbacks by `SubscriptionId`
//! so they can be removed later.

use std::fmt;
use std::sync::Arc;

use crate::core::GameState;

/// Handle returned by `subscribe`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

type Callback = Box<dyn FnMut(&Arc<GameState>) + Send>;

/// Registry of snapshot observers.
#[derive(Default)]
pub struct SnapshotPublisher {
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

impl SnapshotPublisher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Arc<GameState>) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove an observer. Returns false if the ID was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    /// Deliver a snapshot to every observer in registration order.
    pub fn publish(&mut self, snapshot: &Arc<GameState>) {
        for (_, callback) in &mut self.subscribers {
            callback(snapshot);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl fmt::Debug for SnapshotPublisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotPublisher")
            .field("subscribers", &self.subscribers.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
