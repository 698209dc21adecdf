//! Game engine: intents in, immutable snapshots out.
//!
//! - `GameEngine` owns the session and applies intents one at a time
//! - `SnapshotPublisher` fans snapshots out to observers
//! - `SharedEngine` serializes intents from several threads behind a mutex

mod game;
mod intent;
mod publisher;
mod shared;

pub use game::{is_correct_guess, GameEngine};
pub use intent::Intent;
pub use publisher::{SnapshotPublisher, SubscriptionId};
pub use shared::SharedEngine;
