//! Observable wrapper around the engine.
//!
//! `GameSession` forwards intents (`choose`, `reset_game`) to its `MemoryGame`,
//! samples its clock, and pushes `GameEvent`s plus a fresh `GameSnapshot` to
//! subscribed observers.

pub mod event;
pub mod game_session;
pub mod snapshot;

pub use event::{GameEvent, SubscriptionId};
pub use game_session::GameSession;
pub use snapshot::{CardView, GameSnapshot};
