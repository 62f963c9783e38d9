//! Core building blocks: configuration, time sources, deterministic RNG.
//!
//! Nothing in here knows about cards or matching rules.

pub mod clock;
pub mod config;
pub mod rng;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{GameConfig, DEFAULT_BONUS_TIME_LIMIT, MAX_PAIR_COUNT};
pub use rng::GameRng;
