//! # memory-match
//!
//! Rules engine for a concentration-style memory matching card game.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: `MemoryGame` owns the deck and the matching rules. It
//!    never samples a clock or RNG on its own; time and randomness are passed in.
//!
//! 2. **Total at runtime**: Only construction can fail. Stale or ineligible
//!    choices are reported as `ChoiceOutcome::Ignored`.
//!
//! 3. **Observation at the edge**: `GameSession` wraps one engine, samples its
//!    clock, and pushes snapshots to observers. Rendering lives elsewhere.
//!
//! ## Rules
//!
//! - At most one unmatched card is the anchor. Choosing a card with an anchor
//!   present compares the two; equal content matches both.
//! - After a miss both cards stay face-up until the next choice, which first
//!   turns every unmatched face-up card down and then exposes the new card.
//! - Each card drains a bonus window while face-up and unmatched. Matching
//!   before the window runs out earns the bonus.
//!
//! ## Modules
//!
//! - `core`: Configuration, clocks, deterministic RNG
//! - `cards`: Card ids, flags, bonus timers
//! - `rules`: The `MemoryGame` state machine
//! - `session`: `GameSession`, snapshots, observer events
//! - `games`: Ready-made themes (emoji)

pub mod cards;
pub mod core;
pub mod error;
pub mod games;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Clock, GameConfig, GameRng, ManualClock, SystemClock, DEFAULT_BONUS_TIME_LIMIT,
    MAX_PAIR_COUNT,
};

pub use crate::cards::{BonusTimer, Card, CardId};

pub use crate::error::{GameError, Result};

pub use crate::rules::{ChoiceOutcome, MemoryGame};

pub use crate::session::{CardView, GameEvent, GameSession, GameSnapshot, SubscriptionId};

pub use crate::games::{EmojiGameBuilder, EmojiMemoryGame};
