//! Matching rules.
//!
//! `MemoryGame` is the pure state machine: it owns the deck, applies choices
//! and answers bonus queries. It knows nothing about clocks, observers or
//! rendering.

pub mod engine;
pub mod outcome;

pub use engine::MemoryGame;
pub use outcome::ChoiceOutcome;
