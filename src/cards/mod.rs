//! Card system: identity, flags, and bonus time bookkeeping.
//!
//! ## Key Types
//!
//! - `CardId`: Stable per-game card identifier
//! - `Card`: Content plus face-up/matched flags and a bonus timer
//! - `BonusTimer`: Accumulated face-up time across intervals

pub mod bonus;
pub mod card;

pub use bonus::BonusTimer;
pub use card::{Card, CardId};
