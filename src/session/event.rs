//! Change notifications published by a session.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::rules::ChoiceOutcome;

/// Something happened to the session's game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// `choose` was called. Published even when the choice was ignored.
    CardChosen { card: CardId, outcome: ChoiceOutcome },
    /// The engine was replaced with a freshly shuffled one.
    GameReset { game_number: u32 },
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}
