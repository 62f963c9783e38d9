//! What a single choice did to the game.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Result of one `choose` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoiceOutcome {
    /// Unknown, face-up or matched card. Nothing changed.
    Ignored,
    /// No anchor existed. Prior exposures were turned face-down and the chosen
    /// card is now the sole anchor.
    Revealed,
    /// Chosen card matched the anchor; both are now matched.
    Matched { anchor: CardId },
    /// Chosen card differs from the anchor; both stay face-up until the next
    /// choice.
    Mismatched { anchor: CardId },
}

impl ChoiceOutcome {
    /// Did the choice change any card?
    #[must_use]
    pub fn changed_state(self) -> bool {
        !matches!(self, ChoiceOutcome::Ignored)
    }

    /// Did the choice complete a pair?
    #[must_use]
    pub fn is_match(self) -> bool {
        matches!(self, ChoiceOutcome::Matched { .. })
    }
}

impl std::fmt::Display for ChoiceOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChoiceOutcome::Ignored => write!(f, "ignored"),
            ChoiceOutcome::Revealed => write!(f, "revealed"),
            ChoiceOutcome::Matched { anchor } => write!(f, "matched {}", anchor),
            ChoiceOutcome::Mismatched { anchor } => write!(f, "mismatched {}", anchor),
        }
    }
}
