//! Read-only copies of game state for rendering.
//!
//! Snapshots are owned values: mutating one never touches the session, and a
//! later `choose` never changes a snapshot already taken.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::rules::MemoryGame;

/// What a renderer needs to draw one card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView<C> {
    pub id: CardId,
    pub content: C,
    pub is_face_up: bool,
    pub is_matched: bool,
    /// Remaining bonus as a fraction of the limit at snapshot time, in `[0, 1]`.
    pub bonus_fraction: f64,
    /// Bonus is draining right now; a renderer should keep polling.
    pub is_consuming_bonus_time: bool,
}

impl<C: Clone> CardView<C> {
    /// View of `card` evaluated at `now` against `game`'s bonus limit.
    #[must_use]
    pub fn capture(game: &MemoryGame<C>, card: &Card<C>, now: Instant) -> Self {
        Self {
            id: card.id(),
            content: card.content().clone(),
            is_face_up: card.is_face_up(),
            is_matched: card.is_matched(),
            bonus_fraction: game.bonus_fraction(card, now),
            is_consuming_bonus_time: game.is_consuming_bonus_time(card, now),
        }
    }
}

/// Point-in-time copy of a whole game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot<C> {
    /// Starts at 1 and increases on every reset.
    pub game_number: u32,
    /// Cards in deck order.
    pub cards: Vec<CardView<C>>,
    pub matched_pairs: usize,
    pub is_complete: bool,
}

impl<C: Clone> GameSnapshot<C> {
    /// Capture every card of `game` at `now`.
    #[must_use]
    pub fn capture(game: &MemoryGame<C>, game_number: u32, now: Instant) -> Self {
        Self {
            game_number,
            cards: game
                .cards()
                .iter()
                .map(|card| CardView::capture(game, card, now))
                .collect(),
            matched_pairs: game.matched_pair_count(),
            is_complete: game.is_complete(),
        }
    }

    /// Look up a card view by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardView<C>> {
        self.cards.iter().find(|view| view.id == id)
    }

    /// Any card still draining bonus time.
    #[must_use]
    pub fn needs_ticking(&self) -> bool {
        self.cards.iter().any(|view| view.is_consuming_bonus_time)
    }
}
