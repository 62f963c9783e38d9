//! The matching state machine.
//!
//! `MemoryGame` owns a shuffled deck and applies the reveal rules:
//!
//! - With no anchor (zero or two+ unmatched face-up cards), a choice turns every
//!   other unmatched card face-down, then exposes the chosen card.
//! - With an anchor, the chosen card is revealed and compared. Equal content
//!   matches both; otherwise both stay face-up until the next choice.
//!
//! The engine never samples a clock. Every mutation and bonus query takes the
//! instant to evaluate at.

use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::outcome::ChoiceOutcome;
use crate::cards::{Card, CardId};
use crate::core::{GameConfig, GameRng};
use crate::error::Result;

/// One play-through of a memory game.
///
/// Deck size is fixed at `2 * pair_count` and card positions never change
/// after the construction shuffle.
#[derive(Clone, Debug)]
pub struct MemoryGame<C> {
    cards: Vec<Card<C>>,
    index: FxHashMap<CardId, usize>,
    pair_count: usize,
    bonus_time_limit: Duration,
}

impl<C: Clone + PartialEq> MemoryGame<C> {
    /// Build and shuffle a deck.
    ///
    /// `content` is called once per pair index in `0..pair_count`; both cards
    /// of pair `p` get ids `2p` and `2p + 1`.
    ///
    /// ## Errors
    ///
    /// `GameError::InvalidConfiguration` if the pair count is zero or too large.
    pub fn new<F>(config: &GameConfig, mut content: F, rng: &mut GameRng) -> Result<Self>
    where
        F: FnMut(usize) -> C,
    {
        config.validate()?;

        let mut cards = Vec::with_capacity(config.card_count());
        for pair in 0..config.pair_count {
            let value = content(pair);
            let first = (pair * 2) as u32;
            cards.push(Card::new(CardId(first), value.clone()));
            cards.push(Card::new(CardId(first + 1), value));
        }
        rng.shuffle(&mut cards);

        let index = cards
            .iter()
            .enumerate()
            .map(|(i, card)| (card.id(), i))
            .collect();

        debug!(
            pair_count = config.pair_count,
            bonus_time_limit_ms = config.bonus_time_limit.as_millis() as u64,
            "memory game created"
        );

        Ok(Self {
            cards,
            index,
            pair_count: config.pair_count,
            bonus_time_limit: config.bonus_time_limit,
        })
    }

    /// Choose a card at instant `now`.
    ///
    /// Unknown ids and cards that are already face-up or matched are ignored;
    /// stale taps are expected and never an error.
    pub fn choose(&mut self, card_id: CardId, now: Instant) -> ChoiceOutcome {
        let Some(chosen) = self.eligible_index(card_id) else {
            trace!(card = %card_id, "choice ignored");
            return ChoiceOutcome::Ignored;
        };

        let track_bonus = self.bonus_enabled();
        let outcome = match self.current_anchor() {
            Some(anchor) => {
                let anchor_id = self.cards[anchor].id();
                if self.cards[chosen].content() == self.cards[anchor].content() {
                    self.cards[chosen].flip_up(now, false);
                    self.cards[chosen].mark_matched(now);
                    self.cards[anchor].mark_matched(now);
                    ChoiceOutcome::Matched { anchor: anchor_id }
                } else {
                    self.cards[chosen].flip_up(now, track_bonus);
                    ChoiceOutcome::Mismatched { anchor: anchor_id }
                }
            }
            None => {
                for (i, card) in self.cards.iter_mut().enumerate() {
                    if i != chosen && card.is_exposed() {
                        trace!(card = %card.id(), "turned face-down");
                        card.flip_down(now);
                    }
                }
                self.cards[chosen].flip_up(now, track_bonus);
                ChoiceOutcome::Revealed
            }
        };

        debug!(card = %card_id, %outcome, "card chosen");
        outcome
    }
}

impl<C> MemoryGame<C> {
    /// Index of the single unmatched face-up card, if exactly one exists.
    ///
    /// Derived from the deck on every call; never stored.
    #[must_use]
    pub fn current_anchor(&self) -> Option<usize> {
        let exposed: SmallVec<[usize; 2]> = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_exposed())
            .map(|(i, _)| i)
            .take(2)
            .collect();

        match exposed.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Index of a card that may currently be chosen.
    fn eligible_index(&self, card_id: CardId) -> Option<usize> {
        let &i = self.index.get(&card_id)?;
        let card = &self.cards[i];
        (!card.is_face_up() && !card.is_matched()).then_some(i)
    }

    /// All cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card<C>] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, card_id: CardId) -> Option<&Card<C>> {
        self.index_of(card_id).map(|i| &self.cards[i])
    }

    /// Deck position of a card.
    #[must_use]
    pub fn index_of(&self, card_id: CardId) -> Option<usize> {
        self.index.get(&card_id).copied()
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    #[must_use]
    pub fn bonus_time_limit(&self) -> Duration {
        self.bonus_time_limit
    }

    #[must_use]
    pub fn bonus_enabled(&self) -> bool {
        !self.bonus_time_limit.is_zero()
    }

    /// Number of unmatched face-up cards.
    #[must_use]
    pub fn exposed_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_exposed()).count()
    }

    #[must_use]
    pub fn matched_pair_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count() / 2
    }

    /// Every pair has been matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    // === Bonus Scoring ===

    /// Total face-up time of `card` as of `now`.
    #[must_use]
    pub fn face_up_elapsed(&self, card: &Card<C>, now: Instant) -> Duration {
        card.face_up_elapsed(now)
    }

    /// Bonus time `card` has left as of `now`.
    #[must_use]
    pub fn bonus_remaining(&self, card: &Card<C>, now: Instant) -> Duration {
        card.bonus_remaining(self.bonus_time_limit, now)
    }

    /// Bonus time left as a fraction of this game's limit, in `[0, 1]`.
    #[must_use]
    pub fn bonus_fraction(&self, card: &Card<C>, now: Instant) -> f64 {
        card.bonus_fraction(self.bonus_time_limit, now)
    }

    /// `card` was matched while it still had bonus time left.
    #[must_use]
    pub fn has_earned_bonus(&self, card: &Card<C>) -> bool {
        card.has_earned_bonus(self.bonus_time_limit)
    }

    /// `card` is exposed and its bonus is still draining.
    #[must_use]
    pub fn is_consuming_bonus_time(&self, card: &Card<C>, now: Instant) -> bool {
        card.is_consuming_bonus_time(self.bonus_time_limit, now)
    }
}
