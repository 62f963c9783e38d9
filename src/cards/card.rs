//! Card identity and per-card state.
//!
//! A `Card` carries its content, face/matched flags and its bonus timer. Flags
//! are read-only outside the crate: only the engine flips cards.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::bonus::{self, BonusTimer};

/// Stable identifier for a card within one game.
///
/// Assigned sequentially at construction (`2 * pair`, `2 * pair + 1`) and never
/// reused within that game. A reset starts numbering over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One card in a memory game.
#[derive(Clone, Debug, PartialEq)]
pub struct Card<C> {
    id: CardId,
    content: C,
    face_up: bool,
    matched: bool,
    timer: BonusTimer,
}

impl<C> Card<C> {
    /// A face-down, unmatched card with no recorded face-up time.
    #[must_use]
    pub fn new(id: CardId, content: C) -> Self {
        Self {
            id,
            content,
            face_up: false,
            matched: false,
            timer: BonusTimer::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Once set, stays set for the rest of the game.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Face-up and still waiting for a partner.
    #[must_use]
    pub fn is_exposed(&self) -> bool {
        self.face_up && !self.matched
    }

    #[must_use]
    pub fn timer(&self) -> &BonusTimer {
        &self.timer
    }

    /// Start of the current face-up interval, present only while exposed.
    #[must_use]
    pub fn face_up_since(&self) -> Option<Instant> {
        self.timer.since()
    }

    /// Face-up time from closed intervals only.
    #[must_use]
    pub fn face_up_accumulated(&self) -> Duration {
        self.timer.accumulated()
    }

    /// Total face-up time as of `now`.
    #[must_use]
    pub fn face_up_elapsed(&self, now: Instant) -> Duration {
        self.timer.elapsed(now)
    }

    /// Bonus time left as of `now`.
    #[must_use]
    pub fn bonus_remaining(&self, limit: Duration, now: Instant) -> Duration {
        bonus::remaining(limit, self.face_up_elapsed(now))
    }

    /// Bonus time left as a fraction of `limit`, in `[0, 1]`.
    #[must_use]
    pub fn bonus_fraction(&self, limit: Duration, now: Instant) -> f64 {
        bonus::fraction(limit, self.face_up_elapsed(now))
    }

    /// Matched before its face-up time reached `limit`.
    ///
    /// Matching closes the timer for good, so the accumulated total is the
    /// face-up time at the moment of the match.
    #[must_use]
    pub fn has_earned_bonus(&self, limit: Duration) -> bool {
        self.matched && self.timer.accumulated() < limit
    }

    /// Exposed with its interval running and bonus still left.
    #[must_use]
    pub fn is_consuming_bonus_time(&self, limit: Duration, now: Instant) -> bool {
        self.is_exposed() && self.timer.is_running() && !self.bonus_remaining(limit, now).is_zero()
    }

    /// Turn face-up, opening a bonus interval when `track_bonus` is set.
    pub(crate) fn flip_up(&mut self, now: Instant, track_bonus: bool) {
        self.face_up = true;
        if track_bonus && !self.matched {
            self.timer.start(now);
        }
    }

    /// Turn face-down, closing any open interval.
    pub(crate) fn flip_down(&mut self, now: Instant) {
        self.face_up = false;
        self.timer.stop(now);
    }

    /// Mark matched and freeze bonus accounting.
    pub(crate) fn mark_matched(&mut self, now: Instant) {
        self.matched = true;
        self.timer.stop(now);
    }
}
