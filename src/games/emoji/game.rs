//! Emoji-themed session builder.

use std::time::Duration;

use crate::core::{Clock, GameConfig, SystemClock, DEFAULT_BONUS_TIME_LIMIT};
use crate::error::{GameError, Result};
use crate::session::GameSession;

/// Symbols dealt in order: pair `i` shows `EMOJIS[i]`.
pub const EMOJIS: [&str; 12] = [
    "👻", "🎃", "🕷", "🦇", "🍬", "🧙", "💀", "🕸", "🌕", "🐈", "🧛", "🔮",
];

/// A session whose cards show emoji.
pub type EmojiMemoryGame<K = SystemClock> = GameSession<&'static str, K>;

/// Builder for an emoji session.
#[derive(Clone, Debug)]
pub struct EmojiGameBuilder {
    pair_count: usize,
    bonus_time_limit: Duration,
    seed: Option<u64>,
}

impl Default for EmojiGameBuilder {
    fn default() -> Self {
        Self {
            pair_count: 2,
            bonus_time_limit: DEFAULT_BONUS_TIME_LIMIT,
            seed: None,
        }
    }
}

impl EmojiGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair_count(mut self, count: usize) -> Self {
        self.pair_count = count;
        self
    }

    pub fn bonus_time_limit(mut self, limit: Duration) -> Self {
        self.bonus_time_limit = limit;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The configuration this builder will hand to the session.
    pub fn config(&self) -> GameConfig {
        GameConfig {
            pair_count: self.pair_count,
            bonus_time_limit: self.bonus_time_limit,
            seed: self.seed,
        }
    }

    /// Build a session timed by the system clock.
    pub fn build(self) -> Result<EmojiMemoryGame> {
        self.build_with_clock(SystemClock)
    }

    /// Build a session timed by `clock`.
    ///
    /// ## Errors
    ///
    /// `GameError::ContentExhausted` if more pairs are requested than there are
    /// emoji, `GameError::InvalidConfiguration` for a zero pair count.
    pub fn build_with_clock<K: Clock>(self, clock: K) -> Result<EmojiMemoryGame<K>> {
        if self.pair_count > EMOJIS.len() {
            return Err(GameError::ContentExhausted {
                requested: self.pair_count,
                available: EMOJIS.len(),
            });
        }
        GameSession::with_clock(self.config(), |pair| EMOJIS[pair], clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;

    #[test]
    fn test_default_is_two_pairs() {
        let game = EmojiGameBuilder::new().seed(1).build().unwrap();
        assert_eq!(game.cards().len(), 4);
        assert_eq!(game.config().bonus_time_limit, DEFAULT_BONUS_TIME_LIMIT);
    }

    #[test]
    fn test_cards_use_theme() {
        let game = EmojiGameBuilder::new()
            .pair_count(EMOJIS.len())
            .seed(3)
            .build_with_clock(ManualClock::new())
            .unwrap();

        for emoji in EMOJIS {
            let count = game.cards().iter().filter(|c| c.content == emoji).count();
            assert_eq!(count, 2, "{emoji} should appear exactly twice");
        }
    }

    #[test]
    fn test_too_many_pairs() {
        let err = EmojiGameBuilder::new()
            .pair_count(EMOJIS.len() + 1)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            GameError::ContentExhausted {
                requested: 13,
                available: 12
            }
        );
    }

    #[test]
    fn test_zero_pairs() {
        let err = EmojiGameBuilder::new().pair_count(0).build().unwrap_err();
        assert!(matches!(err, GameError::InvalidConfiguration { .. }));
    }
}
