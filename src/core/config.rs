//! Game configuration.
//!
//! A `GameConfig` is everything a session needs to rebuild an identical game
//! on reset, apart from the content factory (which is not data and lives on
//! the session).

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Default bonus window per card.
pub const DEFAULT_BONUS_TIME_LIMIT: Duration = Duration::from_secs(6);

/// Largest pair count whose card ids still fit in `u32`.
pub const MAX_PAIR_COUNT: usize = (u32::MAX / 2) as usize;

/// Configuration for one memory game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of matching pairs. The deck holds twice as many cards.
    pub pair_count: usize,

    /// Maximum bonus window per card. `Duration::ZERO` disables bonus.
    #[serde(default = "default_bonus_time_limit")]
    pub bonus_time_limit: Duration,

    /// Shuffle seed. `None` draws one from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_bonus_time_limit() -> Duration {
    DEFAULT_BONUS_TIME_LIMIT
}

impl GameConfig {
    /// Create a configuration with the default bonus window and no seed.
    pub fn new(pair_count: usize) -> Self {
        Self {
            pair_count,
            bonus_time_limit: DEFAULT_BONUS_TIME_LIMIT,
            seed: None,
        }
    }

    /// Set the bonus window.
    #[must_use]
    pub fn with_bonus_time_limit(mut self, limit: Duration) -> Self {
        self.bonus_time_limit = limit;
        self
    }

    /// Disable time bonus for this game.
    #[must_use]
    pub fn without_bonus(mut self) -> Self {
        self.bonus_time_limit = Duration::ZERO;
        self
    }

    /// Fix the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count.saturating_mul(2)
    }

    /// Whether bonus accounting is active.
    #[must_use]
    pub fn bonus_enabled(&self) -> bool {
        !self.bonus_time_limit.is_zero()
    }

    /// Check the configuration can build a game.
    pub fn validate(&self) -> Result<()> {
        if self.pair_count == 0 {
            return Err(GameError::invalid("pair count must be at least 1"));
        }
        if self.pair_count > MAX_PAIR_COUNT {
            return Err(GameError::invalid(format!(
                "pair count {} exceeds maximum {}",
                self.pair_count, MAX_PAIR_COUNT
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(2)
    }
}
