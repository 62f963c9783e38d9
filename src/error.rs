//! Error types for memory-match.
//!
//! Only construction can fail. Every runtime operation on a built game is total:
//! stale or ineligible choices are reported as `ChoiceOutcome::Ignored`, never
//! as errors.

use thiserror::Error;

/// Result type alias using GameError.
pub type Result<T> = std::result::Result<T, GameError>;

/// Errors that can occur while configuring a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("requested {requested} pairs but only {available} distinct symbols are available")]
    ContentExhausted { requested: usize, available: usize },
}

impl GameError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GameError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
