//! Emoji memory game.
//!
//! The stock theme: each pair shows one emoji from a fixed Halloween set.
//! Defaults to two pairs and a six second bonus window.

mod game;

pub use game::{EmojiGameBuilder, EmojiMemoryGame, EMOJIS};
