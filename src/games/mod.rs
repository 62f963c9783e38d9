//! Ready-made themes built on `GameSession`.

pub mod emoji;

pub use emoji::{EmojiGameBuilder, EmojiMemoryGame};
