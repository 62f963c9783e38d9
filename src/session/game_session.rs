//! Session wrapper: owns one engine, a clock and the observer list.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{CardId, ChoiceOutcome, GameConfig, GameSession, ManualClock};
//!
//! let clock = ManualClock::new();
//! let config = GameConfig::new(2).with_seed(42);
//! let mut session =
//!     GameSession::with_clock(config, |pair| ["A", "B"][pair], clock.clone()).unwrap();
//!
//! assert_eq!(session.choose(CardId(0)), ChoiceOutcome::Revealed);
//! clock.advance(Duration::from_secs(1));
//! assert!(session.choose(CardId(1)).is_match());
//!
//! session.reset_game();
//! assert!(session.cards().iter().all(|card| !card.is_face_up));
//! ```

use tracing::{debug, info, warn};

use super::event::{GameEvent, SubscriptionId};
use super::snapshot::{CardView, GameSnapshot};
use crate::cards::CardId;
use crate::core::{Clock, GameConfig, GameRng, SystemClock};
use crate::error::Result;
use crate::rules::{ChoiceOutcome, MemoryGame};

type ContentFactory<C> = Box<dyn Fn(usize) -> C>;
type Observer<C> = Box<dyn FnMut(&GameEvent, &GameSnapshot<C>)>;

/// Owns the current game and is the only thing allowed to replace it.
///
/// Not thread-safe; a session has a single logical owner.
pub struct GameSession<C, K: Clock = SystemClock> {
    config: GameConfig,
    content: ContentFactory<C>,
    rng: GameRng,
    clock: K,
    game: MemoryGame<C>,
    game_number: u32,
    observers: Vec<(SubscriptionId, Observer<C>)>,
    next_subscription: u64,
}

impl<C: Clone + PartialEq> GameSession<C, SystemClock> {
    /// Create a session timed by the system clock.
    ///
    /// ## Errors
    ///
    /// `GameError::InvalidConfiguration` if `config` cannot build a game.
    pub fn new<F>(config: GameConfig, content: F) -> Result<Self>
    where
        F: Fn(usize) -> C + 'static,
    {
        Self::with_clock(config, content, SystemClock)
    }
}

impl<C: Clone + PartialEq, K: Clock> GameSession<C, K> {
    /// Create a session timed by `clock`.
    ///
    /// ## Errors
    ///
    /// `GameError::InvalidConfiguration` if `config` cannot build a game.
    pub fn with_clock<F>(config: GameConfig, content: F, clock: K) -> Result<Self>
    where
        F: Fn(usize) -> C + 'static,
    {
        let content: ContentFactory<C> = Box::new(content);
        let mut rng = GameRng::from_seed_or_entropy(config.seed);
        let game = MemoryGame::new(&config, &content, &mut rng)?;

        debug!(seed = rng.seed(), "session started");

        Ok(Self {
            config,
            content,
            rng,
            clock,
            game,
            game_number: 1,
            observers: Vec::new(),
            next_subscription: 0,
        })
    }

    // === Intents ===

    /// Choose a card now, then notify observers.
    pub fn choose(&mut self, card_id: CardId) -> ChoiceOutcome {
        let now = self.clock.now();
        let outcome = self.game.choose(card_id, now);
        self.publish(GameEvent::CardChosen {
            card: card_id,
            outcome,
        });
        outcome
    }

    /// Replace the engine with a freshly shuffled one from the same
    /// configuration, then notify observers.
    ///
    /// Ids restart, the shuffle is redrawn from the session's RNG stream and
    /// all bonus timers start from zero.
    pub fn reset_game(&mut self) {
        match MemoryGame::new(&self.config, &self.content, &mut self.rng) {
            Ok(game) => self.game = game,
            Err(err) => {
                // Unreachable with a config that already built a game.
                warn!(%err, "reset failed, keeping current game");
                return;
            }
        }
        self.game_number += 1;

        info!(game_number = self.game_number, "game reset");
        self.publish(GameEvent::GameReset {
            game_number: self.game_number,
        });
    }

    // === Observation ===

    /// Card views in deck order, evaluated at the current instant.
    #[must_use]
    pub fn cards(&self) -> Vec<CardView<C>> {
        self.snapshot().cards
    }

    /// Full snapshot at the current instant.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<C> {
        GameSnapshot::capture(&self.game, self.game_number, self.clock.now())
    }

    /// Register an observer, called synchronously after every intent.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&GameEvent, &GameSnapshot<C>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn publish(&mut self, event: GameEvent) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, observer) in &mut self.observers {
            observer(&event, &snapshot);
        }
    }

    // === Accessors ===

    /// The current engine.
    #[must_use]
    pub fn game(&self) -> &MemoryGame<C> {
        &self.game
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// 1 for the first game, incremented on every reset.
    #[must_use]
    pub fn game_number(&self) -> u32 {
        self.game_number
    }

    /// Seed of the shuffle stream; replays every deal of this session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn clock(&self) -> &K {
        &self.clock
    }
}

impl<C, K: Clock> std::fmt::Debug for GameSession<C, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("game_number", &self.game_number)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ManualClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn session(pairs: usize) -> GameSession<usize, ManualClock> {
        let config = GameConfig::new(pairs).with_seed(42);
        GameSession::with_clock(config, |pair| pair, ManualClock::new()).unwrap()
    }

    #[test]
    fn test_session_starts_at_game_one() {
        let session = session(3);
        assert_eq!(session.game_number(), 1);
        assert_eq!(session.cards().len(), 6);
        assert_eq!(session.seed(), 42);
    }

    #[test]
    fn test_invalid_config_fails() {
        let result = GameSession::new(GameConfig::new(0), |pair: usize| pair);
        assert!(result.is_err());
    }

    #[test]
    fn test_observers_see_post_change_state() {
        let mut session = session(2);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        session.subscribe(move |event, snapshot| {
            let face_up = snapshot.cards.iter().filter(|c| c.is_face_up).count();
            sink.borrow_mut().push((*event, face_up));
        });

        session.choose(CardId(0));
        session.reset_game();

        let seen = seen.borrow();
        assert_eq!(
            seen[0],
            (
                GameEvent::CardChosen {
                    card: CardId(0),
                    outcome: ChoiceOutcome::Revealed
                },
                1
            )
        );
        assert_eq!(seen[1], (GameEvent::GameReset { game_number: 2 }, 0));
    }

    #[test]
    fn test_unsubscribe() {
        let mut session = session(2);
        let count = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&count);

        let id = session.subscribe(move |_, _| *sink.borrow_mut() += 1);
        session.choose(CardId(0));
        assert!(session.unsubscribe(id));
        assert!(!session.unsubscribe(id));
        session.choose(CardId(2));

        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn test_reset_replaces_engine() {
        let mut session = session(4);
        session.choose(CardId(0));
        session.choose(CardId(1));
        assert_eq!(session.game().matched_pair_count(), 1);

        session.reset_game();
        assert_eq!(session.game_number(), 2);
        assert_eq!(session.game().matched_pair_count(), 0);
        assert!(session
            .cards()
            .iter()
            .all(|c| !c.is_face_up && !c.is_matched));
    }
}
