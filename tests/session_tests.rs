//! Session integration tests.
//!
//! These tests verify the session wrapper: clock sampling, snapshots,
//! observer notification and reset semantics.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use memory_match::games::emoji::EMOJIS;
use memory_match::{
    CardId, ChoiceOutcome, EmojiGameBuilder, GameConfig, GameEvent, GameSession, ManualClock,
};

const SEC: Duration = Duration::from_secs(1);

fn ab_session(seed: u64) -> (GameSession<&'static str, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let config = GameConfig::new(2).with_seed(seed);
    let session = GameSession::with_clock(config, |pair| ["A", "B"][pair], clock.clone()).unwrap();
    (session, clock)
}

fn content_multiset(session: &GameSession<&'static str, ManualClock>) -> Vec<&'static str> {
    let mut contents: Vec<_> = session.cards().iter().map(|c| c.content).collect();
    contents.sort();
    contents
}

/// Snapshots reflect the latest choice and the current clock.
#[test]
fn test_cards_reflect_latest_choice() {
    let (mut session, clock) = ab_session(1);

    session.choose(CardId(0));
    clock.advance(3 * SEC);

    let snapshot = session.snapshot();
    let view = snapshot.card(CardId(0)).unwrap();
    assert!(view.is_face_up);
    assert!(view.is_consuming_bonus_time);
    assert_eq!(view.bonus_fraction, 0.5);

    clock.advance(3 * SEC);
    let view = session.snapshot().card(CardId(0)).cloned().unwrap();
    assert_eq!(view.bonus_fraction, 0.0);
    assert!(!view.is_consuming_bonus_time);
}

/// Bonus earned depends on the clock the session samples.
#[test]
fn test_bonus_uses_session_clock() {
    let (mut session, clock) = ab_session(2);

    session.choose(CardId(0));
    clock.advance(5 * SEC);
    assert!(session.choose(CardId(1)).is_match());

    let game = session.game();
    assert!(game.has_earned_bonus(game.card(CardId(0)).unwrap()));

    session.choose(CardId(2));
    clock.advance(7 * SEC);
    assert!(session.choose(CardId(3)).is_match());

    let game = session.game();
    assert!(!game.has_earned_bonus(game.card(CardId(2)).unwrap()));
    assert!(game.is_complete());
    assert!(session.snapshot().is_complete);
}

/// Reset restores card count, content multiset and flags.
#[test]
fn test_reset_restores_configuration() {
    let (mut session, clock) = ab_session(3);
    let original = content_multiset(&session);

    session.choose(CardId(0));
    clock.advance(2 * SEC);
    session.choose(CardId(1));
    session.choose(CardId(2));

    session.reset_game();

    assert_eq!(session.cards().len(), 4);
    assert_eq!(content_multiset(&session), original);
    for view in session.cards() {
        assert!(!view.is_face_up);
        assert!(!view.is_matched);
        assert_eq!(view.bonus_fraction, 1.0);
    }
    for card in session.game().cards() {
        assert_eq!(card.face_up_accumulated(), Duration::ZERO);
        assert_eq!(card.face_up_since(), None);
    }
}

/// A stale id delivered after reset is either ignored or a fresh choice;
/// it never faults.
#[test]
fn test_stale_choice_after_reset() {
    let (mut session, _clock) = ab_session(4);
    session.choose(CardId(0));
    session.reset_game();

    assert_eq!(session.choose(CardId(99)), ChoiceOutcome::Ignored);
    assert_eq!(session.choose(CardId(0)), ChoiceOutcome::Revealed);
}

/// Seeded sessions deal the same sequence of decks.
#[test]
fn test_seeded_sessions_replay() {
    let deal = |session: &GameSession<&'static str, ManualClock>| -> Vec<CardId> {
        session.cards().iter().map(|c| c.id).collect()
    };

    let (mut a, _) = ab_session(77);
    let (mut b, _) = ab_session(77);
    assert_eq!(deal(&a), deal(&b));

    a.reset_game();
    b.reset_game();
    assert_eq!(deal(&a), deal(&b));
}

/// Observers get one event per intent, in order.
#[test]
fn test_observer_event_stream() {
    let (mut session, _clock) = ab_session(5);
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    session.subscribe(move |event, _| sink.borrow_mut().push(*event));

    session.choose(CardId(0));
    session.choose(CardId(0));
    session.choose(CardId(1));
    session.reset_game();

    assert_eq!(
        *events.borrow(),
        vec![
            GameEvent::CardChosen {
                card: CardId(0),
                outcome: ChoiceOutcome::Revealed
            },
            GameEvent::CardChosen {
                card: CardId(0),
                outcome: ChoiceOutcome::Ignored
            },
            GameEvent::CardChosen {
                card: CardId(1),
                outcome: ChoiceOutcome::Matched { anchor: CardId(0) }
            },
            GameEvent::GameReset { game_number: 2 },
        ]
    );
}

/// The emoji theme plays like any other session.
#[test]
fn test_emoji_session() {
    let clock = ManualClock::new();
    let mut game = EmojiGameBuilder::new()
        .pair_count(3)
        .seed(8)
        .build_with_clock(clock.clone())
        .unwrap();

    game.choose(CardId(4));
    clock.advance(SEC);
    assert!(game.choose(CardId(5)).is_match());

    let snapshot = game.snapshot();
    assert_eq!(snapshot.matched_pairs, 1);
    assert_eq!(snapshot.card(CardId(4)).unwrap().content, EMOJIS[2]);
}
