//! Session end-to-end tests.
//!
//! These tests drive a `SessionController` through whole turns the way a UI
//! shell would and check scores, standings and the final state.

use std::cell::RefCell;
use std::rc::Rc;

use party_engine::content::{Mode, PromptKind, PromptSpec, StaticContentProvider};
use party_engine::core::{EndCondition, PlayerId, SessionConfig};
use party_engine::session::{SessionController, SessionError, SessionEvent};
use party_engine::turn::{GameEventSink, RecordingSink, TransitionEvent, TurnState};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn content() -> StaticContentProvider {
    StaticContentProvider::from_specs([
        PromptSpec::new(Mode::Original, PromptKind::Truth, "What is the last lie you told?"),
        PromptSpec::new(Mode::Original, PromptKind::Truth, "Who here would you swap lives with?"),
        PromptSpec::new(Mode::Original, PromptKind::Dare, "Do your best impression of someone here"),
        PromptSpec::new(Mode::Original, PromptKind::Dare, "Speak in an accent until your next turn"),
        PromptSpec::new(Mode::Extreme, PromptKind::Dare, "Let the group post a status for you"),
    ])
}

fn alice_and_bob(rounds: u32) -> SessionConfig {
    SessionConfig::new(Mode::Original)
        .with_players(["Alice", "Bob"])
        .with_end_condition(EndCondition::RoundCount(rounds))
        .with_seed(2024)
}

fn other_player(session: &SessionController<StaticContentProvider>, victim: PlayerId) -> PlayerId {
    session
        .players()
        .iter()
        .map(|p| p.id())
        .find(|id| *id != victim)
        .unwrap()
}

/// Play one dare up to validation, checking each step lands where expected.
fn play_to_validation(session: &mut SessionController<StaticContentProvider>) {
    assert_eq!(session.dispatch(SessionEvent::ConfirmVictim), Ok(TurnState::ChooseType));
    assert_eq!(
        session.dispatch(SessionEvent::ChooseType(PromptKind::Dare)),
        Ok(TurnState::ShowTask)
    );
    assert_eq!(session.dispatch(SessionEvent::RevealTask), Ok(TurnState::ActionInProgress));

    let ticket = session.dwell_ticket().unwrap();
    assert!(session.is_ticket_live(&ticket));
    assert!(ticket.is_elapsed(ticket.ready_at()));

    assert_eq!(session.dispatch(SessionEvent::CompleteAction), Ok(TurnState::Validation));
}

/// Completed dare in a one-round game: victim scores, game exits.
#[test]
fn test_single_round_completion() {
    init_tracing();
    let mut session = SessionController::start(alice_and_bob(1), content()).unwrap();
    assert_eq!(session.state(), TurnState::SelectVictim);

    let victim = session.current_player().unwrap().id();
    let other = other_player(&session, victim);

    play_to_validation(&mut session);
    assert_eq!(session.dispatch(SessionEvent::Validate(true)), Ok(TurnState::Exit));

    assert_eq!(session.players().get(victim).unwrap().score(), 1);
    assert_eq!(session.players().get(other).unwrap().score(), 0);
    assert_eq!(session.state(), TurnState::Exit);

    let standings = session.standings();
    assert_eq!(standings[0].id(), victim);
    assert_eq!(session.winner().unwrap().id(), victim);
}

/// Failed dare: punishment, no score change, game still ends normally.
#[test]
fn test_single_round_punishment() {
    init_tracing();
    let mut session = SessionController::start(alice_and_bob(1), content()).unwrap();
    let victim = session.current_player().unwrap().id();

    play_to_validation(&mut session);
    assert_eq!(session.dispatch(SessionEvent::Validate(false)), Ok(TurnState::Punishment));
    assert_eq!(session.dispatch(SessionEvent::AcknowledgePunishment), Ok(TurnState::Exit));

    assert_eq!(session.players().get(victim).unwrap().score(), 0);
    assert!(session.score_entries().is_empty());
    assert_eq!(
        &session.history().iter().copied().collect::<Vec<_>>()[5..],
        &[TurnState::Validation, TurnState::Punishment, TurnState::NextTurn, TurnState::Exit]
    );
}

/// Punishment in a longer game routes on to the next victim.
#[test]
fn test_punishment_advances_to_next_round() {
    let mut session = SessionController::start(alice_and_bob(3), content()).unwrap();
    let victim = session.current_player().unwrap().id();

    play_to_validation(&mut session);
    session.dispatch(SessionEvent::Validate(false)).unwrap();
    assert_eq!(
        session.dispatch(SessionEvent::AcknowledgePunishment),
        Ok(TurnState::SelectVictim)
    );

    // Two players: the other one is always next.
    assert_ne!(session.current_player().unwrap().id(), victim);
    assert_eq!(session.players().get(victim).unwrap().score(), 0);
}

/// Round count counts completed turns, whichever path they took.
#[test]
fn test_round_count_ends_game() {
    let mut session = SessionController::start(alice_and_bob(3), content()).unwrap();

    for round in 1..=3 {
        play_to_validation(&mut session);
        let state = session.dispatch(SessionEvent::Validate(round % 2 == 1)).unwrap();
        let state = if state == TurnState::Punishment {
            session.dispatch(SessionEvent::AcknowledgePunishment).unwrap()
        } else {
            state
        };

        let expected = if round == 3 { TurnState::Exit } else { TurnState::SelectVictim };
        assert_eq!(state, expected, "after round {}", round);
    }

    assert_eq!(session.session().turns_completed(), 3);
    let total: i64 = session.players().iter().map(|p| p.score()).sum();
    assert_eq!(total, 2);
}

/// Manual games never end on their own.
#[test]
fn test_manual_game_runs_until_exit() {
    let config = SessionConfig::new(Mode::Original)
        .with_players(["Alice", "Bob", "Carol"])
        .with_seed(1);
    let mut session = SessionController::start(config, content()).unwrap();

    for _ in 0..20 {
        play_to_validation(&mut session);
        assert_eq!(session.dispatch(SessionEvent::Validate(true)), Ok(TurnState::SelectVictim));
    }

    assert_eq!(session.dispatch(SessionEvent::RequestExit), Ok(TurnState::Exit));
    let total: i64 = session.players().iter().map(|p| p.score()).sum();
    assert_eq!(total, 20);
}

/// Exit is available from every active state.
#[test]
fn test_exit_from_any_active_state() {
    let steps: [Option<SessionEvent>; 5] = [
        None,
        Some(SessionEvent::ConfirmVictim),
        Some(SessionEvent::ChooseType(PromptKind::Truth)),
        Some(SessionEvent::RevealTask),
        Some(SessionEvent::CompleteAction),
    ];

    for depth in 0..steps.len() {
        let mut session = SessionController::start(alice_and_bob(5), content()).unwrap();
        for step in steps[..=depth].iter().flatten() {
            session.dispatch(*step).unwrap();
        }

        assert_eq!(session.dispatch(SessionEvent::RequestExit), Ok(TurnState::Exit));

        // Nothing is legal after exit.
        let err = session.dispatch(SessionEvent::ConfirmVictim).unwrap_err();
        assert!(matches!(err, SessionError::Transition(t) if t.from == TurnState::Exit));
    }
}

/// Same seed, same game.
#[test]
fn test_seeded_sessions_are_reproducible() {
    let play = || {
        let config = SessionConfig::new(Mode::Original)
            .with_players(["Alice", "Bob", "Carol", "Dave"])
            .with_seed(99);
        let mut session = SessionController::start(config, content()).unwrap();
        let mut log = Vec::new();
        for _ in 0..8 {
            log.push(session.current_player().unwrap().name().to_string());
            play_to_validation(&mut session);
            log.push(session.session().current_prompt().unwrap().text.clone());
            session.dispatch(SessionEvent::Validate(true)).unwrap();
        }
        log
    };

    assert_eq!(play(), play());
}

/// Prompts do not repeat within a bucket until it is used up.
#[test]
fn test_prompts_do_not_repeat_until_exhausted() {
    let mut session = SessionController::start(alice_and_bob(10), content()).unwrap();
    let mut dares = Vec::new();

    for _ in 0..2 {
        play_to_validation(&mut session);
        dares.push(session.current_prompt().unwrap().id);
        session.dispatch(SessionEvent::Validate(true)).unwrap();
    }

    assert_ne!(dares[0], dares[1]);

    // Bucket has two dares; the third recycles instead of failing.
    play_to_validation(&mut session);
    assert!(dares.contains(&session.current_prompt().unwrap().id));
}

/// Modes without their own prompts borrow from the original bucket.
#[test]
fn test_mode_fallback() {
    let config = SessionConfig::new(Mode::Party)
        .with_players(["Alice", "Bob"])
        .with_seed(3);
    let mut session = SessionController::start(config, content()).unwrap();
    assert_eq!(session.session().mode().name, "Party");

    session.dispatch(SessionEvent::ConfirmVictim).unwrap();
    session.dispatch(SessionEvent::ChooseType(PromptKind::Truth)).unwrap();

    assert_eq!(session.session().current_prompt().unwrap().mode, Mode::Original);
}

/// Sinks see one event per transition, including the automatic routing.
#[test]
fn test_event_stream() {
    let recorder = Rc::new(RefCell::new(RecordingSink::new()));
    let mut session = SessionController::prepare(alice_and_bob(2), content()).unwrap();
    let shared = Rc::clone(&recorder);
    session.subscribe(move |event: &TransitionEvent| shared.borrow_mut().on_transition(event));

    assert_eq!(session.begin(), Ok(TurnState::SelectVictim));
    play_to_validation(&mut session);
    session.dispatch(SessionEvent::Validate(true)).unwrap();

    let events = recorder.borrow().events().to_vec();
    let pairs: Vec<_> = events.iter().map(|e| (e.from, e.to)).collect();
    assert_eq!(
        pairs,
        vec![
            (TurnState::Init, TurnState::SelectVictim),
            (TurnState::SelectVictim, TurnState::ChooseType),
            (TurnState::ChooseType, TurnState::ShowTask),
            (TurnState::ShowTask, TurnState::ActionInProgress),
            (TurnState::ActionInProgress, TurnState::Validation),
            (TurnState::Validation, TurnState::NextTurn),
            (TurnState::NextTurn, TurnState::SelectVictim),
        ]
    );

    // The new victim is reported on the routing transition.
    assert_ne!(events[5].player, events[6].player);
    assert!(events.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
}

/// A restart keeps identities but starts scoring and history from scratch.
#[test]
fn test_restart_after_exit() {
    let mut session = SessionController::start(alice_and_bob(1), content()).unwrap();
    play_to_validation(&mut session);
    session.dispatch(SessionEvent::Validate(true)).unwrap();
    assert!(session.is_finished());

    let names: Vec<_> = session.players().iter().map(|p| p.name().to_string()).collect();
    assert_eq!(session.restart(), Ok(TurnState::SelectVictim));

    assert_eq!(
        session.players().iter().map(|p| p.name().to_string()).collect::<Vec<_>>(),
        names
    );
    assert!(session.players().iter().all(|p| p.score() == 0));
    assert_eq!(session.history().len(), 2);
    assert!(session.session().excluded().is_empty());
}
