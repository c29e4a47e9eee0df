//! Session controller.
//!
//! The controller composes the roster, content, turn machine and score
//! ledger for one running game. Every UI input goes through
//! [`SessionController::dispatch`], which checks the requested transition
//! before touching any state.

use std::fmt;
use std::time::Instant;

use im::Vector;
use tracing::{info, instrument, warn};

use crate::content::{BucketKey, ContentSource, Prompt, PromptKind};
use crate::core::{EndCondition, GameRng, Player, PlayerId, SessionConfig};
use crate::players::{PlayerRegistry, RosterError};
use crate::scoring::{ScoreEntry, ScoreLedger, ScoreReason};
use crate::turn::{GameEventSink, TransitionEvent, TurnState, TurnStateMachine};

use super::dwell::{DwellGate, DwellTicket};
use super::error::SessionError;
use super::event::SessionEvent;
use super::game::GameSession;

/// Owns and drives one game session.
///
/// ## Example
///
/// ```
/// use party_engine::content::{Mode, PromptKind, StaticContentProvider};
/// use party_engine::core::{EndCondition, SessionConfig};
/// use party_engine::session::{SessionController, SessionEvent};
/// use party_engine::turn::TurnState;
///
/// let content = StaticContentProvider::new()
///     .with_prompt(Mode::Original, PromptKind::Dare, "Sing the chorus of your favorite song");
/// let config = SessionConfig::new(Mode::Original)
///     .with_players(["Alice", "Bob"])
///     .with_end_condition(EndCondition::RoundCount(1))
///     .with_seed(7);
///
/// let mut session = SessionController::start(config, content).unwrap();
/// assert_eq!(session.state(), TurnState::SelectVictim);
///
/// session.dispatch(SessionEvent::ConfirmVictim).unwrap();
/// session.dispatch(SessionEvent::ChooseType(PromptKind::Dare)).unwrap();
/// session.dispatch(SessionEvent::RevealTask).unwrap();
/// session.dispatch(SessionEvent::CompleteAction).unwrap();
/// let state = session.dispatch(SessionEvent::Validate(true)).unwrap();
///
/// assert_eq!(state, TurnState::Exit);
/// assert_eq!(session.winner().unwrap().score(), 1);
/// ```
pub struct SessionController<C: ContentSource> {
    session: GameSession,
    machine: TurnStateMachine,
    ledger: ScoreLedger,
    content: C,
    end_condition: EndCondition,
    seed: u64,
    victim_rng: GameRng,
    prompt_rng: GameRng,
    dwell: DwellGate,
    sinks: Vec<Box<dyn GameEventSink>>,
}

impl<C: ContentSource> SessionController<C> {
    /// Validate `config`, seed the session, and drive it to SELECT_VICTIM.
    pub fn start(config: SessionConfig, content: C) -> Result<Self, SessionError> {
        let mut controller = Self::prepare(config, content)?;
        controller.begin()?;
        Ok(controller)
    }

    /// Validate `config` and build a session parked at INIT.
    ///
    /// Use this instead of [`start`](Self::start) to subscribe sinks before
    /// the first transition, then call [`begin`](Self::begin).
    #[instrument(skip(config, content), fields(mode = %config.mode.id, players = config.players.len()))]
    pub fn prepare(config: SessionConfig, content: C) -> Result<Self, SessionError> {
        let limits = config.mode.roster_limits();
        if let Some(max) = limits.max_players {
            if limits.min_players > max {
                return Err(SessionError::InvalidModeLimits {
                    min: limits.min_players,
                    max,
                });
            }
        }

        if config.end_condition == EndCondition::RoundCount(0) {
            return Err(SessionError::InvalidEndCondition);
        }

        let count = config.players.len();
        if count < limits.min_players {
            return Err(RosterError::BelowMinimum {
                min: limits.min_players,
            }
            .into());
        }
        if let Some(max) = limits.max_players {
            if count > max {
                return Err(RosterError::AtCapacity { max }.into());
            }
        }

        let mut players = PlayerRegistry::new(limits);
        for spec in &config.players {
            players.add(&spec.name)?;
        }

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        info!(seed = rng.seed(), "session prepared");

        Ok(Self {
            session: GameSession::new(players, config.mode.id.info()),
            machine: TurnStateMachine::new(),
            ledger: ScoreLedger::new(config.scoring),
            content,
            end_condition: config.end_condition,
            seed: rng.seed(),
            victim_rng: rng.for_context("victims"),
            prompt_rng: rng.for_context("prompts"),
            dwell: DwellGate::new(config.min_dwell()),
            sinks: Vec::new(),
        })
    }

    /// Drive INIT to SELECT_VICTIM, picking the first victim.
    pub fn begin(&mut self) -> Result<TurnState, SessionError> {
        self.enter_select_victim()?;
        Ok(self.machine.current())
    }

    /// Register a subscriber for transition events.
    pub fn subscribe(&mut self, sink: impl GameEventSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Apply one UI event. Returns the state the session settles in.
    ///
    /// Events that do not match a legal transition from the current state
    /// fail with [`SessionError::Transition`] and change nothing.
    #[instrument(skip(self), fields(state = %self.machine.current()))]
    pub fn dispatch(&mut self, event: SessionEvent) -> Result<TurnState, SessionError> {
        self.machine.check(event.target())?;

        match event {
            SessionEvent::ConfirmVictim => {
                self.enter(TurnState::ChooseType)?;
            }
            SessionEvent::ChooseType(kind) => {
                self.enter_show_task(kind)?;
            }
            SessionEvent::RevealTask => {
                self.enter(TurnState::ActionInProgress)?;
                self.dwell.arm(Instant::now());
            }
            SessionEvent::CompleteAction => {
                self.dwell.cancel();
                self.enter(TurnState::Validation)?;
            }
            SessionEvent::Skip => {
                let victim = self.victim()?;
                let penalty = self.ledger.rules().skip_penalty;
                if penalty != 0 {
                    self.award(victim, penalty, ScoreReason::Skipped)?;
                }
                self.dwell.cancel();
                self.enter(TurnState::Punishment)?;
            }
            SessionEvent::Validate(true) => {
                let victim = self.victim()?;
                let award = self.ledger.rules().completion_award;
                self.award(victim, award, ScoreReason::Completed)?;
                self.enter_next_turn()?;
            }
            SessionEvent::Validate(false) => {
                self.enter(TurnState::Punishment)?;
            }
            SessionEvent::AcknowledgePunishment => {
                let victim = self.victim()?;
                let penalty = self.ledger.rules().punishment_penalty;
                if penalty != 0 {
                    self.award(victim, penalty, ScoreReason::Punished)?;
                }
                self.enter_next_turn()?;
            }
            SessionEvent::RequestExit => {
                self.enter_exit()?;
            }
        }

        Ok(self.machine.current())
    }

    /// Clear scores, exclusions and turn progress, and return to INIT.
    ///
    /// Player identities are kept. No transition event is emitted.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.dwell.cancel();
        self.session.players.reset_scores();
        self.session.excluded.clear();
        self.session.current_player = None;
        self.session.clear_turn();
        self.session.turns_completed = 0;
        self.ledger.clear();
        self.machine.reset();
        info!("session reset");
    }

    /// [`reset`](Self::reset), then [`begin`](Self::begin).
    pub fn restart(&mut self) -> Result<TurnState, SessionError> {
        self.reset();
        self.begin()
    }

    /// Add a player between (or during) turns.
    pub fn add_player(&mut self, name: &str) -> Result<Player, SessionError> {
        Ok(self.session.players.add(name)?)
    }

    /// Remove a player. The current victim cannot leave mid-turn.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, SessionError> {
        let state = self.machine.current();
        let on_trial = self.session.current_player == Some(id)
            && (state == TurnState::SelectVictim || state.is_mid_turn());
        if on_trial {
            return Err(SessionError::PlayerOnTrial(id));
        }

        let removed = self.session.players.remove(id)?;
        if self.session.current_player == Some(id) {
            self.session.current_player = None;
        }
        Ok(removed)
    }

    // === Queries ===

    #[must_use]
    pub fn state(&self) -> TurnState {
        self.machine.current()
    }

    #[must_use]
    pub fn previous_state(&self) -> Option<TurnState> {
        self.machine.previous()
    }

    /// States visited since start or the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnState> {
        self.machine.history()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.machine.is_terminal()
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn players(&self) -> &PlayerRegistry {
        &self.session.players
    }

    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.session.current_player()
    }

    /// The prompt on show, from SHOW_TASK until the turn ends.
    #[must_use]
    pub fn current_prompt(&self) -> Option<&Prompt> {
        self.session.current_prompt()
    }

    #[must_use]
    pub fn end_condition(&self) -> EndCondition {
        self.end_condition
    }

    /// The seed this session's randomness derives from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn standings(&self) -> Vec<Player> {
        self.ledger.standings(&self.session.players)
    }

    pub fn winner(&self) -> Result<Player, SessionError> {
        Ok(self.ledger.winner(&self.session.players)?)
    }

    #[must_use]
    pub fn score_entries(&self) -> &[ScoreEntry] {
        self.ledger.entries()
    }

    /// The armed dwell window, while a task is in progress.
    #[must_use]
    pub fn dwell_ticket(&self) -> Option<DwellTicket> {
        self.dwell.active()
    }

    /// False once the task ended, the session exited, or it was reset.
    #[must_use]
    pub fn is_ticket_live(&self, ticket: &DwellTicket) -> bool {
        self.dwell.is_live(ticket)
    }

    // === Transitions ===

    fn enter(&mut self, target: TurnState) -> Result<(), SessionError> {
        let from = self.machine.transition(target)?;
        let event = TransitionEvent::now(from, target, self.session.current_player);
        for sink in &mut self.sinks {
            sink.on_transition(&event);
        }
        Ok(())
    }

    fn enter_select_victim(&mut self) -> Result<(), SessionError> {
        self.machine.check(TurnState::SelectVictim)?;

        let victim = self
            .session
            .players
            .random_excluding(self.session.current_player, &mut self.victim_rng)?
            .id();

        self.session.current_player = Some(victim);
        self.session.clear_turn();
        self.enter(TurnState::SelectVictim)
    }

    fn enter_show_task(&mut self, kind: PromptKind) -> Result<(), SessionError> {
        let mode = self.session.mode.mode;
        let prompt = self
            .content
            .get_random(mode, kind, &self.session.excluded, &mut self.prompt_rng)
            .ok_or(SessionError::NoContent(BucketKey::new(mode, kind)))?;

        // Recorded before the transition is published.
        self.session.excluded.insert(&prompt);
        self.session.chosen_kind = Some(kind);
        self.session.current_prompt = Some(prompt);
        self.enter(TurnState::ShowTask)
    }

    /// Enter NEXT_TURN and route straight on to SELECT_VICTIM or EXIT.
    fn enter_next_turn(&mut self) -> Result<(), SessionError> {
        self.enter(TurnState::NextTurn)?;
        self.session.turns_completed += 1;

        if self.end_condition.is_met(self.session.turns_completed) {
            info!(turns = self.session.turns_completed, "end condition reached");
            self.enter_exit()
        } else {
            self.enter_select_victim()
        }
    }

    fn enter_exit(&mut self) -> Result<(), SessionError> {
        self.dwell.cancel();
        self.enter(TurnState::Exit)?;
        self.session.current_player = None;
        self.session.clear_turn();
        info!(turns = self.session.turns_completed, "session exited");
        Ok(())
    }

    fn victim(&self) -> Result<PlayerId, SessionError> {
        match self.session.current_player {
            Some(id) => Ok(id),
            None => {
                warn!(state = %self.machine.current(), "no victim for an active turn");
                Err(RosterError::EmptyRoster.into())
            }
        }
    }

    fn award(&mut self, player: PlayerId, delta: i64, reason: ScoreReason) -> Result<i64, SessionError> {
        Ok(self
            .ledger
            .award(&mut self.session.players, player, delta, reason)?)
    }
}

impl<C: ContentSource> fmt::Debug for SessionController<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionController")
            .field("state", &self.machine.current())
            .field("session", &self.session)
            .field("seed", &self.seed)
            .field("sinks", &self.sinks.len())
            .finish_non_exhaustive()
    }
}
