//! The turn state machine.
//!
//! ## Transition table
//!
//! ```text
//! INIT                -> SELECT_VICTIM
//! SELECT_VICTIM       -> CHOOSE_TYPE, EXIT
//! CHOOSE_TYPE         -> SHOW_TASK, EXIT
//! SHOW_TASK           -> ACTION_IN_PROGRESS, EXIT
//! ACTION_IN_PROGRESS  -> VALIDATION, PUNISHMENT, EXIT
//! VALIDATION          -> NEXT_TURN, PUNISHMENT, EXIT
//! PUNISHMENT          -> NEXT_TURN, EXIT
//! NEXT_TURN           -> SELECT_VICTIM, EXIT
//! EXIT                -> (terminal)
//! ```
//!
//! The machine only enforces legality. What happens on entering a state
//! (picking a victim, fetching a prompt, scoring) belongs to the session.

use derive_more::Display;
use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::state::TurnState;

/// A transition not in the legal table was requested.
///
/// Always a sequencing bug in the caller; the machine is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display("Illegal transition {from} -> {to}")]
pub struct IllegalTransition {
    pub from: TurnState,
    pub to: TurnState,
}

impl std::error::Error for IllegalTransition {}

/// Finite-state controller for one session's turns.
///
/// ## Example
///
/// ```
/// use party_engine::turn::{TurnState, TurnStateMachine};
///
/// let mut machine = TurnStateMachine::new();
/// machine.transition(TurnState::SelectVictim).unwrap();
///
/// let err = machine.transition(TurnState::Validation).unwrap_err();
/// assert_eq!(err.from, TurnState::SelectVictim);
/// assert_eq!(machine.current(), TurnState::SelectVictim);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnStateMachine {
    current: TurnState,
    previous: Option<TurnState>,
    history: Vector<TurnState>,
}

impl Default for TurnStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnStateMachine {
    /// A machine at `Init` with history `[Init]`.
    #[must_use]
    pub fn new() -> Self {
        let mut history = Vector::new();
        history.push_back(TurnState::Init);
        Self {
            current: TurnState::Init,
            previous: None,
            history,
        }
    }

    #[must_use]
    pub fn current(&self) -> TurnState {
        self.current
    }

    #[must_use]
    pub fn previous(&self) -> Option<TurnState> {
        self.previous
    }

    /// Every state visited since construction or the last reset, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnState> {
        &self.history
    }

    #[must_use]
    pub fn can_transition(&self, target: TurnState) -> bool {
        self.current.can_transition_to(target)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.current.is_terminal()
    }

    /// Check a transition without performing it.
    pub fn check(&self, target: TurnState) -> Result<(), IllegalTransition> {
        if self.can_transition(target) {
            Ok(())
        } else {
            Err(IllegalTransition {
                from: self.current,
                to: target,
            })
        }
    }

    /// Move to `target`, returning the state left.
    pub fn transition(&mut self, target: TurnState) -> Result<TurnState, IllegalTransition> {
        self.check(target)?;

        let from = self.current;
        self.previous = Some(from);
        self.current = target;
        self.history.push_back(target);

        debug!(%from, to = %target, "turn transition");
        Ok(from)
    }

    /// Return to `Init` with fresh history. Not a transition.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
