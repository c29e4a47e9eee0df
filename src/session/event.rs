//! UI-originated session events.

use serde::{Deserialize, Serialize};

use crate::content::PromptKind;
use crate::turn::TurnState;

/// An input from the UI shell. Each maps to exactly one target state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum SessionEvent {
    /// The victim-selection spin has settled.
    ConfirmVictim,
    /// The victim picked truth, dare, or a statement.
    ChooseType(PromptKind),
    /// The prompt has been read out; the task begins.
    RevealTask,
    /// The victim says they are done.
    CompleteAction,
    /// The victim refuses the task.
    Skip,
    /// The group's verdict on the task.
    Validate(bool),
    /// The punishment has been carried out.
    AcknowledgePunishment,
    /// Abandon the session.
    RequestExit,
}

impl SessionEvent {
    /// The state this event asks the machine to enter.
    #[must_use]
    pub const fn target(self) -> TurnState {
        match self {
            SessionEvent::ConfirmVictim => TurnState::ChooseType,
            SessionEvent::ChooseType(_) => TurnState::ShowTask,
            SessionEvent::RevealTask => TurnState::ActionInProgress,
            SessionEvent::CompleteAction => TurnState::Validation,
            SessionEvent::Skip => TurnState::Punishment,
            SessionEvent::Validate(true) => TurnState::NextTurn,
            SessionEvent::Validate(false) => TurnState::Punishment,
            SessionEvent::AcknowledgePunishment => TurnState::NextTurn,
            SessionEvent::RequestExit => TurnState::Exit,
        }
    }
}
