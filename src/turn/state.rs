//! Turn states and the legal transition table.

use serde::{Deserialize, Serialize};

/// A state in the turn lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnState {
    Init,
    SelectVictim,
    ChooseType,
    ShowTask,
    ActionInProgress,
    Validation,
    Punishment,
    NextTurn,
    Exit,
}

impl TurnState {
    /// Every state, in lifecycle order.
    pub const ALL: [TurnState; 9] = [
        TurnState::Init,
        TurnState::SelectVictim,
        TurnState::ChooseType,
        TurnState::ShowTask,
        TurnState::ActionInProgress,
        TurnState::Validation,
        TurnState::Punishment,
        TurnState::NextTurn,
        TurnState::Exit,
    ];

    /// States reachable from `self` in one transition.
    ///
    /// `Exit` is reachable from every state except `Init` and itself.
    #[must_use]
    pub const fn legal_targets(self) -> &'static [TurnState] {
        use TurnState::*;
        match self {
            Init => &[SelectVictim],
            SelectVictim => &[ChooseType, Exit],
            ChooseType => &[ShowTask, Exit],
            ShowTask => &[ActionInProgress, Exit],
            ActionInProgress => &[Validation, Punishment, Exit],
            Validation => &[NextTurn, Punishment, Exit],
            Punishment => &[NextTurn, Exit],
            NextTurn => &[SelectVictim, Exit],
            Exit => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, target: TurnState) -> bool {
        self.legal_targets().contains(&target)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, TurnState::Exit)
    }

    /// True while a victim is on trial (from type choice through punishment).
    #[must_use]
    pub const fn is_mid_turn(self) -> bool {
        matches!(
            self,
            TurnState::ChooseType
                | TurnState::ShowTask
                | TurnState::ActionInProgress
                | TurnState::Validation
                | TurnState::Punishment
        )
    }

    /// Upper-case name, e.g. `"SELECT_VICTIM"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TurnState::Init => "INIT",
            TurnState::SelectVictim => "SELECT_VICTIM",
            TurnState::ChooseType => "CHOOSE_TYPE",
            TurnState::ShowTask => "SHOW_TASK",
            TurnState::ActionInProgress => "ACTION_IN_PROGRESS",
            TurnState::Validation => "VALIDATION",
            TurnState::Punishment => "PUNISHMENT",
            TurnState::NextTurn => "NEXT_TURN",
            TurnState::Exit => "EXIT",
        }
    }
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
