//! Per-game session state.

use crate::content::{ExclusionSet, ModeInfo, Prompt, PromptKind};
use crate::core::{Player, PlayerId};
use crate::players::PlayerRegistry;

/// Everything one running game knows about its players and content.
///
/// Only [`SessionController`](super::SessionController) mutates a
/// `GameSession`; everyone else sees it through a shared reference.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(super) players: PlayerRegistry,
    pub(super) mode: ModeInfo,
    pub(super) current_player: Option<PlayerId>,
    pub(super) chosen_kind: Option<PromptKind>,
    pub(super) current_prompt: Option<Prompt>,
    pub(super) excluded: ExclusionSet,
    pub(super) turns_completed: u32,
}

impl GameSession {
    pub(super) fn new(players: PlayerRegistry, mode: ModeInfo) -> Self {
        Self {
            players,
            mode,
            current_player: None,
            chosen_kind: None,
            current_prompt: None,
            excluded: ExclusionSet::new(),
            turns_completed: 0,
        }
    }

    /// The roster, in join order.
    #[must_use]
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    #[must_use]
    pub fn mode(&self) -> &ModeInfo {
        &self.mode
    }

    /// Id of the player on trial.
    #[must_use]
    pub fn current_player_id(&self) -> Option<PlayerId> {
        self.current_player
    }

    /// The player on trial.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        self.current_player.and_then(|id| self.players.get(id))
    }

    #[must_use]
    pub fn chosen_kind(&self) -> Option<PromptKind> {
        self.chosen_kind
    }

    #[must_use]
    pub fn current_prompt(&self) -> Option<&Prompt> {
        self.current_prompt.as_ref()
    }

    /// Prompts shown so far, per bucket.
    #[must_use]
    pub fn excluded(&self) -> &ExclusionSet {
        &self.excluded
    }

    /// Turns that have reached NEXT_TURN.
    #[must_use]
    pub fn turns_completed(&self) -> u32 {
        self.turns_completed
    }

    pub(super) fn clear_turn(&mut self) {
        self.chosen_kind = None;
        self.current_prompt = None;
    }
}
