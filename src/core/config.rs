//! Session configuration types.
//!
//! Host shells configure a session at start by providing:
//! - `ModeConfig`: Which content bucket to play and its player-count limits
//! - `EndCondition`: When the session exits on its own
//! - `ScoringRules`: Score deltas for completion, skips and punishments
//! - `SessionConfig`: Combines all configuration plus the starting roster
//!
//! Everything deserializes from camelCase JSON so shells can keep configs
//! alongside their content packs:
//!
//! ```
//! use party_engine::core::{EndCondition, SessionConfig};
//! use party_engine::content::Mode;
//!
//! let json = r#"{
//!     "players": [{ "name": "Alice" }, { "name": "Bob" }],
//!     "mode": { "id": "party", "minPlayers": 2, "maxPlayers": 8 },
//!     "endCondition": { "type": "roundCount", "value": 5 }
//! }"#;
//!
//! let config: SessionConfig = serde_json::from_str(json).unwrap();
//! assert_eq!(config.mode.id, Mode::Party);
//! assert_eq!(config.end_condition, EndCondition::RoundCount(5));
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::Mode;

/// Default minimum roster size for multi-player games.
pub const DEFAULT_MIN_PLAYERS: usize = 2;

/// Default dwell time before a task may be marked complete.
pub const DEFAULT_MIN_DWELL_MS: u64 = 3_000;

/// Roster size limits enforced by the player registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterLimits {
    /// Removal is rejected below this many players.
    pub min_players: usize,
    /// Additions are rejected above this many players. `None` for unbounded.
    pub max_players: Option<usize>,
}

impl Default for RosterLimits {
    fn default() -> Self {
        Self {
            min_players: DEFAULT_MIN_PLAYERS,
            max_players: None,
        }
    }
}

impl RosterLimits {
    /// Create limits with the given minimum and no maximum.
    #[must_use]
    pub const fn with_min(min_players: usize) -> Self {
        Self {
            min_players,
            max_players: None,
        }
    }

    /// Set the maximum roster size.
    #[must_use]
    pub fn max(mut self, max_players: usize) -> Self {
        self.max_players = Some(max_players);
        self
    }

    /// True if `count` players satisfy both bounds.
    #[must_use]
    pub fn admits(&self, count: usize) -> bool {
        count >= self.min_players && self.max_players.map_or(true, |max| count <= max)
    }
}

/// The active mode and its player-count constraints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeConfig {
    /// Content bucket to draw prompts from.
    pub id: Mode,

    #[serde(default = "default_min_players")]
    pub min_players: usize,

    #[serde(default)]
    pub max_players: Option<usize>,
}

fn default_min_players() -> usize {
    DEFAULT_MIN_PLAYERS
}

impl ModeConfig {
    /// Mode with default constraints (at least 2 players, no maximum).
    pub fn for_mode(id: Mode) -> Self {
        Self {
            id,
            min_players: DEFAULT_MIN_PLAYERS,
            max_players: None,
        }
    }

    /// Set the minimum player count.
    #[must_use]
    pub fn with_min_players(mut self, min: usize) -> Self {
        self.min_players = min;
        self
    }

    /// Set the maximum player count.
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = Some(max);
        self
    }

    /// Roster limits implied by this mode.
    #[must_use]
    pub fn roster_limits(&self) -> RosterLimits {
        RosterLimits {
            min_players: self.min_players,
            max_players: self.max_players,
        }
    }
}

/// When a session stops requesting new turns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum EndCondition {
    /// Exit after this many turns have reached NEXT_TURN.
    RoundCount(u32),
    /// Play until a player requests exit.
    #[default]
    Manual,
}

impl EndCondition {
    /// True once `turns_completed` satisfies the condition.
    #[must_use]
    pub fn is_met(&self, turns_completed: u32) -> bool {
        match self {
            EndCondition::RoundCount(n) => turns_completed >= *n,
            EndCondition::Manual => false,
        }
    }
}

/// Score deltas applied by the session.
///
/// Punishment carries no score effect unless a shell opts in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringRules {
    /// Awarded when the group validates a task as completed.
    pub completion_award: i64,
    /// Applied when the victim skips a task in progress.
    pub skip_penalty: i64,
    /// Applied when a punishment is acknowledged.
    pub punishment_penalty: i64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            completion_award: 1,
            skip_penalty: 0,
            punishment_penalty: 0,
        }
    }
}

impl ScoringRules {
    /// Set the skip penalty (usually negative, e.g. `-1`).
    #[must_use]
    pub fn with_skip_penalty(mut self, delta: i64) -> Self {
        self.skip_penalty = delta;
        self
    }

    /// Set the punishment penalty.
    #[must_use]
    pub fn with_punishment_penalty(mut self, delta: i64) -> Self {
        self.punishment_penalty = delta;
        self
    }
}

/// A player as listed on the setup screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
}

impl PlayerSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Complete session configuration, supplied at start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    /// Starting roster, in join order.
    pub players: Vec<PlayerSpec>,

    pub mode: ModeConfig,

    #[serde(default)]
    pub end_condition: EndCondition,

    /// RNG seed. `None` draws one from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub scoring: ScoringRules,

    /// Advisory dwell time in ACTION_IN_PROGRESS, in milliseconds.
    #[serde(default = "default_min_dwell_ms")]
    pub min_dwell_ms: u64,
}

fn default_min_dwell_ms() -> u64 {
    DEFAULT_MIN_DWELL_MS
}

impl SessionConfig {
    /// Create a configuration for `mode` with default limits and no players.
    pub fn new(mode: Mode) -> Self {
        Self {
            players: Vec::new(),
            mode: ModeConfig::for_mode(mode),
            end_condition: EndCondition::Manual,
            seed: None,
            scoring: ScoringRules::default(),
            min_dwell_ms: DEFAULT_MIN_DWELL_MS,
        }
    }

    /// Add a player to the starting roster.
    #[must_use]
    pub fn with_player(mut self, name: impl Into<String>) -> Self {
        self.players.push(PlayerSpec::new(name));
        self
    }

    /// Add several players to the starting roster.
    #[must_use]
    pub fn with_players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.players.extend(names.into_iter().map(PlayerSpec::new));
        self
    }

    /// Replace the mode configuration.
    #[must_use]
    pub fn with_mode_config(mut self, mode: ModeConfig) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_end_condition(mut self, end_condition: EndCondition) -> Self {
        self.end_condition = end_condition;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }

    #[must_use]
    pub fn with_min_dwell(mut self, dwell: Duration) -> Self {
        self.min_dwell_ms = u64::try_from(dwell.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Dwell time as a `Duration`.
    #[must_use]
    pub fn min_dwell(&self) -> Duration {
        Duration::from_millis(self.min_dwell_ms)
    }
}
