//! Core engine types: players, RNG, configuration.
//!
//! These are the building blocks every other module shares. Games configure
//! a session via `SessionConfig` rather than modifying the engine.

pub mod player;
pub mod rng;
pub mod config;

pub use player::{AvatarColor, Player, PlayerId, AVATAR_PALETTE};
pub use rng::GameRng;
pub use config::{
    EndCondition, ModeConfig, PlayerSpec, RosterLimits, ScoringRules, SessionConfig,
    DEFAULT_MIN_DWELL_MS, DEFAULT_MIN_PLAYERS,
};
