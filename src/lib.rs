//! # party-engine
//!
//! A turn-based game engine for single-device party games such as Truth or
//! Dare.
//!
//! ## Design Principles
//!
//! 1. **Content-Agnostic**: No prompt text lives in the engine. Games supply
//!    it through a `ContentSource`.
//!
//! 2. **Legal Transitions Only**: The turn machine rejects anything outside
//!    its transition table. There is no silent correction.
//!
//! 3. **Validate, Then Commit**: A rejected operation leaves the session
//!    exactly as it was.
//!
//! 4. **Reproducible**: All randomness flows from one seed, split into
//!    independent streams for victims and prompts.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration
//! - `players`: Roster management and victim selection
//! - `content`: Modes, prompt buckets, exclusion tracking
//! - `turn`: Turn states, the transition table, transition events
//! - `scoring`: Score deltas, standings, winner
//! - `session`: The controller that composes everything for one game

pub mod core;
pub mod players;
pub mod content;
pub mod turn;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    AvatarColor, EndCondition, GameRng, ModeConfig, Player, PlayerId, PlayerSpec,
    RosterLimits, ScoringRules, SessionConfig,
};

pub use crate::players::{PlayerRegistry, RosterError};

pub use crate::content::{
    BucketKey, ContentSource, ExclusionSet, Mode, ModeInfo, Prompt, PromptId, PromptKind,
    PromptSpec, StaticContentProvider,
};

pub use crate::turn::{
    GameEventSink, IllegalTransition, RecordingSink, TransitionEvent, TurnState,
    TurnStateMachine,
};

pub use crate::scoring::{ScoreEntry, ScoreLedger, ScoreReason};

pub use crate::session::{
    DwellGate, DwellTicket, GameSession, SessionController, SessionError, SessionEvent,
};
