//! Session error types.

use derive_more::Display;

use crate::content::BucketKey;
use crate::core::PlayerId;
use crate::players::RosterError;
use crate::turn::IllegalTransition;

/// Anything a session operation can reject.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SessionError {
    /// Roster validation failed.
    #[display("{}", _0)]
    Roster(RosterError),

    /// The event does not match a legal transition from the current state.
    #[display("{}", _0)]
    Transition(IllegalTransition),

    /// `RoundCount(0)` can never be played.
    #[display("Round count must be at least 1")]
    InvalidEndCondition,

    /// The mode's minimum exceeds its maximum.
    #[display("Mode requires {min} players but allows at most {max}")]
    InvalidModeLimits { min: usize, max: usize },

    /// Neither the requested bucket nor its fallback has any prompt.
    #[display("No prompts available for {}", _0)]
    NoContent(BucketKey),

    /// The player is the current victim and cannot leave mid-turn.
    #[display("{} is on trial and cannot leave mid-turn", _0)]
    PlayerOnTrial(PlayerId),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Roster(err) => Some(err),
            SessionError::Transition(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RosterError> for SessionError {
    fn from(err: RosterError) -> Self {
        SessionError::Roster(err)
    }
}

impl From<IllegalTransition> for SessionError {
    fn from(err: IllegalTransition) -> Self {
        SessionError::Transition(err)
    }
}
