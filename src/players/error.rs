//! Roster error types.

use derive_more::Display;

use crate::core::PlayerId;

/// Roster validation failures.
///
/// All but `EmptyRoster` are recoverable: the caller re-prompts the user and
/// the roster is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum RosterError {
    /// Name is empty or whitespace only.
    #[display("Player name cannot be blank")]
    BlankName,

    /// Another player already has this exact name.
    #[display("A player named {:?} already exists", _0)]
    DuplicateName(String),

    /// The roster is full.
    #[display("Roster is full ({max} players max)")]
    AtCapacity { max: usize },

    /// Removing would leave too few players.
    #[display("At least {min} players are required")]
    BelowMinimum { min: usize },

    /// No player with this id is on the roster.
    #[display("{} is not on the roster", _0)]
    UnknownPlayer(PlayerId),

    /// Selection was attempted with nobody on the roster.
    ///
    /// Start-up validation rules this out; seeing it means a precondition
    /// was violated upstream.
    #[display("Cannot select from an empty roster")]
    EmptyRoster,
}

impl std::error::Error for RosterError {}
