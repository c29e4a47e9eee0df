//! Player identification and display data.
//!
//! ## PlayerId
//!
//! Opaque, stable identifier. Assigned once by the registry and never reused,
//! even after the player leaves.
//!
//! ## AvatarColor
//!
//! Index into a fixed palette, assigned by creation order and cycling once the
//! palette runs out.

use serde::{Deserialize, Serialize};

/// Stable player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Avatar palette, in assignment order.
pub const AVATAR_PALETTE: [&str; 8] = [
    "#FF6B6B", "#4ECDC4", "#FFD93D", "#6C5CE7",
    "#FF8E53", "#00B894", "#FD79A8", "#0984E3",
];

/// A color from [`AVATAR_PALETTE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvatarColor(u8);

impl AvatarColor {
    /// Color for the `n`th player ever created (0-based), cycling through the palette.
    #[must_use]
    pub const fn for_creation_index(n: u32) -> Self {
        Self((n % AVATAR_PALETTE.len() as u32) as u8)
    }

    /// Palette index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Hex string, e.g. `"#FF6B6B"`.
    #[must_use]
    pub fn hex(self) -> &'static str {
        AVATAR_PALETTE[self.index()]
    }
}

/// A participant in a session.
///
/// Scores change only through [`ScoreLedger`](crate::scoring::ScoreLedger)
/// and [`PlayerRegistry::reset_scores`](crate::players::PlayerRegistry::reset_scores).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    avatar_color: AvatarColor,
    score: i64,
}

impl Player {
    pub(crate) fn new(id: PlayerId, name: impl Into<String>, avatar_color: AvatarColor) -> Self {
        Self {
            id,
            name: name.into(),
            avatar_color,
            score: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn avatar_color(&self) -> AvatarColor {
        self.avatar_color
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_score(&mut self, score: i64) {
        self.score = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p = PlayerId::new(3);
        assert_eq!(p.raw(), 3);
        assert_eq!(format!("{}", p), "Player 3");
    }

    #[test]
    fn test_avatar_color_cycles() {
        assert_eq!(AvatarColor::for_creation_index(0).hex(), "#FF6B6B");
        assert_eq!(AvatarColor::for_creation_index(7).hex(), "#0984E3");
        assert_eq!(
            AvatarColor::for_creation_index(8),
            AvatarColor::for_creation_index(0)
        );
        assert_eq!(AvatarColor::for_creation_index(9).index(), 1);
    }

    #[test]
    fn test_new_player_starts_at_zero() {
        let player = Player::new(PlayerId::new(0), "Alice", AvatarColor::for_creation_index(0));
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(1), "Bob", AvatarColor::for_creation_index(1));
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
