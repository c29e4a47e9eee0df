//! Player registry.
//!
//! The `PlayerRegistry` holds the roster in join order, hands out stable ids
//! and avatar colors, and picks victims at random.

use im::Vector;
use tracing::{debug, error, instrument};

use crate::core::{AvatarColor, GameRng, Player, PlayerId, RosterLimits};

use super::error::RosterError;

/// Roster of players for one session.
///
/// Every mutating operation validates first and commits only on success, so
/// a failed call leaves the roster unchanged.
///
/// ## Example
///
/// ```
/// use party_engine::core::RosterLimits;
/// use party_engine::players::{PlayerRegistry, RosterError};
///
/// let mut registry = PlayerRegistry::new(RosterLimits::default());
/// let alice = registry.add("Alice").unwrap();
/// registry.add("Bob").unwrap();
///
/// assert_eq!(registry.add("Alice"), Err(RosterError::DuplicateName("Alice".into())));
/// assert_eq!(registry.remove(alice.id()), Err(RosterError::BelowMinimum { min: 2 }));
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlayerRegistry {
    players: Vector<Player>,
    limits: RosterLimits,
    next_id: u32,
}

impl PlayerRegistry {
    /// Create an empty registry with the given limits.
    #[must_use]
    pub fn new(limits: RosterLimits) -> Self {
        Self {
            players: Vector::new(),
            limits,
            next_id: 0,
        }
    }

    #[must_use]
    pub fn limits(&self) -> RosterLimits {
        self.limits
    }

    /// Add a player.
    ///
    /// The name is trimmed before validation and storage. Names compare
    /// case-sensitively.
    #[instrument(skip(self))]
    pub fn add(&mut self, name: &str) -> Result<Player, RosterError> {
        let name = self.validate_name(name, None)?;

        if let Some(max) = self.limits.max_players {
            if self.players.len() >= max {
                return Err(RosterError::AtCapacity { max });
            }
        }

        let id = PlayerId::new(self.next_id);
        let player = Player::new(id, name, AvatarColor::for_creation_index(self.next_id));
        self.next_id += 1;
        self.players.push_back(player.clone());

        debug!(%id, name = player.name(), "player added");
        Ok(player)
    }

    /// Remove a player, returning it.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: PlayerId) -> Result<Player, RosterError> {
        let index = self.position(id).ok_or(RosterError::UnknownPlayer(id))?;

        if self.players.len() <= self.limits.min_players {
            return Err(RosterError::BelowMinimum {
                min: self.limits.min_players,
            });
        }

        let player = self.players.remove(index);
        debug!(%id, name = player.name(), "player removed");
        Ok(player)
    }

    /// Rename a player, with the same validation as [`add`](Self::add).
    #[instrument(skip(self))]
    pub fn rename(&mut self, id: PlayerId, name: &str) -> Result<(), RosterError> {
        let index = self.position(id).ok_or(RosterError::UnknownPlayer(id))?;
        let name = self.validate_name(name, Some(id))?;

        if let Some(player) = self.players.get_mut(index) {
            player.set_name(name);
        }
        Ok(())
    }

    /// Pick a player uniformly at random, avoiding `exclude` when possible.
    ///
    /// When excluding would leave no candidates (a single-player roster),
    /// the whole roster is eligible so play can continue.
    pub fn random_excluding(
        &self,
        exclude: Option<PlayerId>,
        rng: &mut GameRng,
    ) -> Result<&Player, RosterError> {
        if self.players.is_empty() {
            error!("victim selection on an empty roster");
            return Err(RosterError::EmptyRoster);
        }

        let candidates: Vec<&Player> = self
            .players
            .iter()
            .filter(|p| Some(p.id()) != exclude)
            .collect();

        let chosen = if candidates.is_empty() {
            rng.choose_index(self.players.len()).and_then(|i| self.players.get(i))
        } else {
            rng.choose(&candidates).copied()
        };

        chosen.ok_or(RosterError::EmptyRoster)
    }

    /// Zero every score. Identities and colors are untouched.
    pub fn reset_scores(&mut self) {
        for player in self.players.iter_mut() {
            player.set_score(0);
        }
    }

    #[must_use]
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    /// Find a player by exact name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Join-order position of a player.
    #[must_use]
    pub fn position(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: PlayerId) -> bool {
        self.position(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Iterate over players in join order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// O(1) copy of the roster, in join order.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Player> {
        self.players.clone()
    }

    fn validate_name(&self, name: &str, renaming: Option<PlayerId>) -> Result<String, RosterError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(RosterError::BlankName);
        }

        let taken = self
            .players
            .iter()
            .any(|p| p.name() == trimmed && Some(p.id()) != renaming);
        if taken {
            return Err(RosterError::DuplicateName(trimmed.to_string()));
        }

        Ok(trimmed.to_string())
    }
}
