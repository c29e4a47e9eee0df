//! Score ledger.
//!
//! Applies score deltas to players and answers standings queries. Scores
//! are never clamped: a negative total is a meaningful result.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Player, PlayerId, ScoringRules};
use crate::players::{PlayerRegistry, RosterError};

/// Why a score changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreReason {
    /// The group validated a task as done.
    Completed,
    /// The victim skipped a task.
    Skipped,
    /// A punishment was acknowledged.
    Punished,
    /// Adjusted by the host outside the turn flow.
    Manual,
}

/// One applied delta.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: PlayerId,
    pub delta: i64,
    pub reason: ScoreReason,
    /// The player's score after this entry.
    pub total: i64,
}

/// Applies deltas and keeps a log of every award.
#[derive(Clone, Debug, Default)]
pub struct ScoreLedger {
    rules: ScoringRules,
    entries: Vec<ScoreEntry>,
}

impl ScoreLedger {
    #[must_use]
    pub fn new(rules: ScoringRules) -> Self {
        Self {
            rules,
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Add `delta` to a player's score. Returns the new total.
    pub fn award(
        &mut self,
        registry: &mut PlayerRegistry,
        player: PlayerId,
        delta: i64,
        reason: ScoreReason,
    ) -> Result<i64, RosterError> {
        let target = registry
            .get_mut(player)
            .ok_or(RosterError::UnknownPlayer(player))?;

        let total = target.score().saturating_add(delta);
        target.set_score(total);

        self.entries.push(ScoreEntry {
            player,
            delta,
            reason,
            total,
        });
        debug!(%player, delta, total, ?reason, "score awarded");
        Ok(total)
    }

    /// Players by score, highest first. Equal scores keep join order.
    #[must_use]
    pub fn standings(&self, registry: &PlayerRegistry) -> Vec<Player> {
        let mut players: Vec<Player> = registry.iter().cloned().collect();
        // sort_by is stable, so ties stay in join order
        players.sort_by(|a, b| b.score().cmp(&a.score()));
        players
    }

    /// The head of [`standings`](Self::standings).
    ///
    /// With nobody scoring, the first player to join wins.
    pub fn winner(&self, registry: &PlayerRegistry) -> Result<Player, RosterError> {
        self.standings(registry)
            .into_iter()
            .next()
            .ok_or(RosterError::EmptyRoster)
    }

    /// Every applied delta, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Entries for one player.
    pub fn entries_for(&self, player: PlayerId) -> impl Iterator<Item = &ScoreEntry> {
        self.entries.iter().filter(move |e| e.player == player)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RosterLimits;

    fn setup(names: &[&str]) -> (ScoreLedger, PlayerRegistry) {
        let mut registry = PlayerRegistry::new(RosterLimits::default());
        for name in names {
            registry.add(name).unwrap();
        }
        (ScoreLedger::new(ScoringRules::default()), registry)
    }

    fn id(registry: &PlayerRegistry, name: &str) -> PlayerId {
        registry.find_by_name(name).unwrap().id()
    }

    #[test]
    fn test_award_accumulates() {
        let (mut ledger, mut registry) = setup(&["Alice", "Bob"]);
        let alice = id(&registry, "Alice");

        assert_eq!(ledger.award(&mut registry, alice, 1, ScoreReason::Completed), Ok(1));
        assert_eq!(ledger.award(&mut registry, alice, 2, ScoreReason::Manual), Ok(3));
        assert_eq!(registry.get(alice).unwrap().score(), 3);
        assert_eq!(ledger.entries().len(), 2);
    }

    #[test]
    fn test_negative_scores_allowed() {
        let (mut ledger, mut registry) = setup(&["Alice", "Bob"]);
        let bob = id(&registry, "Bob");

        ledger.award(&mut registry, bob, -1, ScoreReason::Skipped).unwrap();
        ledger.award(&mut registry, bob, -1, ScoreReason::Skipped).unwrap();
        assert_eq!(registry.get(bob).unwrap().score(), -2);

        let standings = ledger.standings(&registry);
        assert_eq!(standings[0].name(), "Alice");
        assert_eq!(standings[1].score(), -2);
    }

    #[test]
    fn test_award_unknown_player() {
        let (mut ledger, mut registry) = setup(&["Alice", "Bob"]);
        let ghost = PlayerId::new(42);

        assert_eq!(
            ledger.award(&mut registry, ghost, 1, ScoreReason::Completed),
            Err(RosterError::UnknownPlayer(ghost))
        );
        assert!(ledger.entries().is_empty());
    }

    #[test]
    fn test_standings_tie_break_by_join_order() {
        let (mut ledger, mut registry) = setup(&["Alice", "Bob", "Carol", "Dave"]);
        let carol = id(&registry, "Carol");
        let bob = id(&registry, "Bob");
        ledger.award(&mut registry, carol, 2, ScoreReason::Completed).unwrap();
        ledger.award(&mut registry, bob, 2, ScoreReason::Completed).unwrap();

        for _ in 0..5 {
            let names: Vec<_> = ledger
                .standings(&registry)
                .iter()
                .map(|p| p.name().to_string())
                .collect();
            assert_eq!(names, vec!["Bob", "Carol", "Alice", "Dave"]);
        }
    }

    #[test]
    fn test_winner_with_no_scores_is_first_joined() {
        let (ledger, registry) = setup(&["Alice", "Bob"]);
        assert_eq!(ledger.winner(&registry).unwrap().name(), "Alice");
    }

    #[test]
    fn test_winner_empty_roster() {
        let (ledger, registry) = setup(&[]);
        assert_eq!(ledger.winner(&registry), Err(RosterError::EmptyRoster));
    }

    #[test]
    fn test_entries_for() {
        let (mut ledger, mut registry) = setup(&["Alice", "Bob"]);
        let alice = id(&registry, "Alice");
        let bob = id(&registry, "Bob");
        ledger.award(&mut registry, alice, 1, ScoreReason::Completed).unwrap();
        ledger.award(&mut registry, bob, 1, ScoreReason::Completed).unwrap();
        ledger.award(&mut registry, alice, -1, ScoreReason::Punished).unwrap();

        let totals: Vec<_> = ledger.entries_for(alice).map(|e| e.total).collect();
        assert_eq!(totals, vec![1, 0]);

        ledger.clear();
        assert_eq!(ledger.entries_for(alice).count(), 0);
    }
}
