//! Scoring: deltas, standings and the winner query.

mod ledger;

pub use ledger::{ScoreEntry, ScoreLedger, ScoreReason};
