//! Dwell gate for ACTION_IN_PROGRESS.
//!
//! The UI waits a few seconds before enabling "done" so nobody taps through
//! a dare instantly. The engine does not block on this; it hands out a
//! [`DwellTicket`] when the task starts and invalidates it when the task
//! ends, the session exits, or the session resets. A timer callback holding
//! a stale ticket must do nothing.

use std::time::{Duration, Instant};

/// Handle for one armed dwell window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DwellTicket {
    generation: u64,
    armed_at: Instant,
    min_dwell: Duration,
}

impl DwellTicket {
    #[must_use]
    pub fn armed_at(&self) -> Instant {
        self.armed_at
    }

    #[must_use]
    pub fn min_dwell(&self) -> Duration {
        self.min_dwell
    }

    /// Earliest instant completion should be accepted.
    #[must_use]
    pub fn ready_at(&self) -> Instant {
        self.armed_at + self.min_dwell
    }

    #[must_use]
    pub fn is_elapsed(&self, now: Instant) -> bool {
        now >= self.ready_at()
    }

    /// Time left before the window closes, zero once elapsed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.ready_at().saturating_duration_since(now)
    }
}

/// Issues and invalidates dwell tickets.
#[derive(Clone, Debug)]
pub struct DwellGate {
    min_dwell: Duration,
    generation: u64,
    active: Option<DwellTicket>,
}

impl DwellGate {
    #[must_use]
    pub fn new(min_dwell: Duration) -> Self {
        Self {
            min_dwell,
            generation: 0,
            active: None,
        }
    }

    #[must_use]
    pub fn min_dwell(&self) -> Duration {
        self.min_dwell
    }

    /// Arm a new window starting at `now`, invalidating any previous ticket.
    pub fn arm(&mut self, now: Instant) -> DwellTicket {
        self.generation += 1;
        let ticket = DwellTicket {
            generation: self.generation,
            armed_at: now,
            min_dwell: self.min_dwell,
        };
        self.active = Some(ticket);
        ticket
    }

    /// Invalidate the active ticket, if any.
    pub fn cancel(&mut self) {
        if self.active.take().is_some() {
            self.generation += 1;
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<DwellTicket> {
        self.active
    }

    /// True if `ticket` is the currently armed window.
    #[must_use]
    pub fn is_live(&self, ticket: &DwellTicket) -> bool {
        self.active
            .is_some_and(|active| active.generation == ticket.generation)
    }
}
