//! Transition events.
//!
//! The session emits one [`TransitionEvent`] per successful transition. UI
//! shells subscribe a [`GameEventSink`] and render the screen for `to`.
//!
//! Any `FnMut(&TransitionEvent)` closure is a sink:
//!
//! ```
//! use party_engine::turn::{GameEventSink, TransitionEvent, TurnState};
//!
//! let mut seen = Vec::new();
//! let mut sink = |event: &TransitionEvent| seen.push(event.to);
//! sink.on_transition(&TransitionEvent::now(TurnState::Init, TurnState::SelectVictim, None));
//! assert_eq!(seen, vec![TurnState::SelectVictim]);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

use super::state::TurnState;

/// One state transition, as published to subscribers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionEvent {
    pub from: TurnState,
    pub to: TurnState,
    /// The victim at the time of the transition, if any.
    pub player: Option<PlayerId>,
    pub timestamp: DateTime<Utc>,
}

impl TransitionEvent {
    /// Create an event stamped with the current time.
    pub fn now(from: TurnState, to: TurnState, player: Option<PlayerId>) -> Self {
        Self {
            from,
            to,
            player,
            timestamp: Utc::now(),
        }
    }
}

/// Receives transition events.
pub trait GameEventSink {
    fn on_transition(&mut self, event: &TransitionEvent);
}

impl<F> GameEventSink for F
where
    F: FnMut(&TransitionEvent),
{
    fn on_transition(&mut self, event: &TransitionEvent) {
        self(event)
    }
}

/// Sink that keeps every event it receives.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vec<TransitionEvent>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[TransitionEvent] {
        &self.events
    }

    /// The `to` state of each event, in order.
    #[must_use]
    pub fn visited(&self) -> Vec<TurnState> {
        self.events.iter().map(|e| e.to).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameEventSink for RecordingSink {
    fn on_transition(&mut self, event: &TransitionEvent) {
        self.events.push(event.clone());
    }
}
