//! Turn lifecycle: states, the legal transition table, and transition events.
//!
//! A turn runs victim selection → type choice → task reveal → in-progress
//! window → validation → optional punishment → next turn. `Exit` is reachable
//! from every active state and is terminal.

mod event;
mod machine;
mod state;

pub use event::{GameEventSink, RecordingSink, TransitionEvent};
pub use machine::{IllegalTransition, TurnStateMachine};
pub use state::TurnState;
