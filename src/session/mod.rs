//! Session lifecycle.
//!
//! A [`SessionController`] owns one running game: its [`GameSession`] state,
//! the turn machine, the score ledger and the content source. Shells create
//! one per game and drop it on exit; there is no global session.
//!
//! ## Event flow
//!
//! | Event | From | To |
//! |---|---|---|
//! | `ConfirmVictim` | SELECT_VICTIM | CHOOSE_TYPE |
//! | `ChooseType(kind)` | CHOOSE_TYPE | SHOW_TASK |
//! | `RevealTask` | SHOW_TASK | ACTION_IN_PROGRESS |
//! | `CompleteAction` | ACTION_IN_PROGRESS | VALIDATION |
//! | `Skip` | ACTION_IN_PROGRESS | PUNISHMENT |
//! | `Validate(true)` | VALIDATION | NEXT_TURN, then SELECT_VICTIM or EXIT |
//! | `Validate(false)` | VALIDATION | PUNISHMENT |
//! | `AcknowledgePunishment` | PUNISHMENT | NEXT_TURN, then SELECT_VICTIM or EXIT |
//! | `RequestExit` | any active state | EXIT |

mod controller;
mod dwell;
mod error;
mod event;
mod game;

pub use controller::SessionController;
pub use dwell::{DwellGate, DwellTicket};
pub use error::SessionError;
pub use event::SessionEvent;
pub use game::GameSession;
