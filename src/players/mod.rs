//! The player roster.
//!
//! `PlayerRegistry` owns players for a session: identity, join order,
//! avatar colors and random victim selection.

mod error;
mod registry;

pub use error::RosterError;
pub use registry::PlayerRegistry;
