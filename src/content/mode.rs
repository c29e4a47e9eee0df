//! Content modes.
//!
//! A mode names a disjoint set of prompt buckets. Modes are a closed set;
//! string keys coming from a shell are parsed with an explicit fallback to
//! [`Mode::Original`] so a misconfigured key never blocks play.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A content mode.
///
/// Variants are declared in ascending intensity, so `Ord` matches [`Mode::ALL`].
/// Intensity is an ordinal hint for the UI only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mode {
    /// The default bucket; also the fallback for unknown keys.
    #[default]
    Original,
    Party,
    Couples,
    Extreme,
}

impl Mode {
    /// Every mode, in ascending intensity.
    pub const ALL: [Mode; 4] = [Mode::Original, Mode::Party, Mode::Couples, Mode::Extreme];

    /// The string key shells use for this mode.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Mode::Original => "original",
            Mode::Party => "party",
            Mode::Couples => "couples",
            Mode::Extreme => "extreme",
        }
    }

    /// Parse a key, returning `None` for unknown keys.
    #[must_use]
    pub fn try_from_key(key: &str) -> Option<Mode> {
        Mode::ALL.into_iter().find(|mode| mode.key() == key)
    }

    /// Parse a key, falling back to [`Mode::Original`] for unknown keys.
    pub fn from_key(key: &str) -> Mode {
        match Mode::try_from_key(key) {
            Some(mode) => mode,
            None => {
                warn!(key, "unknown mode key, falling back to original");
                Mode::Original
            }
        }
    }

    /// Display metadata for this mode.
    #[must_use]
    pub const fn info(self) -> ModeInfo {
        match self {
            Mode::Original => ModeInfo {
                mode: self,
                name: "Original",
                accent_color: "#6C5CE7",
                content_warning: false,
                intensity: 1,
            },
            Mode::Party => ModeInfo {
                mode: self,
                name: "Party",
                accent_color: "#FD79A8",
                content_warning: false,
                intensity: 2,
            },
            Mode::Couples => ModeInfo {
                mode: self,
                name: "Couples",
                accent_color: "#E84393",
                content_warning: true,
                intensity: 3,
            },
            Mode::Extreme => ModeInfo {
                mode: self,
                name: "Extreme",
                accent_color: "#D63031",
                content_warning: true,
                intensity: 4,
            },
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl From<String> for Mode {
    fn from(key: String) -> Self {
        Mode::from_key(&key)
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.key().to_string()
    }
}

/// Display metadata for a mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeInfo {
    pub mode: Mode,
    pub name: &'static str,
    /// Hex accent color for the mode's screens.
    pub accent_color: &'static str,
    /// Shells show a warning before starting this mode.
    pub content_warning: bool,
    pub intensity: u8,
}
