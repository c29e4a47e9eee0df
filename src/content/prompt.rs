//! Prompts and the per-session record of which prompts were shown.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::mode::Mode;

/// Prompt identifier, unique within its bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PromptId(pub u32);

impl PromptId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PromptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Prompt({})", self.0)
    }
}

/// What the victim chose to face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    Truth,
    Dare,
    /// Trivia-style statement.
    Statement,
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PromptKind::Truth => "truth",
            PromptKind::Dare => "dare",
            PromptKind::Statement => "statement",
        })
    }
}

/// A (mode, kind) pair naming one bucket of prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BucketKey {
    pub mode: Mode,
    pub kind: PromptKind,
}

impl BucketKey {
    #[must_use]
    pub const fn new(mode: Mode, kind: PromptKind) -> Self {
        Self { mode, kind }
    }
}

impl std::fmt::Display for BucketKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.mode, self.kind)
    }
}

/// A single prompt. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Prompt {
    pub id: PromptId,
    pub kind: PromptKind,
    pub mode: Mode,
    pub text: String,
}

impl Prompt {
    /// The bucket this prompt belongs to.
    #[must_use]
    pub fn bucket(&self) -> BucketKey {
        BucketKey::new(self.mode, self.kind)
    }
}

/// A prompt as written in a content pack, before ids are assigned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSpec {
    pub mode: Mode,
    pub kind: PromptKind,
    pub text: String,
}

impl PromptSpec {
    pub fn new(mode: Mode, kind: PromptKind, text: impl Into<String>) -> Self {
        Self {
            mode,
            kind,
            text: text.into(),
        }
    }
}

/// Prompt ids already shown this session, tracked per bucket.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    shown: FxHashMap<BucketKey, FxHashSet<PromptId>>,
}

impl ExclusionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a prompt as shown. Returns false if it was already recorded.
    pub fn insert(&mut self, prompt: &Prompt) -> bool {
        self.shown.entry(prompt.bucket()).or_default().insert(prompt.id)
    }

    #[must_use]
    pub fn contains(&self, bucket: BucketKey, id: PromptId) -> bool {
        self.shown.get(&bucket).is_some_and(|ids| ids.contains(&id))
    }

    /// Ids shown from one bucket, if any.
    #[must_use]
    pub fn for_bucket(&self, bucket: BucketKey) -> Option<&FxHashSet<PromptId>> {
        self.shown.get(&bucket)
    }

    /// Number of ids shown from one bucket.
    #[must_use]
    pub fn bucket_len(&self, bucket: BucketKey) -> usize {
        self.shown.get(&bucket).map_or(0, |ids| ids.len())
    }

    /// Total shown across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shown.values().map(|ids| ids.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.shown.clear();
    }
}
