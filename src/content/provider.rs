//! Content sources.
//!
//! The engine never hardcodes prompt text. It asks a [`ContentSource`] for a
//! random prompt, passing the session's exclusion set so already-shown
//! prompts are skipped until a bucket runs dry.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use crate::core::GameRng;

use super::mode::Mode;
use super::prompt::{BucketKey, ExclusionSet, Prompt, PromptId, PromptKind, PromptSpec};

/// Supplies prompts for a (mode, kind) pair.
///
/// ## Implementation Notes
///
/// - Prompts in `excluded` for the resolved bucket should be skipped
/// - An exhausted bucket recycles: pick from the whole bucket again
/// - Return `None` only when there is no content at all for the request
pub trait ContentSource {
    fn get_random(
        &self,
        mode: Mode,
        kind: PromptKind,
        excluded: &ExclusionSet,
        rng: &mut GameRng,
    ) -> Option<Prompt>;
}

impl<T: ContentSource + ?Sized> ContentSource for Box<T> {
    fn get_random(
        &self,
        mode: Mode,
        kind: PromptKind,
        excluded: &ExclusionSet,
        rng: &mut GameRng,
    ) -> Option<Prompt> {
        (**self).get_random(mode, kind, excluded, rng)
    }
}

/// In-memory prompt buckets loaded at construction.
///
/// ## Example
///
/// ```
/// use party_engine::content::{ContentSource, ExclusionSet, Mode, PromptKind, StaticContentProvider};
/// use party_engine::core::GameRng;
///
/// let provider = StaticContentProvider::new()
///     .with_prompt(Mode::Original, PromptKind::Dare, "Do ten push-ups")
///     .with_prompt(Mode::Original, PromptKind::Truth, "What is your worst habit?");
///
/// let mut rng = GameRng::new(42);
/// // No party bucket, so the original dares are used.
/// let prompt = provider
///     .get_random(Mode::Party, PromptKind::Dare, &ExclusionSet::new(), &mut rng)
///     .unwrap();
/// assert_eq!(prompt.text, "Do ten push-ups");
/// assert_eq!(prompt.mode, Mode::Original);
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticContentProvider {
    buckets: FxHashMap<BucketKey, Vec<Prompt>>,
}

impl StaticContentProvider {
    /// Create an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a provider from content pack entries, in order.
    pub fn from_specs(specs: impl IntoIterator<Item = PromptSpec>) -> Self {
        let mut provider = Self::new();
        for spec in specs {
            provider.add(spec.mode, spec.kind, spec.text);
        }
        provider
    }

    /// Add a prompt with an auto-assigned id. Returns the assigned id.
    ///
    /// Ids count up from 0 within each bucket.
    pub fn add(&mut self, mode: Mode, kind: PromptKind, text: impl Into<String>) -> PromptId {
        let bucket = self.buckets.entry(BucketKey::new(mode, kind)).or_default();
        let id = PromptId::new(bucket.len() as u32);
        bucket.push(Prompt {
            id,
            kind,
            mode,
            text: text.into(),
        });
        id
    }

    /// Add a prompt (builder pattern).
    #[must_use]
    pub fn with_prompt(mut self, mode: Mode, kind: PromptKind, text: impl Into<String>) -> Self {
        self.add(mode, kind, text);
        self
    }

    /// Prompts in one bucket, in id order.
    #[must_use]
    pub fn bucket(&self, key: BucketKey) -> &[Prompt] {
        self.buckets.get(&key).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn bucket_len(&self, key: BucketKey) -> usize {
        self.bucket(key).len()
    }

    /// Total prompts across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Modes with at least one prompt, sorted.
    #[must_use]
    pub fn modes(&self) -> Vec<Mode> {
        let mut modes: Vec<Mode> = self
            .buckets
            .iter()
            .filter(|(_, prompts)| !prompts.is_empty())
            .map(|(key, _)| key.mode)
            .collect();
        modes.sort();
        modes.dedup();
        modes
    }

    /// The bucket a request is served from: the exact mode if it has
    /// prompts of this kind, otherwise the original mode.
    fn resolve(&self, mode: Mode, kind: PromptKind) -> Option<(BucketKey, &[Prompt])> {
        let key = BucketKey::new(mode, kind);
        let prompts = self.bucket(key);
        if !prompts.is_empty() {
            return Some((key, prompts));
        }

        if mode == Mode::Original {
            return None;
        }

        warn!(%key, "no prompts for mode, falling back to original");
        let fallback = BucketKey::new(Mode::Original, kind);
        let prompts = self.bucket(fallback);
        (!prompts.is_empty()).then_some((fallback, prompts))
    }
}

impl ContentSource for StaticContentProvider {
    fn get_random(
        &self,
        mode: Mode,
        kind: PromptKind,
        excluded: &ExclusionSet,
        rng: &mut GameRng,
    ) -> Option<Prompt> {
        let (key, prompts) = self.resolve(mode, kind)?;

        let fresh: Vec<&Prompt> = match excluded.for_bucket(key) {
            Some(shown) => prompts.iter().filter(|p| !shown.contains(&p.id)).collect(),
            None => prompts.iter().collect(),
        };

        if fresh.is_empty() {
            debug!(%key, size = prompts.len(), "bucket exhausted, recycling");
            return rng.choose(prompts).cloned();
        }

        rng.choose(&fresh).map(|p| (*p).clone())
    }
}
