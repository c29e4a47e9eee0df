//! Prompt content: modes, buckets, and the sources that serve them.
//!
//! Prompts live in buckets keyed by (mode, kind). Buckets are disjoint and
//! static; which prompts a session has already shown is tracked separately
//! in an [`ExclusionSet`].

mod mode;
mod prompt;
mod provider;

pub use mode::{Mode, ModeInfo};
pub use prompt::{BucketKey, ExclusionSet, Prompt, PromptId, PromptKind, PromptSpec};
pub use provider::{ContentSource, StaticContentProvider};
