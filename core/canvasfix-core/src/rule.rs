//! The canvas fixup rule and its first-match literal replace

use serde::{Deserialize, Serialize};

/// The one rewrite this crate knows about.
///
/// wasm-bindgen's glue guards `CanvasRenderingContext2D` casts with an
/// `instanceof` test; swapping in the Offscreen variant lets worker-side
/// contexts through. The replacement must never contain the search literal,
/// otherwise a second run would patch its own output.
pub const GLUE_CANVAS_FIX: PatchRule = PatchRule {
    search: "instanceof CanvasRenderingContext2D",
    replacement: "instanceof OffscreenCanvasRenderingContext2D",
};

/// A fixed literal find-and-replace pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchRule {
    pub search: &'static str,
    pub replacement: &'static str,
}

/// What applying a rule did to a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchOutcome {
    /// The first occurrence of the search literal was rewritten.
    Applied,
    /// No search literal left, but the replacement is there.
    AlreadyApplied,
    /// Neither literal appears in the text.
    NotFound,
}

impl PatchOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            PatchOutcome::Applied => "applied",
            PatchOutcome::AlreadyApplied => "already_applied",
            PatchOutcome::NotFound => "not_found",
        }
    }
}

/// Result of [`PatchRule::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patched {
    pub content: String,
    pub outcome: PatchOutcome,
    /// Byte offset of the rewritten occurrence.
    pub offset: Option<usize>,
}

impl PatchRule {
    /// Replace the first occurrence of `search`, leaving later ones alone.
    pub fn apply(&self, content: &str) -> Patched {
        match content.find(self.search) {
            Some(offset) => {
                let mut out = String::with_capacity(
                    content.len() - self.search.len() + self.replacement.len(),
                );
                out.push_str(&content[..offset]);
                out.push_str(self.replacement);
                out.push_str(&content[offset + self.search.len()..]);

                Patched {
                    content: out,
                    outcome: PatchOutcome::Applied,
                    offset: Some(offset),
                }
            }
            None => Patched {
                content: content.to_string(),
                outcome: self.classify_unmatched(content),
                offset: None,
            },
        }
    }

    /// Classify text without rewriting it.
    pub fn inspect(&self, content: &str) -> PatchOutcome {
        if content.contains(self.search) {
            PatchOutcome::Applied
        } else {
            self.classify_unmatched(content)
        }
    }

    /// Number of search literal occurrences in `content`.
    pub fn occurrences(&self, content: &str) -> usize {
        content.matches(self.search).count()
    }

    fn classify_unmatched(&self, content: &str) -> PatchOutcome {
        if content.contains(self.replacement) {
            PatchOutcome::AlreadyApplied
        } else {
            PatchOutcome::NotFound
        }
    }
}
