//! Read-modify-write of the generated glue file

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::rule::{PatchOutcome, GLUE_CANVAS_FIX};

/// Glue file wasm-pack emits for the `wasm_demos` crate, relative to the
/// working directory.
pub const DEFAULT_ARTIFACT_PATH: &str = "pkg/wasm_demos_bg.js";

/// Printed on stdout once a patch run finishes.
pub const COMPLETION_NOTICE: &str = "Bugfix complete";

/// Summary of one run against an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchReport {
    pub path: PathBuf,
    pub outcome: PatchOutcome,
    /// Byte offset of the rewritten occurrence, when one was rewritten.
    pub offset: Option<usize>,
    /// Search literal occurrences still present after the run.
    pub remaining: usize,
    pub written: bool,
}

/// Patch the glue file at [`DEFAULT_ARTIFACT_PATH`].
pub fn patch() -> Result<PatchReport> {
    patch_file(DEFAULT_ARTIFACT_PATH)
}

/// Rewrite the first `instanceof CanvasRenderingContext2D` in `path`.
///
/// The file is always written back, even when nothing matched. A missing
/// file is an error and is never created.
pub fn patch_file(path: impl AsRef<Path>) -> Result<PatchReport> {
    let path = path.as_ref();
    let original = read_artifact(path)?;

    let patched = GLUE_CANVAS_FIX.apply(&original);
    log_outcome(path, patched.outcome);

    fs::write(path, patched.content.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = patched.content.len(), "wrote artifact");

    Ok(PatchReport {
        path: path.to_path_buf(),
        outcome: patched.outcome,
        offset: patched.offset,
        remaining: GLUE_CANVAS_FIX.occurrences(&patched.content),
        written: true,
    })
}

/// Classify `path` without touching it.
///
/// An `Applied` outcome here means the patch is still pending.
pub fn check_file(path: impl AsRef<Path>) -> Result<PatchReport> {
    let path = path.as_ref();
    let content = read_artifact(path)?;
    let outcome = GLUE_CANVAS_FIX.inspect(&content);

    Ok(PatchReport {
        path: path.to_path_buf(),
        outcome,
        offset: content.find(GLUE_CANVAS_FIX.search),
        remaining: GLUE_CANVAS_FIX.occurrences(&content),
        written: false,
    })
}

fn read_artifact(path: &Path) -> Result<String> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "read artifact");
    Ok(content)
}

fn log_outcome(path: &Path, outcome: PatchOutcome) {
    match outcome {
        PatchOutcome::Applied => tracing::info!(
            path = %path.display(),
            outcome = outcome.as_str(),
            "rewrote instanceof check"
        ),
        PatchOutcome::AlreadyApplied => tracing::info!(
            path = %path.display(),
            outcome = outcome.as_str(),
            "artifact already patched"
        ),
        PatchOutcome::NotFound => tracing::warn!(
            path = %path.display(),
            outcome = outcome.as_str(),
            search = GLUE_CANVAS_FIX.search,
            "search literal not found; leaving content unchanged"
        ),
    }
}
