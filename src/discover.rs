//! Candidate discovery — every regular file under the source root.

use anyhow::{bail, Context, Result};
use std::path::{Component, Path, PathBuf};

/// A file found under the source root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    /// Path below the root, `/`-separated on every platform.
    pub relative: String,
}

/// Walk `root` recursively and return its files sorted by relative path.
/// An unreadable directory below the root fails the whole walk.
pub fn discover(root: &Path) -> Result<Vec<Candidate>> {
    if !root.is_dir() {
        bail!("cannot open source directory: {}", root.display());
    }
    let root_str = root
        .to_str()
        .with_context(|| format!("source directory is not valid UTF-8: {}", root.display()))?;
    let pattern = format!("{}/**/*", glob::Pattern::escape(root_str));

    let mut candidates = Vec::new();
    for entry in glob::glob(&pattern)
        .with_context(|| format!("invalid source directory pattern: {}", pattern))?
    {
        let path = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if !path.is_file() {
            continue;
        }
        if let Some(relative) = relative_path(root, &path) {
            candidates.push(Candidate { path, relative });
        }
    }

    // Sort for deterministic output
    candidates.sort_by(|a, b| a.relative.cmp(&b.relative));
    candidates.dedup();
    Ok(candidates)
}

fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
