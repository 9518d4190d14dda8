//! Repository layout: where the skills collection and the plugin registry live.
//!
//! The root comes from an explicit path, else `STITCH_REPO_ROOT`, else the current directory.
//! Everything else sits at fixed locations below it.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Env var overriding the repository root.
pub const REPO_ROOT_ENV: &str = "STITCH_REPO_ROOT";

/// Skills collection, relative to the repository root.
pub const SKILLS_DIR: &str = "skills";

/// Plugin registry, relative to the repository root.
pub const REGISTRY_PATH: &str = ".claude-plugin/marketplace.json";

/// Resolved locations the validator reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLayout {
    pub root: PathBuf,
    pub skills_dir: PathBuf,
    pub registry_path: PathBuf,
}

impl RepoLayout {
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            skills_dir: root.join(SKILLS_DIR),
            registry_path: root.join(REGISTRY_PATH),
            root,
        }
    }
}

/// Env override, ignoring unset, empty or whitespace-only values.
fn repo_root_from_env() -> Option<PathBuf> {
    std::env::var(REPO_ROOT_ENV).ok().and_then(|s| {
        let t = s.trim();
        if t.is_empty() {
            None
        } else {
            Some(PathBuf::from(t))
        }
    })
}

/// Pick the repository root: explicit path, then `STITCH_REPO_ROOT`, then the current directory.
pub fn resolve_repo_root(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(p) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(p);
    }
    if let Some(p) = repo_root_from_env() {
        log::debug!("using repository root from {}: {}", REPO_ROOT_ENV, p.display());
        return Ok(p);
    }
    std::env::current_dir().context("resolving current directory as repository root")
}

/// `path` relative to the repository root, for messages. Falls back to the full path.
pub fn display_relative<'a>(layout: &RepoLayout, path: &'a Path) -> std::borrow::Cow<'a, str> {
    match path.strip_prefix(&layout.root) {
        Ok(rel) => rel.to_string_lossy(),
        Err(_) => path.to_string_lossy(),
    }
}
