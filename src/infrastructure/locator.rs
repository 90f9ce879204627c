//! Readme discovery and file access
//!
//! A readme governs every specification below it, so discovery walks up
//! parent directories until a `readme.md` appears.

use crate::error::{Result, TagmarkError};
use std::fs;
use std::path::{Path, PathBuf};

const README_FILE_NAME: &str = "readme.md";

/// Find the governing `readme.md` by walking up from `start`.
/// Returns `None` when the filesystem root is reached without a hit.
pub fn find_readme(start: &Path) -> Option<PathBuf> {
    // resolve relative starts so the walk has parents to climb
    let mut current = start
        .canonicalize()
        .unwrap_or_else(|_| start.to_path_buf());
    loop {
        let candidate = current.join(README_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Resolve a CLI argument to a readme file: a file path is taken as-is, a
/// directory starts a walk-up search.
pub fn resolve(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    find_readme(path).ok_or_else(|| TagmarkError::ReadmeNotFound(path.to_path_buf()))
}

/// Read a readme into memory.
pub fn load(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write a readme back to disk.
pub fn save(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    Ok(())
}
