//! Directory creation and probing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IoError, Result};

/// Create the directory (and any missing parents) if it does not exist.
///
/// Returns the path unchanged.
pub fn ensure_directory(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| IoError::access(path, e))?;
        tracing::info!(path = %path.display(), "directory created");
    }
    Ok(path.to_path_buf())
}

/// Create `name` under an existing `parent` directory if missing.
///
/// Unlike [`ensure_directory`], the parent must already exist.
pub fn ensure_subdirectory(parent: &Path, name: &str) -> Result<PathBuf> {
    if !parent.is_dir() {
        return Err(IoError::NotADirectory(parent.to_path_buf()));
    }

    let sub = parent.join(name);
    if !sub.exists() {
        fs::create_dir_all(&sub).map_err(|e| IoError::access(&sub, e))?;
        tracing::info!(path = %sub.display(), "subdirectory created");
    }
    Ok(sub)
}

/// Probe whether a directory exists and is writable.
///
/// Returns `None` if the path does not exist or is not a directory,
/// otherwise `Some` with the writability of its permission bits.
pub fn directory_writable(path: &Path) -> Option<bool> {
    let meta = fs::metadata(path).ok()?;
    if !meta.is_dir() {
        return None;
    }
    Some(!meta.permissions().readonly())
}
