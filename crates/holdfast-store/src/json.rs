//! JSON file implementation of the Storage trait.
//!
//! This is the primary durable backend. The document is persisted as
//! pretty-printed JSON at a single path fixed at construction, and every
//! store goes through a sibling temporary file followed by an atomic
//! rename, so a reader observes either the old or the new complete
//! document, never a truncation.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use holdfast_core::Document;
use serde_json::Value;

use crate::error::{Result, StoreError};
use crate::traits::Storage;

/// JSON-file-backed storage strategy.
///
/// The path is fixed at construction and never changes. Nothing is
/// cached: every `load_data` re-reads the file, so modifications made
/// by other processes are observed. Parent directories are not created
/// implicitly; storing under a missing directory fails with
/// [`StoreError::Path`].
///
/// # Known limitation
///
/// Two concurrent writers to the same path are not coordinated. Each
/// store is atomic on its own, but concurrent `update_data` calls race
/// last-writer-wins on the final rename; there is no advisory locking
/// and no version check.
pub struct JsonStorage {
    /// Target path of the persisted document.
    path: PathBuf,
    /// Sibling path used for atomic writes.
    tmp_path: PathBuf,
}

impl JsonStorage {
    /// Create a strategy backed by the given file path.
    ///
    /// The file itself may not exist yet; `load_data` treats that as an
    /// empty document.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tmp_path = tmp_sibling(&path);
        Self { path, tmp_path }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `<name>.tmp` next to the target, so the rename stays on one filesystem.
fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("document"));
    name.push(".tmp");
    path.with_file_name(name)
}

impl Storage for JsonStorage {
    fn store_data(&self, document: &Document) -> Result<()> {
        let text = serde_json::to_string_pretty(document)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        fs::write(&self.tmp_path, text).map_err(|e| StoreError::path(&self.tmp_path, e))?;
        fs::rename(&self.tmp_path, &self.path).map_err(|e| StoreError::path(&self.path, e))?;

        tracing::debug!(path = %self.path.display(), "document snapshot written");
        Ok(())
    }

    fn load_data(&self) -> Result<Document> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            // First run: no file yet means an empty document.
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => return Err(StoreError::path(&self.path, e)),
        };

        // A blank file holds no document yet, same as a missing one.
        if text.trim().is_empty() {
            return Ok(Document::new());
        }

        let value: Value =
            serde_json::from_str(&text).map_err(|e| StoreError::format(&self.path, e))?;
        Document::try_from(value).map_err(|e| StoreError::format(&self.path, e))
    }

    fn delete_data(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "document removed");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::path(&self.path, e)),
        }
    }
}
