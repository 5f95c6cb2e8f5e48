//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a tempdir-rooted home for
//! file-backed strategies and a couple of canned documents.

use std::path::{Path, PathBuf};

use holdfast::DataStore;
use holdfast_core::Document;
use holdfast_store::{JsonStorage, MemoryStorage};
use serde_json::json;
use tempfile::TempDir;

/// A fixture owning a temporary directory for file-backed storage.
///
/// The directory is removed when the fixture drops.
pub struct StorageFixture {
    dir: TempDir,
}

impl StorageFixture {
    /// Create a fixture with a fresh temporary directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create fixture tempdir"),
        }
    }

    /// Root of the fixture directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of a named document inside the fixture directory.
    pub fn document_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// A file-backed strategy rooted in the fixture directory.
    pub fn json_storage(&self, name: &str) -> JsonStorage {
        JsonStorage::new(self.document_path(name))
    }

    /// A data store over a file-backed strategy in the fixture directory.
    pub fn json_store(&self, name: &str) -> DataStore<JsonStorage> {
        DataStore::new(self.json_storage(name))
    }

    /// A data store over an in-memory strategy.
    pub fn memory_store(&self) -> DataStore<MemoryStorage> {
        DataStore::new(MemoryStorage::new())
    }
}

impl Default for StorageFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A small flat document.
pub fn sample_document() -> Document {
    Document::try_from(json!({
        "station": "A-12",
        "depth_m": 14.5,
        "flagged": false,
    }))
    .expect("sample document is a mapping")
}

/// A document with nested mappings and sequences.
pub fn nested_document() -> Document {
    Document::try_from(json!({
        "survey": {
            "site": "reef-2",
            "frames": [10, 20, 30],
        },
        "operators": ["kb", "mv"],
        "reviewed": null,
    }))
    .expect("nested document is a mapping")
}
