//! In-memory implementation of the Storage trait.
//!
//! This is primarily for testing and ephemeral state. It has the same
//! semantics as the file backend but keeps the document in process
//! memory with no persistence; everything is lost on drop.

use std::sync::RwLock;

use holdfast_core::Document;

use crate::error::Result;
use crate::traits::Storage;

/// In-memory storage strategy.
///
/// Created empty; populated by `store_data`; cleared by `delete_data`.
/// Thread-safe via RwLock.
pub struct MemoryStorage {
    data: RwLock<Document>,
}

impl MemoryStorage {
    /// Create a new empty in-memory strategy.
    pub fn new() -> Self {
        Self {
            data: RwLock::new(Document::new()),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn store_data(&self, document: &Document) -> Result<()> {
        *self.data.write().unwrap() = document.clone();
        Ok(())
    }

    fn load_data(&self) -> Result<Document> {
        Ok(self.data.read().unwrap().clone())
    }

    fn delete_data(&self) -> Result<()> {
        *self.data.write().unwrap() = Document::new();
        Ok(())
    }
}
