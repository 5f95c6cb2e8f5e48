//! Storage trait: the abstract contract for single-document persistence.
//!
//! This trait lets callers stay storage-agnostic. Implementations
//! include a JSON file backend (primary) and in-memory (for tests or
//! ephemeral state).

use holdfast_core::Document;

use crate::error::{Result, StoreError, TransformError};

/// The four-operation persistence contract for one backing medium.
///
/// Each strategy instance manages exactly one document. The concrete
/// variant is selected at construction time by which backing medium is
/// supplied; callers program against this trait.
///
/// # Design Notes
///
/// - **Synchronous**: every operation runs to completion on the calling
///   thread. No background work, no cancellation, no timeouts.
/// - **First-run loads**: an absent medium is not an error; `load_data`
///   returns an empty document.
/// - **Idempotent deletes**: deleting an already-absent medium succeeds.
/// - **Read-modify-write updates**: `update_data` always re-reads the
///   current state before applying the transform, so the transform sees
///   the most recently persisted value rather than a stale cache.
pub trait Storage {
    /// Replace the entire managed document.
    ///
    /// Persisted variants write durably before returning. Fails with
    /// [`StoreError::Serialization`] if the document contains a value
    /// the backing format cannot encode.
    fn store_data(&self, document: &Document) -> Result<()>;

    /// Return the current document.
    ///
    /// Persisted variants re-read the medium on every call, so external
    /// modifications are observed. An absent medium yields an empty
    /// document, not an error.
    fn load_data(&self) -> Result<Document>;

    /// Remove the document. Deleting an absent medium succeeds.
    fn delete_data(&self) -> Result<()>;

    /// Read the current document, apply `transform`, and store the
    /// result, returning the stored document.
    ///
    /// The transform is called at most once. If it fails, its error is
    /// surfaced as [`StoreError::Transform`] and nothing is persisted.
    ///
    /// The default body composes `load_data`, the transform, and
    /// `store_data`; implementations may override it when the medium
    /// offers something better.
    fn update_data<F>(&self, transform: F) -> Result<Document>
    where
        F: FnOnce(Document) -> std::result::Result<Document, TransformError>,
    {
        let current = self.load_data()?;
        let next = transform(current).map_err(StoreError::Transform)?;
        self.store_data(&next)?;
        Ok(next)
    }
}
