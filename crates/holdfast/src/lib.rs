//! # Holdfast
//!
//! Single-document persistence behind a storage-agnostic data store.
//!
//! ## Overview
//!
//! Holdfast manages one structured document per storage instance:
//!
//! - **Document**: an order-preserving mapping of string keys to
//!   structured values, the only entity managed
//! - **Storage strategies**: the four-operation contract (store, load,
//!   update, delete) with file-backed and in-memory implementations
//! - **Data store**: a façade holding exactly one injected strategy, so
//!   call sites never depend on the backing medium
//! - **IO utilities**: enumeration, directory management, and config
//!   loading around the storage layer
//!
//! ## Key Concepts
//!
//! - **One document per strategy**: no identity, no collections, no
//!   cross-document transactions.
//! - **First-run semantics**: an absent backing file loads as an empty
//!   document.
//! - **Atomic stores**: file-backed writes go through a temporary file
//!   and a rename; readers see the old or the new document, never a
//!   truncation.
//! - **Pure transforms**: updates apply a caller-supplied function from
//!   old document to new document, re-read from the current state.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use holdfast::{DataStore, Document, JsonStorage};
//!
//! let store = DataStore::new(JsonStorage::new("survey.json"));
//!
//! let mut doc = Document::new();
//! doc.insert("station", "A-12");
//! store.store_data(&doc).unwrap();
//!
//! store
//!     .update_data(|mut d| {
//!         d.insert("visited", true);
//!         Ok(d)
//!     })
//!     .unwrap();
//!
//! store.delete_data().unwrap();
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `holdfast::core` - The document type and its invariants
//! - `holdfast::store` - Storage strategies and errors
//! - `holdfast::io` - Filesystem and config utilities

pub mod datastore;

// Re-export component crates
pub use holdfast_core as core;
pub use holdfast_io as io;
pub use holdfast_store as store;

// Re-export main types for convenience
pub use datastore::DataStore;
pub use holdfast_core::{Document, DocumentError};
pub use holdfast_store::{
    JsonStorage, MemoryStorage, Result, Storage, StoreError, TransformError,
};
