//! # Holdfast Store
//!
//! Storage strategies for holdfast. Provides a trait-based interface
//! for single-document persistence with JSON-file and in-memory
//! implementations.
//!
//! ## Overview
//!
//! The store module abstracts document persistence behind the
//! [`Storage`] trait, so callers never depend on a concrete backing
//! medium. The primary implementation is [`JsonStorage`], with
//! [`MemoryStorage`] for tests and ephemeral state.
//!
//! ## Key Types
//!
//! - [`Storage`] - The four-operation contract (store, load, update, delete)
//! - [`JsonStorage`] - File-backed persistence with atomic writes
//! - [`MemoryStorage`] - In-memory storage for tests
//! - [`StoreError`] - Path / Format / Serialization / Transform taxonomy
//!
//! ## Usage
//!
//! ```rust,no_run
//! use holdfast_core::Document;
//! use holdfast_store::{JsonStorage, Storage};
//!
//! let storage = JsonStorage::new("survey.json");
//!
//! let mut doc = Document::new();
//! doc.insert("station", "A-12");
//! storage.store_data(&doc).unwrap();
//!
//! storage
//!     .update_data(|mut d| {
//!         d.insert("visited", true);
//!         Ok(d)
//!     })
//!     .unwrap();
//! ```
//!
//! ## Design Notes
//!
//! - **Synchronous, blocking**: no async layer; every operation is a
//!   bounded local filesystem call completing on the calling thread.
//! - **First-run semantics**: a missing backing file loads as an empty
//!   document, never as an error.
//! - **Atomic stores**: `JsonStorage` writes to a sibling temporary file
//!   and renames over the target, so interrupted writes never expose a
//!   truncated document.
//! - **Uncoordinated writers**: concurrent processes updating the same
//!   path race last-writer-wins; see [`JsonStorage`] docs.

pub mod error;
pub mod json;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError, TransformError};
pub use json::JsonStorage;
pub use memory::MemoryStorage;
pub use traits::Storage;
