//! The data store: a storage-agnostic handle over one strategy.
//!
//! The store holds exactly one strategy instance for its entire
//! lifetime and delegates every operation to it unmodified. Its sole
//! value is decoupling call sites from the concrete strategy type, so
//! the backing medium can be swapped by constructing a different
//! strategy.

use holdfast_core::Document;
use holdfast_store::{Result, Storage, TransformError};

/// Caller-facing coordinator over a single injected storage strategy.
///
/// Adds no logic, no caching, and no validation of its own; every
/// method is a direct delegation, and errors are forwarded untouched.
pub struct DataStore<S: Storage> {
    strategy: S,
}

impl<S: Storage> DataStore<S> {
    /// Create a data store over the given strategy.
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Borrow the injected strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Consume the store, recovering the injected strategy.
    pub fn into_strategy(self) -> S {
        self.strategy
    }

    /// Delegates to [`Storage::store_data`].
    pub fn store_data(&self, document: &Document) -> Result<()> {
        self.strategy.store_data(document)
    }

    /// Delegates to [`Storage::load_data`].
    pub fn load_data(&self) -> Result<Document> {
        self.strategy.load_data()
    }

    /// Delegates to [`Storage::update_data`].
    pub fn update_data<F>(&self, transform: F) -> Result<Document>
    where
        F: FnOnce(Document) -> std::result::Result<Document, TransformError>,
    {
        self.strategy.update_data(transform)
    }

    /// Delegates to [`Storage::delete_data`].
    pub fn delete_data(&self) -> Result<()> {
        self.strategy.delete_data()
    }
}
