//! Error types for holdfast core.

use thiserror::Error;

/// Errors that can occur when constructing a document.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document root must be a mapping, got {0}")]
    NotAMapping(&'static str),
}
