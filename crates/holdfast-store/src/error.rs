//! Error types for the store module.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// An opaque error raised by a caller-supplied update transform.
///
/// Carried through [`StoreError::Transform`] unchanged, so callers can
/// downcast it back to the concrete type they raised.
pub type TransformError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing medium is unreachable: missing parent directory,
    /// permission denied, unreadable file.
    #[error("cannot reach {}: {source}", path.display())]
    Path {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The medium has content, but it does not parse into a document.
    #[error("cannot parse {}: {reason}", path.display())]
    Format { path: PathBuf, reason: String },

    /// The document contains a value the backing format cannot encode.
    #[error("cannot encode document: {0}")]
    Serialization(String),

    /// A caller-supplied update transform failed.
    #[error("update transform failed: {0}")]
    Transform(#[source] TransformError),
}

impl StoreError {
    pub(crate) fn path(path: &Path, source: io::Error) -> Self {
        Self::Path {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn format(path: &Path, reason: impl ToString) -> Self {
        Self::Format {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
