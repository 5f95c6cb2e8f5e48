//! Error types for the io utilities.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in the filesystem utilities.
#[derive(Debug, Error)]
pub enum IoError {
    /// The given path is not an existing directory.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// The path could not be read or created.
    #[error("cannot access {}: {source}", path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but did not parse into a document.
    #[error("cannot parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },
}

impl IoError {
    pub(crate) fn access(path: &Path, source: io::Error) -> Self {
        Self::Access {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, reason: impl ToString) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for the io utilities.
pub type Result<T> = std::result::Result<T, IoError>;
