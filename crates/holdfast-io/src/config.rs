//! Structured-config loading into the shared document type.
//!
//! Unlike the storage strategies, these loaders treat a missing file as
//! an error: a config that should exist is different from a document
//! that has not been stored yet.

use std::fs;
use std::path::Path;

use holdfast_core::Document;
use serde_json::Value;

use crate::error::{IoError, Result};

/// Load a JSON file into a document. The root must be a mapping.
pub fn load_json_document(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path).map_err(|e| IoError::access(path, e))?;
    let value: Value = serde_json::from_str(&text).map_err(|e| IoError::parse(path, e))?;
    Document::try_from(value).map_err(|e| IoError::parse(path, e))
}

/// Load a TOML file into a document.
///
/// TOML guarantees a table at the root, so the mapping invariant holds
/// by construction; values are carried over losslessly except datetimes,
/// which become strings.
pub fn load_toml_document(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path).map_err(|e| IoError::access(path, e))?;
    let table: toml::Table = text.parse().map_err(|e| IoError::parse(path, e))?;
    let value = serde_json::to_value(table).map_err(|e| IoError::parse(path, e))?;
    Document::try_from(value).map_err(|e| IoError::parse(path, e))
}
