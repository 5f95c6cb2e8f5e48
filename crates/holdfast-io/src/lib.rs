//! # Holdfast IO
//!
//! Filesystem utilities that sit next to the storage layer: directory
//! and file enumeration, directory creation and probing, and loading
//! structured config files into the shared [`Document`] type.
//!
//! ## Key Functions
//!
//! - [`file_index`] - Recursive extension-filtered file index
//! - [`list_directories`] / [`list_files_with_extension`] - One-level listings
//! - [`ensure_directory`] / [`ensure_subdirectory`] - Create-if-missing
//! - [`directory_writable`] - Existence and writability probe
//! - [`load_toml_document`] / [`load_json_document`] - Config into a document
//!
//! All functions are synchronous, bounded filesystem calls that either
//! succeed or surface a typed [`IoError`]; none of them swallow
//! failures.
//!
//! [`Document`]: holdfast_core::Document

pub mod config;
pub mod dirs;
pub mod error;
pub mod listing;

pub use config::{load_json_document, load_toml_document};
pub use dirs::{directory_writable, ensure_directory, ensure_subdirectory};
pub use error::{IoError, Result};
pub use listing::{file_index, list_directories, list_files_with_extension};
