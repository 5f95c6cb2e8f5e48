//! # Holdfast Core
//!
//! Core primitives shared by the holdfast workspace: the [`Document`]
//! type and its invariants.
//!
//! ## Overview
//!
//! A [`Document`] is the single structured mapping a storage strategy
//! manages: string keys to values (strings, numbers, booleans, null,
//! nested mappings and sequences). The top level is always a mapping,
//! never a bare scalar or sequence, and the invariant is enforced by
//! the type itself: the only fallible way in is [`Document::try_from`]
//! on an arbitrary value, which rejects non-mapping roots.
//!
//! Key order is preserved through serialization round-trips.
//!
//! ## Usage
//!
//! ```rust
//! use holdfast_core::Document;
//! use serde_json::json;
//!
//! let mut doc = Document::new();
//! doc.insert("site", "transect-4");
//! doc.insert("depth_m", 12.5);
//!
//! let nested = Document::try_from(json!({"a": 1, "b": {"c": true}})).unwrap();
//! assert_eq!(nested.get("a"), Some(&json!(1)));
//! ```

pub mod document;
pub mod error;

pub use document::Document;
pub use error::DocumentError;
