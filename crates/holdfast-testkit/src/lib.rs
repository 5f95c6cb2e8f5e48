//! # Holdfast Testkit
//!
//! Testing utilities for the holdfast workspace.
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use holdfast_testkit::generators::document;
//!
//! proptest! {
//!     #[test]
//!     fn round_trips(doc in document(8)) {
//!         let text = serde_json::to_string(&doc).unwrap();
//!         let back = serde_json::from_str(&text).unwrap();
//!         prop_assert_eq!(doc, back);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! Quickly set up storage scenarios:
//!
//! ```rust
//! use holdfast_testkit::fixtures::{sample_document, StorageFixture};
//!
//! let fixture = StorageFixture::new();
//! let store = fixture.json_store("data.json");
//! store.store_data(&sample_document()).unwrap();
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{nested_document, sample_document, StorageFixture};
pub use generators::{document, key, scalar, value};
