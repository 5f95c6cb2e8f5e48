//! Proptest generators for property-based testing.

use holdfast_core::Document;
use proptest::prelude::*;
use serde_json::Value;

/// Generate a document key.
pub fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,15}".prop_map(String::from)
}

/// Generate a scalar value.
///
/// Numbers are restricted to what the backing text format round-trips
/// exactly: integers and finite floats.
pub fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        proptest::num::f64::NORMAL.prop_map(Value::from),
        "[ -~]{0,32}".prop_map(Value::from),
    ]
}

/// Generate an arbitrary structured value: scalars, sequences, and
/// nested mappings, recursion-bounded.
pub fn value() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec((key(), inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

/// Generate a document with up to `max_keys` top-level entries.
pub fn document(max_keys: usize) -> impl Strategy<Value = Document> {
    prop::collection::vec((key(), value()), 0..=max_keys)
        .prop_map(|entries| entries.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_documents_serialize(doc in document(6)) {
            // Every generated document must be encodable; the storage
            // backends rely on this.
            let text = serde_json::to_string(&doc).unwrap();
            let back: Document = serde_json::from_str(&text).unwrap();
            prop_assert_eq!(back, doc);
        }
    }
}
