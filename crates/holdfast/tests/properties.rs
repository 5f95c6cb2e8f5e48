//! End-to-end properties of the storage contract, exercised through the
//! public API: round-trips, first-run loads, idempotent deletes, update
//! composition, interrupted writes, and façade transparency.

use std::fs;

use holdfast::{DataStore, Document, JsonStorage, Storage, StoreError};
use holdfast_testkit::fixtures::{nested_document, sample_document, StorageFixture};
use holdfast_testkit::generators::{document, key};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn round_trip_preserves_structure_and_order() -> anyhow::Result<()> {
    let fixture = StorageFixture::new();
    let store = fixture.json_store("data.json");
    let doc = nested_document();

    store.store_data(&doc)?;
    let loaded = store.load_data()?;

    assert_eq!(loaded, doc);
    let keys: Vec<_> = loaded.keys().cloned().collect();
    assert_eq!(keys, ["survey", "operators", "reviewed"]);
    Ok(())
}

#[test]
fn persisted_form_is_human_readable() -> anyhow::Result<()> {
    let fixture = StorageFixture::new();
    let store = fixture.json_store("data.json");
    store.store_data(&sample_document())?;

    let text = fs::read_to_string(fixture.document_path("data.json"))?;
    assert!(text.starts_with("{\n"));
    assert!(text.contains("\"station\""));
    Ok(())
}

#[test]
fn first_run_load_is_empty_not_an_error() {
    let fixture = StorageFixture::new();
    let store = fixture.json_store("never_written.json");
    assert!(store.load_data().unwrap().is_empty());
}

#[test]
fn delete_is_idempotent() -> anyhow::Result<()> {
    let fixture = StorageFixture::new();
    let store = fixture.json_store("data.json");
    store.store_data(&sample_document())?;

    store.delete_data()?;
    store.delete_data()?;
    assert!(store.load_data()?.is_empty());
    Ok(())
}

#[test]
fn update_composes_with_prior_state() -> anyhow::Result<()> {
    let fixture = StorageFixture::new();
    let store = fixture.json_store("data.json");
    store.store_data(&Document::try_from(json!({"a": 1}))?)?;

    store.update_data(|mut d| {
        d.insert("b", 2);
        Ok(d)
    })?;

    assert_eq!(
        store.load_data()?,
        Document::try_from(json!({"a": 1, "b": 2}))?
    );
    Ok(())
}

#[test]
fn failed_update_persists_nothing() -> anyhow::Result<()> {
    let fixture = StorageFixture::new();
    let store = fixture.json_store("data.json");
    store.store_data(&sample_document())?;

    let err = store
        .update_data(|_| Err("validation failed".into()))
        .unwrap_err();
    assert!(matches!(err, StoreError::Transform(_)));
    assert_eq!(store.load_data()?, sample_document());
    Ok(())
}

/// A writer that dies between writing its temporary file and renaming
/// it must leave the previously stored document fully observable.
#[test]
fn interrupted_store_never_exposes_a_partial_document() -> anyhow::Result<()> {
    let fixture = StorageFixture::new();
    let store = fixture.json_store("data.json");
    store.store_data(&sample_document())?;

    let tmp = fixture.document_path("data.json.tmp");
    fs::write(&tmp, "{\"half\": ")?;
    assert_eq!(store.load_data()?, sample_document());

    // A later complete store wins over the abandoned write.
    store.store_data(&nested_document())?;
    assert_eq!(store.load_data()?, nested_document());
    Ok(())
}

/// Operations a caller can issue against a store.
#[derive(Debug, Clone)]
enum Op {
    Store(Document),
    Insert(String, i64),
    Delete,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        document(4).prop_map(Op::Store),
        (key(), any::<i64>()).prop_map(|(k, v)| Op::Insert(k, v)),
        Just(Op::Delete),
    ]
}

fn apply_to_strategy<S: Storage>(storage: &S, op: &Op) {
    match op {
        Op::Store(doc) => storage.store_data(doc).unwrap(),
        Op::Insert(k, v) => {
            let (k, v) = (k.clone(), *v);
            storage
                .update_data(move |mut d| {
                    d.insert(k, v);
                    Ok(d)
                })
                .unwrap();
        }
        Op::Delete => storage.delete_data().unwrap(),
    }
}

fn apply_to_facade<S: Storage>(store: &DataStore<S>, op: &Op) {
    match op {
        Op::Store(doc) => store.store_data(doc).unwrap(),
        Op::Insert(k, v) => {
            let (k, v) = (k.clone(), *v);
            store
                .update_data(move |mut d| {
                    d.insert(k, v);
                    Ok(d)
                })
                .unwrap();
        }
        Op::Delete => store.delete_data().unwrap(),
    }
}

proptest! {
    /// Storing any generated document and loading it back is lossless.
    #[test]
    fn prop_store_load_round_trip(doc in document(8)) {
        let fixture = StorageFixture::new();
        let store = fixture.json_store("data.json");

        store.store_data(&doc).unwrap();
        prop_assert_eq!(store.load_data().unwrap(), doc);
    }

    /// Any operation sequence through the façade produces the same
    /// observable state as the same sequence on a bare strategy.
    #[test]
    fn prop_facade_is_transparent(ops in prop::collection::vec(op(), 0..10)) {
        let fixture = StorageFixture::new();
        let facade = fixture.json_store("via_facade.json");
        let bare = fixture.json_storage("bare.json");

        for op in &ops {
            apply_to_facade(&facade, op);
            apply_to_strategy(&bare, op);
            prop_assert_eq!(facade.load_data().unwrap(), bare.load_data().unwrap());
        }
    }
}
