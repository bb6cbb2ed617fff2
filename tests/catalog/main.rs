//! Catalog integration tests over a real JSON document.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use item_catalog::bus::StoreEvent;
use item_catalog::{Catalog, CatalogError, ItemQuery, ItemStore, JsonFileStore, StorageError};
use serde_json::json;

fn catalog_in(dir: &tempfile::TempDir) -> Catalog<JsonFileStore> {
    Catalog::new(JsonFileStore::new(dir.path().join("items.json")))
}

#[test]
fn items_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let first = catalog_in(&dir);
    let a = first
        .create(&json!({ "name": "Anvil", "category": "Tools", "price": 99.0 }))
        .unwrap();
    drop(first);

    let second = catalog_in(&dir);
    let b = second
        .create(&json!({ "name": "Bellows", "category": "Tools" }))
        .unwrap();
    assert!(b.id > a.id);

    let page = second.query(&ItemQuery::all()).unwrap();
    assert_eq!(page.items, vec![a, b]);
}

#[test]
fn ids_stay_above_ids_already_in_the_document() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("items.json"),
        r#"[{ "id": 99999999999999, "name": "Far future", "category": "Misc", "price": null }]"#,
    )
    .unwrap();

    let catalog = catalog_in(&dir);
    let item = catalog
        .create(&json!({ "name": "Now", "category": "Misc" }))
        .unwrap();
    assert_eq!(item.id, 100_000_000_000_000);
}

#[test]
fn failed_validation_leaves_document_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog_in(&dir);
    catalog.query(&ItemQuery::all()).unwrap();
    let before = catalog.store().revision().unwrap();

    let err = catalog
        .create(&json!({ "name": "Book", "category": "   " }))
        .unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert_eq!(catalog.store().revision().unwrap(), before);
}

#[test]
fn malformed_document_surfaces_as_storage_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("items.json"), "[{").unwrap();
    let catalog = catalog_in(&dir);

    let err = catalog.stats().unwrap_err();
    assert!(matches!(
        err,
        CatalogError::Storage(StorageError::Malformed { .. })
    ));
    assert_eq!(err.status_code(), 500);
    assert!(!catalog.stats_cache().is_cached());
}

#[test]
fn writes_are_announced_on_the_bus() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog_in(&dir);
    let created = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&created);
    catalog.bus().subscribe(Arc::new(move |event: &StoreEvent| {
        if matches!(event, StoreEvent::ItemCreated { .. }) {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }));

    for name in ["One", "Two", "Three"] {
        catalog
            .create(&json!({ "name": name, "category": "Count" }))
            .unwrap();
    }
    assert_eq!(created.load(Ordering::SeqCst), 3);
}

#[test]
fn stats_track_the_document() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = catalog_in(&dir);

    let empty = catalog.stats().unwrap();
    assert_eq!(empty.total, 0);
    assert_eq!(catalog.stats().unwrap().cached_at, empty.cached_at);

    catalog
        .create(&json!({ "name": "Priced", "category": "Misc", "price": 30 }))
        .unwrap();
    catalog
        .create(&json!({ "name": "Unpriced", "category": "Misc" }))
        .unwrap();

    let stats = catalog.stats().unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.average_price, 15.0);
    assert!(stats.cached_at >= empty.cached_at);
}

#[test]
fn fields_added_by_other_tools_are_kept_across_creates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.json");
    std::fs::write(
        &path,
        r#"[{ "id": 1, "name": "Crate", "category": "Storage", "price": 5, "warehouse": "B7" }]"#,
    )
    .unwrap();

    let catalog = catalog_in(&dir);
    catalog
        .create(&json!({ "name": "Pallet", "category": "Storage" }))
        .unwrap();

    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk[0]["warehouse"], "B7");
    assert_eq!(on_disk[1]["name"], "Pallet");
    assert!(on_disk[1].get("warehouse").is_none());
}
