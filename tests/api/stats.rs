use std::time::Duration;

use serde_json::{json, Value};

use crate::support::{start_empty, start_seeded};

#[tokio::test]
async fn stats_over_seeded_document() {
    let server = start_seeded().await;

    let resp = server.get("/stats").await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["total"], 3);
    assert_eq!(body["averagePrice"], 20.0);
    assert!(body["cachedAt"].is_string());
}

#[tokio::test]
async fn stats_over_missing_document() {
    let server = start_empty().await;

    let body: Value = server.get("/stats").await.json().await.unwrap();
    assert_eq!(body["total"], 0);
    assert_eq!(body["averagePrice"], 0.0);
}

#[tokio::test]
async fn consecutive_reads_share_cached_at() {
    let server = start_empty().await;

    let first: Value = server.get("/stats").await.json().await.unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    let second: Value = server.get("/stats").await.json().await.unwrap();
    assert_eq!(first["cachedAt"], second["cachedAt"]);
}

#[tokio::test]
async fn create_invalidates_stats() {
    let server = start_seeded().await;

    let before: Value = server.get("/stats").await.json().await.unwrap();
    let resp = server
        .post(
            "/items",
            &json!({ "name": "Item 4", "category": "Category 4", "price": 40.0 }),
        )
        .await;
    assert_eq!(resp.status(), 201);

    let after: Value = server.get("/stats").await.json().await.unwrap();
    assert_ne!(before["cachedAt"], after["cachedAt"]);
    assert_eq!(after["total"], 4);
    assert_eq!(after["averagePrice"], 25.0);
}

#[tokio::test]
async fn external_write_invalidates_stats() {
    let server = start_seeded().await;

    let before: Value = server.get("/stats").await.json().await.unwrap();
    assert_eq!(before["total"], 3);

    server.write_document(&json!([
        { "id": 10, "name": "Solo", "category": "Misc", "price": 7.0 }
    ]));

    let after: Value = server.get("/stats").await.json().await.unwrap();
    assert_eq!(after["total"], 1);
    assert_eq!(after["averagePrice"], 7.0);
}
