//! Test fixture: a catalog over a temporary JSON document, served on port 0.

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::HeaderValue;
use item_catalog::{http, Catalog, JsonFileStore};
use serde_json::{json, Value};
use tempfile::TempDir;

pub const CLIENT_ORIGIN: &str = "http://localhost:3000";

pub struct Server {
    pub base: String,
    pub path: PathBuf,
    pub client: reqwest::Client,
    // held so the document outlives the test
    _dir: TempDir,
}

impl Server {
    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base, path)
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    pub async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .unwrap()
    }

    /// Overwrite the document directly, as another process would.
    pub fn write_document(&self, items: &Value) {
        std::fs::write(&self.path, serde_json::to_string_pretty(items).unwrap()).unwrap();
    }
}

pub fn mock_items() -> Value {
    json!([
        { "id": 1, "name": "Item 1", "price": 10.0, "category": "Category 1" },
        { "id": 2, "name": "Item 2", "price": 20.0, "category": "Category 2" },
        { "id": 3, "name": "Item 3", "price": 30.0, "category": "Category 3" }
    ])
}

/// Start a server over an empty (not yet created) document.
pub async fn start_empty() -> Server {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.json");
    start(dir, path).await
}

/// Start a server over a document holding `mock_items()`.
pub async fn start_seeded() -> Server {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.json");
    std::fs::write(&path, serde_json::to_string_pretty(&mock_items()).unwrap()).unwrap();
    start(dir, path).await
}

async fn start(dir: TempDir, path: PathBuf) -> Server {
    let catalog = Arc::new(Catalog::new(JsonFileStore::new(&path)));
    let app = http::app(catalog, HeaderValue::from_static(CLIENT_ORIGIN));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Server {
        base: format!("http://{addr}"),
        path,
        client: reqwest::Client::new(),
        _dir: dir,
    }
}
