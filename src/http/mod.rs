//! HTTP transport for the catalog.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /items?q=&page=&limit=` - `{ total, page, limit, items }`.
//! - `GET /items/:id` - one item, or `404 { "error": "Item not found" }`.
//! - `POST /items` - `201` with the created item, or `400 { "error": ... }`.
//! - `GET /stats` - `{ total, averagePrice, cachedAt }`.
//!
//! [`router`] exposes these at the root so they compose with other axum
//! routes; [`app`] nests them under `/api`, adds a JSON 404 fallback, a
//! request log and CORS for one browser origin, which is what [`serve`] runs.
//!
//! Store I/O is blocking and runs on tokio's blocking pool. A client that
//! disconnects drops its handler future; I/O already in progress runs to
//! completion and its result is discarded.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use axum::http::HeaderValue;
//! use item_catalog::{http, Catalog, JsonFileStore};
//!
//! let catalog = Arc::new(Catalog::new(JsonFileStore::new("data/items.json")));
//! let origin = HeaderValue::from_static("http://localhost:3000");
//! http::serve(catalog, "0.0.0.0:3001", origin).await?;
//! ```

mod error;
mod routes;

use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method};
use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::catalog::Catalog;
use crate::store::ItemStore;

pub use error::ApiError;

/// Build an axum `Router` for the catalog endpoints.
pub fn router<S: ItemStore + 'static>(catalog: Arc<Catalog<S>>) -> Router {
    Router::new()
        .route(
            "/items",
            get(routes::list_items::<S>).post(routes::create_item::<S>),
        )
        .route("/items/:id", get(routes::get_item::<S>))
        .route("/stats", get(routes::get_stats::<S>))
        .with_state(catalog)
}

/// The full application: routes under `/api`, JSON 404 fallback, request log,
/// and CORS allowing `allowed_origin` to read and create items.
pub fn app<S: ItemStore + 'static>(
    catalog: Arc<Catalog<S>>,
    allowed_origin: HeaderValue,
) -> Router {
    Router::new()
        .nest("/api", router(catalog))
        .fallback(routes::fallback)
        .layer(cors(allowed_origin))
        .layer(middleware::from_fn(routes::access_log))
}

fn cors(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

/// Serve the catalog over HTTP at `addr` (e.g. `"0.0.0.0:3001"`) until Ctrl-C.
pub async fn serve<S: ItemStore + 'static>(
    catalog: Arc<Catalog<S>>,
    addr: &str,
    allowed_origin: HeaderValue,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "catalog listening");
    axum::serve(listener, app(catalog, allowed_origin))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
