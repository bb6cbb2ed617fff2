use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value;
use tracing::{error, info};

use super::error::ApiError;
use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::item::{Item, ItemId};
use crate::query::{ListParams, QueryPage};
use crate::stats::StatsSnapshot;
use crate::store::ItemStore;

pub(crate) type SharedCatalog<S> = Arc<Catalog<S>>;

/// Run a catalog operation on the blocking pool; the store does file I/O.
async fn blocking<S, T, F>(catalog: SharedCatalog<S>, op: F) -> Result<T, ApiError>
where
    S: ItemStore + 'static,
    T: Send + 'static,
    F: FnOnce(&Catalog<S>) -> Result<T, CatalogError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || op(&catalog))
        .await
        .map_err(|join_error| {
            error!(error = %join_error, "catalog task did not complete");
            ApiError::internal()
        })?
        .map_err(ApiError::from)
}

/// `GET /items?q=&page=&limit=`
pub(crate) async fn list_items<S: ItemStore + 'static>(
    State(catalog): State<SharedCatalog<S>>,
    Query(params): Query<ListParams>,
) -> Result<Json<QueryPage>, ApiError> {
    blocking(catalog, move |c| c.list(&params)).await.map(Json)
}

/// `GET /items/:id` - ids that are not integers are simply not found.
pub(crate) async fn get_item<S: ItemStore + 'static>(
    State(catalog): State<SharedCatalog<S>>,
    Path(raw_id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id: ItemId = raw_id
        .parse()
        .map_err(|_| ApiError::not_found("Item not found"))?;
    blocking(catalog, move |c| c.get(id)).await.map(Json)
}

/// `POST /items` - malformed JSON is a 400 like any other bad input.
pub(crate) async fn create_item<S: ItemStore + 'static>(
    State(catalog): State<SharedCatalog<S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Json(input) = body.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
    let item = blocking(catalog, move |c| c.create(&input)).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// `GET /stats`
pub(crate) async fn get_stats<S: ItemStore + 'static>(
    State(catalog): State<SharedCatalog<S>>,
) -> Result<Json<StatsSnapshot>, ApiError> {
    blocking(catalog, |c| c.stats()).await.map(Json)
}

/// Anything unrouted.
pub(crate) async fn fallback() -> impl IntoResponse {
    ApiError::not_found("Not found")
}

/// One log line per request: method, path, status and latency.
pub(crate) async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}
