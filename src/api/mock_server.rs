//! HTTP mock of the remote product service, backed by an
//! `InMemoryProductApi`.
//!
//! Requires the `mock-server` feature. Uses axum for routing and answers
//! with the same shapes as the third-party json-server endpoint, so the
//! `HttpProductApi` can be exercised end to end without the network.
//!
//! ## Example
//!
//! ```ignore
//! use storefront::api::{mock_server, InMemoryProductApi};
//!
//! let api = InMemoryProductApi::with_products(products);
//! mock_server::serve(api, "127.0.0.1:3000").await?;
//! ```

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::info;

use super::{ApiError, Catalog, InMemoryProductApi, ProductApi};
use crate::model::{Product, ProductId};

/// Build an axum `Router` serving `api` under json-server routes.
pub fn router(api: InMemoryProductApi) -> Router {
    Router::new()
        .route("/db", get(db_handler))
        .route("/products", get(list_handler).post(create_handler))
        .route(
            "/products/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(api)
}

/// Serve the mock at the given address (e.g. `"127.0.0.1:3000"`).
pub async fn serve(api: InMemoryProductApi, addr: &str) -> Result<(), std::io::Error> {
    let app = router(api);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr, "mock product service listening");
    axum::serve(listener, app).await
}

fn error_response(err: ApiError) -> Response {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({}))).into_response()
}

/// `GET /db` answers `{ "products": [...] }`.
async fn db_handler(State(api): State<InMemoryProductApi>) -> Response {
    match api.fetch_catalog().await {
        Ok(products) => Json(Catalog { products }).into_response(),
        Err(e) => error_response(e),
    }
}

async fn list_handler(State(api): State<InMemoryProductApi>) -> Response {
    match api.list_products().await {
        Ok(products) => Json(products).into_response(),
        Err(e) => error_response(e),
    }
}

async fn get_handler(State(api): State<InMemoryProductApi>, Path(id): Path<u64>) -> Response {
    let found = api
        .products()
        .map(|products| products.into_iter().find(|p| p.id == ProductId(id)));
    match found {
        Ok(Some(product)) => Json(product).into_response(),
        Ok(None) => error_response(ApiError::not_found(format!("/products/{}", id))),
        Err(e) => error_response(e),
    }
}

/// `POST /products`: echoes the created product with 201.
async fn create_handler(
    State(api): State<InMemoryProductApi>,
    Json(product): Json<Product>,
) -> Response {
    match api.create_product(&product).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(e) => error_response(e),
    }
}

/// `PUT /products/:id`: the path id wins over the body id.
async fn update_handler(
    State(api): State<InMemoryProductApi>,
    Path(id): Path<u64>,
    Json(product): Json<Product>,
) -> Response {
    let product = Product {
        id: ProductId(id),
        ..product
    };
    match api.update_product(&product).await {
        Ok(updated) => Json(updated).into_response(),
        Err(e) => error_response(e),
    }
}

/// `DELETE /products/:id`: answers `{}`.
async fn delete_handler(State(api): State<InMemoryProductApi>, Path(id): Path<u64>) -> Response {
    match api.delete_product(ProductId(id)).await {
        Ok(()) => Json(json!({})).into_response(),
        Err(e) => error_response(e),
    }
}
