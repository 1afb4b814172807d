//! Remote Product Service - the data source of record.
//!
//! `ProductApi` is the request/response contract; `HttpProductApi` talks to
//! a json-server style endpoint, `InMemoryProductApi` keeps the collection
//! in process (tests, offline simulation, and the backing store of the mock
//! server).
//!
//! ## Routes
//!
//! - `GET /db`: `{ "products": [...] }`
//! - `GET /products`, `POST /products`
//! - `PUT /products/:id`, `DELETE /products/:id`
//!
//! ## Example
//!
//! ```ignore
//! use storefront::api::{HttpProductApi, ProductApi};
//!
//! let api = HttpProductApi::new("https://my-json-server.typicode.com/jaiswalaryan/data");
//! let products = api.fetch_catalog().await?;
//! ```

mod error;
mod http;
mod in_memory;
#[cfg(feature = "mock-server")]
pub mod mock_server;

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::model::{Product, ProductId};

pub use error::ApiError;
pub use http::HttpProductApi;
pub use in_memory::InMemoryProductApi;

/// Body of `GET /db`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

/// Request/response contract of the remote product collection.
///
/// Calls are asynchronous and not cancellable; timeouts are whatever the
/// underlying transport applies.
pub trait ProductApi: Send + Sync {
    /// Bulk fetch via `GET /db`.
    fn fetch_catalog(&self) -> impl Future<Output = Result<Vec<Product>, ApiError>> + Send;

    /// `GET /products`.
    fn list_products(&self) -> impl Future<Output = Result<Vec<Product>, ApiError>> + Send;

    /// `POST /products`; returns the server's representation.
    fn create_product(
        &self,
        product: &Product,
    ) -> impl Future<Output = Result<Product, ApiError>> + Send;

    /// `PUT /products/:id`; returns the server's representation.
    fn update_product(
        &self,
        product: &Product,
    ) -> impl Future<Output = Result<Product, ApiError>> + Send;

    /// `DELETE /products/:id`.
    fn delete_product(&self, id: ProductId) -> impl Future<Output = Result<(), ApiError>> + Send;
}
