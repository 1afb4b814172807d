use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::{ApiError, Catalog, ProductApi};
use crate::model::{Product, ProductId};

const JSON_UTF8: &str = "application/json; charset=UTF-8";

/// `ProductApi` over HTTP against a json-server style endpoint.
#[derive(Debug, Clone)]
pub struct HttpProductApi {
    client: Client,
    base_url: String,
}

impl HttpProductApi {
    /// Client for the service rooted at `base_url` (no trailing `/db` or
    /// `/products`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send `request` and decode the JSON body. Non-success statuses and
    /// `null` bodies are failures.
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &str,
    ) -> Result<T, ApiError> {
        let response = request
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "product service rejected request");
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body: Value = response.json().await?;
        if body.is_null() {
            return Err(ApiError::EmptyPayload {
                url: url.to_string(),
            });
        }
        debug!(url, "product service responded");
        Ok(serde_json::from_value(body)?)
    }
}

impl ProductApi for HttpProductApi {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.url("/db");
        let catalog: Catalog = self.send(self.client.get(&url), &url).await?;
        Ok(catalog.products)
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.url("/products");
        self.send(self.client.get(&url), &url).await
    }

    async fn create_product(&self, product: &Product) -> Result<Product, ApiError> {
        let url = self.url("/products");
        let body = serde_json::to_vec(product)?;
        self.send(self.client.post(&url).body(body), &url).await
    }

    async fn update_product(&self, product: &Product) -> Result<Product, ApiError> {
        let url = self.url(&format!("/products/{}", product.id));
        let body = serde_json::to_vec(product)?;
        self.send(self.client.put(&url).body(body), &url).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let url = self.url(&format!("/products/{}", id));
        let _: Value = self.send(self.client.delete(&url), &url).await?;
        Ok(())
    }
}
