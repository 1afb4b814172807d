use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use super::{ApiError, ProductApi};
use crate::model::{Product, ProductId};

/// In-process product collection with json-server semantics: creates are
/// echoed back, updates replace by id, unknown ids answer 404.
///
/// Clone-friendly (cloning shares the same underlying storage). Can be
/// switched offline to simulate network failures.
#[derive(Clone, Default)]
pub struct InMemoryProductApi {
    products: Arc<RwLock<Vec<Product>>>,
    offline: Arc<AtomicBool>,
}

impl InMemoryProductApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(RwLock::new(products)),
            offline: Arc::new(AtomicBool::new(false)),
        }
    }

    /// While offline every call fails with `ApiError::Unavailable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Copy of the stored collection.
    pub fn products(&self) -> Result<Vec<Product>, ApiError> {
        let products = self
            .products
            .read()
            .map_err(|_| ApiError::LockPoisoned("product read"))?;
        Ok(products.clone())
    }

    fn ensure_online(&self) -> Result<(), ApiError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(ApiError::Unavailable)
        } else {
            Ok(())
        }
    }
}

impl ProductApi for InMemoryProductApi {
    async fn fetch_catalog(&self) -> Result<Vec<Product>, ApiError> {
        self.ensure_online()?;
        self.products()
    }

    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.ensure_online()?;
        self.products()
    }

    async fn create_product(&self, product: &Product) -> Result<Product, ApiError> {
        self.ensure_online()?;
        let mut products = self
            .products
            .write()
            .map_err(|_| ApiError::LockPoisoned("product write"))?;
        products.push(product.clone());
        Ok(product.clone())
    }

    async fn update_product(&self, product: &Product) -> Result<Product, ApiError> {
        self.ensure_online()?;
        let mut products = self
            .products
            .write()
            .map_err(|_| ApiError::LockPoisoned("product write"))?;
        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| ApiError::not_found(format!("/products/{}", product.id)))?;
        *slot = product.clone();
        Ok(product.clone())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        self.ensure_online()?;
        let mut products = self
            .products
            .write()
            .map_err(|_| ApiError::LockPoisoned("product write"))?;
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ApiError::not_found(format!("/products/{}", id)))?;
        products.remove(index);
        Ok(())
    }
}
