//! Local Snapshot Store - a persistent string key/value cache.
//!
//! Holds the JSON copy of the last fetched product list under the
//! `products` key. It is written once after the initial fetch and read
//! back on load and when a price sort is cancelled.
//!
//! ## Example
//!
//! ```ignore
//! use storefront::snapshot::{self, InMemorySnapshotStore};
//!
//! let store = InMemorySnapshotStore::new();
//! snapshot::save_products(&store, &products)?;
//! let restored = snapshot::load_products(&store)?;
//! ```

mod file;
mod in_memory;
mod store;

use std::fmt;

use crate::model::Product;

pub use file::FileSnapshotStore;
pub use in_memory::InMemorySnapshotStore;
pub use store::SnapshotStore;

/// Key under which the product list is cached.
pub const PRODUCTS_KEY: &str = "products";

/// Error type for snapshot store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    LockPoisoned(&'static str),
    /// Filesystem error.
    Io(String),
    /// The stored value is not valid JSON for the requested type.
    Serde(String),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::LockPoisoned(operation) => {
                write!(f, "snapshot store lock poisoned during {}", operation)
            }
            SnapshotError::Io(msg) => write!(f, "snapshot store io error: {}", msg),
            SnapshotError::Serde(msg) => write!(f, "snapshot serialization error: {}", msg),
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        SnapshotError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Serde(err.to_string())
    }
}

/// Serialize `products` as a JSON array under `PRODUCTS_KEY`.
pub fn save_products<S>(store: &S, products: &[Product]) -> Result<(), SnapshotError>
where
    S: SnapshotStore + ?Sized,
{
    let json = serde_json::to_string(products)?;
    store.set_item(PRODUCTS_KEY, &json)
}

/// Read the product list cached under `PRODUCTS_KEY`, if any.
pub fn load_products<S>(store: &S) -> Result<Option<Vec<Product>>, SnapshotError>
where
    S: SnapshotStore + ?Sized,
{
    match store.get_item(PRODUCTS_KEY)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}
