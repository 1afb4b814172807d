pub mod api;
mod cart;
pub mod catalog;
pub mod config;
mod error;
pub mod logging;
mod model;
pub mod notify;
pub mod snapshot;
mod state;
mod storefront;
pub mod view;

pub use api::{ApiError, HttpProductApi, InMemoryProductApi, ProductApi};
pub use cart::{summarize, CartSummary};
pub use catalog::{Field, ProductDraft, ProductEdit, ValidationErrors};
pub use config::Config;
pub use error::StorefrontError;
pub use model::{CartLine, Product, ProductId};
pub use notify::{Notifier, Severity, Toast};
pub use snapshot::{FileSnapshotStore, InMemorySnapshotStore, SnapshotError, SnapshotStore};
pub use state::{reduce, Action, AppState, Store};
pub use storefront::Storefront;
pub use view::{CartView, ProductListView, Route};
