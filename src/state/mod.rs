//! Application state and the actions that transform it.
//!
//! `AppState` is a value: `reduce` builds a new one per action and shares
//! every untouched collection with the previous state through `Arc`. The
//! `Store` owns the current value and is the only place it is replaced.
//!
//! ## Example
//!
//! ```ignore
//! use storefront::{Action, Product, Store};
//!
//! let mut store = Store::new();
//! store.dispatch(Action::SetProducts(vec![Product::new(1, "Lamp", 20.0)]));
//! store.dispatch(Action::AddToCart(Product::new(1, "Lamp", 20.0)));
//! store.dispatch(Action::RecomputeCartTotal);
//! assert_eq!(store.state().total_cart_quantity(), 1);
//! ```

mod reducer;
mod store;

use std::sync::Arc;

use crate::model::{CartLine, Product, ProductId};

pub use reducer::reduce;
pub use store::Store;

/// The single source of truth driving every view.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub(crate) products: Arc<Vec<Product>>,
    pub(crate) cart: Arc<Vec<CartLine>>,
    pub(crate) viewed: Option<Arc<Product>>,
    pub(crate) total_cart_quantity: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Shared handle to the product list. Two states share the handle when
    /// the transition between them left the list untouched.
    pub fn products_handle(&self) -> Arc<Vec<Product>> {
        Arc::clone(&self.products)
    }

    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    pub fn cart_handle(&self) -> Arc<Vec<CartLine>> {
        Arc::clone(&self.cart)
    }

    pub fn viewed_product(&self) -> Option<&Product> {
        self.viewed.as_deref()
    }

    /// Derived counter, refreshed by `Action::RecomputeCartTotal`.
    pub fn total_cart_quantity(&self) -> u32 {
        self.total_cart_quantity
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn cart_line(&self, id: ProductId) -> Option<&CartLine> {
        self.cart.iter().find(|line| line.product_id() == id)
    }
}

/// A named intent that deterministically transforms `AppState`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the product list.
    SetProducts(Vec<Product>),
    /// Add one unit of a product to the cart.
    AddToCart(Product),
    /// Replace the currently viewed product.
    SetViewedProduct(Product),
    /// Recompute the total cart quantity from the cart lines.
    RecomputeCartTotal,
    /// Replace the cart line for the same product.
    UpdateCartLine(CartLine),
    /// Remove the cart line for a product.
    RemoveCartLine(ProductId),
}

impl Action {
    /// Stable action name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetProducts(_) => "SetProducts",
            Action::AddToCart(_) => "AddToCart",
            Action::SetViewedProduct(_) => "SetViewedProduct",
            Action::RecomputeCartTotal => "RecomputeCartTotal",
            Action::UpdateCartLine(_) => "UpdateCartLine",
            Action::RemoveCartLine(_) => "RemoveCartLine",
        }
    }
}
