//! View-models read from `AppState`, and the route table.

use std::fmt;

use crate::cart::{summarize, CartSummary};
use crate::model::{CartLine, Product, ProductId};
use crate::state::AppState;

/// Pages of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    ProductList,
    /// `/addproducts`
    AddProduct,
    /// `/productdetails/:id`
    ProductDetail(ProductId),
    /// `/cart`
    Cart,
}

impl Route {
    /// Parse a path. Unknown paths and malformed ids yield `None`.
    pub fn parse(path: &str) -> Option<Route> {
        let path = path.trim_end_matches('/');
        match path {
            "" => Some(Route::ProductList),
            "/addproducts" => Some(Route::AddProduct),
            "/cart" => Some(Route::Cart),
            _ => path
                .strip_prefix("/productdetails/")
                .and_then(|id| id.parse::<u64>().ok())
                .map(|id| Route::ProductDetail(ProductId(id))),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::ProductList => write!(f, "/"),
            Route::AddProduct => write!(f, "/addproducts"),
            Route::ProductDetail(id) => write!(f, "/productdetails/{}", id),
            Route::Cart => write!(f, "/cart"),
        }
    }
}

/// What the product list page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductListView<'a> {
    /// No products yet: the loading indicator.
    Loading,
    Products(&'a [Product]),
}

impl<'a> ProductListView<'a> {
    pub fn from_state(state: &'a AppState) -> Self {
        match state.products() {
            [] => ProductListView::Loading,
            products => ProductListView::Products(products),
        }
    }
}

/// What the product detail page shows for `id`.
///
/// Only the currently viewed product has a detail page; any other id is
/// `None`.
pub fn product_detail(state: &AppState, id: ProductId) -> Option<&Product> {
    state.viewed_product().filter(|p| p.id == id)
}

/// What the cart page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum CartView<'a> {
    Empty,
    Summary {
        lines: &'a [CartLine],
        totals: CartSummary,
    },
}

impl<'a> CartView<'a> {
    pub const EMPTY_MESSAGE: &'static str = "Your cart is empty";

    pub fn from_state(state: &'a AppState) -> Self {
        match summarize(state.cart()) {
            Some(totals) => CartView::Summary {
                lines: state.cart(),
                totals,
            },
            None => CartView::Empty,
        }
    }
}

impl fmt::Display for ProductListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductListView::Loading => writeln!(f, "Loading..."),
            ProductListView::Products(products) => {
                for product in products.iter() {
                    writeln!(
                        f,
                        "#{:<14} {:<32} Rs {:>10} {:>4.1}*",
                        product.id, product.title, product.price, product.rating
                    )?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for CartView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartView::Empty => writeln!(f, "{}", Self::EMPTY_MESSAGE),
            CartView::Summary { lines, totals } => {
                for line in lines.iter() {
                    writeln!(
                        f,
                        "{:<32} Rs {:>10} x {}",
                        line.product.title, line.product.price, line.quantity
                    )?;
                }
                writeln!(f, "Price ({} item)  {}", totals.total_items, totals.total_price)?;
                writeln!(f, "Discount         {}", totals.total_discount)?;
                writeln!(f, "Delivery Charges Free")?;
                writeln!(f, "Total Amount     {}", totals.amount_due)
            }
        }
    }
}
