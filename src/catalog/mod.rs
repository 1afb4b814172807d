//! Local product list edits.
//!
//! Every helper takes the current list by reference and returns a new list;
//! products are matched by identifier.

mod ids;
mod validation;

use crate::model::{Product, ProductId};

pub use ids::IdGenerator;
pub use validation::{EditedFields, Field, NewProduct, ProductDraft, ProductEdit, ValidationErrors};

/// `product` followed by the existing list.
pub fn prepend(products: &[Product], product: Product) -> Vec<Product> {
    let mut next = Vec::with_capacity(products.len() + 1);
    next.push(product);
    next.extend_from_slice(products);
    next
}

/// Set the locked flag of the product with `id`, leaving every other field
/// alone. Returns `None` when no product has that id.
pub fn set_locked(products: &[Product], id: ProductId, locked: bool) -> Option<Vec<Product>> {
    let index = products.iter().position(|p| p.id == id)?;
    let mut next = products.to_vec();
    next[index] = products[index].locked(locked);
    Some(next)
}

/// Replace the entry whose id matches `product.id`. Returns `None` when no
/// product has that id.
pub fn replace(products: &[Product], product: Product) -> Option<Vec<Product>> {
    let index = products.iter().position(|p| p.id == product.id)?;
    let mut next = products.to_vec();
    next[index] = product;
    Some(next)
}

/// Every product except the one with `id`.
pub fn remove(products: &[Product], id: ProductId) -> Vec<Product> {
    products.iter().filter(|p| p.id != id).cloned().collect()
}

/// Stable ascending sort by price.
pub fn sorted_by_price(products: &[Product]) -> Vec<Product> {
    let mut next = products.to_vec();
    next.sort_by(|a, b| a.price.total_cmp(&b.price));
    next
}
