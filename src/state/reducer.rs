use std::sync::Arc;

use tracing::debug;

use super::{Action, AppState};
use crate::model::{CartLine, Product, ProductId};

/// Apply `action` to `state`, returning the next state.
///
/// `state` is never modified. Collections the action does not touch are
/// shared with the returned state; the ones it does touch are rebuilt, so a
/// changed cart or product list is always a new allocation. Lookup misses
/// (`UpdateCartLine` / `RemoveCartLine` on an absent product) return an
/// unchanged copy.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    match action {
        Action::SetProducts(products) => AppState {
            products: Arc::new(products),
            ..state.clone()
        },
        Action::AddToCart(product) => AppState {
            cart: Arc::new(add_to_cart(&state.cart, product)),
            ..state.clone()
        },
        Action::SetViewedProduct(product) => AppState {
            viewed: Some(Arc::new(product)),
            ..state.clone()
        },
        Action::RecomputeCartTotal => AppState {
            total_cart_quantity: state
                .cart
                .iter()
                .fold(0u32, |total, line| total.saturating_add(line.quantity)),
            ..state.clone()
        },
        Action::UpdateCartLine(line) => match update_cart_line(&state.cart, line) {
            Some(cart) => AppState {
                cart: Arc::new(cart),
                ..state.clone()
            },
            None => state.clone(),
        },
        Action::RemoveCartLine(id) => match remove_cart_line(&state.cart, id) {
            Some(cart) => AppState {
                cart: Arc::new(cart),
                ..state.clone()
            },
            None => state.clone(),
        },
    }
}

fn add_to_cart(cart: &[CartLine], product: Product) -> Vec<CartLine> {
    match cart.iter().position(|line| line.product_id() == product.id) {
        Some(index) => {
            let mut next = cart.to_vec();
            next[index] = cart[index].with_quantity(cart[index].quantity.saturating_add(1));
            next
        }
        None => {
            let mut next = Vec::with_capacity(cart.len() + 1);
            next.push(CartLine::new(product));
            next.extend_from_slice(cart);
            next
        }
    }
}

fn update_cart_line(cart: &[CartLine], line: CartLine) -> Option<Vec<CartLine>> {
    if line.quantity == 0 {
        debug!(product_id = %line.product_id(), "ignoring cart line update with zero quantity");
        return None;
    }
    let Some(index) = cart.iter().position(|l| l.product_id() == line.product_id()) else {
        debug!(product_id = %line.product_id(), "cart line update missed");
        return None;
    };
    let mut next = cart.to_vec();
    next[index] = line;
    Some(next)
}

fn remove_cart_line(cart: &[CartLine], id: ProductId) -> Option<Vec<CartLine>> {
    let Some(index) = cart.iter().position(|l| l.product_id() == id) else {
        debug!(product_id = %id, "cart line removal missed");
        return None;
    };
    let mut next = cart.to_vec();
    next.remove(index);
    Some(next)
}
