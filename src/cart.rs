//! Display-only cart totals.

use crate::model::CartLine;

/// Price details shown next to a non-empty cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartSummary {
    /// Sum of line quantities.
    pub total_items: u32,
    /// Σ unit price × quantity.
    pub total_price: f64,
    /// Σ line discounts, floored once after summing.
    pub total_discount: f64,
    /// `total_price - total_discount`.
    pub amount_due: f64,
}

/// Compute the price details for `lines`, or `None` for an empty cart.
pub fn summarize(lines: &[CartLine]) -> Option<CartSummary> {
    if lines.is_empty() {
        return None;
    }

    let total_items = lines
        .iter()
        .fold(0u32, |total, line| total.saturating_add(line.quantity));
    let total_price: f64 = lines.iter().map(CartLine::line_price).sum();
    let raw_discount: f64 = lines.iter().map(CartLine::line_discount).sum();
    let total_discount = raw_discount.floor();

    Some(CartSummary {
        total_items,
        total_price,
        total_discount,
        amount_due: total_price - total_discount,
    })
}
