//! Catalog records: `Product`, its identifier, and `CartLine`.
//!
//! Records are plain values. State transitions never mutate a record that is
//! already held by a container; they build a new one and swap it in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a product, as issued by the remote product service
/// or by the local id generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId(id)
    }
}

/// A sellable catalog entry.
///
/// Field names on the wire follow the remote product service
/// (`discountPercentage`, and `edit` for the locked flag).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    /// `true` when the product is shown as static text, `false` while its
    /// fields are being edited inline.
    #[serde(rename = "edit", default)]
    pub locked: bool,
}

impl Product {
    /// Create a locked product with the given id, title and price. Remaining
    /// fields start empty.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price,
            discount_percentage: 0.0,
            rating: 0.0,
            stock: 0,
            brand: None,
            category: String::new(),
            thumbnail: String::new(),
            images: None,
            locked: true,
        }
    }

    pub fn with_discount(mut self, percentage: f64) -> Self {
        self.discount_percentage = percentage;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Copy of this product with the locked flag set to `locked`.
    pub fn locked(&self, locked: bool) -> Self {
        Self {
            locked,
            ..self.clone()
        }
    }
}

/// A cart entry: a product snapshot taken when it was added, and a quantity
/// that is always at least one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// A new line holding one unit of `product`.
    pub fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Copy of this line with a different quantity.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self {
            product: self.product.clone(),
            quantity,
        }
    }

    /// `unit price × quantity`.
    pub fn line_price(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }

    /// Undiscounted price multiplied by the discount percentage. Not rounded.
    pub fn line_discount(&self) -> f64 {
        self.line_price() * self.product.discount_percentage / 100.0
    }
}
