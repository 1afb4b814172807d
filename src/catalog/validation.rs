//! Form input checks that run before any remote call.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::{Product, ProductId};

/// A form field that can carry an inline error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Description,
    Price,
    Category,
    Thumbnail,
    Rating,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Price => "price",
            Field::Category => "category",
            Field::Thumbnail => "thumbnail",
            Field::Rating => "rating",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Field::Title => "Name is required",
            Field::Description => "Description is required",
            Field::Price => "Valid price is required",
            Field::Category => "Category is required",
            Field::Thumbnail => "Thumbnail URL is required",
            Field::Rating => "Rating must be a number between 0 and 5",
        }
    }
}

/// Per-field error messages, shown next to the offending inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<Field, &'static str>,
}

impl ValidationErrors {
    fn reject(&mut self, field: Field) {
        self.fields.insert(field, field.message());
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.fields.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.fields.iter().map(|(field, message)| (*field, *message))
    }

    fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input:")?;
        for (field, message) in self.iter() {
            write!(f, " {}: {};", field.name(), message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Raw text from the add-product form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub thumbnail: String,
    pub rating: String,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub thumbnail: String,
    pub rating: f64,
}

impl ProductDraft {
    pub fn validate(&self) -> Result<NewProduct, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let title = required(&self.title, Field::Title, &mut errors);
        let description = required(&self.description, Field::Description, &mut errors);
        let price = price(&self.price, &mut errors);
        let category = required(&self.category, Field::Category, &mut errors);
        let thumbnail = required(&self.thumbnail, Field::Thumbnail, &mut errors);
        let rating = rating(&self.rating, &mut errors);

        errors.into_result(|| NewProduct {
            title,
            description,
            price,
            category,
            thumbnail,
            rating,
        })
    }
}

impl NewProduct {
    /// The product to send to the remote service, locked.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            description: self.description,
            category: self.category,
            thumbnail: self.thumbnail,
            rating: self.rating,
            ..Product::new(id, self.title, self.price)
        }
    }
}

/// Raw text from the inline edit fields of a product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductEdit {
    pub title: String,
    pub price: String,
    pub rating: String,
    pub description: String,
}

/// An edit that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct EditedFields {
    pub title: String,
    pub price: f64,
    pub rating: f64,
    pub description: String,
}

impl ProductEdit {
    /// Edit fields pre-filled from `product`.
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
            rating: product.rating.to_string(),
            description: product.description.clone(),
        }
    }

    pub fn validate(&self) -> Result<EditedFields, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let title = required(&self.title, Field::Title, &mut errors);
        let price = price(&self.price, &mut errors);
        let rating = rating(&self.rating, &mut errors);
        let description = required(&self.description, Field::Description, &mut errors);

        errors.into_result(|| EditedFields {
            title,
            price,
            rating,
            description,
        })
    }
}

impl EditedFields {
    /// `product` with the edited fields applied and the lock restored.
    pub fn apply_to(&self, product: &Product) -> Product {
        Product {
            title: self.title.clone(),
            price: self.price,
            rating: self.rating,
            description: self.description.clone(),
            locked: true,
            ..product.clone()
        }
    }
}

fn required(value: &str, field: Field, errors: &mut ValidationErrors) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.reject(field);
    }
    value.to_string()
}

fn number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn price(value: &str, errors: &mut ValidationErrors) -> f64 {
    match number(value).filter(|p| *p >= 0.0) {
        Some(price) => price,
        None => {
            errors.reject(Field::Price);
            0.0
        }
    }
}

fn rating(value: &str, errors: &mut ValidationErrors) -> f64 {
    match number(value).filter(|r| (0.0..=5.0).contains(r)) {
        Some(rating) => rating,
        None => {
            errors.reject(Field::Rating);
            0.0
        }
    }
}
