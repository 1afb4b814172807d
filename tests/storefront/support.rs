//! Test fixtures: a small catalog and storefronts wired to in-memory
//! services.

use storefront::{InMemoryProductApi, InMemorySnapshotStore, Product, ProductDraft, Storefront};

pub type TestStorefront = Storefront<InMemoryProductApi, InMemorySnapshotStore>;

/// Catalog as served by the remote service (unlocked, unsorted).
pub fn catalog() -> Vec<Product> {
    let mut phone = Product::new(1, "iPhone 9", 549.0)
        .with_description("An apple mobile which is nothing like apple")
        .with_category("smartphones")
        .with_discount(12.96)
        .with_rating(4.69)
        .locked(false);
    phone.stock = 94;

    let mut laptop = Product::new(6, "MacBook Pro", 1749.0)
        .with_description("MacBook Pro 2021 with mini-LED display")
        .with_category("laptops")
        .with_discount(11.02)
        .with_rating(4.57)
        .locked(false);
    laptop.stock = 83;

    let mut perfume = Product::new(11, "perfume Oil", 13.0)
        .with_description("Mega Discount, Impression of Acqua Di Gio")
        .with_category("fragrances")
        .with_discount(8.4)
        .with_rating(4.26)
        .locked(false);
    perfume.stock = 65;

    let mut chair = Product::new(7, "Office Chair", 100.0)
        .with_description("Ergonomic mesh chair")
        .with_category("furniture")
        .with_discount(10.0)
        .with_rating(4.1)
        .locked(false);
    chair.stock = 12;

    vec![phone, laptop, perfume, chair]
}

pub fn api() -> InMemoryProductApi {
    InMemoryProductApi::with_products(catalog())
}

pub fn storefront_with(api: InMemoryProductApi) -> TestStorefront {
    Storefront::new(api, InMemorySnapshotStore::new())
}

/// A storefront that has already loaded `catalog()`.
pub async fn loaded_storefront() -> TestStorefront {
    let mut shop = storefront_with(api());
    shop.load().await.unwrap();
    shop
}

pub fn draft() -> ProductDraft {
    ProductDraft {
        title: "Desk".into(),
        description: "Solid oak desk".into(),
        price: "250".into(),
        category: "furniture".into(),
        thumbnail: "https://img.example/desk.jpg".into(),
        rating: "4.5".into(),
    }
}

pub fn titles(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.title.as_str()).collect()
}
