use std::time::{Duration, Instant};

use storefront::{CartView, ProductId, Severity, StorefrontError};

use crate::support::loaded_storefront;

const PHONE: ProductId = ProductId(1);
const PERFUME: ProductId = ProductId(11);
const CHAIR: ProductId = ProductId(7);

#[tokio::test]
async fn adding_same_product_twice_increments_one_line() {
    let mut shop = loaded_storefront().await;
    shop.add_to_cart(PHONE).unwrap();
    shop.add_to_cart(PHONE).unwrap();

    let cart = shop.state().cart();
    assert_eq!(cart.len(), 1);
    assert_eq!(cart[0].quantity, 2);
    assert_eq!(shop.state().total_cart_quantity(), 2);

    let successes: Vec<_> = shop
        .notifier()
        .history()
        .iter()
        .filter(|t| t.severity == Severity::Success && t.message == "Item added to cart")
        .collect();
    assert_eq!(successes.len(), 2);
}

#[tokio::test]
async fn total_quantity_counts_every_add() {
    let mut shop = loaded_storefront().await;
    for id in [PHONE, PERFUME, CHAIR] {
        shop.add_to_cart(id).unwrap();
    }
    assert_eq!(shop.state().cart().len(), 3);
    assert_eq!(shop.state().total_cart_quantity(), 3);
    // newest first
    assert_eq!(shop.state().cart()[0].product_id(), CHAIR);
}

#[tokio::test]
async fn quantity_buttons_keep_total_in_sync() {
    let mut shop = loaded_storefront().await;
    shop.add_to_cart(CHAIR).unwrap();

    shop.increase_quantity(CHAIR).unwrap();
    shop.increase_quantity(CHAIR).unwrap();
    assert_eq!(shop.state().cart_line(CHAIR).unwrap().quantity, 3);
    assert_eq!(shop.state().total_cart_quantity(), 3);

    shop.decrease_quantity(CHAIR).unwrap();
    assert_eq!(shop.state().cart_line(CHAIR).unwrap().quantity, 2);
    assert_eq!(shop.state().total_cart_quantity(), 2);
}

#[tokio::test]
async fn decrease_stops_at_one() {
    let mut shop = loaded_storefront().await;
    shop.add_to_cart(CHAIR).unwrap();
    shop.decrease_quantity(CHAIR).unwrap();
    assert_eq!(shop.state().cart_line(CHAIR).unwrap().quantity, 1);
    assert_eq!(shop.state().total_cart_quantity(), 1);
}

#[tokio::test]
async fn remove_line_and_absent_line() {
    let mut shop = loaded_storefront().await;
    shop.add_to_cart(PHONE).unwrap();
    shop.add_to_cart(CHAIR).unwrap();

    let before = shop.state().cart().to_vec();
    shop.remove_from_cart(PERFUME);
    assert_eq!(shop.state().cart(), before.as_slice());
    assert_eq!(shop.state().total_cart_quantity(), 2);

    shop.remove_from_cart(PHONE);
    assert_eq!(shop.state().cart().len(), 1);
    assert_eq!(shop.state().total_cart_quantity(), 1);
}

#[tokio::test]
async fn unknown_product_is_not_found() {
    let mut shop = loaded_storefront().await;
    assert_eq!(
        shop.add_to_cart(ProductId(404)),
        Err(StorefrontError::NotFound(ProductId(404)))
    );
    assert_eq!(
        shop.increase_quantity(PHONE),
        Err(StorefrontError::NotFound(PHONE))
    );
    assert!(shop.notifier().history().is_empty());
}

#[tokio::test]
async fn cart_summary_matches_price_details() {
    let mut shop = loaded_storefront().await;
    assert_eq!(shop.cart_view(), CartView::Empty);
    assert!(shop.cart_summary().is_none());

    // chair: 100 x 2 at 10%, perfume: 13 x 1 at 8.4%
    shop.add_to_cart(CHAIR).unwrap();
    shop.increase_quantity(CHAIR).unwrap();
    shop.add_to_cart(PERFUME).unwrap();

    let summary = shop.cart_summary().unwrap();
    assert_eq!(summary.total_items, 3);
    assert_eq!(summary.total_price, 213.0);
    // 20 + 1.092 floored once
    assert_eq!(summary.total_discount, 21.0);
    assert_eq!(summary.amount_due, 192.0);

    let rendered = shop.cart_view().to_string();
    assert!(rendered.contains("Total Amount     192"));
}

#[tokio::test]
async fn toasts_expire_in_order() {
    let mut shop = loaded_storefront().await;
    shop.add_to_cart(PHONE).unwrap();
    shop.add_to_cart(CHAIR).unwrap();

    let first = shop.notifier().visible().unwrap().id;
    assert_eq!(shop.notifier().pending().count(), 1);

    shop.tick(Instant::now() + Duration::from_millis(3100));
    let second = shop.notifier().visible().unwrap().id;
    assert_ne!(first, second);

    shop.tick(Instant::now() + Duration::from_millis(6300));
    assert!(shop.notifier().visible().is_none());
}

#[tokio::test]
async fn view_product_sets_detail_route() {
    let mut shop = loaded_storefront().await;
    let route = shop.view_product(PHONE).unwrap();
    assert_eq!(route.to_string(), "/productdetails/1");
    assert_eq!(
        storefront::view::product_detail(shop.state(), PHONE).map(|p| p.title.as_str()),
        Some("iPhone 9")
    );
}
