use storefront::snapshot::{self, PRODUCTS_KEY};
use storefront::{
    InMemoryProductApi, ProductListView, Severity, SnapshotStore, StorefrontError,
};

use crate::support::{api, catalog, loaded_storefront, storefront_with, titles};

#[tokio::test]
async fn load_locks_caches_and_sets_products() {
    let shop = loaded_storefront().await;

    let products = shop.state().products();
    assert_eq!(
        titles(products),
        vec!["iPhone 9", "MacBook Pro", "perfume Oil", "Office Chair"]
    );
    assert!(products.iter().all(|p| p.locked));

    let cached = snapshot::load_products(shop.snapshots()).unwrap().unwrap();
    assert_eq!(cached, products.to_vec());
    assert!(shop.notifier().history().is_empty());
}

#[tokio::test]
async fn load_failure_raises_error_toast_and_keeps_state() {
    let api = api();
    api.set_offline(true);
    let mut shop = storefront_with(api);

    let err = shop.load().await.unwrap_err();
    assert!(matches!(err, StorefrontError::Network(_)));
    assert_eq!(shop.product_list_view(), ProductListView::Loading);
    assert!(shop.snapshots().get_item(PRODUCTS_KEY).unwrap().is_none());

    let toast = shop.notifier().visible().unwrap();
    assert_eq!(toast.message, "Failed to fetch products data");
    assert_eq!(toast.severity, Severity::Error);
}

#[tokio::test]
async fn empty_catalog_shows_loading() {
    let mut shop = storefront_with(InMemoryProductApi::new());
    shop.load().await.unwrap();
    assert_eq!(shop.product_list_view(), ProductListView::Loading);
}

#[tokio::test]
async fn remote_copy_is_untouched_by_local_lock() {
    let shop = loaded_storefront().await;
    let remote = shop.api().products().unwrap();
    assert_eq!(remote, catalog());
    assert!(remote.iter().all(|p| !p.locked));
}
