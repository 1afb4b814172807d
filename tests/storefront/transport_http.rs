//! HTTP transport integration tests.
//!
//! Starts the mock product service with axum and exercises it through
//! `HttpProductApi` and plain reqwest.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use storefront::api::mock_server;
use storefront::{
    ApiError, HttpProductApi, InMemoryProductApi, InMemorySnapshotStore, Product, ProductApi,
    ProductId, ProductListView, Storefront, StorefrontError,
};

use crate::support::{api, catalog, draft};

/// Bind to port 0 and return the actual address.
async fn start_server(api: InMemoryProductApi) -> String {
    let app = mock_server::router(api);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn fetch_catalog_over_http() {
    let base = start_server(api()).await;
    let client = HttpProductApi::new(base);

    let products = client.fetch_catalog().await.unwrap();
    assert_eq!(products, catalog());
    assert_eq!(client.list_products().await.unwrap().len(), 4);
}

#[tokio::test]
async fn db_document_uses_wire_names() {
    let base = start_server(api()).await;

    let resp = reqwest::get(format!("{base}/db")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    let first = &body["products"][0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["discountPercentage"], 12.96);
    assert_eq!(first["edit"], false);
}

#[tokio::test]
async fn create_answers_created() {
    let remote = api();
    let base = start_server(remote.clone()).await;

    let product = Product::new(42, "Lamp", 20.0);
    let resp = reqwest::Client::new()
        .post(format!("{base}/products"))
        .json(&product)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    let echoed: Product = resp.json().await.unwrap();
    assert_eq!(echoed, product);

    let client = HttpProductApi::new(base);
    let created = client
        .create_product(&Product::new(43, "Rug", 80.0))
        .await
        .unwrap();
    assert_eq!(created.id, ProductId(43));
    assert_eq!(remote.products().unwrap().len(), 6);
}

#[tokio::test]
async fn update_and_delete() {
    let remote = api();
    let base = start_server(remote.clone()).await;
    let client = HttpProductApi::new(base);

    let renamed = Product {
        title: "Office Chair Pro".into(),
        ..catalog()[3].clone()
    };
    let saved = client.update_product(&renamed).await.unwrap();
    assert_eq!(saved.title, "Office Chair Pro");

    client.delete_product(ProductId(7)).await.unwrap();
    assert!(remote.products().unwrap().iter().all(|p| p.id != ProductId(7)));
}

#[tokio::test]
async fn unknown_product_is_status_error() {
    let base = start_server(api()).await;
    let client = HttpProductApi::new(base);

    let err = client.delete_product(ProductId(99)).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, ApiError::Status { status: 404, .. }));

    let err = client
        .update_product(&Product::new(99, "Ghost", 1.0))
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn offline_service_is_unavailable() {
    let remote = api();
    remote.set_offline(true);
    let base = start_server(remote).await;
    let client = HttpProductApi::new(base);

    let err = client.fetch_catalog().await.unwrap_err();
    assert_eq!(err.status_code(), 503);
}

#[tokio::test]
async fn storefront_over_http() {
    let remote = api();
    let base = start_server(remote.clone()).await;
    let mut shop = Storefront::new(HttpProductApi::new(base), InMemorySnapshotStore::new());

    shop.load().await.unwrap();
    assert_eq!(shop.state().products().len(), 4);
    assert!(shop.state().products().iter().all(|p| p.locked));

    let created = shop.create_product(&draft()).await.unwrap();
    assert_eq!(shop.state().products()[0].id, created.id);
    assert!(remote.products().unwrap().iter().any(|p| p.id == created.id));

    shop.delete_product(ProductId(6)).await.unwrap();
    assert!(shop.state().product(ProductId(6)).is_none());

    shop.add_to_cart(ProductId(1)).unwrap();
    let summary = shop.cart_summary().unwrap();
    assert_eq!(summary.total_price, 549.0);
    // 549 * 12.96% = 71.15, floored
    assert_eq!(summary.total_discount, 71.0);
}

#[tokio::test]
async fn db_without_products_fails_load() {
    let app = Router::new().route("/db", get(|| async { Json(json!({ "posts": [] })) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = HttpProductApi::new(format!("http://{addr}"));
    let err = client.fetch_catalog().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));

    let mut shop = Storefront::new(client, InMemorySnapshotStore::new());
    let err = shop.load().await.unwrap_err();
    assert!(matches!(err, StorefrontError::Network(ApiError::Decode(_))));
    assert_eq!(shop.product_list_view(), ProductListView::Loading);
    assert_eq!(
        shop.notifier().visible().unwrap().message,
        "Failed to fetch products data"
    );
}
