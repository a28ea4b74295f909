//! HTTP contract tests for `ListingsClient` against an in-process listing store.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use listings_client::{Category, ListingsApi, ListingsClient, ListingsError, Region};
use serde_json::json;

async fn list_listings() -> impl IntoResponse {
    Json(json!([
        {"id": 1, "title": "Calculus", "price": 35.0, "category": "Textbooks", "region": "Mesa", "user_id": 4},
        {"id": 2, "title": "Futon", "price": 60, "category": "Furniture", "region": "ACC", "user_id": 9,
         "description": "Barely used", "image_url": "/uploads/futon.jpg"}
    ]))
}

async fn get_listing(Path(id): Path<i64>) -> axum::response::Response {
    match id {
        5 => Json(json!({"id": 5, "title": "Desk", "price": 20, "category": "Furniture", "user_id": 9}))
            .into_response(),
        6 => Json(serde_json::Value::Null).into_response(),
        7 => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        _ => (StatusCode::NOT_FOUND, "Listing not found").into_response(),
    }
}

async fn get_user(Path(id): Path<i64>) -> axum::response::Response {
    match id {
        9 => Json(json!({"id": 9, "name": "Ana", "email": "a@b.edu"})).into_response(),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
    }
}

async fn spawn_store() -> String {
    let app = Router::new()
        .route("/listings", get(list_listings))
        .route("/listings/:id", get(get_listing))
        .route("/users/:id", get(get_user));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    format!("http://{}", addr)
}

#[tokio::test]
async fn lists_listings_in_backend_order() {
    let client = ListingsClient::new(spawn_store().await);

    let listings = client.list_listings().await.unwrap();

    assert_eq!(listings.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(listings[0].category, Category::Textbooks);
    assert_eq!(listings[1].region, Some(Region::Acc));
    assert_eq!(listings[1].image_url.as_deref(), Some("/uploads/futon.jpg"));
}

#[tokio::test]
async fn fetches_single_listing_and_seller() {
    let client = ListingsClient::new(spawn_store().await);

    let listing = client.get_listing(5).await.unwrap().expect("listing body");
    assert_eq!(listing.title, "Desk");
    assert_eq!(listing.user_id, 9);

    let seller = client.get_user(listing.user_id).await.unwrap();
    assert_eq!(seller.contact_email(), Some("a@b.edu"));
}

#[tokio::test]
async fn null_body_is_an_empty_listing() {
    let client = ListingsClient::new(spawn_store().await);

    assert_eq!(client.get_listing(6).await.unwrap(), None);
}

#[tokio::test]
async fn missing_listing_reports_not_found() {
    let client = ListingsClient::new(spawn_store().await);

    let err = client.get_listing(999).await.unwrap_err();

    assert!(err.is_not_found(), "unexpected error: {err}");
}

#[tokio::test]
async fn seller_failure_reports_status() {
    let client = ListingsClient::new(spawn_store().await);

    let err = client.get_user(1).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let client = ListingsClient::new(spawn_store().await);

    let err = client.get_listing(7).await.unwrap_err();

    assert!(matches!(err, ListingsError::Decode(_)), "unexpected error: {err}");
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let client = ListingsClient::new(format!("http://{}", addr));
    let err = client.list_listings().await.unwrap_err();

    assert!(matches!(err, ListingsError::Network(_)), "unexpected error: {err}");
}
