//! End-to-end tests for the book endpoints.
//!
//! Drives the router built by the in-memory container through
//! `tower::ServiceExt::oneshot`, so every request crosses the controller,
//! the catalog service and the repository exactly as in production.

// Allow unwrap in tests - tests should panic on unexpected errors
#![allow(clippy::unwrap_used)]

use std::collections::HashSet;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use proptest::prelude::*;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tower::ServiceExt;

use bookstore_api::infrastructure::config::Container;
use bookstore_api::infrastructure::http::{BookResponse, ErrorResponse, MessageResponse};
use bookstore_api::infrastructure::persistence::BookStore;

// =============================================================================
// Helpers
// =============================================================================

fn app() -> Router {
    Container::in_memory().router("test")
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

async fn read<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create(app: &Router, title: &str, author: &str) -> BookResponse {
    let response = send(
        app,
        "POST",
        "/books",
        Some(json!({ "title": title, "author": author })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    read(response).await
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn create_get_delete_get() {
    let app = app();

    let created = create(&app, "A", "B").await;
    assert_eq!(created.id, "1");
    assert_eq!(created.title, "A");
    assert_eq!(created.author, "B");

    let response = send(&app, "GET", "/books/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: BookResponse = read(response).await;
    assert_eq!(fetched, created);

    let response = send(&app, "DELETE", "/books/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let message: MessageResponse = read(response).await;
    assert_eq!(message.message, "Book deleted successfully");

    let response = send(&app, "GET", "/books/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = read(response).await;
    assert_eq!(error.code, "BOOK_NOT_FOUND");
}

#[tokio::test]
async fn second_delete_is_not_found() {
    let app = app();
    let created = create(&app, "A", "B").await;
    let uri = format!("/books/{}", created.id);

    assert_eq!(send(&app, "DELETE", &uri, None).await.status(), StatusCode::OK);
    assert_eq!(
        send(&app, "DELETE", &uri, None).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn deleted_ids_are_not_reused() {
    let app = app();
    let first = create(&app, "First", "X").await;
    send(&app, "DELETE", &format!("/books/{}", first.id), None).await;

    let second = create(&app, "Second", "Y").await;

    assert_ne!(second.id, first.id);
    let response = send(&app, "GET", &format!("/books/{}", first.id), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_reflects_creates_and_deletes() {
    let app = app();
    create(&app, "one", "a").await;
    let two = create(&app, "two", "b").await;
    create(&app, "three", "c").await;
    send(&app, "DELETE", &format!("/books/{}", two.id), None).await;

    let response = send(&app, "GET", "/books", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let books: Vec<BookResponse> = read(response).await;

    let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["one", "three"]);
}

#[tokio::test]
async fn malformed_body_creates_nothing() {
    let store = Arc::new(BookStore::new());
    let app = Container::with_store(Arc::clone(&store)).router("test");

    let response = send(&app, "POST", "/books", Some(json!({ "title": "A" }))).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = read(response).await;
    assert_eq!(error.code, "INVALID_REQUEST");
    assert!(store.is_empty());
}

#[tokio::test]
async fn empty_strings_are_accepted() {
    let app = app();
    let created = create(&app, "", "").await;

    let response = send(&app, "GET", &format!("/books/{}", created.id), None).await;
    let fetched: BookResponse = read(response).await;

    assert_eq!(fetched.title, "");
    assert_eq!(fetched.author, "");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_get_distinct_ids() {
    let app = app();

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move { create(&app, &format!("title-{i}"), "author").await })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().id);
    }
    assert_eq!(ids.len(), 32);

    let books: Vec<BookResponse> = read(send(&app, "GET", "/books", None).await).await;
    assert_eq!(books.len(), 32);
}

#[tokio::test]
async fn health_reports_version() {
    let response = send(&app(), "GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = read(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], "test");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn created_book_reads_back_unchanged(title in ".*", author in ".*") {
        let (created, fetched) = tokio_test::block_on(async {
            let app = app();
            let created = create(&app, &title, &author).await;
            let response = send(&app, "GET", &format!("/books/{}", created.id), None).await;
            let fetched: BookResponse = read(response).await;
            (created, fetched)
        });

        prop_assert_eq!(&created.title, &title);
        prop_assert_eq!(&created.author, &author);
        prop_assert_eq!(created, fetched);
    }
}
