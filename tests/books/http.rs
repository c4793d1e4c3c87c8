//! HTTP integration tests.
//!
//! Starts an axum server and exercises it with reqwest.

use std::sync::Arc;

use bookshelf::{http, Book, BookService, InMemoryBookStore, NewBook};
use reqwest::redirect::Policy;

/// Bind to port 0 and return the base URL plus the service behind it.
async fn start_server() -> (String, Arc<BookService<InMemoryBookStore>>) {
    let service = Arc::new(BookService::new(InMemoryBookStore::new()));
    let app = http::router(service.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), service)
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn list_starts_empty() {
    let (base, _service) = start_server().await;

    let resp = client().get(format!("{base}/api/books")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn form_create_redirects_and_persists() {
    let (base, service) = start_server().await;

    let resp = client()
        .post(format!("{base}/api/books"))
        .form(&[
            ("title", "Dune"),
            ("author", "Herbert"),
            ("completed", "on"),
            ("rating", "5"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers()["location"], "/");

    let books: Vec<Book> = client()
        .get(format!("{base}/api/books"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        books,
        vec![Book {
            id: 1,
            title: "Dune".into(),
            author: "Herbert".into(),
            completed: true,
            rating: 5,
        }]
    );
    assert_eq!(service.list_all().unwrap(), books);
}

#[tokio::test]
async fn unchecked_box_and_missing_rating() {
    let (base, service) = start_server().await;

    let resp = client()
        .post(format!("{base}/api/books"))
        .form(&[("title", "Emma"), ("author", "Austen")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 303);

    let books = service.list_all().unwrap();
    assert!(!books[0].completed);
    assert_eq!(books[0].rating, 0);
}

#[tokio::test]
async fn bad_rating_returns_422() {
    let (base, service) = start_server().await;

    let resp = client()
        .post(format!("{base}/api/books"))
        .form(&[("title", "Emma"), ("author", "Austen"), ("rating", "ten")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("rating"));
    assert!(service.list_all().unwrap().is_empty());
}

#[tokio::test]
async fn delete_redirects_and_is_idempotent() {
    let (base, service) = start_server().await;
    for title in ["a", "b", "c"] {
        service.create(NewBook::new(title, "x")).unwrap();
    }

    for _ in 0..2 {
        let resp = client()
            .post(format!("{base}/api/books/delete/2"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 303);
    }

    let ids: Vec<u64> = service.list_all().unwrap().iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn delete_with_non_integer_id_is_rejected() {
    let (base, _service) = start_server().await;

    let resp = client()
        .post(format!("{base}/api/books/delete/abc"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn dashboard_lists_books() {
    let (base, service) = start_server().await;
    service
        .create(NewBook::new("Dune", "Herbert").completed(true).rating(5))
        .unwrap();

    let resp = client().get(format!("{base}/")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let html = resp.text().await.unwrap();
    assert!(html.contains("<td>Dune</td><td>Herbert</td>"));
    assert!(html.contains("/api/books/delete/1"));
}
