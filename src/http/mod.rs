//! HTTP surface for the book service.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /` — HTML dashboard with every book, an add form and delete buttons.
//! - `POST /api/books` — form-encoded create, then `303` back to `/`.
//! - `POST /api/books/delete/:book_id` — delete, then `303` back to `/`.
//! - `GET /api/books` — the whole collection as a JSON array.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use bookshelf::{http, BookService, JsonFileStore};
//!
//! let service = Arc::new(BookService::new(JsonFileStore::new("books.json")));
//! http::serve(service, "127.0.0.1:5000").await?;
//! ```

mod page;

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde_json::json;
use tracing::{info, warn};

use crate::book::BookForm;
use crate::error::BookError;
use crate::service::BookService;
use crate::store::BookStore;

pub use page::render_index;

/// Build an axum `Router` serving the dashboard and the book API.
pub fn router<S: BookStore + 'static>(service: Arc<BookService<S>>) -> Router {
    Router::new()
        .route("/", get(index_handler::<S>))
        .route("/api/books", get(list_handler::<S>).post(create_handler::<S>))
        .route("/api/books/delete/:book_id", post(delete_handler::<S>))
        .with_state(service)
}

/// Serve the book service over HTTP at the given address (e.g. `"127.0.0.1:5000"`).
pub async fn serve<S: BookStore + 'static>(
    service: Arc<BookService<S>>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(service);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await
}

/// `GET /` — HTML dashboard.
async fn index_handler<S: BookStore + 'static>(
    State(service): State<Arc<BookService<S>>>,
) -> Response {
    match service.list_all() {
        Ok(books) => Html(render_index(&books)).into_response(),
        Err(e) => error_response(e),
    }
}

/// `GET /api/books` — JSON export of the collection.
async fn list_handler<S: BookStore + 'static>(
    State(service): State<Arc<BookService<S>>>,
) -> Response {
    match service.list_all() {
        Ok(books) => Json(books).into_response(),
        Err(e) => error_response(e),
    }
}

/// `POST /api/books` — create from form fields and return to the dashboard.
async fn create_handler<S: BookStore + 'static>(
    State(service): State<Arc<BookService<S>>>,
    Form(form): Form<BookForm>,
) -> Response {
    match service.create_from_form(form) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => error_response(e),
    }
}

/// `POST /api/books/delete/:book_id` — delete and return to the dashboard.
async fn delete_handler<S: BookStore + 'static>(
    State(service): State<Arc<BookService<S>>>,
    Path(book_id): Path<u64>,
) -> Response {
    match service.delete(book_id) {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(e: BookError) -> Response {
    let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        warn!(error = %e, "request failed");
    }
    let body = json!({ "error": e.to_string() });
    (status, Json(body)).into_response()
}
