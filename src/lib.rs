mod book;
mod error;
mod service;
mod store;

#[cfg(feature = "http")]
pub mod http;

pub use book::{next_id, parse_rating, Book, BookForm, NewBook};
pub use error::{BookError, StoreError};
pub use service::BookService;
pub use store::{BookStore, InMemoryBookStore, JsonFileStore};
