//! Book service - create, list, and delete over a [`BookStore`](crate::BookStore).
//!
//! Every operation is one load-modify-save cycle against the store. Nothing
//! is cached between calls.
//!
//! ## Example
//!
//! ```ignore
//! use bookshelf::{BookService, InMemoryBookStore, NewBook};
//!
//! let service = BookService::new(InMemoryBookStore::new());
//! let dune = service.create(NewBook::new("Dune", "Herbert").completed(true).rating(5))?;
//! assert_eq!(dune.id, 1);
//! service.delete(dune.id)?;
//! ```

mod book_service;

pub use book_service::BookService;
