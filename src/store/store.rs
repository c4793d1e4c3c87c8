//! BookStore - Abstract whole-collection storage for books.

use crate::book::Book;
use crate::error::StoreError;

/// Abstract storage for the book collection.
///
/// Implementations must preserve order across `save` and `load`.
pub trait BookStore: Send + Sync {
    /// Read the full collection. Missing or unreadable content yields an empty
    /// collection; only hard I/O failures are errors.
    fn load(&self) -> Result<Vec<Book>, StoreError>;

    /// Overwrite the persisted collection with `books`.
    fn save(&self, books: &[Book]) -> Result<(), StoreError>;
}

impl<S: BookStore + ?Sized> BookStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Vec<Book>, StoreError> {
        (**self).load()
    }

    fn save(&self, books: &[Book]) -> Result<(), StoreError> {
        (**self).save(books)
    }
}
