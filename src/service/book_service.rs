use std::sync::Mutex;

use tracing::info;

use crate::book::{next_id, Book, BookForm, NewBook};
use crate::error::{BookError, StoreError};
use crate::store::BookStore;

/// Record-management operations over a book store.
///
/// Mutations from one service instance are serialized, so concurrent requests
/// in the same process never lose each other's writes. Separate processes
/// sharing a file are not coordinated.
pub struct BookService<S> {
    store: S,
    write_lock: Mutex<()>,
}

impl<S: BookStore> BookService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// All books in insertion order.
    pub fn list_all(&self) -> Result<Vec<Book>, BookError> {
        Ok(self.store.load()?)
    }

    /// The whole collection as indented JSON.
    pub fn export_json(&self) -> Result<String, BookError> {
        let books = self.list_all()?;
        serde_json::to_string_pretty(&books)
            .map_err(|e| BookError::Store(StoreError::Serde(e.to_string())))
    }

    /// Add a book, assigning it the next free id.
    pub fn create(&self, new_book: NewBook) -> Result<Book, BookError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::LockPoisoned("create"))?;

        let mut books = self.store.load()?;
        let book = new_book.into_book(next_id(&books)?);
        books.push(book.clone());
        self.store.save(&books)?;

        info!(id = book.id, title = %book.title, "book added");
        Ok(book)
    }

    /// Coerce raw form fields and add the resulting book.
    ///
    /// Fails with [`BookError::InvalidInput`] before touching the store when
    /// the form cannot be coerced.
    pub fn create_from_form(&self, form: BookForm) -> Result<Book, BookError> {
        let new_book = NewBook::try_from(form)?;
        self.create(new_book)
    }

    /// Remove the book with `id`. Returns true if it existed.
    ///
    /// Deleting an unknown id is not an error; the collection is saved
    /// unchanged.
    pub fn delete(&self, id: u64) -> Result<bool, BookError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::LockPoisoned("delete"))?;

        let mut books = self.store.load()?;
        let before = books.len();
        books.retain(|book| book.id != id);
        let removed = books.len() != before;
        self.store.save(&books)?;

        if removed {
            info!(id, "book deleted");
        } else {
            info!(id, "delete requested for unknown book");
        }
        Ok(removed)
    }
}
