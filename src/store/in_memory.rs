//! InMemoryBookStore - byte-buffer book store for testing and development.

use std::sync::{Arc, RwLock};

use super::{decode, encode, BookStore};
use crate::book::Book;
use crate::error::StoreError;

/// In-memory book store.
///
/// Holds the serialized collection the same way a file would, so absent and
/// corrupt content behave exactly as they do for [`JsonFileStore`](super::JsonFileStore).
/// Clone-friendly via Arc; clones share the same buffer.
#[derive(Clone, Default)]
pub struct InMemoryBookStore {
    contents: Arc<RwLock<Option<Vec<u8>>>>,
}

impl InMemoryBookStore {
    /// Create a store with nothing persisted yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose persisted content is `raw`, parsed or not.
    pub fn from_raw(raw: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: Arc::new(RwLock::new(Some(raw.into()))),
        }
    }

    /// Create a store already holding `books`.
    pub fn with_books(books: &[Book]) -> Result<Self, StoreError> {
        Ok(Self::from_raw(encode(books)?))
    }

    /// The persisted bytes, or None if nothing has been saved.
    pub fn raw(&self) -> Result<Option<Vec<u8>>, StoreError> {
        let contents = self
            .contents
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(contents.clone())
    }
}

impl BookStore for InMemoryBookStore {
    fn load(&self) -> Result<Vec<Book>, StoreError> {
        let contents = self
            .contents
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;

        Ok(match contents.as_deref() {
            Some(bytes) => decode(bytes, "memory"),
            None => Vec::new(),
        })
    }

    fn save(&self, books: &[Book]) -> Result<(), StoreError> {
        let bytes = encode(books)?;
        let mut contents = self
            .contents
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        *contents = Some(bytes);
        Ok(())
    }
}
