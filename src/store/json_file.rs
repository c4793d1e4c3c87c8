//! JsonFileStore - a single JSON file holding the whole collection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{decode, encode, BookStore};
use crate::book::Book;
use crate::error::StoreError;

/// Book store backed by one JSON file.
///
/// The file does not need to exist; it is created on the first save.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl BookStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Book>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no book file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let books = decode(&bytes, &self.path.to_string_lossy());
        debug!(path = %self.path.display(), count = books.len(), "loaded books");
        Ok(books)
    }

    fn save(&self, books: &[Book]) -> Result<(), StoreError> {
        let bytes = encode(books)?;
        fs::write(&self.path, bytes).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), count = books.len(), "saved books");
        Ok(())
    }
}
