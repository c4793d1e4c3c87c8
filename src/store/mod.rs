//! Book stores - whole-collection persistence.
//!
//! A store reads the full collection at the start of an operation and writes
//! it back in full at the end. There is no partial update and no caching
//! between calls.
//!
//! ## Example
//!
//! ```ignore
//! use bookshelf::{BookStore, JsonFileStore};
//!
//! let store = JsonFileStore::new("books.json");
//! let mut books = store.load()?;
//! books.retain(|b| b.id != 2);
//! store.save(&books)?;
//! ```

mod in_memory;
mod json_file;
mod store;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::warn;

use crate::book::Book;
use crate::error::StoreError;

pub use in_memory::InMemoryBookStore;
pub use json_file::JsonFileStore;
pub use store::BookStore;

/// Decode a persisted collection.
///
/// Blank or unparsable content decodes to an empty collection and logs a
/// warning naming `source`; it is never an error.
pub(crate) fn decode(bytes: &[u8], source: &str) -> Vec<Book> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        warn!(source, "book storage is empty, starting with an empty collection");
        return Vec::new();
    }

    match serde_json::from_slice(bytes) {
        Ok(books) => books,
        Err(e) => {
            warn!(
                source,
                error = %e,
                "book storage is not valid JSON, starting with an empty collection"
            );
            Vec::new()
        }
    }
}

/// Encode a collection as JSON indented with four spaces.
pub(crate) fn encode(books: &[Book]) -> Result<Vec<u8>, StoreError> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    books
        .serialize(&mut ser)
        .map_err(|e| StoreError::Serde(e.to_string()))?;
    Ok(out)
}
