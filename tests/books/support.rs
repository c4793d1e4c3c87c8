use bookshelf::{BookForm, BookService, InMemoryBookStore, JsonFileStore};
use tempfile::TempDir;

pub fn in_memory() -> BookService<InMemoryBookStore> {
    BookService::new(InMemoryBookStore::new())
}

/// A file-backed service in a fresh temp dir. Keep the `TempDir` alive for
/// the duration of the test.
pub fn file_backed() -> (TempDir, BookService<JsonFileStore>) {
    let dir = tempfile::tempdir().unwrap();
    let service = BookService::new(JsonFileStore::new(dir.path().join("books.json")));
    (dir, service)
}

pub fn form(title: &str, author: &str, completed: bool, rating: Option<&str>) -> BookForm {
    BookForm {
        title: Some(title.to_string()),
        author: Some(author.to_string()),
        completed: completed.then(|| "on".to_string()),
        rating: rating.map(str::to_string),
    }
}
