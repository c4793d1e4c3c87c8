//! Book records and the raw input they are built from.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::BookError;

/// A single tracked book, as persisted in the collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub author: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub rating: i64,
}

// Older writers stored a missing form field as `null`.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Untyped create request, shaped like an HTML form submission.
///
/// `completed` is a checkbox: any value at all (even an empty one) means the
/// box was ticked. `rating` arrives as text and defaults to `0` when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub completed: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
}

/// Validated fields for a new book. The id is assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub completed: bool,
    pub rating: i64,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            completed: false,
            rating: 0,
        }
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn rating(mut self, rating: i64) -> Self {
        self.rating = rating;
        self
    }

    pub(crate) fn into_book(self, id: u64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            completed: self.completed,
            rating: self.rating,
        }
    }
}

impl TryFrom<BookForm> for NewBook {
    type Error = BookError;

    fn try_from(form: BookForm) -> Result<Self, Self::Error> {
        let title = form
            .title
            .ok_or_else(|| BookError::InvalidInput("title is required".into()))?;
        let author = form
            .author
            .ok_or_else(|| BookError::InvalidInput("author is required".into()))?;
        let rating = match form.rating.as_deref() {
            None => 0,
            Some(raw) => parse_rating(raw)?,
        };

        Ok(NewBook {
            title,
            author,
            completed: form.completed.is_some(),
            rating,
        })
    }
}

/// Parse a text rating. Surrounding whitespace and a leading sign are accepted;
/// anything else that is not a whole number is rejected.
pub fn parse_rating(raw: &str) -> Result<i64, BookError> {
    raw.trim().parse::<i64>().map_err(|_| {
        BookError::InvalidInput(format!("rating must be an integer, got {:?}", raw))
    })
}

/// Next id for a collection: one past the largest id, or 1 when empty.
pub fn next_id(books: &[Book]) -> Result<u64, BookError> {
    match books.iter().map(|b| b.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| BookError::InvalidInput("id space exhausted".into())),
    }
}
