use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure reading or writing the persisted collection.
///
/// Missing or unparsable storage is not represented here: stores recover from
/// both by treating the collection as empty.
#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
    Serde(String),
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, source } => {
                write!(f, "storage i/o error on {}: {}", path.display(), source)
            }
            StoreError::Serde(msg) => write!(f, "storage serialization error: {}", msg),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Error type for book operations.
#[derive(Debug)]
pub enum BookError {
    /// Request fields could not be coerced into a book.
    InvalidInput(String),
    /// Storage failure.
    Store(StoreError),
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            BookError::Store(e) => write!(f, "store error: {}", e),
        }
    }
}

impl Error for BookError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BookError::Store(e) => Some(e),
            BookError::InvalidInput(_) => None,
        }
    }
}

impl From<StoreError> for BookError {
    fn from(err: StoreError) -> Self {
        BookError::Store(err)
    }
}

impl BookError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            BookError::InvalidInput(_) => 422,
            BookError::Store(_) => 500,
        }
    }
}
