//! In-memory book inventory.
//!
//! [`BookStore`] owns the collection and enforces its two invariants:
//! ids are unique (assigned as `max present id + 1`, never by the caller)
//! and insertion order is preserved. All access goes through the store's
//! `RwLock` — readers may run concurrently, writers are serialized — so the
//! store can be shared across request handlers behind an `Arc` without any
//! global state.
//!
//! Durability is explicitly out of scope: the collection lives and dies
//! with the process.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

// ── Book ──────────────────────────────────────────────────────────────────────

/// A single inventory record. `id` is store-assigned and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub year: i32,
}

/// Payload for [`BookStore::create`].
///
/// All fields are optional at the type level so that presence can be
/// validated explicitly instead of relying on deserializer defaults;
/// `create` rejects any missing or empty field.
#[derive(Debug, Default, Deserialize)]
pub struct NewBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
}

/// Payload for [`BookStore::update`] — a merge, not a replace.
///
/// Fields left `None` keep their current value on the stored record.
#[derive(Debug, Default, Deserialize)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
}

// ── BookStore ─────────────────────────────────────────────────────────────────

/// Owner of the book collection.
pub struct BookStore {
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }

    /// A store pre-loaded with the two demo records (ids 1 and 2).
    pub fn seeded() -> Self {
        Self {
            books: RwLock::new(vec![
                Book {
                    id: 1,
                    title: "1984".into(),
                    author: "George Orwell".into(),
                    year: 1949,
                },
                Book {
                    id: 2,
                    title: "Brave New World".into(),
                    author: "Aldous Huxley".into(),
                    year: 1932,
                },
            ]),
        }
    }

    /// All books in insertion order.
    pub fn list(&self) -> Result<Vec<Book>, AppError> {
        let books = self
            .books
            .read()
            .map_err(|_| AppError::Store("book store lock poisoned".into()))?;
        Ok(books.clone())
    }

    /// The book with `id`, or `NotFound`.
    pub fn get(&self, id: u64) -> Result<Book, AppError> {
        let books = self
            .books
            .read()
            .map_err(|_| AppError::Store("book store lock poisoned".into()))?;
        books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("no book with id {id}")))
    }

    /// Append a new book with the next id and return it.
    ///
    /// All three fields must be present and title/author non-empty;
    /// otherwise `InvalidInput` and the collection is untouched. The id is
    /// `max present id + 1` (1 for an empty store) — deleting books can
    /// leave id gaps but a collision is impossible.
    pub fn create(&self, new: NewBook) -> Result<Book, AppError> {
        let title = required_text(new.title, "title")?;
        let author = required_text(new.author, "author")?;
        let year = new
            .year
            .ok_or_else(|| AppError::InvalidInput("missing required field: year".into()))?;

        let mut books = self
            .books
            .write()
            .map_err(|_| AppError::Store("book store lock poisoned".into()))?;
        let id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let book = Book {
            id,
            title,
            author,
            year,
        };
        books.push(book.clone());
        Ok(book)
    }

    /// Merge `patch` into the book with `id` and return the result.
    ///
    /// Absent patch fields keep their prior value; the id never changes.
    pub fn update(&self, id: u64, patch: BookPatch) -> Result<Book, AppError> {
        let mut books = self
            .books
            .write()
            .map_err(|_| AppError::Store("book store lock poisoned".into()))?;
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("no book with id {id}")))?;

        if let Some(title) = patch.title {
            book.title = title;
        }
        if let Some(author) = patch.author {
            book.author = author;
        }
        if let Some(year) = patch.year {
            book.year = year;
        }
        Ok(book.clone())
    }

    /// Remove the book with `id`, or `NotFound`.
    pub fn delete(&self, id: u64) -> Result<(), AppError> {
        let mut books = self
            .books
            .write()
            .map_err(|_| AppError::Store("book store lock poisoned".into()))?;
        let pos = books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("no book with id {id}")))?;
        books.remove(pos);
        Ok(())
    }

    /// Number of books currently stored.
    pub fn len(&self) -> Result<usize, AppError> {
        let books = self
            .books
            .read()
            .map_err(|_| AppError::Store("book store lock poisoned".into()))?;
        Ok(books.len())
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract a required non-empty text field or signal `InvalidInput`.
fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        Some(_) => Err(AppError::InvalidInput(format!(
            "field must not be empty: {field}"
        ))),
        None => Err(AppError::InvalidInput(format!(
            "missing required field: {field}"
        ))),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
