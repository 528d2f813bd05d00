//! Book records held by the catalogue.

use serde::{Deserialize, Serialize};

/// Field names a book payload must carry, no more and no fewer.
pub const BOOK_FIELDS: [&str; 3] = ["id", "title", "author"];

/// Caller-assigned book identifier.
pub type BookId = i64;

/// A book in the catalogue.
///
/// The identifier is supplied by the caller on create; the store never
/// assigns one.
///
/// # Examples
/// ```
/// use books::domain::Book;
///
/// let book = Book::new(6, "The Hobbit", "J. R. R. Tolkien");
/// assert_eq!(book.id, 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
}

impl Book {
    /// Build a book from its parts.
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
        }
    }
}

/// Response body returned after a book is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedBook {
    pub id: BookId,
}
