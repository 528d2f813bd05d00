//! Port abstraction for the book catalogue store.
//!
//! HTTP handlers depend on this trait only, so tests can swap the in-memory
//! adapter for a mock and a real database can slot in later.

use async_trait::async_trait;

use crate::domain::{Book, BookId};

use super::RepositoryError;

/// Book persistence port.
///
/// Every method is atomic with respect to concurrent callers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books in insertion order.
    async fn list(&self) -> Result<Vec<Book>, RepositoryError>;

    /// First book whose id equals `id`.
    async fn find_by_id(&self, id: BookId) -> Result<Book, RepositoryError>;

    /// Append a book. Duplicate ids are accepted.
    async fn insert(&self, book: Book) -> Result<Book, RepositoryError>;

    /// Replace the first book whose id equals `id` and return the old record.
    async fn update(&self, id: BookId, book: Book) -> Result<Book, RepositoryError>;

    /// Remove the first book whose id equals `id`.
    async fn delete(&self, id: BookId) -> Result<(), RepositoryError>;
}
