//! In-memory book repository.

use async_trait::async_trait;

use crate::domain::ports::{BookRepository, RepositoryError};
use crate::domain::{Book, BookId};

use super::Collection;

/// Books present when the process starts.
pub fn seed_books() -> Vec<Book> {
    vec![
        Book::new(1, "The Fellowship of the Ring", "J.R.R. Tolkien"),
        Book::new(2, "Harry Potter and the Sorcerer's Stone", "J.K. Rowling"),
        Book::new(3, "The Two Towers", "J.R.R. Tolkien"),
        Book::new(4, "Harry Potter and the Chamber of Secrets", "J.K. Rowling"),
        Book::new(5, "The Return of the King", "J.R.R. Tolkien"),
    ]
}

/// [`BookRepository`] over a [`Collection`] keyed by `id`.
#[derive(Debug)]
pub struct InMemoryBookRepository {
    books: Collection<Book>,
}

impl InMemoryBookRepository {
    /// Repository holding `books`.
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Collection::new("books", books),
        }
    }

    /// Repository holding [`seed_books`].
    pub fn seeded() -> Self {
        Self::new(seed_books())
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list(&self) -> Result<Vec<Book>, RepositoryError> {
        Ok(self.books.find().await)
    }

    async fn find_by_id(&self, id: BookId) -> Result<Book, RepositoryError> {
        self.books.find_one(|book| book.id == id).await
    }

    async fn insert(&self, book: Book) -> Result<Book, RepositoryError> {
        Ok(self.books.insert_one(book).await)
    }

    async fn update(&self, id: BookId, book: Book) -> Result<Book, RepositoryError> {
        self.books.update_one(|existing| existing.id == id, book).await
    }

    async fn delete(&self, id: BookId) -> Result<(), RepositoryError> {
        self.books.delete_one(|book| book.id == id).await
    }
}
