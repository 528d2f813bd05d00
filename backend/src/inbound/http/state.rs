//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and services and remain testable without the
//! in-memory store.

use std::sync::Arc;

use crate::domain::AccountService;
use crate::domain::ports::BookRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub books: Arc<dyn BookRepository>,
    pub accounts: AccountService,
}

impl HttpState {
    /// Bundle the book store and the account service.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use books::domain::AccountService;
    /// use books::inbound::http::state::HttpState;
    /// use books::outbound::credentials::BcryptVerifier;
    /// use books::outbound::memory::{InMemoryBookRepository, InMemoryUserRepository};
    ///
    /// let accounts = AccountService::new(
    ///     Arc::new(InMemoryUserRepository::new(Vec::new())),
    ///     Arc::new(BcryptVerifier),
    /// );
    /// let state = HttpState::new(Arc::new(InMemoryBookRepository::seeded()), accounts);
    /// let _books = state.books.clone();
    /// ```
    pub fn new(books: Arc<dyn BookRepository>, accounts: AccountService) -> Self {
        Self { books, accounts }
    }
}
