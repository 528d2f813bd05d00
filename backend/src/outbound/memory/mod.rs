//! In-memory mock database.
//!
//! Each store owns its collection; nothing outside the repository touches the
//! backing vector.

mod books;
mod collection;
mod users;

pub use books::{InMemoryBookRepository, seed_books};
pub use collection::Collection;
pub use users::{InMemoryUserRepository, seed_users};
