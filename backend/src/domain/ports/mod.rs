//! Domain ports and supporting types for the hexagonal boundary.

mod book_repository;
mod credential_verifier;
mod repository_error;
mod user_repository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::BookRepository;
#[cfg(test)]
pub use credential_verifier::MockCredentialVerifier;
pub use credential_verifier::CredentialVerifier;
pub use repository_error::RepositoryError;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
