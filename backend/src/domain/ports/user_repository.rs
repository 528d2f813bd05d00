//! Port abstraction for user lookups.
use async_trait::async_trait;

use crate::domain::User;

use super::RepositoryError;

/// Read-only user persistence port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the first user whose email equals `email` exactly.
    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError>;
}
