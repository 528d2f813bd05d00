//! Builders wiring the in-memory adapters into HTTP state.

use std::sync::Arc;

use crate::domain::AccountService;
use crate::inbound::http::state::HttpState;
use crate::outbound::credentials::BcryptVerifier;
use crate::outbound::memory::{InMemoryBookRepository, InMemoryUserRepository};

/// Build HTTP state over freshly seeded in-memory stores.
///
/// Seed passwords are hashed with bcrypt at `hash_cost`.
///
/// # Errors
/// Returns the bcrypt error when `hash_cost` is out of range.
pub fn build_http_state(hash_cost: u32) -> Result<HttpState, bcrypt::BcryptError> {
    let users = InMemoryUserRepository::seeded(hash_cost)?;
    let accounts = AccountService::new(Arc::new(users), Arc::new(BcryptVerifier));
    Ok(HttpState::new(
        Arc::new(InMemoryBookRepository::seeded()),
        accounts,
    ))
}
