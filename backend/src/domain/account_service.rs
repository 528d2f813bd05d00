//! Account checks: password login and security-question verification.
//!
//! Both flows look the user up first; a missing user is a 404, a wrong secret
//! a 401. Shape validation already happened in the inbound adapter.

use std::sync::Arc;

use tracing::{debug, info};

use super::ports::{CredentialVerifier, RepositoryError, UserRepository};
use super::{Error, LoginCredentials, SecurityAnswers, User};

/// Message returned when a user lookup fails.
pub const USER_NOT_FOUND_MESSAGE: &str = "Not Found";
/// Message returned when a secret does not match.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Domain service over the user store and the credential verifier.
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    verifier: Arc<dyn CredentialVerifier>,
}

impl AccountService {
    /// Wire the service to its ports.
    pub fn new(users: Arc<dyn UserRepository>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { users, verifier }
    }

    async fn lookup(&self, email: &str) -> Result<User, Error> {
        self.users.find_by_email(email).await.map_err(|err| match err {
            RepositoryError::NoMatch => {
                debug!(email, "user lookup found no match");
                Error::not_found(USER_NOT_FOUND_MESSAGE)
            }
            other => Error::from(other),
        })
    }

    /// Check an email/password pair.
    pub async fn authenticate(&self, credentials: &LoginCredentials) -> Result<(), Error> {
        let user = self.lookup(credentials.email()).await?;
        if self
            .verifier
            .verify(credentials.password(), user.password_hash())
            .await
        {
            info!(email = user.email(), "user authenticated");
            Ok(())
        } else {
            info!(email = user.email(), "password rejected");
            Err(Error::unauthorized(UNAUTHORIZED_MESSAGE))
        }
    }

    /// Check submitted answers against the user's security questions by
    /// position.
    pub async fn verify_security_answers(
        &self,
        email: &str,
        answers: &SecurityAnswers,
    ) -> Result<(), Error> {
        let user = self.lookup(email).await?;
        match user.first_mismatch(answers) {
            None => {
                info!(email = user.email(), "security questions answered");
                Ok(())
            }
            Some((position, question)) => {
                info!(
                    email = user.email(),
                    position,
                    prompt = question.question().unwrap_or("-"),
                    "security answers rejected"
                );
                Err(Error::unauthorized(UNAUTHORIZED_MESSAGE))
            }
        }
    }
}
