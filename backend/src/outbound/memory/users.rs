//! In-memory user repository and start-up seed.
//!
//! Seed passwords are hashed when the repository is built, so the plaintext
//! never sits in the store.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{RepositoryError, UserRepository};
use crate::domain::{SecurityQuestion, User};

use super::Collection;

struct SeedUser {
    email: &'static str,
    password: &'static str,
    questions: [(Option<&'static str>, &'static str); 3],
}

const SEED_USERS: [SeedUser; 2] = [
    SeedUser {
        email: "harry@hogwarts.edu",
        password: "potter",
        questions: [
            (Some("What is your pet's name?"), "Hedwig"),
            (Some("What is your favorite book?"), "Quidditch Through the Ages"),
            (Some("What is your mother's maiden name?"), "Evans"),
        ],
    },
    SeedUser {
        email: "hermione@hogwarts.edu",
        password: "granger",
        questions: [
            (None, "Crookshanks"),
            (None, "Hogwarts, A History"),
            (None, "Granger"),
        ],
    },
];

fn seed_question((question, answer): (Option<&'static str>, &'static str)) -> SecurityQuestion {
    match question {
        Some(text) => SecurityQuestion::new(text, answer),
        None => SecurityQuestion::answer_only(answer),
    }
}

/// Build the seed users, hashing each password with bcrypt at `cost`.
///
/// # Errors
/// Returns the bcrypt error when `cost` is outside bcrypt's supported range.
pub fn seed_users(cost: u32) -> Result<Vec<User>, bcrypt::BcryptError> {
    SEED_USERS
        .iter()
        .map(|seed| {
            let hash = bcrypt::hash(seed.password, cost)?;
            Ok(User::new(seed.email, hash, seed.questions.map(seed_question)))
        })
        .collect()
}

/// [`UserRepository`] over a [`Collection`] keyed by email.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Collection<User>,
}

impl InMemoryUserRepository {
    /// Repository holding `users`.
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Collection::new("users", users),
        }
    }

    /// Repository holding the seed users hashed at `cost`.
    ///
    /// # Errors
    /// See [`seed_users`].
    pub fn seeded(cost: u32) -> Result<Self, bcrypt::BcryptError> {
        let users = seed_users(cost)?;
        debug!(count = users.len(), cost, "seeded user store");
        Ok(Self::new(users))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        self.users.find_one(|user| user.email() == email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SecurityAnswers;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn seeded_users_store_hashes_not_plaintext() {
        let repo = InMemoryUserRepository::seeded(4).expect("seed");
        let harry = repo
            .find_by_email("harry@hogwarts.edu")
            .await
            .expect("harry is seeded");
        assert_ne!(harry.password_hash(), "potter");
        assert!(bcrypt::verify("potter", harry.password_hash()).expect("valid hash"));
        let wrong_first = SecurityAnswers::new(vec![
            "Scabbers".to_owned(),
            "Quidditch Through the Ages".to_owned(),
            "Evans".to_owned(),
        ]);
        let (position, question) = harry.first_mismatch(&wrong_first).expect("mismatch");
        assert_eq!(position, 0);
        assert_eq!(question.answer(), "Hedwig");
        assert_eq!(question.question(), Some("What is your pet's name?"));
    }

    #[rstest]
    #[tokio::test]
    async fn email_lookup_is_exact() {
        let repo = InMemoryUserRepository::seeded(4).expect("seed");
        assert_eq!(
            repo.find_by_email("HARRY@hogwarts.edu").await,
            Err(RepositoryError::NoMatch)
        );
    }

    #[rstest]
    fn invalid_cost_is_reported() {
        assert!(seed_users(99).is_err());
    }
}
