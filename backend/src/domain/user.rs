//! User records used for authentication checks.
//!
//! Users are seeded at start-up and never mutated through the API.

use super::SecurityAnswers;

/// Number of security questions every user carries.
pub const SECURITY_QUESTION_COUNT: usize = 3;

/// One stored security question.
///
/// The question text is informational only; verification compares answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityQuestion {
    question: Option<String>,
    answer: String,
}

impl SecurityQuestion {
    /// Question with its prompt text.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: Some(question.into()),
            answer: answer.into(),
        }
    }

    /// Question stored without prompt text.
    pub fn answer_only(answer: impl Into<String>) -> Self {
        Self {
            question: None,
            answer: answer.into(),
        }
    }

    /// Prompt text, when known.
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref()
    }

    /// Expected answer.
    pub fn answer(&self) -> &str {
        self.answer.as_str()
    }
}

/// A user account identified by email.
///
/// ## Invariants
/// - `password_hash` is a one-way hash; the plaintext is never stored.
/// - `security_questions` holds [`SECURITY_QUESTION_COUNT`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    email: String,
    password_hash: String,
    security_questions: [SecurityQuestion; SECURITY_QUESTION_COUNT],
}

impl User {
    /// Assemble a user from an already hashed password.
    pub fn new(
        email: impl Into<String>,
        password_hash: impl Into<String>,
        security_questions: [SecurityQuestion; SECURITY_QUESTION_COUNT],
    ) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            security_questions,
        }
    }

    /// Natural key of the account.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Stored password hash.
    pub fn password_hash(&self) -> &str {
        self.password_hash.as_str()
    }

    /// First stored question, with its position, whose answer was not
    /// submitted verbatim.
    ///
    /// Matching is exact (case-sensitive, untrimmed). A missing answer counts
    /// as a mismatch; answers past the stored ones are ignored.
    pub fn first_mismatch(
        &self,
        submitted: &SecurityAnswers,
    ) -> Option<(usize, &SecurityQuestion)> {
        self.security_questions
            .iter()
            .enumerate()
            .find(|(index, stored)| submitted.get(*index) != Some(stored.answer()))
    }
}
