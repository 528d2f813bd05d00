//! Authentication inputs: login credentials and security answers.
//!
//! Inbound adapters check payload shape; these types only carry the values
//! once the shape is known to be right.

use zeroize::Zeroizing;

/// Field names a login payload must carry, no more and no fewer.
pub const LOGIN_FIELDS: [&str; 2] = ["email", "password"];

/// Login credentials submitted by a client.
///
/// The plaintext password is zeroised on drop.
///
/// # Examples
/// ```
/// use books::domain::LoginCredentials;
///
/// let creds = LoginCredentials::new("harry@hogwarts.edu", "potter");
/// assert_eq!(creds.email(), "harry@hogwarts.edu");
/// assert_eq!(creds.password(), "potter");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Wrap an email/password pair. Values are used verbatim.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Email used for the user lookup.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plaintext password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Ordered answers submitted for a user's security questions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SecurityAnswers(Vec<String>);

impl SecurityAnswers {
    /// Wrap answers in submission order.
    pub fn new(answers: Vec<String>) -> Self {
        Self(answers)
    }

    /// Answer at `index`, if submitted.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }
}
