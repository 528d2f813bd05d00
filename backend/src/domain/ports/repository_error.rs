//! Errors shared by the record repository ports.

use thiserror::Error;

use crate::domain::Error;

/// Failure raised by a repository adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No record matched the lookup key.
    #[error("No matching item found")]
    NoMatch,
    /// Backing store could not serve the request.
    #[error("record store unavailable: {message}")]
    Unavailable { message: String },
}

impl RepositoryError {
    /// Helper for backend failures.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// True when the failure is a missing record.
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }
}

/// Generic propagation: a missing record becomes a 404 carrying the store's
/// own message; anything else is internal.
impl From<RepositoryError> for Error {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NoMatch => Error::not_found(value.to_string()),
            RepositoryError::Unavailable { .. } => Error::internal(value.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn no_match_maps_to_not_found_with_store_message() {
        let error = Error::from(RepositoryError::NoMatch);
        assert_eq!(error.code(), ErrorCode::NotFound);
        assert_eq!(error.message(), "No matching item found");
    }

    #[rstest]
    fn unavailable_maps_to_internal() {
        let error = Error::from(RepositoryError::unavailable("lock lost"));
        assert_eq!(error.code(), ErrorCode::InternalError);
        assert_eq!(error.message(), "record store unavailable: lock lost");
    }
}
