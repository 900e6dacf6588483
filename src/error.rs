use thiserror::Error;

/// Errors that can occur while creating or rendering a user identity.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IdentityError {
    /// The operating-system random source could not be read. No identifier
    /// was produced and no fallback is attempted.
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),
    #[error("User id already assigned: {0}")]
    IdAlreadyAssigned(String),
    #[error("User serialization error: {0}")]
    Serialization(String),
}

impl From<rand::Error> for IdentityError {
    fn from(err: rand::Error) -> Self {
        IdentityError::EntropyUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for IdentityError {
    fn from(err: serde_json::Error) -> Self {
        IdentityError::Serialization(err.to_string())
    }
}
